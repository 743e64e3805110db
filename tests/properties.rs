use proptest::prelude::*;

fn alphabet_char() -> impl Strategy<Value = char> {
    prop_oneof![
        proptest::char::range('a', 'z'),
        proptest::char::range('A', 'Z'),
        proptest::char::range('0', '9'),
        proptest::sample::select(vec!['!', '"', '#', '€', '%', '&', '/', '(', ')', '=']),
    ]
}

fn alphabet_string(max_chars: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(alphabet_char(), 0..=max_chars)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_restores_the_original(input in alphabet_string(1000)) {
        let encoded = padrot::encode(&input).unwrap();
        prop_assert_eq!(encoded.chars().count(), input.chars().count());
        prop_assert_eq!(padrot::decode(&encoded).unwrap(), input);
    }

    #[test]
    fn output_stays_inside_the_alphabet(input in alphabet_string(200)) {
        let encoded = padrot::encode(&input).unwrap();
        for c in encoded.chars() {
            prop_assert!(padrot::alphabet::is_allowed(c), "output char {:?} outside alphabet", c);
        }
    }
}
