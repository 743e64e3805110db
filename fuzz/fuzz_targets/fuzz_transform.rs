#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The transform must never panic: arbitrary bytes either fail UTF-8
    // validation here or come back as a structured error.
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };

    match padrot::encode(input) {
        Ok(encoded) => {
            // Accepted inputs must round-trip and preserve length.
            assert_eq!(encoded.chars().count(), input.chars().count());
            assert_eq!(padrot::decode(&encoded).unwrap(), input);
        }
        Err(err) => {
            // String input can only be rejected for its value, never its type.
            assert_eq!(err.kind(), padrot::ErrorKind::Value);
        }
    }
});
