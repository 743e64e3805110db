//! The padded substitution transform.
//!
//! Every accepted call processes exactly `MAX_INPUT_CHARS` slots, padding
//! short inputs with `FILL_CHAR` and truncating the result afterwards, so the
//! per-character workload does not vary with input length. Only the result is
//! sliced, never the work. Validation is interleaved with transformation and
//! aborts at the first disallowed character; the failure path is exempt from
//! the timing contract.

use crate::alphabet::{self, FILL_CHAR, MAX_INPUT_CHARS};
use crate::error::Error;

/// A letter split into the two facts the transform needs: its lowercase form
/// and whether the original was uppercase.
struct LetterForm {
    lower: u8,
    was_upper: bool,
}

impl LetterForm {
    /// Classify an alphabetic character. Letters whose lowercase form is not
    /// `a`-`z` (any non-ASCII letter) are outside the alphabet.
    fn classify(c: char, position: usize) -> Result<Self, Error> {
        if !c.is_ascii_alphabetic() {
            return Err(Error::UnsupportedChar { found: c, position });
        }
        Ok(Self {
            lower: c.to_ascii_lowercase() as u8,
            was_upper: c.is_ascii_uppercase(),
        })
    }

    /// Rotate 13 positions and emit in the opposite case of the original.
    fn substitute(&self) -> char {
        let rotated = alphabet::rotate_lower(self.lower);
        if self.was_upper {
            rotated as char
        } else {
            rotated.to_ascii_uppercase() as char
        }
    }
}

fn transform_slot(c: char, position: usize) -> Result<char, Error> {
    if c.is_alphabetic() {
        Ok(LetterForm::classify(c, position)?.substitute())
    } else {
        alphabet::symbol_partner(c).ok_or(Error::UnsupportedChar { found: c, position })
    }
}

pub(crate) fn transform(input: &str) -> Result<String, Error> {
    let length = input.chars().count();
    if length > MAX_INPUT_CHARS {
        return Err(Error::InputTooLong {
            length,
            max: MAX_INPUT_CHARS,
        });
    }

    let mut chars = input.chars();
    let mut out = String::with_capacity(MAX_INPUT_CHARS);
    // Bytes of `out` that belong to the caller's characters; everything past
    // this mark is transformed padding and is truncated away below.
    let mut keep_bytes = 0;
    for position in 0..MAX_INPUT_CHARS {
        let c = chars.next().unwrap_or(FILL_CHAR);
        out.push(transform_slot(c, position)?);
        if position < length {
            keep_bytes = out.len();
        }
    }
    out.truncate(keep_bytes);
    Ok(out)
}

/// Encode a string over the cipher alphabet.
///
/// Returns the substituted string, the same length as the input. Fails with a
/// value-kind error if the input is longer than `MAX_INPUT_CHARS` or contains
/// a character outside the alphabet.
pub fn encode(input: &str) -> Result<String, Error> {
    transform(input)
}

/// Decode a string over the cipher alphabet.
///
/// The transform is an involution, so decoding is the same substitution as
/// encoding.
pub fn decode(input: &str) -> Result<String, Error> {
    transform(input)
}
