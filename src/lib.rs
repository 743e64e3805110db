//! padrot library API
//!
//! A fixed-alphabet substitution cipher (ROT13 extended to digits and a small
//! symbol set) whose execution profile does not depend on input length.
//!
//! Timing model:
//! - Every accepted call transforms a padded buffer of exactly 1000 slots and
//!   truncates the result, so two valid inputs of different lengths do the
//!   same work.
//! - Validation failures abort immediately; the failure path is not
//!   time-normalized.
//!
//! The transform is an involution: `decode` is literally `encode`, and
//! `encode(encode(s)) == s` for every accepted `s`. This is obfuscation, not
//! encryption; there is no key.

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod value;

// Re-export commonly used types for convenience
pub use cipher::{decode, encode};
pub use error::{Error, ErrorKind};
