// SPDX-License-Identifier: PMPL-1.0-or-later

//! npalpha — spell text out in a phonetic alphabet.
//!
//! Every ASCII letter and digit of a line is replaced by its word from a
//! 36-entry table (NATO by default) followed by a `.`; every other byte is
//! copied through untouched.
//!
//! PIPELINE:
//! 1. **Config**: raw option names are resolved once into an immutable
//!    [`Configuration`] holding a letter policy and a number policy.
//! 2. **Translate**: each byte is classified, looked up in the [`Alphabet`],
//!    and cased by [`format::format`].
//! 3. **Stream**: lines are read, translated, and flushed one at a time.

pub mod alphabet;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod stream;
pub mod translate;
pub mod types;

pub use alphabet::Alphabet;
pub use error::{NpAlphaError, Result};
pub use translate::{convert_line, Translator};
pub use types::{Configuration, FollowCase, FormatPolicy};
