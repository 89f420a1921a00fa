// SPDX-License-Identifier: PMPL-1.0-or-later

//! Casing of phonetic words.
//!
//! `format` always builds a fresh `String`; table entries are only ever
//! borrowed, so one lookup can never change what the next lookup sees.

use crate::types::{FollowCase, FormatPolicy};

/// Apply `policy` to `word`.
///
/// `source_was_upper` only matters for [`FormatPolicy::FollowInputCase`].
/// `Lower`, and follow mode on a lowercase source, keep the table's own casing.
pub fn format(word: &str, source_was_upper: bool, policy: FormatPolicy) -> String {
    match policy {
        FormatPolicy::Lower => word.to_string(),
        FormatPolicy::Upper => to_upper(word),
        FormatPolicy::FirstCapital => to_first_capital(word),
        FormatPolicy::FollowInputCase(secondary) if source_was_upper => match secondary {
            FollowCase::Upper => to_upper(word),
            FollowCase::FirstCapital => to_first_capital(word),
        },
        FormatPolicy::FollowInputCase(_) => word.to_string(),
    }
}

fn to_upper(word: &str) -> String {
    word.to_uppercase()
}

fn to_first_capital(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
