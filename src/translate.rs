// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line translation.
//!
//! A [`Translator`] pairs a resolved [`Configuration`] with an [`Alphabet`]
//! and turns each input byte into a [`Fragment`]. It keeps no state between
//! lines.

use crate::alphabet::Alphabet;
use crate::error::{NpAlphaError, Result};
use crate::format::format;
use crate::types::{CharClass, Configuration};
use std::io::Write;

/// Appended after every converted word
pub const DELIMITER: u8 = b'.';

/// Output produced for one input byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Formatted phonetic word, without its delimiter
    Word(String),
    /// Byte copied through unchanged
    Verbatim(u8),
}

impl Fragment {
    pub fn write_to(&self, out: &mut Vec<u8>) {
        match self {
            Fragment::Word(word) => {
                out.extend_from_slice(word.as_bytes());
                out.push(DELIMITER);
            }
            Fragment::Verbatim(byte) => out.push(*byte),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    config: &'a Configuration,
    alphabet: &'a Alphabet,
}

impl<'a> Translator<'a> {
    pub fn new(config: &'a Configuration, alphabet: &'a Alphabet) -> Self {
        Self { config, alphabet }
    }

    /// Fragment for a single byte.
    pub fn fragment(&self, byte: u8) -> Fragment {
        let (index, source_was_upper, policy) = match CharClass::of(byte) {
            CharClass::Digit(index) => (index, false, self.config.number_policy),
            CharClass::Letter { index, upper } => (index, upper, self.config.letter_policy),
            CharClass::Other => return Fragment::Verbatim(byte),
        };
        match self.alphabet.word(index) {
            Some(word) => Fragment::Word(format(word, source_was_upper, policy)),
            // Unreachable with a 36-word table; pass the byte through rather than panic.
            None => Fragment::Verbatim(byte),
        }
    }

    /// Lazy, in-order fragments for `line`.
    pub fn fragments<'l>(&self, line: &'l [u8]) -> Fragments<'a, 'l> {
        Fragments {
            translator: *self,
            bytes: line.iter(),
        }
    }

    /// Append the translation of `line` to `out`.
    ///
    /// Fails with `ResourceExhaustion` when the buffer cannot grow.
    pub fn translate_into(&self, line: &[u8], out: &mut Vec<u8>) -> Result<()> {
        for fragment in self.fragments(line) {
            let needed = match &fragment {
                Fragment::Word(word) => word.len() + 1,
                Fragment::Verbatim(_) => 1,
            };
            out.try_reserve(needed)
                .map_err(|_| NpAlphaError::ResourceExhaustion {
                    requested: out.len().saturating_add(needed),
                })?;
            fragment.write_to(out);
        }
        Ok(())
    }

    /// Translate `line` and write it to `writer`.
    pub fn write_line<W: Write>(&self, line: &[u8], writer: &mut W) -> Result<usize> {
        let mut out = Vec::new();
        self.translate_into(line, &mut out)?;
        writer.write_all(&out)?;
        Ok(out.len())
    }

    /// Translate a whole line of text.
    pub fn convert_line(&self, line: &str) -> String {
        let mut out = Vec::with_capacity(line.len() * 8);
        for fragment in self.fragments(line.as_bytes()) {
            fragment.write_to(&mut out);
        }
        // Only ASCII bytes are replaced, so multi-byte sequences survive intact.
        String::from_utf8(out)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

/// Iterator returned by [`Translator::fragments`]
#[derive(Debug, Clone)]
pub struct Fragments<'a, 'l> {
    translator: Translator<'a>,
    bytes: std::slice::Iter<'l, u8>,
}

impl Iterator for Fragments<'_, '_> {
    type Item = Fragment;

    fn next(&mut self) -> Option<Fragment> {
        self.bytes.next().map(|&byte| self.translator.fragment(byte))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bytes.size_hint()
    }
}

/// Convenience wrapper around [`Translator::convert_line`].
pub fn convert_line(line: &str, alphabet: &Alphabet, config: &Configuration) -> String {
    Translator::new(config, alphabet).convert_line(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FollowCase, FormatPolicy};

    fn translate(line: &str, config: Configuration) -> String {
        convert_line(line, &Alphabet::nato(), &config)
    }

    #[test]
    fn default_policy_spells_lowercase() {
        assert_eq!(
            translate("Hi 5!", Configuration::default()),
            "hotel.india. fife.!"
        );
    }

    #[test]
    fn empty_and_punctuation_only_lines_echo() {
        assert_eq!(translate("", Configuration::default()), "");
        assert_eq!(translate(" ,;-!\t\n", Configuration::default()), " ,;-!\t\n");
    }

    #[test]
    fn line_terminator_is_preserved() {
        assert_eq!(
            translate("ok\r\n", Configuration::default()),
            "oscar.kilo.\r\n"
        );
    }

    #[test]
    fn follow_upper_mixes_case() {
        let config = Configuration::new(FormatPolicy::FollowInputCase(FollowCase::Upper));
        assert_eq!(translate("Ab", config), "ALPHA.bravo.");
    }

    #[test]
    fn number_policy_overrides_letters() {
        let config =
            Configuration::new(FormatPolicy::Upper).with_number_policy(FormatPolicy::Lower);
        assert_eq!(translate("a1", config), "ALPHA.one.");
    }

    #[test]
    fn digits_never_count_as_uppercase() {
        let config = Configuration::new(FormatPolicy::Lower)
            .with_number_policy(FormatPolicy::FollowInputCase(FollowCase::Upper));
        assert_eq!(translate("7", config), "seven.");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(translate("é1", Configuration::default()), "éone.");
        let config = Configuration::default();
        let alphabet = Alphabet::nato();
        let translator = Translator::new(&config, &alphabet);
        let mut out = Vec::new();
        translator.translate_into(&[0xff, b'a'], &mut out).unwrap();
        assert_eq!(out, b"\xffalpha.");
    }

    #[test]
    fn fragments_follow_input_order() {
        let config = Configuration::default();
        let alphabet = Alphabet::nato();
        let translator = Translator::new(&config, &alphabet);
        let fragments: Vec<Fragment> = translator.fragments(b"b-2").collect();
        assert_eq!(
            fragments,
            vec![
                Fragment::Word("bravo".to_string()),
                Fragment::Verbatim(b'-'),
                Fragment::Word("two".to_string()),
            ]
        );
    }

    #[test]
    fn write_line_reports_bytes_written() {
        let config = Configuration::default();
        let alphabet = Alphabet::nato();
        let mut sink = Vec::new();
        let written = Translator::new(&config, &alphabet)
            .write_line(b"x\n", &mut sink)
            .unwrap();
        assert_eq!(sink, b"x-ray.\n");
        assert_eq!(written, sink.len());
    }
}
