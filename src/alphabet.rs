// SPDX-License-Identifier: PMPL-1.0-or-later

//! Phonetic alphabet tables.
//!
//! A table holds 36 words: indices 0..=25 for the letters a..=z and
//! 26..=35 for the digits 0..=9. Tables are immutable once built.

use crate::error::{NpAlphaError, Result};
use crate::types::CharClass;
use std::fs;
use std::path::Path;

/// Number of words in every table
pub const TABLE_SIZE: usize = 36;

/// Index of the word for digit `0`
pub const DIGIT_OFFSET: usize = 26;

/// NATO phonetic alphabet with ITU digit pronunciations
pub const NATO: [&str; TABLE_SIZE] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliett",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
    "uniform", "victor", "whiskey", "x-ray", "yankee", "zulu", "zero", "one", "two", "tree",
    "fower", "fife", "six", "seven", "eight", "niner",
];

/// Where a table came from, for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetSource {
    BuiltIn,
    /// Built from in-memory text
    Inline,
    File(std::path::PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    words: Box<[String]>,
    source: AlphabetSource,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::nato()
    }
}

impl Alphabet {
    pub fn nato() -> Self {
        Self {
            words: NATO.iter().map(|word| word.to_string()).collect(),
            source: AlphabetSource::BuiltIn,
        }
    }

    /// Load a word list from `path`.
    ///
    /// The whole file is read and the handle dropped before returning.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| NpAlphaError::AlphabetFile {
            path: path.to_path_buf(),
            source,
        })?;
        let alphabet =
            Self::from_words(&content).ok_or_else(|| NpAlphaError::AlphabetTooShort {
                path: path.to_path_buf(),
                found: content.split_whitespace().count(),
            })?;
        Ok(alphabet.with_source(AlphabetSource::File(path.to_path_buf())))
    }

    /// Build a table from the first 36 whitespace-separated tokens of `text`.
    ///
    /// Returns `None` when `text` holds fewer than 36 tokens.
    pub fn from_words(text: &str) -> Option<Self> {
        let words: Box<[String]> = text
            .split_whitespace()
            .take(TABLE_SIZE)
            .map(str::to_string)
            .collect();
        if words.len() < TABLE_SIZE {
            return None;
        }
        Some(Self {
            words,
            source: AlphabetSource::Inline,
        })
    }

    fn with_source(mut self, source: AlphabetSource) -> Self {
        self.source = source;
        self
    }

    pub fn source(&self) -> &AlphabetSource {
        &self.source
    }

    /// Word at `index`, if in range.
    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Word for an alphanumeric byte, or `None` for anything else.
    pub fn lookup(&self, byte: u8) -> Option<&str> {
        CharClass::of(byte).index().and_then(|index| self.word(index))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
