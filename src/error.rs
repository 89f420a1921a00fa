// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for npalpha.
//!
//! Every variant is fatal: the binary reports it on stderr and exits
//! non-zero before (or instead of) converting any further input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NpAlphaError {
    /// A format option was given a value that names no known policy.
    #[error("{value:?} is not a valid {option} format")]
    InvalidPolicyArgument { option: &'static str, value: String },

    /// A profile sets options that cannot apply together.
    #[error("profile sets {setting}, which needs case: follow, but has {conflict}")]
    ConflictingPolicy { setting: String, conflict: String },

    /// The alternate alphabet could not be opened or read.
    #[error("cannot read alphabet file {}: {source}", path.display())]
    AlphabetFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The alternate alphabet holds fewer words than the table needs.
    #[error(
        "alphabet file {} has {found} words, need at least {}",
        path.display(),
        crate::alphabet::TABLE_SIZE
    )]
    AlphabetTooShort { path: PathBuf, found: usize },

    /// A profile file could not be read or parsed.
    #[error("invalid profile {}: {message}", path.display())]
    Profile { path: PathBuf, message: String },

    /// Buffer space for a converted line could not be reserved.
    #[error("memory allocation error: could not reserve {requested} bytes")]
    ResourceExhaustion { requested: usize },

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, NpAlphaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = NpAlphaError::InvalidPolicyArgument {
            option: "follow",
            value: "sideways".to_string(),
        };
        assert_eq!(err.to_string(), "\"sideways\" is not a valid follow format");

        let err = NpAlphaError::AlphabetTooShort {
            path: PathBuf::from("words.txt"),
            found: 12,
        };
        assert_eq!(
            err.to_string(),
            "alphabet file words.txt has 12 words, need at least 36"
        );
    }
}
