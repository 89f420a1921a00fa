// SPDX-License-Identifier: PMPL-1.0-or-later

//! Verbose diagnostics written to stderr.

use crate::alphabet::{Alphabet, AlphabetSource, NATO};
use crate::stream::LineStats;
use crate::types::Configuration;
use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Ok,
    Info,
    Warn,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Info => "INFO".cyan(),
            Level::Warn => "WARN".yellow(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub label: &'static str,
    pub level: Level,
    pub detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn info(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Info, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    pub fn print(&self) {
        eprintln!("  [{}] {:16} {}", self.level.tag(), self.label, self.detail);
    }
}

/// Describe the resolved configuration and alphabet.
pub fn describe(config: &Configuration, alphabet: &Alphabet) -> Vec<Diagnostic> {
    let mut entries = Vec::new();

    entries.push(match alphabet.source() {
        AlphabetSource::BuiltIn => Diagnostic::ok("alphabet", "built-in NATO table".to_string()),
        AlphabetSource::Inline => Diagnostic::ok("alphabet", "custom word list".to_string()),
        AlphabetSource::File(path) => {
            Diagnostic::ok("alphabet", format!("loaded from {}", path.display()))
        }
    });

    let duplicates = duplicate_words(alphabet);
    if !duplicates.is_empty() {
        entries.push(Diagnostic::warning(
            "alphabet",
            format!("repeated words: {}", duplicates.join(", ")),
        ));
    }
    if matches!(alphabet.source(), AlphabetSource::File(_))
        && alphabet.words().eq(NATO.iter().copied())
    {
        entries.push(Diagnostic::info(
            "alphabet",
            "file matches the built-in table".to_string(),
        ));
    }

    entries.push(Diagnostic::ok("letters", config.letter_policy.to_string()));
    let inherited = if config.number_inherited {
        " (inherited)"
    } else {
        ""
    };
    entries.push(Diagnostic::ok(
        "numbers",
        format!("{}{}", config.number_policy, inherited),
    ));

    entries
}

/// One-line summary of a finished run.
pub fn summary(stats: &LineStats) -> Diagnostic {
    Diagnostic::info(
        "processed",
        format!(
            "{} lines, {} bytes in, {} bytes out",
            stats.lines, stats.input_bytes, stats.output_bytes
        ),
    )
}

pub fn print_all(entries: &[Diagnostic]) {
    eprintln!("{}", "npalpha configuration".bold());
    for entry in entries {
        entry.print();
    }
}

fn duplicate_words(alphabet: &Alphabet) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut repeated = Vec::new();
    for word in alphabet.words() {
        let key = word.to_lowercase();
        if !seen.insert(key.clone()) && !repeated.contains(&key) {
            repeated.push(key);
        }
    }
    repeated
}
