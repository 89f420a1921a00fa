// SPDX-License-Identifier: PMPL-1.0-or-later

//! Option resolution and profile loading.
//!
//! The CLI (or a profile file) produces raw policy names; [`resolve`] turns
//! them into a [`Configuration`] once, before any input is read.

use crate::error::{NpAlphaError, Result};
use crate::types::{Configuration, FollowCase, FormatPolicy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Global letter casing as selected on the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaseChoice {
    #[default]
    Lower,
    Upper,
    FirstCapital,
    /// Follow input case; `None` selects the default secondary.
    Follow(Option<String>),
}

/// Unresolved policy options
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PolicyOptions {
    pub case: CaseChoice,
    /// Number policy name; `None` inherits the letter policy.
    pub numbers: Option<String>,
}

impl PolicyOptions {
    /// Replace fields with any values given explicitly on the command line.
    pub fn with_overrides(mut self, case: Option<CaseChoice>, numbers: Option<String>) -> Self {
        if let Some(case) = case {
            self.case = case;
        }
        if numbers.is_some() {
            self.numbers = numbers;
        }
        self
    }
}

/// Parse a plain policy name (`lower`, `upper`, `first-capital` and aliases).
pub fn parse_policy_name(value: &str) -> Option<FormatPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "lower" | "all-lower" | "all-lowercase" => Some(FormatPolicy::Lower),
        "upper" | "all-upper" | "all-uppercase" => Some(FormatPolicy::Upper),
        "first" | "first-cap" | "first-capital" => Some(FormatPolicy::FirstCapital),
        _ => None,
    }
}

/// Parse the secondary casing for follow-input mode.
pub fn parse_follow_case(value: &str) -> Option<FollowCase> {
    match parse_policy_name(value)? {
        FormatPolicy::Upper => Some(FollowCase::Upper),
        FormatPolicy::FirstCapital => Some(FollowCase::FirstCapital),
        _ => None,
    }
}

/// Parse a global case name, including `follow` / `follow-input`.
pub fn parse_case_choice(value: &str) -> Option<CaseChoice> {
    match value.trim().to_ascii_lowercase().as_str() {
        "follow" | "follow-input" => Some(CaseChoice::Follow(None)),
        _ => match parse_policy_name(value)? {
            FormatPolicy::Lower => Some(CaseChoice::Lower),
            FormatPolicy::Upper => Some(CaseChoice::Upper),
            FormatPolicy::FirstCapital => Some(CaseChoice::FirstCapital),
            FormatPolicy::FollowInputCase(_) => None,
        },
    }
}

/// Resolve raw options into the configuration used for every line.
pub fn resolve(options: &PolicyOptions) -> Result<Configuration> {
    let letter_policy = match &options.case {
        CaseChoice::Lower => FormatPolicy::Lower,
        CaseChoice::Upper => FormatPolicy::Upper,
        CaseChoice::FirstCapital => FormatPolicy::FirstCapital,
        CaseChoice::Follow(None) => FormatPolicy::FollowInputCase(FollowCase::default()),
        CaseChoice::Follow(Some(name)) => FormatPolicy::FollowInputCase(
            parse_follow_case(name).ok_or_else(|| invalid("follow", name))?,
        ),
    };

    let config = Configuration::new(letter_policy);
    match &options.numbers {
        None => Ok(config),
        Some(name) => {
            let number_policy = parse_policy_name(name).ok_or_else(|| invalid("number", name))?;
            Ok(config.with_number_policy(number_policy))
        }
    }
}

fn invalid(option: &'static str, value: &str) -> NpAlphaError {
    NpAlphaError::InvalidPolicyArgument {
        option,
        value: value.to_string(),
    }
}

/// Settings read from a JSON or YAML profile.
///
/// Command-line flags take precedence field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    #[serde(default)]
    pub case: Option<String>,
    #[serde(default)]
    pub follow: Option<String>,
    #[serde(default)]
    pub numbers: Option<String>,
    #[serde(default)]
    pub alphabet: Option<PathBuf>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| profile_error(path, err))?;
        let mut profile: Profile = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                serde_json::from_str(&content).map_err(|err| profile_error(path, err))?
            }
            Some("yaml") | Some("yml") => {
                serde_yaml::from_str(&content).map_err(|err| profile_error(path, err))?
            }
            _ => return Err(profile_error(path, "unsupported extension (use .json or .yaml)")),
        };

        if let Some(alphabet) = profile.alphabet.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            profile.alphabet = Some(base.join(alphabet));
        }
        Ok(profile)
    }

    /// Policy options described by this profile alone.
    pub fn policy_options(&self) -> Result<PolicyOptions> {
        let mut case = match &self.case {
            Some(name) => parse_case_choice(name).ok_or_else(|| invalid("case", name))?,
            None => CaseChoice::default(),
        };
        if let Some(secondary) = &self.follow {
            match &self.case {
                Some(name) if !matches!(case, CaseChoice::Follow(_)) => {
                    return Err(NpAlphaError::ConflictingPolicy {
                        setting: format!("follow: {secondary}"),
                        conflict: format!("case: {name}"),
                    });
                }
                _ => case = CaseChoice::Follow(Some(secondary.clone())),
            }
        }
        Ok(PolicyOptions {
            case,
            numbers: self.numbers.clone(),
        })
    }
}

fn profile_error(path: &Path, err: impl std::fmt::Display) -> NpAlphaError {
    NpAlphaError::Profile {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
