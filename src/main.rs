// SPDX-License-Identifier: PMPL-1.0-or-later

//! npalpha: spell standard input out in the NATO phonetic alphabet
//!
//! Letters and digits become phonetic words terminated by `.`; everything
//! else is echoed. Casing is configurable separately for letters and digits.

use anyhow::{Context, Result};
use clap::Parser;
use npalpha::config::{self, CaseChoice, PolicyOptions, Profile};
use npalpha::{diagnostics, stream, Alphabet, Translator};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "npalpha")]
#[command(version)]
#[command(about = "Convert text to the NATO phonetic alphabet")]
#[command(long_about = None)]
struct Cli {
    /// Upper-case every word
    #[arg(
        short = 'A',
        long,
        overrides_with_all = ["all_lowercase", "first_capital", "follow_input"]
    )]
    all_uppercase: bool,

    /// Lower-case every word (default)
    #[arg(
        short = 'L',
        long,
        overrides_with_all = ["all_uppercase", "first_capital", "follow_input"]
    )]
    all_lowercase: bool,

    /// Capitalise the first letter of every word
    #[arg(
        short = 'F',
        long,
        overrides_with_all = ["all_uppercase", "all_lowercase", "follow_input"]
    )]
    first_capital: bool,

    /// Follow the case of the input; upper-case sources use SECONDARY
    /// (all-upper | first-cap, default first-cap). Give it as -f=SECONDARY
    #[arg(
        short = 'f',
        long,
        value_name = "SECONDARY",
        num_args = 0..=1,
        require_equals = true,
        overrides_with_all = ["all_uppercase", "all_lowercase", "first_capital"]
    )]
    follow_input: Option<Option<String>>,

    /// Casing for digits (all-lower | all-upper | first-cap), given as -n=POLICY;
    /// defaults to the letter casing
    #[arg(
        short = 'n',
        long,
        value_name = "POLICY",
        num_args = 0..=1,
        require_equals = true
    )]
    number_format: Option<Option<String>>,

    /// Alternate alphabet: a word list with 36 whitespace-separated words (a-z, then 0-9)
    #[arg(short = 'd', long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// JSON or YAML profile with default settings
    #[arg(short, long, value_name = "PATH")]
    profile: Option<PathBuf>,

    /// Describe the resolved configuration on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured diagnostics
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn case_choice(&self) -> Option<CaseChoice> {
        if let Some(secondary) = &self.follow_input {
            Some(CaseChoice::Follow(secondary.clone()))
        } else if self.all_uppercase {
            Some(CaseChoice::Upper)
        } else if self.first_capital {
            Some(CaseChoice::FirstCapital)
        } else if self.all_lowercase {
            Some(CaseChoice::Lower)
        } else {
            None
        }
    }

    /// A bare `-n` keeps the inherited number policy.
    fn number_choice(&self) -> Option<String> {
        self.number_format.clone().flatten()
    }

    /// Layer the command-line choices over `base` (defaults or a profile).
    fn policy_options(&self, base: PolicyOptions) -> PolicyOptions {
        base.with_overrides(self.case_choice(), self.number_choice())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let profile = match &cli.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    let options = cli.policy_options(profile.policy_options()?);
    let config = config::resolve(&options)?;

    let alphabet = match cli.dictionary.as_ref().or(profile.alphabet.as_ref()) {
        Some(path) => Alphabet::load(path)?,
        None => Alphabet::nato(),
    };

    if cli.verbose {
        diagnostics::print_all(&diagnostics::describe(&config, &alphabet));
    }

    let translator = Translator::new(&config, &alphabet);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = stream::run(&mut stdin.lock(), &mut stdout.lock(), &translator)
        .context("converting standard input")?;

    if cli.verbose {
        diagnostics::summary(&stats).print();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use npalpha::{Configuration, FollowCase, FormatPolicy};

    fn resolve_args(args: &[&str]) -> Configuration {
        let cli = Cli::try_parse_from(std::iter::once("npalpha").chain(args.iter().copied()))
            .expect("arguments should parse");
        config::resolve(&cli.policy_options(PolicyOptions::default()))
            .expect("options should resolve")
    }

    #[test]
    fn no_flags_is_lowercase() {
        assert_eq!(resolve_args(&[]), Configuration::default());
    }

    #[test]
    fn later_case_flag_wins() {
        assert_eq!(resolve_args(&["-f", "-A"]).letter_policy, FormatPolicy::Upper);
        assert_eq!(
            resolve_args(&["-A", "-f=all-upper"]).letter_policy,
            FormatPolicy::FollowInputCase(FollowCase::Upper)
        );
        assert_eq!(resolve_args(&["-A", "-L"]).letter_policy, FormatPolicy::Lower);
        assert_eq!(
            resolve_args(&["-L", "-F"]).letter_policy,
            FormatPolicy::FirstCapital
        );
    }

    #[test]
    fn bare_number_flag_inherits() {
        let config = resolve_args(&["-F", "-n"]);
        assert_eq!(config.letter_policy, FormatPolicy::FirstCapital);
        assert_eq!(config.number_policy, FormatPolicy::FirstCapital);
        assert!(config.number_inherited);
    }

    #[test]
    fn explicit_number_flag_overrides_follow() {
        let config = resolve_args(&["--follow-input=upper", "-n=lower"]);
        assert_eq!(
            config.letter_policy,
            FormatPolicy::FollowInputCase(FollowCase::Upper)
        );
        assert_eq!(config.number_policy, FormatPolicy::Lower);
        assert!(!config.number_inherited);
    }

    #[test]
    fn flags_override_profile_options() {
        let cli = Cli::try_parse_from(["npalpha", "-n=upper"]).unwrap();
        let base = PolicyOptions {
            case: CaseChoice::FirstCapital,
            numbers: Some("lower".to_string()),
        };
        let config = config::resolve(&cli.policy_options(base)).unwrap();
        assert_eq!(config.letter_policy, FormatPolicy::FirstCapital);
        assert_eq!(config.number_policy, FormatPolicy::Upper);
    }
}
