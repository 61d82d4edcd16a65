//! Flag surface and its pure evaluation.

use clap::Parser;
use clap::error::{ContextKind, ErrorKind};
use locount_engine::Language;

/// Recognized flags. Validation runs through [`evaluate`] so the binary
/// alone decides how outcomes map to exit codes.
#[derive(Parser, Debug)]
#[command(
    name = "locount",
    version,
    about = "Count lines of code under the current directory"
)]
pub struct Args {
    /// Count TypeScript sources (.ts, .tsx)
    #[arg(long)]
    pub typescript: bool,

    /// Count JavaScript sources (.js, .jsx)
    #[arg(long)]
    pub javascript: bool,

    /// Count Python sources (.py)
    #[arg(long)]
    pub python: bool,

    /// Count every file regardless of extension
    #[arg(long)]
    pub all: bool,
}

/// Result of evaluating the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOutcome {
    /// A language flag was given.
    Selected(Language),
    /// No language flag: fall through to the interactive prompt.
    Interactive,
    /// An unrecognized `--` flag, reported by name.
    Unknown(String),
    /// Help or version text to print verbatim before a clean exit.
    Usage(String),
}

/// Evaluate raw arguments into a typed outcome.
///
/// Only `--`-prefixed tokens take part; anything else is ignored. Flag keys
/// are matched case-insensitively. When several language flags are present,
/// the first one in argument order wins.
#[must_use]
pub fn evaluate<I>(argv: I) -> CliOutcome
where
    I: IntoIterator<Item = String>,
{
    let mut raw = argv.into_iter();
    let program = raw.next().unwrap_or_else(|| "locount".to_string());
    let originals: Vec<String> = raw.filter(|arg| arg.starts_with("--")).collect();
    let flags: Vec<String> = originals.iter().map(|arg| arg.to_lowercase()).collect();

    let parse_input = std::iter::once(program).chain(flags.iter().cloned());
    match Args::try_parse_from(parse_input) {
        Ok(_) => flags
            .iter()
            .find_map(|flag| flag.trim_start_matches('-').parse::<Language>().ok())
            .map_or(CliOutcome::Interactive, CliOutcome::Selected),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                CliOutcome::Usage(err.render().to_string())
            }
            _ => {
                let lowered = err
                    .get(ContextKind::InvalidArg)
                    .map(ToString::to_string)
                    .or_else(|| flags.first().cloned())
                    .unwrap_or_default();
                let reported = originals
                    .iter()
                    .find(|orig| orig.to_lowercase() == lowered)
                    .cloned()
                    .unwrap_or(lowered);
                CliOutcome::Unknown(reported)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(parts: &[&str]) -> CliOutcome {
        let argv = std::iter::once("locount")
            .chain(parts.iter().copied())
            .map(String::from);
        evaluate(argv)
    }

    #[test]
    fn language_flags_select() {
        assert_eq!(
            eval(&["--typescript"]),
            CliOutcome::Selected(Language::TypeScript)
        );
        assert_eq!(
            eval(&["--javascript"]),
            CliOutcome::Selected(Language::JavaScript)
        );
        assert_eq!(eval(&["--python"]), CliOutcome::Selected(Language::Python));
        assert_eq!(eval(&["--all"]), CliOutcome::Selected(Language::All));
    }

    #[test]
    fn no_flags_means_interactive() {
        assert_eq!(eval(&[]), CliOutcome::Interactive);
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(
            eval(&["--TypeScript"]),
            CliOutcome::Selected(Language::TypeScript)
        );
        assert_eq!(eval(&["--ALL"]), CliOutcome::Selected(Language::All));
    }

    #[test]
    fn non_flag_tokens_are_ignored() {
        assert_eq!(eval(&["src", "-v", "whatever"]), CliOutcome::Interactive);
        assert_eq!(
            eval(&["src", "--python"]),
            CliOutcome::Selected(Language::Python)
        );
    }

    #[test]
    fn unknown_flags_are_reported_by_name() {
        assert_eq!(eval(&["--rust"]), CliOutcome::Unknown("--rust".to_string()));
    }

    #[test]
    fn unknown_flags_keep_the_typed_casing() {
        assert_eq!(eval(&["--Rust"]), CliOutcome::Unknown("--Rust".to_string()));
    }

    #[test]
    fn first_language_flag_wins() {
        assert_eq!(
            eval(&["--python", "--all"]),
            CliOutcome::Selected(Language::Python)
        );
    }

    #[test]
    fn help_renders_usage() {
        assert!(matches!(eval(&["--help"]), CliOutcome::Usage(_)));
    }
}
