// Command-line argument parsing for the `illish` binary.
//
// Plain `std::env::args()` matching, in the same shape as the other
// binaries in the workspace. Parsing returns a `Usage` error instead of
// exiting so the rules can be tested; `main` decides the exit code.

use std::path::PathBuf;

use illish_lang::{IllishError, IllishResult};

pub const USAGE: &str = "\
Convert English IPA transcriptions to Illish.

Usage:
  illish [OPTIONS] [IPA...]

With no IPA arguments and no --lexemes, words are read from stdin, one per
line. Plain output is one `input<TAB>illish` line per word.

Options:
  --config <FILE>    Load converter rule switches from a JSON file
  --lexemes <FILE>   Convert a JSON lexeme batch ({\"lexemes\": [...]})
  --output <FILE>    Write the output (plain, explain or JSON) to FILE
  --explain          Show every pipeline stage for each word
  --json             Emit JSON instead of plain text
  --from-text        Extract the first /.../ transcription from each input
  -v, --verbose      More log output on stderr (repeat for trace level)
  -h, --help         Show this help
";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub words: Vec<String>,
    pub config_path: Option<PathBuf>,
    pub lexemes_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub explain: bool,
    pub json: bool,
    pub from_text: bool,
    pub verbosity: u8,
    pub help: bool,
}

fn path_value(flag: &str, value: Option<String>) -> IllishResult<PathBuf> {
    value
        .filter(|v| !v.starts_with("--"))
        .map(PathBuf::from)
        .ok_or_else(|| IllishError::usage(format!("{flag} requires a file path")))
}

fn is_verbose_run(arg: &str) -> bool {
    arg.strip_prefix('-')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c == 'v'))
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> IllishResult<CliOptions> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => options.config_path = Some(path_value("--config", args.next())?),
            "--lexemes" => options.lexemes_path = Some(path_value("--lexemes", args.next())?),
            "--output" => options.output_path = Some(path_value("--output", args.next())?),
            "--explain" => options.explain = true,
            "--json" => options.json = true,
            "--from-text" => options.from_text = true,
            "--verbose" => options.verbosity = options.verbosity.saturating_add(1),
            "-h" | "--help" => options.help = true,
            // Everything after `--` is a word, even if it looks like a flag.
            "--" => options.words.extend(args.by_ref()),
            // `-v`, `-vv`, `-vvv`, ...
            flag if is_verbose_run(flag) => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                options.verbosity = options.verbosity.saturating_add(count);
            }
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(IllishError::usage(format!("unknown option '{flag}'")));
            }
            _ => options.words.push(arg),
        }
    }

    if options.lexemes_path.is_some() && !options.words.is_empty() {
        return Err(IllishError::usage(
            "--lexemes cannot be combined with IPA arguments",
        ));
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> IllishResult<CliOptions> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliOptions::default());
    }

    #[test]
    fn test_words_and_flags() {
        let options = parse(&["kæt", "--json", "/kɛpt/", "--explain"]).unwrap();
        assert_eq!(options.words, vec!["kæt", "/kɛpt/"]);
        assert!(options.json);
        assert!(options.explain);
        assert!(!options.from_text);
    }

    #[test]
    fn test_paths() {
        let options = parse(&["--config", "rules.json", "--output", "out.json"]).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("rules.json")));
        assert_eq!(options.output_path, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn test_missing_path_is_usage_error() {
        let err = parse(&["--config"]).unwrap_err();
        assert!(matches!(err, IllishError::Usage(_)));
        assert_eq!(err.to_string(), "--config requires a file path");

        let err = parse(&["--lexemes", "--json"]).unwrap_err();
        assert!(matches!(err, IllishError::Usage(_)));
    }

    #[test]
    fn test_unknown_option() {
        let err = parse(&["--fast"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown option '--fast'");
    }

    #[test]
    fn test_unknown_short_option() {
        let err = parse(&["-x", "kæt"]).unwrap_err();
        assert!(matches!(err, IllishError::Usage(_)));
        assert_eq!(err.to_string(), "unknown option '-x'");
        assert!(parse(&["-vx"]).is_err());
    }

    #[test]
    fn test_repeated_short_verbose() {
        let options = parse(&["-vvv", "kæt"]).unwrap();
        assert_eq!(options.verbosity, 3);
        assert_eq!(options.words, vec!["kæt"]);
        // Without the dash it is just a word.
        assert_eq!(parse(&["vv"]).unwrap().verbosity, 0);
    }

    #[test]
    fn test_lone_dash_is_a_word() {
        assert_eq!(parse(&["-"]).unwrap().words, vec!["-"]);
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["-v"]).unwrap().verbosity, 1);
        assert_eq!(parse(&["-v", "--verbose"]).unwrap().verbosity, 2);
        assert_eq!(parse(&["-vv"]).unwrap().verbosity, 2);
    }

    #[test]
    fn test_double_dash_ends_options() {
        let options = parse(&["--json", "--", "--weird"]).unwrap();
        assert!(options.json);
        assert_eq!(options.words, vec!["--weird"]);
    }

    #[test]
    fn test_lexemes_excludes_words() {
        assert!(parse(&["--lexemes", "batch.json"]).is_ok());
        assert!(parse(&["--lexemes", "batch.json", "kæt"]).is_err());
    }
}
