// CLI entry point for the Illish converter.
//
// Converts English IPA words given as arguments (or read from stdin, one per
// line) and prints their Illish forms. A JSON lexeme batch can be converted
// in one go with `--lexemes`, which is how the wiki import scripts hand over
// their word lists. See `args.rs` for the flags and `report.rs` for the
// output formats.
//
// Usage:
//   illish [OPTIONS] [IPA...]
//     --config <FILE>     Converter rule switches (JSON)
//     --lexemes <FILE>    Lexeme batch to convert (JSON)
//     --output <FILE>     Write plain, explain or JSON output to FILE
//     --explain           Per-stage breakdown
//     --json              JSON output
//     --from-text         Pull the first /.../ span out of each input
//     -v, --verbose       More logging on stderr

mod args;
mod report;

use std::io::BufRead;
use std::path::Path;

use illish_lang::{
    BatchSummary, Converter, ConverterConfig, IllishError, IllishResult, LexemeBatch,
    extract_transcription,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{CliOptions, USAGE, parse_args};
use crate::report::{BatchReport, WordRecord, explain_lines, plain_lines, summary_line};

fn main() {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Try 'illish --help'.");
            std::process::exit(2);
        }
    };

    if options.help {
        print!("{USAGE}");
        return;
    }

    init_logging(options.verbosity);

    if let Err(e) = run(&options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v` flags.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &CliOptions) -> IllishResult<()> {
    let config = match &options.config_path {
        Some(path) => {
            let config = ConverterConfig::load(path)?;
            info!(path = %path.display(), ?config, "loaded converter config");
            config
        }
        None => ConverterConfig::default(),
    };
    let converter = Converter::new(config);

    if let Some(path) = &options.lexemes_path {
        return run_batch(&converter, path, options);
    }

    let inputs = if options.words.is_empty() {
        read_stdin_words()?
    } else {
        options.words.clone()
    };

    let records: Vec<WordRecord> = inputs
        .into_iter()
        .map(|input| convert_input(&converter, input, options))
        .collect();

    let text = if options.json {
        serde_json::to_string_pretty(&records)? + "\n"
    } else if options.explain {
        explain_lines(&records)
    } else {
        plain_lines(&records)
    };
    emit(options.output_path.as_deref(), &text)
}

fn convert_input(converter: &Converter, input: String, options: &CliOptions) -> WordRecord {
    let ipa = if options.from_text {
        let found = extract_transcription(&input).map(str::to_string);
        if found.is_none() {
            warn!(%input, "no /.../ transcription found");
        }
        found
    } else {
        Some(input.clone())
    };

    let analysis = ipa.as_deref().map(|ipa| converter.analyze(ipa));
    WordRecord {
        illish: analysis.as_ref().map(|a| a.illish.clone()),
        analysis: analysis.filter(|_| options.explain),
        ipa,
        input,
    }
}

fn run_batch(converter: &Converter, path: &Path, options: &CliOptions) -> IllishResult<()> {
    let batch = LexemeBatch::load(path)?;
    let conversions = batch.convert_all(converter);
    let summary = BatchSummary::of(&conversions);
    info!(
        path = %path.display(),
        total = summary.total,
        converted = summary.converted,
        skipped = summary.skipped,
        "converted lexeme batch"
    );
    eprintln!("{}", summary_line(&summary));

    let report = BatchReport {
        summary,
        lexemes: &conversions,
    };
    let text = serde_json::to_string_pretty(&report)? + "\n";
    emit(options.output_path.as_deref(), &text)
}

/// Read non-blank, trimmed lines from stdin.
fn read_stdin_words() -> IllishResult<Vec<String>> {
    let mut words = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line.map_err(|e| IllishError::io("<stdin>", e))?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

fn emit(output_path: Option<&Path>, text: &str) -> IllishResult<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| IllishError::io(path, e))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
            Ok(())
        }
        None => {
            print!("{text}");
            Ok(())
        }
    }
}
