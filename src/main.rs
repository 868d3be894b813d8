mod cli;

use cli::Args;
use std::io;
use std::process;
use word_counter::prelude::*;
use word_counter::shared::error::{ExitCode, WordCountError};
use word_counter::shared::logging;

const BANNER: [&str; 5] = [
    "Welcome to Word Counter!",
    "This utility program counts word frequency in a given file.",
    "It will save its results to a file you choose.",
    "A word consists of alphabetical characters surrounded by whitespace.",
    "This program will automatically compare all words case insensitively.",
];

fn main() {
    let args = Args::parse_args();
    logging::initialize(args.verbose);

    let code = match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            report_failure(&e);
            ExitCode::Failure
        }
    };
    process::exit(code.as_i32());
}

fn run(args: Args) -> Result<()> {
    let opener = FileSystemOpener::from_current_dir()?;

    // Explicit --config wins over auto-discovery
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(opener.base_dir())?,
    };
    let settings = Settings::merge(args.format, args.sort, args.quiet, config.as_ref());
    log::debug!("Effective settings: {:?}", settings);

    let reporter = StdoutProgressReporter::new();
    if settings.show_banner {
        for line in BANNER {
            reporter.report(line);
        }
    }
    reporter.report(&format!("Current directory: {}", opener.base_dir().display()));

    let prompt = StdinPathPrompt::stdio();

    let input_raw = match args.input {
        Some(path) => path,
        None => prompt.prompt_path("Enter file to analyze:")?,
    };
    let input_path = opener.resolve(&input_raw);
    reporter.report(&format!("Path: {}", input_path.display()));
    let input = opener.open_input(&input_path)?;

    let output_raw = match args.output {
        Some(path) => path,
        None => prompt.prompt_path("Enter file to store results:")?,
    };
    let output_path = opener.resolve(&output_raw);
    reporter.report(&format!("Path: {}", output_path.display()));
    let mut output = opener.open_output(&output_path)?;

    reporter.report("File opened!");

    let request = CountRequest::new(input_path, output_path)
        .with_format(settings.format)
        .with_sort(settings.sort);
    let use_case = CountWordsUseCase::new(reporter);
    let response = use_case.execute(&request, input, &mut io::stdout(), &mut output)?;

    log::debug!(
        "Wrote {} distinct word(s) to {} ({} token(s) discarded)",
        response.counts.len(),
        request.output_path.display(),
        response.discarded_tokens()
    );
    Ok(())
}

fn report_failure(e: &anyhow::Error) {
    let open_failure = e
        .downcast_ref::<WordCountError>()
        .is_some_and(WordCountError::is_open_failure);

    if open_failure {
        // One diagnostic line; the OS cause only under --verbose
        StdoutProgressReporter::new().report_error("File couldn't be opened!");
        eprintln!("{}", e);
        for cause in e.chain().skip(1) {
            log::debug!("Caused by: {}", cause);
        }
        return;
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    // Display error chain
    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("Caused by: {}", err);
        source = err.source();
    }
}
