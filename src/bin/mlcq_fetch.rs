use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use miette::IntoDiagnostic;
use tracing_subscriber::EnvFilter;

use mlcq_sample_fetcher::app::{App, ProgressSink};
use mlcq_sample_fetcher::error::FetchError;
use mlcq_sample_fetcher::github::GithubHttpClient;
use mlcq_sample_fetcher::journal::DownloadLog;
use mlcq_sample_fetcher::manifest;
use mlcq_sample_fetcher::output::{ConsoleSink, JsonOutput, OutputMode};
use mlcq_sample_fetcher::store::OutputStore;

#[derive(Parser)]
#[command(name = "mlcq-fetch")]
#[command(about = "Download MLCQ code-smell sample files from GitHub blob links in a CSV manifest")]
#[command(version, author)]
struct Cli {
    #[arg(long, default_value = "data/MLCQCodeSmellSamples.csv")]
    input: Utf8PathBuf,

    #[arg(long, default_value = "data/code")]
    output_dir: Utf8PathBuf,

    #[arg(long, default_value = "data/download_log.txt")]
    log_file: Utf8PathBuf,

    #[arg(long)]
    non_interactive: bool,
}

fn main() -> ExitCode {
    if let Err(report) = run() {
        eprintln!("{report:?}");
        if let Some(fetch) = report.downcast_ref::<FetchError>() {
            return ExitCode::from(map_exit_code(fetch));
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn map_exit_code(error: &FetchError) -> u8 {
    match error {
        FetchError::ManifestRead(_)
        | FetchError::ManifestParse(_)
        | FetchError::MissingColumn(_)
        | FetchError::InvalidSampleId(_) => 2,
        FetchError::GithubHttp(_) => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_mode = if cli.non_interactive {
        OutputMode::NonInteractive
    } else {
        OutputMode::Interactive
    };

    // FetchError converts into a report directly through its Diagnostic
    // impl; into_diagnostic would wrap it in an opaque type and break the
    // downcast behind map_exit_code.
    let rows = manifest::read_rows(cli.input.as_std_path())?;
    let mut log = DownloadLog::open(cli.log_file.as_std_path())?;
    let store = OutputStore::new(cli.output_dir);
    let client = GithubHttpClient::new()?;
    let app = App::new(store, client);

    let sink: Box<dyn ProgressSink> = match output_mode {
        OutputMode::Interactive => Box::new(ConsoleSink),
        OutputMode::NonInteractive => Box::new(JsonOutput),
    };
    let report = app.run(&rows, &mut log, sink.as_ref())?;

    match output_mode {
        OutputMode::Interactive => {
            println!(
                "done: {} succeeded, {} failed, {} invalid, {} skipped ({} rows)",
                report.counts.succeeded,
                report.counts.failed,
                report.counts.invalid_url,
                report.counts.skipped,
                report.counts.total
            );
        }
        OutputMode::NonInteractive => {
            JsonOutput::print_report(&report).into_diagnostic()?;
        }
    }

    Ok(())
}
