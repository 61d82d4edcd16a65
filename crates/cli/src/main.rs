use std::process::ExitCode;

use anyhow::{Context, Result};
use locount_cli::args::{self, CliOutcome};
use locount_cli::{presentation, prompt};
use locount_engine::{Language, ScanConfigBuilder};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            presentation::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    match args::evaluate(std::env::args()) {
        CliOutcome::Selected(language) => {
            count_and_report(language)?;
            Ok(ExitCode::SUCCESS)
        }
        CliOutcome::Interactive => {
            presentation::print_welcome();
            let language = prompt::choose_language().context("language selection failed")?;
            count_and_report(language)?;
            Ok(ExitCode::SUCCESS)
        }
        CliOutcome::Unknown(flag) => {
            presentation::print_unknown_flag(&flag);
            Ok(ExitCode::FAILURE)
        }
        CliOutcome::Usage(text) => {
            print!("{text}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn count_and_report(language: Language) -> Result<()> {
    presentation::print_counting(language);

    let root = std::env::current_dir().context("cannot resolve current directory")?;
    let config = ScanConfigBuilder::default()
        .root(root)
        .extensions(language.extension_filter())
        .build()
        .expect("failed to build scan config");

    let summary = locount_engine::scan(&config).context("scan failed")?;
    presentation::print_summary(&summary);
    Ok(())
}
