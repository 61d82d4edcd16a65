//! Console output. All user-facing text goes through here.

use console::style;
use locount_engine::{Language, ScanSummary};

pub fn print_welcome() {
    println!("{}", style("Welcome to locount!").cyan().bold());
    println!(
        "{}",
        style("Let's count your lines of code interactively.\n").dim()
    );
}

pub fn print_counting(language: Language) {
    println!("\n{}", style(format!("Counting {language} files...")).magenta());
}

pub fn print_summary(summary: &ScanSummary) {
    println!("{}", style("\nResults:").blue());
    println!(
        "{}",
        style(format!("• Files scanned: {}", summary.files_scanned)).green()
    );
    println!(
        "{}",
        style(format!(
            "• Total lines of code: {}\n",
            summary.total_lines
        ))
        .yellow()
    );
}

pub fn print_unknown_flag(flag: &str) {
    eprintln!("{}", style(format!("Unknown flag: {flag}")).red());
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", style("Error:").red());
}
