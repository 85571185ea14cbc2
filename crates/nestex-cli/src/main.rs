use clap::{Parser, Subcommand};
use nestex_check::check;
use nestex_syntax::Lexer;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nestex")]
#[command(about = "Nesting checker for TeX/ConTeXt sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that every grouping construct in the given files is closed in order
    Check {
        /// Source files to scan
        #[arg(value_name = "FILE", required = true)]
        paths: Vec<PathBuf>,
        /// Emit the reports as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Dump the token stream of a source file
    Lex {
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Check { paths, json } => run_check(paths, *json),
        Commands::Lex { path } => {
            let content = fs::read_to_string(path)?;
            for (kind, text) in Lexer::new(&content) {
                println!("{kind:?}\t{text:?}");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_check(paths: &[PathBuf], json: bool) -> anyhow::Result<ExitCode> {
    let mut all_balanced = true;
    let mut reports = Vec::new();

    for path in paths {
        log::debug!("scanning {}", path.display());
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            // An unreadable file fails the run but not the other files.
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                all_balanced = false;
                continue;
            }
        };

        let report = check(&content);
        if !report.balanced() {
            all_balanced = false;
        }

        if json {
            reports.push(json!({
                "file": path.display().to_string(),
                "balanced": report.balanced(),
                "diagnostics": report.diagnostics,
            }));
        } else {
            for diagnostic in &report.diagnostics {
                println!("{}: {diagnostic}", path.display());
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(if all_balanced {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
