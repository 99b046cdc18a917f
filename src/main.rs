use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use subcat::{AppError, CheckReport};

#[derive(Parser)]
#[command(name = "subcat")]
#[command(version)]
#[command(
    about = "Annotate provider documentation with subcategory labels",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill empty subcategory markers from the category mapping (default)
    #[clap(visible_alias = "a")]
    Annotate {
        /// Path to the category mapping file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report planned rewrites without writing any file
        #[arg(long)]
        dry_run: bool,
    },
    /// Report documents whose subcategory marker is still empty
    #[clap(visible_alias = "c")]
    Check {
        /// Path to the category mapping file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        None => subcat::annotate(None, false).map(|_| ()),
        Some(Commands::Annotate { config, dry_run }) => {
            subcat::annotate(config.as_deref(), dry_run).map(|_| ())
        }
        Some(Commands::Check { config, format }) => run_check(config.as_deref(), format),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_check(config: Option<&Path>, format: ReportFormat) -> Result<(), AppError> {
    let report = subcat::check(config)?;
    print_check_report(&report, format)?;

    if report.is_clean() {
        Ok(())
    } else {
        Err(AppError::UnannotatedDocuments(report.unannotated.len()))
    }
}

fn print_check_report(report: &CheckReport, format: ReportFormat) -> Result<(), AppError> {
    match format {
        ReportFormat::Text => {
            for path in &report.unannotated {
                println!("empty subcategory: {}", path.display());
            }
            for doc in &report.missing {
                println!("no document for {} ({})", doc.document, doc.category);
            }
            if report.is_clean() {
                println!("✅ All documents carry a subcategory");
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}
