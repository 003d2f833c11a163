use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use participants::{ChartField, CsvRecordStore, Session, models::COLUMNS};

#[derive(Parser)]
#[command(name = "participants")]
#[command(about = "Record participant visits and chart the results")]
struct Cli {
    /// CSV file holding the participant table
    #[arg(long, value_name = "FILE", default_value = "participants_data.csv")]
    data_file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the data-entry window (default)
    #[cfg(feature = "gui")]
    Gui,
    /// Print every stored row
    List,
    /// Print how many rows share each value of a field, most frequent first
    Stats {
        #[arg(value_enum)]
        field: ChartField,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    #[cfg(feature = "gui")]
    let command = args.command.unwrap_or(Command::Gui);
    #[cfg(not(feature = "gui"))]
    let command = args.command.unwrap_or(Command::List);

    match command {
        #[cfg(feature = "gui")]
        Command::Gui => {
            participants::gui::run(args.data_file)
                .map_err(|e| anyhow::anyhow!("GUI failed: {}", e))?;
        }
        Command::List => {
            let session = Session::new(CsvRecordStore::open(&args.data_file));
            let records = session.snapshot();
            if records.is_empty() {
                println!("No participants recorded in {:?}.", args.data_file);
                return Ok(());
            }
            println!("#\t{}", COLUMNS.join("\t"));
            for (i, r) in records.iter().enumerate() {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    i,
                    r.name,
                    r.sex,
                    r.marital_status,
                    r.education_level,
                    r.phone,
                    r.age,
                    r.commune,
                    r.province,
                    r.reason
                );
            }
            println!("\nTotal: {}", records.len());
        }
        Command::Stats { field } => {
            let session = Session::new(CsvRecordStore::open(&args.data_file));
            println!("=== {} ===", field.title());
            for (label, count) in session.count_by(field) {
                println!("  {label}: {count}");
            }
        }
    }

    Ok(())
}
