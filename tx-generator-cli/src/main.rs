use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tx_generator::writer::{summarize_file, write_csv_file, DEFAULT_OUTPUT_PATH};
use tx_generator::{pattern, year};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Where the generated CSV is written; existing files are replaced
    #[clap(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub(crate) output: PathBuf,

    #[clap(subcommand)]
    pub(crate) variant: Option<Variant>,
}

#[derive(Subcommand)]
enum Variant {
    /// Reproducible rows following a fixed index pattern (the default)
    Pattern {
        /// Number of rows, one per day
        #[clap(long, default_value_t = pattern::DEFAULT_COUNT)]
        count: usize,
        #[clap(long, default_value = pattern::DEFAULT_BASE_DATE)]
        base_date: NaiveDate,
    },
    /// Randomized salary, investment and expense activity over a year
    Year {
        #[clap(long, default_value = year::DEFAULT_START)]
        start: NaiveDate,
        #[clap(long, default_value_t = year::DEFAULT_DAYS)]
        days: usize,
        /// Seed for reproducible output; omitted means a different file on every run
        #[clap(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let variant = match cli.variant {
        Some(variant) => variant,
        None => Variant::Pattern {
            count: pattern::DEFAULT_COUNT,
            base_date: pattern::DEFAULT_BASE_DATE.parse()?,
        },
    };

    match variant {
        Variant::Pattern { count, base_date } => {
            let rows = pattern::build_rows(base_date, count);
            write_csv_file(&cli.output, &rows)?;
            println!("Generated {} rows at {}", rows.len(), cli.output.display());
        }
        Variant::Year { start, days, seed } => {
            let mut rng = match seed {
                Some(seed) => {
                    debug!("Seeding generator with {}", seed);
                    StdRng::seed_from_u64(seed)
                }
                None => StdRng::from_entropy(),
            };
            let rows = year::build_rows(&mut rng, start, days);
            write_csv_file(&cli.output, &rows)?;

            let summary = summarize_file(&cli.output)?;
            info!("Re-read {} rows from {}", summary.rows, cli.output.display());
            println!(
                "Generated {} rows at {}",
                summary.rows,
                cli.output.display()
            );
            println!("{}", summary);
        }
    }

    Ok(())
}
