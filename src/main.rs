#![forbid(unsafe_code)]
//! # Ingredient Stats CLI
//!
//! Command-line interface for the `ingredient_stats` crate. Reads the dish
//! dataset, tallies regions, cultures and cultural notes for each target
//! ingredient, and writes the JSON summary.
//!
//! ## Example
//! ```bash
//! cargo run --release -- --input json/platillos_expandido.csv --output json/ingredientes_stats.json
//! ```
//!
//! Every flag has a default, so running without arguments reproduces the
//! standard report. Set `RUST_LOG=debug` to see row tallies.

use clap::Parser;
use env_logger;
use ingredient_stats::{
    DEFAULT_INPUT, DEFAULT_MIN_NOTE_LEN, DEFAULT_OUTPUT, DEFAULT_TOP_N, StatsError, StatsOptions,
    Summary, aggregate_path, write_summary,
};
use log::error;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Pipe-delimited dataset with a header row
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the JSON summary (overwritten if present)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Target ingredient, matched case-sensitively (repeatable or comma-separated;
    /// default MAIZ,FRIJOL,CHILE,CALABAZA,CACAO)
    #[arg(long = "ingredient", value_delimiter = ',')]
    ingredients: Vec<String>,

    /// Number of regions and cultures to keep per ingredient
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Notes must be longer than this many characters to be eligible
    #[arg(long, default_value_t = DEFAULT_MIN_NOTE_LEN)]
    min_note_len: usize,

    /// Field delimiter (single ASCII character)
    #[arg(long, default_value_t = '|')]
    delimiter: char,
}

impl Cli {
    fn into_options(self) -> Result<StatsOptions, StatsError> {
        if !self.delimiter.is_ascii() {
            return Err(StatsError::InvalidOptions(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        let mut opts = StatsOptions {
            input: self.input,
            output: self.output,
            delimiter: self.delimiter as u8,
            top_n: self.top,
            min_note_len: self.min_note_len,
            ..StatsOptions::default()
        };
        if !self.ingredients.is_empty() {
            opts.ingredients = self.ingredients;
        }
        Ok(opts)
    }
}

fn run(opts: &StatsOptions) -> Result<(), StatsError> {
    let agg = aggregate_path(&opts.input, opts)?;
    let summary = Summary::from_aggregation(&agg, opts.top_n);
    write_summary(&summary, &opts.output)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = cli.into_options().and_then(|opts| {
        run(&opts)?;
        Ok(opts)
    });
    match result {
        Ok(opts) => {
            println!(
                "Análisis completado. Resultados guardados en '{}'",
                opts.output.display()
            );
        }
        Err(e) => {
            error!("Error: {}", e);
            process::exit(1);
        }
    }
}
