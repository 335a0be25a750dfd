use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use concord::pipeline::{run, RunConfig};

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(about = "Builds a concordance (alphabetical word index with sentence positions) from a text file")]
#[command(version)]
struct Args {
    /// Input text file (defaults to input.txt when omitted)
    #[arg(requires = "output_file")]
    input_file: Option<PathBuf>,

    /// Output concordance file (defaults to output.txt when omitted)
    output_file: Option<PathBuf>,

    /// Write a JSON run report to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let args = Args::parse();

    // Kept from day one in case versioning creates issues
    println!("concord v{}", env!("CARGO_PKG_VERSION"));

    let config = match (args.input_file, args.output_file) {
        (Some(input), Some(output)) => RunConfig {
            input,
            output,
            stats_out: args.stats_out,
        },
        _ => {
            // clap's `requires` rejects a lone input file before we get here
            println!("Using default input file: '{DEFAULT_INPUT}'");
            println!("Using default output file: '{DEFAULT_OUTPUT}'");
            RunConfig {
                input: PathBuf::from(DEFAULT_INPUT),
                output: PathBuf::from(DEFAULT_OUTPUT),
                stats_out: args.stats_out,
            }
        }
    };

    info!("Starting concord");
    info!(?config, "Run configuration");

    let stats = run(&config)?;

    info!(
        "Run complete: {} sentences, {} distinct words, {} occurrences",
        stats.sentences, stats.distinct_words, stats.total_occurrences
    );

    println!("Success!");
    Ok(())
}
