//! Convert boleto barcodes from the command line.
//!
//! Reads 44-digit ITF barcode text from positional arguments, or one
//! candidate per line from stdin when no arguments are given, and prints the
//! linha digitável for each. Exits non-zero if any input fails to convert.

use std::io::BufRead;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use boleto_digitavel::{convert, Barcode, DigitableLine};

#[derive(Parser)]
#[command(name = "boleto-digitavel")]
#[command(about = "Convert 44-digit boleto barcodes into the 47-digit linha digitável")]
struct Cli {
    /// Barcode text; non-digit characters are ignored. Reads stdin when empty.
    barcodes: Vec<String>,

    /// Print the unformatted 47-digit form instead of the dotted one
    #[arg(long)]
    raw: bool,

    /// Print one JSON object per input
    #[arg(long, conflicts_with = "raw")]
    json: bool,

    /// Log rejected inputs and timings to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = boleto_digitavel::init_with_level(level);

    let inputs: Vec<String> = if cli.barcodes.is_empty() {
        std::io::stdin()
            .lock()
            .lines()
            .map_while(Result::ok)
            .filter(|line| !line.trim().is_empty())
            .collect()
    } else {
        cli.barcodes.clone()
    };

    let mut failures = 0usize;
    for input in &inputs {
        if process(input, &cli).is_none() {
            eprintln!("not a valid 44-digit boleto barcode: {input:?}");
            failures += 1;
        }
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn process(input: &str, cli: &Cli) -> Option<()> {
    if cli.json {
        let barcode = Barcode::parse(input).ok()?;
        let line = DigitableLine::from_barcode(&barcode);
        let record = serde_json::json!({
            "barcode": barcode.digits(),
            "digitable": line.to_string(),
            "digits": line.digits(),
        });
        println!("{record}");
    } else if cli.raw {
        println!("{}", boleto_digitavel::convert_raw(input)?);
    } else {
        println!("{}", convert(input)?);
    }
    Some(())
}
