use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use hexcat::{ColumnGeometry, Input, Printer};

mod cli;

fn run() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let geometry = ColumnGeometry {
        bytes_per_column: matches
            .get_one::<usize>("bytes_per_column")
            .copied()
            .unwrap_or(cli::DEFAULT_BYTES_PER_COLUMN),
        column_count: matches
            .get_one::<usize>("column_count")
            .copied()
            .unwrap_or(cli::DEFAULT_COLUMN_COUNT),
        column_spacing: matches
            .get_one::<usize>("column_spacing")
            .copied()
            .unwrap_or(cli::DEFAULT_COLUMN_SPACING),
        byte_spacing: matches
            .get_one::<usize>("byte_spacing")
            .copied()
            .unwrap_or(cli::DEFAULT_BYTE_SPACING),
    };

    let mut reader = match matches.get_one::<String>("FILE") {
        Some(filename) => Input::File(
            File::open(filename).with_context(|| format!("could not open file '{}'", filename))?,
        ),
        None => Input::Stdin(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let mut printer = Printer::new(&mut writer, geometry)?;
    printer.print_all(&mut reader)?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
