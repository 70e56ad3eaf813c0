//! cargo run --release -- '0123456789' 5 7 20 combinations.txt

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

use pin_tumbler_bitting::*;

#[derive(Parser, Debug)]
#[command(
    name = "secure-pin-tumbler",
    about = "Generates secure pin tumbler lock combinations",
    after_help = "Refer to the key bitting specification for your locks."
)]
struct Cli {
    /// Pin bitting numbers, which must be in order. Example: "0123456789abc"
    pins: BittingAlphabet,

    /// Number of total pins. Usually 5
    num_pins: PinCount,

    /// MACS or Maximum Adjacent Cut Specification. Example: 4 for most Kwiksets and 7 for most Schlages
    macs: usize,

    /// Pin bitting aggressiveness or the minimum total difference in pin values
    aggressiveness: usize,

    /// Output text file
    outfile: PathBuf,

    /// Number of combinations columns
    #[arg(short, long, default_value_t = ReportOptions::DEFAULT_COLUMNS)]
    columns: ColumnCount,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let constraints = Constraints::new(cli.macs, cli.aggressiveness);
    let options = ReportOptions {
        columns: cli.columns,
    };

    // 探索を始める前に出力先を開いておく。
    let outfile = File::create(&cli.outfile)
        .with_context(|| format!("failed to create {}", cli.outfile.display()))?;

    if constraints.tail_rule_unsatisfiable(cli.pins.len(), usize::from(cli.num_pins)) {
        eprintln!(
            "warning: MACS {} exceeds the largest pin difference {}; no combination of {} pins can pass the last-pin rule",
            cli.macs,
            cli.pins.max_rpl(),
            cli.num_pins
        );
    }

    let set = generate(&cli.pins, cli.num_pins, &constraints);
    println!("Total combinations: {}", set.len());

    write_report(
        BufWriter::new(outfile),
        &cli.pins,
        &constraints,
        &set,
        &options,
    )
    .with_context(|| format!("failed to write {}", cli.outfile.display()))?;

    println!("Done");

    Ok(())
}
