use std::path::PathBuf;

use clap::Args;

use crate::input::reader::read_table;

#[derive(Args, Debug)]
pub struct SniffArgs {
    /// Input delimited text file (.csv, .txt or .gz)
    #[arg(long)]
    input: PathBuf,
}

pub fn handle(args: SniffArgs) -> anyhow::Result<()> {
    let raw = read_table(&args.input)?;
    println!("delimiter\t{}", raw.dialect.delimiter);
    println!("has_header\t{}", raw.dialect.has_header);
    println!("records\t{}", raw.records.len());
    println!("columns\t{}", raw.columns.join(","));
    Ok(())
}
