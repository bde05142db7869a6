use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::chart::series::{column_bars, mean_bars, scatter_series};
use crate::pipeline::load::load_table;
use crate::report::tsv::{write_bars_tsv, write_scatter_tsv};

#[derive(Args, Debug)]
pub struct ChartArgs {
    #[command(subcommand)]
    command: ChartCommand,
}

#[derive(Subcommand, Debug)]
enum ChartCommand {
    Scatter(ScatterArgs),
    Bars(BarsArgs),
}

#[derive(Args, Debug)]
pub struct ScatterArgs {
    /// Input delimited text file (.csv, .txt or .gz)
    #[arg(long)]
    input: PathBuf,

    /// Column providing x values
    #[arg(long)]
    x_col: String,

    /// Column providing y values
    #[arg(long)]
    y_col: String,

    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
pub struct BarsArgs {
    /// Input delimited text file (.csv, .txt or .gz)
    #[arg(long)]
    input: PathBuf,

    /// Single column to chart row by row; per-column means when omitted
    #[arg(long)]
    column: Option<String>,

    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

pub fn handle(args: ChartArgs) -> anyhow::Result<()> {
    match args.command {
        ChartCommand::Scatter(args) => scatter(args),
        ChartCommand::Bars(args) => bars(args),
    }
}

fn scatter(args: ScatterArgs) -> anyhow::Result<()> {
    let ctx = load_table(&args.input)?;
    let series = scatter_series(&ctx.table, &args.x_col, &args.y_col)?;
    std::fs::create_dir_all(&args.out)?;
    write_scatter_tsv(&args.out, &series)?;
    Ok(())
}

fn bars(args: BarsArgs) -> anyhow::Result<()> {
    let ctx = load_table(&args.input)?;
    let series = match &args.column {
        Some(name) => column_bars(&ctx.table, name)?,
        None => mean_bars(&ctx.table),
    };
    std::fs::create_dir_all(&args.out)?;
    write_bars_tsv(&args.out, &series)?;
    Ok(())
}
