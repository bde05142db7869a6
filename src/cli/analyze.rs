use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::pipeline::load::load_table;
use crate::pipeline::summarize::summarize;
use crate::report::json::write_summary;
use crate::report::text::render_summary;
use crate::report::tsv::write_columns_tsv;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input delimited text file (.csv, .txt or .gz)
    #[arg(long)]
    input: PathBuf,

    /// Optional output directory for summary artifacts
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: AnalyzeArgs) -> anyhow::Result<()> {
    let start = Instant::now();
    info!(stage = "load", "starting stage");
    let ctx = load_table(&args.input)?;
    info!(
        stage = "load",
        elapsed_ms = start.elapsed().as_millis(),
        records = ctx.n_records,
        numeric_columns = ctx.table.len(),
        "finished stage"
    );

    let summary = summarize(&ctx);
    print!("{}", render_summary(&summary));

    if let Some(out) = &args.out {
        std::fs::create_dir_all(out)?;
        write_summary(out, &summary)?;
        write_columns_tsv(out, &ctx.table)?;
    }

    Ok(())
}
