use std::path::Path;

use crate::chart::series::{BarSeries, ScatterSeries};
use crate::stats::describe::describe;
use crate::table::project::ColumnTable;

pub fn write_columns_tsv(out_dir: &Path, table: &ColumnTable) -> anyhow::Result<()> {
    let mut buf = String::new();
    buf.push_str("column\tn\tmean\tmedian\tstd_dev\n");
    for column in &table.columns {
        let stats = describe(&column.values);
        buf.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            column.name,
            stats.n,
            fmt4(stats.mean),
            fmt4(stats.median),
            fmt4(stats.std_dev),
        ));
    }
    std::fs::write(out_dir.join("columns.tsv"), buf)?;
    Ok(())
}

pub fn write_scatter_tsv(out_dir: &Path, series: &ScatterSeries) -> anyhow::Result<()> {
    let mut buf = String::new();
    buf.push_str(&format!("{}\t{}\n", series.x_name, series.y_name));
    for (x, y) in &series.points {
        buf.push_str(&format!("{}\t{}\n", x, y));
    }
    std::fs::write(out_dir.join("scatter.tsv"), buf)?;
    Ok(())
}

pub fn write_bars_tsv(out_dir: &Path, series: &BarSeries) -> anyhow::Result<()> {
    let mut buf = String::new();
    buf.push_str(&format!("label\t{}\n", series.value_label));
    for bar in &series.bars {
        buf.push_str(&format!("{}\t{}\n", bar.label, bar.value));
    }
    std::fs::write(out_dir.join("bars.tsv"), buf)?;
    Ok(())
}

fn fmt4(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tsv.rs"]
mod tests;
