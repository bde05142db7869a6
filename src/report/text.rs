use crate::pipeline::summarize::TableSummary;

pub fn render_summary(summary: &TableSummary) -> String {
    let mut out = String::new();
    out.push_str("Tabsum Report\n");
    out.push_str("=============\n\n");

    out.push_str(&format!("File: {}\n", summary.input.path));
    out.push_str(&format!(
        "Delimiter: {} (header {})\n",
        summary.input.delimiter,
        if summary.input.has_header {
            "detected"
        } else {
            "absent"
        }
    ));
    out.push_str(&format!("Records: {}\n", summary.input.n_records));
    out.push_str(&format!(
        "Numeric columns: {}\n\n",
        summary.input.n_numeric_columns
    ));

    for column in &summary.columns {
        out.push_str(&format!("Column: {}\n", column.name));
        out.push_str(&format!("  Mean: {:.4}\n", column.stats.mean));
        out.push_str(&format!("  Median: {:.4}\n", column.stats.median));
        out.push_str(&format!("  Std dev: {:.4}\n", column.stats.std_dev));
        out.push_str(&"-".repeat(30));
        out.push('\n');
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
