use crate::pipeline::summarize::TableSummary;

pub fn write_summary(out_dir: &std::path::Path, summary: &TableSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(path, json)?;
    Ok(())
}
