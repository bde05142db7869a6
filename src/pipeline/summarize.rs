use serde::Serialize;

use crate::input::path_display;
use crate::pipeline::load::TableCtx;
use crate::stats::describe::{ColumnStats, describe};

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub tool: ToolSummary,
    pub input: InputSummary,
    pub columns: Vec<ColumnReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub delimiter: String,
    pub has_header: bool,
    pub n_records: usize,
    pub n_numeric_columns: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub stats: ColumnStats,
}

pub fn summarize(ctx: &TableCtx) -> TableSummary {
    let columns = ctx
        .table
        .columns
        .iter()
        .map(|column| ColumnReport {
            name: column.name.clone(),
            stats: describe(&column.values),
        })
        .collect();

    TableSummary {
        tool: ToolSummary {
            name: "tabsum".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputSummary {
            path: path_display(&ctx.path).to_string(),
            delimiter: ctx.dialect.delimiter.to_string(),
            has_header: ctx.dialect.has_header,
            n_records: ctx.n_records,
            n_numeric_columns: ctx.table.len(),
        },
        columns,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/summarize.rs"]
mod tests;
