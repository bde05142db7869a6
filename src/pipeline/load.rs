use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::input::detect::Dialect;
use crate::input::reader::read_table;
use crate::input::{InputError, path_display};
use crate::table::project::{ColumnTable, ProjectError, project_columns};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("projection error: {0}")]
    Project(#[from] ProjectError),
}

#[derive(Debug, Clone)]
pub struct TableCtx {
    pub path: PathBuf,
    pub dialect: Dialect,
    pub columns: Vec<String>,
    pub n_records: usize,
    pub table: ColumnTable,
}

pub fn load_table(path: &Path) -> Result<TableCtx, LoadError> {
    let raw = read_table(path)?;
    let table = project_columns(&raw.records)?;
    if table.is_empty() {
        warn!(
            path = %path_display(path),
            records = raw.records.len(),
            "no numeric columns found"
        );
    }

    Ok(TableCtx {
        path: path.to_path_buf(),
        dialect: raw.dialect,
        columns: raw.columns,
        n_records: raw.records.len(),
        table,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/load.rs"]
mod tests;
