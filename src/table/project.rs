use thiserror::Error;

use crate::input::reader::RawRecord;
use crate::table::numeric::parse_number;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("no records to project")]
    NoRecords,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnTable {
    pub columns: Vec<NumericColumn>,
}

impl ColumnTable {
    pub fn get(&self, name: &str) -> Option<&NumericColumn> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

// Column order follows the first record. Tokens that are empty after
// trimming or fail to parse are skipped without error; a column keeping
// no values at all is dropped.
pub fn project_columns(records: &[RawRecord]) -> Result<ColumnTable, ProjectError> {
    let first = records.first().ok_or(ProjectError::NoRecords)?;

    let mut columns = Vec::new();
    for name in first.names() {
        let mut values = Vec::new();
        for record in records {
            let token = match record.get(name) {
                Some(raw) => raw.trim(),
                None => continue,
            };
            if token.is_empty() {
                continue;
            }
            if let Ok(value) = parse_number(token) {
                values.push(value);
            }
        }
        if !values.is_empty() {
            columns.push(NumericColumn {
                name: name.to_string(),
                values,
            });
        }
    }

    Ok(ColumnTable { columns })
}

#[cfg(test)]
#[path = "../../tests/src_inline/table/project.rs"]
mod tests;
