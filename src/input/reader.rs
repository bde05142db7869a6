use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::input::detect::{Dialect, detect_dialect};
use crate::input::{InputError, open_reader};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    pub fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // Last write wins, at the position of the first write.
    fn insert(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.fields.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value.to_string();
        } else {
            self.fields.push((name.to_string(), value.to_string()));
        }
    }
}

#[derive(Debug, Clone)]
pub struct RawTable {
    pub dialect: Dialect,
    pub columns: Vec<String>,
    pub records: Vec<RawRecord>,
}

pub fn read_table(path: &Path) -> Result<RawTable, InputError> {
    let mut reader = open_reader(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let first_line = text.lines().next().unwrap_or("");
    let dialect = detect_dialect(first_line);

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(dialect.has_header)
        .delimiter(dialect.delimiter.as_byte())
        .flexible(true)
        .from_reader(text.as_bytes());

    // Positional column names, blanks included; name-less trailing fields
    // in a ragged row have nowhere to go and are dropped.
    let columns: Vec<String> = if dialect.has_header {
        csv_reader.headers()?.iter().map(|s| s.to_string()).collect()
    } else {
        let count = first_line
            .split(dialect.delimiter.as_char())
            .filter(|field| !field.trim().is_empty())
            .count();
        (1..=count).map(|i| format!("Coluna_{}", i)).collect()
    };

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let mut record = RawRecord::default();
        for (name, value) in columns.iter().zip(row.iter()) {
            if name.trim().is_empty() {
                continue;
            }
            record.insert(name, value);
        }
        if record.is_empty() {
            continue;
        }
        records.push(record);
    }

    Ok(RawTable {
        dialect,
        columns,
        records,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/reader.rs"]
mod tests;
