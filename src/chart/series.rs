use thiserror::Error;

use crate::stats::describe::mean;
use crate::table::project::ColumnTable;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("unknown column: {0}")]
    UnknownColumn(String),
    #[error("columns {x} and {y} have different lengths ({x_len} vs {y_len})")]
    LengthMismatch {
        x: String,
        y: String,
        x_len: usize,
        y_len: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub x_name: String,
    pub y_name: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub value_label: String,
    pub bars: Vec<Bar>,
}

pub fn scatter_series(
    table: &ColumnTable,
    x_col: &str,
    y_col: &str,
) -> Result<ScatterSeries, ChartError> {
    let x = table
        .get(x_col)
        .ok_or_else(|| ChartError::UnknownColumn(x_col.to_string()))?;
    let y = table
        .get(y_col)
        .ok_or_else(|| ChartError::UnknownColumn(y_col.to_string()))?;
    if x.values.len() != y.values.len() {
        return Err(ChartError::LengthMismatch {
            x: x.name.clone(),
            y: y.name.clone(),
            x_len: x.values.len(),
            y_len: y.values.len(),
        });
    }

    let points = x
        .values
        .iter()
        .copied()
        .zip(y.values.iter().copied())
        .collect();

    Ok(ScatterSeries {
        x_name: x.name.clone(),
        y_name: y.name.clone(),
        points,
    })
}

pub fn mean_bars(table: &ColumnTable) -> BarSeries {
    let bars = table
        .columns
        .iter()
        .map(|column| Bar {
            label: column.name.clone(),
            value: mean(&column.values),
        })
        .collect();

    BarSeries {
        value_label: "mean".to_string(),
        bars,
    }
}

// One bar per row of the column, labeled by record index.
pub fn column_bars(table: &ColumnTable, name: &str) -> Result<BarSeries, ChartError> {
    let column = table
        .get(name)
        .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))?;

    let bars = column
        .values
        .iter()
        .enumerate()
        .map(|(idx, value)| Bar {
            label: idx.to_string(),
            value: *value,
        })
        .collect();

    Ok(BarSeries {
        value_label: column.name.clone(),
        bars,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/chart/series.rs"]
mod tests;
