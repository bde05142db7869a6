use super::*;
use crate::chart::series::Bar;
use crate::table::project::NumericColumn;
use std::fs;
use tempfile::tempdir;

#[test]
fn columns_tsv_has_header_and_one_row_per_column() {
    let dir = tempdir().expect("tempdir");
    let table = ColumnTable {
        columns: vec![NumericColumn {
            name: "nota".to_string(),
            values: vec![7.5, 9.0],
        }],
    };
    write_columns_tsv(dir.path(), &table).expect("write");

    let text = fs::read_to_string(dir.path().join("columns.tsv")).expect("read");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("column\tn\tmean\tmedian\tstd_dev"));
    assert_eq!(lines.next(), Some("nota\t2\t8.2500\t8.2500\t1.0607"));
    assert_eq!(lines.next(), None);
}

#[test]
fn scatter_tsv_lists_paired_points() {
    let dir = tempdir().expect("tempdir");
    let series = ScatterSeries {
        x_name: "x".to_string(),
        y_name: "y".to_string(),
        points: vec![(1.0, 10.0), (2.5, 20.0)],
    };
    write_scatter_tsv(dir.path(), &series).expect("write");

    let text = fs::read_to_string(dir.path().join("scatter.tsv")).expect("read");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("x\ty"));
    assert_eq!(lines.next(), Some("1\t10"));
    assert_eq!(lines.next(), Some("2.5\t20"));
}

#[test]
fn bars_tsv_lists_labeled_values() {
    let dir = tempdir().expect("tempdir");
    let series = BarSeries {
        value_label: "mean".to_string(),
        bars: vec![
            Bar {
                label: "a".to_string(),
                value: 2.0,
            },
            Bar {
                label: "b".to_string(),
                value: 10.0,
            },
        ],
    };
    write_bars_tsv(dir.path(), &series).expect("write");

    let text = fs::read_to_string(dir.path().join("bars.tsv")).expect("read");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("label\tmean"));
    assert_eq!(lines.next(), Some("a\t2"));
    assert_eq!(lines.next(), Some("b\t10"));
}
