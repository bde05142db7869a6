use super::*;

fn record(pairs: &[(&str, &str)]) -> RawRecord {
    RawRecord {
        fields: pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
    }
}

#[test]
fn keeps_partially_numeric_column() {
    let records = vec![
        record(&[("A", "1,5")]),
        record(&[("A", "x")]),
        record(&[("A", "2,5")]),
    ];
    let table = project_columns(&records).expect("project");
    let column = table.get("A").expect("column A");
    assert_eq!(column.values, vec![1.5, 2.5]);
}

#[test]
fn drops_fully_text_column() {
    let records = vec![
        record(&[("A", "1"), ("B", "ana")]),
        record(&[("A", "2"), ("B", "bia")]),
    ];
    let table = project_columns(&records).expect("project");
    assert_eq!(table.len(), 1);
    assert!(table.get("A").is_some());
    assert!(table.get("B").is_none());
}

#[test]
fn skips_blank_values_silently() {
    let records = vec![
        record(&[("A", "1")]),
        record(&[("A", "   ")]),
        record(&[("A", "")]),
        record(&[("A", "3")]),
    ];
    let table = project_columns(&records).expect("project");
    assert_eq!(table.get("A").expect("column A").values, vec![1.0, 3.0]);
}

#[test]
fn trims_tokens_before_parsing() {
    let records = vec![record(&[("A", " 1,5 ")])];
    let table = project_columns(&records).expect("project");
    assert_eq!(table.get("A").expect("column A").values, vec![1.5]);
}

#[test]
fn skips_records_missing_the_key() {
    let records = vec![
        record(&[("A", "1"), ("B", "2")]),
        record(&[("A", "3")]),
    ];
    let table = project_columns(&records).expect("project");
    assert_eq!(table.get("A").expect("column A").values, vec![1.0, 3.0]);
    assert_eq!(table.get("B").expect("column B").values, vec![2.0]);
}

#[test]
fn column_order_follows_first_record() {
    let records = vec![record(&[("B", "1"), ("A", "2")])];
    let table = project_columns(&records).expect("project");
    let names: Vec<&str> = table.names().collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn empty_input_is_an_error() {
    let err = project_columns(&[]).unwrap_err();
    assert!(matches!(err, ProjectError::NoRecords));
}

#[test]
fn all_text_records_leave_empty_table() {
    let records = vec![record(&[("A", "x")]), record(&[("A", "y")])];
    let table = project_columns(&records).expect("project");
    assert!(table.is_empty());
}
