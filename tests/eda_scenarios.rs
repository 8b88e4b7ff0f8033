use proptest::prelude::*;
use rusty_eda::{
    find_missing, plot_categorical, plot_categorical_bylabel, plot_numerical, split_by_label,
    CategoricalByLabelOptions, CategoricalPlotOptions, Column, Dataset, LabelPolicy,
    NumericalPlotOptions, Value,
};

fn credit_frame() -> Dataset {
    Dataset::new(vec![
        Column::new("TARGET", [1i64, 1, 0, 0, 2]),
        Column::new("X", ["a", "b", "a", "c", "a"]),
    ])
    .unwrap()
}

#[test]
fn missing_report_for_partially_and_fully_null_columns() {
    let ds = Dataset::new(vec![
        Column::new("A", [Value::Integer(1), Value::Null, Value::Integer(3)]),
        Column::new("B", [Value::Null, Value::Null, Value::Null]),
    ])
    .unwrap();

    let report = find_missing(&ds).unwrap();
    let rows = report.rows();
    assert_eq!(rows[0].column, "A");
    assert_eq!(rows[0].missing_count, 1);
    assert!((rows[0].missing_ratio - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(rows[1].column, "B");
    assert_eq!(rows[1].missing_count, 3);
    assert_eq!(rows[1].missing_ratio, 1.0);
}

#[test]
fn categorical_by_label_groups() {
    let fig = plot_categorical_bylabel(
        &credit_frame(),
        "X",
        "TARGET",
        &CategoricalByLabelOptions::default(),
    )
    .unwrap();

    let left = fig.panels[0].bars().unwrap();
    let right = fig.panels[1].bars().unwrap();
    assert_eq!(left.categories, vec!["a", "b"]);
    assert_eq!(right.categories, vec!["a", "c"]);
    // Row 4 (label 2) lands in neither panel.
    let shown: usize = left.counts.iter().chain(&right.counts).sum();
    assert_eq!(shown, 4);

    let split = split_by_label(&credit_frame(), "TARGET", LabelPolicy::Drop).unwrap();
    assert_eq!(split.positive, vec![0, 1]);
    assert_eq!(split.negative, vec![2, 3]);
    assert_eq!(split.excluded, vec![4]);
}

#[test]
fn plots_are_deterministic() {
    let ds = Dataset::new(vec![
        Column::new("cat", ["x", "y", "x", "z", "y", "x"]),
        Column::new("num", [0.5, 1.5, 2.0, 2.5, 9.0, 3.25]),
    ])
    .unwrap();

    let opts = CategoricalPlotOptions::default();
    assert_eq!(
        plot_categorical(&ds, "cat", &opts).unwrap(),
        plot_categorical(&ds, "cat", &opts).unwrap()
    );

    let opts = NumericalPlotOptions::default();
    assert_eq!(
        plot_numerical(&ds, "num", &opts).unwrap(),
        plot_numerical(&ds, "num", &opts).unwrap()
    );
}

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::Float(f64::NAN)),
        (-5i64..5).prop_map(Value::Integer),
        (-5.0f64..5.0).prop_map(Value::Float),
        "[a-c]".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
    ]
}

fn table() -> impl Strategy<Value = Vec<Vec<Value>>> {
    (1usize..6, 1usize..30).prop_flat_map(|(n_cols, n_rows)| {
        prop::collection::vec(prop::collection::vec(cell(), n_rows), n_cols)
    })
}

fn dataset_from(cols: Vec<Vec<Value>>) -> Dataset {
    Dataset::new(
        cols.into_iter()
            .enumerate()
            .map(|(i, values)| Column::new(format!("c{i}"), values))
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn missing_report_matches_columns(cols in table()) {
        let ds = dataset_from(cols.clone());
        let report = find_missing(&ds).unwrap();

        prop_assert_eq!(report.len(), cols.len());
        for (i, (row, values)) in report.rows().iter().zip(&cols).enumerate() {
            prop_assert_eq!(&row.column, &format!("c{i}"));
            let missing = values.iter().filter(|v| v.is_missing()).count();
            prop_assert_eq!(row.missing_count, missing);
            let expected = missing as f64 / values.len() as f64;
            prop_assert!((row.missing_ratio - expected).abs() < 1e-12);
            if missing == 0 {
                prop_assert_eq!(row.missing_ratio, 0.0);
            }
        }
    }

    #[test]
    fn every_row_lands_in_exactly_one_group(cols in table()) {
        let ds = dataset_from(cols.clone());
        let split = split_by_label(&ds, "c0", LabelPolicy::Drop).unwrap();

        prop_assert_eq!(
            split.positive.len() + split.negative.len() + split.excluded.len(),
            ds.len()
        );
        for (row, value) in cols[0].iter().enumerate() {
            let in_pos = split.positive.contains(&row);
            let in_neg = split.negative.contains(&row);
            let in_exc = split.excluded.contains(&row);
            prop_assert_eq!(in_pos as u8 + in_neg as u8 + in_exc as u8, 1);
            match value.as_binary_label() {
                Some(true) => prop_assert!(in_pos),
                Some(false) => prop_assert!(in_neg),
                None => prop_assert!(in_exc),
            }
        }
    }
}
