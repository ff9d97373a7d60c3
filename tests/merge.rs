use std::collections::HashMap;

use perfchart::data::dataset::{DataRow, Dataset};
use perfchart::merge_datasets;

fn dataset(name: &str, columns: &[&str], rows: &[(f64, &[(&str, f64)])]) -> Dataset {
    Dataset {
        name: name.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|(time, values)| DataRow {
                time: *time,
                values: values
                    .iter()
                    .map(|(c, v)| (c.to_string(), *v))
                    .collect::<HashMap<_, _>>(),
            })
            .collect(),
    }
}

#[test]
fn merges_shared_timestamp_into_one_row() {
    // two one-row files sampled at the same instant
    let a = dataset(
        "A",
        &["Indicateur1", "Indicateur1_Tache1"],
        &[(0.0, &[("Indicateur1", 10.0), ("Indicateur1_Tache1", 5.0)])],
    );
    let b = dataset("B", &["CHARGE_TOTALE"], &[(0.0, &[("CHARGE_TOTALE", 80.0)])]);

    let merged = merge_datasets(&[a, b]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].time, 0.0);
    assert_eq!(merged[0].values["A__Indicateur1"], 10.0);
    assert_eq!(merged[0].values["A__Indicateur1_Tache1"], 5.0);
    assert_eq!(merged[0].values["B__CHARGE_TOTALE"], 80.0);
    assert_eq!(merged[0].values.len(), 3);
}

#[test]
fn distinct_timestamps_keep_their_own_rows() {
    let a = dataset("A", &["Indicateur1"], &[(0.0, &[("Indicateur1", 1.0)])]);
    let b = dataset("B", &["Pression"], &[(1.0, &[("Pression", 2.0)])]);
    let merged = merge_datasets(&[a, b]);
    assert_eq!(merged.len(), 2);
    assert!(!merged[0].values.contains_key("B__Pression"), "absent values stay unset");
    assert!(!merged[1].values.contains_key("A__Indicateur1"));
}

#[test]
fn output_is_sorted_ascending_by_time() {
    let a = dataset(
        "A",
        &["Indicateur1"],
        &[
            (5.0, &[("Indicateur1", 1.0)]),
            (1.0, &[("Indicateur1", 2.0)]),
            (3.0, &[("Indicateur1", 3.0)]),
        ],
    );
    let merged = merge_datasets(&[a]);
    let times: Vec<f64> = merged.iter().map(|r| r.time).collect();
    assert_eq!(times, vec![1.0, 3.0, 5.0]);
}

#[test]
fn merge_is_deterministic_under_dataset_permutation() {
    let a = dataset(
        "A",
        &["Indicateur1", "Indicateur1_Tache1"],
        &[
            (0.0, &[("Indicateur1", 10.0), ("Indicateur1_Tache1", 5.0)]),
            (1.0, &[("Indicateur1", 11.0)]),
        ],
    );
    let b = dataset(
        "B",
        &["CHARGE_TOTALE"],
        &[(0.0, &[("CHARGE_TOTALE", 80.0)]), (2.0, &[("CHARGE_TOTALE", 82.0)])],
    );
    let c = dataset("C", &["Pression"], &[(1.0, &[("Pression", 3.0)])]);

    let reference = merge_datasets(&[a.clone(), b.clone(), c.clone()]);
    for perm in [
        vec![a.clone(), c.clone(), b.clone()],
        vec![b.clone(), a.clone(), c.clone()],
        vec![b.clone(), c.clone(), a.clone()],
        vec![c.clone(), a.clone(), b.clone()],
        vec![c, b, a],
    ] {
        assert_eq!(
            merge_datasets(&perm),
            reference,
            "merged table must not depend on dataset load order"
        );
    }
}

#[test]
fn exact_float_equality_no_epsilon() {
    let a = dataset("A", &["Indicateur1"], &[(1.0, &[("Indicateur1", 1.0)])]);
    let b = dataset(
        "B",
        &["Pression"],
        &[(1.0 + 1e-12, &[("Pression", 2.0)])],
    );
    let merged = merge_datasets(&[a, b]);
    assert_eq!(merged.len(), 2, "nearly-equal timestamps do not merge");
}

#[test]
fn negative_zero_shares_the_zero_bucket() {
    let a = dataset("A", &["Indicateur1"], &[(0.0, &[("Indicateur1", 1.0)])]);
    let b = dataset("B", &["Pression"], &[(-0.0, &[("Pression", 2.0)])]);
    let merged = merge_datasets(&[a, b]);
    assert_eq!(merged.len(), 1, "0.0 and -0.0 are the same instant");
    assert_eq!(merged[0].time.to_bits(), 0.0_f64.to_bits());
    assert_eq!(merged[0].values.len(), 2);
}
