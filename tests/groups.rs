use perfchart::{group_columns, is_main_indicator, Group};

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn main_indicator_pattern() {
    assert!(is_main_indicator("Indicateur1"));
    assert!(is_main_indicator("indicateur42"), "match is case-insensitive");
    assert!(is_main_indicator("CHARGE_TOTALE"));
    assert!(!is_main_indicator("Indicateur1_Tache1"), "pattern is an exact match");
    assert!(!is_main_indicator("Indicateur"));
    assert!(!is_main_indicator("Pression"));
}

#[test]
fn classifies_general_and_indicator_groups() {
    let groups = group_columns(&cols(&["Indicateur1", "Indicateur1_Tache1", "Pression"]));
    assert_eq!(
        groups,
        vec![
            Group {
                label: "Général".to_string(),
                columns: cols(&["Pression"]),
            },
            Group {
                label: "INDICATEUR1".to_string(),
                columns: cols(&["Indicateur1", "Indicateur1_Tache1"]),
            },
        ]
    );
}

#[test]
fn general_group_omitted_when_empty() {
    let groups = group_columns(&cols(&["Indicateur1", "Indicateur1_Tache1"]));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "INDICATEUR1");
}

#[test]
fn task_columns_follow_their_indicator_in_column_order() {
    let groups = group_columns(&cols(&[
        "Indicateur1",
        "Indicateur2",
        "Indicateur2_Tache1",
        "Indicateur1_Tache2",
        "Indicateur1_Tache1",
    ]));
    assert_eq!(groups[0].label, "INDICATEUR1");
    assert_eq!(
        groups[0].columns,
        cols(&["Indicateur1", "Indicateur1_Tache2", "Indicateur1_Tache1"])
    );
    assert_eq!(groups[1].columns, cols(&["Indicateur2", "Indicateur2_Tache1"]));
}

#[test]
fn doubly_matching_task_goes_to_first_indicator_only() {
    // "Indicateur1" is a substring of "Indicateur12", so this task name
    // matches both; the first indicator in column order claims it.
    let groups = group_columns(&cols(&[
        "Indicateur1",
        "Indicateur12",
        "Indicateur12_Tache1",
    ]));
    let holding: Vec<&Group> = groups
        .iter()
        .filter(|g| g.columns.iter().any(|c| c == "Indicateur12_Tache1"))
        .collect();
    assert_eq!(holding.len(), 1, "a task column appears in exactly one group");
    assert_eq!(holding[0].label, "INDICATEUR1");
}

#[test]
fn charge_totale_gets_its_own_group() {
    let groups = group_columns(&cols(&["CHARGE_TOTALE", "Pression"]));
    assert_eq!(groups[0].label, "Général");
    assert_eq!(groups[1].label, "CHARGE_TOTALE");
    assert_eq!(groups[1].columns, cols(&["CHARGE_TOTALE"]));
}

#[test]
fn pure_function_is_stable_across_calls() {
    let input = cols(&["Indicateur1", "Indicateur1_Tache1", "Pression", "CHARGE_TOTALE"]);
    assert_eq!(group_columns(&input), group_columns(&input));
}
