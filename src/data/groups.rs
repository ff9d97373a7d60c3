//! Column grouping by the indicator naming convention.
//!
//! Exports name their top-level counters `Indicateur<N>` (or the total-load
//! column `CHARGE_TOTALE`) and per-indicator sub-measurements
//! `Indicateur<N>_Tache<M>`. The classifier derives a navigable group list
//! from those names alone; it is a pure function of the column list.

use once_cell::sync::Lazy;
use regex::Regex;

/// The total-load column, treated as a main indicator despite its name.
pub const CHARGE_TOTALE: &str = "CHARGE_TOTALE";

static MAIN_INDICATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Indicateur\d+$").unwrap());
static TACHE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Tache").unwrap());

/// One display group: a label plus the columns it contains, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub columns: Vec<String>,
}

/// Returns `true` for top-level measured quantities (`IndicateurN` or
/// `CHARGE_TOTALE`).
pub fn is_main_indicator(column: &str) -> bool {
    MAIN_INDICATOR.is_match(column) || column == CHARGE_TOTALE
}

fn is_task_column(column: &str, indicator: &str) -> bool {
    column != indicator
        && TACHE.is_match(column)
        && column.to_lowercase().contains(&indicator.to_lowercase())
}

/// Partition `columns` into display groups.
///
/// Columns that are neither main indicators nor task columns form one
/// leading "Général" group (omitted when empty). Each `IndicateurN` column
/// then gets a group labeled with its upper-cased name, holding the
/// indicator itself followed by its task columns in column order. A task
/// column whose name happens to match several indicators is claimed by the
/// first indicator in column order.
pub fn group_columns(columns: &[String]) -> Vec<Group> {
    let indicators: Vec<&String> = columns
        .iter()
        .filter(|c| is_main_indicator(c))
        .collect();

    let standalone: Vec<String> = columns
        .iter()
        .filter(|c| {
            !is_main_indicator(c)
                && !indicators.iter().any(|ind| is_task_column(c, ind))
        })
        .cloned()
        .collect();

    let mut groups = Vec::new();
    if !standalone.is_empty() {
        groups.push(Group {
            label: "Général".to_string(),
            columns: standalone,
        });
    }

    let mut claimed: Vec<&String> = Vec::new();
    for ind in &indicators {
        let mut cols = vec![(*ind).clone()];
        for c in columns {
            if is_task_column(c, ind) && !claimed.contains(&c) {
                claimed.push(c);
                cols.push(c.clone());
            }
        }
        groups.push(Group {
            label: ind.to_uppercase(),
            columns: cols,
        });
    }

    groups
}
