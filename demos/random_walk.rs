//! Opens the dashboard preloaded with two synthetic random-walk exports,
//! so the selection tree and drag-zoom can be tried without spreadsheet
//! files at hand.
//!
//! Run with: `cargo run --example random_walk`

use rand::Rng;

use perfchart::{normalize_sheet, PerfChartApp, RawCell, RawSheet};

/// Build a fake export the way the real ones look: a measurement counter,
/// the program-time column, indicators with task sub-columns, and a few
/// locale-formatted text cells.
fn synthetic_sheet(columns: &[&str], steps: usize) -> RawSheet {
    let mut rng = rand::thread_rng();
    let mut headers = vec!["Numéro de mesure".to_string(), "Heure programme".to_string()];
    headers.extend(columns.iter().map(|c| c.to_string()));

    let mut levels: Vec<f64> = columns.iter().map(|_| rng.gen_range(20.0..60.0)).collect();
    let rows = (0..steps)
        .map(|i| {
            let mut row = vec![
                RawCell::Number(i as f64 + 1.0),
                // Decimal-comma text, as the exports ship it.
                RawCell::Text(format!("{},{}", i / 2, if i % 2 == 0 { "0" } else { "5" })),
            ];
            for level in levels.iter_mut() {
                *level = (*level + rng.gen_range(-3.0..3.0)).clamp(0.0, 100.0);
                row.push(RawCell::Number((*level * 10.0).round() / 10.0));
            }
            row
        })
        .collect();

    RawSheet { headers, rows }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cpu = normalize_sheet(
        "perfos_cpu.xlsx",
        &synthetic_sheet(
            &[
                "Indicateur1",
                "Indicateur1_Tache1",
                "Indicateur1_Tache2",
                "Indicateur2",
                "Indicateur2_Tache1",
                "CHARGE_TOTALE",
            ],
            240,
        ),
    );
    let pression = normalize_sheet(
        "perfos_pression.xlsx",
        &synthetic_sheet(&["Pression", "Debit"], 240),
    );
    perfchart::run_with_app(PerfChartApp::with_datasets(vec![cpu, pression]))
}
