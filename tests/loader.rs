use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use perfchart::loader::FileLoader;

/// Write a file that is definitely not a readable spreadsheet.
fn bogus_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"definitely not a workbook").unwrap();
    path
}

fn collect_outcomes(loader: &mut FileLoader, n: usize) -> Vec<String> {
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut files = Vec::new();
    while files.len() < n {
        assert!(Instant::now() < deadline, "loader did not finish in time");
        for outcome in loader.poll() {
            files.push(outcome.file);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    files
}

#[test]
fn outcomes_commit_in_pick_order() {
    let paths: Vec<PathBuf> = (0..6)
        .map(|i| bogus_file(&format!("perfchart_loader_order_{i}.xlsx")))
        .collect();
    let names: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    let mut loader = FileLoader::default();
    loader.spawn(paths);
    let files = collect_outcomes(&mut loader, names.len());
    assert_eq!(files, names, "commit order is pick order, not completion order");
    assert_eq!(loader.in_flight(), 0);
}

#[test]
fn failed_decode_is_isolated_and_reported() {
    let path = bogus_file("perfchart_loader_bad.xlsx");
    let mut loader = FileLoader::default();
    loader.spawn(vec![path]);

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        assert!(Instant::now() < deadline, "loader did not finish in time");
        let mut outcomes = loader.poll();
        if let Some(outcome) = outcomes.pop() {
            assert_eq!(outcome.file, "perfchart_loader_bad.xlsx");
            assert!(outcome.result.is_err(), "garbage bytes must not decode");
            break;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
}
