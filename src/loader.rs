//! Background decoding of picked spreadsheet files.
//!
//! Decoding is the one long-running operation, so each picked file decodes
//! on its own worker thread and reports back over an mpsc channel. Files
//! are committed to the session in the order they were picked, not in the
//! order their decodes complete: every pick gets a sequence number and
//! out-of-order completions are buffered until their turn.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::data::dataset::Dataset;
use crate::reader::load_dataset;

/// The outcome of decoding one picked file, ready for the session/UI.
#[derive(Debug)]
pub struct LoadOutcome {
    /// File name as shown to the user.
    pub file: String,
    /// The normalized dataset, or a displayable failure message.
    pub result: Result<Dataset, String>,
}

struct Completed {
    seq: u64,
    outcome: LoadOutcome,
}

/// Spawns decode workers and re-serializes their completions.
pub struct FileLoader {
    tx: Sender<Completed>,
    rx: Receiver<Completed>,
    next_seq: u64,
    next_commit: u64,
    pending: BTreeMap<u64, LoadOutcome>,
}

impl Default for FileLoader {
    fn default() -> Self {
        let (tx, rx) = channel();
        Self {
            tx,
            rx,
            next_seq: 0,
            next_commit: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl FileLoader {
    /// Start one worker per picked path. Returns immediately; results are
    /// collected via [`FileLoader::poll`].
    pub fn spawn(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            let seq = self.next_seq;
            self.next_seq += 1;
            let tx = self.tx.clone();
            std::thread::spawn(move || {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let result = load_dataset(&path).map_err(|e| {
                    log::warn!("failed to load {file}: {e}");
                    e.to_string()
                });
                // The app may have shut down; a dead channel is fine.
                let _ = tx.send(Completed {
                    seq,
                    outcome: LoadOutcome { file, result },
                });
            });
        }
    }

    /// Drain finished decodes and return the ones whose turn has come, in
    /// original pick order. Completions that arrive early stay buffered.
    pub fn poll(&mut self) -> Vec<LoadOutcome> {
        while let Ok(done) = self.rx.try_recv() {
            self.pending.insert(done.seq, done.outcome);
        }
        let mut ready = Vec::new();
        while let Some(outcome) = self.pending.remove(&self.next_commit) {
            self.next_commit += 1;
            ready.push(outcome);
        }
        ready
    }

    /// Number of picks whose decode has not completed yet.
    pub fn in_flight(&self) -> usize {
        (self.next_seq - self.next_commit) as usize - self.pending.len()
    }
}
