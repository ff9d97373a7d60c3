//! Session state container and chart projection.
//!
//! One [`Session`] owns everything a running dashboard mutates: the loaded
//! datasets, the selection mapping, the zoom controller and the cached
//! merged table. External events (file loads, checkbox toggles, pointer
//! gestures) are explicit [`SessionEvent`] values and [`Session::apply`]
//! produces a fresh snapshot for each one, so state transitions stay
//! atomic, testable and undo-friendly.

use crate::data::dataset::Dataset;
use crate::data::merge::{merge_datasets, MergedRow};
use crate::data::selection::SelectionState;
use crate::data::zoom::{ZoomController, ZoomWindow};
use crate::series_look::SeriesLook;

/// A discrete state transition.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A file finished decoding and normalizing.
    DatasetLoaded(Dataset),
    /// Remove one dataset by name.
    DatasetRemoved(String),
    /// Flip one series key.
    ToggleOne(String),
    /// Tri-state batch toggle over the given keys.
    ToggleGroup(Vec<String>),
    /// Tri-state batch toggle over every loaded key.
    ToggleAll,
    /// Pointer pressed over the plot, at the given axis position (if any).
    PointerDown(Option<f64>),
    /// Pointer moved during a drag.
    PointerMove(Option<f64>),
    /// Pointer released.
    PointerUp,
    /// Double-activation gesture: clear the zoom window and draft.
    ResetZoom,
}

/// The session-level state snapshot.
#[derive(Debug, Clone, Default)]
pub struct Session {
    datasets: Vec<Dataset>,
    selection: SelectionState,
    zoom: ZoomController,
    merged: Vec<MergedRow>,
}

impl Session {
    /// Apply one event, returning the next snapshot. The receiver is left
    /// untouched.
    #[must_use]
    pub fn apply(&self, event: SessionEvent) -> Session {
        let mut next = self.clone();
        match event {
            SessionEvent::DatasetLoaded(ds) => {
                // Replacing a same-named file keeps dataset names unique.
                next.datasets.retain(|d| d.name != ds.name);
                next.datasets.push(ds);
                next.merged = merge_datasets(&next.datasets);
            }
            SessionEvent::DatasetRemoved(name) => {
                next.datasets.retain(|d| d.name != name);
                next.merged = merge_datasets(&next.datasets);
            }
            SessionEvent::ToggleOne(key) => next.selection.toggle_one(&key),
            SessionEvent::ToggleGroup(keys) => next.selection.toggle_group(&keys),
            SessionEvent::ToggleAll => {
                let keys = next.all_keys();
                next.selection.toggle_all(&keys);
            }
            SessionEvent::PointerDown(x) => next.zoom.pointer_down(x),
            SessionEvent::PointerMove(x) => next.zoom.pointer_move(x),
            SessionEvent::PointerUp => next.zoom.pointer_up(),
            SessionEvent::ResetZoom => next.zoom.reset(),
        }
        next
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn zoom_window(&self) -> Option<ZoomWindow> {
        self.zoom.window()
    }

    /// The full merged table, unfiltered.
    pub fn merged(&self) -> &[MergedRow] {
        &self.merged
    }

    /// Every loaded namespaced key, in dataset order then column order.
    pub fn all_keys(&self) -> Vec<String> {
        self.datasets.iter().flat_map(|d| d.keys()).collect()
    }

    /// The merged table filtered to the committed zoom window (inclusive),
    /// or the full table when no window is committed.
    pub fn displayed_rows(&self) -> Vec<MergedRow> {
        match self.zoom.window() {
            Some(w) => self
                .merged
                .iter()
                .filter(|r| w.contains(r.time))
                .cloned()
                .collect(),
            None => self.merged.clone(),
        }
    }

    /// The selected series in drawing order (dataset order, then column
    /// order), each paired with a look whose color is cycled by position.
    pub fn selected_series(&self) -> Vec<(String, SeriesLook)> {
        self.all_keys()
            .into_iter()
            .filter(|k| self.selection.is_selected(k))
            .enumerate()
            .map(|(i, k)| (k, SeriesLook::new(i)))
            .collect()
    }

    /// Points `[time, value]` for one series, skipping rows where the series
    /// has no value, restricted to the displayed (zoomed) rows.
    pub fn series_points(&self, key: &str) -> Vec<[f64; 2]> {
        let window = self.zoom.window();
        self.merged
            .iter()
            .filter(|r| window.map_or(true, |w| w.contains(r.time)))
            .filter_map(|r| r.values.get(key).map(|v| [r.time, *v]))
            .collect()
    }
}
