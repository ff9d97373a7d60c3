//! PerfChart crate root: re-exports and module wiring.
//!
//! This crate merges spreadsheet performance exports into one unified time
//! series and renders the selected series as overlaid line charts, built on
//! egui/eframe:
//! - `data`: datasets, column grouping, series merge, selection, zoom
//! - `reader`: spreadsheet decode boundary (calamine)
//! - `loader`: background multi-file loading with upload-order commit
//! - `app`: the eframe dashboard shell

pub mod app;
pub mod data;
pub mod loader;
pub mod reader;
pub mod series_look;

// Public re-exports for a compact external API
pub use app::{run, run_with_app, PerfChartApp};
pub use data::dataset::{namespaced_key, normalize_sheet, Dataset, RawCell, RawSheet};
pub use data::groups::{group_columns, is_main_indicator, Group};
pub use data::merge::{merge_datasets, MergedRow};
pub use data::selection::SelectionState;
pub use data::session::{Session, SessionEvent};
pub use data::zoom::{ZoomController, ZoomWindow};
pub use reader::ReadError;
pub use series_look::SeriesLook;
