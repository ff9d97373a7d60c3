//! eframe application shell for the merged-series dashboard.
//!
//! The app owns one [`Session`] snapshot plus the background file loader.
//! UI code only *collects* [`SessionEvent`]s while rendering; they are
//! applied in one batch at the end of the frame so every transition stays
//! atomic with respect to the others.

mod plot_panel;
mod side_panel;

use eframe::egui;

use crate::data::session::{Session, SessionEvent};
use crate::loader::FileLoader;

pub struct PerfChartApp {
    pub(crate) session: Session,
    pub(crate) loader: FileLoader,
    /// Displayable per-file load failures, newest last.
    pub(crate) load_errors: Vec<String>,
}

impl PerfChartApp {
    pub fn new() -> Self {
        Self {
            session: Session::default(),
            loader: FileLoader::default(),
            load_errors: Vec::new(),
        }
    }

    /// Preload datasets before the event loop starts (used by demos).
    pub fn with_datasets(datasets: Vec<crate::data::dataset::Dataset>) -> Self {
        let mut app = Self::new();
        for ds in datasets {
            app.session = app.session.apply(SessionEvent::DatasetLoaded(ds));
        }
        app
    }

    fn drain_loader(&mut self) {
        for outcome in self.loader.poll() {
            match outcome.result {
                Ok(ds) => {
                    self.session = self.session.apply(SessionEvent::DatasetLoaded(ds));
                }
                Err(msg) => self.load_errors.push(format!("{}: {}", outcome.file, msg)),
            }
        }
    }
}

impl Default for PerfChartApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for PerfChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_loader();

        let mut events: Vec<SessionEvent> = Vec::new();
        self.render_side_panel(ctx, &mut events);
        self.render_plot_panel(ctx, &mut events);
        for ev in events {
            self.session = self.session.apply(ev);
        }

        if self.loader.in_flight() > 0 {
            // Keep polling while decodes are pending.
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}

/// Open the dashboard in a native window. Blocks until the window closes.
pub fn run() -> eframe::Result<()> {
    run_with_app(PerfChartApp::new())
}

/// Open the dashboard with a prepared app (e.g. preloaded demo datasets).
pub fn run_with_app(app: PerfChartApp) -> eframe::Result<()> {
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1400.0, 900.0)),
        ..Default::default()
    };
    eframe::run_native("PerfChart", opts, Box::new(|_cc| Ok(Box::new(app))))
}
