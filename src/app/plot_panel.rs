//! Central panel: the overlaid line chart and the drag-zoom interaction.

use eframe::egui;
use egui::Color32;
use egui_plot::{Legend, Line, Plot, Polygon};

use crate::data::session::SessionEvent;

use super::PerfChartApp;

const BAND_FILL: Color32 = Color32::from_rgba_premultiplied(30, 65, 123, 40);

impl PerfChartApp {
    pub(super) fn render_plot_panel(
        &mut self,
        ctx: &egui::Context,
        events: &mut Vec<SessionEvent>,
    ) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let series = self.session.selected_series();
            if series.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.weak(
                        "Chargez un fichier Excel et sélectionnez des indicateurs\n\
                         pour afficher les courbes",
                    );
                });
                return;
            }

            ui.horizontal(|ui| {
                ui.strong("Évolution des indicateurs sélectionnés");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match self.session.zoom_window() {
                        Some(w) => {
                            ui.weak("Double-clic sur le graphique pour réinitialiser");
                            if ui
                                .small_button(format!("🔍 {}s → {}s ✕", w.left, w.right))
                                .clicked()
                            {
                                events.push(SessionEvent::ResetZoom);
                            }
                        }
                        None => {
                            ui.weak("Cliquer-glisser pour zoomer · Double-clic pour réinitialiser");
                        }
                    }
                });
            });

            let multi_file = self.session.datasets().len() > 1;
            let band = self.session.zoom().drag_band();
            let plot_resp = Plot::new("perf_plot")
                .legend(Legend::default())
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .allow_boxed_zoom(false)
                .allow_double_click_reset(true)
                .x_axis_label("Temps (s)")
                .y_axis_label("Charge (%)")
                .show(ui, |plot_ui| {
                    for (key, look) in &series {
                        let pts = self.session.series_points(key);
                        let label = legend_label(key, multi_file);
                        plot_ui.line(
                            Line::new(label, pts)
                                .color(look.color)
                                .width(look.width)
                                .style(look.style),
                        );
                    }
                    if let Some((a, b)) = band {
                        let yr = plot_ui.plot_bounds().range_y();
                        let (y0, y1) = (*yr.start(), *yr.end());
                        plot_ui.polygon(
                            Polygon::new("zoom_band", vec![[a, y0], [b, y0], [b, y1], [a, y1]])
                                .fill_color(BAND_FILL)
                                .stroke(egui::Stroke::new(1.0, Color32::from_rgb(59, 130, 246))),
                        );
                    }
                });

            // The zoom controller owns the x-window, so native plot
            // interactions stay disabled and the drag is fed to it here.
            let resp = &plot_resp.response;
            let axis_pos = resp
                .interact_pointer_pos()
                .map(|p| plot_resp.transform.value_from_position(p).x);
            if resp.drag_started_by(egui::PointerButton::Primary) {
                events.push(SessionEvent::PointerDown(axis_pos));
            } else if resp.dragged_by(egui::PointerButton::Primary) {
                events.push(SessionEvent::PointerMove(axis_pos));
            } else if resp.drag_stopped_by(egui::PointerButton::Primary) {
                events.push(SessionEvent::PointerUp);
            }
            if resp.double_clicked() {
                events.push(SessionEvent::ResetZoom);
            }
        });
    }
}

/// Legend entry: the bare column name, prefixed with the source file only
/// when several files are loaded (names could collide otherwise).
fn legend_label(key: &str, multi_file: bool) -> String {
    match key.split_once("__") {
        Some((file, column)) if multi_file => format!("{column} ({file})"),
        Some((_, column)) => column.to_string(),
        None => key.to_string(),
    }
}
