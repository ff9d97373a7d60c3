//! Left panel: file upload plus the hierarchical series selection tree.

use eframe::egui;
use egui::Ui;

use crate::data::dataset::{namespaced_key, Dataset};
use crate::data::groups::{group_columns, is_main_indicator};
use crate::data::session::SessionEvent;

use super::PerfChartApp;

/// Checkbox with a derived indeterminate state: `all` draws the check mark,
/// `some && !all` draws a dash across the box (egui has no native
/// tri-state). Returns `true` when clicked.
fn tri_checkbox(ui: &mut Ui, all: bool, some: bool, text: impl Into<egui::WidgetText>) -> bool {
    let mut checked = all;
    let resp = ui.checkbox(&mut checked, text);
    if some && !all {
        let (_big, small) = ui.spacing().icon_rectangles(resp.rect);
        let pad = small.width() * 0.2;
        ui.painter().line_segment(
            [
                egui::pos2(small.left() + pad, small.center().y),
                egui::pos2(small.right() - pad, small.center().y),
            ],
            egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
        );
    }
    resp.clicked()
}

impl PerfChartApp {
    pub(super) fn render_side_panel(
        &mut self,
        ctx: &egui::Context,
        events: &mut Vec<SessionEvent>,
    ) {
        egui::SidePanel::left("selection_panel")
            .default_width(300.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.render_upload_section(ui);
                    ui.separator();
                    if self.session.datasets().is_empty() {
                        ui.weak("Aucun fichier chargé.\nCliquez sur le bouton ci-dessus.");
                        return;
                    }
                    self.render_quick_selection(ui, events);
                    ui.separator();
                    for ds in self.session.datasets() {
                        render_file_section(ui, ds, self, events);
                    }
                });
            });
    }

    fn render_upload_section(&mut self, ui: &mut Ui) {
        ui.heading("PerfChart");
        ui.add_space(4.0);
        if ui
            .button("📂 Charger un ou plusieurs fichiers Excel")
            .clicked()
        {
            if let Some(paths) = rfd::FileDialog::new()
                .add_filter("Spreadsheets", &["xlsx", "xls"])
                .pick_files()
            {
                self.loader.spawn(paths);
            }
        }
        if self.loader.in_flight() > 0 {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.weak(format!("{} fichier(s) en cours…", self.loader.in_flight()));
            });
        }
        for err in &self.load_errors {
            ui.colored_label(ui.visuals().error_fg_color, err);
        }
    }

    fn render_quick_selection(&self, ui: &mut Ui, events: &mut Vec<SessionEvent>) {
        ui.strong("Sélection rapide");
        let all_keys = self.session.all_keys();
        let sel = self.session.selection();
        if tri_checkbox(
            ui,
            sel.is_all_checked(&all_keys),
            sel.is_some_checked(&all_keys),
            "Tout sélectionner",
        ) {
            events.push(SessionEvent::ToggleAll);
        }
        for ds in self.session.datasets() {
            let main_keys: Vec<String> = ds
                .columns
                .iter()
                .filter(|c| is_main_indicator(c))
                .map(|c| ds.key(c))
                .collect();
            if main_keys.is_empty() {
                continue;
            }
            ui.add_space(2.0);
            ui.weak(format!("📄 {}", ds.name));
            ui.indent(("quick", &ds.name), |ui| {
                if tri_checkbox(
                    ui,
                    sel.is_all_checked(&main_keys),
                    sel.is_some_checked(&main_keys),
                    "Indicateurs principaux",
                ) {
                    events.push(SessionEvent::ToggleGroup(main_keys.clone()));
                }
                for key in &main_keys {
                    let label = key.split("__").nth(1).unwrap_or(key);
                    let mut checked = sel.is_selected(key);
                    if ui.checkbox(&mut checked, label).clicked() {
                        events.push(SessionEvent::ToggleOne(key.clone()));
                    }
                }
            });
        }
    }
}

fn render_file_section(
    ui: &mut Ui,
    ds: &Dataset,
    app: &PerfChartApp,
    events: &mut Vec<SessionEvent>,
) {
    let sel = app.session.selection();
    let file_keys = ds.keys();
    egui::CollapsingHeader::new(format!("📄 {}", ds.name))
        .default_open(true)
        .show(ui, |ui| {
            if tri_checkbox(
                ui,
                sel.is_all_checked(&file_keys),
                sel.is_some_checked(&file_keys),
                "Toutes les colonnes",
            ) {
                events.push(SessionEvent::ToggleGroup(file_keys.clone()));
            }
            for group in group_columns(&ds.columns) {
                let group_keys: Vec<String> = group
                    .columns
                    .iter()
                    .map(|c| namespaced_key(&ds.name, c))
                    .collect();
                if tri_checkbox(
                    ui,
                    sel.is_all_checked(&group_keys),
                    sel.is_some_checked(&group_keys),
                    egui::RichText::new(&group.label).small().strong(),
                ) {
                    events.push(SessionEvent::ToggleGroup(group_keys.clone()));
                }
                ui.indent((&ds.name, &group.label), |ui| {
                    for (col, key) in group.columns.iter().zip(&group_keys) {
                        let mut checked = sel.is_selected(key);
                        if ui.checkbox(&mut checked, col).clicked() {
                            events.push(SessionEvent::ToggleOne(key.clone()));
                        }
                    }
                });
            }
        });
}
