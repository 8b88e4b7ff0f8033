use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::filter::LabelPolicy;
use crate::state::{AppState, View, ViewKind};
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Left side panel – view selection
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Explore");
    ui.separator();

    let columns: Vec<String> = match &state.dataset {
        Some(ds) => ds.column_names().map(str::to_string).collect(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- View kind ----
            ui.strong("View");
            for kind in ViewKind::ALL {
                if ui.selectable_label(state.kind == kind, kind.label()).clicked() {
                    state.set_kind(kind);
                }
            }
            ui.separator();

            // ---- Column selectors ----
            if state.kind.uses_column() {
                ui.strong("Column");
                if let Some(col) = column_combo(ui, "column", state.column.as_deref(), &columns) {
                    state.set_column(col);
                }
            }

            if state.kind.uses_label() {
                ui.strong("Label column");
                if let Some(col) =
                    column_combo(ui, "label_column", state.label_column.as_deref(), &columns)
                {
                    state.set_label_column(col);
                }

                let mut policy = state.label_policy;
                ui.horizontal(|ui: &mut Ui| {
                    ui.radio_value(&mut policy, LabelPolicy::Drop, "Drop other labels");
                    ui.radio_value(&mut policy, LabelPolicy::Reject, "Reject");
                });
                if policy != state.label_policy {
                    state.label_policy = policy;
                    state.refresh();
                }
            }

            // ---- Chart options ----
            let mut changed = false;
            if state.kind.uses_bins() {
                ui.separator();
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Bins");
                    changed |= ui
                        .add(egui::DragValue::new(&mut state.bins).range(1..=500))
                        .changed();
                });
            }
            if state.kind.uses_title() {
                ui.separator();
                changed |= ui
                    .add(egui::Slider::new(&mut state.label_rotation, -90.0..=90.0).text("label angle"))
                    .changed();
                ui.horizontal(|ui: &mut Ui| {
                    ui.label("Title");
                    changed |= ui.text_edit_singleline(&mut state.title).changed();
                });
            }
            if changed {
                state.refresh();
            }
        });
}

/// Column picker; returns the newly chosen column, if any.
fn column_combo(ui: &mut Ui, id: &str, current: Option<&str>, columns: &[String]) -> Option<String> {
    let mut chosen = None;
    egui::ComboBox::from_id_salt(id)
        .selected_text(current.unwrap_or("—"))
        .show_ui(ui, |ui: &mut Ui| {
            for col in columns {
                if ui
                    .selectable_label(current == Some(col.as_str()), col)
                    .clicked()
                {
                    chosen = Some(col.clone());
                }
            }
        });
    chosen
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let name = state
                .source
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(format!(
                "{name}  {} rows × {} columns",
                ds.len(),
                ds.columns().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the current figure or report.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    match &state.view {
        View::Empty => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if state.dataset.is_none() {
                    ui.heading("Open a file to explore it  (File → Open…)");
                } else {
                    ui.heading("Pick a column to plot");
                }
            });
        }
        View::Report(report) => {
            table::missingness_table(ui, report);
        }
        View::Figure { figure, colors } => {
            plot::figure_view(ui, figure, colors);
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["parquet", "pq", "json", "csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        open_path(state, path);
    }
}

/// Load `path` into the explorer, reporting failures in the status bar.
pub fn open_path(state: &mut AppState, path: std::path::PathBuf) {
    match crate::data::loader::load_file(&path) {
        Ok(dataset) => {
            log::info!(
                "Loaded {} rows with columns {:?}",
                dataset.len(),
                dataset.column_names().collect::<Vec<_>>()
            );
            state.set_dataset(dataset, Some(path));
        }
        Err(e) => {
            log::error!("Failed to load file: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
