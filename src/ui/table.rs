use eframe::egui::{RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::analysis::MissingnessReport;

const ROW_HEIGHT: f32 = 18.0;

/// Render the missingness report as a striped three-column table.
pub fn missingness_table(ui: &mut Ui, report: &MissingnessReport) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(TableColumn::auto().at_least(120.0))
        .column(TableColumn::auto().at_least(100.0))
        .column(TableColumn::remainder())
        .header(ROW_HEIGHT + 4.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("column");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("missing_count");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("missing_ratio");
            });
        })
        .body(|body| {
            let rows = report.rows();
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(&r.column);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(r.missing_count.to_string());
                });
                row.col(|ui: &mut Ui| {
                    let text = RichText::new(format!("{:.4}", r.missing_ratio));
                    if r.missing_count > 0 {
                        ui.label(text.strong());
                    } else {
                        ui.label(text.weak());
                    }
                });
            });
        });
}
