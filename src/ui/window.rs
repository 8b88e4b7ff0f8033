use eframe::egui::{self, ScrollArea, Ui};

use crate::analysis::MissingnessReport;
use crate::color::ColorMap;
use crate::error::{EdaError, Result};
use crate::figure::Figure;
use crate::ui::{plot, table};

// ---------------------------------------------------------------------------
// Standalone windows: display one figure or one report, block until closed
// ---------------------------------------------------------------------------

struct FigureWindow {
    figure: Figure,
    colors: ColorMap,
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            plot::figure_view(ui, &self.figure, &self.colors);
        });
    }
}

struct ReportWindow {
    report: MissingnessReport,
}

impl eframe::App for ReportWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui: &mut Ui| {
            ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
                table::missingness_table(ui, &self.report);
            });
        });
    }
}

/// Open a native window sized to the figure and draw its panels.
///
/// Blocks the calling thread until the window is closed.
pub fn show(figure: &Figure) -> Result<()> {
    let title = figure
        .panels
        .iter()
        .map(|p| p.title.as_str())
        .find(|t| !t.is_empty())
        .unwrap_or("Figure")
        .to_string();
    let window = FigureWindow {
        colors: ColorMap::for_figure(figure),
        figure: figure.clone(),
    };

    log::info!("Showing figure '{title}' with {} panel(s)", figure.panels.len());
    run(&title, figure.size.to_pixels(), window)
}

/// Open a native window listing the missingness report.
pub fn show_report(report: &MissingnessReport) -> Result<()> {
    let height = (report.len() as f32 * 20.0 + 60.0).clamp(200.0, 800.0);
    log::info!("Showing missingness report for {} columns", report.len());
    run(
        "Missing values",
        [480.0, height],
        ReportWindow {
            report: report.clone(),
        },
    )
}

fn run<A: eframe::App + 'static>(title: &str, size: [f32; 2], app: A) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(size),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| EdaError::Display(e.to_string()))
}
