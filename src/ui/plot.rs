use eframe::egui::{self, epaint::TextShape, FontId, Pos2, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints};

use crate::color::{ColorMap, DENSITY_LINE, HISTOGRAM_FILL};
use crate::figure::{BarSeries, DistributionSeries, Figure, Panel, PanelContent};

/// Vertical room reserved under a bar chart for rotated tick labels.
const ROTATED_LABEL_ROOM: f32 = 70.0;

// ---------------------------------------------------------------------------
// Figure: panels side by side
// ---------------------------------------------------------------------------

/// Render every panel of the figure in one row.
pub fn figure_view(ui: &mut Ui, figure: &Figure, colors: &ColorMap) {
    if figure.panels.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Nothing to plot.");
        });
        return;
    }

    ui.columns(figure.panels.len(), |columns: &mut [Ui]| {
        for (index, (col_ui, panel)) in columns.iter_mut().zip(&figure.panels).enumerate() {
            panel_view(col_ui, panel, index, colors);
        }
    });
}

fn panel_view(ui: &mut Ui, panel: &Panel, index: usize, colors: &ColorMap) {
    if !panel.title.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.strong(&panel.title);
        });
    }
    match &panel.content {
        PanelContent::Bars(bars) => bar_plot(ui, panel, bars, index, colors),
        PanelContent::Distribution(dist) => distribution_plot(ui, panel, dist, index),
    }
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

fn bar_plot(ui: &mut Ui, panel: &Panel, series: &BarSeries, index: usize, colors: &ColorMap) {
    let rotated = series.label_rotation != 0.0;
    let label_room = if rotated { ROTATED_LABEL_ROOM } else { 0.0 };
    let height = (ui.available_height() - label_room).max(120.0);

    let names = series.categories.clone();
    let bars: Vec<Bar> = series
        .categories
        .iter()
        .zip(&series.counts)
        .enumerate()
        .map(|(i, (category, &count))| {
            Bar::new(i as f64, count as f64)
                .name(category)
                .fill(colors.color_for(category))
                .width(0.8)
        })
        .collect();

    let response = Plot::new(("figure_panel", index))
        .height(height)
        .x_axis_label(panel.x_label.clone())
        .y_axis_label(panel.y_label.clone())
        .x_axis_formatter(move |mark, _range| {
            // Rotated labels are painted separately below the plot.
            if rotated {
                return String::new();
            }
            category_at(&names, mark.value).unwrap_or_default()
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });

    if rotated {
        ui.allocate_space(egui::vec2(ui.available_width(), label_room));
        let transform = &response.transform;
        let painter = ui.painter();
        let color = ui.visuals().text_color();
        // Counter-clockwise in degrees, screen angles run clockwise.
        let angle = -series.label_rotation.to_radians();
        let dir = egui::vec2(angle.cos(), angle.sin());

        for (i, category) in series.categories.iter().enumerate() {
            let anchor = transform.position_from_point(&PlotPoint::new(i as f64, 0.0));
            if !transform.frame().x_range().contains(anchor.x) {
                continue;
            }
            let galley = painter.layout_no_wrap(category.clone(), FontId::proportional(11.0), color);
            let tick = Pos2::new(anchor.x, transform.frame().bottom() + 4.0);
            // Upward rotations end at the tick, downward ones start there.
            let pos = if angle < 0.0 {
                tick - dir * galley.size().x
            } else {
                tick
            };
            painter.add(TextShape::new(pos, galley, color).with_angle(angle));
        }
    }
}

/// Category name for an axis tick, if the tick sits on a bar.
fn category_at(names: &[String], value: f64) -> Option<String> {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return None;
    }
    names.get(idx as usize).cloned()
}

// ---------------------------------------------------------------------------
// Histogram + density
// ---------------------------------------------------------------------------

fn distribution_plot(ui: &mut Ui, panel: &Panel, series: &DistributionSeries, index: usize) {
    let hist = &series.histogram;
    let width = hist.bin_width();
    let bars: Vec<Bar> = hist
        .centers()
        .zip(&hist.density)
        .map(|(center, &height)| Bar::new(center, height).width(width))
        .collect();

    Plot::new(("figure_panel", index))
        .legend(egui_plot::Legend::default())
        .x_axis_label(panel.x_label.clone())
        .y_axis_label(panel.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("histogram")
                    .color(HISTOGRAM_FILL.gamma_multiply(0.6)),
            );

            if let Some(kde) = &series.density {
                let points: PlotPoints = kde
                    .x
                    .iter()
                    .zip(&kde.y)
                    .map(|(&xi, &yi)| [xi, yi])
                    .collect();
                plot_ui.line(Line::new(points).name("density").color(DENSITY_LINE).width(2.0));
            }
        });
}
