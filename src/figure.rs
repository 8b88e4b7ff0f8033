use serde::{Deserialize, Serialize};

use crate::analysis::{DensityCurve, Histogram, ValueCounts};
use crate::error::Result;

/// Pixels per inch when a figure is opened in a window.
pub const DPI: f32 = 100.0;

// ---------------------------------------------------------------------------
// Figure size
// ---------------------------------------------------------------------------

/// Canvas size in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigureSize {
    pub width: f32,
    pub height: f32,
}

impl FigureSize {
    pub const fn new(width: f32, height: f32) -> Self {
        FigureSize { width, height }
    }

    /// Window size in pixels.
    pub fn to_pixels(self) -> [f32; 2] {
        [self.width * DPI, self.height * DPI]
    }
}

impl Default for FigureSize {
    fn default() -> Self {
        FigureSize::new(8.0, 4.0)
    }
}

// ---------------------------------------------------------------------------
// Panel contents
// ---------------------------------------------------------------------------

/// Bar chart of category counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub categories: Vec<String>,
    pub counts: Vec<usize>,
    /// Tick label rotation in degrees; zero leaves labels horizontal.
    pub label_rotation: f32,
}

impl BarSeries {
    pub fn from_counts(counts: &ValueCounts, label_rotation: f32) -> Self {
        let (categories, counts) = counts
            .entries()
            .iter()
            .map(|(v, c)| (v.to_string(), *c))
            .unzip();
        BarSeries {
            categories,
            counts,
            label_rotation,
        }
    }
}

/// Density-normalised histogram with an optional KDE overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSeries {
    pub histogram: Histogram,
    pub density: Option<DensityCurve>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelContent {
    Bars(BarSeries),
    Distribution(DistributionSeries),
}

/// One subplot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub content: PanelContent,
}

impl Panel {
    pub fn bars(&self) -> Option<&BarSeries> {
        match &self.content {
            PanelContent::Bars(b) => Some(b),
            PanelContent::Distribution(_) => None,
        }
    }

    pub fn distribution(&self) -> Option<&DistributionSeries> {
        match &self.content {
            PanelContent::Distribution(d) => Some(d),
            PanelContent::Bars(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

/// A canvas holding a single row of panels, drawn left to right.
///
/// Plain data: building one never touches a display, so callers can
/// inspect it, serialise it, or hand it to [`crate::ui::show`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub size: FigureSize,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(size: FigureSize) -> Self {
        Figure {
            size,
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Draw the figure in a native window; blocks until it is closed.
    pub fn show(&self) -> Result<()> {
        crate::ui::show(self)
    }

    /// Every category shown in any bar panel, in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for bars in self.panels.iter().filter_map(Panel::bars) {
            for c in &bars.categories {
                if !seen.contains(&c.as_str()) {
                    seen.push(c.as_str());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::value_counts;
    use crate::data::model::Column;

    fn bar_panel(values: &[&str]) -> Panel {
        let col = Column::new("X", values.iter().copied());
        Panel {
            title: String::new(),
            x_label: "X".into(),
            y_label: "count".into(),
            content: PanelContent::Bars(BarSeries::from_counts(&value_counts(&col), 0.0)),
        }
    }

    #[test]
    fn size_in_pixels() {
        assert_eq!(FigureSize::new(12.0, 6.0).to_pixels(), [1200.0, 600.0]);
    }

    #[test]
    fn categories_are_merged_across_panels() {
        let fig = Figure::new(FigureSize::default())
            .with_panel(bar_panel(&["a", "b", "a"]))
            .with_panel(bar_panel(&["c", "a"]));
        assert_eq!(fig.categories(), vec!["a", "b", "c"]);
    }

    #[test]
    fn json_tags_panel_kind() {
        let fig = Figure::new(FigureSize::default()).with_panel(bar_panel(&["a"]));
        let json: serde_json::Value = serde_json::from_str(&fig.to_json().unwrap()).unwrap();
        assert_eq!(json["panels"][0]["content"]["kind"], "bars");
        assert_eq!(json["size"]["width"], 8.0);
    }
}
