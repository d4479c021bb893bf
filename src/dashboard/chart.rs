//! Chart specifications
//!
//! Declarative descriptions of the three chart kinds the dashboard uses.
//! They carry resolved labels, values and colors; drawing them is up to the
//! renderer (the canvas code in the frontend).

use serde::Serialize;

use super::format;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Bar(BarChart),
    StackedBar(StackedBarChart),
}

impl ChartSpec {
    /// Drawing height in CSS pixels
    pub fn height(&self) -> u32 {
        match self {
            ChartSpec::Pie(c) => c.height,
            ChartSpec::Bar(c) => c.height,
            ChartSpec::StackedBar(c) => c.height,
        }
    }
}

/// One pie/donut slice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    /// Text drawn next to the slice, `None` for unlabelled rings
    pub caption: Option<String>,
}

/// A ring of slices; `inner_radius == 0` is a full pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieRing {
    pub slices: Vec<Slice>,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Gap between slices, in degrees
    pub padding_angle: f64,
}

impl PieRing {
    /// Ring whose slices are captioned `"{label}: {value}%"`
    pub fn labelled(slices: Vec<(String, f64, &'static str)>, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            slices: slices
                .into_iter()
                .map(|(label, value, color)| Slice {
                    caption: Some(format::labelled_percent(&label, value)),
                    label,
                    value,
                    color,
                })
                .collect(),
            inner_radius,
            outer_radius,
            padding_angle: 0.0,
        }
    }

    /// Ring without captions
    pub fn plain(slices: Vec<(String, f64, &'static str)>, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            slices: slices
                .into_iter()
                .map(|(label, value, color)| Slice {
                    label,
                    value,
                    color,
                    caption: None,
                })
                .collect(),
            inner_radius,
            outer_radius,
            padding_angle: 0.0,
        }
    }

    pub fn padding_angle(mut self, degrees: f64) -> Self {
        self.padding_angle = degrees;
        self
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    /// Drawn in order; later rings sit on top
    pub rings: Vec<PieRing>,
    pub height: u32,
}

/// Bar direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Columns growing upwards from a category axis at the bottom
    Vertical,
    /// Bars growing rightwards from a category axis on the left
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub orientation: Orientation,
    /// Suffix for value-axis ticks
    pub unit: Option<&'static str>,
    /// Fixed value-axis maximum; `None` scales to the data
    pub domain_max: Option<f64>,
    pub show_axes: bool,
    pub show_grid: bool,
    /// Rotation of category labels, in degrees
    pub label_angle: f64,
    /// Print the category name above and the value after each bar
    pub inline_labels: bool,
    pub height: u32,
}

impl BarChart {
    /// Vertical columns with grid and `%` axis, all one color
    pub fn columns(items: Vec<(String, f64)>, color: &'static str, height: u32) -> Self {
        Self {
            bars: items
                .into_iter()
                .map(|(label, value)| Bar { label, value, color })
                .collect(),
            orientation: Orientation::Vertical,
            unit: Some("%"),
            domain_max: None,
            show_axes: true,
            show_grid: true,
            label_angle: 0.0,
            inline_labels: false,
            height,
        }
    }

    /// Axis-less horizontal bars labelled inline, on a 0-100 scale
    pub fn labelled_rows(bars: Vec<Bar>, height: u32) -> Self {
        Self {
            bars,
            orientation: Orientation::Horizontal,
            unit: None,
            domain_max: Some(100.0),
            show_axes: false,
            show_grid: false,
            label_angle: 0.0,
            inline_labels: true,
            height,
        }
    }

    pub fn label_angle(mut self, degrees: f64) -> Self {
        self.label_angle = degrees;
        self
    }

    /// Value-axis maximum actually used for drawing
    pub fn scale_max(&self) -> f64 {
        self.domain_max.unwrap_or_else(|| {
            let max = self.bars.iter().map(|b| b.value).fold(0.0, f64::max);
            nice_ceiling(max)
        })
    }
}

/// One stacked series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub color: &'static str,
    /// One value per category
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBarChart {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    pub orientation: Orientation,
    pub domain_max: f64,
    pub show_axes: bool,
    pub show_legend: bool,
    pub height: u32,
}

impl StackedBarChart {
    /// Sum of all series for category `index`
    pub fn stack_total(&self, index: usize) -> f64 {
        self.series
            .iter()
            .filter_map(|s| s.values.get(index))
            .sum()
    }
}

/// Round an axis maximum up to the next multiple of a "nice" step
pub fn nice_ceiling(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let step = if max <= 10.0 {
        2.0
    } else if max <= 50.0 {
        10.0
    } else {
        25.0
    };
    (max / step).ceil() * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_ring_captions() {
        let ring = PieRing::labelled(vec![("Male".to_string(), 85.5, "#2563eb")], 50.0, 70.0);
        assert_eq!(ring.slices[0].caption.as_deref(), Some("Male: 85.5%"));

        let plain = PieRing::plain(vec![("Arts".to_string(), 0.6, "#d1fae5")], 0.0, 48.0);
        assert_eq!(plain.slices[0].caption, None);
    }

    #[test]
    fn test_scale_max() {
        let chart = BarChart::columns(vec![("a".into(), 41.3), ("b".into(), 12.7)], "#3b82f6", 240);
        assert_eq!(chart.scale_max(), 50.0);

        let chart = BarChart::columns(vec![("a".into(), 94.6)], "#10b981", 256);
        assert_eq!(chart.scale_max(), 100.0);

        let fixed = BarChart::labelled_rows(vec![], 176);
        assert_eq!(fixed.scale_max(), 100.0);
    }

    #[test]
    fn test_nice_ceiling_edges() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.2), 8.0);
        assert_eq!(nice_ceiling(50.0), 50.0);
    }

    #[test]
    fn test_stack_total() {
        let chart = StackedBarChart {
            categories: vec!["x".into()],
            series: vec![
                Series { name: "a".into(), color: "#000", values: vec![40.0] },
                Series { name: "b".into(), color: "#fff", values: vec![60.0] },
            ],
            orientation: Orientation::Horizontal,
            domain_max: 100.0,
            show_axes: true,
            show_legend: true,
            height: 224,
        };
        assert_eq!(chart.stack_total(0), 100.0);
        assert_eq!(chart.stack_total(3), 0.0);
    }
}
