//! Colors
//!
//! Fixed series colors plus the theme-dependent chrome colors used for
//! axes, grids, tooltips and inline labels.

use serde::Serialize;

use crate::dataset::Agreement;
use crate::state::Theme;

/// General series palette
pub const COLORS: [&str; 6] = ["#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899"];

/// Agreement scale, from "decidedly yes" to "decidedly no"
pub const SAT_COLORS: [&str; 4] = ["#16a34a", "#84cc16", "#facc15", "#ef4444"];

pub const GENDER_COLORS: [&str; 2] = ["#2563eb", "#db2777"];
pub const SOCIAL_COLORS: [&str; 2] = ["#3b82f6", "#f97316"];
pub const DIPLOMA_TYPE_COLORS: [&str; 4] = ["#059669", "#2563eb", "#f97316", "#a855f7"];
pub const DIPLOMA_TRACK_COLORS: [&str; 9] = [
    "#10b981", "#34d399", "#6ee7b7", "#a7f3d0", "#d1fae5", "#3b82f6", "#93c5fd", "#f97316", "#a855f7",
];
pub const COLUMN_COLOR: &str = "#3b82f6";
pub const SKILL_COLOR: &str = "#10b981";
pub const RE_ENROL_COLOR: &str = "#9333ea";

pub fn agreement_color(level: Agreement) -> &'static str {
    match level {
        Agreement::DecidedlyYes => SAT_COLORS[0],
        Agreement::MoreYes => SAT_COLORS[1],
        Agreement::MoreNo => SAT_COLORS[2],
        Agreement::DecidedlyNo => SAT_COLORS[3],
    }
}

/// Theme-dependent chart chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub tooltip_background: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
    /// Category names printed inside charts
    pub label: &'static str,
    /// Values printed inside charts
    pub accent: &'static str,
    /// Hover band behind a bar
    pub cursor: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#ffffff",
    grid: "#f0f0f0",
    axis: "#6b7280",
    tooltip_background: "#fff",
    tooltip_border: "#e5e7eb",
    tooltip_text: "#111827",
    label: "#1f2937",
    accent: "#2563eb",
    cursor: "rgba(0, 0, 0, 0.1)",
};

pub const DARK: Palette = Palette {
    background: "#1f2937",
    grid: "#374151",
    axis: "#9ca3af",
    tooltip_background: "#1f2937",
    tooltip_border: "#374151",
    tooltip_text: "#f3f4f6",
    label: "#e5e7eb",
    accent: "#60a5fa",
    cursor: "rgba(255, 255, 255, 0.1)",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light).grid, "#f0f0f0");
        assert_eq!(Palette::for_theme(Theme::Dark).grid, "#374151");
    }

    #[test]
    fn test_agreement_colors_in_scale_order() {
        let colors: Vec<_> = Agreement::ALL.iter().map(|l| agreement_color(*l)).collect();
        assert_eq!(colors, SAT_COLORS.to_vec());
    }
}
