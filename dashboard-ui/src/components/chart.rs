//! Chart Component
//!
//! Draws pie, bar and stacked-bar charts on an HTML5 canvas. Drawing
//! records a hit region per slice or bar so the pointer can be mapped back
//! to a tooltip.

use graduates_dashboard::dashboard::chart::{BarChart, Orientation, PieChart, StackedBarChart};
use graduates_dashboard::dashboard::format;
use graduates_dashboard::{ChartSpec, Palette};
use leptos::*;
use std::f64::consts::{FRAC_PI_2, TAU};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Canvas drawing width; the element is scaled to its container by CSS
const CANVAS_WIDTH: u32 = 560;

const FONT: &str = "12px sans-serif";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Region {
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Sector { cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64 },
}

impl Region {
    fn contains(&self, px: f64, py: f64) -> bool {
        match *self {
            Region::Rect { x, y, w, h } => px >= x && px <= x + w && py >= y && py <= y + h,
            Region::Sector { cx, cy, inner, outer, start, end } => {
                let (dx, dy) = (px - cx, py - cy);
                let r = dx.hypot(dy);
                if r < inner || r > outer {
                    return false;
                }
                let mut angle = dy.atan2(dx);
                while angle < start {
                    angle += TAU;
                }
                angle <= end
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct HitRegion {
    region: Region,
    /// Bar slot to highlight, for bar charts
    slot: Option<usize>,
    text: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Hover {
    slot: Option<usize>,
    text: String,
    x: f64,
    y: f64,
}

/// Canvas chart with hover tooltip
#[component]
pub fn ChartCanvas(spec: ChartSpec, palette: Palette) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let regions = store_value(Vec::<HitRegion>::new());
    let (hover, set_hover) = create_signal(None::<Hover>);
    let height = spec.height();
    let legend = match &spec {
        ChartSpec::StackedBar(chart) if chart.show_legend => Some(stacked_legend(chart)),
        _ => None,
    };
    let spec = store_value(spec);

    // Redraw once mounted, and whenever the highlighted bar changes
    create_effect(move |_| {
        let slot = hover.with(|h| h.as_ref().and_then(|h| h.slot));
        if let Some(canvas) = canvas_ref.get() {
            let hits = spec.with_value(|spec| draw_chart(&canvas, spec, &palette, slot));
            regions.set_value(hits);
        }
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let scale = canvas.width() as f64 / canvas.client_width().max(1) as f64;
        let (x, y) = (ev.offset_x() as f64, ev.offset_y() as f64);
        let (cx, cy) = (x * scale, y * scale);

        let hit = regions.with_value(|hits| {
            hits.iter()
                .find(|h| h.region.contains(cx, cy))
                .map(|h| Hover { slot: h.slot, text: h.text.clone(), x, y })
        });
        if hover.with_untracked(|current| current != &hit) {
            set_hover.set(hit);
        }
    };

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=height
                class="w-full"
                style=format!("height: {}px", height)
                on:mousemove=on_move
                on:mouseleave=move |_| set_hover.set(None)
            />
            {move || hover.get().map(|h| view! {
                <div
                    class="absolute pointer-events-none px-2 py-1 rounded text-xs shadow"
                    style=format!(
                        "left: {}px; top: {}px; background-color: {}; border: 1px solid {}; color: {}",
                        h.x + 12.0, h.y + 12.0, palette.tooltip_background, palette.tooltip_border, palette.tooltip_text,
                    )
                >
                    {h.text}
                </div>
            })}
            {legend}
        </div>
    }
}

/// Series legend under a stacked chart
fn stacked_legend(chart: &StackedBarChart) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-2">
            {chart
                .series
                .iter()
                .map(|series| view! {
                    <div class="flex items-center space-x-2">
                        <div class="w-3 h-3 rounded-full" style=format!("background-color: {}", series.color) />
                        <span class="text-xs text-gray-600 dark:text-gray-300">{series.name.clone()}</span>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Draw the chart on canvas, returning its hit regions
fn draw_chart(
    canvas: &HtmlCanvasElement,
    spec: &ChartSpec,
    palette: &Palette,
    highlight: Option<usize>,
) -> Vec<HitRegion> {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_font(FONT);

    match spec {
        ChartSpec::Pie(chart) => draw_pie(&ctx, chart, palette, width, height),
        ChartSpec::Bar(chart) => match chart.orientation {
            Orientation::Vertical => draw_columns(&ctx, chart, palette, width, height, highlight),
            Orientation::Horizontal => draw_rows(&ctx, chart, palette, width, height, highlight),
        },
        ChartSpec::StackedBar(chart) => draw_stacked(&ctx, chart, palette, width, height),
    }
}

fn draw_pie(
    ctx: &CanvasRenderingContext2d,
    chart: &PieChart,
    palette: &Palette,
    width: f64,
    height: f64,
) -> Vec<HitRegion> {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let mut hits = Vec::new();

    for ring in &chart.rings {
        let total = ring.total();
        if total <= 0.0 {
            continue;
        }
        let padding = ring.padding_angle.to_radians();
        let sweep_total = TAU - padding * ring.slices.len() as f64;
        let mut start = -FRAC_PI_2;

        for slice in &ring.slices {
            let end = start + slice.value / total * sweep_total;

            ctx.set_fill_style(&slice.color.into());
            ctx.begin_path();
            let _ = ctx.arc(cx, cy, ring.outer_radius, start, end);
            if ring.inner_radius > 0.0 {
                let _ = ctx.arc_with_anticlockwise(cx, cy, ring.inner_radius, end, start, true);
            } else {
                ctx.line_to(cx, cy);
            }
            ctx.close_path();
            ctx.fill();

            if let Some(caption) = &slice.caption {
                let mid = (start + end) / 2.0;
                let r = ring.outer_radius + 14.0;
                let (x, y) = (cx + r * mid.cos(), cy + r * mid.sin());
                ctx.set_fill_style(&palette.label.into());
                ctx.set_text_align(if mid.cos() >= 0.0 { "left" } else { "right" });
                ctx.set_text_baseline("middle");
                let _ = ctx.fill_text(caption, x, y);
            }

            hits.push(HitRegion {
                region: Region::Sector {
                    cx,
                    cy,
                    inner: ring.inner_radius,
                    outer: ring.outer_radius,
                    start,
                    end,
                },
                slot: None,
                text: format::labelled_percent(&slice.label, slice.value),
            });
            start = end + padding;
        }
    }

    hits
}

/// Dashed horizontal or vertical grid line
fn grid_line(ctx: &CanvasRenderingContext2d, palette: &Palette, from: (f64, f64), to: (f64, f64)) {
    ctx.set_stroke_style(&palette.grid.into());
    ctx.set_line_width(1.0);
    let _ = ctx.set_line_dash(&js_sys::Array::of2(&3.0.into(), &3.0.into()));
    ctx.begin_path();
    ctx.move_to(from.0, from.1);
    ctx.line_to(to.0, to.1);
    ctx.stroke();
    let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn tick_label(value: f64, unit: Option<&str>) -> String {
    format!("{}{}", format::number(value), unit.unwrap_or(""))
}

fn draw_columns(
    ctx: &CanvasRenderingContext2d,
    chart: &BarChart,
    palette: &Palette,
    width: f64,
    height: f64,
    highlight: Option<usize>,
) -> Vec<HitRegion> {
    // Margins
    let margin_left = if chart.show_axes { 44.0 } else { 8.0 };
    let margin_right = 12.0;
    let margin_top = 12.0;
    let margin_bottom = if chart.label_angle != 0.0 { 64.0 } else { 28.0 };

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;
    let max = chart.scale_max();
    let baseline = margin_top + chart_height;

    // Grid and value axis (5 steps)
    for i in 0..=5 {
        let value = max * i as f64 / 5.0;
        let y = baseline - (value / max) * chart_height;
        if chart.show_grid {
            grid_line(ctx, palette, (margin_left, y), (width - margin_right, y));
        }
        if chart.show_axes {
            ctx.set_fill_style(&palette.axis.into());
            ctx.set_text_align("right");
            ctx.set_text_baseline("middle");
            let _ = ctx.fill_text(&tick_label(value, chart.unit), margin_left - 6.0, y);
        }
    }

    let count = chart.bars.len().max(1) as f64;
    let slot_width = chart_width / count;
    let bar_width = slot_width * 0.7;
    let mut hits = Vec::new();

    for (i, bar) in chart.bars.iter().enumerate() {
        let slot_x = margin_left + i as f64 * slot_width;

        if highlight == Some(i) {
            ctx.set_fill_style(&palette.cursor.into());
            ctx.fill_rect(slot_x, margin_top, slot_width, chart_height);
        }

        let bar_height = (bar.value / max).clamp(0.0, 1.0) * chart_height;
        let x = slot_x + (slot_width - bar_width) / 2.0;
        ctx.set_fill_style(&bar.color.into());
        ctx.fill_rect(x, baseline - bar_height, bar_width, bar_height);

        // Category label, rotated when the names are long
        let label_x = slot_x + slot_width / 2.0;
        ctx.set_fill_style(&palette.axis.into());
        if chart.label_angle != 0.0 {
            ctx.save();
            let _ = ctx.translate(label_x, baseline + 8.0);
            let _ = ctx.rotate(chart.label_angle.to_radians());
            ctx.set_text_align("right");
            ctx.set_text_baseline("middle");
            let _ = ctx.fill_text(&bar.label, 0.0, 0.0);
            ctx.restore();
        } else {
            ctx.set_text_align("center");
            ctx.set_text_baseline("top");
            let _ = ctx.fill_text(&bar.label, label_x, baseline + 8.0);
        }

        hits.push(HitRegion {
            region: Region::Rect { x: slot_x, y: margin_top, w: slot_width, h: chart_height },
            slot: Some(i),
            text: format!("{}: {}", bar.label, tick_label(bar.value, chart.unit.or(Some("%")))),
        });
    }

    hits
}

fn draw_rows(
    ctx: &CanvasRenderingContext2d,
    chart: &BarChart,
    palette: &Palette,
    width: f64,
    height: f64,
    highlight: Option<usize>,
) -> Vec<HitRegion> {
    let margin_left = 8.0;
    // Room for the value printed after the longest bar
    let margin_right = 56.0;
    let chart_width = width - margin_left - margin_right;
    let max = chart.scale_max();

    let count = chart.bars.len().max(1) as f64;
    let slot_height = height / count;
    let thickness = (slot_height * 0.45).min(20.0);
    let mut hits = Vec::new();

    for (i, bar) in chart.bars.iter().enumerate() {
        let slot_y = i as f64 * slot_height;

        if highlight == Some(i) {
            ctx.set_fill_style(&palette.cursor.into());
            ctx.fill_rect(0.0, slot_y, width, slot_height);
        }

        let bar_y = slot_y + slot_height - thickness - 4.0;
        let bar_width = (bar.value / max).clamp(0.0, 1.0) * chart_width;

        if chart.inline_labels {
            ctx.set_fill_style(&palette.label.into());
            ctx.set_text_align("left");
            ctx.set_text_baseline("bottom");
            let _ = ctx.fill_text(&bar.label, margin_left, bar_y - 2.0);
        }

        ctx.set_fill_style(&bar.color.into());
        ctx.fill_rect(margin_left, bar_y, bar_width, thickness);

        if chart.inline_labels {
            ctx.set_fill_style(&palette.accent.into());
            ctx.set_text_baseline("middle");
            let _ = ctx.fill_text(&format::percent(bar.value), margin_left + bar_width + 6.0, bar_y + thickness / 2.0);
        }

        hits.push(HitRegion {
            region: Region::Rect { x: 0.0, y: slot_y, w: width, h: slot_height },
            slot: Some(i),
            text: format::labelled_percent(&bar.label, bar.value),
        });
    }

    hits
}

fn draw_stacked(
    ctx: &CanvasRenderingContext2d,
    chart: &StackedBarChart,
    palette: &Palette,
    width: f64,
    height: f64,
) -> Vec<HitRegion> {
    let margin_left = if chart.show_axes { 120.0 } else { 4.0 };
    let margin_right = 12.0;
    let margin_bottom = if chart.show_axes { 22.0 } else { 0.0 };

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_bottom;
    let max = chart.domain_max;

    // Value axis every 20%
    if chart.show_axes {
        for i in 0..=5 {
            let value = max * i as f64 / 5.0;
            let x = margin_left + (value / max) * chart_width;
            grid_line(ctx, palette, (x, 0.0), (x, chart_height));
            ctx.set_fill_style(&palette.axis.into());
            ctx.set_text_align("center");
            ctx.set_text_baseline("top");
            let _ = ctx.fill_text(&tick_label(value, Some("%")), x, chart_height + 6.0);
        }
    }

    let count = chart.categories.len().max(1) as f64;
    let slot_height = chart_height / count;
    let thickness = slot_height * 0.6;
    let mut hits = Vec::new();

    for (i, category) in chart.categories.iter().enumerate() {
        let y = i as f64 * slot_height + (slot_height - thickness) / 2.0;

        if chart.show_axes {
            ctx.set_fill_style(&palette.axis.into());
            ctx.set_text_align("right");
            ctx.set_text_baseline("middle");
            let _ = ctx.fill_text(category, margin_left - 8.0, y + thickness / 2.0);
        }

        let mut x = margin_left;
        for series in &chart.series {
            let value = series.values.get(i).copied().unwrap_or(0.0);
            let w = (value / max).max(0.0) * chart_width;

            ctx.set_fill_style(&series.color.into());
            ctx.fill_rect(x, y, w, thickness);

            hits.push(HitRegion {
                region: Region::Rect { x, y, w, h: thickness },
                slot: None,
                text: format!("{} - {}", category, format::labelled_percent(&series.name, value)),
            });
            x += w;
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_its_edges() {
        let rect = Region::Rect { x: 10.0, y: 10.0, w: 20.0, h: 5.0 };
        assert!(rect.contains(10.0, 10.0));
        assert!(rect.contains(30.0, 15.0));
        assert!(!rect.contains(31.0, 12.0));
    }

    #[test]
    fn sector_wraps_past_the_top() {
        // Quarter from 12 o'clock to 3 o'clock
        let sector = Region::Sector {
            cx: 0.0,
            cy: 0.0,
            inner: 10.0,
            outer: 20.0,
            start: -FRAC_PI_2,
            end: 0.0,
        };
        assert!(sector.contains(10.0, -10.0));
        assert!(!sector.contains(-10.0, -10.0));
        assert!(!sector.contains(2.0, -2.0));

        // Last slice of a ring ends past 2π - π/2
        let tail = Region::Sector {
            cx: 0.0,
            cy: 0.0,
            inner: 0.0,
            outer: 20.0,
            start: FRAC_PI_2,
            end: TAU - FRAC_PI_2,
        };
        assert!(tail.contains(-10.0, 1.0));
        assert!(!tail.contains(10.0, 1.0));
    }
}
