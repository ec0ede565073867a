//! Chart geometry and number formatting for analytics views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend sends already-aggregated statistics. These helpers only map
//! those values onto SVG coordinates (viewBox units, origin top-left) and
//! format them for labels; no statistics are derived here.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

/// A bar positioned inside a chart's plot area.
#[derive(Clone, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Round `max` up to a "nice" axis limit (1, 2, 2.5, 5 or 10 times a power of ten).
///
/// Non-positive or non-finite input yields `1.0` so empty charts still draw an axis.
#[must_use]
pub fn nice_axis_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let exponent = max.log10().floor();
    let magnitude = 10_f64.powf(exponent);
    let fraction = max / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|step| fraction <= *step + 1e-9)
        .unwrap_or(10.0);
    nice * magnitude
}

/// `count + 1` evenly spaced tick values from `0` to `axis_max`.
#[must_use]
pub fn axis_ticks(axis_max: f64, count: u32) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| axis_max * f64::from(i) / f64::from(count)).collect()
}

/// Lay out one bar per value across `width` x `height`.
///
/// Each bar gets an equal slot; `gap_ratio` of every slot is left empty and
/// split evenly on both sides. Values are clamped to `[0, axis_max]`.
#[must_use]
pub fn bar_layout(values: &[f64], width: f64, height: f64, axis_max: f64, gap_ratio: f64) -> Vec<BarRect> {
    if values.is_empty() || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }
    let axis_max = if axis_max > 0.0 { axis_max } else { 1.0 };
    let gap_ratio = gap_ratio.clamp(0.0, 0.9);
    #[allow(clippy::cast_precision_loss)]
    let slot = width / values.len() as f64;
    let bar_width = slot * (1.0 - gap_ratio);
    let inset = (slot - bar_width) / 2.0;

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let clamped = if value.is_finite() { value.clamp(0.0, axis_max) } else { 0.0 };
            let bar_height = height * clamped / axis_max;
            #[allow(clippy::cast_precision_loss)]
            let x = slot * i as f64 + inset;
            BarRect { x, y: height - bar_height, width: bar_width, height: bar_height }
        })
        .collect()
}

/// Horizontal centre of slot `index` out of `len` across `width`.
#[must_use]
pub fn slot_center(index: usize, len: usize, width: f64) -> f64 {
    if len == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let slot = width / len as f64;
    #[allow(clippy::cast_precision_loss)]
    let center = slot * index as f64 + slot / 2.0;
    center
}

/// SVG `points` attribute for a polyline through `values`, one per slot centre.
#[must_use]
pub fn line_points(values: &[f64], width: f64, height: f64, axis_max: f64) -> String {
    let axis_max = if axis_max > 0.0 { axis_max } else { 1.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let clamped = if value.is_finite() { value.clamp(0.0, axis_max) } else { 0.0 };
            let x = slot_center(i, values.len(), width);
            let y = height - height * clamped / axis_max;
            format!("{},{}", trim_coord(x), trim_coord(y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn trim_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Score with one decimal place; a trailing `.0` is dropped.
#[must_use]
pub fn format_score(value: f64) -> String {
    if !value.is_finite() {
        return "–".to_owned();
    }
    let text = format!("{value:.1}");
    text.strip_suffix(".0").map_or(text.clone(), str::to_owned)
}

/// Percentage label, e.g. `80.6%`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "–".to_owned();
    }
    format!("{}%", format_score(value))
}

/// Truncate long category labels for axis display.
#[must_use]
pub fn short_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let keep = max_chars.saturating_sub(1);
    let mut out: String = label.chars().take(keep).collect();
    out.push('…');
    out
}
