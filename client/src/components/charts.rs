//! SVG bar and line charts for analytics pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both charts draw into a fixed `viewBox` and scale with CSS. Geometry comes
//! from `util::chart`; these components only emit SVG elements.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use leptos::prelude::*;

use crate::util::chart::{axis_ticks, bar_layout, format_score, line_points, nice_axis_max, short_label, slot_center};

const VIEW_WIDTH: f64 = 480.0;
const VIEW_HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 36.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
const TICK_COUNT: u32 = 4;
const LABEL_CHARS: usize = 10;

const PLOT_WIDTH: f64 = VIEW_WIDTH - MARGIN_LEFT - 8.0;
const PLOT_HEIGHT: f64 = VIEW_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Axis limit for a series; `fixed_max` wins when given (e.g. 100 for scores).
fn axis_max(values: &[f64], fixed_max: Option<f64>) -> f64 {
    fixed_max.filter(|m| *m > 0.0).unwrap_or_else(|| {
        let max = values.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max);
        nice_axis_max(max)
    })
}

fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

fn y_axis(max: f64) -> impl IntoView {
    axis_ticks(max, TICK_COUNT)
        .into_iter()
        .map(|tick| {
            let y = MARGIN_TOP + PLOT_HEIGHT - PLOT_HEIGHT * tick / max;
            view! {
                <line class="chart__grid" x1=MARGIN_LEFT x2={MARGIN_LEFT + PLOT_WIDTH} y1=y y2=y></line>
                <text class="chart__tick" x={MARGIN_LEFT - 4.0} y={y + 3.0} text-anchor="end">
                    {format_score(tick)}
                </text>
            }
        })
        .collect_view()
}

fn x_labels(labels: &[String]) -> impl IntoView {
    let len = labels.len();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = MARGIN_LEFT + slot_center(i, len, PLOT_WIDTH);
            view! {
                <text class="chart__label" x=x y={VIEW_HEIGHT - 12.0} text-anchor="middle">
                    {short_label(label, LABEL_CHARS)}
                </text>
            }
        })
        .collect_view()
}

fn empty_chart(title: &'static str) -> AnyView {
    view! {
        <figure class="chart chart--empty">
            <figcaption>{title}</figcaption>
            <p class="chart__empty">"No data for this selection."</p>
        </figure>
    }
    .into_any()
}

/// Vertical bars, one per label.
#[component]
pub fn BarChart(
    title: &'static str,
    labels: Vec<String>,
    values: Vec<f64>,
    #[prop(optional)] max: Option<f64>,
) -> impl IntoView {
    if values.is_empty() {
        return empty_chart(title);
    }
    let max = axis_max(&values, max);
    let bars = bar_layout(&values, PLOT_WIDTH, PLOT_HEIGHT, max, 0.3);

    view! {
        <figure class="chart chart--bar">
            <figcaption>{title}</figcaption>
            <svg class="chart__svg" viewBox=view_box() role="img" aria-label=title>
                {y_axis(max)}
                {bars
                    .into_iter()
                    .zip(values)
                    .map(|(bar, value)| {
                        let x = MARGIN_LEFT + bar.x;
                        let y = MARGIN_TOP + bar.y;
                        view! {
                            <rect class="chart__bar" x=x y=y width=bar.width height=bar.height rx="2"></rect>
                            <text class="chart__value" x={x + bar.width / 2.0} y={y - 4.0} text-anchor="middle">
                                {format_score(value)}
                            </text>
                        }
                    })
                    .collect_view()}
                {x_labels(&labels)}
            </svg>
        </figure>
    }
    .into_any()
}

/// Polyline through one point per label.
#[component]
pub fn LineChart(
    title: &'static str,
    labels: Vec<String>,
    values: Vec<f64>,
    #[prop(optional)] max: Option<f64>,
) -> impl IntoView {
    if values.is_empty() {
        return empty_chart(title);
    }
    let max = axis_max(&values, max);
    let points = line_points(&values, PLOT_WIDTH, PLOT_HEIGHT, max);
    let transform = format!("translate({MARGIN_LEFT} {MARGIN_TOP})");
    let len = values.len();

    view! {
        <figure class="chart chart--line">
            <figcaption>{title}</figcaption>
            <svg class="chart__svg" viewBox=view_box() role="img" aria-label=title>
                {y_axis(max)}
                <g transform=transform>
                    <polyline class="chart__line" points=points fill="none"></polyline>
                    {values
                        .iter()
                        .enumerate()
                        .map(|(i, value)| {
                            let clamped = if value.is_finite() { value.clamp(0.0, max) } else { 0.0 };
                            let cx = slot_center(i, len, PLOT_WIDTH);
                            let cy = PLOT_HEIGHT - PLOT_HEIGHT * clamped / max;
                            view! {
                                <circle class="chart__point" cx=cx cy=cy r="3"></circle>
                            }
                        })
                        .collect_view()}
                </g>
                {x_labels(&labels)}
            </svg>
        </figure>
    }
    .into_any()
}
