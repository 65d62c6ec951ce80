use crate::models::metrics::MetricsSnapshot;
use crate::models::trend::{ChartGeometry, ChartPoint, LineChart, TrendDataPoint};

/// Maps a series onto the chart's viewBox: x spreads points evenly between
/// the paddings, y scales each value between the series min and max with the
/// max at the top. A flat series uses a range of 1.
pub fn line_chart_points(data: &[TrendDataPoint], geometry: &ChartGeometry) -> Vec<ChartPoint> {
    if data.is_empty() {
        return Vec::new();
    }

    let max = data.iter().map(|d| d.value).fold(f64::NEG_INFINITY, f64::max);
    let min = data.iter().map(|d| d.value).fold(f64::INFINITY, f64::min);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let ChartGeometry {
        width,
        height,
        padding,
    } = *geometry;
    let last = data.len() - 1;

    data.iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if last == 0 {
                padding
            } else {
                index as f64 / last as f64 * (width - padding * 2.0) + padding
            };
            let y = height - (point.value - min) / range * (height - padding * 2.0) - padding;
            ChartPoint { x, y }
        })
        .collect()
}

pub fn svg_polyline(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polyline closed down to the x axis, for the filled area under the line.
pub fn area_polygon(points: &[ChartPoint], geometry: &ChartGeometry) -> String {
    let baseline = geometry.height - geometry.padding;
    format!(
        "{},{} {} {},{}",
        geometry.padding,
        baseline,
        svg_polyline(points),
        geometry.width - geometry.padding,
        baseline
    )
}

pub fn line_chart(data: &[TrendDataPoint], geometry: &ChartGeometry) -> LineChart {
    let points = line_chart_points(data, geometry);
    LineChart {
        geometry: *geometry,
        polyline: svg_polyline(&points),
        area: area_polygon(&points, geometry),
        labels: data.iter().map(|d| d.label.clone()).collect(),
        points,
    }
}

/// Bar lengths as a percentage of `max`, or of the largest value when no
/// positive max is given.
pub fn bar_widths(values: &[f64], max: Option<f64>) -> Vec<f64> {
    let max = max
        .filter(|m| *m > 0.0)
        .unwrap_or_else(|| values.iter().copied().fold(0.0, f64::max));

    if max <= 0.0 {
        return vec![0.0; values.len()];
    }

    values.iter().map(|v| v / max * 100.0).collect()
}

/// After-improvement bars on a shared 0-100 scale: conversion x10, rating x20.
pub fn re_evaluation_bars(after: &MetricsSnapshot) -> Vec<TrendDataPoint> {
    vec![
        TrendDataPoint::new("Visibility Score", after.avg_visibility_score),
        TrendDataPoint::new("Conversion Rate", after.avg_conversion_rate * 10.0),
        TrendDataPoint::new("Avg Rating", after.avg_rating * 20.0),
    ]
}
