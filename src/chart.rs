//! Geometry for the dashboard and budget charts. Everything here is plain math
//! over the numbers the backend returns; the SVG markup lives in
//! `components::charts`. A zero total always yields an empty chart.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

const MONTH_INITIALS: [&str; 12] = ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"];

/// Spending for one category, as `/finance/summary` reports it.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryTotal {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub total: f64,
}

/// One point of `/finance/trend`. `month` is `YYYY-MM`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MonthTotal {
    pub month: String,
    #[serde(default)]
    pub total: f64,
}

// ==================== Pie ====================

/// Gradient stops per slice; the last entry is reserved for "Others".
pub const PIE_PALETTE: [[&str; 3]; 6] = [
    ["#FF0080", "#FF4DA6", "#FF0066"],
    ["#00D4FF", "#4DE8FF", "#00B8E6"],
    ["#00FF88", "#4DFFA3", "#00E66B"],
    ["#FFD700", "#FFE44D", "#FFC700"],
    ["#9D50FF", "#B570FF", "#8B30FF"],
    ["#FF6B00", "#FF8C42", "#FF5500"],
];
const OTHERS_PALETTE: usize = 5;
const TOP_SLICES: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieGeometry {
    pub size: f64,
    pub radius: f64,
    pub depth: f64,
}

impl Default for PieGeometry {
    fn default() -> Self {
        PieGeometry {
            size: 300.0,
            radius: 135.0,
            depth: 8.0,
        }
    }
}

impl PieGeometry {
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Point on the rim, angles in degrees clockwise from twelve o'clock.
    fn point(&self, angle_deg: f64, offset: f64) -> (f64, f64) {
        let rad = (angle_deg - 90.0) * PI / 180.0;
        (
            self.center() + self.radius * rad.cos() + offset,
            self.center() + self.radius * rad.sin() + offset,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSegment {
    pub label: String,
    pub total: f64,
    pub palette: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub total: f64,
    pub palette: usize,
    pub fraction: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Empty when the slice has nothing to draw.
    pub path: String,
    pub shadow_path: String,
    pub mid_point: (f64, f64),
}

/// Top five spending categories plus an "Others" slice for the remainder.
/// With no categories at all a single "No Data" slice carries `fallback_total`.
pub fn spending_segments(categories: &[CategoryTotal], fallback_total: f64) -> Vec<PieSegment> {
    if categories.is_empty() {
        return vec![PieSegment {
            label: "No Data".to_string(),
            total: fallback_total.max(0.0),
            palette: OTHERS_PALETTE,
        }];
    }

    let mut sorted: Vec<&CategoryTotal> = categories.iter().filter(|c| c.total > 0.0).collect();
    sorted.sort_by(|a, b| b.total.total_cmp(&a.total));

    let all_total: f64 = sorted.iter().map(|c| c.total).sum();
    let mut segments: Vec<PieSegment> = sorted
        .iter()
        .take(TOP_SLICES)
        .enumerate()
        .map(|(index, c)| PieSegment {
            label: if c.category.is_empty() {
                "Unknown".to_string()
            } else {
                c.category.clone()
            },
            total: c.total,
            palette: index,
        })
        .collect();
    let top_total: f64 = segments.iter().map(|s| s.total).sum();
    let others = (all_total - top_total).max(0.0);

    if others > 0.0 || segments.len() < TOP_SLICES + 1 {
        segments.push(PieSegment {
            label: "Others".to_string(),
            total: others,
            palette: OTHERS_PALETTE,
        });
    }
    segments
}

/// Lays the segments out clockwise from twelve o'clock.
pub fn pie_slices(segments: &[PieSegment], fallback_total: f64, geometry: &PieGeometry) -> Vec<PieSlice> {
    let sum: f64 = segments.iter().map(|s| s.total).sum();
    let total = if sum > 0.0 { sum } else { fallback_total };
    let drawable = total.is_finite() && total > 0.0;

    let mut current = 0.0;
    segments
        .iter()
        .map(|segment| {
            let fraction = if drawable { segment.total / total } else { 0.0 };
            let start_angle = current;
            let end_angle = current + fraction * 360.0;
            current = end_angle;

            let visible = drawable && segment.total > 0.0;
            let (path, shadow_path) = if visible {
                (
                    arc_path(geometry, start_angle, end_angle, 0.0),
                    arc_path(geometry, start_angle, end_angle, geometry.depth),
                )
            } else {
                (String::new(), String::new())
            };

            PieSlice {
                label: segment.label.clone(),
                total: segment.total,
                palette: segment.palette,
                fraction,
                start_angle,
                end_angle,
                path,
                shadow_path,
                mid_point: geometry.point((start_angle + end_angle) / 2.0, 0.0),
            }
        })
        .collect()
}

fn arc_path(geometry: &PieGeometry, start: f64, end: f64, offset: f64) -> String {
    let c = geometry.center() + offset;
    let r = geometry.radius;

    // an arc whose endpoints coincide draws nothing, so a full circle is two halves
    if end - start >= 359.99 {
        return format!(
            "M {c:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {c:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {c:.2} {top:.2} Z",
            top = c - r,
            bottom = c + r,
        );
    }

    let (sx, sy) = geometry.point(start, offset);
    let (ex, ey) = geometry.point(end, offset);
    let large_arc = if end - start > 180.0 { 1 } else { 0 };
    format!("M {c:.2} {c:.2} L {sx:.2} {sy:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {ex:.2} {ey:.2} Z")
}

// ==================== Donut ====================

/// Circumference of the r=40 donut in the budget page's 100x100 viewBox.
pub const DONUT_CIRCUMFERENCE: f64 = 251.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutArcs {
    pub savings_dash: f64,
    pub expenses_dash: f64,
    /// Negative offset so the expense arc starts where savings ends.
    pub expenses_offset: f64,
}

pub fn donut_arcs(income: f64, savings: f64, expenses: f64) -> DonutArcs {
    let share = |part: f64| {
        if income > 0.0 && part.is_finite() {
            part / income * DONUT_CIRCUMFERENCE
        } else {
            0.0
        }
    };
    let savings_dash = share(savings);
    DonutArcs {
        savings_dash,
        expenses_dash: share(expenses),
        expenses_offset: -savings_dash,
    }
}

// ==================== Budget overview (stacked bars) ====================

pub const OVERVIEW_CHART_HEIGHT: f64 = 200.0;
const OVERVIEW_MIN_SCALE: f64 = 1000.0;
const LAST_YEAR_MIN_MONTHS: usize = 11;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverviewPeriod {
    LastYear,
    ThisYear,
    SixMonths,
}

impl OverviewPeriod {
    pub const ALL: [OverviewPeriod; 3] = [OverviewPeriod::LastYear, OverviewPeriod::ThisYear, OverviewPeriod::SixMonths];

    pub fn label(self) -> &'static str {
        match self {
            OverviewPeriod::LastYear => "Last Year",
            OverviewPeriod::ThisYear => "This Year",
            OverviewPeriod::SixMonths => "6 Months",
        }
    }

    /// How many recent months to request from `/finance/trend`.
    pub fn months_to_fetch(self, today: NaiveDate) -> u32 {
        match self {
            OverviewPeriod::LastYear => 12 + today.month(),
            OverviewPeriod::ThisYear => today.month(),
            OverviewPeriod::SixMonths => 6,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverviewTotals {
    pub income: f64,
    pub expenses: f64,
    pub scheduled: f64,
}

impl OverviewTotals {
    fn stacked(&self) -> f64 {
        self.income + self.expenses + self.scheduled
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthBar {
    pub month: String,
    pub label: &'static str,
    pub income: f64,
    pub expenses: f64,
    pub scheduled: f64,
    pub has_data: bool,
}

impl MonthBar {
    fn empty(year: i32, month: u32) -> Self {
        MonthBar {
            month: format!("{year}-{month:02}"),
            label: month_initial(month),
            income: 0.0,
            expenses: 0.0,
            scheduled: 0.0,
            has_data: false,
        }
    }

    fn with_data(month: &str, expenses: f64, totals: &OverviewTotals) -> Self {
        MonthBar {
            month: month.to_string(),
            label: parse_month(month).map(|(_, m)| month_initial(m)).unwrap_or(""),
            income: totals.income,
            expenses: expenses.abs(),
            scheduled: totals.scheduled,
            has_data: true,
        }
    }

    fn stacked(&self) -> f64 {
        self.income + self.expenses + self.scheduled
    }
}

/// Segment heights in pixels, bottom to top.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarStack {
    pub income: f64,
    pub expenses: f64,
    pub scheduled: f64,
}

fn month_initial(month: u32) -> &'static str {
    MONTH_INITIALS.get(month.wrapping_sub(1) as usize).copied().unwrap_or("")
}

/// Splits `YYYY-MM` (anything after the month is ignored).
fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, rest) = value.split_once('-')?;
    let month = rest.get(..2).unwrap_or(rest);
    let year = year.parse().ok()?;
    let month = month.parse().ok().filter(|m| (1..=12).contains(m))?;
    Some((year, month))
}

/// Builds the bars for the selected period. Income and scheduled savings are
/// not tracked per month, so every month with data reuses the current totals.
pub fn overview_bars(
    trend: &[MonthTotal],
    period: OverviewPeriod,
    today: NaiveDate,
    totals: &OverviewTotals,
) -> Vec<MonthBar> {
    let previous_year = today.year() - 1;
    let empty_last_year = || (1..=12).map(|m| MonthBar::empty(previous_year, m)).collect::<Vec<_>>();

    let bars = match period {
        OverviewPeriod::LastYear => {
            let last_year: Vec<&MonthTotal> = trend
                .iter()
                .filter(|t| parse_month(&t.month).map(|(y, _)| y) == Some(previous_year))
                .collect();
            if last_year.len() < LAST_YEAR_MIN_MONTHS {
                empty_last_year()
            } else {
                (1..=12)
                    .map(|m| {
                        let key = format!("{previous_year}-{m:02}");
                        match last_year.iter().find(|t| t.month == key) {
                            Some(t) => MonthBar::with_data(&key, t.total, totals),
                            None => MonthBar::empty(previous_year, m),
                        }
                    })
                    .collect()
            }
        }
        OverviewPeriod::ThisYear => {
            let mut bars: Vec<MonthBar> = trend
                .iter()
                .filter(|t| {
                    parse_month(&t.month)
                        .map(|(y, m)| y == today.year() && m <= today.month())
                        .unwrap_or(false)
                })
                .map(|t| MonthBar::with_data(&t.month, t.total, totals))
                .collect();
            if !bars.is_empty() {
                for m in 1..=today.month() {
                    let present = bars
                        .iter()
                        .any(|b| parse_month(&b.month).map(|(_, bm)| bm) == Some(m));
                    if !present {
                        bars.push(MonthBar::empty(today.year(), m));
                    }
                }
                bars.sort_by_key(|b| parse_month(&b.month));
            }
            bars
        }
        OverviewPeriod::SixMonths => trend
            .iter()
            .map(|t| MonthBar::with_data(&t.month, t.total, totals))
            .collect(),
    };

    if !bars.is_empty() {
        return bars;
    }
    match period {
        OverviewPeriod::LastYear => empty_last_year(),
        _ => vec![MonthBar {
            month: format!("{}-{:02}", today.year(), today.month()),
            label: month_initial(today.month()),
            income: totals.income,
            expenses: totals.expenses,
            scheduled: totals.scheduled,
            has_data: true,
        }],
    }
}

/// Scales every bar against the tallest stack (never below 1000) so bars
/// share one axis. Visible segments are at least one pixel tall.
pub fn stack_heights(bars: &[MonthBar], totals: &OverviewTotals, chart_height: f64) -> Vec<BarStack> {
    let max_value = bars
        .iter()
        .filter(|b| b.has_data)
        .map(MonthBar::stacked)
        .chain([totals.stacked(), OVERVIEW_MIN_SCALE])
        .filter(|v| v.is_finite())
        .fold(OVERVIEW_MIN_SCALE, f64::max);

    let scale = |value: f64| {
        let height = value / max_value * chart_height;
        if height > 0.0 {
            height.max(1.0)
        } else {
            0.0
        }
    };

    bars.iter()
        .map(|bar| {
            if bar.has_data {
                BarStack {
                    income: scale(bar.income),
                    expenses: scale(bar.expenses),
                    scheduled: scale(bar.scheduled),
                }
            } else {
                BarStack::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(category: &str, total: f64) -> CategoryTotal {
        CategoryTotal {
            category: category.to_string(),
            total,
        }
    }

    fn month(month: &str, total: f64) -> MonthTotal {
        MonthTotal {
            month: month.to_string(),
            total,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn assert_finite(slice: &PieSlice) {
        assert!(slice.fraction.is_finite());
        assert!(slice.start_angle.is_finite());
        assert!(slice.end_angle.is_finite());
        assert!(slice.mid_point.0.is_finite() && slice.mid_point.1.is_finite());
        assert!(!slice.path.contains("NaN") && !slice.path.contains("inf"));
    }

    #[test]
    fn test_segments_keep_top_five_and_others() {
        let categories = vec![
            cat("Food", 500.0),
            cat("Rent", 900.0),
            cat("Fuel", 100.0),
            cat("Fun", 50.0),
            cat("Books", 40.0),
            cat("Gifts", 30.0),
            cat("Misc", 20.0),
            cat("Refund", -10.0),
        ];
        let segments = spending_segments(&categories, 0.0);
        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Rent", "Food", "Fuel", "Fun", "Books", "Others"]);
        assert_eq!(segments[5].total, 50.0);
        assert_eq!(segments[5].palette, 5);
    }

    #[test]
    fn test_segments_without_categories() {
        let segments = spending_segments(&[], 120.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].label, "No Data");
    }

    #[test]
    fn test_pie_angles_cover_circle() {
        let segments = spending_segments(&[cat("Food", 300.0), cat("Rent", 100.0)], 0.0);
        let slices = pie_slices(&segments, 0.0, &PieGeometry::default());
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices[0].end_angle - 270.0).abs() < 1e-9);
        assert!((slices[1].end_angle - 360.0).abs() < 1e-9);
        // the zero "Others" slice has nothing to draw
        assert_eq!(slices[2].fraction, 0.0);
        assert!(slices[2].path.is_empty());
        assert!(slices[0].path.contains(" 0 1 1 "), "large arc flag for 270 degrees");
    }

    #[test]
    fn test_pie_zero_total_is_empty_not_nan() {
        let segments = spending_segments(&[cat("Food", 0.0)], 0.0);
        let slices = pie_slices(&segments, 0.0, &PieGeometry::default());
        for slice in &slices {
            assert_finite(slice);
            assert!(slice.path.is_empty());
            assert!(slice.shadow_path.is_empty());
        }

        let slices = pie_slices(&spending_segments(&[], 0.0), 0.0, &PieGeometry::default());
        assert_finite(&slices[0]);
        assert_eq!(slices[0].fraction, 0.0);
    }

    #[test]
    fn test_single_slice_draws_full_circle() {
        let segments = spending_segments(&[], 500.0);
        let slices = pie_slices(&segments, 500.0, &PieGeometry::default());
        assert_eq!(slices[0].fraction, 1.0);
        assert!(slices[0].path.starts_with("M 150.00 15.00 A"));
        assert!(slices[0].shadow_path.starts_with("M 158.00 23.00 A"));
    }

    #[test]
    fn test_donut_arcs() {
        let arcs = donut_arcs(5000.0, 1000.0, 2500.0);
        assert!((arcs.savings_dash - 50.2).abs() < 1e-9);
        assert!((arcs.expenses_dash - 125.5).abs() < 1e-9);
        assert_eq!(arcs.expenses_offset, -arcs.savings_dash);

        let empty = donut_arcs(0.0, 1000.0, 2500.0);
        assert_eq!(empty.savings_dash, 0.0);
        assert_eq!(empty.expenses_dash, 0.0);
    }

    #[test]
    fn test_months_to_fetch() {
        let today = date(2025, 3, 14);
        assert_eq!(OverviewPeriod::LastYear.months_to_fetch(today), 15);
        assert_eq!(OverviewPeriod::ThisYear.months_to_fetch(today), 3);
        assert_eq!(OverviewPeriod::SixMonths.months_to_fetch(today), 6);
    }

    #[test]
    fn test_last_year_needs_eleven_months() {
        let today = date(2025, 3, 14);
        let totals = OverviewTotals::default();
        let sparse = vec![month("2024-01", -100.0), month("2024-02", -50.0)];
        let bars = overview_bars(&sparse, OverviewPeriod::LastYear, today, &totals);
        assert_eq!(bars.len(), 12);
        assert!(bars.iter().all(|b| !b.has_data));
        assert_eq!(bars[0].month, "2024-01");

        let full: Vec<MonthTotal> = (1..=11).map(|m| month(&format!("2024-{m:02}"), -10.0)).collect();
        let bars = overview_bars(&full, OverviewPeriod::LastYear, today, &totals);
        assert_eq!(bars.iter().filter(|b| b.has_data).count(), 11);
        assert!(!bars[11].has_data);
        assert_eq!(bars[0].expenses, 10.0);
    }

    #[test]
    fn test_this_year_fills_missing_months() {
        let today = date(2025, 4, 2);
        let totals = OverviewTotals {
            income: 5000.0,
            expenses: 0.0,
            scheduled: 1000.0,
        };
        let trend = vec![month("2025-03", -800.0), month("2024-12", -10.0), month("2025-01", -200.0)];
        let bars = overview_bars(&trend, OverviewPeriod::ThisYear, today, &totals);
        let months: Vec<&str> = bars.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(months, vec!["2025-01", "2025-02", "2025-03", "2025-04"]);
        assert!(bars[0].has_data && !bars[1].has_data && bars[2].has_data && !bars[3].has_data);
        assert_eq!(bars[2].income, 5000.0);
        assert_eq!(bars[1].label, "F");
    }

    #[test]
    fn test_empty_trend_falls_back_to_current_month() {
        let today = date(2025, 6, 1);
        let totals = OverviewTotals {
            income: 100.0,
            expenses: 40.0,
            scheduled: 10.0,
        };
        let bars = overview_bars(&[], OverviewPeriod::SixMonths, today, &totals);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].month, "2025-06");
        assert_eq!(bars[0].expenses, 40.0);
    }

    #[test]
    fn test_stack_heights_scale_and_zero_totals() {
        let totals = OverviewTotals {
            income: 2000.0,
            expenses: 1000.0,
            scheduled: 1000.0,
        };
        let bars = vec![
            MonthBar::with_data("2025-01", 1000.0, &totals),
            MonthBar::empty(2025, 2),
        ];
        let stacks = stack_heights(&bars, &totals, OVERVIEW_CHART_HEIGHT);
        assert_eq!(stacks[0].income, 100.0);
        assert_eq!(stacks[0].expenses, 50.0);
        assert_eq!(stacks[1], BarStack::default());

        let zero = OverviewTotals::default();
        let stacks = stack_heights(&[MonthBar::with_data("2025-01", 0.0, &zero)], &zero, OVERVIEW_CHART_HEIGHT);
        assert_eq!(stacks[0], BarStack::default());
    }

    #[test]
    fn test_tiny_segments_stay_visible() {
        let totals = OverviewTotals {
            income: 1_000_000.0,
            expenses: 0.0,
            scheduled: 0.0,
        };
        let bars = vec![MonthBar::with_data("2025-01", 1.0, &totals)];
        let stacks = stack_heights(&bars, &totals, OVERVIEW_CHART_HEIGHT);
        assert_eq!(stacks[0].expenses, 1.0);
    }
}
