//! Equity curve projection onto a fixed logical canvas.
//!
//! Pure mapping from a date-ordered portfolio series to 2-D plot
//! points. Decimal values are converted to f64 only here, at the
//! rendering boundary. Degenerate inputs have defined shapes: a flat
//! series collapses to the vertical center, a single point sits at the
//! left padding edge, and an empty series yields no curve at all.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use swarm_common::PortfolioSnapshot;

/// Logical canvas the curve is projected into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    /// Canvas width in logical units.
    pub width: f64,

    /// Canvas height in logical units.
    pub height: f64,

    /// Padding on all four sides; points stay inside it.
    pub padding: f64,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 300.0,
            padding: 24.0,
        }
    }
}

/// A projected point in canvas coordinates. y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Curve trend, chosen from the sign of the LAST snapshot's
/// `total_pnl`, not the series' net change. A curve that was net
/// negative but just turned positive renders as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

impl Trend {
    /// Stroke color for the curve.
    pub fn stroke(&self) -> &'static str {
        match self {
            Trend::Positive => "#22c55e",
            Trend::Negative => "#ef4444",
        }
    }

    /// Fill color under the curve.
    pub fn fill(&self) -> &'static str {
        match self {
            Trend::Positive => "rgba(34, 197, 94, 0.12)",
            Trend::Negative => "rgba(239, 68, 68, 0.12)",
        }
    }
}

/// A projected equity curve ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityCurve {
    /// One point per snapshot, in input order.
    pub points: Vec<PlotPoint>,

    /// Trend from the last snapshot's P&L sign.
    pub trend: Trend,
}

/// Project a date-ordered series into canvas coordinates.
///
/// Returns `None` for an empty series; callers render their own
/// "no data" placeholder instead of a curve computed over empty
/// bounds.
pub fn project(snapshots: &[PortfolioSnapshot], geometry: &CanvasGeometry) -> Option<EquityCurve> {
    let last = snapshots.last()?;

    let min = snapshots
        .iter()
        .map(|s| s.total_value)
        .min()
        .unwrap_or(Decimal::ZERO);
    let max = snapshots
        .iter()
        .map(|s| s.total_value)
        .max()
        .unwrap_or(Decimal::ZERO);

    // A flat series carries no vertical information; rather than divide
    // by zero, every point collapses to the vertical center.
    let flat = max == min;
    let range = if flat { Decimal::ONE } else { max - min };

    let min_f = min.to_f64().unwrap_or(0.0);
    let range_f = range.to_f64().unwrap_or(1.0);

    let inner_width = geometry.width - 2.0 * geometry.padding;
    let inner_height = geometry.height - 2.0 * geometry.padding;

    // n = 1 must not divide by zero; the single point sits at the left
    // padding boundary.
    let x_step = if snapshots.len() > 1 {
        inner_width / (snapshots.len() - 1) as f64
    } else {
        0.0
    };

    let points = snapshots
        .iter()
        .enumerate()
        .map(|(i, snap)| {
            let value = snap.total_value.to_f64().unwrap_or(min_f);
            let normalized = if flat {
                0.5
            } else {
                (value - min_f) / range_f
            };
            PlotPoint {
                x: geometry.padding + x_step * i as f64,
                // Inverted: higher value, smaller y.
                y: geometry.padding + (1.0 - normalized) * inner_height,
            }
        })
        .collect();

    let trend = if last.total_pnl >= Decimal::ZERO {
        Trend::Positive
    } else {
        Trend::Negative
    };

    Some(EquityCurve { points, trend })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn snapshot(day: u32, total_value: Decimal, total_pnl: Decimal) -> PortfolioSnapshot {
        PortfolioSnapshot {
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            total_value,
            total_pnl,
            total_pnl_pct: dec!(0),
            win_rate: None,
            sharpe_ratio: None,
            max_drawdown: None,
        }
    }

    fn geometry() -> CanvasGeometry {
        CanvasGeometry::default()
    }

    #[test]
    fn test_empty_series_yields_no_curve() {
        assert_eq!(project(&[], &geometry()), None);
    }

    #[test]
    fn test_point_count_matches_input() {
        for n in 1..=20u32 {
            let series: Vec<_> = (1..=n)
                .map(|i| snapshot(i.min(28), dec!(10000) + Decimal::from(i), dec!(1)))
                .collect();
            let curve = project(&series, &geometry()).unwrap();
            assert_eq!(curve.points.len(), n as usize);
        }
    }

    #[test]
    fn test_all_points_within_padded_bounds() {
        let geo = geometry();
        let series = vec![
            snapshot(1, dec!(10000), dec!(0)),
            snapshot(2, dec!(10500), dec!(500)),
            snapshot(3, dec!(9800), dec!(-200)),
            snapshot(4, dec!(11200), dec!(1200)),
        ];
        let curve = project(&series, &geo).unwrap();

        for point in &curve.points {
            assert!(point.x >= geo.padding && point.x <= geo.width - geo.padding);
            assert!(point.y >= geo.padding && point.y <= geo.height - geo.padding);
        }
    }

    #[test]
    fn test_single_point_at_left_padding_vertical_center() {
        let geo = geometry();
        let curve = project(&[snapshot(1, dec!(10000), dec!(0))], &geo).unwrap();

        assert_eq!(curve.points.len(), 1);
        let point = curve.points[0];
        assert_eq!(point.x, geo.padding);
        assert_eq!(point.y, geo.height / 2.0);
    }

    #[test]
    fn test_flat_series_all_y_equal() {
        let series = vec![
            snapshot(1, dec!(10000), dec!(0)),
            snapshot(2, dec!(10000), dec!(0)),
            snapshot(3, dec!(10000), dec!(0)),
        ];
        let curve = project(&series, &geometry()).unwrap();

        let first_y = curve.points[0].y;
        assert!(curve.points.iter().all(|p| p.y == first_y));
        assert_eq!(first_y, geometry().height / 2.0);
    }

    #[test]
    fn test_higher_value_has_smaller_y() {
        let series = vec![
            snapshot(1, dec!(10000), dec!(0)),
            snapshot(2, dec!(12000), dec!(2000)),
        ];
        let curve = project(&series, &geometry()).unwrap();
        assert!(curve.points[1].y < curve.points[0].y);
    }

    #[test]
    fn test_x_spans_padded_width() {
        let geo = geometry();
        let series = vec![
            snapshot(1, dec!(10000), dec!(0)),
            snapshot(2, dec!(10100), dec!(100)),
            snapshot(3, dec!(10200), dec!(200)),
        ];
        let curve = project(&series, &geo).unwrap();

        assert_eq!(curve.points[0].x, geo.padding);
        assert_eq!(curve.points[2].x, geo.width - geo.padding);
    }

    #[test]
    fn test_trend_from_last_pnl_sign_not_net_change() {
        // Net-down series whose last snapshot just turned positive.
        let series = vec![
            snapshot(1, dec!(12000), dec!(2000)),
            snapshot(2, dec!(9000), dec!(-1000)),
            snapshot(3, dec!(10050), dec!(50)),
        ];
        let curve = project(&series, &geometry()).unwrap();
        assert_eq!(curve.trend, Trend::Positive);
        assert_eq!(curve.trend.stroke(), "#22c55e");
    }

    #[test]
    fn test_trend_negative_when_last_pnl_negative() {
        let series = vec![
            snapshot(1, dec!(10000), dec!(500)),
            snapshot(2, dec!(9400), dec!(-600)),
        ];
        let curve = project(&series, &geometry()).unwrap();
        assert_eq!(curve.trend, Trend::Negative);
    }

    #[test]
    fn test_trend_zero_pnl_renders_positive() {
        let curve = project(&[snapshot(1, dec!(10000), dec!(0))], &geometry()).unwrap();
        assert_eq!(curve.trend, Trend::Positive);
    }
}
