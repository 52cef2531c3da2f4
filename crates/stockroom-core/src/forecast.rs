//! # Sales Forecast
//!
//! Single-variable linear trend fit over daily sale totals.
//!
//! ## How Forecasting Works
//! ```text
//! daily totals        day offsets          fitted line
//! ─────────────       ────────────         ──────────────────────────
//! 2026-07-01: 5   →   (0, 5)           →   quantity = 2·offset + 5
//! 2026-07-02: 7   →   (1, 7)               project offset 2 → 9.0
//! ```
//!
//! The fit is ordinary least squares in its mean-centered closed form:
//! two parameters, no regularization. Fewer than two distinct sale days
//! cannot anchor a line, so that case is reported as
//! [`Prediction::InsufficientData`] - an expected outcome, not an error.
//!
//! The projection is returned as a raw f64: it may be fractional, and a
//! declining trend may project below zero. Interpreting that is the
//! caller's business.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Inputs
// =============================================================================

/// Total quantity sold of one item on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySales {
    /// Calendar day (UTC).
    pub day: NaiveDate,

    /// Units sold that day, summed over all sale events.
    pub quantity: i64,
}

// =============================================================================
// Trend Line
// =============================================================================

/// A fitted line `quantity = slope * day_offset + intercept`, where
/// `day_offset` counts days since the earliest day in the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Evaluates the line at the given day offset.
    #[inline]
    pub fn project(&self, day_offset: f64) -> f64 {
        self.slope * day_offset + self.intercept
    }
}

/// Fits an ordinary-least-squares line through `(x, y)` points.
///
/// Mean-centered closed form:
/// ```text
/// slope     = Σ (x - x̄)(y - ȳ) / Σ (x - x̄)²
/// intercept = ȳ - slope · x̄
/// ```
///
/// Returns `None` when fewer than two points are given, or when every x
/// is identical (a vertical spread has no defined slope).
pub fn fit_trend(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (x, y) in points {
        covariance += (x - mean_x) * (y - mean_y);
        variance += (x - mean_x) * (x - mean_x);
    }

    if variance == 0.0 {
        return None;
    }

    let slope = covariance / variance;
    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

// =============================================================================
// Prediction
// =============================================================================

/// Result of a sales forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    /// Projected quantity for the day after the latest observed sale day.
    Forecast { quantity: f64, trend: TrendLine },

    /// Fewer than two distinct sale days in the window; no line can be
    /// fitted. A normal outcome, communicated as a value.
    InsufficientData,
}

/// Fits a trend over per-day sale totals and projects one day past the
/// latest observed day.
///
/// Each day is encoded as its offset from the earliest day present, so
/// gaps (days with no sales) simply do not contribute points - matching
/// how the history is aggregated. Input order does not matter.
pub fn predict_next_day(daily: &[DailySales]) -> Prediction {
    let earliest = match daily.iter().map(|d| d.day).min() {
        Some(day) => day,
        None => return Prediction::InsufficientData,
    };

    let points: Vec<(f64, f64)> = daily
        .iter()
        .map(|d| {
            let offset = (d.day - earliest).num_days();
            (offset as f64, d.quantity as f64)
        })
        .collect();

    let trend = match fit_trend(&points) {
        Some(trend) => trend,
        None => return Prediction::InsufficientData,
    };

    let last_offset = points
        .iter()
        .map(|(x, _)| *x)
        .fold(0.0_f64, f64::max);

    Prediction::Forecast {
        quantity: trend.project(last_offset + 1.0),
        trend,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 7, n).unwrap()
    }

    fn sales(days: &[(u32, i64)]) -> Vec<DailySales> {
        days.iter()
            .map(|&(d, quantity)| DailySales {
                day: day(d),
                quantity,
            })
            .collect()
    }

    #[test]
    fn test_two_points_fit_exactly() {
        // (0, 5), (1, 7): slope 2, intercept 5, next-day projection 9.
        let prediction = predict_next_day(&sales(&[(1, 5), (2, 7)]));

        match prediction {
            Prediction::Forecast { quantity, trend } => {
                assert!((trend.slope - 2.0).abs() < EPS);
                assert!((trend.intercept - 5.0).abs() < EPS);
                assert!((quantity - 9.0).abs() < EPS);
            }
            Prediction::InsufficientData => panic!("expected a forecast"),
        }
    }

    #[test]
    fn test_fewer_than_two_days_is_insufficient() {
        assert_eq!(predict_next_day(&[]), Prediction::InsufficientData);
        assert_eq!(
            predict_next_day(&sales(&[(1, 42)])),
            Prediction::InsufficientData
        );
    }

    #[test]
    fn test_declining_trend_may_project_negative() {
        // (0, 1), (1, 0): slope -1, projection for day 2 is -1.
        let prediction = predict_next_day(&sales(&[(1, 1), (2, 0)]));

        match prediction {
            Prediction::Forecast { quantity, .. } => {
                assert!((quantity - (-1.0)).abs() < EPS);
            }
            Prediction::InsufficientData => panic!("expected a forecast"),
        }
    }

    #[test]
    fn test_fractional_projection() {
        // (0, 1), (1, 2), (2, 2): slope 0.5, intercept 7/6, day 3 -> 8/3.
        let prediction = predict_next_day(&sales(&[(1, 1), (2, 2), (3, 2)]));

        match prediction {
            Prediction::Forecast { quantity, trend } => {
                assert!((trend.slope - 0.5).abs() < EPS);
                assert!((trend.intercept - 7.0 / 6.0).abs() < EPS);
                assert!((quantity - 8.0 / 3.0).abs() < EPS);
            }
            Prediction::InsufficientData => panic!("expected a forecast"),
        }
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let sorted = predict_next_day(&sales(&[(1, 5), (2, 7), (3, 6)]));
        let shuffled = predict_next_day(&sales(&[(3, 6), (1, 5), (2, 7)]));
        assert_eq!(sorted, shuffled);
    }

    #[test]
    fn test_gap_days_contribute_no_points() {
        // Days 1 and 4 with a gap: offsets 0 and 3, projection at offset 4.
        // slope = (8 - 2) / 3 = 2, intercept 2, offset 4 -> 10.
        let prediction = predict_next_day(&sales(&[(1, 2), (4, 8)]));

        match prediction {
            Prediction::Forecast { quantity, trend } => {
                assert!((trend.slope - 2.0).abs() < EPS);
                assert!((quantity - 10.0).abs() < EPS);
            }
            Prediction::InsufficientData => panic!("expected a forecast"),
        }
    }

    #[test]
    fn test_fit_trend_rejects_degenerate_input() {
        assert!(fit_trend(&[]).is_none());
        assert!(fit_trend(&[(0.0, 1.0)]).is_none());
        // Identical x values: no defined slope.
        assert!(fit_trend(&[(1.0, 1.0), (1.0, 5.0)]).is_none());
    }
}
