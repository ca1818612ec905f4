//! Price history sparklines
//!
//! Turns a price series into the geometry of a small SVG polyline. The
//! result carries no styling; callers choose a stroke from `trending_up`.

use crate::models::PriceHistoryPoint;
use serde::Serialize;

/// Stroke used when the series ends at or above where it started
pub const STROKE_UP: &str = "#10b981";
/// Stroke used when the series ends below where it started
pub const STROKE_DOWN: &str = "#ef4444";

/// Drawing area in SVG user units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SparklineSize {
    pub width: f64,
    pub height: f64,
}

impl Default for SparklineSize {
    fn default() -> Self {
        Self {
            width: 120.0,
            height: 36.0,
        }
    }
}

/// A rendered sparkline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sparkline {
    /// SVG path data: `M x,y L x,y ...`
    pub path: String,
    /// Points in drawing order
    pub points: Vec<(f64, f64)>,
    pub width: f64,
    pub height: f64,
    /// Last price is greater than or equal to the first
    pub trending_up: bool,
}

impl Sparkline {
    /// Build a sparkline from price history.
    ///
    /// Points without a finite price are skipped. Fewer than two usable
    /// prices means there is nothing to draw and `None` is returned.
    pub fn from_history(history: &[PriceHistoryPoint], size: SparklineSize) -> Option<Self> {
        let prices: Vec<f64> = history.iter().filter_map(|point| point.price).collect();
        Self::from_prices(&prices, size)
    }

    /// Build a sparkline from raw prices; non-finite values are skipped.
    pub fn from_prices(prices: &[f64], size: SparklineSize) -> Option<Self> {
        let prices: Vec<f64> = prices.iter().copied().filter(|p| p.is_finite()).collect();
        if prices.len() < 2 {
            return None;
        }
        // Need at least one unit of padding on each side.
        if !(size.width >= 2.0 && size.height >= 2.0) {
            return None;
        }

        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let flat = max == min;
        let range = if flat { 1.0 } else { max - min };

        let step = (size.width - 2.0) / (prices.len() - 1) as f64;
        let inner_height = size.height - 2.0;

        let points: Vec<(f64, f64)> = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let x = 1.0 + i as f64 * step;
                let y = if flat {
                    size.height / 2.0
                } else {
                    1.0 + (1.0 - (price - min) / range) * inner_height
                };
                (x, y.clamp(1.0, size.height - 1.0))
            })
            .collect();

        let path = points
            .iter()
            .map(|&(x, y)| format!("{},{}", coord(x), coord(y)))
            .collect::<Vec<_>>()
            .join(" L ");

        let first = prices[0];
        let last = prices[prices.len() - 1];

        Some(Self {
            path: format!("M{}", path),
            points,
            width: size.width,
            height: size.height,
            trending_up: last >= first,
        })
    }

    /// Stroke colour matching the trend
    pub fn stroke_color(&self) -> &'static str {
        if self.trending_up {
            STROKE_UP
        } else {
            STROKE_DOWN
        }
    }

    /// SVG `viewBox` attribute value
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", coord(self.width), coord(self.height))
    }
}

/// Two decimals are plenty for a 120 unit wide chart.
fn coord(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(prices: &[f64]) -> Vec<PriceHistoryPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| PriceHistoryPoint::new(p, 1_700_000_000 + i as i64 * 86_400))
            .collect()
    }

    #[test]
    fn test_short_history_has_no_sparkline() {
        let size = SparklineSize::default();
        assert!(Sparkline::from_history(&[], size).is_none());
        assert!(Sparkline::from_history(&history(&[3.0]), size).is_none());
    }

    #[test]
    fn test_invalid_points_do_not_count() {
        let mut points = history(&[3.0]);
        points.push(PriceHistoryPoint { price: None, timestamp: Some(1) });
        points.push(PriceHistoryPoint { price: Some(f64::NAN), timestamp: Some(2) });
        assert!(Sparkline::from_history(&points, SparklineSize::default()).is_none());
    }

    #[test]
    fn test_rising_series_geometry() {
        let spark = Sparkline::from_history(&history(&[1.0, 2.0, 3.0]), SparklineSize::default())
            .unwrap();

        assert!(spark.trending_up);
        assert_eq!(spark.points, vec![(1.0, 35.0), (60.0, 18.0), (119.0, 1.0)]);
        assert_eq!(spark.path, "M1,35 L60,18 L119,1");
        assert_eq!(spark.stroke_color(), STROKE_UP);
        assert_eq!(spark.view_box(), "0 0 120 36");
    }

    #[test]
    fn test_falling_series() {
        let spark = Sparkline::from_prices(&[10.0, 4.0], SparklineSize::default()).unwrap();
        assert!(!spark.trending_up);
        assert_eq!(spark.stroke_color(), STROKE_DOWN);
        assert_eq!(spark.points.first(), Some(&(1.0, 1.0)));
        assert_eq!(spark.points.last(), Some(&(119.0, 35.0)));
    }

    #[test]
    fn test_flat_series_is_centered_and_up() {
        let spark = Sparkline::from_prices(&[5.0, 5.0, 5.0, 5.0], SparklineSize::default()).unwrap();
        assert!(spark.trending_up);
        assert!(spark.points.iter().all(|&(_, y)| y == 18.0));
        assert!(spark.points.iter().all(|&(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn test_points_stay_inside_padding() {
        let size = SparklineSize { width: 80.0, height: 20.0 };
        let spark = Sparkline::from_prices(&[0.5, 900.0, 12.0, 0.01, 44.0], size).unwrap();

        for &(x, y) in &spark.points {
            assert!((1.0..=79.0).contains(&x));
            assert!((1.0..=19.0).contains(&y));
        }
        let xs: Vec<f64> = spark.points.iter().map(|p| p.0).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_degenerate_size() {
        let size = SparklineSize { width: 1.0, height: 36.0 };
        assert!(Sparkline::from_prices(&[1.0, 2.0], size).is_none());
    }
}
