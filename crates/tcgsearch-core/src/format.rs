//! Display formatters for prices and price changes

use serde::Serialize;
use tcgsearch_utils::group_thousands;

/// Shown wherever a number is missing or unusable
pub const PLACEHOLDER: &str = "—";

/// Round to cents, halves away from zero. `{:.2}` alone rounds ties to even.
fn round_cents(v: f64) -> f64 {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded.is_finite() {
        rounded
    } else {
        v
    }
}

/// Format a price as US dollars: `$1,234.50`, `-$5.00`.
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let digits = format!("{:.2}", round_cents(v.abs()));
            let sign = if v < 0.0 && digits != "0.00" { "-" } else { "" };
            format!("{}${}", sign, group_thousands(&digits))
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Format a percentage change with an explicit sign: `+5.00%`, `-3.20%`, `0.00%`.
pub fn format_change(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let v = round_cents(v);
            // -0.0 would otherwise print as "-0.00"
            let v = if v == 0.0 { 0.0 } else { v };
            let sign = if v > 0.0 { "+" } else { "" };
            format!("{}{:.2}%", sign, v)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

/// Text and background classes for a change badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChangeStyle {
    pub text: &'static str,
    pub background: &'static str,
}

/// Direction of a price change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeClass {
    /// No usable value
    Unknown,
    Positive,
    Negative,
    Flat,
}

impl ChangeClass {
    /// Classify a change value. Missing, NaN and infinite values are `Unknown`.
    pub fn classify(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => {
                if v > 0.0 {
                    ChangeClass::Positive
                } else if v < 0.0 {
                    ChangeClass::Negative
                } else {
                    ChangeClass::Flat
                }
            }
            _ => ChangeClass::Unknown,
        }
    }

    pub fn style(&self) -> ChangeStyle {
        match self {
            ChangeClass::Unknown => ChangeStyle {
                text: "text-gray-500",
                background: "bg-gray-100 dark:bg-gray-800",
            },
            ChangeClass::Positive => ChangeStyle {
                text: "text-emerald-700",
                background: "bg-emerald-50 dark:bg-emerald-900/40",
            },
            ChangeClass::Negative => ChangeStyle {
                text: "text-rose-700",
                background: "bg-rose-50 dark:bg-rose-900/40",
            },
            ChangeClass::Flat => ChangeStyle {
                text: "text-gray-600",
                background: "bg-gray-100 dark:bg-gray-800",
            },
        }
    }

    /// Text and background classes joined for a `class` attribute
    pub fn css_class(&self) -> String {
        let style = self.style();
        format!("{} {}", style.text, style.background)
    }
}

impl std::fmt::Display for ChangeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeClass::Unknown => write!(f, "unknown"),
            ChangeClass::Positive => write!(f, "positive"),
            ChangeClass::Negative => write!(f, "negative"),
            ChangeClass::Flat => write!(f, "flat"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_placeholder() {
        assert_eq!(format_currency(None), PLACEHOLDER);
        assert_eq!(format_currency(Some(f64::NAN)), PLACEHOLDER);
        assert_eq!(format_currency(Some(f64::INFINITY)), PLACEHOLDER);
    }

    #[test]
    fn test_currency_values() {
        let formatted = format_currency(Some(12.3));
        assert!(formatted.contains("12.30"));
        assert!(formatted.contains('$'));
        assert_eq!(formatted, "$12.30");

        assert_eq!(format_currency(Some(0.0)), "$0.00");
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
        assert_eq!(format_currency(Some(-5.0)), "-$5.00");
        assert_eq!(format_currency(Some(-0.001)), "$0.00");
        assert_eq!(format_currency(Some(2.999)), "$3.00");
        assert_eq!(format_currency(Some(0.125)), "$0.13");
        assert_eq!(format_currency(Some(-0.125)), "-$0.13");
        assert_eq!(format_currency(Some(1234.565)), "$1,234.57");
        assert_eq!(format_currency(Some(-0.004)), "$0.00");
    }

    #[test]
    fn test_change_values() {
        assert_eq!(format_change(Some(5.0)), "+5.00%");
        assert_eq!(format_change(Some(-3.2)), "-3.20%");
        assert_eq!(format_change(Some(0.0)), "0.00%");
        assert_eq!(format_change(Some(-0.0)), "0.00%");
        assert_eq!(format_change(Some(12.345)), "+12.35%");
        assert_eq!(format_change(Some(0.125)), "+0.13%");
        assert_eq!(format_change(Some(1.125)), "+1.13%");
        assert_eq!(format_change(Some(-0.125)), "-0.13%");
        assert_eq!(format_change(Some(-0.004)), "0.00%");
        assert_eq!(format_change(Some(0.004)), "0.00%");
    }

    #[test]
    fn test_change_placeholder() {
        assert_eq!(format_change(None), PLACEHOLDER);
        assert_eq!(format_change(Some(f64::NAN)), PLACEHOLDER);
    }

    #[test]
    fn test_classify() {
        assert_eq!(ChangeClass::classify(Some(1.0)), ChangeClass::Positive);
        assert_eq!(ChangeClass::classify(Some(-1.0)), ChangeClass::Negative);
        assert_eq!(ChangeClass::classify(Some(0.0)), ChangeClass::Flat);
        assert_eq!(ChangeClass::classify(Some(-0.0)), ChangeClass::Flat);
        assert_eq!(ChangeClass::classify(Some(f64::NAN)), ChangeClass::Unknown);
        assert_eq!(ChangeClass::classify(None), ChangeClass::Unknown);
    }

    #[test]
    fn test_class_styles() {
        assert_eq!(ChangeClass::Positive.style().text, "text-emerald-700");
        assert_eq!(ChangeClass::Negative.style().text, "text-rose-700");
        assert_eq!(ChangeClass::Flat.style().text, "text-gray-600");
        assert_eq!(
            ChangeClass::Unknown.css_class(),
            "text-gray-500 bg-gray-100 dark:bg-gray-800"
        );
        assert_eq!(ChangeClass::Negative.to_string(), "negative");
    }
}
