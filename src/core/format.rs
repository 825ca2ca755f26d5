use serde::{Deserialize, Serialize};

/// Display-unit scaling applied to vertical axis tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DisplayUnits {
    #[default]
    Auto,
    Thousands,
    Millions,
    Billions,
    Trillions,
}

impl DisplayUnits {
    pub const ALL: [Self; 5] = [
        Self::Auto,
        Self::Thousands,
        Self::Millions,
        Self::Billions,
        Self::Trillions,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Thousands => "Thousands",
            Self::Millions => "Millions",
            Self::Billions => "Billions",
            Self::Trillions => "Trillions",
        }
    }

    fn fixed_unit(self) -> Option<(f64, &'static str)> {
        match self {
            Self::Auto => None,
            Self::Thousands => Some((1e3, "K")),
            Self::Millions => Some((1e6, "M")),
            Self::Billions => Some((1e9, "B")),
            Self::Trillions => Some((1e12, "T")),
        }
    }
}

/// Unit thresholds probed by `Auto`, largest first.
const AUTO_UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Formats a vertical-axis tick value.
///
/// Fixed units always divide and keep two fractional digits regardless of
/// magnitude. `Auto` picks the largest unit whose threshold the magnitude
/// reaches; below one thousand it falls back to the raw value rendered with
/// `decimal_places` fractional digits.
#[must_use]
pub fn format_axis_value(value: f64, units: DisplayUnits, decimal_places: u8) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    if let Some((divisor, suffix)) = units.fixed_unit() {
        return format!("{:.2}{suffix}", value / divisor);
    }

    for (divisor, suffix) in AUTO_UNITS {
        if value.abs() >= divisor {
            return format!("{:.2}{suffix}", value / divisor);
        }
    }

    let precision = usize::from(decimal_places);
    format!("{value:.precision$}")
}

/// Formats a tooltip measure value with thousands separators and exactly two
/// fractional digits.
#[must_use]
pub fn format_tooltip_value(value: f64) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    let text = format!("{value:.2}");
    let (sign, magnitude) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integral, fractional) = magnitude.split_once('.').unwrap_or((magnitude, "00"));
    format!("{sign}{}.{fractional}", group_thousands(integral))
}

fn group_thousands(integral: &str) -> String {
    let digits: Vec<char> = integral.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    grouped
}
