//! Unit conversion utilities
//!
//! Lengths entered by a user (material thickness, kerf) usually come in
//! millimetres or inches while path coordinates are in document units.
//! Conversion uses the CSS/SVG convention of 96 px per inch.

use crate::error::{UnitError, UnitResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PX_PER_INCH: f64 = 96.0;

/// Linear length unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimetres
    #[default]
    Mm,
    /// Centimetres
    Cm,
    /// Metres
    M,
    /// Inches
    In,
    /// Points (1/72 in)
    Pt,
    /// Picas (1/6 in)
    Pc,
    /// SVG user units / CSS pixels
    Px,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 7] = [
        LengthUnit::Mm,
        LengthUnit::Cm,
        LengthUnit::M,
        LengthUnit::In,
        LengthUnit::Pt,
        LengthUnit::Pc,
        LengthUnit::Px,
    ];

    /// Size of one of this unit in pixels.
    pub fn px_per_unit(self) -> f64 {
        match self {
            LengthUnit::Mm => PX_PER_INCH / 25.4,
            LengthUnit::Cm => PX_PER_INCH / 2.54,
            LengthUnit::M => PX_PER_INCH / 0.0254,
            LengthUnit::In => PX_PER_INCH,
            LengthUnit::Pt => PX_PER_INCH / 72.0,
            LengthUnit::Pc => PX_PER_INCH / 6.0,
            LengthUnit::Px => 1.0,
        }
    }

    /// Unit suffix ("mm", "in", ...)
    pub fn label(self) -> &'static str {
        match self {
            LengthUnit::Mm => "mm",
            LengthUnit::Cm => "cm",
            LengthUnit::M => "m",
            LengthUnit::In => "in",
            LengthUnit::Pt => "pt",
            LengthUnit::Pc => "pc",
            LengthUnit::Px => "px",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeter" | "millimetre" => Ok(Self::Mm),
            "cm" => Ok(Self::Cm),
            "m" => Ok(Self::M),
            "in" | "inch" | "\"" => Ok(Self::In),
            "pt" => Ok(Self::Pt),
            "pc" => Ok(Self::Pc),
            "px" | "uu" => Ok(Self::Px),
            _ => Err(UnitError::UnknownUnit(s.trim().to_string())),
        }
    }
}

/// Convert `value` expressed in `from` into `to`.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.px_per_unit() / to.px_per_unit()
}

/// Format a length for display with three decimals and its unit suffix.
pub fn format_length(value: f64, unit: LengthUnit) -> String {
    format!("{:.3}{}", value, unit.label())
}

/// Parse a length and express it in `unit`.
///
/// The text may carry its own unit suffix (`"3mm"`, `"0.125 in"`), in which
/// case it is converted; otherwise it is taken to already be in `unit`.
/// Inch values may be written as fractions (`"1/8"`, `"1 1/8"`).
pub fn parse_length(input: &str, unit: LengthUnit) -> UnitResult<f64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(invalid(input, "empty input"));
    }

    let split = input
        .rfind(|c: char| c.is_ascii_digit() || c == '.')
        .map(|i| i + 1)
        .unwrap_or(0);
    let (number, suffix) = input.split_at(split);
    let source = if suffix.trim().is_empty() {
        unit
    } else {
        suffix.parse::<LengthUnit>()?
    };

    let value = if number.contains('/') {
        parse_fraction(input, number)?
    } else {
        number
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(input, &e.to_string()))?
    };

    if !value.is_finite() {
        return Err(invalid(input, "value is not finite"));
    }

    Ok(convert(value, source, unit))
}

fn parse_fraction(input: &str, number: &str) -> UnitResult<f64> {
    let mut total = 0.0;
    for part in number.split_whitespace() {
        if let Some((num, den)) = part.split_once('/') {
            let num = num
                .parse::<f64>()
                .map_err(|_| invalid(input, "invalid numerator"))?;
            let den = den
                .parse::<f64>()
                .map_err(|_| invalid(input, "invalid denominator"))?;
            if den == 0.0 {
                return Err(invalid(input, "division by zero"));
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| invalid(input, "invalid number part"))?;
        }
    }
    Ok(total)
}

fn invalid(input: &str, reason: &str) -> UnitError {
    UnitError::InvalidLength {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
