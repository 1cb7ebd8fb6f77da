//! Argument types for the command line

use quickjoint_core::Point;
use std::fmt;
use std::str::FromStr;

/// A point written as `x,y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointArg(pub Point);

impl FromStr for PointArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected x,y but got '{}'", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate '{}': {}", part.trim(), e))
        };
        let point = Point::new(parse(x)?, parse(y)?);
        if !point.is_finite() {
            return Err(format!("coordinates must be finite, got '{}'", s));
        }
        Ok(PointArg(point))
    }
}

impl fmt::Display for PointArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

impl From<PointArg> for Point {
    fn from(arg: PointArg) -> Self {
        arg.0
    }
}
