use crate::trig::{deg_to_rad, rad_to_deg};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    pub fn other(self) -> AngleUnit {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }
}

/// Converts `value`, given in `from` units, into the other unit.
pub fn convert(value: f64, from: AngleUnit) -> f64 {
    match from {
        AngleUnit::Degrees => deg_to_rad(value),
        AngleUnit::Radians => rad_to_deg(value),
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_lowercase().as_str() {
            "deg" | "degs" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "rads" | "radians" => Ok(AngleUnit::Radians),
            _ => Err(format!("Unknown angle unit: {}", name)),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "degrees"),
            AngleUnit::Radians => write!(f, "radians"),
        }
    }
}
