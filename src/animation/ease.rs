use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::AriseError;

/// Which end(s) of the curve are eased.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EaseDir {
    /// Slow start.
    In,
    /// Slow finish.
    Out,
    /// Slow start and finish.
    InOut,
}

/// Named easing curves mapping linear progress to eased progress.
///
/// `PowerN` follows the usual motion-design naming: `Power1` is quadratic, `Power4` quintic.
/// Serialized as the conventional dotted name (`"power4.inOut"`, `"expo.out"`, `"none"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear progress.
    Linear,
    /// Quadratic.
    Power1(EaseDir),
    /// Cubic.
    Power2(EaseDir),
    /// Quartic.
    Power3(EaseDir),
    /// Quintic.
    Power4(EaseDir),
    /// Exponential (base 2).
    Expo(EaseDir),
    /// Sinusoidal.
    Sine(EaseDir),
}

impl Default for Ease {
    /// Tweens without an explicit ease use `power1.out`.
    fn default() -> Self {
        Self::Power1(EaseDir::Out)
    }
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power1(dir) => power(t, 2, dir),
            Self::Power2(dir) => power(t, 3, dir),
            Self::Power3(dir) => power(t, 4, dir),
            Self::Power4(dir) => power(t, 5, dir),
            Self::Expo(dir) => expo(t, dir),
            Self::Sine(dir) => sine(t, dir),
        }
    }

    /// Every supported curve, for exhaustive checks.
    pub fn all() -> Vec<Ease> {
        let mut out = vec![Self::Linear];
        for dir in [EaseDir::In, EaseDir::Out, EaseDir::InOut] {
            out.extend([
                Self::Power1(dir),
                Self::Power2(dir),
                Self::Power3(dir),
                Self::Power4(dir),
                Self::Expo(dir),
                Self::Sine(dir),
            ]);
        }
        out
    }
}

fn power(t: f64, degree: i32, dir: EaseDir) -> f64 {
    match dir {
        EaseDir::In => t.powi(degree),
        EaseDir::Out => 1.0 - (1.0 - t).powi(degree),
        EaseDir::InOut => {
            if t < 0.5 {
                2f64.powi(degree - 1) * t.powi(degree)
            } else {
                1.0 - ((-2.0 * t + 2.0).powi(degree) / 2.0)
            }
        }
    }
}

fn expo(t: f64, dir: EaseDir) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    match dir {
        EaseDir::In => 2f64.powf(10.0 * t - 10.0),
        EaseDir::Out => 1.0 - 2f64.powf(-10.0 * t),
        EaseDir::InOut => {
            if t < 0.5 {
                2f64.powf(20.0 * t - 10.0) / 2.0
            } else {
                (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
            }
        }
    }
}

fn sine(t: f64, dir: EaseDir) -> f64 {
    match dir {
        EaseDir::In => 1.0 - (t * PI / 2.0).cos(),
        EaseDir::Out => (t * PI / 2.0).sin(),
        EaseDir::InOut => -((PI * t).cos() - 1.0) / 2.0,
    }
}

impl FromStr for Ease {
    type Err = AriseError;

    /// Accepts `family.dir` (`power4.inOut`), the legacy `Family.easeDir` spelling
    /// (`Expo.easeInOut`), and a bare family which defaults to `out`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if matches!(lower.as_str(), "none" | "linear" | "power0") {
            return Ok(Self::Linear);
        }

        let (family, dir) = match lower.split_once('.') {
            Some((family, dir)) => (family, dir),
            None => (lower.as_str(), "out"),
        };
        let dir = match dir {
            "in" | "easein" => EaseDir::In,
            "out" | "easeout" => EaseDir::Out,
            "inout" | "easeinout" => EaseDir::InOut,
            other => {
                return Err(AriseError::validation(format!(
                    "unknown ease direction '{other}' in '{s}'"
                )));
            }
        };

        match family {
            "power0" | "linear" | "none" => Ok(Self::Linear),
            "power1" | "quad" => Ok(Self::Power1(dir)),
            "power2" | "cubic" => Ok(Self::Power2(dir)),
            "power3" | "quart" => Ok(Self::Power3(dir)),
            "power4" | "quint" | "strong" => Ok(Self::Power4(dir)),
            "expo" => Ok(Self::Expo(dir)),
            "sine" => Ok(Self::Sine(dir)),
            other => Err(AriseError::validation(format!(
                "unknown ease family '{other}' in '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (family, dir) = match self {
            Self::Linear => return f.write_str("none"),
            Self::Power1(d) => ("power1", d),
            Self::Power2(d) => ("power2", d),
            Self::Power3(d) => ("power3", d),
            Self::Power4(d) => ("power4", d),
            Self::Expo(d) => ("expo", d),
            Self::Sine(d) => ("sine", d),
        };
        let dir = match dir {
            EaseDir::In => "in",
            EaseDir::Out => "out",
            EaseDir::InOut => "inOut",
        };
        write!(f, "{family}.{dir}")
    }
}

impl TryFrom<String> for Ease {
    type Error = AriseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
