//! Easing curves for camera transitions.
//!
//! [`Easing`] selects one of the classic tween curves (linear plus ten curve
//! families, each in four directions). It works either on a normalized
//! progress value via [`Easing::ease`] or on a `(time, start, delta, duration)`
//! tuple via [`Easing::tween`].
//!
//! [`Shaping`] holds the simpler single-argument shaping functions used to
//! bend a lerp factor.
//!
//! # Example
//!
//! ```
//! use multiview::{Curve, Easing};
//!
//! let easing = Easing::InOut(Curve::Quadratic);
//! assert_eq!(easing.ease(0.5), 0.5);
//!
//! // Halfway through a 2 second tween from 10 to 30.
//! let value = Easing::Linear.tween(1.0, 10.0, 20.0, 2.0);
//! assert_eq!(value, 20.0);
//! ```

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use crate::settings::SettingsError;

/// Overshoot amount for the back curves.
const BACK_OVERSHOOT: f32 = 1.70158;
/// Back overshoot scaled for the in-out variant.
const BACK_OVERSHOOT_IN_OUT: f32 = BACK_OVERSHOOT * 1.525;

/// A family of easing curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Curve {
    Exponential,
    Circular,
    Quadratic,
    Sinusoidal,
    Cubic,
    Quartic,
    Quintic,
    Elastic,
    Bounce,
    Back,
}

impl Curve {
    /// Every curve family.
    pub const ALL: [Curve; 10] = [
        Curve::Exponential,
        Curve::Circular,
        Curve::Quadratic,
        Curve::Sinusoidal,
        Curve::Cubic,
        Curve::Quartic,
        Curve::Quintic,
        Curve::Elastic,
        Curve::Bounce,
        Curve::Back,
    ];

    fn name(self) -> &'static str {
        match self {
            Curve::Exponential => "exponential",
            Curve::Circular => "circular",
            Curve::Quadratic => "quadratic",
            Curve::Sinusoidal => "sinusoidal",
            Curve::Cubic => "cubic",
            Curve::Quartic => "quartic",
            Curve::Quintic => "quintic",
            Curve::Elastic => "elastic",
            Curve::Bounce => "bounce",
            Curve::Back => "back",
        }
    }

    /// Start slow, accelerate.
    fn ease_in(self, t: f32) -> f32 {
        match self {
            Curve::Exponential => {
                if t == 0.0 {
                    0.0
                } else {
                    2f32.powf(10.0 * (t - 1.0))
                }
            }
            Curve::Circular => -((1.0 - t * t).sqrt() - 1.0),
            Curve::Quadratic => t * t,
            Curve::Sinusoidal => 1.0 - (t * FRAC_PI_2).cos(),
            Curve::Cubic => t * t * t,
            Curve::Quartic => t.powi(4),
            Curve::Quintic => t.powi(5),
            Curve::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let (period, shift) = (0.3, 0.3 / 4.0);
                let t = t - 1.0;
                -(2f32.powf(10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin())
            }
            Curve::Bounce => 1.0 - bounce_out(1.0 - t),
            Curve::Back => t * t * ((BACK_OVERSHOOT + 1.0) * t - BACK_OVERSHOOT),
        }
    }

    /// Start fast, decelerate.
    fn ease_out(self, t: f32) -> f32 {
        match self {
            Curve::Exponential => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
            Curve::Circular => {
                let t = t - 1.0;
                (1.0 - t * t).sqrt()
            }
            Curve::Quadratic => -t * (t - 2.0),
            Curve::Sinusoidal => (t * FRAC_PI_2).sin(),
            Curve::Cubic => (t - 1.0).powi(3) + 1.0,
            Curve::Quartic => -((t - 1.0).powi(4) - 1.0),
            Curve::Quintic => (t - 1.0).powi(5) + 1.0,
            Curve::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let (period, shift) = (0.3, 0.3 / 4.0);
                2f32.powf(-10.0 * t) * ((t - shift) * (2.0 * PI) / period).sin() + 1.0
            }
            Curve::Bounce => bounce_out(t),
            Curve::Back => {
                let t = t - 1.0;
                t * t * ((BACK_OVERSHOOT + 1.0) * t + BACK_OVERSHOOT) + 1.0
            }
        }
    }

    /// Slow at both ends.
    fn ease_in_out(self, t: f32) -> f32 {
        match self {
            Curve::Exponential => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * 2f32.powf(10.0 * (t - 1.0))
                } else {
                    0.5 * (2.0 - 2f32.powf(-10.0 * (t - 1.0)))
                }
            }
            Curve::Circular => {
                let t = t * 2.0;
                if t < 1.0 {
                    -0.5 * ((1.0 - t * t).sqrt() - 1.0)
                } else {
                    let t = t - 2.0;
                    0.5 * ((1.0 - t * t).sqrt() + 1.0)
                }
            }
            Curve::Quadratic => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t * t
                } else {
                    let t = t - 1.0;
                    -0.5 * (t * (t - 2.0) - 1.0)
                }
            }
            Curve::Cubic | Curve::Quintic => {
                let power = if self == Curve::Cubic { 3 } else { 5 };
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t.powi(power)
                } else {
                    0.5 * ((t - 2.0).powi(power) + 2.0)
                }
            }
            Curve::Quartic => {
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * t.powi(4)
                } else {
                    -0.5 * ((t - 2.0).powi(4) - 2.0)
                }
            }
            Curve::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let (period, shift) = (0.45, 0.45 / 4.0);
                let t = t * 2.0 - 1.0;
                let wave = ((t - shift) * (2.0 * PI) / period).sin();
                if t < 0.0 {
                    -0.5 * 2f32.powf(10.0 * t) * wave
                } else {
                    0.5 * 2f32.powf(-10.0 * t) * wave + 1.0
                }
            }
            Curve::Back => {
                let s = BACK_OVERSHOOT_IN_OUT;
                let t = t * 2.0;
                if t < 1.0 {
                    0.5 * (t * t * ((s + 1.0) * t - s))
                } else {
                    let t = t - 2.0;
                    0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
                }
            }
            // Sinusoidal and bounce are built from their two halves.
            Curve::Sinusoidal | Curve::Bounce => {
                if t < 0.5 {
                    0.5 * self.ease_in(t * 2.0)
                } else {
                    0.5 + 0.5 * self.ease_out(t * 2.0 - 1.0)
                }
            }
        }
    }

    /// Fast at both ends, slow through the middle.
    fn ease_out_in(self, t: f32) -> f32 {
        if t < 0.5 {
            0.5 * self.ease_out(t * 2.0)
        } else {
            0.5 + 0.5 * self.ease_in(t * 2.0 - 1.0)
        }
    }
}

fn bounce_out(t: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;

    if t < 1.0 / D {
        N * t * t
    } else if t < 2.0 / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Easing functions for camera transitions.
///
/// These control the acceleration curve of an animated move, shift, forward
/// or turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed throughout.
    Linear,
    /// Start slow, accelerate.
    In(Curve),
    /// Start fast, decelerate.
    Out(Curve),
    /// Start slow, speed up, then slow down.
    InOut(Curve),
    /// Start fast, slow down through the middle, then speed up again.
    OutIn(Curve),
}

impl Default for Easing {
    fn default() -> Self {
        Easing::InOut(Curve::Quadratic)
    }
}

impl Easing {
    /// Every easing mode, linear first.
    pub fn all() -> impl Iterator<Item = Easing> {
        std::iter::once(Easing::Linear).chain(Curve::ALL.into_iter().flat_map(|curve| {
            [
                Easing::Out(curve),
                Easing::In(curve),
                Easing::InOut(curve),
                Easing::OutIn(curve),
            ]
        }))
    }

    /// Apply the easing function to a linear progress value (0.0 to 1.0).
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::In(curve) => curve.ease_in(t),
            Easing::Out(curve) => curve.ease_out(t),
            Easing::InOut(curve) => curve.ease_in_out(t),
            Easing::OutIn(curve) => curve.ease_out_in(t),
        }
    }

    /// Value at `time` of a tween that moves from `start` by `delta` over
    /// `duration`.
    ///
    /// A non-positive duration is treated as an already finished tween.
    pub fn tween(&self, time: f32, start: f32, delta: f32, duration: f32) -> f32 {
        if duration <= 0.0 {
            return start + delta;
        }
        start + delta * self.ease(time / duration)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "linear"),
            Easing::In(curve) => write!(f, "{}-in", curve.name()),
            Easing::Out(curve) => write!(f, "{}-out", curve.name()),
            Easing::InOut(curve) => write!(f, "{}-in-out", curve.name()),
            Easing::OutIn(curve) => write!(f, "{}-out-in", curve.name()),
        }
    }
}

impl FromStr for Easing {
    type Err = SettingsError;

    /// Parses names such as `linear`, `cubic-in` or `elastic_out_in`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Easing::all()
            .find(|easing| easing.to_string() == normalized)
            .ok_or_else(|| SettingsError::UnknownEasing(s.to_string()))
    }
}

/// Single-argument shaping functions for bending a lerp factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shaping {
    #[default]
    Linear,
    Squared,
    Cubed,
    SquareRoot,
    CubicRoot,
    SmoothStep,
    SmootherStep,
    QuadraticEaseOut,
    /// Rises to 1 at the midpoint and falls back to 0.
    Parabola,
    /// Linear rise to 1 at the midpoint and back down.
    Triangle,
    ElasticOut,
    BounceOut,
}

impl Shaping {
    /// Shape a factor in `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Shaping::Linear => t,
            Shaping::Squared => t * t,
            Shaping::Cubed => t * t * t,
            Shaping::SquareRoot => t.sqrt(),
            Shaping::CubicRoot => t.cbrt(),
            Shaping::SmoothStep => {
                let t = t.clamp(0.0, 1.0);
                let ease_in = t * t;
                let ease_out = 1.0 - (1.0 - t) * (1.0 - t);
                ease_in + t * (ease_out - ease_in)
            }
            Shaping::SmootherStep => {
                let t = t.clamp(0.0, 1.0);
                t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
            }
            Shaping::QuadraticEaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Shaping::Parabola => (4.0 * t * (1.0 - t)).powi(2),
            Shaping::Triangle => 1.0 - 2.0 * (t - 0.5).abs(),
            Shaping::ElasticOut => (-13.0 * (t + 1.0) * FRAC_PI_2).sin() * 2f32.powf(-10.0 * t) + 1.0,
            Shaping::BounceOut => bounce_out(t),
        }
    }
}
