//! Shared camera control settings.
//!
//! A single [`CameraControlSettings`] value is shared (through an `Arc`) by
//! every camera of a viewer. Cameras read it, they never change it.
//!
//! # Example
//!
//! ```
//! use multiview::{CameraControlSettings, Curve, Easing, TrackballStyle, TransitionKind, TransitionTiming};
//!
//! let settings = CameraControlSettings::new()
//!     .trackball(TrackballStyle::Project)
//!     .transition(
//!         TransitionKind::Turning,
//!         TransitionTiming::new(1.5, Easing::Out(Curve::Cubic)).unwrap(),
//!     );
//!
//! assert_eq!(settings.duration(TransitionKind::Turning), 1.5);
//! assert_eq!(settings.duration(TransitionKind::Moving), 0.75);
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::easing::Easing;

/// Errors raised while building or parsing settings.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("transition duration must be finite and non-negative, got {0}")]
    InvalidDuration(f32),
    #[error("unknown easing `{0}`")]
    UnknownEasing(String),
    #[error("unknown trackball style `{0}` (expected `arc` or `project`)")]
    UnknownTrackballStyle(String),
}

/// How a pointer position is lifted onto the virtual sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrackballStyle {
    /// Distance from the centre maps to an arc length on the sphere.
    #[default]
    Arc,
    /// Orthographic projection onto a sphere blended into a hyperbolic sheet.
    Project,
}

impl fmt::Display for TrackballStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackballStyle::Arc => write!(f, "arc"),
            TrackballStyle::Project => write!(f, "project"),
        }
    }
}

impl FromStr for TrackballStyle {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arc" => Ok(TrackballStyle::Arc),
            "project" => Ok(TrackballStyle::Project),
            _ => Err(SettingsError::UnknownTrackballStyle(s.to_string())),
        }
    }
}

/// The four independently animated camera fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// Camera position.
    Moving,
    /// Orbit target.
    Shifting,
    /// Distance to the target.
    Forwarding,
    /// Orientation.
    Turning,
}

impl TransitionKind {
    /// Every kind, in tracker order.
    pub const ALL: [TransitionKind; 4] = [
        TransitionKind::Moving,
        TransitionKind::Shifting,
        TransitionKind::Forwarding,
        TransitionKind::Turning,
    ];

    fn index(self) -> usize {
        match self {
            TransitionKind::Moving => 0,
            TransitionKind::Shifting => 1,
            TransitionKind::Forwarding => 2,
            TransitionKind::Turning => 3,
        }
    }
}

/// Duration and easing curve of one kind of transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionTiming {
    duration: f32,
    easing: Easing,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            duration: 0.75,
            easing: Easing::default(),
        }
    }
}

impl TransitionTiming {
    /// Create a timing, rejecting negative or non-finite durations.
    pub fn new(duration: f32, easing: Easing) -> Result<Self, SettingsError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SettingsError::InvalidDuration(duration));
        }
        Ok(Self { duration, easing })
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Curve the transition follows.
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

/// Settings shared by every camera of a viewer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CameraControlSettings {
    trackball: TrackballStyle,
    timings: [TransitionTiming; 4],
}

impl CameraControlSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trackball mapping style.
    pub fn trackball(mut self, style: TrackballStyle) -> Self {
        self.trackball = style;
        self
    }

    /// Set the timing of one kind of transition.
    pub fn transition(mut self, kind: TransitionKind, timing: TransitionTiming) -> Self {
        self.timings[kind.index()] = timing;
        self
    }

    /// Use the same timing for every kind of transition.
    pub fn all_transitions(mut self, timing: TransitionTiming) -> Self {
        self.timings = [timing; 4];
        self
    }

    /// How pointer positions map onto the trackball sphere.
    pub fn trackball_style(&self) -> TrackballStyle {
        self.trackball
    }

    /// Duration and easing of one kind of transition.
    pub fn timing(&self, kind: TransitionKind) -> TransitionTiming {
        self.timings[kind.index()]
    }

    /// Duration in seconds of one kind of transition.
    pub fn duration(&self, kind: TransitionKind) -> f32 {
        self.timing(kind).duration
    }

    /// Easing curve of one kind of transition.
    pub fn easing(&self, kind: TransitionKind) -> Easing {
        self.timing(kind).easing
    }
}
