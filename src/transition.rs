//! Timed transitions of a single camera field.
//!
//! A [`Tracker`] remembers where a field started, where it is heading and how
//! long it has been moving. Each [`Tracker::advance`] call steps the clock and
//! yields the field's new value, using the duration and easing curve of a
//! [`TransitionTiming`].
//!
//! # Example
//!
//! ```
//! use multiview::{Easing, Tracker, TransitionTiming};
//!
//! let timing = TransitionTiming::new(1.0, Easing::Linear).unwrap();
//! let mut distance = Tracker::<f32>::default();
//!
//! distance.start(10.0, 30.0);
//! assert_eq!(distance.advance(0.5, &timing), Some(20.0));
//! assert_eq!(distance.advance(0.5, &timing), Some(30.0));
//! assert_eq!(distance.advance(0.5, &timing), None);
//! ```

use glam::{Quat, Vec3};

use crate::easing::Easing;
use crate::math::{slerp, tween_vec3};
use crate::settings::TransitionTiming;

/// A value that can be blended along an eased transition.
pub trait Interpolate: Copy {
    /// Value `elapsed` seconds into a `duration` long transition.
    fn interpolate(from: Self, to: Self, easing: Easing, elapsed: f32, duration: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: f32, to: f32, easing: Easing, elapsed: f32, duration: f32) -> f32 {
        easing.tween(elapsed, from, to - from, duration)
    }
}

impl Interpolate for Vec3 {
    fn interpolate(from: Vec3, to: Vec3, easing: Easing, elapsed: f32, duration: f32) -> Vec3 {
        tween_vec3(from, to, easing, elapsed, duration)
    }
}

impl Interpolate for Quat {
    fn interpolate(from: Quat, to: Quat, easing: Easing, elapsed: f32, duration: f32) -> Quat {
        slerp(from, to, easing.tween(elapsed, 0.0, 1.0, duration))
    }
}

/// Progress of one animated field.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tracker<T> {
    from: T,
    to: T,
    elapsed: f32,
    active: bool,
}

impl<T: Interpolate> Tracker<T> {
    /// Begin a transition from `from` to `to`, restarting the clock.
    pub fn start(&mut self, from: T, to: T) {
        self.from = from;
        self.to = to;
        self.elapsed = 0.0;
        self.active = true;
    }

    /// Step the clock by `dt` seconds.
    ///
    /// Returns the field's new value, or `None` when nothing is in flight.
    /// Once the duration is reached the tracker goes idle and yields exactly
    /// the destination.
    pub fn advance(&mut self, dt: f32, timing: &TransitionTiming) -> Option<T> {
        if !self.active {
            return None;
        }

        self.elapsed += dt;
        if self.elapsed >= timing.duration() {
            self.active = false;
            return Some(self.to);
        }

        Some(T::interpolate(
            self.from,
            self.to,
            timing.easing(),
            self.elapsed,
            timing.duration(),
        ))
    }

    /// Returns true if a transition is in flight.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
