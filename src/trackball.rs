//! Maps 2D pointer positions onto a virtual sphere.

use glam::Vec3;
use log::trace;

use crate::math::normalize_or_keep;
use crate::settings::TrackballStyle;

/// Virtual trackball centred in a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trackball {
    radius: f32,
    width: f32,
    height: f32,
    half_width: f32,
    half_height: f32,
}

impl Default for Trackball {
    fn default() -> Self {
        Self {
            radius: 100.0,
            width: 0.0,
            height: 0.0,
            half_width: 0.0,
            half_height: 0.0,
        }
    }
}

impl Trackball {
    /// Create a trackball of `radius` over a `width` x `height` viewport.
    pub fn new(radius: f32, width: f32, height: f32) -> Self {
        let mut trackball = Self::default();
        trackball.set_radius(radius);
        trackball.set_width(width);
        trackball.set_height(height);
        trackball
    }

    /// Set the sphere radius in pixels.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Set the viewport width and its cached half extent.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.half_width = width * 0.5;
    }

    /// Set the viewport height and its cached half extent.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.half_height = height * 0.5;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Unit vector on the sphere under the viewport point `(x, y)`.
    ///
    /// `y` grows downwards. A zero radius or an empty viewport yields
    /// [`Vec3::ZERO`].
    pub fn vector(&self, x: f32, y: f32, style: TrackballStyle) -> Vec3 {
        if self.radius == 0.0 || self.width == 0.0 || self.height == 0.0 {
            trace!("trackball has no extent, returning zero vector");
            return Vec3::ZERO;
        }

        let mx = x - self.half_width;
        let my = self.half_height - y;

        let v = match style {
            TrackballStyle::Project => self.project(mx, my),
            TrackballStyle::Arc => self.arc(mx, my),
        };
        normalize_or_keep(v)
    }

    /// Sphere near the centre, hyperbolic sheet outside.
    fn project(&self, mx: f32, my: f32) -> Vec3 {
        let rr = self.radius * self.radius;
        let d = mx * mx + my * my;

        if d <= rr * 0.5 {
            return Vec3::new(mx, my, (rr - d).sqrt());
        }

        let z = 0.5 * rr / d.sqrt();
        let planar = (rr - z * z).max(0.0).sqrt();
        if mx == 0.0 {
            return Vec3::new(0.0, planar.copysign(my), z);
        }
        let scale = planar / d.sqrt();
        Vec3::new(mx * scale, my * scale, z)
    }

    fn arc(&self, mx: f32, my: f32) -> Vec3 {
        let a = (mx * mx + my * my).sqrt() / self.radius;
        let b = my.atan2(mx);
        Vec3::new(
            self.radius * a.sin() * b.cos(),
            self.radius * a.sin() * b.sin(),
            self.radius * a.cos(),
        )
    }
}
