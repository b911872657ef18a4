//! Orbit/trackball camera controller.
//!
//! A [`CameraControl`] orbits a target point at some distance with a
//! quaternion orientation. Pointer drags rotate it through a virtual
//! [`Trackball`] or pan it across the view plane. Position, target, distance
//! and orientation can each be set instantly or animated over time, with the
//! duration and easing of each kind taken from the shared
//! [`CameraControlSettings`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use multiview::{Animation, CameraControl, CameraControlSettings};
//!
//! let mut camera = CameraControl::new(Arc::new(CameraControlSettings::default()));
//! camera.set_view_width(800.0);
//! camera.set_view_height(600.0);
//!
//! // Presets animate, so step the clock until they settle.
//! camera.restore_to_top_view();
//! while camera.animation() == Animation::Active {
//!     camera.update(0.016);
//! }
//! camera.compute_matrices();
//!
//! let view = camera.view_matrix();
//! # let _ = view;
//! ```

use std::f32::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::sync::Arc;

use glam::{Mat4, Quat, Vec2, Vec3};
use log::{debug, trace};

use crate::math::{normalize_quat, quat_from_axis_angle, quat_from_vectors, try_inverse};
use crate::settings::{CameraControlSettings, TransitionKind};
use crate::trackball::Trackball;
use crate::transition::Tracker;

/// Distance from the origin every preset view settles at.
pub const PRESET_DISTANCE: f32 = 30.0;

/// World units moved per pixel of panning drag.
pub const PAN_SENSITIVITY: f32 = 0.05;

/// Which drag behaviour is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    /// Drags are ignored.
    #[default]
    Invalid,
    /// Drags turn the camera around its target.
    Rotating,
    /// Drags slide the camera and its target across the view plane.
    Panning,
}

/// Whether setters animate and whether anything is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Animation {
    #[default]
    None,
    Active,
}

/// The seven named views of a viewer, each with its own preset pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewName {
    Perspective,
    Front,
    Back,
    Top,
    Bottom,
    Left,
    Right,
}

impl ViewName {
    /// Every view, in menu order.
    pub const ALL: [ViewName; 7] = [
        ViewName::Perspective,
        ViewName::Front,
        ViewName::Back,
        ViewName::Top,
        ViewName::Bottom,
        ViewName::Left,
        ViewName::Right,
    ];

    /// Human-readable name, as shown in a viewport header.
    pub fn label(self) -> &'static str {
        match self {
            ViewName::Perspective => "Perspective",
            ViewName::Front => "Front",
            ViewName::Back => "Back",
            ViewName::Top => "Top",
            ViewName::Bottom => "Bottom",
            ViewName::Left => "Left",
            ViewName::Right => "Right",
        }
    }

    /// Orientation of this view's preset pose.
    pub fn orientation(self) -> Quat {
        match self {
            ViewName::Perspective => perspective_orientation(),
            ViewName::Front => Quat::IDENTITY,
            ViewName::Back => Quat::from_xyzw(0.0, 1.0, 0.0, 0.0),
            ViewName::Top => quat_from_axis_angle(Vec3::X, FRAC_PI_2),
            ViewName::Bottom => quat_from_axis_angle(Vec3::X, -FRAC_PI_2),
            ViewName::Right => quat_from_axis_angle(Vec3::Y, -FRAC_PI_2),
            ViewName::Left => quat_from_axis_angle(Vec3::Y, FRAC_PI_2),
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Oblique view looking down along (-5, -4, -5).
fn perspective_orientation() -> Quat {
    let direction = Vec3::new(-5.0, -4.0, -5.0).normalize();
    let heading = direction.x.atan2(direction.z) + PI * 0.5;
    let pitch = -direction.y.asin();
    let yaw = quat_from_axis_angle(Vec3::Y, heading);
    let tilt = quat_from_axis_angle(Vec3::X, pitch);
    normalize_quat(tilt * yaw)
}

/// View matrix for an orbit pose and the camera position it implies.
fn orbit_pose(target: Vec3, distance: f32, orientation: Quat) -> (Mat4, Vec3) {
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -distance))
        * Mat4::from_quat(orientation)
        * Mat4::from_translation(-target);
    let position = target + view.row(2).truncate() * distance;
    (view, position)
}

/// Orbit/trackball camera with animated transitions.
#[derive(Clone, Debug)]
pub struct CameraControl {
    settings: Arc<CameraControlSettings>,
    mode: CameraMode,
    animation: Animation,
    dragging: bool,

    view_matrix: Mat4,
    inv_view_matrix: Mat4,

    position: Vec3,
    target: Vec3,
    orientation: Quat,
    /// Orientation captured when the current rotating drag started.
    previous_orientation: Quat,
    /// Drag anchor; `(0, 0)` while panning means not yet recorded.
    anchor: Vec2,

    distance: f32,
    min_distance: f32,
    trackball: Trackball,

    moving: Tracker<Vec3>,
    shifting: Tracker<Vec3>,
    forwarding: Tracker<f32>,
    turning: Tracker<Quat>,
}

impl CameraControl {
    /// Create an idle camera bound to shared settings.
    pub fn new(settings: Arc<CameraControlSettings>) -> Self {
        Self {
            settings,
            mode: CameraMode::Invalid,
            animation: Animation::None,
            dragging: false,
            view_matrix: Mat4::IDENTITY,
            inv_view_matrix: Mat4::IDENTITY,
            position: Vec3::ZERO,
            target: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            previous_orientation: Quat::IDENTITY,
            anchor: Vec2::ZERO,
            distance: 0.1,
            min_distance: 0.1,
            trackball: Trackball::default(),
            moving: Tracker::default(),
            shifting: Tracker::default(),
            forwarding: Tracker::default(),
            turning: Tracker::default(),
        }
    }

    /// Shared settings this camera reads its timings from.
    pub fn settings(&self) -> &Arc<CameraControlSettings> {
        &self.settings
    }

    /// Drag behaviour currently selected.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Select the behaviour of the next drag.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            trace!("camera mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
    }

    /// Returns `Active` while setters animate or a transition is in flight.
    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Turn animated setters on or off.
    ///
    /// Transitions already in flight keep running either way.
    pub fn set_animation(&mut self, animation: Animation) {
        self.animation = animation;
    }

    /// View matrix as of the last [`compute_matrices`](Self::compute_matrices).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Inverse view matrix, or identity if the view matrix was singular.
    pub fn inv_view_matrix(&self) -> &Mat4 {
        &self.inv_view_matrix
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Point the camera orbits around.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Current rotation of the world into view space.
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Distance from the camera to its target.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Closest the camera may get to its target.
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }

    /// Set the closest the camera may get to its target.
    ///
    /// The current distance is pulled out to the new minimum if needed.
    pub fn set_min_distance(&mut self, min_distance: f32) {
        self.min_distance = min_distance;
        self.distance = self.distance.max(min_distance);
    }

    /// Trackball radius in pixels.
    pub fn radius(&self) -> f32 {
        self.trackball.radius()
    }

    /// Set the trackball radius in pixels.
    pub fn set_radius(&mut self, radius: f32) {
        self.trackball.set_radius(radius);
    }

    /// Viewport width in pixels.
    pub fn view_width(&self) -> f32 {
        self.trackball.width()
    }

    /// Viewport height in pixels.
    pub fn view_height(&self) -> f32 {
        self.trackball.height()
    }

    /// Set the viewport width the trackball maps across.
    pub fn set_view_width(&mut self, width: f32) {
        self.trackball.set_width(width);
    }

    /// Set the viewport height the trackball maps across.
    pub fn set_view_height(&mut self, height: f32) {
        self.trackball.set_height(height);
    }

    /// Returns true between `start_dragging` and `stop_dragging`.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a transition of `kind` is in flight.
    pub fn is_transitioning(&self, kind: TransitionKind) -> bool {
        match kind {
            TransitionKind::Moving => self.moving.is_active(),
            TransitionKind::Shifting => self.shifting.is_active(),
            TransitionKind::Forwarding => self.forwarding.is_active(),
            TransitionKind::Turning => self.turning.is_active(),
        }
    }

    fn animating(&self) -> bool {
        self.animation == Animation::Active
    }

    /// Place the camera at `position`.
    pub fn move_to(&mut self, position: Vec3) {
        if self.animating() {
            self.moving.start(self.position, position);
        } else {
            self.position = position;
        }
    }

    /// Orbit around `target`.
    pub fn shift_to(&mut self, target: Vec3) {
        if self.animating() {
            self.shifting.start(self.target, target);
        } else {
            self.target = target;
        }
    }

    /// Change the distance to the target.
    ///
    /// Instantly, this moves `amount` closer and never passes the minimum
    /// distance. Animated, `amount` is the distance to end up at.
    pub fn forward_to(&mut self, amount: f32) {
        if self.animating() {
            self.forwarding.start(self.distance, amount);
        } else {
            self.distance = (self.distance - amount).max(self.min_distance);
        }
    }

    /// Turn the camera to `orientation`.
    pub fn rotate_to(&mut self, orientation: Quat) {
        if self.animating() {
            self.turning.start(self.orientation, orientation);
        } else {
            self.orientation = normalize_quat(orientation);
        }
    }

    /// Advance every transition in flight by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let settings = &self.settings;

        if let Some(position) = self.moving.advance(dt, &settings.timing(TransitionKind::Moving)) {
            self.position = position;
        }
        if let Some(target) = self.shifting.advance(dt, &settings.timing(TransitionKind::Shifting)) {
            self.target = target;
        }
        if let Some(distance) = self
            .forwarding
            .advance(dt, &settings.timing(TransitionKind::Forwarding))
        {
            self.distance = distance;
        }
        if let Some(orientation) = self.turning.advance(dt, &settings.timing(TransitionKind::Turning)) {
            self.orientation = orientation;
        }

        let in_flight = self.moving.is_active()
            || self.shifting.is_active()
            || self.forwarding.is_active()
            || self.turning.is_active();
        self.animation = if in_flight { Animation::Active } else { Animation::None };
    }

    /// Begin a drag at viewport point `(x, y)` using the current mode.
    pub fn start_dragging(&mut self, x: f32, y: f32) {
        self.dragging = true;
        match self.mode {
            CameraMode::Rotating => {
                self.anchor = Vec2::new(x, y);
                self.previous_orientation = self.orientation;
            }
            CameraMode::Panning => self.anchor = Vec2::ZERO,
            CameraMode::Invalid => {}
        }
    }

    /// Continue the current drag.
    ///
    /// While rotating, `(x, y)` is the pointer offset from where the drag
    /// started. While panning it is the pointer position; the first call of
    /// a drag only records it.
    pub fn track_dragging(&mut self, x: f32, y: f32) {
        if !self.dragging {
            return;
        }

        match self.mode {
            CameraMode::Rotating => {
                let style = self.settings.trackball_style();
                let from = self.trackball.vector(self.anchor.x, self.anchor.y, style);
                let to = self
                    .trackball
                    .vector(self.anchor.x + x, self.anchor.y + y, style);
                let delta = quat_from_vectors(from, to);
                self.orientation = normalize_quat(delta * self.previous_orientation);
            }
            CameraMode::Panning => {
                let pointer = Vec2::new(x, y);
                if self.anchor == Vec2::ZERO {
                    self.anchor = pointer;
                    return;
                }
                let d = (pointer - self.anchor) * PAN_SENSITIVITY;
                self.anchor = pointer;

                let left = -self.view_matrix.row(0).truncate();
                let up = -self.view_matrix.row(1).truncate();
                let offset = left * d.x + up * -d.y;
                self.position += offset;
                self.target += offset;
            }
            CameraMode::Invalid => {}
        }
    }

    /// End the current drag. A mode must be selected again before the next.
    pub fn stop_dragging(&mut self) {
        self.dragging = false;
        self.mode = CameraMode::Invalid;
    }

    /// Rebuild the view matrix, its inverse and the camera position from
    /// target, distance and orientation.
    pub fn compute_matrices(&mut self) {
        self.orientation = normalize_quat(self.orientation);
        let (view, position) = orbit_pose(self.target, self.distance, self.orientation);
        self.view_matrix = view;
        self.position = position;
        self.inv_view_matrix = try_inverse(&view).unwrap_or_else(|| {
            trace!("view matrix is singular, using identity inverse");
            Mat4::IDENTITY
        });
    }

    /// Animate to the preset pose of `view`.
    pub fn restore_to(&mut self, view: ViewName) {
        debug!("restoring camera to {view} view");
        let orientation = view.orientation();
        let (_, position) = orbit_pose(Vec3::ZERO, PRESET_DISTANCE, orientation);

        self.animation = Animation::Active;
        self.move_to(position);
        self.forward_to(PRESET_DISTANCE);
        self.shift_to(Vec3::ZERO);
        self.rotate_to(orientation);
    }

    /// Animate to the oblique perspective pose.
    pub fn restore_to_perspective_view(&mut self) {
        self.restore_to(ViewName::Perspective);
    }

    /// Animate to look down -Z.
    pub fn restore_to_front_view(&mut self) {
        self.restore_to(ViewName::Front);
    }

    /// Animate to look down +Z.
    pub fn restore_to_back_view(&mut self) {
        self.restore_to(ViewName::Back);
    }

    /// Animate to look straight down.
    pub fn restore_to_top_view(&mut self) {
        self.restore_to(ViewName::Top);
    }

    /// Animate to look straight up.
    pub fn restore_to_bottom_view(&mut self) {
        self.restore_to(ViewName::Bottom);
    }

    /// Animate to look from +X.
    pub fn restore_to_right_view(&mut self) {
        self.restore_to(ViewName::Right);
    }

    /// Animate to look from -X.
    pub fn restore_to_left_view(&mut self) {
        self.restore_to(ViewName::Left);
    }

    /// Take over every piece of `source`'s state, including transitions in
    /// flight, then resize to a `width` x `height` viewport.
    ///
    /// This camera keeps its own settings handle.
    pub fn copy_from(&mut self, source: &CameraControl, width: f32, height: f32) {
        let settings = Arc::clone(&self.settings);
        *self = source.clone();
        self.settings = settings;
        self.set_view_width(width);
        self.set_view_height(height);
    }

    /// Deep copy of this camera sized for another viewport.
    pub fn clone_for_viewport(&self, width: f32, height: f32) -> Self {
        let mut copy = self.clone();
        copy.set_view_width(width);
        copy.set_view_height(height);
        copy
    }
}
