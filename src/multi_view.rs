//! A five-viewport rig over the seven named views.
//!
//! [`MultiView`] owns one [`CameraControl`] per [`ViewName`] and maps each
//! [`Viewport`] onto one of them. In [`ViewMode::MultipleViews`] the window
//! is split into the four quadrants A to D; in [`ViewMode::SingleView`] the
//! whole window is viewport E.
//!
//! The rig does no drawing. A renderer asks it for a [`ViewFrame`] per
//! visible viewport and uses the matrices inside.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use multiview::{CameraControlSettings, MultiView, ViewMode};
//!
//! let mut rig = MultiView::new(Arc::new(CameraControlSettings::default()));
//! rig.resize(800, 800);
//! rig.initialize();
//!
//! // In the frame loop:
//! rig.update(0.016);
//! for (viewport, _rect) in rig.layout() {
//!     let frame = rig.frame(viewport);
//!     // draw with frame.projection * frame.view_matrix
//! #   let _ = frame;
//! }
//! # assert_eq!(rig.mode(), ViewMode::MultipleViews);
//! ```

use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};
use log::{debug, trace};
use winit::event::WindowEvent;

use crate::camera_control::{Animation, CameraControl, CameraMode, ViewName};
use crate::input::{Input, PointerAction};
use crate::math::try_inverse;
use crate::settings::CameraControlSettings;

/// Plane the reference grid is drawn in for a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridPlane {
    XZ,
    XY,
    YZ,
}

impl ViewName {
    /// Grid plane facing this view.
    pub fn grid_plane(self) -> GridPlane {
        match self {
            ViewName::Perspective | ViewName::Top | ViewName::Bottom => GridPlane::XZ,
            ViewName::Front | ViewName::Back => GridPlane::XY,
            ViewName::Left | ViewName::Right => GridPlane::YZ,
        }
    }

    fn index(self) -> usize {
        match self {
            ViewName::Perspective => 0,
            ViewName::Front => 1,
            ViewName::Back => 2,
            ViewName::Top => 3,
            ViewName::Bottom => 4,
            ViewName::Left => 5,
            ViewName::Right => 6,
        }
    }
}

/// A region of the window showing one view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Viewport {
    /// Top-left quadrant.
    A,
    /// Top-right quadrant.
    B,
    /// Bottom-left quadrant.
    C,
    /// Bottom-right quadrant.
    D,
    /// The whole window, used in single view mode.
    E,
}

impl Viewport {
    /// Every viewport, quadrants first.
    pub const ALL: [Viewport; 5] = [Viewport::A, Viewport::B, Viewport::C, Viewport::D, Viewport::E];

    /// The four viewports of the split layout.
    pub const QUADRANTS: [Viewport; 4] = [Viewport::A, Viewport::B, Viewport::C, Viewport::D];

    fn index(self) -> usize {
        match self {
            Viewport::A => 0,
            Viewport::B => 1,
            Viewport::C => 2,
            Viewport::D => 3,
            Viewport::E => 4,
        }
    }
}

/// Window split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Four quadrants, viewports A to D.
    #[default]
    MultipleViews,
    /// Viewport E fills the window.
    SingleView,
}

/// Pixel rectangle of a viewport, origin at the window's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ViewportRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ViewportRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns true if the window point lies inside the rectangle.
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.origin();
        let max = min + Vec2::new(self.width as f32, self.height as f32);
        point.x >= min.x && point.y >= min.y && point.x < max.x && point.y < max.y
    }

    /// Top-left corner in window coordinates.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Projection parameters shared by every view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiViewConfig {
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Default for MultiViewConfig {
    fn default() -> Self {
        Self {
            fov: 45f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl MultiViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field of view in degrees.
    pub fn fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees.to_radians();
        self
    }

    /// Set the clipping planes.
    pub fn clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }
}

/// Everything a renderer needs to draw one viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFrame {
    pub view: ViewName,
    pub view_matrix: Mat4,
    pub inv_view_matrix: Mat4,
    pub projection: Mat4,
    pub inv_projection: Mat4,
    /// Camera position in world space.
    pub position: Vec3,
    pub grid_plane: GridPlane,
}

/// Cameras, projections and viewport layout of a multi-view window.
pub struct MultiView {
    config: MultiViewConfig,
    cameras: [CameraControl; 7],
    projections: [Mat4; 7],
    inv_projections: [Mat4; 7],
    mapping: [ViewName; 5],
    /// Size each viewport last had, zero when unknown.
    sizes: [(u32, u32); 5],
    window: (u32, u32),
    mode: ViewMode,
    initialized: bool,
    input: Input,
    /// Viewport the current drag started in.
    drag: Option<Viewport>,
}

impl MultiView {
    /// Create a rig with the default projection config.
    pub fn new(settings: Arc<CameraControlSettings>) -> Self {
        Self::with_config(settings, MultiViewConfig::default())
    }

    /// Create a rig with its own projection parameters.
    pub fn with_config(settings: Arc<CameraControlSettings>, config: MultiViewConfig) -> Self {
        Self {
            config,
            cameras: std::array::from_fn(|_| CameraControl::new(Arc::clone(&settings))),
            projections: [Mat4::IDENTITY; 7],
            inv_projections: [Mat4::IDENTITY; 7],
            mapping: [
                ViewName::Top,
                ViewName::Perspective,
                ViewName::Front,
                ViewName::Right,
                ViewName::Perspective,
            ],
            sizes: [(0, 0); 5],
            window: (0, 0),
            mode: ViewMode::MultipleViews,
            initialized: false,
            input: Input::default(),
            drag: None,
        }
    }

    /// Replace the pointer bridge, for custom bindings or zoom step.
    pub fn input(mut self, input: Input) -> Self {
        self.input = input;
        self
    }

    /// Animate every mapped view to its preset pose. Only the first call
    /// has any effect.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        for viewport in Viewport::ALL {
            let name = self.view_for(viewport);
            self.camera_mut(name).restore_to(name);
        }
        self.initialized = true;
        debug!("multi view initialized");
    }

    /// Returns true once [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Projection parameters shared by every view.
    pub fn config(&self) -> &MultiViewConfig {
        &self.config
    }

    /// Current window split.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Show `name` in `viewport`.
    ///
    /// The viewport's cached size is forgotten, so the newly mapped camera
    /// is sized and gets a projection as soon as the viewport is visible.
    pub fn map_viewport(&mut self, viewport: Viewport, name: ViewName) {
        debug!("viewport {viewport:?} now shows {name}");
        self.mapping[viewport.index()] = name;
        self.sizes[viewport.index()] = (0, 0);
        self.refresh_layout();
    }

    /// View currently shown in `viewport`.
    pub fn view_for(&self, viewport: Viewport) -> ViewName {
        self.mapping[viewport.index()]
    }

    /// Camera driving `name`.
    pub fn camera(&self, name: ViewName) -> &CameraControl {
        &self.cameras[name.index()]
    }

    /// Mutable camera driving `name`.
    pub fn camera_mut(&mut self, name: ViewName) -> &mut CameraControl {
        &mut self.cameras[name.index()]
    }

    /// Projection of `name` and its inverse.
    pub fn projection(&self, name: ViewName) -> (&Mat4, &Mat4) {
        (&self.projections[name.index()], &self.inv_projections[name.index()])
    }

    /// Switch the window split. `from` is the viewport the request came
    /// from.
    ///
    /// Leaving the quadrants from one of them forgets viewport E's size, and
    /// going back forgets the quadrant sizes, so the cameras shown after the
    /// switch are resized even though the window did not change.
    pub fn switch_mode(&mut self, mode: ViewMode, from: Viewport) {
        match (self.mode, mode) {
            (ViewMode::MultipleViews, ViewMode::SingleView) if from != Viewport::E => {
                self.sizes[Viewport::E.index()] = (0, 0);
            }
            (ViewMode::SingleView, ViewMode::MultipleViews) => {
                for viewport in Viewport::QUADRANTS {
                    self.sizes[viewport.index()] = (0, 0);
                }
            }
            _ => {}
        }
        if self.mode != mode {
            debug!("view mode {:?} -> {:?}", self.mode, mode);
        }
        self.mode = mode;
        self.refresh_layout();
    }

    /// Fill the window with `name`.
    pub fn maximize(&mut self, name: ViewName) {
        let from = Viewport::QUADRANTS
            .into_iter()
            .find(|&viewport| self.view_for(viewport) == name)
            .unwrap_or(Viewport::A);
        self.map_viewport(Viewport::E, name);
        self.switch_mode(ViewMode::SingleView, from);
    }

    /// Go back to the four quadrants.
    pub fn restore_layout(&mut self) {
        self.switch_mode(ViewMode::MultipleViews, Viewport::E);
    }

    /// Lay the viewports out over a `width` x `height` window.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window = (width, height);
        self.refresh_layout();
    }

    /// Visible viewports and where they sit in the window.
    pub fn layout(&self) -> Vec<(Viewport, ViewportRect)> {
        let (width, height) = self.window;
        match self.mode {
            ViewMode::SingleView => vec![(Viewport::E, ViewportRect::new(0, 0, width, height))],
            ViewMode::MultipleViews => {
                let (left, top) = (width / 2, height / 2);
                let (right, bottom) = (width - left, height - top);
                vec![
                    (Viewport::A, ViewportRect::new(0, 0, left, top)),
                    (Viewport::B, ViewportRect::new(left, 0, right, top)),
                    (Viewport::C, ViewportRect::new(0, top, left, bottom)),
                    (Viewport::D, ViewportRect::new(left, top, right, bottom)),
                ]
            }
        }
    }

    /// Visible viewport under a window point, with the point in the
    /// viewport's own coordinates.
    pub fn viewport_at(&self, point: Vec2) -> Option<(Viewport, Vec2)> {
        self.layout()
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(viewport, rect)| (viewport, point - rect.origin()))
    }

    fn rect_of(&self, viewport: Viewport) -> Option<ViewportRect> {
        self.layout()
            .into_iter()
            .find(|(visible, _)| *visible == viewport)
            .map(|(_, rect)| rect)
    }

    fn refresh_layout(&mut self) {
        for (viewport, rect) in self.layout() {
            self.refresh_viewport(viewport, rect.width, rect.height);
        }
    }

    /// Resize the mapped camera and rebuild its projection when the
    /// viewport's size changed.
    fn refresh_viewport(&mut self, viewport: Viewport, width: u32, height: u32) {
        if self.sizes[viewport.index()] == (width, height) {
            return;
        }
        self.sizes[viewport.index()] = (width, height);

        let name = self.view_for(viewport);
        let camera = self.camera_mut(name);
        camera.set_view_width(width as f32);
        camera.set_view_height(height as f32);

        if width == 0 || height == 0 {
            trace!("viewport {viewport:?} is empty, keeping {name} projection");
            return;
        }
        let aspect = width as f32 / height as f32;
        let projection = Mat4::perspective_rh_gl(self.config.fov, aspect, self.config.near, self.config.far);
        self.projections[name.index()] = projection;
        self.inv_projections[name.index()] = try_inverse(&projection).unwrap_or(Mat4::IDENTITY);
    }

    /// Step every camera's transitions by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for camera in &mut self.cameras {
            camera.update(dt);
        }
    }

    /// Returns true once no camera has a transition in flight.
    pub fn settled(&self) -> bool {
        self.cameras
            .iter()
            .all(|camera| camera.animation() == Animation::None)
    }

    /// Compute the matrices of the view shown in `viewport`.
    pub fn frame(&mut self, viewport: Viewport) -> ViewFrame {
        let name = self.view_for(viewport);
        let index = name.index();
        let camera = &mut self.cameras[index];
        camera.compute_matrices();
        ViewFrame {
            view: name,
            view_matrix: *camera.view_matrix(),
            inv_view_matrix: *camera.inv_view_matrix(),
            projection: self.projections[index],
            inv_projection: self.inv_projections[index],
            position: camera.position(),
            grid_plane: name.grid_plane(),
        }
    }

    /// Route a pointer gesture to the camera under the pointer.
    ///
    /// A drag stays with the viewport it started in until it stops.
    pub fn apply(&mut self, action: PointerAction) {
        match action {
            PointerAction::StartDrag { mode, position } => {
                let Some((viewport, local)) = self.viewport_at(position) else {
                    return;
                };
                self.drag = Some(viewport);
                let name = self.view_for(viewport);
                let camera = self.camera_mut(name);
                camera.compute_matrices();
                camera.set_mode(mode);
                camera.start_dragging(local.x, local.y);
            }
            PointerAction::TrackDrag { position, offset } => {
                let Some(viewport) = self.drag else {
                    return;
                };
                let origin = self.rect_of(viewport).map(|rect| rect.origin());
                let name = self.view_for(viewport);
                let camera = self.camera_mut(name);
                match camera.mode() {
                    CameraMode::Rotating => camera.track_dragging(offset.x, offset.y),
                    CameraMode::Panning => {
                        let local = position - origin.unwrap_or(Vec2::ZERO);
                        camera.track_dragging(local.x, local.y);
                    }
                    CameraMode::Invalid => {}
                }
            }
            PointerAction::StopDrag => {
                if let Some(viewport) = self.drag.take() {
                    let name = self.view_for(viewport);
                    self.camera_mut(name).stop_dragging();
                }
            }
            PointerAction::Forward { position, amount } => {
                let Some((viewport, _)) = self.viewport_at(position) else {
                    return;
                };
                let name = self.view_for(viewport);
                let camera = self.camera_mut(name);
                // Animated forwarding takes a destination, the wheel gives a step.
                let amount = match camera.animation() {
                    Animation::Active => (camera.distance() - amount).max(camera.min_distance()),
                    Animation::None => amount,
                };
                camera.forward_to(amount);
            }
        }
    }

    /// Feed a window event through the pointer bridge and resize on
    /// window resizes.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Resized(size) = event {
            self.resize(size.width, size.height);
            return;
        }
        if let Some(action) = self.input.handle_event(event) {
            self.apply(action);
        }
    }

    /// Call at the start of each frame to reset per-frame input state.
    pub fn begin_frame(&mut self) {
        self.input.begin_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn rig() -> MultiView {
        let mut rig = MultiView::new(Arc::new(CameraControlSettings::default()));
        rig.resize(800, 600);
        rig
    }

    fn settle(rig: &mut MultiView) {
        for _ in 0..1000 {
            if rig.settled() {
                return;
            }
            rig.update(0.016);
        }
        panic!("rig never settled");
    }

    #[test]
    fn default_mapping() {
        let rig = rig();
        assert_eq!(rig.view_for(Viewport::A), ViewName::Top);
        assert_eq!(rig.view_for(Viewport::B), ViewName::Perspective);
        assert_eq!(rig.view_for(Viewport::C), ViewName::Front);
        assert_eq!(rig.view_for(Viewport::D), ViewName::Right);
        assert_eq!(rig.view_for(Viewport::E), ViewName::Perspective);
        assert_eq!(rig.mode(), ViewMode::MultipleViews);
    }

    #[test]
    fn grid_planes() {
        assert_eq!(ViewName::Perspective.grid_plane(), GridPlane::XZ);
        assert_eq!(ViewName::Top.grid_plane(), GridPlane::XZ);
        assert_eq!(ViewName::Back.grid_plane(), GridPlane::XY);
        assert_eq!(ViewName::Left.grid_plane(), GridPlane::YZ);
    }

    #[test]
    fn quadrant_layout_covers_window() {
        let mut rig = rig();
        rig.resize(801, 601);
        let layout = rig.layout();
        assert_eq!(layout.len(), 4);
        assert_eq!(layout[0], (Viewport::A, ViewportRect::new(0, 0, 400, 300)));
        assert_eq!(layout[3], (Viewport::D, ViewportRect::new(400, 300, 401, 301)));
        let area: u32 = layout.iter().map(|(_, rect)| rect.width * rect.height).sum();
        assert_eq!(area, 801 * 601);
    }

    #[test]
    fn resize_updates_mapped_cameras() {
        let rig = rig();
        let top = rig.camera(ViewName::Top);
        assert_eq!((top.view_width(), top.view_height()), (400.0, 300.0));
        let (projection, inverse) = rig.projection(ViewName::Top);
        assert_ne!(*projection, Mat4::IDENTITY);
        assert!((*projection * *inverse).abs_diff_eq(Mat4::IDENTITY, 1e-3));
        // Unmapped views keep their identity projection.
        assert_eq!(*rig.projection(ViewName::Back).0, Mat4::IDENTITY);
    }

    #[test]
    fn viewport_at_returns_local_point() {
        let rig = rig();
        assert_eq!(
            rig.viewport_at(Vec2::new(450.0, 310.0)),
            Some((Viewport::D, Vec2::new(50.0, 10.0)))
        );
        assert_eq!(rig.viewport_at(Vec2::new(900.0, 10.0)), None);
    }

    #[test]
    fn initialize_runs_once() {
        let mut rig = rig();
        rig.initialize();
        assert!(rig.is_initialized());
        assert_eq!(rig.camera(ViewName::Top).animation(), Animation::Active);
        assert_eq!(rig.camera(ViewName::Back).animation(), Animation::None);

        settle(&mut rig);
        rig.initialize();
        assert!(rig.settled());
    }

    #[test]
    fn settled_frames_match_presets() {
        let mut rig = rig();
        rig.initialize();
        settle(&mut rig);

        let frame = rig.frame(Viewport::A);
        assert_eq!(frame.view, ViewName::Top);
        assert_eq!(frame.grid_plane, GridPlane::XZ);
        assert!((frame.position - Vec3::new(0.0, 30.0, 0.0)).length() < 1e-3);
        assert!((frame.view_matrix * frame.inv_view_matrix).abs_diff_eq(Mat4::IDENTITY, 1e-4));

        let frame = rig.frame(Viewport::D);
        assert!((frame.position - Vec3::new(30.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn maximize_and_restore() {
        let mut rig = rig();
        rig.maximize(ViewName::Front);
        assert_eq!(rig.mode(), ViewMode::SingleView);
        assert_eq!(rig.view_for(Viewport::E), ViewName::Front);
        assert_eq!(rig.layout(), vec![(Viewport::E, ViewportRect::new(0, 0, 800, 600))]);
        let front = rig.camera(ViewName::Front);
        assert_eq!((front.view_width(), front.view_height()), (800.0, 600.0));

        rig.restore_layout();
        assert_eq!(rig.mode(), ViewMode::MultipleViews);
        let front = rig.camera(ViewName::Front);
        assert_eq!((front.view_width(), front.view_height()), (400.0, 300.0));
    }

    #[test]
    fn switching_from_quadrant_forgets_single_view_size() {
        let mut rig = rig();
        rig.maximize(ViewName::Perspective);
        rig.restore_layout();
        assert_eq!(rig.camera(ViewName::Perspective).view_width(), 400.0);

        // Same window size, yet E's camera is resized again.
        rig.maximize(ViewName::Perspective);
        assert_eq!(rig.camera(ViewName::Perspective).view_width(), 800.0);
    }

    #[test]
    fn rotating_drag_stays_in_start_viewport() {
        let mut rig = rig();
        let before = rig.camera(ViewName::Perspective).orientation();

        rig.apply(PointerAction::StartDrag {
            mode: CameraMode::Rotating,
            position: Vec2::new(600.0, 150.0),
        });
        rig.apply(PointerAction::TrackDrag {
            position: Vec2::new(250.0, 150.0),
            offset: Vec2::new(-350.0, 0.0),
        });
        assert_ne!(rig.camera(ViewName::Perspective).orientation(), before);
        assert_eq!(rig.camera(ViewName::Top).orientation(), Quat::IDENTITY);

        rig.apply(PointerAction::StopDrag);
        assert!(!rig.camera(ViewName::Perspective).is_dragging());
        assert_eq!(rig.camera(ViewName::Perspective).mode(), CameraMode::Invalid);
    }

    #[test]
    fn panning_drag_uses_local_positions() {
        let mut rig = rig();
        rig.apply(PointerAction::StartDrag {
            mode: CameraMode::Panning,
            position: Vec2::new(50.0, 350.0),
        });
        for position in [Vec2::new(50.0, 350.0), Vec2::new(60.0, 360.0)] {
            rig.apply(PointerAction::TrackDrag {
                position,
                offset: position - Vec2::new(50.0, 350.0),
            });
        }
        let target = rig.camera(ViewName::Front).target();
        assert!((target - Vec3::new(-0.5, 0.5, 0.0)).length() < 1e-5);
    }

    #[test]
    fn wheel_forwards_camera_under_pointer() {
        let mut rig = rig();
        rig.camera_mut(ViewName::Right).forward_to(-10.0);
        rig.apply(PointerAction::Forward {
            position: Vec2::new(700.0, 500.0),
            amount: 4.0,
        });
        assert!((rig.camera(ViewName::Right).distance() - 6.1).abs() < 1e-5);
        assert_eq!(rig.camera(ViewName::Top).distance(), 0.1);
    }

    #[test]
    fn wheel_during_preset_steps_from_current_distance() {
        let mut rig = rig();
        rig.initialize();
        rig.update(0.1);
        let before = rig.camera(ViewName::Right).distance();

        rig.apply(PointerAction::Forward {
            position: Vec2::new(700.0, 500.0),
            amount: -1.0,
        });
        settle(&mut rig);
        let right = rig.camera(ViewName::Right);
        assert!((right.distance() - (before + 1.0)).abs() < 1e-4);

        rig.camera_mut(ViewName::Right).restore_to_right_view();
        rig.apply(PointerAction::Forward {
            position: Vec2::new(700.0, 500.0),
            amount: 1000.0,
        });
        settle(&mut rig);
        let right = rig.camera(ViewName::Right);
        assert_eq!(right.distance(), right.min_distance());
    }

    #[test]
    fn maximizing_again_sizes_new_view() {
        let mut rig = rig();
        rig.maximize(ViewName::Top);
        rig.maximize(ViewName::Bottom);
        assert_eq!(rig.view_for(Viewport::E), ViewName::Bottom);

        let bottom = rig.camera(ViewName::Bottom);
        assert_eq!((bottom.view_width(), bottom.view_height()), (800.0, 600.0));
        assert_ne!(*rig.projection(ViewName::Bottom).0, Mat4::IDENTITY);

        let before = rig.camera(ViewName::Bottom).orientation();
        rig.apply(PointerAction::StartDrag {
            mode: CameraMode::Rotating,
            position: Vec2::new(400.0, 300.0),
        });
        rig.apply(PointerAction::TrackDrag {
            position: Vec2::new(500.0, 300.0),
            offset: Vec2::new(100.0, 0.0),
        });
        assert_ne!(rig.camera(ViewName::Bottom).orientation(), before);
    }

    #[test]
    fn remapped_quadrant_sizes_new_view() {
        let mut rig = rig();
        rig.map_viewport(Viewport::A, ViewName::Bottom);
        assert_eq!(rig.view_for(Viewport::A), ViewName::Bottom);

        let bottom = rig.camera(ViewName::Bottom);
        assert_eq!((bottom.view_width(), bottom.view_height()), (400.0, 300.0));
        let (projection, inverse) = rig.projection(ViewName::Bottom);
        assert_ne!(*projection, Mat4::IDENTITY);
        assert!((*projection * *inverse).abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn resize_event_lays_out() {
        let mut rig = rig();
        rig.handle_event(&WindowEvent::Resized(winit::dpi::PhysicalSize::new(200, 100)));
        assert_eq!(rig.layout()[1], (Viewport::B, ViewportRect::new(100, 0, 100, 50)));
    }

    #[test]
    fn config_builder() {
        let config = MultiViewConfig::new().fov(60.0).clip(1.0, 50.0);
        assert!((config.fov - 60f32.to_radians()).abs() < 1e-6);
        assert_eq!((config.near, config.far), (1.0, 50.0));
    }
}
