//! # Multiview
//!
//! **Orbit/trackball cameras for multi-viewport 3D viewers.**
//!
//! Up to five viewports show seven named views (perspective plus the six
//! axis-aligned ones), each driven by its own [`CameraControl`]. Cameras turn
//! through a virtual trackball, pan across the view plane and glide between
//! poses with eased transitions.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use multiview::*;
//!
//! let settings = CameraControlSettings::new()
//!     .trackball(TrackballStyle::Arc)
//!     .transition(
//!         TransitionKind::Turning,
//!         TransitionTiming::new(0.5, Easing::Out(Curve::Cubic)).unwrap(),
//!     );
//!
//! let mut rig = MultiView::new(Arc::new(settings));
//! rig.resize(800, 800);
//! rig.initialize();
//!
//! // Every frame:
//! rig.update(0.016);
//! let frame = rig.frame(Viewport::A);
//! assert_eq!(frame.view, ViewName::Top);
//! ```
//!
//! Cameras can also be used on their own; see [`CameraControl`].

mod camera_control;
mod easing;
mod input;
pub mod math;
mod multi_view;
mod settings;
mod trackball;
mod transition;

pub use camera_control::{
    Animation, CameraControl, CameraMode, PAN_SENSITIVITY, PRESET_DISTANCE, ViewName,
};
pub use easing::{Curve, Easing, Shaping};
pub use input::{Input, PointerAction};
pub use multi_view::{
    GridPlane, MultiView, MultiViewConfig, ViewFrame, ViewMode, Viewport, ViewportRect,
};
pub use settings::{
    CameraControlSettings, SettingsError, TrackballStyle, TransitionKind, TransitionTiming,
};
pub use trackball::Trackball;
pub use transition::{Interpolate, Tracker};

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3};

// Re-export commonly used winit types for convenience
pub use winit::event::MouseButton;
