use std::collections::{HashMap, HashSet};

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

use crate::camera_control::CameraMode;

/// Pixels per wheel line for high-resolution scroll devices.
const PIXELS_PER_LINE: f32 = 120.0;

/// A camera gesture recognised from raw pointer input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerAction {
    /// A bound button went down at `position` (window coordinates).
    StartDrag { mode: CameraMode, position: Vec2 },
    /// The pointer moved during a drag. `offset` is measured from where the
    /// drag started.
    TrackDrag { position: Vec2, offset: Vec2 },
    /// The drag button was released.
    StopDrag,
    /// The wheel turned over `position`; positive amounts move closer.
    Forward { position: Vec2, amount: f32 },
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    button: MouseButton,
    origin: Vec2,
}

/// Tracks mouse state and turns it into [`PointerAction`]s.
#[derive(Clone, Debug)]
pub struct Input {
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_buttons_pressed: HashSet<MouseButton>,
    mouse_buttons_released: HashSet<MouseButton>,
    mouse_position: Vec2,
    mouse_delta: Vec2,
    scroll_delta: Vec2,
    bindings: HashMap<MouseButton, CameraMode>,
    zoom_step: f32,
    drag: Option<Drag>,
}

impl Default for Input {
    fn default() -> Self {
        let bindings = HashMap::from([
            (MouseButton::Left, CameraMode::Rotating),
            (MouseButton::Middle, CameraMode::Panning),
            (MouseButton::Right, CameraMode::Panning),
        ]);
        Self {
            mouse_buttons_down: HashSet::new(),
            mouse_buttons_pressed: HashSet::new(),
            mouse_buttons_released: HashSet::new(),
            mouse_position: Vec2::ZERO,
            mouse_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
            bindings,
            zoom_step: 1.0,
            drag: None,
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `button` start drags of the given mode.
    ///
    /// [`CameraMode::Invalid`] unbinds the button.
    pub fn bind(mut self, button: MouseButton, mode: CameraMode) -> Self {
        match mode {
            CameraMode::Invalid => self.bindings.remove(&button),
            _ => self.bindings.insert(button, mode),
        };
        self
    }

    /// Set how far one wheel line moves the camera.
    pub fn zoom_step(mut self, step: f32) -> Self {
        self.zoom_step = step;
        self
    }

    /// Call at the start of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.mouse_buttons_pressed.clear();
        self.mouse_buttons_released.clear();
        self.mouse_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
    }

    /// Process a window event, returning the gesture it completes if any.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<PointerAction> {
        match event {
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.button_pressed(*button),
                ElementState::Released => self.button_released(*button),
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(Vec2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        Vec2::new(pos.x as f32, pos.y as f32) / PIXELS_PER_LINE
                    }
                };
                self.scrolled(lines)
            }
            _ => None,
        }
    }

    /// Record a press. Starts a drag if the button is bound and no drag is
    /// running.
    pub fn button_pressed(&mut self, button: MouseButton) -> Option<PointerAction> {
        if !self.mouse_buttons_down.contains(&button) {
            self.mouse_buttons_pressed.insert(button);
        }
        self.mouse_buttons_down.insert(button);

        if self.drag.is_some() {
            return None;
        }
        let mode = *self.bindings.get(&button)?;
        self.drag = Some(Drag {
            button,
            origin: self.mouse_position,
        });
        Some(PointerAction::StartDrag {
            mode,
            position: self.mouse_position,
        })
    }

    /// Record a release. Stops the drag if it was started by `button`.
    pub fn button_released(&mut self, button: MouseButton) -> Option<PointerAction> {
        self.mouse_buttons_down.remove(&button);
        self.mouse_buttons_released.insert(button);

        match self.drag {
            Some(drag) if drag.button == button => {
                self.drag = None;
                Some(PointerAction::StopDrag)
            }
            _ => None,
        }
    }

    /// Record a pointer move, tracking the drag in progress.
    pub fn cursor_moved(&mut self, position: Vec2) -> Option<PointerAction> {
        self.mouse_delta += position - self.mouse_position;
        self.mouse_position = position;

        let drag = self.drag?;
        Some(PointerAction::TrackDrag {
            position,
            offset: position - drag.origin,
        })
    }

    /// Wheel movement in lines.
    pub fn scrolled(&mut self, lines: Vec2) -> Option<PointerAction> {
        self.scroll_delta += lines;
        if lines.y == 0.0 {
            return None;
        }
        Some(PointerAction::Forward {
            position: self.mouse_position,
            amount: lines.y * self.zoom_step,
        })
    }

    /// Returns true while a drag is in progress.
    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Returns true if the mouse button is currently held down.
    pub fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Returns true if the mouse button was pressed this frame.
    pub fn mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed.contains(&button)
    }

    /// Returns true if the mouse button was released this frame.
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released.contains(&button)
    }

    /// Current mouse position in window coordinates.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse movement delta this frame.
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Scroll wheel delta this frame (in "lines").
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_drag_rotates() {
        let mut input = Input::new();
        input.cursor_moved(Vec2::new(10.0, 20.0));

        assert_eq!(
            input.button_pressed(MouseButton::Left),
            Some(PointerAction::StartDrag {
                mode: CameraMode::Rotating,
                position: Vec2::new(10.0, 20.0),
            })
        );
        assert_eq!(
            input.cursor_moved(Vec2::new(15.0, 18.0)),
            Some(PointerAction::TrackDrag {
                position: Vec2::new(15.0, 18.0),
                offset: Vec2::new(5.0, -2.0),
            })
        );
        assert_eq!(input.button_released(MouseButton::Left), Some(PointerAction::StopDrag));
        assert!(!input.dragging());
    }

    #[test]
    fn right_and_middle_pan() {
        for button in [MouseButton::Right, MouseButton::Middle] {
            let mut input = Input::new();
            assert!(matches!(
                input.button_pressed(button),
                Some(PointerAction::StartDrag {
                    mode: CameraMode::Panning,
                    ..
                })
            ));
        }
    }

    #[test]
    fn second_button_does_not_restart_drag() {
        let mut input = Input::new();
        input.button_pressed(MouseButton::Left);
        assert_eq!(input.button_pressed(MouseButton::Right), None);
        assert_eq!(input.button_released(MouseButton::Right), None);
        assert!(input.dragging());
        assert!(input.mouse_down(MouseButton::Left));
    }

    #[test]
    fn movement_without_drag_is_only_tracked() {
        let mut input = Input::new();
        assert_eq!(input.cursor_moved(Vec2::new(3.0, 4.0)), None);
        assert_eq!(input.mouse_delta(), Vec2::new(3.0, 4.0));

        input.begin_frame();
        assert_eq!(input.mouse_delta(), Vec2::ZERO);
        assert_eq!(input.mouse_position(), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn wheel_forwards_by_zoom_step() {
        let mut input = Input::new().zoom_step(2.5);
        input.cursor_moved(Vec2::new(7.0, 8.0));
        assert_eq!(
            input.scrolled(Vec2::new(0.0, -2.0)),
            Some(PointerAction::Forward {
                position: Vec2::new(7.0, 8.0),
                amount: -5.0,
            })
        );
        assert_eq!(input.scrolled(Vec2::new(1.0, 0.0)), None);
        assert_eq!(input.scroll_delta(), Vec2::new(1.0, -2.0));
    }

    #[test]
    fn custom_bindings() {
        let mut input = Input::new()
            .bind(MouseButton::Left, CameraMode::Invalid)
            .bind(MouseButton::Back, CameraMode::Rotating);
        assert_eq!(input.button_pressed(MouseButton::Left), None);
        input.button_released(MouseButton::Left);
        assert!(matches!(
            input.button_pressed(MouseButton::Back),
            Some(PointerAction::StartDrag {
                mode: CameraMode::Rotating,
                ..
            })
        ));
    }

    #[test]
    fn pressed_and_released_reset_each_frame() {
        let mut input = Input::new();
        input.button_pressed(MouseButton::Left);
        assert!(input.mouse_pressed(MouseButton::Left));
        input.begin_frame();
        assert!(!input.mouse_pressed(MouseButton::Left));
        input.button_released(MouseButton::Left);
        assert!(input.mouse_released(MouseButton::Left));
    }
}
