//! Application facade: owns the scene and viewport and consumes the
//! host's input events.
//!
//! The host window layer delivers discrete events (resize, mouse button,
//! cursor move, scroll, key press, char input) one at a time on the
//! render thread and calls [`ViewerApp::render`] once per frame. Nothing
//! here spawns threads or blocks.

use crate::draw::DrawSink;
use crate::math::Vector3;
use crate::mesh::Mesh;
use crate::mode::{AxisConstraint, TransformMode};
use crate::scene::{SceneObject, SceneState};
use crate::settings::ViewerSettings;
use crate::viewport::Viewport;

/// Mouse buttons the core reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Non-printable keys the core reacts to. Printable input arrives through
/// [`ViewerApp::char_input`], which keeps shortcuts keyboard-layout
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
}

/// Axis-aligned view presets (rot_h, rot_v), bound to the number keys.
const VIEW_PRESETS: [(f32, f32); 6] = [
    (0.0, 0.0),    // 1: front, looking toward negative X
    (-90.0, 0.0),  // 2: right
    (0.0, 90.0),   // 3: top
    (180.0, 0.0),  // 4: back
    (90.0, 0.0),   // 5: left
    (0.0, -90.0),  // 6: bottom
];

/// The viewer application: scene, viewport, and settings.
pub struct ViewerApp {
    pub scene: SceneState,
    pub viewport: Viewport,
    pub settings: ViewerSettings,
}

impl ViewerApp {
    /// Create the app with settings loaded from disk and the default
    /// scene (a unit cube).
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_settings(ViewerSettings::load(), width, height)
    }

    pub fn with_settings(settings: ViewerSettings, width: u32, height: u32) -> Self {
        let mut scene = SceneState::new();
        scene.add_object(SceneObject::Mesh(Mesh::cube(
            "Cube",
            1.0,
            Vector3::new(0.5, 0.5, 0.5),
        )));

        let viewport = Viewport::new(width, height, &settings);
        Self {
            scene,
            viewport,
            settings,
        }
    }

    /// Emit one frame through the sink.
    pub fn render(&mut self, sink: &mut dyn DrawSink) {
        self.viewport.render(&self.scene, &self.settings, sink);
    }

    /// Record the host-measured frame rate for the overlay.
    pub fn set_fps(&mut self, fps: u32) {
        self.viewport.set_fps(fps);
    }

    // ── Input events ─────────────────────────────────────────

    pub fn window_resize(&mut self, width: u32, height: u32) {
        self.viewport.window_resize(width, height);
    }

    pub fn mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => {
                if pressed {
                    self.viewport.select(&mut self.scene);
                }
            }
            MouseButton::Middle => self.viewport.init_rotation(pressed),
            MouseButton::Right => {}
        }
    }

    pub fn cursor_move(&mut self, x: f64, y: f64) {
        self.viewport.cursor_moved(x, y, &mut self.scene);
    }

    pub fn scroll(&mut self, delta_y: f64) {
        self.viewport.zoom(delta_y);
    }

    pub fn key_press(&mut self, key: Key) {
        match key {
            Key::Tab => self.viewport.toggle_viewport_mode(),
        }
    }

    /// Printable character input: transform modes, axis constraints, and
    /// view presets.
    pub fn char_input(&mut self, c: char) {
        match c {
            '1'..='6' => {
                let index = c as usize - '1' as usize;
                let (rot_h, rot_v) = VIEW_PRESETS[index];
                self.viewport.set_view_preset(rot_h, rot_v);
            }

            'g' => self
                .viewport
                .set_transform_mode(TransformMode::Grab, &self.scene),
            's' => self
                .viewport
                .set_transform_mode(TransformMode::Scale, &self.scene),
            'r' => self
                .viewport
                .set_transform_mode(TransformMode::Rotate, &self.scene),
            'e' => self
                .viewport
                .set_transform_mode(TransformMode::Extrude, &self.scene),
            'f' => self
                .viewport
                .set_transform_mode(TransformMode::Fill, &self.scene),
            'm' => self
                .viewport
                .set_transform_mode(TransformMode::Merge, &self.scene),

            'x' => self
                .viewport
                .set_axis_constraint(AxisConstraint::X, &self.scene),
            'y' => self
                .viewport
                .set_axis_constraint(AxisConstraint::Y, &self.scene),
            'z' => self
                .viewport
                .set_axis_constraint(AxisConstraint::Z, &self.scene),

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ViewportMode;

    fn app() -> ViewerApp {
        ViewerApp::with_settings(ViewerSettings::default(), 800, 600)
    }

    #[test]
    fn test_default_scene_has_cube() {
        let app = app();
        let names: Vec<&str> = app.scene.meshes().map(|(_, m)| m.name.as_str()).collect();
        assert_eq!(names, ["Cube"]);
        assert!(!app.scene.has_selection());
    }

    #[test]
    fn test_tab_toggles_viewport_mode() {
        let mut app = app();
        assert_eq!(app.viewport.mode(), ViewportMode::Object);
        app.key_press(Key::Tab);
        assert_eq!(app.viewport.mode(), ViewportMode::Edit);
        app.key_press(Key::Tab);
        assert_eq!(app.viewport.mode(), ViewportMode::Object);
    }

    #[test]
    fn test_view_preset_keys() {
        let mut app = app();
        app.char_input('3');
        assert_eq!(app.viewport.camera().rot_v, 90.0);
        app.char_input('4');
        assert_eq!(app.viewport.camera().rot_h, 180.0);
        assert_eq!(app.viewport.camera().rot_v, 0.0);
    }

    #[test]
    fn test_transform_keys_ignored_without_selection() {
        let mut app = app();
        for c in ['g', 's', 'r', 'e', 'f', 'm'] {
            app.char_input(c);
            assert!(!app.viewport.gesture().is_active());
        }
    }

    #[test]
    fn test_transform_keys_with_selection() {
        let mut app = app();
        app.scene.select(Some(0));
        app.char_input('g');
        assert_eq!(app.viewport.gesture().mode, TransformMode::Grab);
        app.char_input('x');
        assert_eq!(app.viewport.gesture().axis, AxisConstraint::X);
    }

    #[test]
    fn test_unbound_chars_are_ignored() {
        let mut app = app();
        app.scene.select(Some(0));
        app.char_input('q');
        app.char_input('0');
        app.char_input('7');
        assert!(!app.viewport.gesture().is_active());
    }

    #[test]
    fn test_middle_drag_orbits_camera() {
        let mut app = app();
        let before = app.viewport.camera().position();

        app.cursor_move(400.0, 300.0);
        app.mouse_button(MouseButton::Middle, true);
        app.cursor_move(420.0, 310.0);
        app.mouse_button(MouseButton::Middle, false);

        let after = app.viewport.camera().position();
        assert!((after - before).length() > 1e-3);
        // 20 px at sensitivity 0.5 -> 10 degrees of horizontal orbit
        assert!((app.viewport.camera().rot_h - 10.0).abs() < 1e-3);
        assert!((app.viewport.camera().rot_v - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_zooms() {
        let mut app = app();
        let before = app.viewport.camera().distance;
        app.scroll(1.0);
        assert!(app.viewport.camera().distance < before);
    }
}
