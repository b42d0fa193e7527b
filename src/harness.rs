//! Headless test harness for driving the viewer without a window.
//!
//! Wraps a [`ViewerApp`] plus a capturing [`DrawList`] so tests can feed
//! input events and inspect both the resulting state and the geometry a
//! frame would draw.

use crate::app::{Key, MouseButton, ViewerApp};
use crate::draw::DrawList;
use crate::math::Vector3;
use crate::mesh::Mesh;
use crate::scene::SceneObject;
use crate::settings::ViewerSettings;

pub const HARNESS_WIDTH: u32 = 800;
pub const HARNESS_HEIGHT: u32 = 600;

/// Headless harness: app + capture sink, default settings, no disk access.
pub struct TestHarness {
    pub app: ViewerApp,
    pub sink: DrawList,
}

impl TestHarness {
    /// Harness over the default scene (one unit cube).
    pub fn new() -> Self {
        Self {
            app: ViewerApp::with_settings(
                ViewerSettings::default(),
                HARNESS_WIDTH,
                HARNESS_HEIGHT,
            ),
            sink: DrawList::new(),
        }
    }

    /// Harness over an empty scene.
    pub fn empty() -> Self {
        let mut harness = Self::new();
        harness.app.scene.clear();
        harness
    }

    // ── Scene manipulation ────────────────────────────────────

    /// Add a cube and return its scene index.
    pub fn add_cube(&mut self, name: &str, side: f32, position: Vector3) -> usize {
        self.app
            .scene
            .add_object(SceneObject::Mesh(Mesh::cube(name, side, position)))
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.app.scene.selected_mesh().map(|mesh| mesh.name.as_str())
    }

    // ── Input convenience ─────────────────────────────────────

    /// Move the cursor and click the left button.
    pub fn click_at(&mut self, x: f64, y: f64) {
        self.app.cursor_move(x, y);
        self.app.mouse_button(MouseButton::Left, true);
        self.app.mouse_button(MouseButton::Left, false);
    }

    /// Middle-button drag from one screen point to another.
    pub fn orbit_drag(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.app.cursor_move(from.0, from.1);
        self.app.mouse_button(MouseButton::Middle, true);
        self.app.cursor_move(to.0, to.1);
        self.app.mouse_button(MouseButton::Middle, false);
    }

    pub fn press_char(&mut self, c: char) {
        self.app.char_input(c);
    }

    pub fn press_tab(&mut self) {
        self.app.key_press(Key::Tab);
    }

    // ── Rendering ─────────────────────────────────────────────

    /// Render one frame into the capture sink and return it.
    pub fn render_frame(&mut self) -> &DrawList {
        self.sink.clear();
        self.app.render(&mut self.sink);
        &self.sink
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
