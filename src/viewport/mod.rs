//! Viewport controller: camera, view/projection matrices, mode state, and
//! the screen↔world transforms behind picking and dragging.

pub mod camera;
pub mod edge;
pub mod picking;
pub mod renderer;

use crate::draw::DrawSink;
use crate::error::MathError;
use crate::math::{Matrix4x4, Vector3, Vector4};
use crate::mode::{AxisConstraint, ModeKind, TransformGesture, TransformMode, ViewportMode};
use crate::scene::SceneState;
use crate::settings::ViewerSettings;

use camera::OrbitCamera;
use picking::{pick_nearest, Ray};

/// The viewport context: owns the camera, the cached view/projection
/// matrices, the mode state machine, and the in-progress gesture. All
/// input events are funneled through here by the application facade.
pub struct Viewport {
    mode: ViewportMode,
    gesture: TransformGesture,
    camera: OrbitCamera,

    width: u32,
    height: u32,
    aspect: f32,
    projection: Matrix4x4,
    view: Matrix4x4,

    // Orbit drag state (middle mouse button)
    rotating: bool,
    orbit_anchor: (f64, f64),
    rotation_sensitivity: f32,

    // Latest cursor position in screen pixels
    cursor: (f64, f64),

    // Accumulators for the in-progress transform gesture
    transformation: Vector3,
    last_transformation: Vector3,

    // Host-supplied frame rate, shown in the overlay
    last_fps: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, settings: &ViewerSettings) -> Self {
        let camera = OrbitCamera::new(settings.camera.fov_y, settings.camera.zoom_sensitivity);
        let aspect = width as f32 / height as f32;
        let projection = camera.projection_matrix(aspect);
        let view = camera.view_matrix();
        Self {
            mode: ViewportMode::default(),
            gesture: TransformGesture::default(),
            camera,
            width,
            height,
            aspect,
            projection,
            view,
            rotating: false,
            orbit_anchor: (0.0, 0.0),
            rotation_sensitivity: settings.camera.rotation_sensitivity,
            cursor: (0.0, 0.0),
            transformation: Vector3::ZERO,
            last_transformation: Vector3::ZERO,
            last_fps: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn gesture(&self) -> TransformGesture {
        self.gesture
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.last_fps = fps;
    }

    // ── Input handling ───────────────────────────────────────

    pub fn window_resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.aspect = self.width as f32 / self.height as f32;
        self.projection = self.camera.projection_matrix(self.aspect);
    }

    /// Middle mouse button pressed or released: start or stop orbiting.
    pub fn init_rotation(&mut self, rotating: bool) {
        self.rotating = rotating;
        if rotating {
            self.orbit_anchor = self.cursor;
        }
    }

    /// Cursor moved. In idle mode this orbits the camera while the middle
    /// button is held; with an active gesture it advances the drag.
    pub fn cursor_moved(&mut self, x: f64, y: f64, scene: &mut SceneState) {
        self.cursor = (x, y);

        match self.gesture.mode {
            TransformMode::None => {
                if self.rotating {
                    let dx = (x - self.orbit_anchor.0) as f32;
                    let dy = (y - self.orbit_anchor.1) as f32;
                    self.camera.rotate(dx, dy, self.rotation_sensitivity);
                    self.orbit_anchor = (x, y);
                    self.view = self.camera.view_matrix();
                }
            }
            TransformMode::Grab => self.grab_drag(scene),
            TransformMode::Scale => unimplemented!("interactive scale drag is not implemented"),
            TransformMode::Rotate => unimplemented!("interactive rotate drag is not implemented"),
            TransformMode::Extrude => unimplemented!("extrude is not implemented"),
            TransformMode::Fill => unimplemented!("fill is not implemented"),
            TransformMode::Merge => unimplemented!("merge is not implemented"),
        }
    }

    /// Scroll wheel zoom.
    pub fn zoom(&mut self, offset: f64) {
        self.camera.zoom(offset as f32);
        self.view = self.camera.view_matrix();
    }

    /// Jump the camera to one of the axis-aligned view presets.
    pub fn set_view_preset(&mut self, rot_h: f32, rot_v: f32) {
        self.camera.set_view(rot_h, rot_v);
        self.view = self.camera.view_matrix();
    }

    pub fn toggle_viewport_mode(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = self.mode.label(), "viewport mode");
    }

    /// Enter a transform mode. Ignored when nothing is selected.
    pub fn set_transform_mode(&mut self, mode: TransformMode, scene: &SceneState) {
        if !scene.has_selection() {
            return;
        }
        self.gesture = TransformGesture {
            mode,
            axis: AxisConstraint::None,
        };
        tracing::debug!(mode = mode.label(), "transform mode");
    }

    /// Constrain the active gesture to an axis. Ignored when nothing is
    /// selected or the active mode is not a rigid transform.
    pub fn set_axis_constraint(&mut self, axis: AxisConstraint, scene: &SceneState) {
        if !scene.has_selection() {
            return;
        }
        if self.gesture.mode.kind() == ModeKind::Rigid {
            self.gesture.axis = axis;
        }
    }

    /// Left click: pick under the cursor, then commit any active gesture.
    ///
    /// Picking runs the mouse ray against every mesh and selects the hit
    /// nearest to the camera (scene order breaks exact ties); no hit
    /// clears the selection. If the unprojection fails the pick is
    /// abandoned for this frame and the selection is left untouched.
    pub fn select(&mut self, scene: &mut SceneState) {
        match self.pick_ray(self.cursor.0, self.cursor.1) {
            Ok(ray) => {
                let hit = pick_nearest(&ray, scene.meshes(), self.camera.position());
                scene.select(hit);
            }
            Err(err) => {
                tracing::warn!(%err, "pick abandoned");
            }
        }

        if self.gesture.is_active() {
            // Clicking confirms the transform: reset accumulators, back
            // to idle.
            self.transformation = Vector3::ZERO;
            self.last_transformation = Vector3::ZERO;
            self.gesture.reset();
        }
    }

    // ── Screen/world transforms ──────────────────────────────

    /// Map screen pixel coordinates to world space.
    ///
    /// `depth` is a z value in normalized device coordinates: 1.0 for the
    /// far plane (ray directions), 0.0 for the near plane (grabbing).
    /// After the inverse projection the z/w components are overwritten
    /// with -1/0, producing a direction along the view axis in eye space,
    /// which the inverse view matrix then carries into world space.
    pub fn screen_to_world(&self, x: f64, y: f64, depth: f32) -> Result<Vector3, MathError> {
        // Screen -> NDC; screen y grows downward, NDC y upward
        let ndc_x = (2.0 * x as f32) / self.width as f32 - 1.0;
        let ndc_y = 1.0 - (2.0 * y as f32) / self.height as f32;

        let clip = Vector4::new(ndc_x, ndc_y, depth, 1.0);
        let eye = self.projection.invert()?.mul_vec4(clip);
        let eye_direction = Vector4::new(eye.x, eye.y, -1.0, 0.0);
        let world = self.view.invert()?.mul_vec4(eye_direction);
        Ok(world.truncate())
    }

    /// Ray from the camera through the given screen position.
    pub fn pick_ray(&self, x: f64, y: f64) -> Result<Ray, MathError> {
        let direction = self.screen_to_world(x, y, 1.0)?.normalize();
        Ok(Ray::new(self.camera.position(), direction))
    }

    // ── Gesture drags ────────────────────────────────────────

    /// Advance a grab drag: unproject the cursor at the near plane,
    /// constrain it to the gesture axis, and translate the selection by
    /// the frame-over-frame difference scaled by its distance from the
    /// camera. The first event only primes the accumulator.
    fn grab_drag(&mut self, scene: &mut SceneState) {
        let world = match self.screen_to_world(self.cursor.0, self.cursor.1, 0.0) {
            Ok(world) => world,
            Err(err) => {
                tracing::warn!(%err, "grab drag skipped");
                return;
            }
        };

        let directional = match self.gesture.axis {
            AxisConstraint::None => world,
            AxisConstraint::X => Vector3::new(world.x, 0.0, 0.0),
            AxisConstraint::Y => Vector3::new(0.0, world.y, 0.0),
            AxisConstraint::Z => Vector3::new(0.0, 0.0, world.z),
        };

        let grab_depth = match scene.selected_mesh() {
            Some(mesh) => (mesh.position - self.camera.position()).length(),
            None => return,
        };

        if self.last_transformation == Vector3::ZERO {
            self.last_transformation = directional;
        }
        self.transformation = (directional - self.last_transformation) * grab_depth;

        if let Some(mesh) = scene.selected_mesh_mut() {
            mesh.apply_transformation(TransformMode::Grab, self.transformation);
        }
        self.last_transformation = directional;
    }

    // ── Rendering ────────────────────────────────────────────

    /// Emit one frame: axes, grid, every mesh, and the overlay.
    pub fn render(&self, scene: &SceneState, settings: &ViewerSettings, sink: &mut dyn DrawSink) {
        if settings.axes.visible {
            renderer::draw_axes(sink, &settings.axes, &settings.colors);
        }
        if settings.grid.visible {
            renderer::draw_grid(sink, &settings.grid, &settings.colors);
        }

        for (index, mesh) in scene.meshes() {
            renderer::draw_mesh(
                sink,
                mesh,
                scene.selected_index() == Some(index),
                self.mode,
                self.camera.position(),
                &settings.colors,
            );
        }

        let lines = self.overlay_lines(scene);
        renderer::draw_overlay(sink, &lines, &settings.ui, &settings.colors);
    }

    fn overlay_lines(&self, scene: &SceneState) -> Vec<String> {
        let camera_position = self.camera.position();
        let mouse_world = self
            .screen_to_world(self.cursor.0, self.cursor.1, 0.0)
            .map(|w| format!("{:.3} {:.3} {:.3}", w.x, w.y, w.z))
            .unwrap_or_else(|_| "-".to_string());

        let mode_line = {
            let mut line = format!("Mode: {}", self.mode.label());
            if self.gesture.is_active() {
                line.push(' ');
                line.push_str(self.gesture.mode.label());
                if self.gesture.axis != AxisConstraint::None {
                    line.push(' ');
                    line.push_str(self.gesture.axis.label());
                }
            }
            line
        };

        let mut lines = vec![
            format!("FPS: {}", self.last_fps),
            format!(
                "Camera Pos: {:.3} {:.3} {:.3}",
                camera_position.x, camera_position.y, camera_position.z
            ),
            format!("Camera Rot: {:.1} / {:.1}", self.camera.rot_h, self.camera.rot_v),
            format!("Zoom: {:.3}", self.camera.distance),
            format!("Mouse Screen: {:.0} / {:.0}", self.cursor.0, self.cursor.1),
            format!("Mouse World: {mouse_world}"),
            mode_line,
            format!(
                "Transform: {:.3} {:.3} {:.3}",
                self.transformation.x, self.transformation.y, self.transformation.z
            ),
        ];

        // Placement block for the selected mesh (or the first one)
        let subject = scene
            .selected_mesh()
            .or_else(|| scene.meshes().next().map(|(_, mesh)| mesh));
        if let Some(mesh) = subject {
            lines.push(format!("{}:", mesh.name));
            lines.push(format!(
                "    Pos: {:.3} {:.3} {:.3}",
                mesh.position.x, mesh.position.y, mesh.position.z
            ));
            lines.push(format!(
                "    Scale: {:.3} {:.3} {:.3}",
                mesh.scale.x, mesh.scale.y, mesh.scale.z
            ));
            lines.push(format!(
                "    Rot: {:.3} {:.3} {:.3}",
                mesh.rotation.x, mesh.rotation.y, mesh.rotation.z
            ));
        }

        lines
    }
}
