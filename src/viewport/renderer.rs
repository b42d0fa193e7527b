//! Geometry drawing: meshes, grid, axes, and overlay text go out through
//! the sink here.

use crate::draw::DrawSink;
use crate::math::Vector3;
use crate::mesh::Mesh;
use crate::mode::ViewportMode;
use crate::settings::{AxisSettings, ColorSettings, GridSettings, UiSettings};

use super::edge::silhouette_edges;

/// Left margin for overlay text lines.
pub const OVERLAY_MARGIN_X: f32 = 10.0;

const OUTLINE_WIDTH: f32 = 4.0;
const WIREFRAME_WIDTH: f32 = 1.0;
const VERTEX_POINT_SIZE: f32 = 4.0;
const OUTLINE_POINT_SIZE: f32 = 3.0;

/// Draw one mesh: faces always; wireframe and vertices in Edit mode; the
/// silhouette outline when selected in Object mode.
pub fn draw_mesh(
    sink: &mut dyn DrawSink,
    mesh: &Mesh,
    selected: bool,
    mode: ViewportMode,
    camera_position: Vector3,
    colors: &ColorSettings,
) {
    sink.triangles(&mesh.triangles(), colors.mesh_face);

    match mode {
        ViewportMode::Edit => {
            let edge_color = if selected {
                colors.selection
            } else {
                colors.mesh_edge
            };
            let segments: Vec<(Vector3, Vector3)> = mesh
                .edge_indices()
                .chunks_exact(2)
                .map(|edge| {
                    (
                        mesh.vertices()[edge[0] as usize],
                        mesh.vertices()[edge[1] as usize],
                    )
                })
                .collect();
            sink.lines(&segments, edge_color, WIREFRAME_WIDTH);

            let vertex_color = if selected {
                colors.selection
            } else {
                colors.mesh_vertex
            };
            sink.points(mesh.vertices(), vertex_color, VERTEX_POINT_SIZE);
        }
        ViewportMode::Object if selected => {
            let outline: Vec<(Vector3, Vector3)> = silhouette_edges(mesh, camera_position)
                .into_iter()
                .map(|(a, b)| (mesh.vertices()[a as usize], mesh.vertices()[b as usize]))
                .collect();
            let endpoints: Vec<Vector3> = outline
                .iter()
                .flat_map(|(a, b)| [*a, *b])
                .collect();
            sink.lines(&outline, colors.selection, OUTLINE_WIDTH);
            sink.points(&endpoints, colors.selection, OUTLINE_POINT_SIZE);
        }
        ViewportMode::Object => {}
    }
}

/// Draw the coordinate system axes.
pub fn draw_axes(sink: &mut dyn DrawSink, axes: &AxisSettings, colors: &ColorSettings) {
    let len = axes.length;
    sink.lines(
        &[(Vector3::new(-len, 0.0, 0.0), Vector3::new(len, 0.0, 0.0))],
        colors.axis_x,
        WIREFRAME_WIDTH,
    );
    sink.lines(
        &[(Vector3::new(0.0, -len, 0.0), Vector3::new(0.0, len, 0.0))],
        colors.axis_y,
        WIREFRAME_WIDTH,
    );
    sink.lines(
        &[(Vector3::new(0.0, 0.0, -len), Vector3::new(0.0, 0.0, len))],
        colors.axis_z,
        WIREFRAME_WIDTH,
    );
}

/// Draw the ground grid in the xy-plane.
pub fn draw_grid(sink: &mut dyn DrawSink, grid: &GridSettings, colors: &ColorSettings) {
    let extent = grid.range as f32 * grid.spacing;
    let mut segments = Vec::with_capacity((grid.range as usize * 2 + 1) * 2);

    for i in -grid.range..=grid.range {
        let offset = i as f32 * grid.spacing;
        // Line spanning the y direction at x = offset
        segments.push((
            Vector3::new(offset, -extent, 0.0),
            Vector3::new(offset, extent, 0.0),
        ));
        // Line spanning the x direction at y = offset
        segments.push((
            Vector3::new(-extent, offset, 0.0),
            Vector3::new(extent, offset, 0.0),
        ));
    }

    sink.lines(&segments, colors.grid, WIREFRAME_WIDTH);
}

/// Emit the overlay text lines.
pub fn draw_overlay(
    sink: &mut dyn DrawSink,
    lines: &[String],
    ui: &UiSettings,
    colors: &ColorSettings,
) {
    for (line, text) in lines.iter().enumerate() {
        sink.text(OVERLAY_MARGIN_X, line, text, ui.font_scale, colors.text);
    }
}
