//! Viewer settings

use serde::{Deserialize, Serialize};

use crate::draw::Color;

/// Camera behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    /// Degrees of orbit per pixel of middle-button drag
    pub rotation_sensitivity: f32,
    /// Scroll zoom sensitivity (scaled by current camera distance)
    pub zoom_sensitivity: f32,
    /// Vertical field of view in degrees
    pub fov_y: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            rotation_sensitivity: 0.5,
            zoom_sensitivity: 2.0,
            fov_y: 45.0,
        }
    }
}

/// Grid display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Show the ground grid
    pub visible: bool,
    /// Number of grid lines in each direction from the origin
    pub range: i32,
    /// Grid cell size in world units
    pub spacing: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            range: 100,
            spacing: 1.0,
        }
    }
}

/// Axis display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisSettings {
    /// Show the coordinate axes
    pub visible: bool,
    /// Axis line half-length in world units
    pub length: f32,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            length: 100.0,
        }
    }
}

/// Viewport colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorSettings {
    pub background: Color,
    pub mesh_face: Color,
    pub mesh_edge: Color,
    pub mesh_vertex: Color,
    pub selection: Color,
    pub grid: Color,
    pub axis_x: Color,
    pub axis_y: Color,
    pub axis_z: Color,
    pub text: Color,
}

impl Default for ColorSettings {
    fn default() -> Self {
        Self {
            background: [0.12, 0.12, 0.14],
            mesh_face: [0.62, 0.62, 0.65],
            mesh_edge: [0.10, 0.10, 0.10],
            mesh_vertex: [0.20, 0.20, 0.20],
            selection: [1.0, 0.62, 0.1],
            grid: [0.25, 0.25, 0.25],
            axis_x: [0.9, 0.2, 0.2],
            axis_y: [0.2, 0.8, 0.2],
            axis_z: [0.2, 0.3, 0.9],
            text: [0.9, 0.9, 0.9],
        }
    }
}

/// Overlay text settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Scale applied to overlay text
    pub font_scale: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_scale: 0.5 }
    }
}

/// All viewer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewerSettings {
    /// Camera behavior
    pub camera: CameraSettings,
    /// Grid settings
    #[serde(default)]
    pub grid: GridSettings,
    /// Axis settings
    #[serde(default)]
    pub axes: AxisSettings,
    /// Viewport colors
    #[serde(default)]
    pub colors: ColorSettings,
    /// Overlay text settings
    #[serde(default)]
    pub ui: UiSettings,
}

impl ViewerSettings {
    /// Load settings from the platform config dir, or defaults if absent.
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "meshview", "meshview") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
                tracing::warn!(path = %config_path.display(), "ignoring unreadable settings file");
            }
        }
        Self::default()
    }

    /// Save settings to the platform config dir.
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "meshview", "meshview") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}
