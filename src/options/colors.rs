use serde::{Deserialize, Serialize};

/// Colors used for point layers and overlays.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Per-layer colors, cycled by layer id.
    pub layer_palette: Vec<[f32; 3]>,
    /// Grid line color.
    pub grid: [f32; 3],
    /// Auxiliary line overlay color.
    pub lines: [f32; 3],
    /// Camera reference marker color.
    pub camera_target: [f32; 3],
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            layer_palette: vec![
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 1.0, 1.0],
                [1.0, 0.0, 1.0],
                [1.0, 1.0, 0.0],
                [0.5, 0.0, 0.0],
                [0.0, 0.5, 0.0],
                [0.0, 0.0, 0.5],
                [0.0, 0.5, 0.5],
            ],
            grid: [1.0, 1.0, 1.0],
            lines: [1.0, 1.0, 0.0],
            camera_target: [1.0, 1.0, 1.0],
        }
    }
}

impl ColorOptions {
    /// Palette color for a layer; white when the palette is empty.
    #[must_use]
    pub fn layer_color(&self, layer_id: i32) -> [f32; 3] {
        if self.layer_palette.is_empty() {
            return [1.0, 1.0, 1.0];
        }
        let index = layer_id.unsigned_abs() as usize % self.layer_palette.len();
        self.layer_palette[index]
    }
}
