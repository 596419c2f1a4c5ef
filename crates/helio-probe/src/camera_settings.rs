use glam::{Mat4, Vec4};
use helio_core::{ContentHasher, Hash128, Hashable128};
use serde::{Deserialize, Serialize};

/// How the capture target is cleared before rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClearColorMode {
    Sky = 0,
    Color = 1,
    None = 2,
}

impl Default for ClearColorMode {
    fn default() -> Self {
        ClearColorMode::Sky
    }
}

/// Camera used when capturing a probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSettings {
    pub clear_color_mode: ClearColorMode,
    /// Linear HDR color, used when `clear_color_mode` is `Color`
    pub background_color: Vec4,
    pub clear_depth: bool,
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    pub aspect: f32,
    pub near_clip_plane: f32,
    pub far_clip_plane: f32,
    pub culling_mask: u32,
    pub use_occlusion_culling: bool,
    /// Planar probes render mirrored and need flipped winding
    pub invert_face_culling: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            clear_color_mode: ClearColorMode::Sky,
            background_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            clear_depth: true,
            field_of_view: 90.0,
            aspect: 1.0,
            near_clip_plane: 0.3,
            far_clip_plane: 1000.0,
            culling_mask: u32::MAX,
            use_occlusion_culling: true,
            invert_face_culling: false,
        }
    }
}

impl CameraSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_of_view(mut self, degrees: f32) -> Self {
        self.field_of_view = degrees;
        self
    }

    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near_clip_plane = near;
        self.far_clip_plane = far;
        self
    }

    /// Switches clearing to a solid color
    pub fn with_clear_color(mut self, color: Vec4) -> Self {
        self.clear_color_mode = ClearColorMode::Color;
        self.background_color = color;
        self
    }

    pub fn with_culling_mask(mut self, mask: u32) -> Self {
        self.culling_mask = mask;
        self
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.field_of_view.to_radians(),
            self.aspect,
            self.near_clip_plane,
            self.far_clip_plane,
        )
    }
}

impl Hashable128 for CameraSettings {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new()
            .write_u32(self.clear_color_mode as u32)
            .write_vec4(self.background_color)
            .write_bool(self.clear_depth)
            .write_f32(self.field_of_view)
            .write_f32(self.aspect)
            .write_f32(self.near_clip_plane)
            .write_f32(self.far_clip_plane)
            .write_u32(self.culling_mask)
            .write_bool(self.use_occlusion_culling)
            .write_bool(self.invert_face_culling)
            .finish()
    }
}
