//! Influence and proxy volumes as seen by probe settings.
//!
//! These only carry the data that feeds a probe's content hash. Containment
//! tests, blend weights and reprojection belong to the lighting passes.

use glam::Vec3;
use helio_core::{ContentHasher, Hash128, Hashable128};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfluenceShape {
    Box = 0,
    Sphere = 1,
}

impl Default for InfluenceShape {
    fn default() -> Self {
        InfluenceShape::Box
    }
}

/// Region in which a probe's capture affects shading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InfluenceVolume {
    pub shape: InfluenceShape,
    /// Offset from the probe position
    pub offset: Vec3,
    pub box_size: Vec3,
    pub box_blend_distance_positive: Vec3,
    pub box_blend_distance_negative: Vec3,
    pub sphere_radius: f32,
    pub sphere_blend_distance: f32,
}

impl InfluenceVolume {
    pub fn new_box(size: Vec3) -> Self {
        Self {
            shape: InfluenceShape::Box,
            box_size: size,
            ..Default::default()
        }
    }

    pub fn new_sphere(radius: f32) -> Self {
        Self {
            shape: InfluenceShape::Sphere,
            sphere_radius: radius,
            ..Default::default()
        }
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }
}

impl Default for InfluenceVolume {
    fn default() -> Self {
        Self {
            shape: InfluenceShape::Box,
            offset: Vec3::ZERO,
            box_size: Vec3::splat(10.0),
            box_blend_distance_positive: Vec3::ZERO,
            box_blend_distance_negative: Vec3::ZERO,
            sphere_radius: 3.0,
            sphere_blend_distance: 0.0,
        }
    }
}

impl Hashable128 for InfluenceVolume {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new()
            .write_u32(self.shape as u32)
            .write_vec3(self.offset)
            .write_vec3(self.box_size)
            .write_vec3(self.box_blend_distance_positive)
            .write_vec3(self.box_blend_distance_negative)
            .write_f32(self.sphere_radius)
            .write_f32(self.sphere_blend_distance)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProxyShape {
    Box = 0,
    Sphere = 1,
    /// Reflections are treated as infinitely distant
    Infinite = 2,
}

impl Default for ProxyShape {
    fn default() -> Self {
        ProxyShape::Box
    }
}

/// Stand-in geometry used to reproject a capture at render time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProxyVolume {
    pub shape: ProxyShape,
    pub box_size: Vec3,
    pub sphere_radius: f32,
}

impl ProxyVolume {
    pub fn new_box(size: Vec3) -> Self {
        Self {
            shape: ProxyShape::Box,
            box_size: size,
            ..Default::default()
        }
    }

    pub fn new_sphere(radius: f32) -> Self {
        Self {
            shape: ProxyShape::Sphere,
            sphere_radius: radius,
            ..Default::default()
        }
    }

    pub fn infinite() -> Self {
        Self {
            shape: ProxyShape::Infinite,
            ..Default::default()
        }
    }
}

impl Default for ProxyVolume {
    fn default() -> Self {
        Self {
            shape: ProxyShape::Box,
            box_size: Vec3::ONE,
            sphere_radius: 1.0,
        }
    }
}

impl Hashable128 for ProxyVolume {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new()
            .write_u32(self.shape as u32)
            .write_vec3(self.box_size)
            .write_f32(self.sphere_radius)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_changes_hash() {
        assert_ne!(
            ProxyVolume::default().compute_hash(),
            ProxyVolume::infinite().compute_hash()
        );
        assert_ne!(
            InfluenceVolume::default().compute_hash(),
            InfluenceVolume {
                shape: InfluenceShape::Sphere,
                ..Default::default()
            }
            .compute_hash()
        );
    }

    #[test]
    fn offset_changes_influence_hash() {
        let volume = InfluenceVolume::new_sphere(2.0);
        assert_ne!(
            volume.compute_hash(),
            volume.with_offset(Vec3::Y).compute_hash()
        );
    }

    #[test]
    fn constructors_keep_other_defaults() {
        let proxy = ProxyVolume::new_sphere(4.0);
        assert_eq!(proxy.box_size, Vec3::ONE);
        let influence = InfluenceVolume::new_box(Vec3::splat(2.0));
        assert_eq!(influence.sphere_radius, 3.0);
    }
}
