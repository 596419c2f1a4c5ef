use glam::{Mat4, Quat, Vec3};
use helio_core::{ContentHasher, Hash128, Hashable128};
use serde::{Deserialize, Serialize};

use crate::CameraSettings;

/// What a probe captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeType {
    /// Cubemap capture around the probe position
    ReflectionProbe = 0,
    /// Mirror-plane capture
    PlanarProbe = 1,
}

impl ProbeType {
    pub fn is_planar(&self) -> bool {
        matches!(self, ProbeType::PlanarProbe)
    }
}

impl Default for ProbeType {
    fn default() -> Self {
        ProbeType::ReflectionProbe
    }
}

impl Hashable128 for ProbeType {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new().write_u32(*self as u32).finish()
    }
}

/// Where the probe's data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProbeMode {
    /// Captured offline and loaded from the bake cache
    Baked = 0,
    /// Supplied by the user
    Custom = 1,
    /// Re-captured at runtime
    Realtime = 2,
}

impl ProbeMode {
    pub fn is_baked(&self) -> bool {
        matches!(self, ProbeMode::Baked)
    }

    pub fn is_realtime(&self) -> bool {
        matches!(self, ProbeMode::Realtime)
    }
}

impl Default for ProbeMode {
    fn default() -> Self {
        ProbeMode::Baked
    }
}

impl Hashable128 for ProbeMode {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new().write_u32(*self as u32).finish()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct Lighting {
    /// Scales the captured radiance
    pub multiplier: f32,
    /// Blend weight against overlapping probes
    pub weight: f32,
}

impl Lighting {
    pub fn new(multiplier: f32, weight: f32) -> Self {
        Self { multiplier, weight }
    }
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            weight: 1.0,
        }
    }
}

impl Hashable128 for Lighting {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new()
            .write_f32(self.multiplier)
            .write_f32(self.weight)
            .finish()
    }
}

/// Capture and mirror placement, expressed in the proxy volume's space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProxySettings {
    pub use_influence_volume_as_proxy_volume: bool,
    pub capture_position_proxy_space: Vec3,
    pub capture_rotation_proxy_space: Quat,
    pub mirror_position_proxy_space: Vec3,
    pub mirror_rotation_proxy_space: Quat,
}

impl ProxySettings {
    pub fn capture_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            self.capture_rotation_proxy_space,
            self.capture_position_proxy_space,
        )
    }

    pub fn mirror_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            self.mirror_rotation_proxy_space,
            self.mirror_position_proxy_space,
        )
    }
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            use_influence_volume_as_proxy_volume: false,
            capture_position_proxy_space: Vec3::ZERO,
            capture_rotation_proxy_space: Quat::IDENTITY,
            // Mirror placement is zero-initialised, rotation included.
            mirror_position_proxy_space: Vec3::ZERO,
            mirror_rotation_proxy_space: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
        }
    }
}

impl Hashable128 for ProxySettings {
    fn compute_hash(&self) -> Hash128 {
        ContentHasher::new()
            .write_bool(self.use_influence_volume_as_proxy_volume)
            .write_vec3(self.capture_position_proxy_space)
            .write_quat(self.capture_rotation_proxy_space)
            .write_vec3(self.mirror_position_proxy_space)
            .write_quat(self.mirror_rotation_proxy_space)
            .finish()
    }
}

/// Everything needed to render one probe.
///
/// The influence and linked proxy volumes are borrowed from whoever owns
/// them; only their content hash takes part in [`ProbeSettings::compute_hash`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProbeSettings<'a> {
    #[serde(rename = "type")]
    pub probe_type: ProbeType,
    pub mode: ProbeMode,
    pub lighting: Lighting,
    pub proxy_settings: ProxySettings,
    pub camera: CameraSettings,
    #[serde(skip)]
    pub influence: Option<&'a dyn Hashable128>,
    #[serde(skip)]
    pub linked_proxy: Option<&'a dyn Hashable128>,
}

impl<'a> ProbeSettings<'a> {
    /// A baked reflection probe with no volumes attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, probe_type: ProbeType) -> Self {
        self.probe_type = probe_type;
        self
    }

    pub fn with_mode(mut self, mode: ProbeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_lighting(mut self, lighting: Lighting) -> Self {
        self.lighting = lighting;
        self
    }

    pub fn with_proxy_settings(mut self, proxy_settings: ProxySettings) -> Self {
        self.proxy_settings = proxy_settings;
        self
    }

    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_influence(mut self, influence: &'a dyn Hashable128) -> Self {
        self.influence = Some(influence);
        self
    }

    pub fn with_linked_proxy(mut self, linked_proxy: &'a dyn Hashable128) -> Self {
        self.linked_proxy = Some(linked_proxy);
        self
    }

    /// Fingerprint of everything that affects the rendered probe.
    ///
    /// Fields are folded in a fixed order: type, mode, lighting, proxy
    /// settings, camera, then the influence and linked proxy volumes when
    /// present. Persisted hashes depend on this order.
    pub fn compute_hash(&self) -> Hash128 {
        let mut hash = self.probe_type.compute_hash();
        hash.append(&self.mode.compute_hash());
        hash.append(&self.lighting.compute_hash());
        hash.append(&self.proxy_settings.compute_hash());
        hash.append(&self.camera.compute_hash());

        if let Some(influence) = self.influence {
            hash.append(&influence.compute_hash());
        }
        if let Some(linked_proxy) = self.linked_proxy {
            hash.append(&linked_proxy.compute_hash());
        }

        log::trace!(
            "Probe settings hash ({:?}, {:?}, influence: {}, linked proxy: {}): {}",
            self.probe_type,
            self.mode,
            self.influence.is_some(),
            self.linked_proxy.is_some(),
            hash
        );
        hash
    }
}

impl Hashable128 for ProbeSettings<'_> {
    fn compute_hash(&self) -> Hash128 {
        ProbeSettings::compute_hash(self)
    }
}
