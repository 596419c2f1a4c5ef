//! Probe settings for Helio's reflection capture.
//!
//! [`ProbeSettings`] describes how a cubemap or planar probe is captured and
//! shaded. Its [`ProbeSettings::compute_hash`] fingerprint is what the bake
//! cache uses to decide whether a capture is stale.

pub mod camera_settings;
pub mod probe_settings;
pub mod volume;

pub use camera_settings::{CameraSettings, ClearColorMode};
pub use probe_settings::{Lighting, ProbeMode, ProbeSettings, ProbeType, ProxySettings};
pub use volume::{InfluenceShape, InfluenceVolume, ProxyShape, ProxyVolume};

pub use helio_core::{Hash128, Hashable128};
