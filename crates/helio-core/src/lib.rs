pub mod error;
pub mod hash;

pub use error::{HelioError, Result};
pub use hash::{ContentHasher, Hash128, Hashable128};
pub use glam;
