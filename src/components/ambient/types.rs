//! Page-embedded configuration for the ambient scene.

use serde::Deserialize;

/// Optional host-page configuration, embedded as JSON in a script element.
///
/// Everything here has a built-in default; an absent or invalid config is
/// replaced by defaults without failing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SceneConfig {
	/// URL of the smoke sprite texture.
	pub smoke_texture: Option<String>,
}
