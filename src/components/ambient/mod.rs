//! Ambient firefly-and-smoke background animation.
//!
//! Repaints a full-viewport canvas every frame with:
//! - a near-black radial-gradient backdrop,
//! - 180 large, slowly rotating translucent smoke plumes rising from below,
//! - 80 small glowing fireflies drifting above the smoke.
//!
//! Each particle runs its own spawn → fade-in → steady → fade-out → respawn
//! cycle, so the scene never settles or repeats. Drawing and randomness are
//! both injected ([`Surface`], [`RngSource`]), which keeps the scene logic
//! testable without a browser.
//!
//! # Example
//!
//! ```ignore
//! use nightveil::AmbientCanvas;
//!
//! view! { <AmbientCanvas /> }
//! ```

mod component;
mod particles;
mod rng;
mod scene;
mod surface;
pub mod theme;
mod types;

pub use component::AmbientCanvas;
pub use particles::{Firefly, Particle, SmokePlume};
pub use rng::{JsRng, RngSource};
pub use scene::{Scene, paint_backdrop};
pub use surface::{CanvasSurface, Surface};
pub use theme::Theme;
pub use types::SceneConfig;
