//! Ambient particle background component.
//!
//! Renders a "neural network" effect on a full-viewport HTML canvas:
//! - Particles drifting on periodic orbits around fixed anchors
//! - Repulsion away from the mouse or touch point
//! - Fading links between particles that come close to each other
//!
//! # Example
//!
//! ```ignore
//! use particle_field::{FieldConfig, ParticleField};
//!
//! let config = FieldConfig { theme: "violet".into(), ..Default::default() };
//!
//! view! { <ParticleField config=config /> }
//! ```

mod component;
pub mod particles;
pub mod render;
pub mod runner;
pub mod state;
pub mod theme;
mod types;

pub use component::ParticleField;
pub use runner::FieldRunner;
pub use theme::Theme;
pub use types::FieldConfig;
