//! Simulation configuration accepted by the particle field component.

use serde::Deserialize;

/// Tunable constants for the particle simulation.
///
/// Every field is optional when deserializing; missing keys fall back to the
/// values in [`FieldConfig::default`]. Keys are camelCase in JSON.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldConfig {
	/// Canvas area (px²) allotted to each particle.
	pub area_per_particle: f64,
	/// Distance within which the pointer pushes particles away.
	pub interaction_radius: f64,
	/// Maximum distance at which two particles are linked.
	pub connection_distance: f64,
	/// Amplitude of the drift orbit around each anchor, in pixels.
	pub drift_amplitude: f64,
	/// Time multiplier for the horizontal drift.
	pub drift_speed: f64,
	/// Vertical drift frequency relative to the horizontal one.
	pub drift_y_ratio: f64,
	/// Phase offset added per particle index.
	pub index_phase: f64,
	/// Fraction of the remaining distance to the target covered each frame.
	pub easing: f64,
	/// Multiplier applied on top of `falloff * density`.
	pub repulsion_scale: f64,
	/// Phase increment applied to every particle each frame.
	pub angle_step: f64,
	/// Extra phase increment while inside the pointer radius.
	pub agitated_angle_step: f64,
	/// Length of the angle-driven nudge while inside the pointer radius.
	pub jitter: f64,
	/// Name of the visual preset, see [`super::Theme::by_name`].
	pub theme: String,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			area_per_particle: 15_000.0,
			interaction_radius: 150.0,
			connection_distance: 120.0,
			drift_amplitude: 30.0,
			drift_speed: 1.5,
			drift_y_ratio: 1.3,
			index_phase: 0.5,
			easing: 0.1,
			repulsion_scale: 3.0,
			angle_step: 0.01,
			agitated_angle_step: 0.05,
			jitter: 0.5,
			theme: "cyan".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_yields_defaults() {
		let cfg: FieldConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(cfg, FieldConfig::default());
	}

	#[test]
	fn partial_object_overrides_named_keys() {
		let cfg: FieldConfig =
			serde_json::from_str(r#"{ "interactionRadius": 90, "theme": "ember" }"#).unwrap();
		assert_eq!(cfg.interaction_radius, 90.0);
		assert_eq!(cfg.theme, "ember");
		assert_eq!(cfg.connection_distance, 120.0);
		assert_eq!(cfg.area_per_particle, 15_000.0);
	}

	#[test]
	fn wrong_type_is_rejected() {
		assert!(serde_json::from_str::<FieldConfig>(r#"{ "easing": "fast" }"#).is_err());
	}
}
