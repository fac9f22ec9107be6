//! particle-field: ambient particle background for a portfolio hero section.
//!
//! This crate provides a WASM canvas component that animates a field of
//! drifting particles, pushes them away from the pointer, and links nearby
//! particles with fading lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, FieldRunner, ParticleField, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Parse a field configuration, falling back to defaults on malformed input.
pub fn parse_field_config(json_text: &str) -> FieldConfig {
	match serde_json::from_str::<FieldConfig>(json_text) {
		Ok(config) => config,
		Err(e) => {
			warn!("particle-field: failed to parse config: {}", e);
			FieldConfig::default()
		}
	}
}

/// Load the field configuration from a script element with id="particle-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`]'s keys.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	let config = parse_field_config(&json_text);
	info!("particle-field: loaded config, theme {:?}", config.theme);
	Some(config)
}

/// Main application component.
/// Loads the field configuration from the DOM and layers the hero content over the particles.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section id="home" class="hero">
			<ParticleField config=config />
			<div class="hero-overlay" />
			<div class="hero-content">
				<h1>"Portfolio"</h1>
				<p class="subtitle">"Move the pointer across the field to disturb it."</p>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_config_falls_back_to_defaults() {
		assert_eq!(parse_field_config("{ not json"), FieldConfig::default());
		assert_eq!(parse_field_config(r#"{ "easing": [] }"#), FieldConfig::default());
	}

	#[test]
	fn valid_config_is_kept() {
		let config = parse_field_config(r#"{ "connectionDistance": 80 }"#);
		assert_eq!(config.connection_distance, 80.0);
	}
}
