//! Visual theming for the particle field.
//!
//! Colors and stroke parameters for the particle glow, the particle core and
//! the connecting links, plus a few named presets.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Fully transparent version of the same hue, for gradient end stops.
	pub fn transparent(self) -> Self {
		self.with_alpha(0.0)
	}

	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Soft halo drawn behind each particle.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Color at the center of the halo; fades to transparent at the rim.
	pub color: Color,
	/// Halo radius as a multiple of the particle size.
	pub radius_scale: f64,
}

/// Solid disc at the particle position.
#[derive(Clone, Debug)]
pub struct CoreStyle {
	pub color: Color,
}

/// Lines joining nearby particles.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Stroke color. Its alpha is replaced by the distance-based opacity.
	pub color: Color,
	/// Opacity of a link between two coincident particles.
	pub max_opacity: f64,
	pub line_width: f64,
	pub shadow_blur: f64,
	pub shadow_color: Color,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub glow: GlowStyle,
	pub core: CoreStyle,
	pub link: LinkStyle,
}

impl Theme {
	/// Cyan "neural network" look (default)
	pub fn cyan() -> Self {
		Self {
			name: "cyan",
			glow: GlowStyle {
				color: Color::rgba(34, 211, 238, 0.8),
				radius_scale: 3.0,
			},
			core: CoreStyle {
				color: Color::rgba(100, 220, 255, 0.8),
			},
			link: LinkStyle {
				color: Color::rgb(34, 211, 238),
				max_opacity: 0.6,
				line_width: 0.8,
				shadow_blur: 5.0,
				shadow_color: Color::rgba(34, 211, 238, 0.5),
			},
		}
	}

	/// Muted violet variant
	pub fn violet() -> Self {
		Self {
			name: "violet",
			glow: GlowStyle {
				color: Color::rgba(167, 139, 250, 0.7),
				radius_scale: 3.0,
			},
			core: CoreStyle {
				color: Color::rgba(196, 181, 253, 0.85),
			},
			link: LinkStyle {
				color: Color::rgb(167, 139, 250),
				max_opacity: 0.5,
				line_width: 0.8,
				shadow_blur: 5.0,
				shadow_color: Color::rgba(167, 139, 250, 0.4),
			},
		}
	}

	/// Warm amber variant
	pub fn ember() -> Self {
		Self {
			name: "ember",
			glow: GlowStyle {
				color: Color::rgba(251, 146, 60, 0.75),
				radius_scale: 3.0,
			},
			core: CoreStyle {
				color: Color::rgba(253, 186, 116, 0.85),
			},
			link: LinkStyle {
				color: Color::rgb(251, 146, 60),
				max_opacity: 0.5,
				line_width: 0.8,
				shadow_blur: 4.0,
				shadow_color: Color::rgba(251, 146, 60, 0.4),
			},
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"cyan" => Some(Self::cyan()),
			"violet" => Some(Self::violet()),
			"ember" => Some(Self::ember()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::cyan()
	}
}
