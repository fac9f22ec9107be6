//! Drawing for the particle field.
//!
//! Rendering runs in two passes over the arena:
//! 1. Glow halo and core disc for every particle, in index order
//! 2. Links between every pair of particles closer than the threshold
//!
//! Drawing goes through the [`Surface`] trait so the frame logic does not
//! depend on a live browser canvas.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::particles::Particle;
use super::state::FieldState;
use super::theme::{Color, LinkStyle, Theme};

/// The handful of 2D drawing primitives a frame needs.
pub trait Surface {
	/// Wipe the whole `width` x `height` area.
	fn clear(&mut self, width: f64, height: f64);
	/// Radial gradient disc fading from `color` at the center to transparent at `radius`.
	fn glow(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Solid disc.
	fn disc(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Straight line with a soft shadow, stroked at `opacity`.
	fn link(&mut self, from: (f64, f64), to: (f64, f64), style: &LinkStyle, opacity: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn glow(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		let Ok(gradient) = self.create_radial_gradient(x, y, 0.0, x, y, radius) else {
			return;
		};
		let _ = gradient.add_color_stop(0.0, &color.to_css());
		let _ = gradient.add_color_stop(1.0, &color.transparent().to_css());

		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		#[allow(deprecated)]
		self.set_fill_style(&gradient);
		self.fill();
	}

	fn disc(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.close_path();
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn link(&mut self, from: (f64, f64), to: (f64, f64), style: &LinkStyle, opacity: f64) {
		self.set_stroke_style_str(&style.color.with_alpha(opacity).to_css());
		self.set_line_width(style.line_width);
		self.set_shadow_blur(style.shadow_blur);
		self.set_shadow_color(&style.shadow_color.to_css());

		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();

		self.set_shadow_blur(0.0);
	}
}

/// A line to draw between particles `a` and `b` (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	pub opacity: f64,
}

/// Opacity of a link spanning `distance`: `max_opacity` at zero, fading
/// linearly to nothing at `threshold`. `None` at or past the threshold.
pub fn link_opacity(distance: f64, threshold: f64, max_opacity: f64) -> Option<f64> {
	if !(distance < threshold) {
		return None;
	}
	Some((1.0 - distance / threshold) * max_opacity)
}

/// Every pair of particles close enough to be joined.
///
/// Visits all `n * (n - 1) / 2` pairs. Self-pairs would be zero-length
/// strokes and are skipped.
pub fn links(
	particles: &[Particle],
	threshold: f64,
	max_opacity: f64,
) -> impl Iterator<Item = Link> + '_ {
	let n = particles.len();
	(0..n).flat_map(move |a| {
		(a + 1..n).filter_map(move |b| {
			let (p1, p2) = (&particles[a], &particles[b]);
			let (dx, dy) = (p1.x - p2.x, p1.y - p2.y);
			let distance = (dx * dx + dy * dy).sqrt();
			link_opacity(distance, threshold, max_opacity).map(|opacity| Link {
				a,
				b,
				distance,
				opacity,
			})
		})
	})
}

/// Renders one complete frame of the field.
pub fn render<S: Surface + ?Sized>(state: &FieldState, surface: &mut S, theme: &Theme) {
	surface.clear(state.width(), state.height());
	draw_particles(state, surface, theme);
	draw_links(state, surface, theme);
}

fn draw_particles<S: Surface + ?Sized>(state: &FieldState, surface: &mut S, theme: &Theme) {
	for p in &state.system.particles {
		surface.glow(p.x, p.y, p.size * theme.glow.radius_scale, theme.glow.color);
		surface.disc(p.x, p.y, p.size, theme.core.color);
	}
}

fn draw_links<S: Surface + ?Sized>(state: &FieldState, surface: &mut S, theme: &Theme) {
	let particles = &state.system.particles;
	let style = &theme.link;

	for link in links(particles, state.config.connection_distance, style.max_opacity) {
		let (p1, p2) = (&particles[link.a], &particles[link.b]);
		surface.link((p1.x, p1.y), (p2.x, p2.y), style, link.opacity);
	}
}

#[cfg(test)]
mod tests {
	use super::super::particles::ParticleSystem;
	use super::super::types::FieldConfig;
	use super::*;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Glow(f64),
		Disc(f64),
		Link(f64),
	}

	#[derive(Default)]
	struct Recorder(Vec<Op>);

	impl Surface for Recorder {
		fn clear(&mut self, _: f64, _: f64) {
			self.0.push(Op::Clear);
		}
		fn glow(&mut self, _: f64, _: f64, radius: f64, _: Color) {
			self.0.push(Op::Glow(radius));
		}
		fn disc(&mut self, _: f64, _: f64, radius: f64, _: Color) {
			self.0.push(Op::Disc(radius));
		}
		fn link(&mut self, _: (f64, f64), _: (f64, f64), _: &LinkStyle, opacity: f64) {
			self.0.push(Op::Link(opacity));
		}
	}

	fn at(x: f64, y: f64) -> Particle {
		Particle::at_rest(x, y, 2.0, 10.0)
	}

	#[test]
	fn opacity_fades_linearly_to_threshold() {
		assert_eq!(link_opacity(0.0, 120.0, 0.6), Some(0.6));
		assert_eq!(link_opacity(60.0, 120.0, 0.6), Some(0.3));
		assert_eq!(link_opacity(120.0, 120.0, 0.6), None);
		assert_eq!(link_opacity(500.0, 120.0, 0.6), None);
	}

	#[test]
	fn link_opacity_ignores_pair_order() {
		let forward = [at(10.0, 10.0), at(70.0, 90.0)];
		let backward = [forward[1], forward[0]];
		let f: Vec<_> = links(&forward, 120.0, 0.6).collect();
		let b: Vec<_> = links(&backward, 120.0, 0.6).collect();
		assert_eq!(f.len(), 1);
		assert_eq!(f[0].opacity, b[0].opacity);
		assert_eq!(f[0].distance, 100.0);
	}

	#[test]
	fn only_close_pairs_are_linked() {
		let particles = [at(0.0, 0.0), at(100.0, 0.0), at(300.0, 0.0), at(0.0, 119.0)];
		let pairs: Vec<_> = links(&particles, 120.0, 0.6).map(|l| (l.a, l.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 3)]);
	}

	#[test]
	fn frame_draws_particles_then_links() {
		let system = ParticleSystem::from_particles(vec![at(10.0, 10.0), at(40.0, 50.0)], 800.0, 600.0);
		let state = FieldState::with_system(system, FieldConfig::default());
		let mut surface = Recorder::default();

		render(&state, &mut surface, &Theme::default());

		assert_eq!(
			surface.0,
			vec![
				Op::Clear,
				Op::Glow(6.0),
				Op::Disc(2.0),
				Op::Glow(6.0),
				Op::Disc(2.0),
				Op::Link((1.0 - 50.0 / 120.0) * 0.6),
			]
		);
	}
}
