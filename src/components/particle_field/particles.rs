//! Particles and the per-particle motion model.
//!
//! Each particle orbits its anchor on a Lissajous-like path, eases toward that
//! moving target, and gets shoved away when the pointer comes close.

use std::f64::consts::TAU;

use rand::Rng;

use super::types::FieldConfig;

/// A single simulated point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	/// Anchor the drift orbits around.
	pub base_x: f64,
	pub base_y: f64,
	/// Drift target for the current frame.
	pub target_x: f64,
	pub target_y: f64,
	/// Core radius in pixels, in `[1, 4)`.
	pub size: f64,
	/// Repulsion strength, in `[5, 15)`.
	pub density: f64,
	/// Phase driving the jitter near the pointer.
	pub angle: f64,
	pub speed: f64,
}

impl Particle {
	/// Create a particle resting at its own anchor.
	pub fn at_rest(x: f64, y: f64, size: f64, density: f64) -> Self {
		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			target_x: x,
			target_y: y,
			size,
			density,
			angle: 0.0,
			speed: 0.1,
		}
	}

	/// Draw a particle that fits inside a `width` x `height` canvas.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
		let size = rng.gen_range(1.0..4.0);
		// `gen` rather than `gen_range` so a canvas narrower than the particle cannot panic.
		let x = rng.r#gen::<f64>() * (width - size * 2.0) + size;
		let y = rng.r#gen::<f64>() * (height - size * 2.0) + size;

		Self {
			angle: rng.gen_range(0.0..TAU),
			speed: rng.gen_range(0.1..0.6),
			..Self::at_rest(x, y, size, rng.gen_range(5.0..15.0))
		}
	}

	/// Advance one frame: drift toward the moving target, then react to the pointer.
	///
	/// Returns `true` when the pointer was close enough to push the particle.
	pub fn advance(
		&mut self,
		index: usize,
		t: f64,
		pointer: (f64, f64),
		config: &FieldConfig,
	) -> bool {
		self.angle += config.angle_step;

		let (tx, ty) = drift_target(self.base_x, self.base_y, index, t, config);
		self.target_x = tx;
		self.target_y = ty;

		self.x += (self.target_x - self.x) * config.easing;
		self.y += (self.target_y - self.y) * config.easing;

		let Some((px, py)) = repulsion(
			(self.x, self.y),
			pointer,
			config.interaction_radius,
			self.density,
			config.repulsion_scale,
		) else {
			return false;
		};

		self.x += px;
		self.y += py;

		self.angle += config.agitated_angle_step;
		self.x += self.angle.cos() * config.jitter;
		self.y += self.angle.sin() * config.jitter;
		true
	}
}

/// Number of particles for a canvas of the given size.
pub fn particle_count(width: f64, height: f64, area_per_particle: f64) -> usize {
	let area = width * height;
	if !(width > 0.0 && height > 0.0 && area_per_particle > 0.0) || !area.is_finite() {
		return 0;
	}
	(area / area_per_particle).floor() as usize
}

/// Drift target of particle `index` at `t` seconds.
pub fn drift_target(
	base_x: f64,
	base_y: f64,
	index: usize,
	t: f64,
	config: &FieldConfig,
) -> (f64, f64) {
	let phase = index as f64 * config.index_phase;
	let speed = config.drift_speed;
	(
		base_x + (t * speed + phase).cos() * config.drift_amplitude,
		base_y + (t * speed * config.drift_y_ratio + phase).sin() * config.drift_amplitude,
	)
}

/// Length of the push applied to a particle `distance` px from the pointer.
/// Linear falloff, zero at and beyond `radius`.
pub fn repulsion_magnitude(distance: f64, radius: f64, density: f64, scale: f64) -> f64 {
	if !(distance < radius) {
		return 0.0;
	}
	(radius - distance) / radius * density * scale
}

/// Displacement pushing a particle at `particle` away from `pointer`.
///
/// `None` when the particle is outside the interaction radius. A particle
/// sitting exactly on the pointer has no direction to flee in and gets a zero
/// vector, but still counts as in range.
pub fn repulsion(
	particle: (f64, f64),
	pointer: (f64, f64),
	radius: f64,
	density: f64,
	scale: f64,
) -> Option<(f64, f64)> {
	let (dx, dy) = (pointer.0 - particle.0, pointer.1 - particle.1);
	let distance = (dx * dx + dy * dy).sqrt();
	if !(distance < radius) {
		return None;
	}
	if distance == 0.0 {
		return Some((0.0, 0.0));
	}

	let magnitude = repulsion_magnitude(distance, radius, density, scale);
	Some((-dx / distance * magnitude, -dy / distance * magnitude))
}

/// Flat arena of particles sized to a canvas.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleSystem {
	/// Seed a fresh set of particles for a `width` x `height` canvas.
	pub fn new<R: Rng + ?Sized>(
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut R,
	) -> Self {
		let count = particle_count(width, height, config.area_per_particle);
		let particles = (0..count)
			.map(|_| Particle::random(rng, width, height))
			.collect();

		Self {
			particles,
			width,
			height,
		}
	}

	/// Build a system from an explicit particle list.
	pub fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}
