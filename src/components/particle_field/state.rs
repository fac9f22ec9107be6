//! Field simulation state: the particle arena, the tracked pointer and config.
//!
//! Created once when the component mounts and mutated by the resize and
//! pointer listeners between frames. `step` advances every particle by one
//! frame in index order.

use rand::Rng;

use super::particles::ParticleSystem;
use super::types::FieldConfig;

/// Pointer position in canvas-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	pub x: f64,
	pub y: f64,
	/// Interaction radius, fixed for the lifetime of the field.
	pub radius: f64,
}

impl Pointer {
	/// Pointer parked at the center of a `width` x `height` canvas.
	pub fn centered(width: f64, height: f64, radius: f64) -> Self {
		Self {
			x: width / 2.0,
			y: height / 2.0,
			radius,
		}
	}

	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}
}

/// Everything the per-frame update reads and writes.
pub struct FieldState {
	pub system: ParticleSystem,
	pub pointer: Pointer,
	pub config: FieldConfig,
	/// Particles pushed by the pointer during the last `step`.
	pub agitated: usize,
}

impl FieldState {
	pub fn new<R: Rng + ?Sized>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> Self {
		Self {
			system: ParticleSystem::new(&config, width, height, rng),
			pointer: Pointer::centered(width, height, config.interaction_radius),
			config,
			agitated: 0,
		}
	}

	/// Assemble a state from explicit parts.
	pub fn with_system(system: ParticleSystem, config: FieldConfig) -> Self {
		Self {
			pointer: Pointer::centered(system.width(), system.height(), config.interaction_radius),
			system,
			config,
			agitated: 0,
		}
	}

	pub fn width(&self) -> f64 {
		self.system.width()
	}

	pub fn height(&self) -> f64 {
		self.system.height()
	}

	/// Throw away every particle and seed a new set for the new canvas size.
	/// The pointer keeps its last position.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.system = ParticleSystem::new(&self.config, width, height, rng);
		self.agitated = 0;
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer.x = x;
		self.pointer.y = y;
	}

	/// Advance every particle by one frame, `t` seconds into the animation.
	pub fn step(&mut self, t: f64) {
		let pointer = self.pointer.position();
		let mut agitated = 0;
		for (i, p) in self.system.particles.iter_mut().enumerate() {
			if p.advance(i, t, pointer, &self.config) {
				agitated += 1;
			}
		}
		self.agitated = agitated;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::super::particles::{Particle, drift_target};
	use super::*;

	#[test]
	fn pointer_starts_at_canvas_center() {
		let mut rng = SmallRng::seed_from_u64(1);
		let state = FieldState::new(FieldConfig::default(), 800.0, 600.0, &mut rng);
		assert_eq!(state.pointer, Pointer { x: 400.0, y: 300.0, radius: 150.0 });
		assert_eq!(state.system.len(), 32);
	}

	#[test]
	fn resize_rebuilds_particles_and_keeps_pointer() {
		let mut rng = SmallRng::seed_from_u64(2);
		let mut state = FieldState::new(FieldConfig::default(), 800.0, 600.0, &mut rng);
		state.set_pointer(10.0, 20.0);
		let before = state.system.particles.clone();

		state.resize(1200.0, 900.0, &mut rng);

		assert_eq!(state.system.len(), 72);
		assert_eq!((state.width(), state.height()), (1200.0, 900.0));
		assert_eq!(state.pointer.position(), (10.0, 20.0));
		assert_ne!(state.system.particles[..32], before[..]);
	}

	#[test]
	fn step_updates_in_index_order_with_index_phase() {
		let config = FieldConfig::default();
		let particles = vec![
			Particle::at_rest(100.0, 100.0, 2.0, 10.0),
			Particle::at_rest(100.0, 100.0, 2.0, 10.0),
		];
		let mut state =
			FieldState::with_system(ParticleSystem::from_particles(particles, 800.0, 600.0), config);
		state.set_pointer(-500.0, -500.0);
		state.step(0.75);

		for (i, p) in state.system.particles.iter().enumerate() {
			let (tx, ty) = drift_target(100.0, 100.0, i, 0.75, &state.config);
			assert_eq!((p.target_x, p.target_y), (tx, ty));
		}
		assert_ne!(state.system.particles[0].x, state.system.particles[1].x);
		assert_eq!(state.agitated, 0);
	}

	#[test]
	fn step_counts_agitated_particles() {
		let particles = vec![
			Particle::at_rest(410.0, 300.0, 2.0, 10.0),
			Particle::at_rest(50.0, 50.0, 2.0, 10.0),
		];
		let mut state = FieldState::with_system(
			ParticleSystem::from_particles(particles, 800.0, 600.0),
			FieldConfig::default(),
		);
		state.step(0.0);
		assert_eq!(state.agitated, 1);
	}
}
