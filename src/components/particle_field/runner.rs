//! Frame loop driver.
//!
//! [`FieldRunner`] owns the simulation for one mounted component. The host
//! calls [`FieldRunner::frame`] once per display refresh and keeps scheduling
//! frames for as long as it answers `Continue`. After [`FieldRunner::stop`]
//! every entry point becomes a no-op, so a callback that was already queued
//! when the component unmounted cannot touch the canvas.

use std::ops::ControlFlow;

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::render::{self, Surface};
use super::state::FieldState;
use super::theme::Theme;
use super::types::FieldConfig;

/// Simulation plus the bookkeeping needed to drive it frame by frame.
pub struct FieldRunner {
	state: FieldState,
	theme: Theme,
	rng: SmallRng,
	/// Timestamp (ms) of the first frame; `t` is measured from here.
	started_at: Option<f64>,
	running: bool,
}

impl FieldRunner {
	/// Seed a field for a `width` x `height` canvas.
	pub fn new(config: FieldConfig, theme: Theme, width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		Self {
			state: FieldState::new(config, width, height, &mut rng),
			theme,
			rng,
			started_at: None,
			running: true,
		}
	}

	pub fn state(&self) -> &FieldState {
		&self.state
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Seconds since the first frame, given the current frame timestamp in ms.
	fn elapsed(&mut self, now_ms: f64) -> f64 {
		let start = *self.started_at.get_or_insert(now_ms);
		(now_ms - start).max(0.0) / 1000.0
	}

	/// Advance and draw one frame.
	///
	/// Returns `Break` once the runner has been stopped, in which case nothing
	/// is drawn and the caller must not schedule another frame.
	pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> ControlFlow<()> {
		if !self.running {
			return ControlFlow::Break(());
		}

		let t = self.elapsed(now_ms);
		self.state.step(t);
		render::render(&self.state, surface, &self.theme);
		ControlFlow::Continue(())
	}

	/// Regenerate the field for a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		if !self.running {
			return;
		}
		self.state.resize(width, height, &mut self.rng);
		debug!(
			"particle-field: resized to {}x{}, {} particles",
			width,
			height,
			self.state.system.len()
		);
	}

	/// Record a new pointer position in canvas coordinates.
	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		if self.running {
			self.state.set_pointer(x, y);
		}
	}

	/// Stop the loop for good. Drops the particles since nothing will draw them again.
	pub fn stop(&mut self) {
		self.running = false;
		self.state.system.particles.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::super::theme::{Color, LinkStyle};
	use super::*;

	#[derive(Default)]
	struct Counter {
		calls: usize,
	}

	impl Surface for Counter {
		fn clear(&mut self, _: f64, _: f64) {
			self.calls += 1;
		}
		fn glow(&mut self, _: f64, _: f64, _: f64, _: Color) {
			self.calls += 1;
		}
		fn disc(&mut self, _: f64, _: f64, _: f64, _: Color) {
			self.calls += 1;
		}
		fn link(&mut self, _: (f64, f64), _: (f64, f64), _: &LinkStyle, _: f64) {
			self.calls += 1;
		}
	}

	fn runner() -> FieldRunner {
		FieldRunner::new(FieldConfig::default(), Theme::default(), 800.0, 600.0, 42)
	}

	#[test]
	fn elapsed_time_starts_at_first_frame() {
		let mut r = runner();
		assert_eq!(r.elapsed(5_000.0), 0.0);
		assert_eq!(r.elapsed(6_500.0), 1.5);
	}

	#[test]
	fn running_frames_draw_and_continue() {
		let mut r = runner();
		let mut surface = Counter::default();
		assert_eq!(r.frame(16.0, &mut surface), ControlFlow::Continue(()));
		// clear + glow/disc for each of the 32 particles, plus any links
		assert!(surface.calls >= 1 + 2 * 32);
	}

	#[test]
	fn stopped_runner_ignores_everything() {
		let mut r = runner();
		r.pointer_moved(12.0, 34.0);
		r.stop();

		r.resize(1600.0, 1200.0);
		r.pointer_moved(99.0, 99.0);
		let mut surface = Counter::default();
		assert_eq!(r.frame(16.0, &mut surface), ControlFlow::Break(()));

		assert_eq!(surface.calls, 0);
		assert!(!r.is_running());
		assert!(r.state().system.is_empty());
		assert_eq!(r.state().pointer.position(), (12.0, 34.0));
	}
}
