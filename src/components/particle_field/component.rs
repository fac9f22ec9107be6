//! Leptos component wrapping the particle field canvas.
//!
//! The component renders a fixed, full-viewport canvas that ignores pointer
//! events. Once the canvas is in the DOM it acquires a 2D context, seeds a
//! [`FieldRunner`], listens for window resize and pointer movement, and starts
//! a `requestAnimationFrame` loop. Unmounting stops the runner, cancels the
//! queued frame and removes every listener.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use super::runner::FieldRunner;
use super::theme::Theme;
use super::types::FieldConfig;

/// Acquire the canvas' 2D context, if the environment provides one.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Everything that has to be undone when the component goes away.
struct FieldMount {
	window: Window,
	runner: Rc<RefCell<FieldRunner>>,
	frame_id: Rc<Cell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
	on_resize: Closure<dyn FnMut()>,
	on_mousemove: Closure<dyn FnMut(MouseEvent)>,
	on_touchmove: Closure<dyn FnMut(TouchEvent)>,
}

impl FieldMount {
	/// Size the canvas to the viewport, wire up listeners and queue the first frame.
	///
	/// Returns `None` without side effects on the page when no window or 2D
	/// context is available.
	fn attach(canvas: HtmlCanvasElement, config: FieldConfig) -> Option<Self> {
		let window = web_sys::window()?;
		let mut ctx = context_2d(&canvas)?;
		let (w, h) = viewport_size(&window)?;
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let theme = Theme::by_name(&config.theme).unwrap_or_else(|| {
			warn!("particle-field: unknown theme {:?}, using default", config.theme);
			Theme::default()
		});
		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let runner = Rc::new(RefCell::new(FieldRunner::new(config, theme, w, h, seed)));
		info!(
			"particle-field: mounted {}x{} canvas with {} particles",
			w,
			h,
			runner.borrow().state().system.len()
		);

		let (runner_resize, canvas_resize) = (runner.clone(), canvas.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			if !runner_resize.borrow().is_running() {
				return;
			}
			let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			runner_resize.borrow_mut().resize(nw, nh);
		});

		let (runner_mm, canvas_mm) = (runner.clone(), canvas.clone());
		let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let rect = canvas_mm.get_bounding_client_rect();
			runner_mm.borrow_mut().pointer_moved(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
		});

		let (runner_tm, canvas_tm) = (runner.clone(), canvas);
		let on_touchmove = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
			let Some(touch) = ev.touches().get(0) else {
				return;
			};
			let rect = canvas_tm.get_bounding_client_rect();
			runner_tm.borrow_mut().pointer_moved(
				touch.client_x() as f64 - rect.left(),
				touch.client_y() as f64 - rect.top(),
			);
		});

		for (event, cb) in [
			("resize", on_resize.as_ref()),
			("mousemove", on_mousemove.as_ref()),
			("touchmove", on_touchmove.as_ref()),
		] {
			let _ = window.add_event_listener_with_callback(event, cb.unchecked_ref());
		}

		let frame_id = Rc::new(Cell::new(None));
		let animate: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
		let (runner_anim, animate_inner, frame_id_anim) =
			(runner.clone(), animate.clone(), frame_id.clone());
		*animate.borrow_mut() = Some(Closure::new(move |now: f64| {
			frame_id_anim.set(None);
			if runner_anim.borrow_mut().frame(now, &mut ctx).is_break() {
				return;
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				frame_id_anim.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		Some(Self {
			window,
			runner,
			frame_id,
			animate,
			on_resize,
			on_mousemove,
			on_touchmove,
		})
	}

	fn detach(self) {
		self.runner.borrow_mut().stop();
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}

		for (event, cb) in [
			("resize", self.on_resize.as_ref()),
			("mousemove", self.on_mousemove.as_ref()),
			("touchmove", self.on_touchmove.as_ref()),
		] {
			let _ = self
				.window
				.remove_event_listener_with_callback(event, cb.unchecked_ref());
		}

		// Breaks the closure's reference to itself.
		self.animate.borrow_mut().take();
		info!("particle-field: torn down");
	}
}

/// Renders the animated particle background.
///
/// The canvas is fixed to the viewport, sits at `z-index: 0` and does not
/// receive pointer events, so page content layered above stays interactive.
/// Pointer tracking listens on the window instead.
#[component]
pub fn ParticleField(
	/// Simulation constants and theme name. Defaults apply when omitted.
	#[prop(optional)]
	config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let mount: Rc<RefCell<Option<FieldMount>>> = Rc::new(RefCell::new(None));
	let mount_init = mount.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if mount_init.borrow().is_some() {
			return;
		}
		match FieldMount::attach(canvas.into(), config.clone()) {
			Some(m) => *mount_init.borrow_mut() = Some(m),
			None => debug!("particle-field: no 2d canvas context, background disabled"),
		}
	});

	let mount_cleanup = SendWrapper::new(mount);
	on_cleanup(move || {
		if let Some(m) = mount_cleanup.borrow_mut().take() {
			m.detach();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; width: 100%; height: 100%; z-index: 0; pointer-events: none; background: transparent;"
		/>
	}
}
