//! Self-rescheduling `requestAnimationFrame` loop with a cooperative stop flag.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;

/// Active/scheduled flags of a frame loop.
///
/// `active` says whether the loop should keep going; `scheduled` says whether
/// a frame request is outstanding. Keeping them apart lets a stop followed by
/// a quick start reuse the pending frame instead of spawning a second loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoopState {
	active: bool,
	scheduled: bool,
}

impl LoopState {
	/// Marks the loop active. Returns whether a new frame must be requested.
	pub fn start(&mut self) -> bool {
		self.active = true;
		!self.scheduled
	}

	pub fn stop(&mut self) {
		self.active = false;
	}

	/// Consumes the pending frame. Returns whether the tick should run.
	pub fn on_frame(&mut self) -> bool {
		self.scheduled = false;
		self.active
	}

	pub fn mark_scheduled(&mut self) {
		self.scheduled = true;
	}

	pub fn is_active(&self) -> bool {
		self.active
	}
}

/// Drives `tick` once per display refresh while active.
pub struct FrameLoop {
	state: Rc<Cell<LoopState>>,
	callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
	pub fn new(mut tick: impl FnMut() + 'static) -> Self {
		let state: Rc<Cell<LoopState>> = Rc::new(Cell::new(LoopState::default()));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let (state_cb, callback_cb) = (state.clone(), callback.clone());

		*callback.borrow_mut() = Some(Closure::new(move || {
			let mut s = state_cb.get();
			let run = s.on_frame();
			state_cb.set(s);
			if !run {
				return;
			}
			tick();
			if let Some(ref cb) = *callback_cb.borrow() {
				request_frame(&state_cb, cb);
			}
		}));

		Self { state, callback }
	}

	pub fn start(&self) {
		let mut s = self.state.get();
		let needs_frame = s.start();
		self.state.set(s);
		if needs_frame {
			if let Some(ref cb) = *self.callback.borrow() {
				request_frame(&self.state, cb);
			}
		}
	}

	/// The loop ends at its next frame.
	pub fn stop(&self) {
		let mut s = self.state.get();
		s.stop();
		self.state.set(s);
	}

	pub fn is_active(&self) -> bool {
		self.state.get().is_active()
	}
}

fn request_frame(state: &Cell<LoopState>, cb: &Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		warn!("invite-fx: no window, frame loop not scheduled");
		return;
	};
	match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		Ok(_) => {
			let mut s = state.get();
			s.mark_scheduled();
			state.set(s);
		}
		Err(e) => warn!("invite-fx: requestAnimationFrame failed: {:?}", e),
	}
}
