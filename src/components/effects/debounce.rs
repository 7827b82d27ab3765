//! Trailing-edge debounce for bursty window events.
//!
//! Each trigger hands out a ticket and schedules a timer. When a timer
//! fires it presents its ticket; only the newest ticket wins, so a burst of
//! triggers closer together than the delay runs the action once.

use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// Identifies one trigger within a debounce burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Ticket bookkeeping, independent of any timer source.
#[derive(Debug, Default)]
pub struct Debounce {
	issued: u64,
	fired: Option<u64>,
}

impl Debounce {
	/// Records a trigger. Any ticket issued earlier becomes stale.
	pub fn trigger(&mut self) -> Ticket {
		self.issued += 1;
		Ticket(self.issued)
	}

	/// Whether the timer holding `ticket` should run the action.
	pub fn fire(&mut self, ticket: Ticket) -> bool {
		if ticket.0 != self.issued || self.fired == Some(ticket.0) {
			return false;
		}
		self.fired = Some(ticket.0);
		true
	}
}

/// Runs `action` once each time `delay_ms` passes without another trigger.
#[derive(Clone)]
pub struct DebouncedAction {
	state: Rc<Cell<Debounce>>,
	delay_ms: i32,
	action: Rc<dyn Fn()>,
}

impl DebouncedAction {
	pub fn new(delay_ms: u32, action: impl Fn() + 'static) -> Self {
		Self {
			state: Rc::new(Cell::new(Debounce::default())),
			delay_ms: i32::try_from(delay_ms).unwrap_or(i32::MAX),
			action: Rc::new(action),
		}
	}

	pub fn trigger(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let ticket = self.update(|d| d.trigger());
		let this = self.clone();
		let timer = Closure::once_into_js(move || {
			if this.update(|d| d.fire(ticket)) {
				(this.action)();
			}
		});
		if let Err(e) = window
			.set_timeout_with_callback_and_timeout_and_arguments_0(timer.unchecked_ref(), self.delay_ms)
		{
			warn!("invite-fx: failed to schedule debounce timer: {:?}", e);
		}
	}

	fn update<T>(&self, f: impl FnOnce(&mut Debounce) -> T) -> T {
		let mut state = self.state.take();
		let out = f(&mut state);
		self.state.set(state);
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn burst_fires_exactly_once() {
		let mut debounce = Debounce::default();
		let tickets: Vec<_> = (0..5).map(|_| debounce.trigger()).collect();

		let fired = tickets.iter().filter(|&&t| debounce.fire(t)).count();
		assert_eq!(fired, 1);
		assert!(!debounce.fire(tickets[4]), "a ticket fires at most once");
	}

	#[test]
	fn only_the_newest_ticket_fires() {
		let mut debounce = Debounce::default();
		let first = debounce.trigger();
		let second = debounce.trigger();
		assert!(!debounce.fire(first));
		assert!(debounce.fire(second));
	}

	#[test]
	fn separate_bursts_fire_separately() {
		let mut debounce = Debounce::default();
		let a = debounce.trigger();
		assert!(debounce.fire(a));
		let b = debounce.trigger();
		assert!(debounce.fire(b));
	}
}
