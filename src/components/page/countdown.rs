//! Days/hours/minutes/seconds countdown to the ceremony.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::{debug, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element};

/// 2026-03-20T11:00:00-06:00 as Unix milliseconds.
pub const DEFAULT_TARGET_MS: f64 = 1_774_026_000_000.0;

const DEFAULT_TARGET: &str = "2026-03-20T11:00:00-06:00";
const FIELD_IDS: [&str; 4] = ["cd-days", "cd-hours", "cd-mins", "cd-secs"];
const TICK_MS: i32 = 1000;

/// Countdown configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
	/// RFC 3339 instant to count down to.
	pub target: String,
}

impl Default for CountdownConfig {
	fn default() -> Self {
		Self {
			target: DEFAULT_TARGET.to_string(),
		}
	}
}

impl CountdownConfig {
	/// Target as Unix milliseconds. Unparsable input falls back to the default.
	pub fn target_ms(&self) -> f64 {
		let parsed = js_sys::Date::parse(&self.target);
		if parsed.is_nan() {
			warn!(
				"invite-fx: countdown target {:?} is not a valid date, using default",
				self.target
			);
			DEFAULT_TARGET_MS
		} else {
			parsed
		}
	}
}

/// Time left, broken into display fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64,
}

impl Remaining {
	/// `None` once `now_ms` has reached the target.
	pub fn until(now_ms: f64, target_ms: f64) -> Option<Self> {
		let diff = target_ms - now_ms;
		if diff.is_nan() || diff <= 0.0 {
			return None;
		}
		let total = (diff / 1000.0).floor() as u64;
		Some(Self {
			days: total / 86_400,
			hours: total / 3_600 % 24,
			minutes: total / 60 % 60,
			seconds: total % 60,
		})
	}

	/// Zero-padded `[days, hours, minutes, seconds]`.
	pub fn fields(&self) -> [String; 4] {
		[self.days, self.hours, self.minutes, self.seconds].map(|n| format!("{n:02}"))
	}
}

impl fmt::Display for Remaining {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let [d, h, m, s] = self.fields();
		write!(f, "{d}:{h}:{m}:{s}")
	}
}

/// Display text at `now_ms`; all zeros once the target has passed.
pub fn countdown_text(now_ms: f64, target_ms: f64) -> String {
	Remaining::until(now_ms, target_ms)
		.unwrap_or_default()
		.to_string()
}

/// Writes the countdown into the page once a second until the target passes.
pub fn start(document: &Document, config: &CountdownConfig) {
	let fields: Vec<Option<Element>> = FIELD_IDS
		.iter()
		.map(|id| document.get_element_by_id(id))
		.collect();
	if fields.iter().all(Option::is_none) {
		debug!("invite-fx: no countdown fields on page");
		return;
	}
	let target_ms = config.target_ms();

	let render = move || -> bool {
		let remaining = Remaining::until(js_sys::Date::now(), target_ms);
		let text = remaining.unwrap_or_default().fields();
		for (el, value) in fields.iter().zip(text.iter()) {
			if let Some(el) = el {
				el.set_text_content(Some(value));
			}
		}
		remaining.is_some()
	};

	if !render() {
		info!("invite-fx: countdown target already reached");
		return;
	}

	let Some(window) = web_sys::window() else {
		return;
	};
	let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let handle_cb = handle.clone();
	let tick = Closure::<dyn FnMut()>::new(move || {
		if !render() {
			if let (Some(id), Some(w)) = (handle_cb.take(), web_sys::window()) {
				w.clear_interval_with_handle(id);
			}
			info!("invite-fx: countdown finished");
		}
	});
	match window.set_interval_with_callback_and_timeout_and_arguments_0(
		tick.as_ref().unchecked_ref(),
		TICK_MS,
	) {
		Ok(id) => handle.set(Some(id)),
		Err(e) => warn!("invite-fx: failed to start countdown: {:?}", e),
	}
	tick.forget();
}
