//! The "open the invitation" overlay.
//!
//! The first click or tap fades the overlay, starts the background music and,
//! once the exit transition has played, unlocks scrolling and hands control
//! to the rest of the page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, HtmlMediaElement};

use super::dom;

const ENTRANCE_ID: &str = "entrance";
const MUSIC_ID: &str = "bg-music";
const EXIT_CLASS: &str = "exit";
const LOCKED_CLASS: &str = "locked";

/// Entrance overlay configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
	/// Length of the overlay's exit transition.
	pub delay_ms: u32,
}

impl Default for EntranceConfig {
	fn default() -> Self {
		Self { delay_ms: 1800 }
	}
}

/// Arms the overlay. `on_open` runs once, after the exit transition.
pub fn wire(document: &Document, config: &EntranceConfig, on_open: impl FnOnce() + 'static) {
	let Some(entrance) = document.get_element_by_id(ENTRANCE_ID) else {
		debug!("invite-fx: no entrance overlay, opening immediately");
		unlock_scroll(document);
		on_open();
		return;
	};

	let delay_ms = config.delay_ms;
	let opened = Rc::new(Cell::new(false));
	let on_open: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
		Rc::new(RefCell::new(Some(Box::new(on_open))));

	let open = {
		let entrance = entrance.clone();
		Rc::new(move || {
			if opened.replace(true) {
				return;
			}
			info!("invite-fx: entrance opened");
			dom::add_class(&entrance, EXIT_CLASS);
			if let Some(document) = dom::document() {
				play_music(&document);
			}

			let (entrance, on_open) = (entrance.clone(), on_open.clone());
			dom::after(delay_ms, move || {
				entrance.remove();
				if let Some(document) = dom::document() {
					unlock_scroll(&document);
				}
				if let Some(f) = on_open.borrow_mut().take() {
					f();
				}
			});
		})
	};

	let on_click = open.clone();
	dom::listen(&entrance, "click", move |_| on_click());
	dom::listen_with_passive(&entrance, "touchend", false, move |ev: Event| {
		ev.prevent_default();
		open();
	});
}

fn unlock_scroll(document: &Document) {
	if let Some(body) = document.body() {
		dom::remove_class(&body, LOCKED_CLASS);
	}
}

/// Best effort: browsers may refuse autoplay.
fn play_music(document: &Document) {
	let Some(audio) = document
		.get_element_by_id(MUSIC_ID)
		.and_then(|el| el.dyn_into::<HtmlMediaElement>().ok())
	else {
		return;
	};
	match audio.play() {
		Ok(promise) => {
			let on_reject = Closure::<dyn FnMut(JsValue)>::new(|e: JsValue| {
				info!("invite-fx: audio autoplay prevented: {:?}", e);
			});
			let _ = promise.catch(&on_reject);
			on_reject.forget();
		}
		Err(e) => info!("invite-fx: audio autoplay prevented: {:?}", e),
	}
}
