//! Visibility-triggered reveal of `.reveal` elements.

use log::{debug, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;

/// Reveal observer configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub selector: String,
	pub visible_class: String,
	/// Fraction of the element that must be inside the viewport.
	pub threshold: f64,
	pub root_margin: String,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".reveal".to_string(),
			visible_class: "visible".to_string(),
			threshold: 0.15,
			root_margin: "0px 0px -50px 0px".to_string(),
		}
	}
}

pub fn init(document: &Document, config: &RevealConfig) {
	let targets = dom::query_all(document, &config.selector);
	if targets.is_empty() {
		debug!("invite-fx: nothing to reveal");
		return;
	}

	let class = config.visible_class.clone();
	let on_change = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
		for entry in entries.iter() {
			let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
				continue;
			};
			if entry.is_intersecting() {
				dom::add_class(&entry.target(), &class);
			}
		}
	});

	let options = IntersectionObserverInit::new();
	options.set_threshold(&wasm_bindgen::JsValue::from_f64(config.threshold));
	options.set_root_margin(&config.root_margin);

	let observer =
		match IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &options) {
			Ok(observer) => observer,
			Err(e) => {
				// Without an observer, show everything rather than leave it hidden.
				warn!("invite-fx: IntersectionObserver unavailable: {:?}", e);
				for el in &targets {
					dom::add_class(el, &config.visible_class);
				}
				return;
			}
		};
	for el in &targets {
		observer.observe(el);
	}
	on_change.forget();
	debug!("invite-fx: observing {} reveal targets", targets.len());
}
