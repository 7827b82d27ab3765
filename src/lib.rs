//! invite-fx: animated effects for a static invitation page.
//!
//! This crate mounts into the page as a WASM app and provides the ambient
//! gold particle field, the scroll-triggered confetti burst, and the glue
//! around them: entrance overlay, countdown, gallery dots, floating hearts
//! and scroll reveals.

#[cfg(target_arch = "wasm32")]
use getrandom as _;
use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod config;

pub use components::effects::{AmbientStyle, ConfettiStyle, EffectsLayer};
pub use config::EffectsConfig;

use components::page::{countdown, dom, entrance, gallery, hearts, reveal};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("invite-fx: logging initialized");
}

/// Load overrides from a script element with id="effects-config".
fn load_config() -> Option<EffectsConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id(config::CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match EffectsConfig::from_json(&json_text) {
		Ok(cfg) => {
			info!("invite-fx: loaded page configuration");
			Some(cfg)
		}
		Err(e) => {
			warn!("invite-fx: failed to parse configuration, using defaults: {}", e);
			None
		}
	}
}

/// Starts the page features that wait for the entrance overlay.
fn open_page(cfg: &EffectsConfig) {
	let Some(document) = dom::document() else {
		return;
	};
	reveal::init(&document, &cfg.reveal);
	countdown::start(&document, &cfg.countdown);
	gallery::init(&document, &cfg.gallery);
	hearts::spawn(&document, &cfg.hearts, &mut rand::thread_rng());
	info!("invite-fx: page opened");
}

/// Main application component.
/// Starts the ambient field right away and everything else after the
/// entrance gesture.
#[component]
pub fn App() -> impl IntoView {
	let cfg = load_config().unwrap_or_default();
	let opened = RwSignal::new(false);

	let entrance_cfg = cfg.entrance.clone();
	Effect::new(move |_| {
		if let Some(document) = dom::document() {
			entrance::wire(&document, &entrance_cfg, move || opened.set(true));
		}
	});

	let page_cfg = cfg.clone();
	Effect::new(move |_| {
		if opened.get() {
			open_page(&page_cfg);
		}
	});

	view! {
		<EffectsLayer
			ambient=cfg.ambient
			confetti=cfg.confetti
			resize_debounce_ms=cfg.resize_debounce_ms
			armed=opened
		/>
	}
}
