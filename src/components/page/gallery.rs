//! Position dots under the horizontally scrolling photo strip.

use log::debug;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::dom;

const TRACK_ID: &str = "gallery-track";
const ITEM_SELECTOR: &str = ".gallery-item";
const DOT_SELECTOR: &str = ".gallery-dot";
const ACTIVE_CLASS: &str = "active";

/// Gallery strip configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
	/// Horizontal gap between items, in CSS pixels.
	pub gap_px: f64,
}

impl Default for GalleryConfig {
	fn default() -> Self {
		Self { gap_px: 16.0 }
	}
}

/// Index of the item nearest the left edge of the strip.
///
/// Every item is assumed to be as wide as the first one.
pub fn active_index(scroll_left: f64, item_width: f64, gap: f64) -> usize {
	let stride = item_width + gap;
	if stride <= 0.0 || scroll_left <= 0.0 {
		return 0;
	}
	(scroll_left / stride).round() as usize
}

pub fn init(document: &Document, config: &GalleryConfig) {
	let Some(track) = dom::html_by_id(document, TRACK_ID) else {
		debug!("invite-fx: no gallery track, skipping dots");
		return;
	};
	let dots = dom::query_all(document, DOT_SELECTOR);
	if dots.is_empty() {
		debug!("invite-fx: no gallery dots, skipping");
		return;
	}

	let gap = config.gap_px;
	let target = track.clone();
	dom::listen_with_passive(&target, "scroll", true, move |_| {
		let item_width = track
			.query_selector(ITEM_SELECTOR)
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
			.map(|el| el.offset_width() as f64)
			.unwrap_or(0.0);
		let active = active_index(track.scroll_left() as f64, item_width, gap);
		for (i, dot) in dots.iter().enumerate() {
			dom::toggle_class(dot, ACTIVE_CLASS, i == active);
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rounds_to_the_nearest_item() {
		assert_eq!(active_index(0.0, 284.0, 16.0), 0);
		assert_eq!(active_index(149.0, 284.0, 16.0), 0);
		assert_eq!(active_index(150.0, 284.0, 16.0), 1);
		assert_eq!(active_index(600.0, 284.0, 16.0), 2);
		assert_eq!(active_index(1049.0, 284.0, 16.0), 3);
	}

	#[test]
	fn missing_item_width_still_uses_gap() {
		assert_eq!(active_index(40.0, 0.0, 16.0), 3);
		assert_eq!(active_index(40.0, 0.0, 0.0), 0);
	}

	#[test]
	fn negative_overscroll_is_first_item() {
		assert_eq!(active_index(-30.0, 284.0, 16.0), 0);
	}
}
