//! Floating hearts in the finale section.
//!
//! Only the per-heart parameters are chosen here; the float animation itself
//! is a CSS keyframe on `.heart`.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::components::effects::theme::Span;

const CONTAINER_ID: &str = "finale-hearts";
const HEART_CLASS: &str = "heart";

/// Floating heart configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HeartStyle {
	pub count: usize,
	pub glyphs: Vec<String>,
	/// Percent of the container width
	pub left: Span,
	/// Pixels
	pub font_size: Span,
	/// Seconds
	pub delay: Span,
	/// Seconds
	pub duration: Span,
}

impl Default for HeartStyle {
	fn default() -> Self {
		Self {
			count: 12,
			glyphs: ["♥", "♡", "❤"].map(String::from).to_vec(),
			left: Span::new(5.0, 95.0),
			font_size: Span::new(10.0, 22.0),
			delay: Span::new(0.0, 6.0),
			duration: Span::new(4.0, 8.0),
		}
	}
}

/// Parameters of one heart element.
#[derive(Clone, Debug, PartialEq)]
pub struct Heart {
	pub glyph: String,
	pub left: f64,
	pub font_size: f64,
	pub delay: f64,
	pub duration: f64,
}

impl Heart {
	pub fn roll<R: Rng>(style: &HeartStyle, rng: &mut R) -> Self {
		Self {
			glyph: style.glyphs.choose(rng).cloned().unwrap_or_else(|| "♥".into()),
			left: style.left.sample(rng),
			font_size: style.font_size.sample(rng),
			delay: style.delay.sample(rng),
			duration: style.duration.sample(rng),
		}
	}

	/// CSS property/value pairs for the element's inline style.
	pub fn css(&self) -> [(&'static str, String); 4] {
		[
			("left", format!("{}%", self.left)),
			("font-size", format!("{}px", self.font_size)),
			("animation-delay", format!("{}s", self.delay)),
			("animation-duration", format!("{}s", self.duration)),
		]
	}
}

pub fn spawn<R: Rng>(document: &Document, style: &HeartStyle, rng: &mut R) {
	let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
		debug!("invite-fx: no hearts container");
		return;
	};

	for _ in 0..style.count {
		let heart = Heart::roll(style, rng);
		let Ok(el) = document.create_element("span") else {
			warn!("invite-fx: failed to create heart element");
			return;
		};
		let Ok(el) = el.dyn_into::<HtmlElement>() else {
			return;
		};
		let _ = el.class_list().add_1(HEART_CLASS);
		el.set_text_content(Some(&heart.glyph));
		let css = el.style();
		for (prop, value) in heart.css() {
			let _ = css.set_property(prop, &value);
		}
		if let Err(e) = container.append_child(&el) {
			warn!("invite-fx: failed to append heart: {:?}", e);
			return;
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	#[test]
	fn rolled_hearts_stay_in_range() {
		let style = HeartStyle::default();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..200 {
			let h = Heart::roll(&style, &mut rng);
			assert!(style.glyphs.contains(&h.glyph));
			assert!((5.0..95.0).contains(&h.left));
			assert!((10.0..22.0).contains(&h.font_size));
			assert!((0.0..6.0).contains(&h.delay));
			assert!((4.0..8.0).contains(&h.duration));
		}
	}

	#[test]
	fn inline_style_uses_css_units() {
		let h = Heart {
			glyph: "♡".into(),
			left: 42.5,
			font_size: 14.0,
			delay: 1.5,
			duration: 6.0,
		};
		let css = h.css();
		assert_eq!(css[0], ("left", "42.5%".to_string()));
		assert_eq!(css[1], ("font-size", "14px".to_string()));
		assert_eq!(css[2], ("animation-delay", "1.5s".to_string()));
		assert_eq!(css[3], ("animation-duration", "6s".to_string()));
	}

	#[test]
	fn empty_glyph_list_falls_back() {
		let style = HeartStyle {
			glyphs: Vec::new(),
			..HeartStyle::default()
		};
		let h = Heart::roll(&style, &mut StdRng::seed_from_u64(3));
		assert_eq!(h.glyph, "♥");
	}
}
