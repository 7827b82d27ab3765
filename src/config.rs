//! Page-level configuration.
//!
//! The page may embed overrides as JSON in
//! `<script id="effects-config" type="application/json">`. Every field is
//! optional; anything left out keeps its default.

use serde::Deserialize;

use crate::components::effects::{AmbientStyle, ConfettiStyle};
use crate::components::page::{
	CountdownConfig, EntranceConfig, GalleryConfig, HeartStyle, RevealConfig,
};

/// Id of the script element holding the JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "effects-config";

/// Everything tunable about the page effects.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
	pub ambient: AmbientStyle,
	pub confetti: ConfettiStyle,
	pub countdown: CountdownConfig,
	pub entrance: EntranceConfig,
	pub gallery: GalleryConfig,
	pub hearts: HeartStyle,
	pub reveal: RevealConfig,
	/// Quiet period before a burst of resize events is acted on.
	pub resize_debounce_ms: u32,
}

impl Default for EffectsConfig {
	fn default() -> Self {
		Self {
			ambient: AmbientStyle::default(),
			confetti: ConfettiStyle::default(),
			countdown: CountdownConfig::default(),
			entrance: EntranceConfig::default(),
			gallery: GalleryConfig::default(),
			hearts: HeartStyle::default(),
			reveal: RevealConfig::default(),
			resize_debounce_ms: 200,
		}
	}
}

impl EffectsConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::effects::theme::Span;

	#[test]
	fn empty_object_yields_defaults() {
		let cfg = EffectsConfig::from_json("{}").unwrap();
		assert_eq!(cfg.ambient.count, 60);
		assert_eq!(cfg.confetti.count, 120);
		assert_eq!(cfg.confetti.palette.len(), 5);
		assert_eq!(cfg.countdown.target, "2026-03-20T11:00:00-06:00");
		assert_eq!(cfg.entrance.delay_ms, 1800);
		assert_eq!(cfg.gallery.gap_px, 16.0);
		assert_eq!(cfg.hearts.count, 12);
		assert_eq!(cfg.reveal.threshold, 0.15);
		assert_eq!(cfg.reveal.root_margin, "0px 0px -50px 0px");
		assert_eq!(cfg.resize_debounce_ms, 200);
	}

	#[test]
	fn partial_override_keeps_other_fields() {
		let cfg = EffectsConfig::from_json(
			r#"{
				"ambient": { "count": 30, "size": { "min": 2.0, "max": 3.0 } },
				"confetti": { "trigger_section": "farewell" },
				"countdown": { "target": "2027-01-01T00:00:00Z" },
				"resize_debounce_ms": 100
			}"#,
		)
		.unwrap();
		assert_eq!(cfg.ambient.count, 30);
		assert_eq!(cfg.ambient.size, Span::new(2.0, 3.0));
		assert_eq!(cfg.ambient.speed_y, Span::new(-0.3, -0.05));
		assert_eq!(cfg.ambient.opacity_ceiling, 0.7);
		assert_eq!(cfg.confetti.trigger_section, "farewell");
		assert_eq!(cfg.confetti.trigger_fraction, 0.6);
		assert_eq!(cfg.countdown.target, "2027-01-01T00:00:00Z");
		assert_eq!(cfg.resize_debounce_ms, 100);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(EffectsConfig::from_json("{ ambient: }").is_err());
		assert!(EffectsConfig::from_json(r#"{ "ambient": { "count": -1 } }"#).is_err());
	}
}
