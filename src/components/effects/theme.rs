//! Visual styling for the effect layers.
//!
//! Colors, sampling ranges and the per-layer style blocks. Every style block
//! deserializes from the page's JSON configuration with defaults for any
//! missing field.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse `#rgb` or `#rrggbb`.
	pub fn from_hex(hex: &str) -> Option<Self> {
		let digits = hex.strip_prefix('#')?;
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match digits.len() {
			3 => {
				let mut it = digits.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
				Some(Self::rgb(it.next()??, it.next()??, it.next()??))
			}
			6 if digits.is_ascii() => Some(Self::rgb(
				channel(&digits[0..2])?,
				channel(&digits[2..4])?,
				channel(&digits[4..6])?,
			)),
			_ => None,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

impl TryFrom<String> for Color {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_hex(&value).ok_or_else(|| format!("invalid hex color `{value}`"))
	}
}

/// Hue/saturation/lightness triple. Alpha is supplied at draw time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
	/// Degrees.
	pub h: f64,
	/// Percent.
	pub s: f64,
	/// Percent.
	pub l: f64,
}

impl Hsl {
	pub fn to_css_with_alpha(self, alpha: f64) -> String {
		format!("hsla({}, {}%, {}%, {})", self.h, self.s, self.l, alpha)
	}
}

/// Half-open sampling range `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span {
	pub min: f64,
	pub max: f64,
}

impl Span {
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Uniform sample. A degenerate, inverted or unbounded span yields `min`.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
		if self.max > self.min && (self.max - self.min).is_finite() {
			rng.gen_range(self.min..self.max)
		} else {
			self.min
		}
	}

	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}
}

/// Gold tones for the ambient field.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HslRange {
	pub hue: Span,
	pub saturation: Span,
	pub lightness: Span,
}

impl HslRange {
	pub fn sample<R: Rng>(&self, rng: &mut R) -> Hsl {
		Hsl {
			h: self.hue.sample(rng),
			s: self.saturation.sample(rng),
			l: self.lightness.sample(rng),
		}
	}
}

impl Default for HslRange {
	fn default() -> Self {
		Self {
			hue: Span::new(38.0, 48.0),
			saturation: Span::new(55.0, 75.0),
			lightness: Span::new(45.0, 65.0),
		}
	}
}

/// Ambient particle field configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AmbientStyle {
	/// Number of particles in the pool
	pub count: usize,
	pub size: Span,
	pub speed_x: Span,
	/// Negative values drift upward.
	pub speed_y: Span,
	/// Opacity assigned on reset
	pub opacity: Span,
	pub fade_speed: Span,
	/// Growing particles stop brightening here.
	pub opacity_ceiling: f64,
	/// Shrinking particles reset at or below this.
	pub opacity_floor: f64,
	/// How far past the left, right or top edge a particle may drift.
	pub edge_margin: f64,
	pub color: HslRange,
}

impl Default for AmbientStyle {
	fn default() -> Self {
		Self {
			count: 60,
			size: Span::new(1.0, 2.5),
			speed_x: Span::new(-0.15, 0.15),
			speed_y: Span::new(-0.3, -0.05),
			opacity: Span::new(0.15, 0.6),
			fade_speed: Span::new(0.002, 0.008),
			opacity_ceiling: 0.7,
			opacity_floor: 0.05,
			edge_margin: 10.0,
			color: HslRange::default(),
		}
	}
}

/// Muted gold, champagne, bronze, rose and ivory.
pub fn default_confetti_palette() -> Vec<Color> {
	vec![
		Color::rgb(0xc9, 0xa8, 0x4c),
		Color::rgb(0xe8, 0xd5, 0xa3),
		Color::rgb(0xa0, 0x87, 0x35),
		Color::rgb(0xc4, 0x91, 0x8f),
		Color::rgb(0xf5, 0xf0, 0xe8),
	]
}

/// Confetti burst configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ConfettiStyle {
	pub count: usize,
	pub width: Span,
	pub height: Span,
	pub speed_y: Span,
	pub speed_x: Span,
	/// Degrees
	pub rotation: Span,
	/// Degrees per frame
	pub rotation_speed: Span,
	pub opacity: Span,
	/// Vertical band pieces are recycled into once they fall off screen.
	pub respawn_y: Span,
	/// Distance below the bottom edge before a piece recycles.
	pub bottom_margin: f64,
	pub wobble_frequency: f64,
	pub wobble_amplitude: f64,
	pub palette: Vec<Color>,
	/// Id of the section whose arrival starts the burst.
	pub trigger_section: String,
	/// Fraction of the viewport height the section top must pass.
	pub trigger_fraction: f64,
}

impl ConfettiStyle {
	pub fn pick_color<R: Rng>(&self, rng: &mut R) -> Color {
		self.palette
			.choose(rng)
			.copied()
			.unwrap_or(Color::rgb(0xc9, 0xa8, 0x4c))
	}
}

impl Default for ConfettiStyle {
	fn default() -> Self {
		Self {
			count: 120,
			width: Span::new(4.0, 10.0),
			height: Span::new(6.0, 14.0),
			speed_y: Span::new(1.0, 3.0),
			speed_x: Span::new(-0.8, 0.8),
			rotation: Span::new(0.0, 360.0),
			rotation_speed: Span::new(-5.0, 5.0),
			opacity: Span::new(0.5, 1.0),
			respawn_y: Span::new(-50.0, -20.0),
			bottom_margin: 20.0,
			wobble_frequency: 0.01,
			wobble_amplitude: 0.5,
			palette: default_confetti_palette(),
			trigger_section: "finale".to_string(),
			trigger_fraction: 0.6,
		}
	}
}
