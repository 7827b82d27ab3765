//! Falling, tumbling confetti.
//!
//! Every start rolls a fresh pool above the top edge. Stopping only halts
//! the loop; the pieces keep their state until the next start replaces them.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::surface::Viewport;
use super::theme::{Color, ConfettiStyle};

/// A single rectangle of confetti.
#[derive(Clone, Debug)]
pub struct ConfettiPiece {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
	pub speed_y: f64,
	pub speed_x: f64,
	/// Degrees
	pub rotation: f64,
	pub rotation_speed: f64,
	pub opacity: f64,
	pub color: Color,
}

impl ConfettiPiece {
	/// Fresh pieces are spread over one screen height above the top edge so
	/// the burst arrives as a shower rather than a single line.
	fn spawn<R: Rng>(style: &ConfettiStyle, viewport: Viewport, rng: &mut R) -> Self {
		let above = -viewport.height.max(0.0);
		let y = if above < 0.0 { rng.gen_range(above..0.0) } else { 0.0 };
		Self::roll(style, viewport, y, rng)
	}

	fn recycle<R: Rng>(&mut self, style: &ConfettiStyle, viewport: Viewport, rng: &mut R) {
		let y = style.respawn_y.sample(rng);
		*self = Self::roll(style, viewport, y, rng);
	}

	fn roll<R: Rng>(style: &ConfettiStyle, viewport: Viewport, y: f64, rng: &mut R) -> Self {
		Self {
			x: rng.gen_range(0.0..=viewport.width.max(0.0)),
			y,
			w: style.width.sample(rng),
			h: style.height.sample(rng),
			speed_y: style.speed_y.sample(rng),
			speed_x: style.speed_x.sample(rng),
			rotation: style.rotation.sample(rng),
			rotation_speed: style.rotation_speed.sample(rng),
			opacity: style.opacity.sample(rng),
			color: style.pick_color(rng),
		}
	}
}

/// Confetti pool plus its running flag.
pub struct ConfettiBurst<R = StdRng> {
	pub pieces: Vec<ConfettiPiece>,
	style: ConfettiStyle,
	active: bool,
	rng: R,
}

impl ConfettiBurst {
	pub fn new(style: ConfettiStyle) -> Self {
		Self::with_rng(style, StdRng::from_entropy())
	}
}

impl<R: Rng> ConfettiBurst<R> {
	pub fn with_rng(style: ConfettiStyle, rng: R) -> Self {
		Self {
			pieces: Vec::new(),
			style,
			active: false,
			rng,
		}
	}

	/// Returns `false` if the burst was already running.
	pub fn start(&mut self, viewport: Viewport) -> bool {
		if self.active {
			return false;
		}
		self.active = true;
		let (style, rng) = (&self.style, &mut self.rng);
		self.pieces.clear();
		self.pieces
			.extend((0..style.count).map(|_| ConfettiPiece::spawn(style, viewport, rng)));
		true
	}

	pub fn stop(&mut self) {
		self.active = false;
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Advance every piece by one frame.
	pub fn update(&mut self, viewport: Viewport) {
		let style = &self.style;
		let floor = viewport.height + style.bottom_margin;
		for p in &mut self.pieces {
			p.y += p.speed_y;
			p.x += p.speed_x + (p.y * style.wobble_frequency).sin() * style.wobble_amplitude;
			p.rotation = (p.rotation + p.rotation_speed).rem_euclid(360.0);

			if p.y > floor {
				p.recycle(style, viewport, &mut self.rng);
			}
		}
	}

	pub fn len(&self) -> usize {
		self.pieces.len()
	}

	pub fn is_empty(&self) -> bool {
		self.pieces.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

	fn burst(seed: u64) -> ConfettiBurst<StdRng> {
		ConfettiBurst::with_rng(ConfettiStyle::default(), StdRng::seed_from_u64(seed))
	}

	#[test]
	fn pool_is_allocated_lazily() {
		let mut b = burst(1);
		assert!(b.is_empty());
		assert!(b.start(VIEWPORT));
		assert_eq!(b.len(), 120);
	}

	#[test]
	fn start_is_idempotent() {
		let mut b = burst(2);
		assert!(b.start(VIEWPORT));
		let before: Vec<f64> = b.pieces.iter().map(|p| p.y).collect();
		assert!(!b.start(VIEWPORT));
		assert_eq!(b.len(), 120);
		let after: Vec<f64> = b.pieces.iter().map(|p| p.y).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn stop_keeps_piece_state() {
		let mut b = burst(3);
		b.start(VIEWPORT);
		for _ in 0..10 {
			b.update(VIEWPORT);
		}
		let ys: Vec<f64> = b.pieces.iter().map(|p| p.y).collect();
		b.stop();
		assert!(!b.is_active());
		assert_eq!(ys, b.pieces.iter().map(|p| p.y).collect::<Vec<_>>());
	}

	#[test]
	fn restart_rolls_a_fresh_shower_above_the_viewport() {
		let mut b = burst(3);
		b.start(VIEWPORT);
		for _ in 0..200 {
			b.update(VIEWPORT);
		}
		b.stop();

		assert!(b.start(VIEWPORT));
		assert_eq!(b.len(), 120);
		let on_screen = b.pieces.iter().filter(|p| p.y >= 0.0).count();
		assert_eq!(on_screen, 0);
		assert!(b.pieces.iter().all(|p| (-600.0..0.0).contains(&p.y)));
	}

	#[test]
	fn tick_applies_fall_wobble_and_spin() {
		let mut b = burst(8);
		b.start(VIEWPORT);
		b.pieces.truncate(1);
		let p = &mut b.pieces[0];
		p.x = 100.0;
		p.y = 50.0;
		p.speed_x = 0.4;
		p.speed_y = 2.0;
		p.rotation = 358.0;
		p.rotation_speed = 3.0;

		b.update(VIEWPORT);
		let p = &b.pieces[0];
		assert_eq!(p.y, 52.0);
		let expected_x = 100.0 + 0.4 + (52.0_f64 * 0.01).sin() * 0.5;
		assert!((p.x - expected_x).abs() < 1e-12, "x = {}", p.x);
		assert!((p.rotation - 1.0).abs() < 1e-12, "rotation = {}", p.rotation);
	}

	#[test]
	fn initial_pieces_start_above_the_viewport() {
		let mut b = burst(4);
		b.start(VIEWPORT);
		let style = ConfettiStyle::default();
		for p in &b.pieces {
			assert!((-600.0..0.0).contains(&p.y));
			assert!((0.0..=800.0).contains(&p.x));
			assert!(style.width.contains(p.w));
			assert!(style.height.contains(p.h));
			assert!(style.speed_y.contains(p.speed_y));
			assert!(style.speed_x.contains(p.speed_x));
			assert!(style.opacity.contains(p.opacity));
			assert!(style.palette.contains(&p.color));
		}
	}

	#[test]
	fn piece_past_the_bottom_is_recycled_above() {
		let mut b = burst(5);
		b.start(VIEWPORT);
		b.pieces.truncate(1);
		b.pieces[0].y = 619.5;
		b.pieces[0].speed_y = 1.0;

		b.update(VIEWPORT);
		let y = b.pieces[0].y;
		assert!((-50.0..-20.0).contains(&y), "y = {y}");
	}

	#[test]
	fn pieces_never_linger_below_the_margin() {
		let mut b = burst(6);
		b.start(VIEWPORT);
		for _ in 0..1500 {
			b.update(VIEWPORT);
			for p in &b.pieces {
				assert!(p.y <= 620.0);
				assert!((0.0..=360.0).contains(&p.rotation));
			}
		}
		assert_eq!(b.len(), 120);
	}

	#[test]
	fn zero_height_viewport_spawns_at_top() {
		let mut b = burst(7);
		b.start(Viewport::new(400.0, 0.0));
		assert!(b.pieces.iter().all(|p| p.y == 0.0));
	}
}
