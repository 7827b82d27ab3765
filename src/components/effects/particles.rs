//! Ambient gold motes that drift upward and pulse in and out.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::surface::Viewport;
use super::theme::{AmbientStyle, Hsl};

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub opacity: f64,
	pub fade_speed: f64,
	pub growing: bool,
	pub color: Hsl,
}

impl Particle {
	fn spawn<R: Rng>(style: &AmbientStyle, viewport: Viewport, rng: &mut R) -> Self {
		let mut p = Self {
			x: 0.0,
			y: 0.0,
			size: 0.0,
			speed_x: 0.0,
			speed_y: 0.0,
			opacity: 0.0,
			fade_speed: 0.0,
			growing: false,
			color: Hsl { h: 0.0, s: 0.0, l: 0.0 },
		};
		p.reset(style, viewport, rng);
		p
	}

	/// Re-rolls every attribute in place.
	pub fn reset<R: Rng>(&mut self, style: &AmbientStyle, viewport: Viewport, rng: &mut R) {
		self.x = rng.gen_range(0.0..=viewport.width.max(0.0));
		self.y = rng.gen_range(0.0..=viewport.height.max(0.0));
		self.size = style.size.sample(rng);
		self.speed_x = style.speed_x.sample(rng);
		self.speed_y = style.speed_y.sample(rng);
		self.opacity = style.opacity.sample(rng);
		self.fade_speed = style.fade_speed.sample(rng);
		self.growing = rng.gen_bool(0.5);
		self.color = style.color.sample(rng);
	}

	fn is_outside(&self, viewport: Viewport, margin: f64) -> bool {
		self.y < -margin || self.x < -margin || self.x > viewport.width + margin
	}
}

/// Fixed-size pool of ambient particles.
pub struct ParticleSystem<R = StdRng> {
	pub particles: Vec<Particle>,
	style: AmbientStyle,
	rng: R,
}

impl ParticleSystem {
	pub fn new(style: AmbientStyle, viewport: Viewport) -> Self {
		Self::with_rng(style, viewport, StdRng::from_entropy())
	}
}

impl<R: Rng> ParticleSystem<R> {
	pub fn with_rng(style: AmbientStyle, viewport: Viewport, mut rng: R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::spawn(&style, viewport, &mut rng))
			.collect();
		Self {
			particles,
			style,
			rng,
		}
	}

	/// Advance every particle by one frame.
	pub fn update(&mut self, viewport: Viewport) {
		let style = &self.style;
		for p in &mut self.particles {
			p.x += p.speed_x;
			p.y += p.speed_y;

			if p.growing {
				p.opacity = (p.opacity + p.fade_speed).min(style.opacity_ceiling);
				if p.opacity >= style.opacity_ceiling {
					p.growing = false;
				}
			} else {
				p.opacity -= p.fade_speed;
				if p.opacity <= style.opacity_floor {
					p.reset(style, viewport, &mut self.rng);
				}
			}

			// Drifted away: feed it back in from below.
			if p.is_outside(viewport, style.edge_margin) {
				p.reset(style, viewport, &mut self.rng);
				p.y = viewport.height + style.edge_margin;
			}
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

	fn system(seed: u64) -> ParticleSystem<StdRng> {
		ParticleSystem::with_rng(AmbientStyle::default(), VIEWPORT, StdRng::seed_from_u64(seed))
	}

	#[test]
	fn initial_particles_sample_configured_ranges() {
		let ps = system(1);
		let style = AmbientStyle::default();
		assert_eq!(ps.len(), 60);
		for p in &ps.particles {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!(style.size.contains(p.size));
			assert!(style.speed_x.contains(p.speed_x));
			assert!(style.speed_y.contains(p.speed_y));
			assert!(p.speed_y < 0.0);
			assert!(style.opacity.contains(p.opacity));
			assert!(style.fade_speed.contains(p.fade_speed));
			assert!(style.color.hue.contains(p.color.h));
			assert!(style.color.saturation.contains(p.color.s));
			assert!(style.color.lightness.contains(p.color.l));
		}
	}

	#[test]
	fn opacity_stays_within_bounds() {
		let mut ps = system(2);
		for _ in 0..2000 {
			ps.update(VIEWPORT);
			for p in &ps.particles {
				assert!(p.opacity >= 0.0 && p.opacity <= 0.7, "opacity {}", p.opacity);
			}
		}
	}

	#[test]
	fn tick_drifts_by_speed() {
		let mut ps = system(9);
		ps.particles.truncate(1);
		let p = &mut ps.particles[0];
		p.x = 400.0;
		p.y = 300.0;
		p.speed_x = 0.125;
		p.speed_y = -0.25;
		p.growing = true;
		p.opacity = 0.3;
		p.fade_speed = 0.005;

		ps.update(VIEWPORT);
		let p = &ps.particles[0];
		assert_eq!((p.x, p.y), (400.125, 299.75));
		assert!((p.opacity - 0.305).abs() < 1e-12);
		assert!(p.growing);
	}

	#[test]
	fn growing_particle_flips_at_ceiling() {
		let mut ps = system(3);
		ps.particles.truncate(1);
		let p = &mut ps.particles[0];
		p.x = 400.0;
		p.y = 300.0;
		p.speed_x = 0.0;
		p.speed_y = 0.0;
		p.growing = true;
		p.opacity = 0.698;
		p.fade_speed = 0.008;

		ps.update(VIEWPORT);
		let p = &ps.particles[0];
		assert_eq!(p.opacity, 0.7);
		assert!(!p.growing);
	}

	#[test]
	fn faded_particle_resets_within_the_same_tick() {
		let mut ps = system(4);
		ps.particles.truncate(1);
		let p = &mut ps.particles[0];
		p.x = 400.0;
		p.y = 300.0;
		p.speed_x = 0.0;
		p.speed_y = 0.0;
		p.growing = false;
		p.opacity = 0.055;
		p.fade_speed = 0.008;

		ps.update(VIEWPORT);
		let p = &ps.particles[0];
		assert!(p.opacity >= 0.15, "reset opacity, got {}", p.opacity);
	}

	#[test]
	fn particle_past_an_edge_is_recycled_below() {
		for (x, y, speed_x, speed_y) in [
			(-9.95, 300.0, -0.1, -0.1),
			(809.95, 300.0, 0.1, -0.1),
			(400.0, -9.95, 0.0, -0.1),
		] {
			let mut ps = system(5);
			ps.particles.truncate(1);
			let p = &mut ps.particles[0];
			p.x = x;
			p.y = y;
			p.speed_x = speed_x;
			p.speed_y = speed_y;
			p.growing = true;
			p.opacity = 0.3;

			ps.update(VIEWPORT);
			let p = &ps.particles[0];
			assert_eq!(p.y, 610.0);
			assert!((0.0..=800.0).contains(&p.x));
		}
	}

	#[test]
	fn pool_size_is_constant() {
		let mut ps = system(6);
		for _ in 0..500 {
			ps.update(VIEWPORT);
		}
		assert_eq!(ps.len(), 60);
	}

	#[test]
	fn particles_stay_near_the_viewport_after_many_ticks() {
		let mut ps = system(7);
		for _ in 0..1000 {
			ps.update(VIEWPORT);
		}
		for p in &ps.particles {
			assert!((-10.0..=810.0).contains(&p.x), "x = {}", p.x);
			assert!((-10.0..=610.0).contains(&p.y), "y = {}", p.y);
		}
	}

	#[test]
	fn empty_viewport_does_not_panic() {
		let mut ps =
			ParticleSystem::with_rng(AmbientStyle::default(), Viewport::default(), StdRng::seed_from_u64(8));
		ps.update(Viewport::default());
		assert_eq!(ps.len(), 60);
	}
}
