//! Canvas drawing for both effect layers.
//!
//! Each pass clears the whole surface and redraws the pool from scratch.
//! Coordinates are CSS pixels; the surface transform handles pixel density.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::confetti::ConfettiPiece;
use super::particles::Particle;
use super::surface::Viewport;

pub fn draw_particles(ctx: &CanvasRenderingContext2d, viewport: Viewport, particles: &[Particle]) {
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

	for p in particles {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&p.color.to_css_with_alpha(p.opacity));
		ctx.fill();
	}
}

pub fn draw_confetti(ctx: &CanvasRenderingContext2d, viewport: Viewport, pieces: &[ConfettiPiece]) {
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

	for p in pieces {
		ctx.save();
		let _ = ctx.translate(p.x, p.y);
		let _ = ctx.rotate(p.rotation.to_radians());
		ctx.set_global_alpha(p.opacity);
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.fill_rect(-p.w / 2.0, -p.h / 2.0, p.w, p.h);
		ctx.restore();
	}
}
