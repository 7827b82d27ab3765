//! Full-viewport drawing surfaces.
//!
//! A surface is a canvas element plus its 2D context, kept at the window's
//! CSS size with a backing store scaled by the device pixel ratio.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Highest device pixel ratio the backing store is scaled by.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Window size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Reads the current inner size of `window`, if available.
	pub fn of(window: &Window) -> Option<Self> {
		Some(Self {
			width: window.inner_width().ok()?.as_f64()?,
			height: window.inner_height().ok()?.as_f64()?,
		})
	}
}

/// Backing-store and CSS dimensions for a canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	pub pixel_width: u32,
	pub pixel_height: u32,
	pub css_width: f64,
	pub css_height: f64,
	/// Context scale that maps CSS pixels onto the backing store.
	pub scale: f64,
}

impl SurfaceSize {
	pub fn new(viewport: Viewport, device_pixel_ratio: f64) -> Self {
		let ratio = if device_pixel_ratio > 0.0 {
			device_pixel_ratio.min(MAX_PIXEL_RATIO)
		} else {
			1.0
		};
		Self {
			pixel_width: (viewport.width * ratio).max(0.0) as u32,
			pixel_height: (viewport.height * ratio).max(0.0) as u32,
			css_width: viewport.width,
			css_height: viewport.height,
			scale: ratio,
		}
	}
}

/// A canvas with its 2D rendering context.
#[derive(Clone)]
pub struct Surface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = match canvas.get_context("2d") {
			Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok()?,
			Ok(None) => return None,
			Err(e) => {
				warn!("invite-fx: 2d context unavailable: {:?}", e);
				return None;
			}
		};
		Some(Self { canvas, ctx })
	}

	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.ctx
	}

	/// Resizes the surface to the window and returns the new viewport.
	pub fn fit_to_window(&self, window: &Window) -> Option<Viewport> {
		let viewport = Viewport::of(window)?;
		self.apply(SurfaceSize::new(viewport, window.device_pixel_ratio()));
		Some(viewport)
	}

	fn apply(&self, size: SurfaceSize) {
		self.canvas.set_width(size.pixel_width);
		self.canvas.set_height(size.pixel_height);

		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", size.css_width));
		let _ = style.set_property("height", &format!("{}px", size.css_height));

		// Assigning width/height resets the transform; reapply the scale.
		if let Err(e) = self
			.ctx
			.set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0)
		{
			warn!("invite-fx: failed to scale surface: {:?}", e);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pixel_ratio_is_capped_at_two() {
		let size = SurfaceSize::new(Viewport::new(800.0, 600.0), 3.0);
		assert_eq!(size.scale, 2.0);
		assert_eq!((size.pixel_width, size.pixel_height), (1600, 1200));
		assert_eq!((size.css_width, size.css_height), (800.0, 600.0));
	}

	#[test]
	fn fractional_ratio_scales_backing_store() {
		let size = SurfaceSize::new(Viewport::new(1000.0, 500.0), 1.5);
		assert_eq!(size.scale, 1.5);
		assert_eq!((size.pixel_width, size.pixel_height), (1500, 750));
	}

	#[test]
	fn missing_ratio_counts_as_one() {
		let size = SurfaceSize::new(Viewport::new(320.0, 480.0), 0.0);
		assert_eq!(size.scale, 1.0);
		assert_eq!((size.pixel_width, size.pixel_height), (320, 480));
	}
}
