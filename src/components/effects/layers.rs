//! Controllers that bind each particle pool to its surface and frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};

use super::confetti::ConfettiBurst;
use super::frame_loop::FrameLoop;
use super::particles::ParticleSystem;
use super::render;
use super::surface::{Surface, Viewport};
use super::theme::{AmbientStyle, ConfettiStyle};
use super::trigger::{Crossing, ScrollTrigger};
use crate::components::page::dom;

fn live_viewport() -> Option<Viewport> {
	web_sys::window().as_ref().and_then(Viewport::of)
}

/// Ambient gold motes. Runs from startup until the page goes away.
pub struct AmbientLayer {
	surface: Surface,
	_frame: FrameLoop,
}

impl AmbientLayer {
	pub fn start(surface: Surface, style: AmbientStyle) -> Option<Self> {
		let window = web_sys::window()?;
		let viewport = surface.fit_to_window(&window)?;
		let count = style.count;
		let mut system = ParticleSystem::new(style, viewport);

		let ctx = surface.context().clone();
		let frame = FrameLoop::new(move || {
			let Some(viewport) = live_viewport() else {
				return;
			};
			system.update(viewport);
			render::draw_particles(&ctx, viewport, &system.particles);
		});
		frame.start();
		info!("invite-fx: ambient field started with {} particles", count);

		Some(Self {
			surface,
			_frame: frame,
		})
	}

	/// Resizes the surface only; particles drift back into frame on their own.
	pub fn resize(&self) {
		if let Some(window) = web_sys::window() {
			self.surface.fit_to_window(&window);
		}
	}
}

/// Scroll-triggered confetti.
pub struct ConfettiLayer {
	surface: Surface,
	burst: Rc<RefCell<ConfettiBurst>>,
	frame: FrameLoop,
	visible: RwSignal<bool>,
	style: ConfettiStyle,
}

impl ConfettiLayer {
	pub fn new(surface: Surface, style: ConfettiStyle, visible: RwSignal<bool>) -> Self {
		let burst = Rc::new(RefCell::new(ConfettiBurst::new(style.clone())));

		let (burst_cb, ctx) = (burst.clone(), surface.context().clone());
		let frame = FrameLoop::new(move || {
			let Some(viewport) = live_viewport() else {
				return;
			};
			let mut burst = burst_cb.borrow_mut();
			burst.update(viewport);
			render::draw_confetti(&ctx, viewport, &burst.pieces);
		});

		Self {
			surface,
			burst,
			frame,
			visible,
			style,
		}
	}

	/// No-op while already running.
	pub fn start(&self) {
		if self.burst.borrow().is_active() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(viewport) = self.surface.fit_to_window(&window) else {
			return;
		};
		if self.burst.borrow_mut().start(viewport) {
			self.visible.set(true);
			self.frame.start();
			info!("invite-fx: confetti started");
		}
	}

	pub fn stop(&self) {
		self.burst.borrow_mut().stop();
		self.frame.stop();
		self.visible.set(false);
		info!("invite-fx: confetti stopped");
	}

	pub fn is_active(&self) -> bool {
		self.frame.is_active()
	}

	pub fn fit_surface(&self) {
		if let Some(window) = web_sys::window() {
			self.surface.fit_to_window(&window);
		}
	}

	/// Only a running burst follows the window size.
	pub fn resize(&self) {
		if self.is_active() {
			self.fit_surface();
		}
	}

	/// Starts the burst when the trigger section scrolls into place and stops
	/// it when the reader scrolls back above it.
	pub fn watch_section(self: Rc<Self>) {
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(section) = dom::document()
			.and_then(|d| d.get_element_by_id(&self.style.trigger_section))
		else {
			debug!(
				"invite-fx: no #{} section, confetti stays off",
				self.style.trigger_section
			);
			return;
		};

		let trigger = RefCell::new(ScrollTrigger::new(self.style.trigger_fraction));
		let check = move || {
			let Some(viewport) = live_viewport() else {
				return;
			};
			let top = section.get_bounding_client_rect().top();
			let crossing = trigger.borrow_mut().update(top, viewport.height);
			match crossing {
				Some(Crossing::Enter) => self.start(),
				Some(Crossing::LeaveBack) => self.stop(),
				None => {}
			}
		};
		check();
		dom::listen_with_passive(&window, "scroll", true, move |_| check());
	}
}
