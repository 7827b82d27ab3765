//! Leptos component hosting the two effect canvases.
//!
//! The ambient field starts as soon as the canvases mount. The confetti
//! trigger is installed only once `armed` turns true, which the page does
//! after the entrance overlay has gone. A single debounced window resize
//! listener keeps both surfaces at viewport size.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::HtmlCanvasElement;

use super::debounce::DebouncedAction;
use super::layers::{AmbientLayer, ConfettiLayer};
use super::surface::Surface;
use super::theme::{AmbientStyle, ConfettiStyle};
use crate::components::page::dom;

/// Both effect layers, kept alive for the page session.
struct Layers {
	ambient: Option<AmbientLayer>,
	confetti: Option<Rc<ConfettiLayer>>,
}

/// Renders the ambient and confetti canvases and drives their animation.
#[component]
pub fn EffectsLayer(
	ambient: AmbientStyle,
	confetti: ConfettiStyle,
	#[prop(default = 200)] resize_debounce_ms: u32,
	#[prop(into)] armed: Signal<bool>,
) -> impl IntoView {
	let ambient_ref = NodeRef::<leptos::html::Canvas>::new();
	let confetti_ref = NodeRef::<leptos::html::Canvas>::new();
	let confetti_visible = RwSignal::new(false);
	let mounted = RwSignal::new(false);
	let layers: Rc<RefCell<Option<Layers>>> = Rc::new(RefCell::new(None));
	let (layers_init, layers_arm) = (layers.clone(), layers.clone());

	Effect::new(move |_| {
		let (Some(ambient_canvas), Some(confetti_canvas)) = (ambient_ref.get(), confetti_ref.get())
		else {
			return;
		};
		if layers_init.borrow().is_some() {
			return;
		}
		let ambient_canvas: HtmlCanvasElement = ambient_canvas.into();
		let confetti_canvas: HtmlCanvasElement = confetti_canvas.into();

		let ambient_layer = Surface::new(ambient_canvas)
			.and_then(|surface| AmbientLayer::start(surface, ambient.clone()));
		if ambient_layer.is_none() {
			warn!("invite-fx: ambient layer failed to start");
		}
		let confetti_layer = Surface::new(confetti_canvas).map(|surface| {
			let layer = ConfettiLayer::new(surface, confetti.clone(), confetti_visible);
			layer.fit_surface();
			Rc::new(layer)
		});

		*layers_init.borrow_mut() = Some(Layers {
			ambient: ambient_layer,
			confetti: confetti_layer,
		});

		let layers_resize = layers_init.clone();
		let on_resize = DebouncedAction::new(resize_debounce_ms, move || {
			if let Some(ref l) = *layers_resize.borrow() {
				if let Some(ref a) = l.ambient {
					a.resize();
				}
				if let Some(ref c) = l.confetti {
					c.resize();
				}
			}
		});
		if let Some(window) = web_sys::window() {
			dom::listen(&window, "resize", move |_| on_resize.trigger());
		}

		mounted.set(true);
	});

	let watching = Rc::new(Cell::new(false));
	Effect::new(move |_| {
		let (armed, mounted) = (armed.get(), mounted.get());
		if !(armed && mounted) || watching.replace(true) {
			return;
		}
		let confetti = layers_arm
			.borrow()
			.as_ref()
			.and_then(|l| l.confetti.clone());
		if let Some(confetti) = confetti {
			confetti.watch_section();
		}
	});

	view! {
		<canvas node_ref=ambient_ref id="particles-canvas" class="fx-canvas" aria-hidden="true" />
		<canvas
			node_ref=confetti_ref
			id="confetti-canvas"
			class="fx-canvas"
			class:active=move || confetti_visible.get()
			aria-hidden="true"
		/>
	}
}
