//! Small DOM helpers shared by the page wiring.
//!
//! Listeners registered here live for the whole page session and are leaked
//! on purpose with `Closure::forget`.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
	web_sys::window()?.document()
}

pub fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
	document.get_element_by_id(id)?.dyn_into().ok()
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = document.query_selector_all(selector) else {
		warn!("invite-fx: bad selector {selector:?}");
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

pub fn add_class(element: &Element, class: &str) {
	let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
	let _ = element.class_list().remove_1(class);
}

pub fn toggle_class(element: &Element, class: &str, on: bool) {
	let _ = element.class_list().toggle_with_force(class, on);
}

/// Registers `handler` for the rest of the page session.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	if let Err(e) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
		warn!("invite-fx: failed to listen for {event}: {:?}", e);
	}
	cb.forget();
}

/// Like [`listen`], with an explicit passive flag.
pub fn listen_with_passive(
	target: &EventTarget,
	event: &str,
	passive: bool,
	handler: impl FnMut(Event) + 'static,
) {
	let options = AddEventListenerOptions::new();
	options.set_passive(passive);
	let cb = Closure::<dyn FnMut(Event)>::new(handler);
	if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
		event,
		cb.as_ref().unchecked_ref(),
		&options,
	) {
		warn!("invite-fx: failed to listen for {event}: {:?}", e);
	}
	cb.forget();
}

/// Runs `f` once after `delay_ms`.
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let cb = Closure::once_into_js(f);
	let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
	if let Err(e) =
		window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
	{
		warn!("invite-fx: failed to schedule timeout: {:?}", e);
	}
}
