//! Owned DOM event listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// A listener registered on an [`EventTarget`].
///
/// The closure is kept alive by the binding. Call [`EventBinding::unbind`] to
/// detach it, or [`EventBinding::forget`] for listeners that live as long as
/// the page.
pub struct EventBinding {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
	/// Register `handler` for `event` on `target`. `None` if the browser
	/// rejected the registration.
	pub fn bind(
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Option<Self> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
			.ok()?;
		Some(Self {
			target: target.clone(),
			event,
			callback,
		})
	}

	/// Remove the listener from its target.
	pub fn unbind(self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}

	/// Leave the listener attached for the rest of the page's life.
	pub fn forget(self) {
		self.callback.forget();
	}
}
