//! portfolio-fx: decorative effects for a developer portfolio page.
//!
//! This crate provides the WASM client behind the page: a drifting code
//! backdrop on a full-screen canvas, smooth-scroll navigation with scroll-spy,
//! skill ring reveals, a typewriter code block and floating dots. Every effect
//! looks up its own elements and silently stays off when they are missing.

use log::{Level, info, warn};
use web_sys::Document;

pub mod components;

pub use components::code_backdrop::{CONTAINER_ID, CodeBackdrop};
use components::dom::browser_rng;
use components::events::EventBinding;
use components::{floating_dots, nav, skill_rings, typing};

/// Name of the global function that tears the code backdrop down.
pub const TEARDOWN_HOOK: &str = "cleanupCodeBackground";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Activate every effect once the document has been parsed.
pub fn run() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		warn!("portfolio-fx: no document, nothing to do");
		return;
	};

	if still_parsing(&document.ready_state()) {
		let ready_document = document.clone();
		let binding = EventBinding::bind(&document, "DOMContentLoaded", move |_| {
			mount_all(&ready_document);
		});
		if let Some(binding) = binding {
			binding.forget();
		}
	} else {
		mount_all(&document);
	}
}

/// `document.readyState` while the HTML is still being parsed.
fn still_parsing(ready_state: &str) -> bool {
	ready_state == "loading"
}

fn mount_all(document: &Document) {
	floating_dots::install(document, &mut browser_rng());
	if nav::install(document).is_none() {
		info!("nav: no nav bar, skipped");
	}
	skill_rings::install(document);
	if typing::install(document).is_none() {
		info!("typing: no target, skipped");
	}

	match (CodeBackdrop::mount(CONTAINER_ID), web_sys::window()) {
		(Some(backdrop), Some(window)) => backdrop.expose_teardown(&window, TEARDOWN_HOOK),
		(None, _) => info!("code-backdrop: no #{} container, skipped", CONTAINER_ID),
		_ => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn waits_only_while_loading() {
		assert!(still_parsing("loading"));
		assert!(!still_parsing("interactive"));
		assert!(!still_parsing("complete"));
	}
}
