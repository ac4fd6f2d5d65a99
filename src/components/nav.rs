//! Smooth-scroll navigation and scroll-spy highlighting.
//!
//! Clicking a `.nav-link` glides to the section named by its `href`, leaving
//! room for the fixed `nav` bar. While scrolling, the link of the section
//! under the top of the viewport carries the `active` class.

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

use super::dom::select_all;
use super::events::EventBinding;

/// Space left between the nav bar and a section after a link jump.
const JUMP_GAP: f64 = 20.0;

/// How far ahead of the nav bar a section starts counting as current.
const SPY_LEAD: f64 = 100.0;

const ACTIVE_CLASS: &str = "active";

/// Vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
	/// Element id, matched against link `href`s.
	pub id: String,
	/// Offset from the document top.
	pub top: f64,
	/// Rendered height.
	pub height: f64,
}

/// Scroll position that brings a section just below the nav bar.
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
	(section_top - nav_height - JUMP_GAP).max(0.0)
}

/// Id of the section that should be highlighted at `scroll_y`. When spans
/// overlap the later section wins.
pub fn active_section(sections: &[SectionSpan], scroll_y: f64, nav_height: f64) -> Option<&str> {
	sections
		.iter()
		.rev()
		.find(|s| {
			let top = s.top - nav_height - SPY_LEAD;
			scroll_y >= top && scroll_y < top + s.height
		})
		.map(|s| s.id.as_str())
}

/// Wire up link clicks and scroll-spy. Does nothing without a `nav` element.
pub fn install(document: &Document) -> Option<()> {
	let window = web_sys::window()?;
	let nav: HtmlElement = document.query_selector("nav").ok()??.dyn_into().ok()?;
	let links = select_all(document, ".nav-link");

	for link in &links {
		let (document, nav, target) = (document.clone(), nav.clone(), link.clone());
		let binding = EventBinding::bind(link, "click", move |ev| {
			ev.prevent_default();
			jump_to(&document, &nav, &target);
		});
		if let Some(binding) = binding {
			binding.forget();
		}
	}

	let (scroll_document, scroll_nav) = (document.clone(), nav);
	let scroll = EventBinding::bind(&window, "scroll", move |_| {
		spy(&scroll_document, &scroll_nav);
	});
	if let Some(binding) = scroll {
		binding.forget();
	}

	info!("nav: {} links wired", links.len());
	Some(())
}

fn jump_to(document: &Document, nav: &HtmlElement, link: &Element) {
	let href = link.get_attribute("href");
	let section = href
		.as_deref()
		.and_then(|h| document.query_selector(h).ok().flatten())
		.and_then(|e| e.dyn_into::<HtmlElement>().ok());

	if let (Some(section), Some(window)) = (section, web_sys::window()) {
		let options = ScrollToOptions::new();
		options.set_top(scroll_target(
			section.offset_top() as f64,
			nav.offset_height() as f64,
		));
		options.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
	}

	for other in select_all(document, ".nav-link") {
		let _ = other.class_list().remove_1(ACTIVE_CLASS);
	}
	let _ = link.class_list().add_1(ACTIVE_CLASS);
}

fn spy(document: &Document, nav: &HtmlElement) {
	let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
		return;
	};
	let sections: Vec<SectionSpan> = select_all(document, "section")
		.into_iter()
		.filter_map(|e| e.dyn_into::<HtmlElement>().ok())
		.map(|s| SectionSpan {
			id: s.id(),
			top: s.offset_top() as f64,
			height: s.offset_height() as f64,
		})
		.collect();

	let Some(id) = active_section(&sections, scroll_y, nav.offset_height() as f64) else {
		return;
	};
	let wanted = format!("#{}", id);
	for link in select_all(document, ".nav-link") {
		let classes = link.class_list();
		if link.get_attribute("href").as_deref() == Some(wanted.as_str()) {
			let _ = classes.add_1(ACTIVE_CLASS);
		} else {
			let _ = classes.remove_1(ACTIVE_CLASS);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn span(id: &str, top: f64, height: f64) -> SectionSpan {
		SectionSpan {
			id: id.to_string(),
			top,
			height,
		}
	}

	#[test]
	fn jump_leaves_room_for_nav() {
		assert_eq!(scroll_target(900.0, 64.0), 816.0);
		assert_eq!(scroll_target(30.0, 64.0), 0.0);
	}

	#[test]
	fn spy_picks_section_under_nav() {
		let sections = [
			span("home", 0.0, 800.0),
			span("about", 800.0, 600.0),
			span("projects", 1400.0, 1000.0),
		];
		// about starts counting at 800 - 64 - 100 = 636
		assert_eq!(active_section(&sections, 0.0, 64.0), Some("home"));
		assert_eq!(active_section(&sections, 635.0, 64.0), Some("home"));
		assert_eq!(active_section(&sections, 636.0, 64.0), Some("about"));
		assert_eq!(active_section(&sections, 1300.0, 64.0), Some("projects"));
		assert_eq!(active_section(&sections, 5000.0, 64.0), None);
	}

	#[test]
	fn later_section_wins_on_overlap() {
		let sections = [span("a", 0.0, 1000.0), span("b", 200.0, 300.0)];
		assert_eq!(active_section(&sections, 150.0, 0.0), Some("b"));
	}
}
