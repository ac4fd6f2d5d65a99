//! Skill ring reveal.
//!
//! Each `.skill-item` carries a `data-skill` percentage and an SVG circle
//! `.skill-ring-progress`. The circle starts fully hidden through its dash
//! offset and is drawn out to the skill level the first time the item is at
//! least half visible. The stroke transition itself lives in CSS.

use js_sys::Array;
use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	CssStyleDeclaration, Document, Element, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

use super::dom::{inline_style, select_all};

/// Radius of the progress circle in SVG user units.
pub const RING_RADIUS: f64 = 45.0;

/// Fraction of the item that must be visible to trigger the reveal.
const VISIBLE_THRESHOLD: f64 = 0.5;

/// Delay before the ring starts filling once visible.
const REVEAL_DELAY_MS: i32 = 100;

/// Full length of the ring stroke.
pub fn circumference() -> f64 {
	std::f64::consts::TAU * RING_RADIUS
}

/// Dash offset that leaves `level` percent of the ring drawn.
pub fn dash_offset(level: f64) -> f64 {
	circumference() * (1.0 - level.clamp(0.0, 100.0) / 100.0)
}

/// Parse a `data-skill` value. Out-of-range levels are clamped; anything that
/// is not a finite number is rejected.
pub fn parse_level(raw: &str) -> Option<f64> {
	let level: f64 = raw.trim().parse().ok()?;
	level.is_finite().then_some(level.clamp(0.0, 100.0))
}

/// Hide every ring and arm its reveal. Returns the number of rings armed.
pub fn install(document: &Document) -> usize {
	let mut armed = 0;
	for item in select_all(document, ".skill-item") {
		let Some(level) = item.get_attribute("data-skill").as_deref().and_then(parse_level) else {
			continue;
		};
		let Some(style) = item
			.query_selector(".skill-ring-progress")
			.ok()
			.flatten()
			.as_ref()
			.and_then(inline_style)
		else {
			continue;
		};

		let _ = style.set_property("stroke-dashoffset", &circumference().to_string());
		if watch(item, style, dash_offset(level)).is_some() {
			armed += 1;
		}
	}
	info!("skill-rings: {} rings armed", armed);
	armed
}

/// Observe `item` until it first becomes visible, then fill its ring.
fn watch(item: Element, ring: CssStyleDeclaration, offset: f64) -> Option<()> {
	let observed = item.clone();
	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			let visible = entries.iter().any(|entry| {
				entry
					.dyn_into::<IntersectionObserverEntry>()
					.map(|e| e.is_intersecting())
					.unwrap_or(false)
			});
			if visible {
				reveal_later(ring.clone(), offset);
				observer.unobserve(&item);
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(VISIBLE_THRESHOLD));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
	observer.observe(&observed);
	callback.forget();
	Some(())
}

fn reveal_later(ring: CssStyleDeclaration, offset: f64) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let reveal = Closure::once_into_js(move || {
		let _ = ring.set_property("stroke-dashoffset", &offset.to_string());
	});
	let _ = window
		.set_timeout_with_callback_and_timeout_and_arguments_0(reveal.unchecked_ref(), REVEAL_DELAY_MS);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_skill_draws_whole_ring() {
		assert_eq!(dash_offset(100.0), 0.0);
		assert!((dash_offset(0.0) - circumference()).abs() < 1e-12);
		assert!((dash_offset(75.0) - circumference() * 0.25).abs() < 1e-9);
	}

	#[test]
	fn circumference_of_radius_45() {
		assert!((circumference() - 282.743_338_823_081_4).abs() < 1e-9);
	}

	#[test]
	fn levels_are_clamped_and_validated() {
		assert_eq!(parse_level(" 85 "), Some(85.0));
		assert_eq!(parse_level("120"), Some(100.0));
		assert_eq!(parse_level("-5"), Some(0.0));
		assert_eq!(parse_level("expert"), None);
		assert_eq!(parse_level("NaN"), None);
		assert_eq!(dash_offset(150.0), 0.0);
	}
}
