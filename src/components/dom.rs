//! Small DOM lookup helpers.

use fastrand::Rng;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, SvgElement};

/// All elements matching `selector`, in document order. An invalid selector
/// matches nothing.
pub fn select_all(document: &Document, selector: &str) -> Vec<Element> {
	let Ok(list) = document.query_selector_all(selector) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Inline style of an HTML or SVG element.
pub fn inline_style(element: &Element) -> Option<CssStyleDeclaration> {
	if let Some(html) = element.dyn_ref::<HtmlElement>() {
		Some(html.style())
	} else {
		element.dyn_ref::<SvgElement>().map(|svg| svg.style())
	}
}

/// Random source seeded from the browser's `Math.random`.
pub fn browser_rng() -> Rng {
	Rng::with_seed((js_sys::Math::random() * u64::MAX as f64) as u64)
}
