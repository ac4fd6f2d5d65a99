//! Full-viewport drawing surface.
//!
//! The surface is a fixed-position canvas inserted into a container element.
//! It never captures pointer events and is drawn at a fixed translucency, so
//! the page underneath stays fully interactive.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render::{LinkStroke, Painter, TextPass};
use crate::components::events::EventBinding;

/// A drawing surface the animation loop renders into.
pub trait Surface: Painter {
	/// Apply new pixel dimensions. Clears the surface.
	fn resize(&mut self, width: f64, height: f64);

	/// Detach the surface and its listeners. Returns `true` only for the call
	/// that actually removed something.
	fn teardown(&mut self) -> bool;
}

/// Current viewport size, or `None` if the window does not report one.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Canvas element overlaying the page.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	resize_binding: Option<EventBinding>,
	attached: bool,
}

impl CanvasSurface {
	/// Create the canvas inside the element with id `container_id`, replacing
	/// whatever the container held. `None` if the container or a 2D context
	/// is unavailable.
	pub fn initialize(window: &Window, container_id: &str, opacity: f64) -> Option<Self> {
		let document = window.document()?;
		let container = document.get_element_by_id(container_id)?;
		container.set_inner_html("");

		let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			log::warn!("code-backdrop: 2d canvas context unavailable");
			return None;
		};

		let style = canvas.style();
		for (property, value) in [
			("position", "fixed"),
			("top", "0"),
			("left", "0"),
			("width", "100%"),
			("height", "100%"),
			("z-index", "0"),
			("pointer-events", "none"),
		] {
			let _ = style.set_property(property, value);
		}
		let _ = style.set_property("opacity", &opacity.to_string());

		container.append_child(&canvas).ok()?;

		let mut surface = Self {
			canvas,
			ctx,
			resize_binding: None,
			attached: true,
		};
		if let Some((w, h)) = viewport_size(window) {
			Surface::resize(&mut surface, w, h);
		}
		Some(surface)
	}

	/// Hand over the window resize listener so teardown can remove it.
	pub fn set_resize_binding(&mut self, binding: EventBinding) {
		if let Some(old) = self.resize_binding.replace(binding) {
			old.unbind();
		}
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width.max(0.0) as u32);
		self.canvas.set_height(height.max(0.0) as u32);
	}

	fn teardown(&mut self) -> bool {
		if let Some(binding) = self.resize_binding.take() {
			binding.unbind();
		}
		if !self.attached {
			return false;
		}
		self.attached = false;
		if let Some(parent) = self.canvas.parent_node() {
			let _ = parent.remove_child(&self.canvas);
		}
		true
	}
}

impl Painter for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		Painter::clear(&mut self.ctx, width, height);
	}

	fn text(&mut self, pass: &TextPass<'_>) {
		Painter::text(&mut self.ctx, pass);
	}

	fn link(&mut self, stroke: &LinkStroke) {
		Painter::link(&mut self.ctx, stroke);
	}

	fn reset(&mut self) {
		Painter::reset(&mut self.ctx);
	}
}
