//! Animation loop and browser wiring for the code backdrop.
//!
//! [`AnimationLoop`] owns the backdrop state and drives it one frame at a
//! time through a [`FrameScheduler`] into a [`Surface`]. [`CodeBackdrop`]
//! mounts it into the page: it creates the canvas, hooks up resize,
//! pointer-move and visibility listeners, and starts the
//! `requestAnimationFrame` chain.

use std::cell::RefCell;
use std::rc::Rc;

use fastrand::Rng;
use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlScriptElement, MouseEvent, Window};

use super::motion::MotionConfig;
use super::render;
use super::scheduler::{FrameCallback, FrameScheduler, RafScheduler};
use super::state::BackdropState;
use super::surface::{CanvasSurface, Surface, viewport_size};
use super::theme::Theme;
use super::types::Catalog;
use crate::components::dom::browser_rng;
use crate::components::events::EventBinding;

/// Id of the element the canvas is inserted into.
pub const CONTAINER_ID: &str = "canvas-container";

/// Id of an optional `<script type="application/json">` overriding the catalog.
pub const CATALOG_ID: &str = "backdrop-catalog";

/// Scheduling state of the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
	/// Frames are being scheduled.
	Running,
	/// Page hidden; nothing scheduled, state frozen.
	Paused,
	/// Torn down for good.
	Terminated,
}

/// Per-frame update/render driver.
pub struct AnimationLoop<S: FrameScheduler, C: Surface> {
	state: BackdropState,
	motion: MotionConfig,
	theme: Theme,
	rng: Rng,
	scheduler: S,
	surface: C,
	phase: LoopPhase,
	pending: Option<S::Handle>,
}

impl<S: FrameScheduler, C: Surface> AnimationLoop<S, C> {
	/// A loop in the `Running` phase with no frame scheduled yet; call
	/// [`AnimationLoop::start`] to draw the first frame.
	pub fn new(
		state: BackdropState,
		motion: MotionConfig,
		theme: Theme,
		rng: Rng,
		scheduler: S,
		surface: C,
	) -> Self {
		Self {
			state,
			motion,
			theme,
			rng,
			scheduler,
			surface,
			phase: LoopPhase::Running,
			pending: None,
		}
	}

	/// Draw the first frame. Does nothing once a frame is already pending.
	pub fn start(&mut self) {
		if self.phase == LoopPhase::Running && self.pending.is_none() {
			self.frame();
		}
	}

	/// Run one frame: advance the particles, draw them, schedule the next frame.
	/// Does nothing unless running.
	pub fn frame(&mut self) {
		if self.phase != LoopPhase::Running {
			return;
		}
		self.pending = None;

		self.state.tick(&self.motion, &mut self.rng);
		render::render(
			&self.state,
			&mut self.surface,
			&self.motion,
			&self.theme,
			&mut self.rng,
		);

		self.pending = self.scheduler.request_frame();
	}

	/// Pause while the page is hidden, resume from where it stopped once visible.
	pub fn set_hidden(&mut self, hidden: bool) {
		match (self.phase, hidden) {
			(LoopPhase::Running, true) => {
				self.cancel_pending();
				self.phase = LoopPhase::Paused;
				debug!("code-backdrop: paused");
			}
			(LoopPhase::Paused, false) => {
				self.phase = LoopPhase::Running;
				debug!("code-backdrop: resumed");
				self.frame();
			}
			_ => {}
		}
	}

	/// Apply a new viewport size to the surface and the wrap bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.phase == LoopPhase::Terminated {
			return;
		}
		self.surface.resize(width, height);
		self.state.resize(width, height);
	}

	/// Record the pointer position for parallax.
	pub fn pointer_moved(&mut self, px: f64, py: f64, viewport_width: f64, viewport_height: f64) {
		self.state
			.pointer_moved(px, py, viewport_width, viewport_height, &self.motion);
	}

	/// Stop for good: cancel the pending frame and tear the surface down.
	/// Returns `false` if already terminated.
	pub fn teardown(&mut self) -> bool {
		if self.phase == LoopPhase::Terminated {
			return false;
		}
		self.cancel_pending();
		self.phase = LoopPhase::Terminated;
		self.surface.teardown();
		true
	}

	fn cancel_pending(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
	}

	/// Current scheduling phase.
	pub fn phase(&self) -> LoopPhase {
		self.phase
	}

	/// Particles, time and pointer as of the last frame.
	pub fn state(&self) -> &BackdropState {
		&self.state
	}

	/// The frame scheduler.
	pub fn scheduler(&self) -> &S {
		&self.scheduler
	}

	/// The frame scheduler, mutably.
	pub fn scheduler_mut(&mut self) -> &mut S {
		&mut self.scheduler
	}

	/// The drawing surface.
	pub fn surface(&self) -> &C {
		&self.surface
	}

	/// The drawing surface, mutably.
	pub fn surface_mut(&mut self) -> &mut C {
		&mut self.surface
	}
}

type BrowserLoop = AnimationLoop<RafScheduler, CanvasSurface>;

/// The backdrop mounted in the page.
pub struct CodeBackdrop {
	inner: Rc<RefCell<BrowserLoop>>,
	bindings: RefCell<Vec<EventBinding>>,
}

impl CodeBackdrop {
	/// Mount into the element with id `container_id` and start animating.
	/// `None` when the container is missing, leaving the page untouched.
	pub fn mount(container_id: &str) -> Option<Rc<Self>> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;

		let theme = Theme::default();
		let motion = MotionConfig::default();
		let surface = CanvasSurface::initialize(&window, container_id, theme.surface_opacity)?;
		let (width, height) = viewport_size(&window).unwrap_or((0.0, 0.0));

		let mut rng = browser_rng();
		let catalog = load_catalog(&document).unwrap_or_default();
		let state = BackdropState::new(&catalog, width, height, &mut rng);

		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let scheduler = RafScheduler::new(window.clone(), callback.clone());
		let inner = Rc::new(RefCell::new(AnimationLoop::new(
			state, motion, theme, rng, scheduler, surface,
		)));

		let inner_frame = inner.clone();
		*callback.borrow_mut() = Some(Closure::new(move || {
			inner_frame.borrow_mut().frame();
		}));

		let inner_resize = inner.clone();
		let resize = EventBinding::bind(&window, "resize", move |_| {
			let Some((w, h)) = web_sys::window().and_then(|win| viewport_size(&win)) else {
				return;
			};
			inner_resize.borrow_mut().resize(w, h);
		});
		if let Some(binding) = resize {
			inner.borrow_mut().surface_mut().set_resize_binding(binding);
		}

		let mut bindings = Vec::new();

		let inner_pointer = inner.clone();
		bindings.extend(EventBinding::bind(&document, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let Some((vw, vh)) = web_sys::window().and_then(|win| viewport_size(&win)) else {
				return;
			};
			inner_pointer.borrow_mut().pointer_moved(
				ev.client_x() as f64,
				ev.client_y() as f64,
				vw,
				vh,
			);
		}));

		let (inner_visibility, document_visibility) = (inner.clone(), document.clone());
		bindings.extend(EventBinding::bind(&document, "visibilitychange", move |_| {
			inner_visibility
				.borrow_mut()
				.set_hidden(document_visibility.hidden());
		}));

		inner.borrow_mut().start();
		info!(
			"code-backdrop: animating {} snippets on {}x{}",
			catalog.len(),
			width,
			height
		);

		Some(Rc::new(Self {
			inner,
			bindings: RefCell::new(bindings),
		}))
	}

	/// Cancel the pending frame, detach every listener and remove the canvas.
	/// Safe to call repeatedly.
	pub fn teardown(&self) {
		let removed = self.inner.borrow_mut().teardown();
		for binding in self.bindings.borrow_mut().drain(..) {
			binding.unbind();
		}
		if removed {
			info!("code-backdrop: torn down");
		}
	}

	/// Publish `window[name]()` so page scripts can tear the backdrop down.
	pub fn expose_teardown(self: &Rc<Self>, window: &Window, name: &str) {
		let this = self.clone();
		let cleanup = Closure::<dyn FnMut()>::new(move || this.teardown());
		if js_sys::Reflect::set(window, &JsValue::from_str(name), cleanup.as_ref()).is_err() {
			warn!("code-backdrop: could not publish window.{}", name);
			return;
		}
		cleanup.forget();
	}
}

/// Load a catalog override from a script element with id="backdrop-catalog".
fn load_catalog(document: &Document) -> Option<Catalog> {
	let element = document.get_element_by_id(CATALOG_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Catalog::from_json(&json_text) {
		Ok(catalog) => {
			info!("code-backdrop: loaded {} catalog snippets", catalog.len());
			Some(catalog)
		}
		Err(e) => {
			warn!("code-backdrop: failed to parse catalog: {}", e);
			None
		}
	}
}
