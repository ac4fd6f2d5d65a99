//! Frame scheduling.
//!
//! The animation loop asks a [`FrameScheduler`] for "one more frame" and
//! remembers the returned handle so a pending frame can be cancelled when the
//! page is hidden or the backdrop is torn down.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Source of frame callbacks.
pub trait FrameScheduler {
	/// Identifies a requested frame for cancellation.
	type Handle: Copy + PartialEq + std::fmt::Debug;

	/// Request that the frame callback runs once more before the next paint.
	/// `None` when the host refused.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	/// Drop a requested frame that has not run yet.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Shared slot holding the per-frame callback. Filled after the animation
/// loop exists, since the callback needs a reference back to it.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` scheduler.
pub struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl RafScheduler {
	/// Scheduler running whatever closure sits in `callback`.
	pub fn new(window: Window, callback: FrameCallback) -> Self {
		Self { window, callback }
	}
}

impl FrameScheduler for RafScheduler {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let slot = self.callback.borrow();
		let callback = slot.as_ref()?;
		self.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}
