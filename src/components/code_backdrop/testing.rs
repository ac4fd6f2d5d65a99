//! Test doubles: a recording surface and a hand-stepped frame scheduler.

use super::render::{LinkStroke, Painter, TextPass};
use super::scheduler::FrameScheduler;
use super::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedText {
	pub text: String,
	pub x: f64,
	pub y: f64,
	pub font: String,
	pub color: String,
	pub alpha: f64,
	pub shadow_blur: f64,
	pub shadow_color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
	Clear(f64, f64),
	Text(RecordedText),
	Link(LinkStroke),
	Reset,
}

#[derive(Debug, Default)]
pub struct Recorder {
	pub ops: Vec<Op>,
	pub size: (f64, f64),
	pub removals: usize,
	detached: bool,
}

impl Recorder {
	pub fn texts(&self) -> Vec<&RecordedText> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::Text(t) => Some(t),
				_ => None,
			})
			.collect()
	}

	pub fn links(&self) -> Vec<&LinkStroke> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::Link(l) => Some(l),
				_ => None,
			})
			.collect()
	}

	/// Number of frames drawn so far.
	pub fn frames(&self) -> usize {
		self.ops
			.iter()
			.filter(|op| matches!(op, Op::Clear(..)))
			.count()
	}

	pub fn is_detached(&self) -> bool {
		self.detached
	}
}

impl Painter for Recorder {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(Op::Clear(width, height));
	}

	fn text(&mut self, pass: &TextPass<'_>) {
		self.ops.push(Op::Text(RecordedText {
			text: pass.text.to_string(),
			x: pass.x,
			y: pass.y,
			font: pass.font.to_string(),
			color: pass.color.clone(),
			alpha: pass.alpha,
			shadow_blur: pass.shadow_blur,
			shadow_color: pass.shadow_color.clone(),
		}));
	}

	fn link(&mut self, stroke: &LinkStroke) {
		self.ops.push(Op::Link(stroke.clone()));
	}

	fn reset(&mut self) {
		self.ops.push(Op::Reset);
	}
}

impl Surface for Recorder {
	fn resize(&mut self, width: f64, height: f64) {
		self.size = (width, height);
	}

	fn teardown(&mut self) -> bool {
		if self.detached {
			return false;
		}
		self.detached = true;
		self.removals += 1;
		true
	}
}

/// Scheduler stepped by hand. Keeps track of which frames are outstanding so
/// tests can run them deterministically.
#[derive(Debug, Default)]
pub struct ManualScheduler {
	next_handle: u32,
	pending: Vec<u32>,
	cancelled: usize,
}

impl ManualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Frames requested and neither run nor cancelled.
	pub fn pending(&self) -> usize {
		self.pending.len()
	}

	pub fn cancelled(&self) -> usize {
		self.cancelled
	}

	/// Consume the oldest outstanding frame. Returns `false` when there is
	/// none, meaning the loop would not run.
	pub fn take_frame(&mut self) -> bool {
		if self.pending.is_empty() {
			return false;
		}
		self.pending.remove(0);
		true
	}
}

impl FrameScheduler for ManualScheduler {
	type Handle = u32;

	fn request_frame(&mut self) -> Option<u32> {
		self.next_handle += 1;
		self.pending.push(self.next_handle);
		Some(self.next_handle)
	}

	fn cancel_frame(&mut self, handle: u32) {
		let before = self.pending.len();
		self.pending.retain(|&h| h != handle);
		if self.pending.len() != before {
			self.cancelled += 1;
		}
	}
}

#[test]
fn manual_scheduler_tracks_pending_frames() {
	let mut scheduler = ManualScheduler::new();
	let a = scheduler.request_frame().unwrap();
	let b = scheduler.request_frame().unwrap();
	assert_ne!(a, b);
	assert_eq!(scheduler.pending(), 2);

	scheduler.cancel_frame(a);
	scheduler.cancel_frame(a);
	assert_eq!(scheduler.pending(), 1);
	assert_eq!(scheduler.cancelled(), 1);

	assert!(scheduler.take_frame());
	assert!(!scheduler.take_frame());
}
