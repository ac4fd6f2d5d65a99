//! Motion parameters for the drifting code backdrop.
//!
//! # Coordinate Spaces
//!
//! - **Stored position**: where a particle actually is. Only drift and wrapping
//!   change it, and connection lines are measured between stored positions.
//! - **Drawn position**: stored position plus the sway and parallax offsets.
//!   Sway is taken from the position reached by drift before wrapping.
//!
//! # Wrapping
//!
//! The wrap region extends past the viewport by a margin on each side. A
//! particle leaving it on one side re-enters on the opposite side, still
//! off-screen, so labels never pop into view.

/// All motion settings for the backdrop.
#[derive(Clone, Debug)]
pub struct MotionConfig {
	/// Time accumulator increment per frame. Drives the sway phase only.
	pub time_step: f64,
	/// Horizontal off-screen margin before wrapping.
	pub wrap_x: f64,
	/// Vertical off-screen margin before wrapping.
	pub wrap_y: f64,
	/// Peak sway in pixels.
	pub sway_amplitude: f64,
	/// Sway phase per pixel of position.
	pub sway_frequency: f64,
	/// Chance per particle per frame of a heading change.
	pub jitter_chance: f64,
	/// Width in radians of the heading change range, centred on zero.
	pub jitter_spread: f64,
	/// Pointer offset range in pixels across the full viewport.
	pub pointer_range: f64,
	/// Fraction of the pointer offset applied to drawn positions.
	pub parallax_damping: f64,
	/// Particles closer than this (exclusive) are joined by a line.
	pub link_distance: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			time_step: 0.01,
			wrap_x: 300.0,
			wrap_y: 50.0,
			sway_amplitude: 2.0,
			sway_frequency: 0.01,
			jitter_chance: 0.005,
			jitter_spread: 0.15,
			pointer_range: 15.0,
			parallax_damping: 0.08,
			link_distance: 280.0,
		}
	}
}

impl MotionConfig {
	/// Wrap a stored position into the extended viewport, one axis at a time.
	pub fn wrap(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
		(wrap_axis(x, width, self.wrap_x), wrap_axis(y, height, self.wrap_y))
	}

	/// Render-only oscillation at `time` for a particle at `(x, y)`.
	pub fn sway(&self, time: f64, x: f64, y: f64) -> (f64, f64) {
		(
			(time + x * self.sway_frequency).sin() * self.sway_amplitude,
			(time + y * self.sway_frequency).cos() * self.sway_amplitude,
		)
	}

	/// Link strength for two particles `distance` apart: 1 when touching,
	/// falling linearly to 0 at [`MotionConfig::link_distance`].
	/// `None` when they are too far apart to be linked.
	pub fn link_strength(&self, distance: f64) -> Option<f64> {
		(distance < self.link_distance).then(|| 1.0 - distance / self.link_distance)
	}
}

fn wrap_axis(value: f64, extent: f64, margin: f64) -> f64 {
	if value < -margin {
		extent + margin
	} else if value > extent + margin {
		-margin
	} else {
		value
	}
}
