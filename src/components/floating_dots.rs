//! CSS-animated dots rising behind the hero section.
//!
//! Only placement and timing are randomized here; the motion itself is a CSS
//! keyframe animation on the `.particle` class.

use fastrand::Rng;
use log::info;
use web_sys::Document;

const DOT_COUNT: usize = 30;

/// Placement and timing of one dot.
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
	/// Horizontal position in percent of the container width.
	pub left_pct: f64,
	/// Animation delay in seconds.
	pub delay_s: f64,
	/// Animation duration in seconds.
	pub duration_s: f64,
}

impl Dot {
	/// Random placement: anywhere across, up to 20 s late, 15 to 25 s long.
	pub fn random(rng: &mut Rng) -> Self {
		Self {
			left_pct: rng.f64() * 100.0,
			delay_s: rng.f64() * 20.0,
			duration_s: rng.f64() * 10.0 + 15.0,
		}
	}

	/// Inline style for the dot element.
	pub fn to_css(&self) -> String {
		format!(
			"left: {}%; animation-delay: {}s; animation-duration: {}s;",
			self.left_pct, self.delay_s, self.duration_s
		)
	}
}

/// Fill `.floating-particles` with dots. Returns how many were added.
pub fn install(document: &Document, rng: &mut Rng) -> usize {
	let Some(container) = document.query_selector(".floating-particles").ok().flatten() else {
		return 0;
	};

	let mut added = 0;
	for _ in 0..DOT_COUNT {
		let Ok(dot) = document.create_element("div") else {
			break;
		};
		dot.set_class_name("particle");
		let _ = dot.set_attribute("style", &Dot::random(rng).to_css());
		if container.append_child(&dot).is_ok() {
			added += 1;
		}
	}
	info!("floating-dots: {} dots added", added);
	added
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dots_stay_in_ranges() {
		let mut rng = Rng::with_seed(17);
		for _ in 0..1_000 {
			let dot = Dot::random(&mut rng);
			assert!((0.0..100.0).contains(&dot.left_pct));
			assert!((0.0..20.0).contains(&dot.delay_s));
			assert!((15.0..25.0).contains(&dot.duration_s));
		}
	}

	#[test]
	fn css_uses_percent_and_seconds() {
		let dot = Dot {
			left_pct: 12.5,
			delay_s: 3.0,
			duration_s: 18.25,
		};
		assert_eq!(
			dot.to_css(),
			"left: 12.5%; animation-delay: 3s; animation-duration: 18.25s;"
		);
	}
}
