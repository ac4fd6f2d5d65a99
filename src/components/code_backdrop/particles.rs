//! Floating code particles.

use std::f64::consts::TAU;

use fastrand::Rng;

use super::motion::MotionConfig;
use super::types::{Catalog, Category};

/// Number of colour slots a particle may pick from. Category palettes may be
/// shorter, in which case the index wraps.
pub const COLOR_SLOTS: usize = 5;

/// A single floating snippet.
///
/// `speed`, `opacity` and `color_index` are fixed at creation; only the
/// position and heading change while the animation runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Label drawn on the canvas.
	pub text: String,
	/// Snippet kind, selecting font and palette.
	pub category: Category,
	/// Stored horizontal position.
	pub x: f64,
	/// Stored vertical position.
	pub y: f64,
	/// Drift direction in radians.
	pub heading: f64,
	speed: f64,
	opacity: f64,
	color_index: usize,
	/// Position reached by the last drift, before wrapping. Sway is taken
	/// from here.
	sway_anchor: (f64, f64),
}

impl Particle {
	/// A particle at `(x, y)` with fixed speed, opacity and palette slot.
	pub fn new(
		text: impl Into<String>,
		category: Category,
		(x, y): (f64, f64),
		heading: f64,
		speed: f64,
		opacity: f64,
		color_index: usize,
	) -> Self {
		Self {
			text: text.into(),
			category,
			x,
			y,
			heading,
			speed,
			opacity,
			color_index,
			sway_anchor: (x, y),
		}
	}

	/// Drift distance per frame.
	pub fn speed(&self) -> f64 {
		self.speed
	}

	/// Base alpha in `[0.4, 0.8)` for randomly seeded particles.
	pub fn opacity(&self) -> f64 {
		self.opacity
	}

	/// Palette slot, taken modulo the category palette length.
	pub fn color_index(&self) -> usize {
		self.color_index
	}

	/// Position the sway offset is computed from.
	pub fn sway_anchor(&self) -> (f64, f64) {
		self.sway_anchor
	}

	/// Advance one frame: drift, wrap into the extended viewport, maybe turn.
	pub fn step(&mut self, motion: &MotionConfig, width: f64, height: f64, rng: &mut Rng) {
		self.x += self.heading.cos() * self.speed;
		self.y += self.heading.sin() * self.speed;
		self.sway_anchor = (self.x, self.y);

		(self.x, self.y) = motion.wrap(self.x, self.y, width, height);

		if rng.f64() < motion.jitter_chance {
			self.heading += (rng.f64() - 0.5) * motion.jitter_spread;
		}
	}

	/// Euclidean distance between stored positions.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// The fixed set of backdrop particles, in catalog order.
#[derive(Clone, Debug, Default)]
pub struct ParticleSystem {
	/// Particles in catalog order.
	pub particles: Vec<Particle>,
}

impl ParticleSystem {
	/// Seed one particle per catalog entry with a random position inside the
	/// surface, a random heading, opacity and palette slot.
	pub fn new(catalog: &Catalog, width: f64, height: f64, rng: &mut Rng) -> Self {
		let particles = catalog
			.snippets
			.iter()
			.map(|snippet| {
				let x = rng.f64() * width;
				let y = rng.f64() * height;
				let opacity = 0.4 + rng.f64() * 0.4;
				let heading = rng.f64() * TAU;
				let color_index = rng.usize(..COLOR_SLOTS);
				Particle::new(
					snippet.text.clone(),
					snippet.category,
					(x, y),
					heading,
					snippet.speed,
					opacity,
					color_index,
				)
			})
			.collect();

		Self { particles }
	}

	/// Build from explicitly placed particles.
	pub fn from_particles(particles: Vec<Particle>) -> Self {
		Self { particles }
	}

	/// Particles in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = &Particle> {
		self.particles.iter()
	}

	/// Step every particle once, in catalog order.
	pub fn update(&mut self, motion: &MotionConfig, width: f64, height: f64, rng: &mut Rng) {
		for p in &mut self.particles {
			p.step(motion, width, height, rng);
		}
	}

	/// Every unordered pair closer than the link distance, with its strength.
	///
	/// Brute force over all pairs: the set is a couple dozen particles, far
	/// below the size where a spatial index pays for itself.
	pub fn links<'a>(&'a self, motion: &'a MotionConfig) -> impl Iterator<Item = Link> + 'a {
		let n = self.particles.len();
		(0..n).flat_map(move |i| {
			((i + 1)..n).filter_map(move |j| {
				let distance = self.particles[i].distance_to(&self.particles[j]);
				motion
					.link_strength(distance)
					.map(|strength| Link { from: i, to: j, strength })
			})
		})
	}
}

/// A connection between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub from: usize,
	/// Index of the second particle, always greater than `from`.
	pub to: usize,
	/// `1 - distance / link_distance`.
	pub strength: f64,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::code_backdrop::types::Snippet;

	fn still(x: f64, y: f64) -> Particle {
		Particle::new("x", Category::Code, (x, y), 0.0, 0.0, 0.5, 0)
	}

	#[test]
	fn seeds_within_bounds_and_ranges() {
		let mut rng = Rng::with_seed(7);
		let system = ParticleSystem::new(&Catalog::default(), 1280.0, 720.0, &mut rng);

		assert_eq!(system.particles.len(), Catalog::default().len());
		for p in system.iter() {
			assert!((0.0..1280.0).contains(&p.x));
			assert!((0.0..720.0).contains(&p.y));
			assert!((0.0..TAU).contains(&p.heading));
			assert!((0.4..0.8).contains(&p.opacity()));
			assert!(p.color_index() < COLOR_SLOTS);
		}
	}

	#[test]
	fn seeding_is_deterministic_for_a_seed() {
		let catalog = Catalog::default();
		let a = ParticleSystem::new(&catalog, 800.0, 600.0, &mut Rng::with_seed(42));
		let b = ParticleSystem::new(&catalog, 800.0, 600.0, &mut Rng::with_seed(42));
		assert_eq!(a.particles, b.particles);
	}

	#[test]
	fn keeps_catalog_order_and_speed() {
		let catalog = Catalog {
			snippets: vec![
				Snippet::new("first", Category::Terminal, 0.1),
				Snippet::new("second", Category::Comment, 0.9),
			],
		};
		let system = ParticleSystem::new(&catalog, 100.0, 100.0, &mut Rng::with_seed(1));
		assert_eq!(system.particles[0].text, "first");
		assert_eq!(system.particles[0].speed(), 0.1);
		assert_eq!(system.particles[1].category, Category::Comment);
		assert_eq!(system.particles[1].speed(), 0.9);
	}

	#[test]
	fn step_moves_along_heading() {
		let motion = MotionConfig::default();
		let mut p = Particle::new("x", Category::Code, (10.0, 10.0), 0.0, 2.0, 0.5, 0);
		p.step(&motion, 800.0, 600.0, &mut Rng::with_seed(3));
		assert!((p.x - 12.0).abs() < 1e-9);
		assert!((p.y - 10.0).abs() < 1e-9);
		assert_eq!(p.sway_anchor(), (p.x, p.y));
	}

	#[test]
	fn sway_anchor_keeps_position_before_wrap() {
		let motion = MotionConfig::default();
		let mut p = Particle::new("x", Category::Code, (1099.0, 10.0), 0.0, 2.0, 0.5, 0);
		p.step(&motion, 800.0, 600.0, &mut Rng::with_seed(3));
		assert_eq!(p.x, -300.0);
		assert!((p.sway_anchor().0 - 1101.0).abs() < 1e-9);
	}

	#[test]
	fn heading_jitter_stays_small() {
		let motion = MotionConfig::default();
		let mut rng = Rng::with_seed(11);
		let mut p = still(100.0, 100.0);
		let mut previous = p.heading;
		for _ in 0..5_000 {
			p.step(&motion, 800.0, 600.0, &mut rng);
			assert!((p.heading - previous).abs() <= 0.075 + 1e-12);
			previous = p.heading;
		}
	}

	#[test]
	fn links_only_close_pairs() {
		let motion = MotionConfig::default();
		let system = ParticleSystem::from_particles(vec![
			still(0.0, 0.0),
			still(100.0, 0.0),
			still(1000.0, 0.0),
		]);
		let links: Vec<_> = system.links(&motion).collect();
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].from, links[0].to), (0, 1));
		assert!((links[0].strength - (1.0 - 100.0 / 280.0)).abs() < 1e-12);
	}

	#[test]
	fn coincident_particles_link_at_full_strength() {
		let motion = MotionConfig::default();
		let system = ParticleSystem::from_particles(vec![still(5.0, 5.0), still(5.0, 5.0)]);
		let links: Vec<_> = system.links(&motion).collect();
		assert_eq!(links[0].strength, 1.0);
	}

	#[test]
	fn exactly_at_link_distance_is_not_linked() {
		let motion = MotionConfig::default();
		let system = ParticleSystem::from_particles(vec![still(0.0, 0.0), still(280.0, 0.0)]);
		assert_eq!(system.links(&motion).count(), 0);
	}
}
