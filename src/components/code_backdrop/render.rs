//! Frame rendering for the code backdrop.
//!
//! A frame is drawn in two passes:
//! 1. Labels, in catalog order, each as a few low-alpha glow passes followed
//!    by one full-alpha pass.
//! 2. Connection lines between every close pair, fading from a palette colour
//!    to transparent.
//!
//! Drawing goes through the [`Painter`] trait so frames can be captured
//! without a browser.

use fastrand::Rng;
use web_sys::CanvasRenderingContext2d;

use super::motion::MotionConfig;
use super::state::BackdropState;
use super::theme::Theme;

/// One `fillText` call with its styling.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPass<'a> {
	/// Label text.
	pub text: &'a str,
	/// Left edge of the text.
	pub x: f64,
	/// Vertical middle of the text.
	pub y: f64,
	/// CSS font.
	pub font: &'a str,
	/// CSS fill colour.
	pub color: String,
	/// Global alpha of the pass.
	pub alpha: f64,
	/// Shadow blur radius.
	pub shadow_blur: f64,
	/// CSS shadow colour.
	pub shadow_color: String,
}

/// A straight line stroked with a two-stop linear gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkStroke {
	/// Start point, where the gradient is opaque.
	pub from: (f64, f64),
	/// End point, where the gradient fades out.
	pub to: (f64, f64),
	/// CSS colour of the first gradient stop.
	pub start_color: String,
	/// CSS colour of the last gradient stop.
	pub end_color: String,
	/// Global alpha of the stroke.
	pub alpha: f64,
	/// Line width.
	pub width: f64,
}

/// Drawing sink for a frame.
pub trait Painter {
	/// Erase the `width` x `height` area from the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill one text pass.
	fn text(&mut self, pass: &TextPass<'_>);
	/// Stroke one connection line.
	fn link(&mut self, stroke: &LinkStroke);
	/// Drop shadows and restore full alpha.
	fn reset(&mut self);
}

/// Renders one complete frame of the backdrop.
pub fn render<P: Painter + ?Sized>(
	state: &BackdropState,
	painter: &mut P,
	motion: &MotionConfig,
	theme: &Theme,
	rng: &mut Rng,
) {
	painter.clear(state.width, state.height);

	draw_labels(state, painter, motion, theme);
	painter.reset();

	draw_links(state, painter, motion, theme, rng);
	painter.reset();
}

fn draw_labels<P: Painter + ?Sized>(
	state: &BackdropState,
	painter: &mut P,
	motion: &MotionConfig,
	theme: &Theme,
) {
	for p in state.particles.iter() {
		let font = theme.font_for(p.category);
		let color = theme.palette(p.category).get(p.color_index());
		let (x, y) = state.drawn_position(p, motion);

		let glow_pass = TextPass {
			text: &p.text,
			x,
			y,
			font: &font,
			color: color.to_css(),
			alpha: p.opacity() * theme.glow_alpha,
			shadow_blur: theme.glow_blur,
			shadow_color: color.to_css(),
		};
		for _ in 0..theme.glow_passes {
			painter.text(&glow_pass);
		}

		painter.text(&TextPass {
			alpha: p.opacity(),
			shadow_blur: theme.main_blur,
			shadow_color: color.to_css_alpha_byte(theme.main_shadow_alpha),
			..glow_pass
		});
	}
}

fn draw_links<P: Painter + ?Sized>(
	state: &BackdropState,
	painter: &mut P,
	motion: &MotionConfig,
	theme: &Theme,
	rng: &mut Rng,
) {
	let particles = &state.particles.particles;

	for link in state.particles.links(motion) {
		let color = theme.code.pick(rng);
		let alpha = link.strength * theme.link_intensity;
		let (a, b) = (&particles[link.from], &particles[link.to]);

		painter.link(&LinkStroke {
			from: (a.x, a.y),
			to: (b.x, b.y),
			start_color: color.to_css_alpha(alpha),
			end_color: color.to_css_alpha_byte(0),
			alpha,
			width: theme.link_width,
		});
	}
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn text(&mut self, pass: &TextPass<'_>) {
		self.set_font(pass.font);
		self.set_text_align("left");
		self.set_text_baseline("middle");
		self.set_shadow_blur(pass.shadow_blur);
		self.set_shadow_color(&pass.shadow_color);
		self.set_global_alpha(pass.alpha);
		self.set_fill_style_str(&pass.color);
		let _ = self.fill_text(pass.text, pass.x, pass.y);
	}

	fn link(&mut self, stroke: &LinkStroke) {
		let (x1, y1) = stroke.from;
		let (x2, y2) = stroke.to;
		let gradient = self.create_linear_gradient(x1, y1, x2, y2);
		let _ = gradient.add_color_stop(0.0, &stroke.start_color);
		let _ = gradient.add_color_stop(1.0, &stroke.end_color);

		#[allow(deprecated)]
		self.set_stroke_style(&gradient);
		self.set_line_width(stroke.width);
		self.set_global_alpha(stroke.alpha);

		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}

	fn reset(&mut self) {
		self.set_shadow_blur(0.0);
		self.set_global_alpha(1.0);
	}
}
