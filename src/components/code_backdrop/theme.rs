//! Visual theming for the code backdrop.
//!
//! Provides the per-category palettes, fonts, glow and link styling.

use super::types::Category;

/// An opaque RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Colour from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// `#rrggbb` form.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// `#rrggbbaa` form with an explicit alpha byte.
	pub fn to_css_alpha_byte(self, alpha: u8) -> String {
		format!("{}{:02x}", self.to_css(), alpha)
	}

	/// `#rrggbbaa` form. Alpha in `[0, 1]` is clamped and floored to a byte.
	pub fn to_css_alpha(self, alpha: f64) -> String {
		self.to_css_alpha_byte((alpha.clamp(0.0, 1.0) * 255.0).floor() as u8)
	}
}

/// An ordered colour palette. Indexing wraps around.
#[derive(Clone, Debug)]
pub struct Palette(pub Vec<Color>);

impl Palette {
	/// Vibrant blues and cyan for code lines.
	pub fn code() -> Self {
		Self(vec![
			Color::rgb(42, 122, 158), // Steel teal
			Color::rgb(0, 184, 212),  // Cyan
			Color::rgb(0, 217, 255),  // Electric cyan
			Color::rgb(29, 84, 108),  // Deep teal
			Color::rgb(74, 158, 212), // Sky
		])
	}

	/// Cyan and teal for shell commands.
	pub fn terminal() -> Self {
		Self(vec![
			Color::rgb(0, 217, 255),
			Color::rgb(42, 122, 158),
			Color::rgb(0, 184, 212),
		])
	}

	/// Softer blues for comments.
	pub fn comment() -> Self {
		Self(vec![
			Color::rgb(74, 158, 212),
			Color::rgb(42, 122, 158),
			Color::rgb(0, 184, 212),
		])
	}

	/// Colour at `index`, wrapping modulo the palette length.
	/// An empty palette yields neutral gray.
	pub fn get(&self, index: usize) -> Color {
		if self.0.is_empty() {
			return Color::rgb(128, 128, 128);
		}
		self.0[index % self.0.len()]
	}

	/// Uniformly random colour from the palette.
	pub fn pick(&self, rng: &mut fastrand::Rng) -> Color {
		self.get(rng.usize(..self.0.len().max(1)))
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Palette for code snippets. Connection lines pick from it too.
	pub code: Palette,
	/// Palette for shell commands.
	pub terminal: Palette,
	/// Palette for comments.
	pub comment: Palette,
	/// CSS font family of every label.
	pub font_family: &'static str,
	/// Number of low-alpha glow passes before the main pass.
	pub glow_passes: usize,
	/// Glow alpha as a fraction of the particle opacity.
	pub glow_alpha: f64,
	/// Shadow blur of the glow passes.
	pub glow_blur: f64,
	/// Shadow blur of the main pass.
	pub main_blur: f64,
	/// Alpha byte of the main pass shadow colour.
	pub main_shadow_alpha: u8,
	/// Line width of connection lines.
	pub link_width: f64,
	/// Connection line alpha at full strength.
	pub link_intensity: f64,
	/// CSS opacity of the whole canvas.
	pub surface_opacity: f64,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			code: Palette::code(),
			terminal: Palette::terminal(),
			comment: Palette::comment(),
			font_family: "\"JetBrains Mono\", monospace",
			glow_passes: 3,
			glow_alpha: 0.3,
			glow_blur: 15.0,
			main_blur: 8.0,
			main_shadow_alpha: 0x80,
			link_width: 1.5,
			link_intensity: 0.25,
			surface_opacity: 0.35,
		}
	}
}

impl Theme {
	/// Palette used for a category.
	pub fn palette(&self, category: Category) -> &Palette {
		match category {
			Category::Code => &self.code,
			Category::Terminal => &self.terminal,
			Category::Comment => &self.comment,
		}
	}

	/// CSS font for a category. Shell commands are set one pixel larger.
	pub fn font_for(&self, category: Category) -> String {
		let size = match category {
			Category::Terminal => 12,
			Category::Code | Category::Comment => 11,
		};
		format!("{}px {}", size, self.font_family)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn palette_index_wraps() {
		let palette = Palette::terminal();
		assert_eq!(palette.get(4), palette.get(1));
		assert_eq!(Palette(vec![]).get(3), Color::rgb(128, 128, 128));
	}

	#[test]
	fn css_forms() {
		let c = Color::rgb(0, 217, 255);
		assert_eq!(c.to_css(), "#00d9ff");
		assert_eq!(c.to_css_alpha(0.0), "#00d9ff00");
		assert_eq!(c.to_css_alpha_byte(0x80), "#00d9ff80");
		assert_eq!(c.to_css_alpha(2.0), "#00d9ffff");
	}

	#[test]
	fn alpha_is_floored_to_a_byte() {
		let c = Color::rgb(0, 217, 255);
		// A link 100px long: (1 - 100/280) * 0.25 * 255 = 40.98
		let alpha = (1.0 - 100.0 / 280.0) * 0.25;
		assert_eq!(c.to_css_alpha(alpha), "#00d9ff28");
		assert_eq!(c.to_css_alpha(0.5), "#00d9ff7f");
	}

	#[test]
	fn terminal_font_is_larger() {
		let theme = Theme::default();
		assert_eq!(
			theme.font_for(Category::Terminal),
			"12px \"JetBrains Mono\", monospace"
		);
		assert_eq!(
			theme.font_for(Category::Comment),
			"11px \"JetBrains Mono\", monospace"
		);
	}
}
