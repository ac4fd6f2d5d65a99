//! Catalog data structures used to seed the backdrop particles.

use serde::Deserialize;

/// Kind of snippet. Selects the font size and the colour palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
	/// Source code.
	#[default]
	Code,
	/// Shell commands.
	Terminal,
	/// Code comments.
	Comment,
}

/// A single line of text floating in the backdrop.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Snippet {
	/// Literal text rendered on the canvas.
	pub text: String,
	/// Snippet kind, serialized as `type` in catalog JSON.
	#[serde(rename = "type", default)]
	pub category: Category,
	/// Drift speed in pixels per frame.
	pub speed: f64,
}

impl Snippet {
	/// Snippet from its parts.
	pub fn new(text: impl Into<String>, category: Category, speed: f64) -> Self {
		Self {
			text: text.into(),
			category,
			speed,
		}
	}
}

/// Ordered list of snippets. One particle is created per entry.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Catalog {
	/// Entries in display order.
	pub snippets: Vec<Snippet>,
}

impl Catalog {
	/// Number of snippets.
	pub fn len(&self) -> usize {
		self.snippets.len()
	}

	/// Whether the catalog has no snippets.
	pub fn is_empty(&self) -> bool {
		self.snippets.is_empty()
	}

	/// Parse a catalog from its JSON form: `{ "snippets": [{ "text", "type", "speed" }] }`.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

impl Default for Catalog {
	fn default() -> Self {
		use Category::{Code, Comment, Terminal};

		let snippets = [
			// C/C++
			("void* handle_request(void* arg)", Code, 0.25),
			("std::vector<int> data;", Code, 0.3),
			("int main(int argc, char** argv)", Code, 0.28),
			("epoll_wait(epfd, events, MAX, -1)", Code, 0.27),
			("struct Block { uint256 hash; }", Code, 0.29),
			// Solidity
			("pragma solidity ^0.8.0;", Code, 0.32),
			("function deploy() public {", Code, 0.26),
			("contract Token { mapping(...) }", Code, 0.31),
			("await contract.deploy()", Code, 0.33),
			// Shell
			("$ docker-compose up -d", Terminal, 0.35),
			("$ git commit -m \"feat: add\"", Terminal, 0.3),
			("$ make && make install", Terminal, 0.34),
			("$ npm run build", Terminal, 0.36),
			("$ g++ -std=c++17 main.cpp", Terminal, 0.28),
			("$ npx hardhat compile", Terminal, 0.32),
			// SQL
			("SELECT * FROM transactions", Code, 0.29),
			("CREATE TABLE blocks (...)", Code, 0.27),
			("// High-performance backend", Comment, 0.31),
			("/* Blockchain node */", Comment, 0.28),
			("# Deploy smart contract", Comment, 0.33),
		];

		Self {
			snippets: snippets
				.into_iter()
				.map(|(text, category, speed)| Snippet::new(text, category, speed))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_catalog_mixes_all_categories() {
		let catalog = Catalog::default();
		assert_eq!(catalog.len(), 20);
		for category in [Category::Code, Category::Terminal, Category::Comment] {
			assert!(catalog.snippets.iter().any(|s| s.category == category));
		}
	}

	#[test]
	fn parses_catalog_json() {
		let catalog = Catalog::from_json(
			r#"{"snippets": [
				{"text": "$ cargo build", "type": "terminal", "speed": 0.3},
				{"text": "fn main() {}", "speed": 0.25}
			]}"#,
		)
		.unwrap();

		assert_eq!(catalog.len(), 2);
		assert_eq!(catalog.snippets[0].category, Category::Terminal);
		assert_eq!(catalog.snippets[1].category, Category::Code);
		assert_eq!(catalog.snippets[1].text, "fn main() {}");
	}

	#[test]
	fn rejects_unknown_category() {
		let err = Catalog::from_json(r#"{"snippets": [{"text": "x", "type": "banner", "speed": 1}]}"#);
		assert!(err.is_err());
	}
}
