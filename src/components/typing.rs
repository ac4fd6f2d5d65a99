//! Typewriter effect for the hero code block.
//!
//! Types a syntax-highlighted line one character at a time, holds it, deletes
//! it, then moves on to the next line, forever. Highlighting markup is never
//! cut in half: tags are copied whole and only text characters are counted.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// One line of code: the plain text and its highlighted markup.
#[derive(Clone, Debug, PartialEq)]
pub struct CodeLine {
	/// Plain text; its characters are what gets counted.
	pub text: String,
	/// Same text wrapped in highlighting spans.
	pub html: String,
}

impl CodeLine {
	/// Line from its plain and highlighted forms.
	pub fn new(text: impl Into<String>, html: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			html: html.into(),
		}
	}
}

/// Delays between steps, in milliseconds.
#[derive(Clone, Debug)]
pub struct Pacing {
	/// Delay after each typed character.
	pub type_ms: u32,
	/// Delay after each deleted character.
	pub delete_ms: u32,
	/// Pause with the full line shown.
	pub hold_ms: u32,
	/// Pause with an empty line before typing the next one.
	pub next_line_ms: u32,
	/// Delay before the very first character.
	pub start_ms: u32,
}

impl Default for Pacing {
	fn default() -> Self {
		Self {
			type_ms: 50,
			delete_ms: 30,
			hold_ms: 2000,
			next_line_ms: 500,
			start_ms: 1000,
		}
	}
}

/// Result of one typewriter step.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
	/// Markup to display now.
	pub html: String,
	/// Wait before the next step.
	pub delay_ms: u32,
}

/// Typing state machine.
#[derive(Clone, Debug)]
pub struct TypeWriter {
	lines: Vec<CodeLine>,
	pacing: Pacing,
	current: usize,
	shown: usize,
	deleting: bool,
}

impl TypeWriter {
	/// Writer positioned before the first character of the first line.
	pub fn new(lines: Vec<CodeLine>, pacing: Pacing) -> Self {
		Self {
			lines,
			pacing,
			current: 0,
			shown: 0,
			deleting: false,
		}
	}

	/// Delays in use.
	pub fn pacing(&self) -> &Pacing {
		&self.pacing
	}

	/// Index of the line being typed or deleted.
	pub fn current_line(&self) -> usize {
		self.current
	}

	/// Whether the current line is being erased.
	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Advance by one character and report what to show.
	pub fn step(&mut self) -> Step {
		let Some(line) = self.lines.get(self.current) else {
			return Step {
				html: String::new(),
				delay_ms: self.pacing.hold_ms,
			};
		};
		let len = line.text.chars().count();

		let mut delay_ms = if self.deleting {
			self.shown = self.shown.saturating_sub(1);
			self.pacing.delete_ms
		} else {
			self.shown += 1;
			self.pacing.type_ms
		};

		let html = if self.shown > 0 && self.shown <= len {
			visible_html(&line.html, self.shown)
		} else {
			String::new()
		};

		if !self.deleting && self.shown >= len {
			delay_ms = self.pacing.hold_ms;
			self.deleting = true;
		} else if self.deleting && self.shown == 0 {
			delay_ms = self.pacing.next_line_ms;
			self.deleting = false;
			self.current = (self.current + 1) % self.lines.len();
		}

		Step { html, delay_ms }
	}
}

/// Prefix of `html` containing `visible` text characters. Tags met along the
/// way are copied whole and do not count; the prefix stops right after the
/// last counted character, so closing tags past it are left out.
pub fn visible_html(html: &str, visible: usize) -> String {
	let mut out = String::new();
	let mut shown = 0;
	let mut chars = html.chars();

	while shown < visible {
		let Some(c) = chars.next() else {
			break;
		};
		out.push(c);
		if c == '<' {
			for t in chars.by_ref() {
				out.push(t);
				if t == '>' {
					break;
				}
			}
		} else if c != '>' {
			shown += 1;
		}
	}
	out
}

/// Lines of a small epoll server.
pub fn default_lines() -> Vec<CodeLine> {
	vec![
		CodeLine::new(
			"    pthread_t thread;",
			r#"    <span class="keyword">pthread_t</span> thread;"#,
		),
		CodeLine::new(
			"    pthread_create(&thread, NULL, handle_request, &client_fd);",
			r#"    <span class="function">pthread_create</span>(&thread, <span class="constant">NULL</span>, handle_request, &client_fd);"#,
		),
		CodeLine::new(
			"    // Non-blocking I/O server",
			r#"    <span class="comment">// Non-blocking I/O server</span>"#,
		),
		CodeLine::new(
			"    struct epoll_event event;",
			r#"    <span class="keyword">struct</span> <span class="type">epoll_event</span> event;"#,
		),
		CodeLine::new(
			"    event.events = EPOLLIN | EPOLLET;",
			r#"    event.events = <span class="constant">EPOLLIN</span> | <span class="constant">EPOLLET</span>;"#,
		),
		CodeLine::new(
			"    epoll_ctl(epfd, EPOLL_CTL_ADD, fd, &event);",
			r#"    <span class="function">epoll_ctl</span>(epfd, <span class="constant">EPOLL_CTL_ADD</span>, fd, &event);"#,
		),
		CodeLine::new(
			"    while (true) {",
			r#"    <span class="keyword">while</span> (<span class="constant">true</span>) {"#,
		),
		CodeLine::new(
			"        handle_connection();",
			r#"        <span class="function">handle_connection</span>();"#,
		),
		CodeLine::new("    }", "    }"),
	]
}

/// Start typing into the first `.typing-text` element. `None` if there is none.
pub fn install(document: &Document) -> Option<()> {
	let target = document.query_selector(".typing-text").ok()??;
	let writer = TypeWriter::new(default_lines(), Pacing::default());
	let start = writer.pacing().start_ms;
	schedule(Rc::new(RefCell::new(writer)), target, start);
	info!("typing: started");
	Some(())
}

fn schedule(writer: Rc<RefCell<TypeWriter>>, target: Element, delay_ms: u32) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let tick = Closure::once_into_js(move || {
		let step = writer.borrow_mut().step();
		target.set_inner_html(&step.html);
		schedule(writer, target, step.delay_ms);
	});
	let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
		tick.unchecked_ref(),
		delay_ms.min(i32::MAX as u32) as i32,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn writer(lines: &[(&str, &str)]) -> TypeWriter {
		TypeWriter::new(
			lines
				.iter()
				.map(|(text, html)| CodeLine::new(*text, *html))
				.collect(),
			Pacing::default(),
		)
	}

	#[test]
	fn tags_are_copied_whole() {
		let html = r#"    <span class="keyword">pthread_t</span> thread;"#;
		assert_eq!(visible_html(html, 0), "");
		assert_eq!(visible_html(html, 5), r#"    <span class="keyword">p"#);
		assert_eq!(visible_html(html, 13), r#"    <span class="keyword">pthread_t"#);
		assert_eq!(
			visible_html(html, 14),
			r#"    <span class="keyword">pthread_t</span> "#
		);
		assert_eq!(visible_html(html, 100), html);
	}

	#[test]
	fn types_holds_deletes_and_moves_on() {
		let mut w = writer(&[("ab", "<b>ab</b>"), ("c", "c")]);

		assert_eq!(
			w.step(),
			Step {
				html: "<b>a".into(),
				delay_ms: 50
			}
		);
		assert_eq!(
			w.step(),
			Step {
				html: "<b>ab".into(),
				delay_ms: 2000
			}
		);
		assert!(w.is_deleting());

		assert_eq!(
			w.step(),
			Step {
				html: "<b>a".into(),
				delay_ms: 30
			}
		);
		assert_eq!(
			w.step(),
			Step {
				html: String::new(),
				delay_ms: 500
			}
		);
		assert!(!w.is_deleting());
		assert_eq!(w.current_line(), 1);

		assert_eq!(w.step().delay_ms, 2000);
		assert_eq!(w.step().delay_ms, 500);
		assert_eq!(w.current_line(), 0);
	}

	#[test]
	fn empty_writer_idles() {
		let mut w = TypeWriter::new(Vec::new(), Pacing::default());
		assert_eq!(w.step().html, "");
	}

	#[test]
	fn default_lines_text_matches_markup() {
		for line in default_lines() {
			let n = line.text.chars().count();
			let plain = visible_html(&line.html, n);
			let stripped: String = {
				let mut inside = false;
				plain
					.chars()
					.filter(|&c| match c {
						'<' => {
							inside = true;
							false
						}
						'>' if inside => {
							inside = false;
							false
						}
						_ => !inside,
					})
					.collect()
			};
			assert_eq!(stripped, line.text);
		}
	}
}
