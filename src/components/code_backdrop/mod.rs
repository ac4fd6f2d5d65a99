//! Drifting code backdrop.
//!
//! Renders a full-viewport canvas behind the page with:
//! - Lines of code and shell commands drifting in slowly changing directions
//! - Soft glow around every label
//! - Gradient lines joining labels that drift close to each other
//! - A slight parallax shift following the pointer
//!
//! The animation pauses while the tab is hidden and can be torn down from
//! page scripts through `window.cleanupCodeBackground()`.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::code_backdrop::{CodeBackdrop, CONTAINER_ID};
//!
//! if let Some(backdrop) = CodeBackdrop::mount(CONTAINER_ID) {
//!     backdrop.expose_teardown(&web_sys::window().unwrap(), "cleanupCodeBackground");
//! }
//! ```

mod component;
pub mod motion;
mod particles;
mod render;
mod scheduler;
mod state;
mod surface;
pub mod theme;
mod types;

#[cfg(test)]
mod testing;

pub use component::{AnimationLoop, CATALOG_ID, CONTAINER_ID, CodeBackdrop, LoopPhase};
pub use motion::MotionConfig;
pub use particles::{Link, Particle, ParticleSystem};
pub use render::{LinkStroke, Painter, TextPass, render};
pub use scheduler::{FrameCallback, FrameScheduler, RafScheduler};
pub use state::{BackdropState, PointerOffset};
pub use surface::{CanvasSurface, Surface};
pub use theme::Theme;
pub use types::{Catalog, Category, Snippet};
