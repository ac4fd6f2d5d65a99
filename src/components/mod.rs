//! Page effects.

pub mod code_backdrop;
pub mod dom;
pub mod events;
pub mod floating_dots;
pub mod nav;
pub mod skill_rings;
pub mod typing;
