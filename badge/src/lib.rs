//! Badge domain model: the title/value/color triple, the value resolver that
//! maps upstream entities into badges, and the SVG renderer.

mod badge;
mod color;
pub mod elapsed;
pub mod render;
mod resolver;

pub use badge::Badge;
pub use color::{Color, UnknownColor};
pub use render::{Style, render};
pub use resolver::{BoxError, ResolveError, Resolver};
