// Prompt transformation: template resolution, slot filling and platform wire formats.
// Pure and synchronous; persistence of results happens in the handlers.

pub mod extract;
pub mod handlers;
pub mod options;
pub mod platform;
pub mod transformer;

pub use transformer::{TemplateSelection, TransformError, Transformer};
