// Template catalogue and intent matching.
// The registry is built once at startup and shared read-only through AppState.

pub mod catalogue;
pub mod handlers;
pub mod matcher;
pub mod registry;

pub use matcher::Matcher;
pub use registry::{Template, TemplateRegistry};
