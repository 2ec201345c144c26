pub mod platform;
pub mod prompt;
