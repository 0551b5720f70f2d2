//! Utility modules shared by the build, serve and render stages.

pub mod date;
pub mod html;
pub mod log;
pub mod minify;
pub mod slug;
