//! Platform-agnostic building blocks shared by the discussion and course views.

pub mod format;
pub mod markdown;
pub mod platform;
pub mod session;
pub mod sink;
