//! Shared UI crate for SlideChat: the discussion and course panels, their
//! controllers, and the views the platform launchers route to.

pub mod chat;
pub mod core;
pub mod course;
pub mod i18n;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

#[cfg(test)]
mod tests;
