//! Who is using the client.

use super::platform::read_setting;

const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Name attached to questions, replies and likes.
    pub display_name: String,
    /// Instructors may endorse answers and enter managing mode.
    pub is_instructor: bool,
}

impl Session {
    pub fn new(display_name: impl Into<String>, is_instructor: bool) -> Self {
        Self {
            display_name: display_name.into(),
            is_instructor,
        }
    }

    /// Load from `localStorage` (web) or `SLIDECHAT_USER` / `SLIDECHAT_ROLE` (native).
    pub fn load() -> Self {
        let display_name = read_setting("slidechat.displayName", "SLIDECHAT_USER")
            .unwrap_or_else(|| ANONYMOUS.to_string());
        let is_instructor = read_setting("slidechat.role", "SLIDECHAT_ROLE")
            .map(|role| role.trim().eq_ignore_ascii_case("instructor"))
            .unwrap_or(false);
        Self::new(display_name, is_instructor)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ANONYMOUS, false)
    }
}
