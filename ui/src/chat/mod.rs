//! Discussion panel: question list, new question form, thread detail.

mod controller;
mod drawing;
mod sort;
mod view;

pub use controller::{
    ChatAlert, ChatAreaState, ChatController, ChatEvent, ChatMode, OpenThread,
};
pub use drawing::{DrawAction, DrawingOverlay};
pub use sort::{sort_questions, SortKey};
pub use view::ChatArea;
