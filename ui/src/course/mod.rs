//! Course management panel: slides, uploads, instructors.

mod controller;
mod upload;
mod view;

pub use controller::{
    CourseAlert, CourseController, CourseEvent, CourseState, InstructorResult,
};
pub use upload::UploadFile;
pub use view::CoursePanel;
