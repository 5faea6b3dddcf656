mod course;
mod home;
mod slide;

pub use course::Course;
pub use home::Home;
pub use slide::{Slide, SlideQuestion};
