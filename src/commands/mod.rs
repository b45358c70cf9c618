pub mod floyd_jupyter;
pub mod setup_courses;
