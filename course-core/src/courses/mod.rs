pub mod course;
pub mod course_db;
pub mod error;
pub mod query;
pub mod seed;

pub use course::{Course, CourseFields, CourseId};
pub use course_db::CourseDB;
pub use error::CourseError;
pub use query::{ListQuery, Listing};
