//! Course rating extraction and ranking.
//!
//! [`extract`] turns the wide survey sheet into long `(course, rating)`
//! records; [`aggregate`] groups them per course, ranks the courses by mean
//! rating and rounds the result for output.

pub mod aggregate;
pub mod extract;
pub mod types;
pub mod utility;
