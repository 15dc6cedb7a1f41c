//! Data types used by the ranking pipeline.

use serde::Serialize;

/// One valid rating of one course, in long format.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub course_name: String,
    pub course_rating: f64,
}

impl LongRecord {
    pub fn new(course_name: impl Into<String>, course_rating: f64) -> Self {
        Self {
            course_name: course_name.into(),
            course_rating,
        }
    }
}

/// A row of the final ranking, serialized as
/// `rank,course_name,mean_rating,response_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCourse {
    pub rank: usize,
    pub course_name: String,
    /// Rounded to 4 decimal places.
    pub mean_rating: f64,
    pub response_count: usize,
}
