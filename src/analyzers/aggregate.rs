use crate::analyzers::types::{LongRecord, RankedCourse};
use crate::analyzers::utility::{mean, round_half_even};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Decimal places kept on `mean_rating` in the output.
pub const MEAN_DECIMALS: i32 = 4;

/// Per-course totals before ranking. `mean_rating` is at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseAggregate {
    pub course_name: String,
    pub mean_rating: f64,
    pub response_count: usize,
}

/// Groups records by exact course name. Groups come out in name order.
pub fn group_by_course(records: &[LongRecord]) -> Vec<CourseAggregate> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.course_name.as_str())
            .or_default()
            .push(record.course_rating);
    }

    groups
        .into_iter()
        .map(|(name, ratings)| CourseAggregate {
            course_name: name.to_string(),
            mean_rating: mean(&ratings),
            response_count: ratings.len(),
        })
        .collect()
}

/// Highest mean first, then course name ascending.
fn ranking_order(a: &CourseAggregate, b: &CourseAggregate) -> Ordering {
    b.mean_rating
        .total_cmp(&a.mean_rating)
        .then_with(|| a.course_name.cmp(&b.course_name))
}

/// Aggregates long records into the final ranking.
///
/// Sorting uses the unrounded means; rounding to [`MEAN_DECIMALS`] happens
/// only once ranks are fixed. Ranks run 1..=k with no gaps, and equal means
/// get consecutive ranks in alphabetical order.
pub fn rank_courses(records: &[LongRecord]) -> Vec<RankedCourse> {
    let mut aggregates = group_by_course(records);
    aggregates.sort_by(ranking_order);

    aggregates
        .into_iter()
        .enumerate()
        .map(|(i, agg)| {
            debug!(
                rank = i + 1,
                course = %agg.course_name,
                mean = agg.mean_rating,
                count = agg.response_count,
                "Ranked course"
            );
            RankedCourse {
                rank: i + 1,
                course_name: agg.course_name,
                mean_rating: round_half_even(agg.mean_rating, MEAN_DECIMALS),
                response_count: agg.response_count,
            }
        })
        .collect()
}
