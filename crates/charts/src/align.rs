//! Mapping absolute timestamps onto bucket indices.

use crate::series::SeriesPoint;

/// Anything that sits at a timestamp (seconds) in an ascending series.
pub trait Bucketed {
    fn timestamp(&self) -> i64;
}

impl Bucketed for SeriesPoint {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl Bucketed for i64 {
    fn timestamp(&self) -> i64 {
        *self
    }
}

/// Index of the last bucket starting at or before `needle`.
///
/// A needle before the first bucket clamps to 0; callers buffer their query
/// range so this does not happen in practice. A needle at or past the last
/// bucket clamps to the last index. An empty series returns 0, so check
/// emptiness before indexing with the result.
pub fn nearest_bucket_index<T: Bucketed>(series: &[T], needle: i64) -> usize {
    match series.iter().position(|point| point.timestamp() > needle) {
        Some(0) => 0,
        Some(index) => index - 1,
        None => series.len().saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES: [i64; 3] = [0, 10, 20];

    #[test]
    fn needle_between_buckets_picks_earlier() {
        assert_eq!(nearest_bucket_index(&SERIES, 5), 0);
        assert_eq!(nearest_bucket_index(&SERIES, 15), 1);
    }

    #[test]
    fn needle_on_bucket_boundary() {
        assert_eq!(nearest_bucket_index(&SERIES, 10), 1);
        assert_eq!(nearest_bucket_index(&SERIES, 20), 2);
    }

    #[test]
    fn needle_past_end_clamps_to_last() {
        assert_eq!(nearest_bucket_index(&SERIES, 25), 2);
    }

    #[test]
    fn needle_before_start_clamps_to_first() {
        assert_eq!(nearest_bucket_index(&SERIES, -5), 0);
    }

    #[test]
    fn empty_and_single_bucket_series() {
        let empty: [i64; 0] = [];
        assert_eq!(nearest_bucket_index(&empty, 5), 0);
        assert_eq!(nearest_bucket_index(&[100i64], 50), 0);
        assert_eq!(nearest_bucket_index(&[100i64], 500), 0);
    }

    #[test]
    fn works_on_series_points() {
        let series = vec![
            SeriesPoint::new(60, &[1]),
            SeriesPoint::new(120, &[]),
            SeriesPoint::new(180, &[4]),
        ];
        assert_eq!(nearest_bucket_index(&series, 150), 1);
    }
}
