//! Proportional partition of a coordinate sequence into per-day index ranges.
//!
//! Every day gets `floor(T / days)` points and the last day absorbs the
//! remainder. Ranges are inclusive, contiguous and never share an index.

use std::ops::RangeInclusive;

/// Inclusive index range of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub start: usize,
    pub end: usize,
}

impl DayRange {
    pub fn indices(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmentation {
    pub points_per_day: usize,
    /// One entry per declared day; `None` when that day has no coordinate.
    pub ranges: Vec<Option<DayRange>>,
}

impl Segmentation {
    pub fn is_last(&self, position: usize) -> bool {
        position + 1 == self.ranges.len()
    }
}

/// `day_count` of zero is treated as one day.
pub fn segment(total_points: usize, day_count: usize) -> Segmentation {
    let day_count = day_count.max(1);
    let points_per_day = total_points / day_count;

    let ranges = (0..day_count)
        .map(|i| {
            let start = i * points_per_day;
            let end_exclusive = if i + 1 == day_count {
                total_points
            } else {
                (i + 1) * points_per_day
            };
            (end_exclusive > start).then(|| DayRange {
                start,
                end: end_exclusive - 1,
            })
        })
        .collect();

    Segmentation {
        points_per_day,
        ranges,
    }
}
