use serde::{Deserialize, Serialize};

use crate::date::{days_between_inclusive, CalendarDate};

/// inclusive date range `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl DateRange {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Self {
        Self { start, end }
    }

    /// days covered, both endpoints included
    pub fn days(&self) -> u32 {
        days_between_inclusive(self.start, self.end)
    }
}

/// walks a range in consecutive pieces that never cross a boundary
///
/// each piece runs from the cursor to the boundary containing it, clamped
/// to the range end. cloning restarts the walk from the current position.
#[derive(Debug, Clone)]
pub struct Segments {
    cursor: Option<CalendarDate>,
    end: CalendarDate,
    boundary: Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    HalfYear,
    CalendarYear,
}

impl Boundary {
    fn end_of(self, date: CalendarDate) -> CalendarDate {
        match self {
            Boundary::HalfYear => date.half_year_end(),
            Boundary::CalendarYear => date.year_end(),
        }
    }
}

impl Segments {
    /// pieces aligned to 01-01..30-06 and 01-07..31-12
    pub fn half_years(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            cursor: Some(start),
            end,
            boundary: Boundary::HalfYear,
        }
    }

    /// pieces aligned to calendar years
    pub fn calendar_years(start: CalendarDate, end: CalendarDate) -> Self {
        Self {
            cursor: Some(start),
            end,
            boundary: Boundary::CalendarYear,
        }
    }
}

impl Iterator for Segments {
    type Item = DateRange;

    fn next(&mut self) -> Option<DateRange> {
        let start = self.cursor.filter(|c| *c <= self.end)?;
        let end = self.boundary.end_of(start).min(self.end);
        self.cursor = end.next_day();
        Some(DateRange::new(start, end))
    }
}

/// split `[start, end]` into half-year pieces; empty when `start > end`
pub fn split_half_years(start: CalendarDate, end: CalendarDate) -> Segments {
    Segments::half_years(start, end)
}

/// split a range at 31-12 / 01-01 boundaries
pub fn split_calendar_years(range: DateRange) -> Segments {
    Segments::calendar_years(range.start, range.end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(text: &str) -> CalendarDate {
        CalendarDate::parse(text).unwrap()
    }

    fn render(segments: Segments) -> Vec<String> {
        segments.map(|r| format!("{}..{}", r.start, r.end)).collect()
    }

    #[test]
    fn test_single_day() {
        let d = date("29-02-2024");
        assert_eq!(render(split_half_years(d, d)), vec!["29-02-2024..29-02-2024"]);
    }

    #[test]
    fn test_within_one_half_year() {
        let pieces = render(split_half_years(date("01-01-2023"), date("30-06-2023")));
        assert_eq!(pieces, vec!["01-01-2023..30-06-2023"]);
    }

    #[test]
    fn test_multi_year_split() {
        let pieces = render(split_half_years(date("15-05-2021"), date("10-02-2023")));
        assert_eq!(
            pieces,
            vec![
                "15-05-2021..30-06-2021",
                "01-07-2021..31-12-2021",
                "01-01-2022..30-06-2022",
                "01-07-2022..31-12-2022",
                "01-01-2023..10-02-2023",
            ]
        );
    }

    #[test]
    fn test_boundary_straddle() {
        let pieces = render(split_half_years(date("30-06-2022"), date("01-07-2022")));
        assert_eq!(
            pieces,
            vec![
                "30-06-2022..30-06-2022",
                "01-07-2022..01-07-2022",
            ]
        );
    }

    #[test]
    fn test_pieces_are_contiguous_and_cover_range() {
        let start = date("17-08-2009");
        let end = date("03-03-2024");
        let pieces: Vec<DateRange> = split_half_years(start, end).collect();

        assert_eq!(pieces.first().unwrap().start, start);
        assert_eq!(pieces.last().unwrap().end, end);
        for pair in pieces.windows(2) {
            assert_eq!(pair[0].end.next_day(), Some(pair[1].start));
        }
        for p in &pieces {
            assert!(p.start <= p.end);
            assert_eq!(p.start.half_year_end(), p.end.half_year_end());
        }

        let total: u32 = pieces.iter().map(DateRange::days).sum();
        assert_eq!(total, DateRange::new(start, end).days());
    }

    #[test]
    fn test_restartable() {
        let segments = split_half_years(date("01-03-2020"), date("01-03-2022"));
        let first: Vec<DateRange> = segments.clone().collect();
        let second: Vec<DateRange> = segments.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 5);
    }

    #[test]
    fn test_empty_when_reversed() {
        assert_eq!(split_half_years(date("02-01-2020"), date("01-01-2020")).count(), 0);
    }

    #[test]
    fn test_calendar_year_split() {
        let range = DateRange::new(date("20-12-2023"), date("05-01-2024"));
        let pieces = render(split_calendar_years(range));
        assert_eq!(
            pieces,
            vec![
                "20-12-2023..31-12-2023",
                "01-01-2024..05-01-2024",
            ]
        );

        let inside = DateRange::new(date("01-07-2023"), date("31-12-2023"));
        assert_eq!(split_calendar_years(inside).count(), 1);
    }
}
