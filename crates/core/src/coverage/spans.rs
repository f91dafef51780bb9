//! Disjoint coverage spans built from presence intervals
//!
//! Overlapping and touching intervals are coalesced once per week so that
//! sampling can walk the spans with a forward-only cursor instead of testing
//! every interval at every sample.

use chrono::{DateTime, Utc};
use geofleet_domain::PresenceInterval;

/// Closed span `[start, end]` during which at least one vehicle is present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Sorted, disjoint coverage spans for one set of intervals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageSpans {
    spans: Vec<CoverageSpan>,
}

impl CoverageSpans {
    /// Merge intervals into sorted disjoint closed spans.
    ///
    /// Spans that overlap or share an endpoint collapse into one.
    pub fn from_intervals<'a, I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = &'a PresenceInterval>,
    {
        let mut spans: Vec<CoverageSpan> = intervals
            .into_iter()
            .map(|i| CoverageSpan { start: i.enter_time(), end: i.exit_time() })
            .collect();

        if spans.is_empty() {
            return Self { spans };
        }

        spans.sort_unstable_by_key(|s| s.start);

        let mut write = 0;
        for read in 1..spans.len() {
            let next = spans[read];
            if next.start <= spans[write].end {
                if next.end > spans[write].end {
                    spans[write].end = next.end;
                }
            } else {
                write += 1;
                spans[write] = next;
            }
        }
        spans.truncate(write + 1);

        debug_assert!(
            spans.windows(2).all(|w| w[0].end < w[1].start),
            "merged coverage spans must be disjoint and sorted"
        );

        Self { spans }
    }

    pub fn as_slice(&self) -> &[CoverageSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Cursor for querying instants in ascending order
    pub fn cursor(&self) -> SpanCursor<'_> {
        SpanCursor { spans: &self.spans, index: 0 }
    }
}

/// Forward-only cursor over [`CoverageSpans`].
///
/// Queries must be issued in non-decreasing time order; an earlier instant
/// after a later one may report a false negative.
#[derive(Debug)]
pub struct SpanCursor<'a> {
    spans: &'a [CoverageSpan],
    index: usize,
}

impl SpanCursor<'_> {
    /// Whether `instant` falls inside a span (both bounds inclusive)
    pub fn covers(&mut self, instant: DateTime<Utc>) -> bool {
        while self.index < self.spans.len() && self.spans[self.index].end < instant {
            self.index += 1;
        }
        self.spans.get(self.index).is_some_and(|span| span.start <= instant)
    }
}
