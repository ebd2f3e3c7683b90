//! Temporal queries.
//!
//! A query is a strategy for extracting information from a temporal. The two
//! built-in queries read the hooks every [`TemporalAccessor`] exposes; callers
//! implement [`TemporalQuery`] for anything else.

use super::{ChronoUnit, Chronology, TemporalAccessor};

pub trait TemporalQuery {
    type Output;

    fn query_from(&self, temporal: &dyn TemporalAccessor) -> Self::Output;
}

/// Asks for the smallest unit a temporal represents.
#[derive(Debug, Clone, Copy, Default)]
pub struct Precision;

impl TemporalQuery for Precision {
    type Output = Option<ChronoUnit>;

    fn query_from(&self, temporal: &dyn TemporalAccessor) -> Self::Output {
        temporal.precision()
    }
}

/// Asks for the calendar system a temporal belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronologyQuery;

impl TemporalQuery for ChronologyQuery {
    type Output = Option<Chronology>;

    fn query_from(&self, temporal: &dyn TemporalAccessor) -> Self::Output {
        temporal.chronology()
    }
}
