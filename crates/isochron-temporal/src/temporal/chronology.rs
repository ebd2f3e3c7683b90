use std::fmt;

use super::TemporalAccessor;

/// Calendar system identifier.
///
/// Only ISO arithmetic is implemented; other identifiers exist so that values
/// from foreign calendar systems can be recognised and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chronology {
    id: &'static str,
}

impl Chronology {
    /// The ISO-8601 proleptic Gregorian calendar.
    pub const ISO: Self = Self { id: "ISO" };

    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        self.id
    }

    #[must_use]
    pub fn is_iso(self) -> bool {
        self == Self::ISO
    }

    /// Returns the chronology a temporal reports, defaulting to ISO when it reports none.
    #[must_use]
    pub fn of_temporal(temporal: &dyn TemporalAccessor) -> Self {
        temporal.chronology().unwrap_or(Self::ISO)
    }
}

impl fmt::Display for Chronology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}
