use std::fmt;

/// Standard units of time, used as the answer to a precision query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChronoUnit {
    Nanos,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
    Forever,
}

impl ChronoUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nanos => "Nanos",
            Self::Seconds => "Seconds",
            Self::Minutes => "Minutes",
            Self::Hours => "Hours",
            Self::Days => "Days",
            Self::Weeks => "Weeks",
            Self::Months => "Months",
            Self::Years => "Years",
            Self::Forever => "Forever",
        }
    }

    /// Returns whether the unit is a date unit (days or longer, excluding `Forever`).
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::Days | Self::Weeks | Self::Months | Self::Years
        )
    }
}

impl fmt::Display for ChronoUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
