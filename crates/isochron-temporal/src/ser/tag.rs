use std::fmt;

use super::error::SerError;

/// Wire identifiers of the serializable value types.
///
/// Tags are permanent: a tag is never renumbered or reused, and new types are
/// appended after [`TypeTag::Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeTag {
    Duration = 1,
    Instant = 2,
    LocalDate = 3,
    LocalTime = 4,
    LocalDateTime = 5,
    ZonedDateTime = 6,
    ZoneRegion = 7,
    ZoneOffset = 8,
    OffsetTime = 9,
    OffsetDateTime = 10,
    Year = 11,
    YearMonth = 12,
    MonthDay = 13,
    Period = 14,
}

impl TypeTag {
    pub const ALL: [Self; 14] = [
        Self::Duration,
        Self::Instant,
        Self::LocalDate,
        Self::LocalTime,
        Self::LocalDateTime,
        Self::ZonedDateTime,
        Self::ZoneRegion,
        Self::ZoneOffset,
        Self::OffsetTime,
        Self::OffsetDateTime,
        Self::Year,
        Self::YearMonth,
        Self::MonthDay,
        Self::Period,
    ];

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Duration),
            2 => Some(Self::Instant),
            3 => Some(Self::LocalDate),
            4 => Some(Self::LocalTime),
            5 => Some(Self::LocalDateTime),
            6 => Some(Self::ZonedDateTime),
            7 => Some(Self::ZoneRegion),
            8 => Some(Self::ZoneOffset),
            9 => Some(Self::OffsetTime),
            10 => Some(Self::OffsetDateTime),
            11 => Some(Self::Year),
            12 => Some(Self::YearMonth),
            13 => Some(Self::MonthDay),
            14 => Some(Self::Period),
            _ => None,
        }
    }

    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Duration => "Duration",
            Self::Instant => "Instant",
            Self::LocalDate => "LocalDate",
            Self::LocalTime => "LocalTime",
            Self::LocalDateTime => "LocalDateTime",
            Self::ZonedDateTime => "ZonedDateTime",
            Self::ZoneRegion => "ZoneRegion",
            Self::ZoneOffset => "ZoneOffset",
            Self::OffsetTime => "OffsetTime",
            Self::OffsetDateTime => "OffsetDateTime",
            Self::Year => "Year",
            Self::YearMonth => "YearMonth",
            Self::MonthDay => "MonthDay",
            Self::Period => "Period",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.type_name(), self.as_u8())
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = SerError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_u8(tag).ok_or(SerError::CorruptStream { tag })
    }
}
