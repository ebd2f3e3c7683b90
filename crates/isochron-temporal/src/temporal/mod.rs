//! Field-based access to date/time-like values.
//!
//! Every value that can be read field by field implements [`TemporalAccessor`];
//! values that can also produce adjusted copies implement [`Temporal`]. The
//! calendrical enumerations read from and write into these traits without
//! knowing the concrete type on the other side.

mod chronology;
mod field;
mod query;
mod range;
mod unit;

pub use chronology::Chronology;
pub use field::{ChronoField, TemporalField};
pub use query::{ChronologyQuery, Precision, TemporalQuery};
pub use range::ValueRange;
pub use unit::ChronoUnit;

use crate::error::{TemporalError, TemporalResult};

/// Upcast helper so provided methods can hand `self` to caller-defined fields.
pub trait AsAccessor {
    fn as_accessor(&self) -> &dyn TemporalAccessor;
}

impl<T: TemporalAccessor> AsAccessor for T {
    fn as_accessor(&self) -> &dyn TemporalAccessor {
        self
    }
}

/// Read-only field access to a date/time-like value.
pub trait TemporalAccessor: AsAccessor {
    /// Returns whether `field` can be read from this value.
    fn is_supported(&self, field: &dyn TemporalField) -> bool;

    /// Reads `field` as a 64-bit value.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` for built-in fields this value does not have;
    /// caller-defined fields report their own errors.
    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64>;

    /// Returns the range of valid values for `field` within this value.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` for built-in fields this value does not have.
    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) if self.is_supported(field) => Ok(chrono.range()),
            Some(chrono) => Err(TemporalError::unsupported(chrono)),
            None => field.range_refined_by(self.as_accessor()),
        }
    }

    /// Reads `field` as a 32-bit value.
    ///
    /// ## Errors
    /// Returns `Overflow` when the field's range or value does not fit in `i32`,
    /// plus any error from [`TemporalAccessor::range`] or
    /// [`TemporalAccessor::get_long`].
    fn get(&self, field: &dyn TemporalField) -> TemporalResult<i32> {
        let range = self.range(field)?;
        let value = self.get_long(field)?;
        range.check_valid_int_value(value, field)
    }

    /// Precision hook read by [`Precision`].
    fn precision(&self) -> Option<ChronoUnit> {
        None
    }

    /// Calendar system hook read by [`ChronologyQuery`].
    fn chronology(&self) -> Option<Chronology> {
        None
    }

    /// Name of the concrete type, used in conversion errors.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn query<Q: TemporalQuery>(&self, query: &Q) -> Q::Output
    where
        Self: Sized,
    {
        query.query_from(self)
    }
}

/// A temporal that can produce adjusted copies of itself.
pub trait Temporal: TemporalAccessor + Sized {
    /// Returns a copy with `field` set to `value`.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` if the field cannot be set on this type, or
    /// `InvalidRange` if `value` is not valid for the field.
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self>;

    /// Returns a copy adjusted by `adjuster`.
    ///
    /// ## Errors
    /// Returns whatever the adjuster reports.
    fn with<A: TemporalAdjuster>(&self, adjuster: &A) -> TemporalResult<Self> {
        adjuster.adjust_into(self)
    }
}

/// Strategy for adjusting a temporal, implemented by the calendrical enumerations.
pub trait TemporalAdjuster {
    /// Returns an adjusted copy of `temporal`.
    ///
    /// ## Errors
    /// Returns an error if the adjustment cannot be applied to `temporal`.
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> TemporalResult<T>;
}
