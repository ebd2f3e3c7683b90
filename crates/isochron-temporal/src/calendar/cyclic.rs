//! Modular stepping over a closed, ordered set of `count` members.

/// Returns the ordinal `amount` steps after `ordinal`, wrapping around.
///
/// `rem_euclid` keeps the reduced step in `[0, count)` for every `i64`,
/// including `i64::MIN`.
#[expect(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    reason = "count is 7 or 12 and the reduced step lies in [0, count)"
)]
pub(crate) const fn advance(ordinal: usize, amount: i64, count: usize) -> usize {
    let step = amount.rem_euclid(count as i64) as usize;
    (ordinal + step) % count
}

/// Returns the ordinal `amount` steps before `ordinal`, wrapping around.
///
/// The amount is reduced before it is negated, so `i64::MIN` never overflows.
#[expect(
    clippy::cast_possible_wrap,
    reason = "count is 7 or 12"
)]
pub(crate) const fn retreat(ordinal: usize, amount: i64, count: usize) -> usize {
    advance(ordinal, -(amount % count as i64), count)
}
