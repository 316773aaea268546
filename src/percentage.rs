//! Percentage split of an amount into retained and burned parts.

/// Upper bound (inclusive) for a burn percentage.
pub const MAX_PERCENTAGE: u32 = 100;

/// Check that a percentage lies in `[0, 100]`.
#[inline]
pub fn is_valid_percentage(percent: u32) -> bool {
    percent <= MAX_PERCENTAGE
}

/// Split `total` into `(remainder, burned)`.
///
/// `burned = floor(total * percent / 100)` and `remainder = total - burned`.
/// `total` must be non-negative and `percent` must already be validated.
///
/// The multiply is carried out in `u128` on the quotient and remainder of
/// `total / 100`, so the result is exact for every non-negative `i128`
/// without the intermediate `total * percent` ever being formed.
pub fn split(total: i128, percent: u32) -> (i128, i128) {
    debug_assert!(total >= 0);
    debug_assert!(is_valid_percentage(percent));

    let wide = total as u128;
    let pct = percent as u128;
    let divisor = MAX_PERCENTAGE as u128;

    // total = divisor * whole + rest, with rest < 100
    let whole = wide / divisor;
    let rest = wide % divisor;
    let burned = (whole * pct + rest * pct / divisor) as i128;

    (total - burned, burned)
}
