/// Divide an 8-bit channel by a trail width, truncating
///
/// The result never exceeds `value`. A zero width yields zero instead of
/// panicking; configurations are expected to reject it earlier.
#[inline]
pub const fn dim8(value: u8, width: u8) -> u8 {
    match value.checked_div(width) {
        Some(dimmed) => dimmed,
        None => 0,
    }
}

/// Number of times `dim8` has to be applied before `value` reaches zero
///
/// Returns `None` for a non-zero value and a width below 2: a width of 1
/// never dims and a width of 0 is not a valid divisor.
pub const fn steps_to_black(mut value: u8, width: u8) -> Option<u32> {
    if value == 0 {
        return Some(0);
    }
    if width < 2 {
        return None;
    }
    let mut steps = 0;
    while value > 0 {
        value /= width;
        steps += 1;
    }
    Some(steps)
}
