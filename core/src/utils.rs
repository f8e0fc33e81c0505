use crate::error::{KochError, Result};

// Highest order accepted by the public operations.
// A snowflake of order 10 already has 3·4^10 + 1 = 3_145_729 points.
pub const MAX_ORDER: u32 = 10;

// Number of points in a Koch curve of the given order: 4^n + 1.
// None if it does not fit in usize.
pub fn curve_point_count(order: u32) -> Option<usize> {
    4usize.checked_pow(order)?.checked_add(1)
}

// Number of points in a closed snowflake of the given order: 3·4^n + 1.
pub fn point_count(order: u32) -> Option<usize> {
    4usize.checked_pow(order)?.checked_mul(3)?.checked_add(1)
}

// Reject negative orders and orders above `max`.
pub fn validate_order(order: i32, max: u32) -> Result<u32> {
    let order = u32::try_from(order)
        .map_err(|_| KochError::invalid("order", format!("must be non-negative, got {order}")))?;
    if order > max {
        return Err(KochError::NumericOverflow { order, max });
    }
    Ok(order)
}

pub fn validate_size(size: f64) -> Result<f64> {
    if !size.is_finite() || size <= 0.0 {
        return Err(KochError::invalid(
            "size",
            format!("must be a positive finite number, got {size}"),
        ));
    }
    Ok(size)
}
