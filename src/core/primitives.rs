use crate::error::{RulerError, RulerResult};

/// Expresses `value` as a percentage of `total_height`.
pub fn percent_of_height(value: f64, total_height: f64) -> RulerResult<f64> {
    if !total_height.is_finite() || total_height <= 0.0 {
        return Err(RulerError::InvalidData(
            "total height must be finite and > 0".to_owned(),
        ));
    }
    Ok((value / total_height) * 100.0)
}
