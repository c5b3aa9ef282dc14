use crate::errors::GatewayError;

/// Parse the `nb` query parameter.
///
/// Absent or blank uses `default`; values above `max` are clamped.
/// Anything that is not a positive integer is rejected.
pub fn parse_count(raw: Option<&str>, default: u32, max: u32) -> Result<u32, GatewayError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default.min(max));
    };

    match raw.parse::<u32>() {
        Ok(0) | Err(_) => Err(GatewayError::Validation(format!(
            "nb must be a positive integer, got '{}'",
            raw
        ))),
        Ok(n) => Ok(n.min(max)),
    }
}
