use crate::config::{FillSpec, LIMIT_FILL};
use crate::error::{FlltError, Result};

/// Bound check for specs built in code. Start/end strings are opaque and
/// are not inspected.
pub fn validate_fill_spec(spec: &FillSpec) -> Result<()> {
    if spec.number > LIMIT_FILL {
        return Err(FlltError::Validation(format!(
            "number must be <= {LIMIT_FILL} (got {})",
            spec.number
        )));
    }
    Ok(())
}
