use thiserror::Error;

/// Errors produced by the cosmology calculations.
///
/// Every failure mode here is a domain error: an input outside the
/// mathematical domain of the requested quantity. There is no I/O and no
/// resource exhaustion in this crate. Inputs are checked at the API
/// boundary before any computation, so a returned value is never NaN or
/// infinite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CosmologyError {
    /// A redshift below zero, i.e. before the present epoch.
    #[error("redshift must be non-negative, got {0}")]
    NegativeRedshift(f64),

    /// A quantity that must be strictly positive (volume, area, redshift
    /// slice width, particle mass) was zero or negative.
    #[error("{quantity} must be positive, got {value}")]
    NonPositive {
        quantity: &'static str,
        value: f64,
    },

    /// A density parameter outside the physical range [0, 1].
    #[error("{parameter} must lie in [0, 1], got {value}")]
    DensityOutOfRange {
        parameter: &'static str,
        value: f64,
    },
}

pub(crate) fn check_redshift(z: f64) -> Result<(), CosmologyError> {
    if z < 0.0 || z.is_nan() {
        return Err(CosmologyError::NegativeRedshift(z));
    }
    Ok(())
}

pub(crate) fn check_positive(quantity: &'static str, value: f64) -> Result<(), CosmologyError> {
    if !(value > 0.0) {
        return Err(CosmologyError::NonPositive { quantity, value });
    }
    Ok(())
}
