use thiserror::Error;

pub type Result<T> = std::result::Result<T, NacaError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NacaError {
    #[error("invalid NACA designation: {0:?}")]
    InvalidDesignation(String),

    #[error("Unknown camber code: {0}")]
    UnknownCamberCode(u32),

    /// A 6-series profile whose (phi, eps, psi) tables are not bundled with the crate. Sections
    /// of this profile can still be built from user supplied tables.
    #[error("no thickness tables bundled for the NACA {0} profile")]
    UnsupportedProfile(String),

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("not enough points")]
    NotEnoughPoints,
}

impl NacaError {
    /// Checks that a construction parameter is strictly positive
    pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
        if value > 0.0 && value.is_finite() {
            Ok(value)
        } else {
            Err(NacaError::InvalidParameter { name, value })
        }
    }

    /// Checks that a chordwise location lies strictly inside the chord
    pub(crate) fn require_fraction(name: &'static str, value: f64) -> Result<f64> {
        if value > 0.0 && value < 1.0 {
            Ok(value)
        } else {
            Err(NacaError::InvalidParameter { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camber_code_message() {
        let e = NacaError::UnknownCamberCode(99);
        assert_eq!("Unknown camber code: 99", e.to_string());
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(Ok(0.12), NacaError::require_positive("thickness", 0.12));
        assert!(NacaError::require_positive("chord", 0.0).is_err());
        assert!(NacaError::require_positive("chord", f64::NAN).is_err());
    }
}
