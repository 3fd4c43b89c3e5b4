//! Thickness mapping tables for the 6-series profiles. Each profile is described by the angles
//! (phi, epsilon) of a conformal mapping and the radial coordinate psi sampled at the same phi.

use crate::errors::{NacaError, Result};
use crate::spline::CubicSpline;
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};

mod series63;
mod series64;
mod series66;

/// Smallest table which still leaves room for the leading edge ellipse blend
pub const MIN_TABLE_LEN: usize = 12;

/// The 6-series profiles whose mapping tables are bundled with the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    Series63,
    Series64,
    Series66,
}

impl Profile {
    /// Selects a profile from the second digit of a 6-series designation
    pub fn from_digit(digit: u32) -> Result<Profile> {
        match digit {
            3 => Ok(Profile::Series63),
            4 => Ok(Profile::Series64),
            6 => Ok(Profile::Series66),
            5 | 7 => Err(NacaError::UnsupportedProfile(format!("6{}", digit))),
            _ => Err(NacaError::InvalidDesignation(format!("6{}", digit))),
        }
    }

    /// The two character profile code used in designations
    pub fn code(&self) -> &'static str {
        match self {
            Profile::Series63 => "63",
            Profile::Series64 => "64",
            Profile::Series66 => "66",
        }
    }

    /// Whether the 6A-series variant of this profile exists
    pub fn has_a_series(&self) -> bool {
        matches!(self, Profile::Series63 | Profile::Series64)
    }

    /// The mapping tables of this profile. They are built once per process and shared.
    pub fn tables(&self) -> Result<&'static ProfileTables> {
        static SERIES_63: OnceCell<ProfileTables> = OnceCell::new();
        static SERIES_64: OnceCell<ProfileTables> = OnceCell::new();
        static SERIES_66: OnceCell<ProfileTables> = OnceCell::new();

        match self {
            Profile::Series63 => SERIES_63.get_or_try_init(|| {
                ProfileTables::from_psi_table(
                    &series63::PHI,
                    &series63::EPSILON,
                    &series63::PSI_PHI,
                    &series63::PSI,
                )
            }),
            Profile::Series64 => SERIES_64.get_or_try_init(|| {
                ProfileTables::from_psi_table(
                    &series64::PHI,
                    &series64::EPSILON,
                    &series64::PSI_PHI,
                    &series64::PSI,
                )
            }),
            Profile::Series66 => SERIES_66.get_or_try_init(|| {
                ProfileTables::from_psi_table(
                    &series66::PHI,
                    &series66::EPSILON,
                    &series66::PSI_PHI,
                    &series66::PSI,
                )
            }),
        }
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The (phi, epsilon, psi) mapping of a 6-series thickness distribution, all three index aligned
/// and with phi increasing from the leading edge (0) to the trailing edge (pi).
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTables {
    phi: Vec<f64>,
    epsilon: Vec<f64>,
    psi: Vec<f64>,
}

impl ProfileTables {
    pub fn new(phi: Vec<f64>, epsilon: Vec<f64>, psi: Vec<f64>) -> Result<Self> {
        if phi.len() < MIN_TABLE_LEN || phi.len() != epsilon.len() || phi.len() != psi.len() {
            return Err(NacaError::NotEnoughPoints);
        }

        Ok(ProfileTables { phi, epsilon, psi })
    }

    /// Builds the tables when psi is tabulated against its own set of angles. Psi is splined
    /// from `(psi_phi, psi_values)` and sampled at every entry of `phi`.
    pub fn from_psi_table(
        phi: &[f64],
        epsilon: &[f64],
        psi_phi: &[f64],
        psi_values: &[f64],
    ) -> Result<Self> {
        let spline = CubicSpline::new(psi_phi.to_vec(), psi_values.to_vec())?;
        let psi = phi.iter().map(|p| spline.value(*p)).collect();
        Self::new(phi.to_vec(), epsilon.to_vec(), psi)
    }

    pub fn len(&self) -> usize {
        self.phi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phi.is_empty()
    }

    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    pub fn epsilon(&self) -> &[f64] {
        &self.epsilon
    }

    pub fn psi(&self) -> &[f64] {
        &self.psi
    }
}
