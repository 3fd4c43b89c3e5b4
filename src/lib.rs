//! Analytic geometry for the classical NACA airfoil families.
//!
//! Sections are built either directly from their numeric parameters (see
//! [`airfoil::four_digit::FourDigitSection`] and [`airfoil::six_series::SixSeriesSection`]) or
//! from a designation string through [`factory::create`]. Every section exposes its upper and
//! lower surfaces, camber line and surface slopes through the [`airfoil::Airfoil`] trait.

pub mod airfoil;
pub mod algorithms;
pub mod errors;
pub mod factory;
pub mod serialize;
pub mod spline;

pub use airfoil::{Airfoil, AirfoilGeometry, Slope};
pub use errors::{NacaError, Result};
pub use factory::{create, NacaAirfoil};
