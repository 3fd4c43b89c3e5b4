//! The NACA 4-digit family: 4-digit, modified 4-digit, 16-series and 5-digit sections. Every
//! member is a combination of a [`ThicknessLaw`] and a [`MeanLine`] run through the same
//! generation pass.

use super::camber::{FiveDigitFactors, MeanLine};
use super::thickness::{ModifiedThickness, Ordinate, ThicknessLaw, REFERENCE_THICKNESS};
use super::{chord_suffix, percent_digits, Airfoil, AirfoilGeometry, Station, EPS};
use crate::errors::{NacaError, Result};
use ncollide2d::na::Point2;
use once_cell::sync::OnceCell;
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Base chordwise step of the generation pass
const DX: f64 = 0.01;

/// First station aft of the leading edge
const FIRST_STATION: f64 = 0.00025;

/// Fraction of the base step used at `x`, fine near the nose to resolve its curvature
fn step_fraction(x: f64) -> f64 {
    if x <= 0.0124 {
        0.025
    } else if x <= 0.0975 {
        0.25
    } else {
        1.0
    }
}

/// A section of the NACA 4-digit family. The thickness law and mean line together determine which
/// member of the family it is, the generation pass is shared by all of them.
#[derive(Debug)]
pub struct FourDigitSection {
    toc: f64,
    chord: f64,
    thickness: ThicknessLaw,
    mean_line: MeanLine,
    geometry: OnceCell<AirfoilGeometry>,
}

impl FourDigitSection {
    fn build(toc: f64, chord: f64, thickness: ThicknessLaw, mean_line: MeanLine) -> Result<Self> {
        Ok(FourDigitSection {
            toc: NacaError::require_positive("thickness", toc)?,
            chord: NacaError::require_positive("chord", chord)?,
            thickness,
            mean_line,
            geometry: OnceCell::new(),
        })
    }

    fn four_digit_camber(camber: f64, x_camber: f64) -> Result<MeanLine> {
        if camber == 0.0 {
            return Ok(MeanLine::Uncambered);
        }

        Ok(MeanLine::FourDigit {
            camber,
            x_camber: NacaError::require_fraction("camber position", x_camber)?,
        })
    }

    fn modified_thickness(toc: f64, le_index: u8, x_max_thickness: f64) -> Result<ThicknessLaw> {
        NacaError::require_positive("thickness", toc)?;
        NacaError::require_fraction("max thickness position", x_max_thickness)?;
        Ok(ThicknessLaw::Modified(ModifiedThickness::from_index(
            toc,
            le_index,
            x_max_thickness,
        )))
    }

    /// Create an uncambered 4-digit section such as the NACA 0012.
    ///
    /// # Arguments
    ///
    /// * `toc` - the thickness to chord ratio, 0.12 for a NACA 0012
    ///
    /// * `chord` - the chord length the ordinates are scaled to
    pub fn uncambered(toc: f64, chord: f64) -> Result<Self> {
        Self::build(toc, chord, ThicknessLaw::Standard, MeanLine::Uncambered)
    }

    /// Create a cambered 4-digit section such as the NACA 2412, which has `camber` 0.02 located at
    /// `x_camber` 0.4 and a thickness ratio of 0.12.
    pub fn cambered(toc: f64, camber: f64, x_camber: f64, chord: f64) -> Result<Self> {
        let mean_line = Self::four_digit_camber(camber, x_camber)?;
        Self::build(toc, chord, ThicknessLaw::Standard, mean_line)
    }

    /// Create an uncambered modified 4-digit section such as the NACA 0012-34, whose leading edge
    /// radius index is 3 and whose maximum thickness sits at 0.4 of the chord. The index is
    /// clamped to 1..=8.
    pub fn modified(toc: f64, le_index: u8, x_max_thickness: f64, chord: f64) -> Result<Self> {
        let thickness = Self::modified_thickness(toc, le_index, x_max_thickness)?;
        Self::build(toc, chord, thickness, MeanLine::Uncambered)
    }

    /// Create an uncambered modified 4-digit section from an explicit leading edge radius given
    /// as a fraction of the chord.
    pub fn modified_with_radius(
        toc: f64,
        le_radius: f64,
        x_max_thickness: f64,
        chord: f64,
    ) -> Result<Self> {
        NacaError::require_positive("thickness", toc)?;
        NacaError::require_positive("leading edge radius", le_radius)?;
        NacaError::require_fraction("max thickness position", x_max_thickness)?;
        let thickness = ThicknessLaw::Modified(ModifiedThickness::new(toc, le_radius, x_max_thickness));
        Self::build(toc, chord, thickness, MeanLine::Uncambered)
    }

    /// Create a cambered modified 4-digit section such as the NACA 2412-34
    pub fn modified_cambered(
        toc: f64,
        camber: f64,
        x_camber: f64,
        le_index: u8,
        x_max_thickness: f64,
        chord: f64,
    ) -> Result<Self> {
        let thickness = Self::modified_thickness(toc, le_index, x_max_thickness)?;
        let mean_line = Self::four_digit_camber(camber, x_camber)?;
        Self::build(toc, chord, thickness, mean_line)
    }

    /// Create a 16-series section, a modified 4-digit section with leading edge index 4 and the
    /// maximum thickness at mid chord.
    pub fn sixteen_series(toc: f64, chord: f64) -> Result<Self> {
        Self::modified(toc, 4, 0.5, chord)
    }

    /// Create an unreflexed 5-digit section from the first two digits of its designation, for
    /// example 23 for a NACA 23012.
    pub fn five_digit(toc: f64, code: u32, chord: f64) -> Result<Self> {
        let factors = FiveDigitFactors::from_code(code)?;
        Self::build(toc, chord, ThicknessLaw::Standard, MeanLine::FiveDigit(factors))
    }

    /// Create an unreflexed 5-digit section from explicit mean line factors
    pub fn five_digit_with_factors(toc: f64, factors: FiveDigitFactors, chord: f64) -> Result<Self> {
        NacaError::require_fraction("camber factor r", factors.r)?;
        Self::build(toc, chord, ThicknessLaw::Standard, MeanLine::FiveDigit(factors))
    }

    /// Create a reflexed 5-digit section from the first two digits of its designation, for
    /// example 23 for a NACA 23112.
    pub fn five_digit_reflexed(toc: f64, code: u32, chord: f64) -> Result<Self> {
        let (factors, k2_k1) = FiveDigitFactors::from_reflexed_code(code)?;
        Self::build(
            toc,
            chord,
            ThicknessLaw::Standard,
            MeanLine::FiveDigitReflexed { factors, k2_k1 },
        )
    }

    /// Create a reflexed 5-digit section from explicit mean line factors and the k2/k1 ratio
    pub fn five_digit_reflexed_with_factors(
        toc: f64,
        factors: FiveDigitFactors,
        k2_k1: f64,
        chord: f64,
    ) -> Result<Self> {
        NacaError::require_fraction("camber factor r", factors.r)?;
        Self::build(
            toc,
            chord,
            ThicknessLaw::Standard,
            MeanLine::FiveDigitReflexed { factors, k2_k1 },
        )
    }

    pub fn thickness_ratio(&self) -> f64 {
        self.toc
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    pub fn thickness_law(&self) -> &ThicknessLaw {
        &self.thickness
    }

    pub fn mean_line(&self) -> &MeanLine {
        &self.mean_line
    }

    /// Computes the station at `x` from the uncambered ordinate already stored in `o`
    fn station(&self, x: f64, o: &mut Ordinate) -> Station {
        let scale = self.toc / REFERENCE_THICKNESS;
        let y = o.y * scale;
        let yp = o.yp * scale;

        let func = self.mean_line.evaluate(x, o);
        let tan_theta = o.tan_theta;
        let thp = o.theta_prime;
        let sin_theta = tan_theta / func;
        let cos_theta = 1.0 / func;

        let (upper_slope, lower_slope) = if tan_theta.abs() >= EPS {
            (
                (tan_theta * func + yp - tan_theta * y * thp) / (func - yp * tan_theta - y * thp),
                (tan_theta * func - yp + tan_theta * y * thp) / (func + yp * tan_theta + y * thp),
            )
        } else {
            (yp, -yp)
        };

        let c = self.chord;
        Station::new(
            Point2::new(x * c, o.y_camber * c),
            Point2::new((x - y * sin_theta) * c, (o.y_camber + y * cos_theta) * c),
            Point2::new((x + y * sin_theta) * c, (o.y_camber - y * cos_theta) * c),
            upper_slope,
            lower_slope,
        )
    }

    /// Runs the full generation pass: the leading edge station, stations forward of the maximum
    /// thickness location on a graded step, then stations aft of it on the base step, ending
    /// exactly at the trailing edge.
    fn generate(&self) -> AirfoilGeometry {
        let mut o = Ordinate::default();
        self.mean_line.leading_edge(&mut o);
        let le_slope = -1.0 / o.tan_theta;

        let mut stations = vec![Station::leading_edge(le_slope, le_slope)];
        let x_max = self.thickness.x_max_thickness();

        let mut x = FIRST_STATION;
        while x < x_max && (x - x_max).abs() >= EPS {
            self.thickness.forward(x, &mut o);
            stations.push(self.station(x, &mut o));
            x += step_fraction(x) * DX;
        }

        x = x_max;
        loop {
            self.thickness.aft(x, &mut o);
            stations.push(self.station(x, &mut o));
            if x >= 1.0 {
                break;
            }

            // Land exactly on the trailing edge
            x += DX;
            if 1.0 - x < 0.5 * DX {
                x = 1.0;
            }
        }

        debug!(designation = %self, stations = stations.len(), "generated 4-digit family geometry");
        AirfoilGeometry::from_stations(&stations)
    }
}

impl Airfoil for FourDigitSection {
    fn geometry(&self) -> &AirfoilGeometry {
        self.geometry.get_or_init(|| self.generate())
    }

    fn designation(&self) -> String {
        self.to_string()
    }
}

impl Display for FourDigitSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let thickness = percent_digits(self.toc);
        let chord = chord_suffix(self.chord);

        let camber_digits = match &self.mean_line {
            MeanLine::Uncambered => "00".to_string(),
            MeanLine::FourDigit { camber, x_camber } => format!(
                "{}{}",
                (camber * 100.0).round() as i64,
                (x_camber * 10.0).round() as i64
            ),
            MeanLine::FiveDigit(factors) => {
                return write!(f, "NACA 2{}0{}{}", (factors.x_camber * 20.0).round() as i64, thickness, chord)
            }
            MeanLine::FiveDigitReflexed { factors, .. } => {
                return write!(f, "NACA 2{}1{}{}", (factors.x_camber * 20.0).round() as i64, thickness, chord)
            }
        };

        match &self.thickness {
            ThicknessLaw::Standard => write!(f, "NACA {}{}{}", camber_digits, thickness, chord),
            ThicknessLaw::Modified(m) => {
                let index = m
                    .le_index
                    .map(|i| i.to_string())
                    .unwrap_or_else(|| "?".to_string());
                write!(
                    f,
                    "NACA {}{}-{}{}{}",
                    camber_digits,
                    thickness,
                    index,
                    (m.x_max_thickness * 10.0).round() as i64,
                    chord
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::{Slope, BIG};
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn all_sections() -> Vec<FourDigitSection> {
        vec![
            FourDigitSection::uncambered(0.12, 1.0).unwrap(),
            FourDigitSection::cambered(0.12, 0.02, 0.4, 1.0).unwrap(),
            FourDigitSection::modified(0.12, 3, 0.4, 1.0).unwrap(),
            FourDigitSection::modified_cambered(0.10, 0.04, 0.3, 6, 0.5, 1.0).unwrap(),
            FourDigitSection::sixteen_series(0.09, 1.0).unwrap(),
            FourDigitSection::five_digit(0.12, 23, 1.0).unwrap(),
            FourDigitSection::five_digit_reflexed(0.12, 23, 1.0).unwrap(),
        ]
    }

    #[test]
    fn test_naca_0012_is_symmetric() {
        let naca = FourDigitSection::uncambered(0.12, 1.0).unwrap();
        let upper = naca.upper_surface();
        let lower = naca.lower_surface();
        assert_eq!(upper.len(), lower.len());

        for i in 1..upper.len() {
            assert_relative_eq!(upper[i].x, lower[i].x, epsilon = 1e-12);
            assert_relative_eq!(upper[i].y, -lower[i].y, epsilon = 1e-12);
            assert_relative_eq!(naca.upper_slopes()[i], -naca.lower_slopes()[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_naca_0012_thickness() {
        let naca = FourDigitSection::uncambered(0.12, 1.0).unwrap();
        assert_relative_eq!(0.12, naca.geometry().max_thickness(), epsilon = 1e-3);

        let last = naca.upper_surface().last().unwrap();
        assert_relative_eq!(0.00126, last.y, epsilon = 1e-5);
    }

    #[test]
    fn test_leading_edge_is_vertical() {
        let naca = FourDigitSection::uncambered(0.12, 1.0).unwrap();
        assert_eq!(-BIG, naca.upper_slopes()[0]);
        assert_eq!(Some(Slope::Vertical), naca.geometry().leading_edge_slope());

        let cambered = FourDigitSection::cambered(0.12, 0.02, 0.4, 1.0).unwrap();
        assert_relative_eq!(-10.0, cambered.upper_slopes()[0], epsilon = 1e-9);
    }

    #[test]
    fn test_edges_are_pinned() {
        for section in all_sections() {
            let g = section.geometry();
            assert_eq!(Point2::origin(), g.upper[0]);
            assert_eq!(Point2::origin(), g.lower[0]);
            assert_eq!(Point2::origin(), g.camber[0]);
            assert_relative_eq!(1.0, g.upper.last().unwrap().x, epsilon = 1e-3);
            assert_relative_eq!(1.0, g.lower.last().unwrap().x, epsilon = 1e-3);
            assert_relative_eq!(1.0, g.camber.last().unwrap().x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sequences_are_aligned() {
        for section in all_sections() {
            let g = section.geometry();
            assert_eq!(g.upper.len(), g.lower.len());
            assert_eq!(g.upper.len(), g.camber.len());
            assert_eq!(g.upper.len(), g.upper_slopes.len());
            assert_eq!(g.lower.len(), g.lower_slopes.len());
        }
    }

    #[test]
    fn test_camber_is_ordered() {
        for section in all_sections() {
            let camber = section.camber_line();
            for pair in camber.windows(2) {
                assert!(pair[1].x > pair[0].x);
            }
        }
    }

    #[test_case(3.0)]
    #[test_case(0.25)]
    fn test_chord_scaling(chord: f64) {
        let unit = FourDigitSection::cambered(0.12, 0.02, 0.4, 1.0).unwrap();
        let scaled = FourDigitSection::cambered(0.12, 0.02, 0.4, chord).unwrap();
        assert_eq!(unit.upper_surface().len(), scaled.upper_surface().len());

        for (a, b) in unit.upper_surface().iter().zip(scaled.upper_surface()) {
            assert_relative_eq!(a.x * chord, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y * chord, b.y, epsilon = 1e-12);
        }
        for (a, b) in unit.lower_surface().iter().zip(scaled.lower_surface()) {
            assert_relative_eq!(a.x * chord, b.x, epsilon = 1e-12);
            assert_relative_eq!(a.y * chord, b.y, epsilon = 1e-12);
        }
        assert_eq!(unit.upper_slopes(), scaled.upper_slopes());
        assert_eq!(unit.lower_slopes(), scaled.lower_slopes());
    }

    #[test]
    fn test_naca_2412_surface() {
        let naca = FourDigitSection::cambered(0.12, 0.02, 0.4, 1.0).unwrap();
        let camber_peak = naca
            .camber_line()
            .iter()
            .map(|p| p.y)
            .fold(f64::MIN, f64::max);
        assert_relative_eq!(0.02, camber_peak, epsilon = 1e-5);

        // Upper surface sits above the lower everywhere aft of the nose
        for (u, l) in naca.upper_surface().iter().zip(naca.lower_surface()).skip(1) {
            assert!(u.y > l.y);
        }
    }

    #[test]
    fn test_geometry_is_cached() {
        let naca = FourDigitSection::five_digit(0.12, 23, 1.0).unwrap();
        let first = naca.upper_surface();
        let second = naca.upper_surface();
        assert!(std::ptr::eq(first, second));
        assert!(std::ptr::eq(naca.geometry(), naca.geometry()));
    }

    #[test]
    fn test_modified_max_thickness_location() {
        let naca = FourDigitSection::modified(0.12, 3, 0.4, 1.0).unwrap();
        let (i, _) = naca
            .upper_surface()
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, p)| if p.y > acc.1 { (i, p.y) } else { acc });
        assert_relative_eq!(0.4, naca.upper_surface()[i].x, epsilon = 1e-9);
        assert_relative_eq!(0.06, naca.upper_surface()[i].y, epsilon = 1e-9);
    }

    #[test_case(FourDigitSection::uncambered(0.12, 1.0), "NACA 0012")]
    #[test_case(FourDigitSection::uncambered(0.06, 2.5), "NACA 0006 c=2.5")]
    #[test_case(FourDigitSection::cambered(0.12, 0.02, 0.4, 1.0), "NACA 2412")]
    #[test_case(FourDigitSection::modified(0.12, 3, 0.4, 1.0), "NACA 0012-34")]
    #[test_case(FourDigitSection::modified_with_radius(0.12, 0.004, 0.4, 1.0), "NACA 0012-?4")]
    #[test_case(FourDigitSection::modified_cambered(0.10, 0.04, 0.3, 6, 0.5, 1.0), "NACA 4310-65")]
    #[test_case(FourDigitSection::five_digit(0.12, 23, 1.0), "NACA 23012")]
    #[test_case(FourDigitSection::five_digit(0.15, 21, 1.0), "NACA 21015")]
    #[test_case(FourDigitSection::five_digit_reflexed(0.12, 23, 1.0), "NACA 23112")]
    fn test_designation(section: Result<FourDigitSection>, e: &str) {
        assert_eq!(e, section.unwrap().designation());
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(FourDigitSection::uncambered(0.0, 1.0).is_err());
        assert!(FourDigitSection::uncambered(0.12, -1.0).is_err());
        assert!(FourDigitSection::cambered(0.12, 0.02, 0.0, 1.0).is_err());
        assert!(FourDigitSection::modified(0.12, 3, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_unknown_camber_codes() {
        let e = FourDigitSection::five_digit_reflexed(0.12, 99, 1.0).unwrap_err();
        assert_eq!(NacaError::UnknownCamberCode(99), e);
        assert!(e.to_string().contains("Unknown camber code"));
        assert!(FourDigitSection::five_digit(0.12, 26, 1.0).is_err());
    }
}
