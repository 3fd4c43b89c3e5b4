//! Mean lines of the NACA 4-digit family: the 4-digit parabolic mean line and the 5-digit cubic
//! mean lines, both unreflexed and reflexed. Factors for the standard 5-digit designations follow
//! NASA TM X-3284.

use super::thickness::Ordinate;
use super::{BIG, EPS};
use crate::errors::{NacaError, Result};

/// Camber factors of a 5-digit mean line, unreflexed or reflexed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveDigitFactors {
    /// Camber function scaling factor
    pub k1: f64,

    /// Chord location where the cubic forward portion of the mean line ends
    pub r: f64,

    /// Chord location of maximum camber
    pub x_camber: f64,
}

impl FiveDigitFactors {
    /// Factors for the standard unreflexed mean lines 210 through 250, selected by the first two
    /// digits of the designation.
    pub fn from_code(code: u32) -> Result<FiveDigitFactors> {
        let (x_camber, r, k1) = match code {
            21 => (0.05, 0.0580, 361.400),
            22 => (0.10, 0.1260, 51.640),
            23 => (0.15, 0.2025, 15.957),
            24 => (0.20, 0.2900, 6.643),
            25 => (0.25, 0.3910, 3.230),
            _ => return Err(NacaError::UnknownCamberCode(code)),
        };
        Ok(FiveDigitFactors { k1, r, x_camber })
    }

    /// Factors for the standard reflexed mean lines 221 through 251, returned together with the
    /// k2/k1 ratio.
    pub fn from_reflexed_code(code: u32) -> Result<(FiveDigitFactors, f64)> {
        let (x_camber, r, k1, k2_k1) = match code {
            22 => (0.10, 0.1300, 51.990, 0.000764),
            23 => (0.15, 0.2170, 15.793, 0.00677),
            24 => (0.20, 0.3180, 6.520, 0.0303),
            25 => (0.25, 0.4410, 3.191, 0.1355),
            _ => return Err(NacaError::UnknownCamberCode(code)),
        };
        Ok((FiveDigitFactors { k1, r, x_camber }, k2_k1))
    }
}

/// The camber law of a 4-digit family section
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeanLine {
    Uncambered,

    /// Two parabolic arcs joined at the location of maximum camber
    FourDigit { camber: f64, x_camber: f64 },

    /// A cubic forward of `r` followed by a straight line to the trailing edge
    FiveDigit(FiveDigitFactors),

    /// Two cubics joined at `r`, producing a reflexed trailing edge
    FiveDigitReflexed { factors: FiveDigitFactors, k2_k1: f64 },
}

impl MeanLine {
    /// Fills in the camber slope tangent and the uncambered derivative terms at the leading edge
    pub fn leading_edge(&self, o: &mut Ordinate) {
        o.tan_theta = match self {
            MeanLine::Uncambered => EPS,
            MeanLine::FourDigit { camber, x_camber } => {
                if *camber < EPS {
                    EPS
                } else {
                    2.0 * camber / x_camber
                }
            }
            MeanLine::FiveDigit(f) => {
                if f.k1 < EPS {
                    EPS
                } else {
                    f.k1 * f.r * f.r * (3.0 - f.r) / 6.0
                }
            }
            MeanLine::FiveDigitReflexed { factors: f, k2_k1 } => {
                if f.k1 < EPS {
                    EPS
                } else {
                    let r2 = f.r * f.r;
                    let omr = 1.0 - f.r;
                    f.k1 * (3.0 * r2 - k2_k1 * omr * omr * omr - r2 * f.r) / 6.0
                }
            }
        };
        o.yp = BIG;
        o.ypp = BIG;
    }

    /// Fills in the camber ordinate, slope tangent and angle rate at `x`, returning
    /// `sqrt(1 + tan_theta^2)`.
    pub fn evaluate(&self, x: f64, o: &mut Ordinate) -> f64 {
        // The rate of change of tan(theta), converted to d(theta)/dx once the slope is known
        let dtan: f64;
        match self {
            MeanLine::Uncambered => {
                o.y_camber = 0.0;
                o.tan_theta = 0.0;
                o.theta_prime = 0.0;
                return 1.0;
            }
            MeanLine::FourDigit { camber, x_camber } => {
                let p = *x_camber;
                let scale = if x < p {
                    camber / (p * p)
                } else {
                    camber / ((1.0 - p) * (1.0 - p))
                };
                o.y_camber = if x < p {
                    scale * (2.0 * p * x - x * x)
                } else {
                    scale * (1.0 - 2.0 * p + 2.0 * p * x - x * x)
                };
                o.tan_theta = 2.0 * scale * (p - x);
                dtan = -2.0 * scale;
            }
            MeanLine::FiveDigit(f) => {
                let r = f.r;
                if x < r {
                    o.y_camber = f.k1 * (x * x * x - 3.0 * r * x * x + r * r * (3.0 - r) * x) / 6.0;
                    o.tan_theta = f.k1 * (3.0 * x * x - 6.0 * r * x + r * r * (3.0 - r)) / 6.0;
                    dtan = f.k1 * (x - r);
                } else {
                    o.y_camber = f.k1 * r * r * r * (1.0 - x) / 6.0;
                    o.tan_theta = -f.k1 * r * r * r / 6.0;
                    dtan = 0.0;
                }
            }
            MeanLine::FiveDigitReflexed { factors: f, k2_k1 } => {
                let r3 = f.r * f.r * f.r;
                let omr = 1.0 - f.r;
                let omr3 = omr * omr * omr;
                let xmr = x - f.r;
                let xmr2 = xmr * xmr;
                // Aft of r the cubic term is scaled by k2/k1
                let k = if x > f.r { *k2_k1 } else { 1.0 };
                o.y_camber = f.k1 * (k * xmr2 * xmr - k2_k1 * omr3 * x - r3 * x + r3) / 6.0;
                o.tan_theta = f.k1 * (3.0 * k * xmr2 - k2_k1 * omr3 - r3) / 6.0;
                dtan = k * f.k1 * xmr;
            }
        }

        let func = (1.0 + o.tan_theta * o.tan_theta).sqrt();
        o.theta_prime = dtan / (func * func);
        func
    }

    /// Chord location of maximum camber, zero for an uncambered section
    pub fn x_camber(&self) -> f64 {
        match self {
            MeanLine::Uncambered => 0.0,
            MeanLine::FourDigit { x_camber, .. } => *x_camber,
            MeanLine::FiveDigit(f) => f.x_camber,
            MeanLine::FiveDigitReflexed { factors, .. } => factors.x_camber,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn camber_at(line: &MeanLine, x: f64) -> Ordinate {
        let mut o = Ordinate::default();
        line.evaluate(x, &mut o);
        o
    }

    #[test_case(0.1, 0.00875)]
    #[test_case(0.3, 0.01875)]
    #[test_case(0.4, 0.02)]
    #[test_case(0.7, 0.015)]
    #[test_case(1.0, 0.0)]
    fn test_naca_2412_camber(x: f64, e: f64) {
        let line = MeanLine::FourDigit {
            camber: 0.02,
            x_camber: 0.4,
        };
        assert_relative_eq!(e, camber_at(&line, x).y_camber, epsilon = 1e-12);
    }

    #[test]
    fn test_four_digit_slopes() {
        let line = MeanLine::FourDigit {
            camber: 0.02,
            x_camber: 0.4,
        };
        assert_relative_eq!(0.0, camber_at(&line, 0.4).tan_theta, epsilon = 1e-12);
        assert!(camber_at(&line, 0.2).tan_theta > 0.0);
        assert!(camber_at(&line, 0.8).tan_theta < 0.0);
        assert!(camber_at(&line, 0.2).theta_prime < 0.0);

        let mut o = Ordinate::default();
        line.leading_edge(&mut o);
        assert_relative_eq!(0.1, o.tan_theta, epsilon = 1e-12);
        assert_eq!(BIG, o.yp);
    }

    #[test]
    fn test_uncambered_leading_edge() {
        let mut o = Ordinate::default();
        MeanLine::Uncambered.leading_edge(&mut o);
        assert_eq!(EPS, o.tan_theta);
        assert_eq!(1.0, MeanLine::Uncambered.evaluate(0.3, &mut o));
        assert_eq!(0.0, o.y_camber);
    }

    #[test]
    fn test_naca_230_mean_line() {
        let line = MeanLine::FiveDigit(FiveDigitFactors::from_code(23).unwrap());
        let peak = camber_at(&line, 0.15);
        assert_relative_eq!(0.01839, peak.y_camber, epsilon = 5e-4);
        assert_relative_eq!(0.0, peak.tan_theta, epsilon = 1e-3);

        let mut o = Ordinate::default();
        line.leading_edge(&mut o);
        assert_relative_eq!(0.30508, o.tan_theta, epsilon = 1e-4);
    }

    #[test_case(21)]
    #[test_case(22)]
    #[test_case(23)]
    #[test_case(24)]
    #[test_case(25)]
    fn test_five_digit_continuous_at_r(code: u32) {
        let f = FiveDigitFactors::from_code(code).unwrap();
        let line = MeanLine::FiveDigit(f);
        let before = camber_at(&line, f.r - 1e-9);
        let after = camber_at(&line, f.r);
        assert_relative_eq!(before.y_camber, after.y_camber, epsilon = 1e-7);
        assert_relative_eq!(before.tan_theta, after.tan_theta, epsilon = 1e-6);
        assert_relative_eq!(0.0, camber_at(&line, 1.0).y_camber, epsilon = 1e-12);
    }

    #[test_case(22)]
    #[test_case(23)]
    #[test_case(24)]
    #[test_case(25)]
    fn test_reflexed_mean_line(code: u32) {
        let (factors, k2_k1) = FiveDigitFactors::from_reflexed_code(code).unwrap();
        let line = MeanLine::FiveDigitReflexed { factors, k2_k1 };
        assert_relative_eq!(0.0, camber_at(&line, 0.0).y_camber, epsilon = 1e-12);
        assert_relative_eq!(0.0, camber_at(&line, 1.0).y_camber, epsilon = 1e-12);
        assert!(camber_at(&line, factors.x_camber).y_camber > 0.0);
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(
            Err(NacaError::UnknownCamberCode(26)),
            FiveDigitFactors::from_code(26)
        );
        let e = FiveDigitFactors::from_reflexed_code(99).unwrap_err();
        assert!(e.to_string().contains("Unknown camber code"));
    }
}
