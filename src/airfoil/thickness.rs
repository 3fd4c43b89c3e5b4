//! Thickness distributions of the NACA 4-digit family. Ordinates are expressed for a 20%
//! thick section and scaled to the requested thickness by the generation pass.

/// The per-station scratch record of the 4-digit family generation pass. The thickness law fills
/// in `y`, `yp` and `ypp`, the mean line fills in `y_camber`, `tan_theta` and `theta_prime`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ordinate {
    /// Ordinate of the uncambered section
    pub y: f64,

    /// Slope of the uncambered section, dy/dx
    pub yp: f64,

    /// Curvature term of the uncambered section, d2y/dx2
    pub ypp: f64,

    /// Ordinate of the camber line
    pub y_camber: f64,

    /// Tangent of the local camber line angle
    pub tan_theta: f64,

    /// Rate of change of the local camber line angle, d(theta)/dx
    pub theta_prime: f64,
}

/// Reference thickness ratio for which the ordinate equations are written
pub const REFERENCE_THICKNESS: f64 = 0.2;

// Ordinate equation coefficients of the standard 4-digit section
const A0: f64 = 0.2969;
const A1: f64 = -0.1260;
const A2: f64 = -0.3516;
const A3: f64 = 0.2843;
const A4: f64 = -0.1015;

/// Thickness ratios for the rows of the leading edge radius table
const RLE_THICKNESS: [f64; 17] = [
    0.05, 0.06, 0.07, 0.08, 0.09, 0.10, 0.11, 0.12, 0.13, 0.14, 0.15, 0.16, 0.17, 0.18, 0.19,
    0.20, 0.21,
];

/// Leading edge radius (fraction of chord) by thickness ratio row and leading edge index column
const RLE_TABLE: [[f64; 8]; 17] = [
    [0.000077, 0.000306, 0.000689, 0.001224, 0.001913, 0.002755, 0.003749, 0.004897],
    [0.000110, 0.000441, 0.000992, 0.001763, 0.002755, 0.003967, 0.005399, 0.007052],
    [0.000150, 0.000600, 0.001350, 0.002400, 0.003749, 0.005399, 0.007349, 0.009599],
    [0.000196, 0.000784, 0.001763, 0.003134, 0.004897, 0.007052, 0.009599, 0.012537],
    [0.000248, 0.000992, 0.002231, 0.003967, 0.006198, 0.008925, 0.012148, 0.015867],
    [0.000306, 0.001224, 0.002755, 0.004897, 0.007652, 0.011019, 0.014998, 0.019589],
    [0.000370, 0.001481, 0.003333, 0.005925, 0.009259, 0.013333, 0.018147, 0.023703],
    [0.000441, 0.001763, 0.003967, 0.007052, 0.011019, 0.015867, 0.021597, 0.028208],
    [0.000517, 0.002069, 0.004655, 0.008276, 0.012932, 0.018622, 0.025346, 0.033105],
    [0.000600, 0.002400, 0.005399, 0.009599, 0.014998, 0.021597, 0.029395, 0.038394],
    [0.000689, 0.002755, 0.006198, 0.011019, 0.017217, 0.024792, 0.033745, 0.044075],
    [0.000784, 0.003134, 0.007052, 0.012537, 0.019589, 0.028208, 0.038394, 0.050147],
    [0.000885, 0.003438, 0.007961, 0.014153, 0.022114, 0.031844, 0.043343, 0.056612],
    [0.000992, 0.003967, 0.008925, 0.015867, 0.024792, 0.035701, 0.048592, 0.063468],
    [0.001105, 0.004420, 0.009944, 0.017679, 0.027623, 0.039778, 0.054142, 0.070716],
    [0.001224, 0.004897, 0.011019, 0.019589, 0.030608, 0.044075, 0.059991, 0.078355],
    [0.001350, 0.005399, 0.012148, 0.021597, 0.033745, 0.048592, 0.066140, 0.086387],
];

/// Looks up the leading edge radius for a thickness ratio and a leading edge index. The index is
/// clamped to 1..=8 and the thickness is interpolated linearly between the two table rows which
/// bracket it, extrapolating from the end rows outside of the table.
pub fn lookup_le_radius(thickness: f64, le_index: u8) -> f64 {
    let column = (le_index.clamp(1, 8) - 1) as usize;

    let above = RLE_THICKNESS
        .iter()
        .position(|t| *t > thickness)
        .unwrap_or(RLE_THICKNESS.len());
    let low = match above {
        0 => 0,
        i if i == RLE_THICKNESS.len() => i - 2,
        i => i - 1,
    };
    let high = low + 1;

    let (x1, y1) = (RLE_THICKNESS[high], RLE_TABLE[high][column]);
    let (x2, y2) = (RLE_THICKNESS[low], RLE_TABLE[low][column]);
    (y2 - y1) / (x2 - x1) * (thickness - x1) + y1
}

/// Coefficients of the modified 4-digit ordinate equations, forward (`a`) and aft (`d`) of the
/// maximum thickness location. These follow NASA TM X-3284.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifiedThickness {
    pub le_radius: f64,
    pub le_index: Option<u8>,
    pub x_max_thickness: f64,
    a: [f64; 4],
    d: [f64; 4],
}

impl ModifiedThickness {
    /// Solves the ordinate coefficients for a thickness ratio, leading edge radius (fraction of
    /// chord) and location of maximum thickness.
    pub fn new(toc: f64, le_radius: f64, x_max_thickness: f64) -> ModifiedThickness {
        let xm = x_max_thickness;
        let xm2 = xm * xm;
        let om = 1.0 - xm;
        let om2 = om * om;

        let a0 = (2.0 * le_radius).sqrt() * REFERENCE_THICKNESS / toc;
        let d0 = 0.002;
        let d1 = 0.1 * (2.24 - 5.42 * xm + 12.3 * xm2) / (1.0 - 0.878 * xm);
        let d3 = (3.0 * d1 - 0.588 / om) / (3.0 * om2);
        let d2 = -1.5 * om * d3 - 0.5 * d1 / om;
        let a3 = 0.1 / xm2 / xm + (2.0 * d1 * om - 0.588) / (2.0 * xm * om2)
            - 3.0 * a0 / (8.0 * xm.powf(2.5));
        let a2 = -0.1 / xm2 + 0.5 * a0 / xm.powf(1.5) - 2.0 * xm * a3;
        let a1 = -0.5 * a0 / xm.sqrt() - 2.0 * xm * a2 - 3.0 * xm2 * a3;

        ModifiedThickness {
            le_radius,
            le_index: None,
            x_max_thickness,
            a: [a0, a1, a2, a3],
            d: [d0, d1, d2, d3],
        }
    }

    /// Builds the coefficients from a leading edge radius index, looking the radius up in the
    /// standard table.
    pub fn from_index(toc: f64, le_index: u8, x_max_thickness: f64) -> ModifiedThickness {
        let index = le_index.clamp(1, 8);
        ModifiedThickness {
            le_index: Some(index),
            ..ModifiedThickness::new(toc, lookup_le_radius(toc, index), x_max_thickness)
        }
    }

    fn forward(&self, x: f64, o: &mut Ordinate) {
        let [a0, a1, a2, a3] = self.a;
        let sqrtx = x.sqrt();
        let x2 = x * x;
        o.y = a0 * sqrtx + a1 * x + a2 * x2 + a3 * x2 * x;
        o.yp = 0.5 * a0 / sqrtx + a1 + 2.0 * a2 * x + 3.0 * a3 * x2;
        o.ypp = -0.25 * a0 / (x2 * x).sqrt() + 2.0 * a2 + 6.0 * a3 * x;
    }

    fn aft(&self, x: f64, o: &mut Ordinate) {
        let [d0, d1, d2, d3] = self.d;
        let omx = 1.0 - x;
        let omx2 = omx * omx;
        o.y = d0 + d1 * omx + d2 * omx2 + d3 * omx2 * omx;
        o.yp = -d1 - 2.0 * d2 * omx - 3.0 * d3 * omx2;
        o.ypp = 2.0 * d2 + 6.0 * d3 * omx;
    }
}

/// The thickness law of a 4-digit family section
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThicknessLaw {
    /// The standard 4-digit (and 5-digit) thickness distribution
    Standard,

    /// The modified 4-digit distribution with an adjustable leading edge radius and location of
    /// maximum thickness, also used for the 16-series
    Modified(ModifiedThickness),
}

impl ThicknessLaw {
    /// Chord location which separates the forward and aft ordinate equations
    pub fn x_max_thickness(&self) -> f64 {
        match self {
            ThicknessLaw::Standard => 0.5,
            ThicknessLaw::Modified(m) => m.x_max_thickness,
        }
    }

    /// Fills in the uncambered ordinate forward of the maximum thickness location
    pub fn forward(&self, x: f64, o: &mut Ordinate) {
        match self {
            ThicknessLaw::Standard => {
                let sqrtx = x.sqrt();
                let x2 = x * x;
                o.y = A0 * sqrtx + A1 * x + A2 * x2 + A3 * x2 * x + A4 * x2 * x2;
                o.yp = 0.5 * A0 / sqrtx + A1 + 2.0 * A2 * x + 3.0 * A3 * x2 + 4.0 * A4 * x2 * x;
                o.ypp = -0.25 * A0 / (x2 * x).sqrt() + 2.0 * A2 + 6.0 * A3 * x + 12.0 * A4 * x2;
            }
            ThicknessLaw::Modified(m) => m.forward(x, o),
        }
    }

    /// Fills in the uncambered ordinate aft of the maximum thickness location
    pub fn aft(&self, x: f64, o: &mut Ordinate) {
        match self {
            ThicknessLaw::Standard => self.forward(x, o),
            ThicknessLaw::Modified(m) => m.aft(x, o),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn half_thickness(law: &ThicknessLaw, toc: f64, x: f64) -> f64 {
        let mut o = Ordinate::default();
        if x < law.x_max_thickness() {
            law.forward(x, &mut o);
        } else {
            law.aft(x, &mut o);
        }
        o.y * toc / REFERENCE_THICKNESS
    }

    #[test_case(1.000000, 0.001260)]
    #[test_case(0.840000, 0.021694)]
    #[test_case(0.680000, 0.038557)]
    #[test_case(0.520000, 0.051635)]
    #[test_case(0.360000, 0.059263)]
    #[test_case(0.200000, 0.057375)]
    #[test_case(0.040000, 0.032277)]
    fn test_naca_0012_half_thickness(x: f64, e: f64) {
        let result = half_thickness(&ThicknessLaw::Standard, 0.12, x);
        assert_relative_eq!(e, result, epsilon = 1e-3);
    }

    #[test_case(0.12, 4, 0.007052)]
    #[test_case(0.125, 4, 0.007664)]
    #[test_case(0.05, 1, 0.000077)]
    #[test_case(0.21, 8, 0.086387)]
    #[test_case(0.12, 0, 0.000441)]
    #[test_case(0.12, 12, 0.028208)]
    fn test_lookup_le_radius(toc: f64, index: u8, e: f64) {
        assert_relative_eq!(e, lookup_le_radius(toc, index), epsilon = 1e-9);
    }

    #[test]
    fn test_lookup_le_radius_extrapolates() {
        let r21 = lookup_le_radius(0.21, 6);
        let r25 = lookup_le_radius(0.25, 6);
        let r03 = lookup_le_radius(0.03, 6);
        assert!(r25 > r21);
        assert!(r03 < lookup_le_radius(0.05, 6));
    }

    #[test_case(0.12, 3, 0.4)]
    #[test_case(0.10, 6, 0.4)]
    #[test_case(0.09, 4, 0.5)]
    #[test_case(0.15, 8, 0.3)]
    fn test_modified_is_continuous_at_max_thickness(toc: f64, index: u8, xm: f64) {
        let m = ModifiedThickness::from_index(toc, index, xm);
        let mut fwd = Ordinate::default();
        let mut aft = Ordinate::default();
        m.forward(xm, &mut fwd);
        m.aft(xm, &mut aft);

        assert_relative_eq!(0.1, fwd.y, epsilon = 1e-10);
        assert_relative_eq!(0.1, aft.y, epsilon = 1e-10);
        assert_relative_eq!(0.0, fwd.yp, epsilon = 1e-10);
        assert_relative_eq!(0.0, aft.yp, epsilon = 1e-10);
    }

    #[test]
    fn test_modified_trailing_edge() {
        let m = ModifiedThickness::from_index(0.12, 4, 0.4);
        let mut o = Ordinate::default();
        m.aft(1.0, &mut o);
        assert_relative_eq!(0.002, o.y, epsilon = 1e-12);
    }

    #[test]
    fn test_index_is_clamped() {
        let m = ModifiedThickness::from_index(0.12, 11, 0.4);
        assert_eq!(Some(8), m.le_index);
    }
}
