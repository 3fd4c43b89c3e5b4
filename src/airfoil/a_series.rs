//! Modifications which turn a 6-series section into a 6A-series section: a rescaled mean line
//! that straightens onto a linear asymptote, and straight-sided surfaces over the aft chord.

/// Chordwise loading extent of the 6A-series mean line
pub const LOADING: f64 = 0.8;

/// Factor applied to the mean line ordinate, slope and curvature
pub const CAMBER_SCALE: f64 = 0.97948;

/// Slope of the straight mean line asymptote, per unit design lift coefficient
pub const ASYMPTOTE_SLOPE: f64 = 0.24521;

/// Chord location aft of which the surfaces are straight lines to the trailing edge
pub const BLEND_START: f64 = 0.825;

/// The mean line at a single station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLinePoint {
    pub y: f64,
    pub tan_theta: f64,
    pub curvature: f64,
}

/// Tracks whether the mean line has reached its straight asymptote. Once locked, every later
/// station of the same pass lies on the asymptote.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamberLock {
    locked: bool,
}

impl CamberLock {
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn apply(&mut self, x: f64, cli: f64, point: MeanLinePoint) -> MeanLinePoint {
        if !self.locked {
            let scaled = MeanLinePoint {
                y: point.y * CAMBER_SCALE,
                tan_theta: point.tan_theta * CAMBER_SCALE,
                curvature: point.curvature * CAMBER_SCALE,
            };
            // The slope falls towards the asymptote for positive lift and rises for negative lift
            if scaled.tan_theta * cli.signum() > -ASYMPTOTE_SLOPE * cli.abs() {
                return scaled;
            }
            self.locked = true;
        }

        MeanLinePoint {
            y: ASYMPTOTE_SLOPE * cli * (1.0 - x),
            tan_theta: -ASYMPTOTE_SLOPE * cli,
            curvature: 0.0,
        }
    }
}

/// A straight line `y = slope * x + intercept`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    /// The line through `(x, y)` and the trailing edge point (1, 0)
    fn through_trailing_edge(x: f64, y: f64) -> Line {
        let slope = -y / (1.0 - x);
        Line {
            slope,
            intercept: -slope,
        }
    }

    fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Replaces the surfaces aft of [`BLEND_START`] with straight lines. The lines run from the last
/// station at or forward of the blend start to the trailing edge, and stay fixed for the rest
/// of the pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingEdgeBlend {
    upper: Line,
    lower: Line,
}

impl TrailingEdgeBlend {
    /// Returns the (possibly replaced) upper and lower ordinates for the station at `x`
    pub fn apply(&mut self, x: f64, xu: f64, yu: f64, xl: f64, yl: f64) -> (f64, f64) {
        if x <= BLEND_START {
            self.upper = Line::through_trailing_edge(xu, yu);
            self.lower = Line::through_trailing_edge(xl, yl);
            (yu, yl)
        } else {
            (self.upper.at(xu), self.lower.at(xl))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camber_is_scaled_before_lock() {
        let mut lock = CamberLock::default();
        let p = MeanLinePoint {
            y: 0.01,
            tan_theta: 0.05,
            curvature: -0.2,
        };
        let result = lock.apply(0.3, 0.2, p);
        assert!(!lock.is_locked());
        assert_relative_eq!(0.01 * CAMBER_SCALE, result.y, epsilon = 1e-15);
        assert_relative_eq!(0.05 * CAMBER_SCALE, result.tan_theta, epsilon = 1e-15);
        assert_relative_eq!(-0.2 * CAMBER_SCALE, result.curvature, epsilon = 1e-15);
    }

    #[test]
    fn test_camber_locks_onto_asymptote() {
        let mut lock = CamberLock::default();
        let steep = MeanLinePoint {
            y: 0.008,
            tan_theta: -0.1,
            curvature: -1.0,
        };
        let result = lock.apply(0.85, 0.2, steep);
        assert!(lock.is_locked());
        assert_relative_eq!(ASYMPTOTE_SLOPE * 0.2 * 0.15, result.y, epsilon = 1e-15);
        assert_relative_eq!(-ASYMPTOTE_SLOPE * 0.2, result.tan_theta, epsilon = 1e-15);
        assert_eq!(0.0, result.curvature);

        // Once locked, later stations follow the asymptote regardless of their input
        let flat = MeanLinePoint {
            y: 0.5,
            tan_theta: 1.0,
            curvature: 3.0,
        };
        let result = lock.apply(0.9, 0.2, flat);
        assert_relative_eq!(ASYMPTOTE_SLOPE * 0.2 * 0.1, result.y, epsilon = 1e-15);
        assert_relative_eq!(-ASYMPTOTE_SLOPE * 0.2, result.tan_theta, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_lift_locks_when_slope_rises_past_asymptote() {
        let mut lock = CamberLock::default();
        let nose = MeanLinePoint {
            y: -4e-5,
            tan_theta: -0.3,
            curvature: 5.0,
        };
        let result = lock.apply(0.00025, -0.2, nose);
        assert!(!lock.is_locked());
        assert_relative_eq!(-4e-5 * CAMBER_SCALE, result.y, epsilon = 1e-15);

        let steep = MeanLinePoint {
            y: -0.008,
            tan_theta: 0.1,
            curvature: 1.0,
        };
        let result = lock.apply(0.85, -0.2, steep);
        assert!(lock.is_locked());
        assert_relative_eq!(-ASYMPTOTE_SLOPE * 0.2 * 0.15, result.y, epsilon = 1e-15);
        assert_relative_eq!(ASYMPTOTE_SLOPE * 0.2, result.tan_theta, epsilon = 1e-15);
    }

    #[test]
    fn test_blend_forward_is_unchanged() {
        let mut blend = TrailingEdgeBlend::default();
        assert_eq!((0.05, -0.04), blend.apply(0.5, 0.5, 0.05, 0.5, -0.04));
    }

    #[test]
    fn test_blend_aft_is_straight() {
        let mut blend = TrailingEdgeBlend::default();
        blend.apply(0.8, 0.8, 0.02, 0.8, -0.01);
        blend.apply(0.82, 0.82, 0.018, 0.82, -0.009);

        let (yu, yl) = blend.apply(0.91, 0.91, 1.0, 0.91, 1.0);
        assert_relative_eq!(0.018 * 0.09 / 0.18, yu, epsilon = 1e-12);
        assert_relative_eq!(-0.009 * 0.09 / 0.18, yl, epsilon = 1e-12);

        let (yu, yl) = blend.apply(1.0, 1.0, 1.0, 1.0, 1.0);
        assert_relative_eq!(0.0, yu, epsilon = 1e-12);
        assert_relative_eq!(0.0, yl, epsilon = 1e-12);
    }
}
