use crate::serialize::serialize_points;
use ncollide2d::na::Point2;
use ncollide2d::shape::Polyline;
use serde::Serialize;

pub mod a_series;
pub mod camber;
pub mod four_digit;
pub mod profiles;
pub mod six_series;
pub mod thickness;

/// Tangent of the camber line used at a round leading edge, standing in for zero
pub const EPS: f64 = 1e-10;

/// Slope magnitude standing in for the vertical tangent of a round leading edge
pub const BIG: f64 = 1.0 / EPS;

/// A surface slope (dy/dx) classified as either finite or vertical. The slope vectors of an
/// [`AirfoilGeometry`] keep the large numeric sentinel [`BIG`] for vertical tangents, this type
/// gives callers an explicit way to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope {
    Vertical,
    Finite(f64),
}

impl Slope {
    pub fn from_value(value: f64) -> Slope {
        if !value.is_finite() || value.abs() >= BIG {
            Slope::Vertical
        } else {
            Slope::Finite(value)
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Slope::Vertical => None,
            Slope::Finite(v) => Some(*v),
        }
    }
}

/// The upper point, lower point and camber point generated at a single chordwise station,
/// together with the slopes of the two surfaces at that station.
#[derive(Debug, Clone, Copy)]
pub struct Station {
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
    pub upper_slope: f64,
    pub lower_slope: f64,
}

impl Station {
    pub fn new(
        camber: Point2<f64>,
        upper: Point2<f64>,
        lower: Point2<f64>,
        upper_slope: f64,
        lower_slope: f64,
    ) -> Station {
        Station {
            camber,
            upper,
            lower,
            upper_slope,
            lower_slope,
        }
    }

    /// The station at the leading edge, where every curve passes through the origin
    pub fn leading_edge(upper_slope: f64, lower_slope: f64) -> Station {
        let origin = Point2::origin();
        Station::new(origin, origin, origin, upper_slope, lower_slope)
    }
}

/// The finished geometry of an airfoil section. All sequences run from the leading edge to the
/// trailing edge, are expressed in chord length units, and the slope vectors are index aligned
/// with their surfaces.
#[derive(Debug, Clone, Serialize)]
pub struct AirfoilGeometry {
    #[serde(serialize_with = "serialize_points")]
    pub upper: Vec<Point2<f64>>,

    #[serde(serialize_with = "serialize_points")]
    pub lower: Vec<Point2<f64>>,

    #[serde(serialize_with = "serialize_points")]
    pub camber: Vec<Point2<f64>>,

    pub upper_slopes: Vec<f64>,
    pub lower_slopes: Vec<f64>,
}

impl AirfoilGeometry {
    pub fn from_stations(stations: &[Station]) -> AirfoilGeometry {
        AirfoilGeometry {
            upper: stations.iter().map(|s| s.upper).collect(),
            lower: stations.iter().map(|s| s.lower).collect(),
            camber: stations.iter().map(|s| s.camber).collect(),
            upper_slopes: stations.iter().map(|s| s.upper_slope).collect(),
            lower_slopes: stations.iter().map(|s| s.lower_slope).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upper.is_empty()
    }

    /// The classified slope of the upper surface at the leading edge
    pub fn leading_edge_slope(&self) -> Option<Slope> {
        self.upper_slopes.first().map(|v| Slope::from_value(*v))
    }

    /// The largest vertical distance between index aligned upper and lower points
    pub fn max_thickness(&self) -> f64 {
        self.upper
            .iter()
            .zip(self.lower.iter())
            .map(|(u, l)| u.y - l.y)
            .fold(0.0, f64::max)
    }

    /// Returns a single closed contour running from the trailing edge along the upper surface to
    /// the leading edge and back along the lower surface.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result: Vec<Point2<f64>> = self.upper.iter().rev().cloned().collect();
        result.extend(self.lower.iter().skip(1));
        result
    }

    /// The outer contour as a polyline with adjacent duplicate vertices removed
    pub fn outer_polyline(&self, tol: f64) -> Polyline<f64> {
        let mut vertices = self.to_outer_contour();
        vertices.dedup_by(|a, b| (*a - *b).norm() <= tol);
        Polyline::new(vertices, None)
    }
}

/// The contract shared by every airfoil section. Implementors only need to provide the cached
/// geometry and the designation; the remaining accessors read from the geometry.
pub trait Airfoil {
    /// The geometry of the section, generated on first access and cached afterwards
    fn geometry(&self) -> &AirfoilGeometry;

    /// A human readable NACA designation reconstructed from the section parameters
    fn designation(&self) -> String;

    fn upper_surface(&self) -> &[Point2<f64>] {
        &self.geometry().upper
    }

    fn lower_surface(&self) -> &[Point2<f64>] {
        &self.geometry().lower
    }

    fn camber_line(&self) -> &[Point2<f64>] {
        &self.geometry().camber
    }

    fn upper_slopes(&self) -> &[f64] {
        &self.geometry().upper_slopes
    }

    fn lower_slopes(&self) -> &[f64] {
        &self.geometry().lower_slopes
    }
}

/// Formats a thickness ratio as the two digit percentage used in designations
pub(crate) fn percent_digits(value: f64) -> String {
    format!("{:02}", (value * 100.0).round() as i64)
}

/// Formats the chord suffix which is appended to designations for a non-unit chord
pub(crate) fn chord_suffix(chord: f64) -> String {
    if chord == 1.0 {
        String::new()
    } else {
        format!(" c={}", chord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    fn sample() -> AirfoilGeometry {
        let stations = vec![
            Station::leading_edge(-BIG, -BIG),
            Station::new(
                Point2::new(0.5, 0.0),
                Point2::new(0.5, 0.06),
                Point2::new(0.5, -0.06),
                0.0,
                0.0,
            ),
            Station::new(
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 0.001),
                Point2::new(1.0, -0.001),
                -0.1,
                0.1,
            ),
        ];
        AirfoilGeometry::from_stations(&stations)
    }

    #[test_case(BIG, Slope::Vertical)]
    #[test_case(-BIG, Slope::Vertical)]
    #[test_case(f64::INFINITY, Slope::Vertical)]
    #[test_case(-3.2, Slope::Finite(-3.2))]
    fn test_slope_classification(v: f64, e: Slope) {
        assert_eq!(e, Slope::from_value(v));
    }

    #[test]
    fn test_from_stations() {
        let g = sample();
        assert_eq!(3, g.len());
        assert_eq!(g.upper.len(), g.lower_slopes.len());
        assert_eq!(Some(Slope::Vertical), g.leading_edge_slope());
        assert_relative_eq!(0.12, g.max_thickness(), epsilon = 1e-12);
    }

    #[test]
    fn test_outer_contour() {
        let g = sample();
        let contour = g.to_outer_contour();
        assert_eq!(5, contour.len());
        assert_eq!(Point2::new(1.0, 0.001), contour[0]);
        assert_eq!(Point2::origin(), contour[2]);
        assert_eq!(Point2::new(1.0, -0.001), contour[4]);

        let line = g.outer_polyline(1e-9);
        assert_eq!(5, line.points().len());
    }

    #[test_case(0.12, "12")]
    #[test_case(0.06, "06")]
    #[test_case(0.29, "29")]
    fn test_percent_digits(v: f64, e: &str) {
        assert_eq!(e, percent_digits(v));
    }

    #[test]
    fn test_chord_suffix() {
        assert_eq!("", chord_suffix(1.0));
        assert_eq!(" c=2.5", chord_suffix(2.5));
    }
}
