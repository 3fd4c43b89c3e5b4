use ncollide2d::na::Point2;
use serde::ser::Serializer;
use serde::Serialize;

#[derive(Serialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct PointRecord(#[serde(with = "Point2f64")] Point2<f64>);

/// Serializes a sequence of points as a list of `{"x": .., "y": ..}` objects
pub fn serialize_points<S: Serializer>(points: &[Point2<f64>], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(points.iter().map(|p| PointRecord(*p)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::{AirfoilGeometry, Station};

    #[test]
    fn test_geometry_json() {
        let geometry = AirfoilGeometry::from_stations(&[
            Station::leading_edge(-2.0, -2.0),
            Station::new(
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 0.5),
                Point2::new(1.0, -0.5),
                0.25,
                -0.25,
            ),
        ]);
        let value = serde_json::to_value(&geometry).unwrap();

        assert_eq!(0.5, value["upper"][1]["y"].as_f64().unwrap());
        assert_eq!(-0.5, value["lower"][1]["y"].as_f64().unwrap());
        assert_eq!(1.0, value["camber"][1]["x"].as_f64().unwrap());
        assert_eq!(-2.0, value["upper_slopes"][0].as_f64().unwrap());
    }
}
