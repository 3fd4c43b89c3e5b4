//! The NACA 6 and 6A-series sections. The thickness distribution comes from a conformal mapping
//! scaled onto the requested thickness ratio, the mean line from the closed form solution for a
//! uniform chordwise loading which extends to `aa`.

use super::a_series::{self, CamberLock, MeanLinePoint, TrailingEdgeBlend};
use super::profiles::{Profile, ProfileTables};
use super::{chord_suffix, percent_digits, Airfoil, AirfoilGeometry, Station};
use crate::errors::{NacaError, Result};
use crate::spline::{self, SplineCoefficients};
use itertools::Itertools;
use ncollide2d::na::Point2;
use once_cell::sync::OnceCell;
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use tracing::{debug, warn};

/// Threshold below which the design lift coefficient counts as zero
const TINY: f64 = 1e-10;

/// Proximity used by the mean line to detect its singular stations
const EPS: f64 = 1e-11;

/// Base chordwise step of the generation pass
const DX: f64 = 0.01;

const FIRST_STATION: f64 = 0.00025;
const LAST_STATION: f64 = 1.0000000001;

/// Limits of the thickness ratio iteration
const MAX_ITERATIONS: usize = 10;
const RATIO_TOLERANCE: f64 = 1e-4;

/// Number of leading entries of the thickness table replaced by the nose ellipse
const ELLIPSE_POINTS: usize = 10;

/// Stand in for the unbounded mean line derivatives at the trailing edge
const UNBOUNDED: f64 = -1e11;

fn step_fraction(x: f64) -> f64 {
    if x <= 0.012251 {
        0.025
    } else if x <= 0.09751 {
        0.25
    } else {
        1.0
    }
}

/// A thickness table obtained from the mapping at a single exponent, in mapping coordinates
struct MappedThickness {
    x: Vec<f64>,
    y: Vec<f64>,
    slope: Vec<f64>,
    coef: SplineCoefficients,
}

impl MappedThickness {
    fn new(tables: &ProfileTables, exponent: f64) -> Self {
        let (x, y): (Vec<f64>, Vec<f64>) = tables
            .phi()
            .iter()
            .zip(tables.epsilon())
            .zip(tables.psi())
            .map(|((phi, eps), psi)| {
                let angle = phi - eps * exponent;
                let radial = psi * exponent;
                (
                    -2.0 * radial.cosh() * angle.cos(),
                    2.0 * radial.sinh() * angle.sin(),
                )
            })
            .unzip();

        let coef = spline::fit(&x, &y);
        let slope = x
            .iter()
            .map(|u| spline::evaluate_with_derivative(*u, &x, &y, &coef).1)
            .collect();

        MappedThickness { x, y, slope, coef }
    }

    fn leading_edge(&self) -> f64 {
        self.x[0]
    }

    /// The chord is measured to the next to last table point, as in the NASA TM X-3069 program
    fn trailing_edge(&self) -> f64 {
        self.x[self.x.len() - 2]
    }

    /// The half thickness at the last point where the slope changes sign from positive to
    /// negative, falling back on x = 1 when there is none.
    fn max_half_thickness(&self) -> f64 {
        let n = self.x.len();
        let xtp = (1..n - 1)
            .tuple_windows::<(usize, usize)>()
            .filter(|&(a, b)| self.slope[b] < 0.0 && self.slope[a] >= 0.0)
            .last()
            .map(|(a, b)| {
                self.x[a] + self.slope[a] * (self.x[b] - self.x[a]) / (self.slope[a] - self.slope[b])
            })
            .unwrap_or(1.0);

        spline::evaluate(xtp, &self.x, &self.y, &self.coef)
    }

    /// The full thickness to chord ratio of this table
    fn thickness_ratio(&self) -> f64 {
        2.0 * self.max_half_thickness() / (self.trailing_edge() - self.leading_edge())
    }
}

/// The half thickness distribution of a 6-series section on the unit chord, ready to be
/// evaluated at any station.
#[derive(Debug, Clone)]
pub struct ThicknessDistribution {
    x: Vec<f64>,
    y: Vec<f64>,
    coef: SplineCoefficients,
    iterations: usize,
}

impl ThicknessDistribution {
    /// Scales the mapping of `tables` until its thickness ratio matches `toc`, normalizes it onto
    /// the unit chord, and blends an ellipse onto the nose.
    pub fn solve(tables: &ProfileTables, toc: f64) -> Self {
        let mut ratio = 1.0;
        let mut exponent = 1.0;
        let mut iterations = 0;
        let mut mapped;

        loop {
            iterations += 1;
            exponent *= ratio;
            mapped = MappedThickness::new(tables, exponent);
            ratio = toc / mapped.thickness_ratio();
            debug!(iteration = iterations, ratio, "6-series thickness iteration");

            if (ratio - 1.0).abs() <= RATIO_TOLERANCE {
                break;
            }
            if iterations >= MAX_ITERATIONS {
                warn!(ratio, toc, "6-series thickness did not converge, using last iterate");
                break;
            }
        }

        let x0 = mapped.leading_edge();
        let length = mapped.trailing_edge() - x0;
        let x: Vec<f64> = mapped.x.iter().map(|v| (v - x0) / length).collect();
        let mut y: Vec<f64> = mapped.y.iter().map(|v| ratio * v / length).collect();
        let slope: Vec<f64> = mapped.slope.iter().map(|v| ratio * v).collect();

        blend_nose_ellipse(&x, &mut y, &slope);
        let coef = spline::fit(&x, &y);

        ThicknessDistribution {
            x,
            y,
            coef,
            iterations,
        }
    }

    /// Number of mapping evaluations it took to reach the thickness ratio
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Half thickness and its slope at `x`
    pub fn at(&self, x: f64) -> (f64, f64) {
        spline::evaluate_with_derivative(x, &self.x, &self.y, &self.coef)
    }
}

/// Replaces the first points of the table with an ellipse, tilted by a straight line, which
/// matches the ordinate and slope of the table at the last replaced point.
fn blend_nose_ellipse(x: &[f64], y: &mut [f64], slope: &[f64]) {
    let (x10, y10, s10) = (x[ELLIPSE_POINTS], y[ELLIPSE_POINTS], slope[ELLIPSE_POINTS]);

    let cn = 2.0 * s10 - y10 / x10 + 0.1;
    let an = x10 * (s10 * x10 - y10) / (x10 * (2.0 * s10 - cn) - y10);
    let an2 = an * an;
    let offset = y10 - cn * x10;
    let dx = x10 - an;
    let bn = (offset * offset / (1.0 - dx * dx / an2)).sqrt();

    for j in 0..ELLIPSE_POINTS {
        let dx = x[j] - an;
        y[j] = bn * (1.0 - dx * dx / an2).sqrt() + cn * x[j];
    }
}

/// The auxiliary terms of the mean line solution at a single station
#[derive(Debug, Clone, Copy)]
struct LoadingTerms {
    g: f64,
    h: f64,
    q: f64,
    z: f64,
    z1: f64,
    z2: f64,
}

impl LoadingTerms {
    fn g_h(aa: f64) -> (f64, f64) {
        if aa <= EPS {
            return (-0.25, -0.5);
        }

        let omaa = 1.0 - aa;
        let g = -(aa * aa * (0.5 * aa.ln() - 0.25) + 0.25) / omaa;
        let h = (0.5 * omaa * omaa * omaa.ln() - 0.25 * omaa * omaa) / omaa + g;
        (g, h)
    }

    fn at(x: f64, aa: f64) -> LoadingTerms {
        let omx = 1.0 - x;

        if (1.0 - aa).abs() < EPS && omx.abs() < EPS {
            LoadingTerms {
                g: 0.0,
                h: 0.0,
                q: 0.0,
                z: 0.0,
                z1: UNBOUNDED,
                z2: UNBOUNDED,
            }
        } else if aa < EPS && omx < EPS {
            LoadingTerms {
                g: -0.25,
                h: -0.5,
                q: 1.0,
                z: -0.25,
                z1: 0.0,
                z2: UNBOUNDED,
            }
        } else if (aa - x).abs() < EPS {
            let (g, h) = Self::g_h(aa);
            let lomx = omx.ln();
            LoadingTerms {
                g,
                h,
                q: 1.0,
                z: -0.5 * omx * omx * lomx + 0.25 * omx * omx,
                z1: -0.5 * omx * (-lomx - 1.0) + 0.5 * omx * lomx - 0.5 * omx,
                z2: -lomx - 0.5,
            }
        } else if omx.abs() < EPS {
            let (g, h) = Self::g_h(aa);
            let aam1 = aa - 1.0;
            let laam1 = aam1.abs().ln();
            LoadingTerms {
                g,
                h,
                q: 1.0,
                z: 0.5 * aam1 * aam1 * laam1 - 0.25 * aam1 * aam1,
                z1: -aam1 * laam1,
                z2: UNBOUNDED,
            }
        } else if (aa - 1.0).abs() < EPS {
            LoadingTerms {
                g: 0.0,
                h: 0.0,
                q: 0.0,
                z: -omx * omx.ln(),
                z1: omx.ln() + 1.0,
                z2: -1.0 / omx,
            }
        } else {
            let (g, h) = Self::g_h(aa);
            let aamx = aa - x;
            let omxl = omx * omx.ln();
            let amxl = aamx * aamx.abs().ln();
            let omxl1 = -omx.ln() - 1.0;
            let amxl1 = -aamx.abs().ln() - 1.0;
            let omxl2 = 1.0 / omx;
            let amxl2 = 1.0 / aamx;
            LoadingTerms {
                g,
                h,
                q: 1.0,
                z: 0.5 * aamx * amxl - 0.5 * omx * omxl - 0.25 * aamx * aamx + 0.25 * omx * omx,
                z1: 0.5 * (aamx * amxl1 - amxl - omx * omxl1 + omxl + aamx - omx),
                z2: 0.5 * aamx * amxl2 - amxl1 - 0.5 * omx * omxl2 + omxl1,
            }
        }
    }
}

/// Evaluates the mean line for design lift coefficient `cli` and loading extent `aa` at `x`
pub fn mean_line(x: f64, aa: f64, cli: f64) -> MeanLinePoint {
    let t = LoadingTerms::at(x, aa);
    let denom = 1.0 - t.q * aa;
    let scale = cli / PI / (aa + 1.0) / 2.0;

    let y = scale * (t.z / denom - x * x.ln() + t.g - t.h * x);
    let tan_theta = scale * (t.z1 / denom - 1.0 - x.max(0.005).ln() - t.h);
    let curvature = if x <= 0.005 {
        0.0
    } else if (1.0 - x).abs() <= EPS {
        1.0 / EPS
    } else {
        scale * (t.z2 / denom - 1.0 / x)
    };

    MeanLinePoint {
        y,
        tan_theta,
        curvature,
    }
}

/// Which 6-series profile a section uses
#[derive(Debug, Clone, PartialEq)]
enum ProfileSource {
    Bundled(Profile),
    Custom(String),
}

impl ProfileSource {
    fn code(&self) -> &str {
        match self {
            ProfileSource::Bundled(p) => p.code(),
            ProfileSource::Custom(code) => code,
        }
    }
}

/// A NACA 6-series or 6A-series section
#[derive(Debug)]
pub struct SixSeriesSection {
    profile: ProfileSource,
    tables: ProfileTables,
    a_series: bool,
    cli: f64,
    toc: f64,
    chord: f64,
    geometry: OnceCell<AirfoilGeometry>,
}

impl SixSeriesSection {
    fn build(
        profile: ProfileSource,
        tables: ProfileTables,
        a_series: bool,
        cli: f64,
        toc: f64,
        chord: f64,
    ) -> Result<Self> {
        if !cli.is_finite() {
            return Err(NacaError::InvalidParameter {
                name: "design lift coefficient",
                value: cli,
            });
        }

        Ok(SixSeriesSection {
            profile,
            tables,
            a_series,
            cli,
            toc: NacaError::require_positive("thickness", toc)?,
            chord: NacaError::require_positive("chord", chord)?,
            geometry: OnceCell::new(),
        })
    }

    /// Create a 6-series section such as the NACA 63-212, which has a design lift coefficient
    /// `cli` of 0.2 and a thickness ratio `toc` of 0.12.
    pub fn new(profile: Profile, cli: f64, toc: f64, chord: f64) -> Result<Self> {
        let tables = profile.tables()?.clone();
        Self::build(ProfileSource::Bundled(profile), tables, false, cli, toc, chord)
    }

    /// Create a 6A-series section such as the NACA 63A212. Only the 63 and 64 profiles have an
    /// A-series variant.
    pub fn a_series(profile: Profile, cli: f64, toc: f64, chord: f64) -> Result<Self> {
        if !profile.has_a_series() {
            return Err(NacaError::UnsupportedProfile(format!("{}A", profile)));
        }

        let tables = profile.tables()?.clone();
        Self::build(ProfileSource::Bundled(profile), tables, true, cli, toc, chord)
    }

    /// Create a section from user supplied mapping tables, for profiles whose tables are not
    /// bundled. `code` is the two character profile code used in the designation.
    pub fn from_tables(
        code: &str,
        tables: ProfileTables,
        a_series: bool,
        cli: f64,
        toc: f64,
        chord: f64,
    ) -> Result<Self> {
        Self::build(
            ProfileSource::Custom(code.to_string()),
            tables,
            a_series,
            cli,
            toc,
            chord,
        )
    }

    pub fn profile_code(&self) -> &str {
        self.profile.code()
    }

    pub fn is_a_series(&self) -> bool {
        self.a_series
    }

    pub fn design_lift(&self) -> f64 {
        self.cli
    }

    pub fn thickness_ratio(&self) -> f64 {
        self.toc
    }

    pub fn chord(&self) -> f64 {
        self.chord
    }

    fn loading(&self) -> f64 {
        if self.a_series {
            a_series::LOADING
        } else {
            1.0
        }
    }

    fn generate(&self) -> AirfoilGeometry {
        let thickness = ThicknessDistribution::solve(&self.tables, self.toc);
        let aa = self.loading();
        let cambered = self.cli.abs() >= TINY;
        let c = self.chord;

        let mut lock = CamberLock::default();
        let mut blend = TrailingEdgeBlend::default();
        let mut stations = vec![Station::leading_edge(0.0, 0.0)];

        let mut x = FIRST_STATION;
        while x <= LAST_STATION {
            let (y, _) = thickness.at(x);

            let mut camber = mean_line(x, aa, self.cli);
            if self.a_series {
                camber = lock.apply(x, self.cli, camber);
            }

            let f = (1.0 + camber.tan_theta * camber.tan_theta).sqrt();
            let sin_theta = camber.tan_theta / f;
            let cos_theta = 1.0 / f;

            let xu = x - y * sin_theta;
            let xl = x + y * sin_theta;
            let mut yu = camber.y + y * cos_theta;
            let mut yl = camber.y - y * cos_theta;
            if self.a_series {
                let (u, l) = blend.apply(x, xu, yu, xl, yl);
                yu = u;
                yl = l;
            }

            let upper = Point2::new(xu * c, yu * c);
            let lower = if cambered {
                Point2::new(xl * c, yl * c)
            } else {
                Point2::new(xu * c, -yu * c)
            };
            stations.push(Station::new(Point2::new(x * c, camber.y * c), upper, lower, 0.0, 0.0));

            x += step_fraction(x) * DX;
        }

        let mut geometry = AirfoilGeometry::from_stations(&stations);
        geometry.upper_slopes = surface_slopes(&geometry.upper);
        geometry.lower_slopes = if cambered {
            surface_slopes(&geometry.lower)
        } else {
            geometry.upper_slopes.iter().map(|s| -s).collect()
        };

        debug!(
            designation = %self,
            iterations = thickness.iterations(),
            stations = stations.len(),
            "generated 6-series geometry"
        );
        geometry
    }
}

/// Slopes of a finished surface taken from a spline through its own points
fn surface_slopes(points: &[Point2<f64>]) -> Vec<f64> {
    let x: Vec<f64> = points.iter().map(|p| p.x).collect();
    let y: Vec<f64> = points.iter().map(|p| p.y).collect();
    let coef = spline::fit(&x, &y);
    x.iter()
        .map(|u| spline::evaluate_with_derivative(*u, &x, &y, &coef).1)
        .collect()
}

impl Airfoil for SixSeriesSection {
    fn geometry(&self) -> &AirfoilGeometry {
        self.geometry.get_or_init(|| self.generate())
    }

    fn designation(&self) -> String {
        self.to_string()
    }
}

impl Display for SixSeriesSection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let separator = if self.a_series { "A" } else { "-" };
        write!(
            f,
            "NACA {}{}{}{}{}",
            self.profile.code(),
            separator,
            (self.cli * 10.0).round() as i64,
            percent_digits(self.toc),
            chord_suffix(self.chord)
        )
    }
}
