//! Builds sections from NACA designation strings such as "NACA 2412", "23012", "0012-34",
//! "16-012", "63-212" or "63A212".

use crate::airfoil::four_digit::FourDigitSection;
use crate::airfoil::profiles::Profile;
use crate::airfoil::six_series::SixSeriesSection;
use crate::airfoil::{Airfoil, AirfoilGeometry};
use crate::errors::{NacaError, Result};
use std::fmt::{Display, Formatter};
use tracing::debug;

/// Any section which can be named by a NACA designation
#[derive(Debug)]
pub enum NacaAirfoil {
    /// 4-digit, modified 4-digit, 16-series and 5-digit sections
    FourDigit(FourDigitSection),

    /// 6-series and 6A-series sections
    SixSeries(SixSeriesSection),
}

impl Airfoil for NacaAirfoil {
    fn geometry(&self) -> &AirfoilGeometry {
        match self {
            NacaAirfoil::FourDigit(a) => a.geometry(),
            NacaAirfoil::SixSeries(a) => a.geometry(),
        }
    }

    fn designation(&self) -> String {
        match self {
            NacaAirfoil::FourDigit(a) => a.designation(),
            NacaAirfoil::SixSeries(a) => a.designation(),
        }
    }
}

impl Display for NacaAirfoil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

impl From<FourDigitSection> for NacaAirfoil {
    fn from(value: FourDigitSection) -> Self {
        NacaAirfoil::FourDigit(value)
    }
}

impl From<SixSeriesSection> for NacaAirfoil {
    fn from(value: SixSeriesSection) -> Self {
        NacaAirfoil::SixSeries(value)
    }
}

/// The characters of a designation with the "NACA" prefix and all whitespace removed
struct Code<'a> {
    original: &'a str,
    chars: Vec<char>,
}

impl<'a> Code<'a> {
    fn new(designation: &'a str) -> Self {
        let mut chars: Vec<char> = designation.chars().filter(|c| !c.is_whitespace()).collect();
        let prefix: String = chars.iter().take(4).collect();
        if prefix.eq_ignore_ascii_case("NACA") {
            chars.drain(..4);
        }

        Code {
            original: designation,
            chars,
        }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn invalid(&self) -> NacaError {
        NacaError::InvalidDesignation(self.original.to_string())
    }

    fn is(&self, i: usize, c: char) -> bool {
        self.chars
            .get(i)
            .map(|v| v.eq_ignore_ascii_case(&c))
            .unwrap_or(false)
    }

    fn digit(&self, i: usize) -> Result<u32> {
        self.chars
            .get(i)
            .and_then(|c| c.to_digit(10))
            .ok_or_else(|| self.invalid())
    }

    /// Two digits read as a percentage, such as the thickness "12" for 0.12
    fn percent(&self, i: usize) -> Result<f64> {
        Ok((self.digit(i)? * 10 + self.digit(i + 1)?) as f64 / 100.0)
    }
}

/// Creates the section named by `designation`, scaled to `chord`.
///
/// # Arguments
///
/// * `designation` - a NACA designation with or without the "NACA" prefix, case and whitespace
/// are ignored
///
/// * `chord` - the chord length of the section
///
/// returns: Result<NacaAirfoil, NacaError>
///
/// # Examples
///
/// ```
/// use naca_rs::{create, Airfoil};
/// let airfoil = create("NACA 2412", 1.0).unwrap();
/// assert_eq!("NACA 2412", airfoil.designation());
/// ```
pub fn create(designation: &str, chord: f64) -> Result<NacaAirfoil> {
    let code = Code::new(designation);

    let airfoil: NacaAirfoil = if code.is(0, '6') && code.len() >= 5 {
        match six_series(&code, chord) {
            Ok(a) => a.into(),
            // Modified 4-digit sections with 6% camber, such as "6412-34"
            Err(NacaError::InvalidDesignation(_)) if is_modified_four_digit(&code) => {
                modified_four_digit(&code, chord)?.into()
            }
            Err(e) => return Err(e),
        }
    } else if code.len() == 4 {
        four_digit(&code, chord)?.into()
    } else if code.len() == 5 {
        five_digit(&code, chord)?.into()
    } else if code.len() == 6 && code.is(0, '1') && code.is(1, '6') {
        FourDigitSection::sixteen_series(code.percent(4)?, chord)?.into()
    } else if is_modified_four_digit(&code) {
        modified_four_digit(&code, chord)?.into()
    } else {
        return Err(code.invalid());
    };

    debug!(designation, created = %airfoil, "parsed NACA designation");
    Ok(airfoil)
}

fn is_modified_four_digit(code: &Code) -> bool {
    code.len() == 7 && code.is(4, '-')
}

fn four_digit(code: &Code, chord: f64) -> Result<FourDigitSection> {
    let camber = code.digit(0)? as f64 / 100.0;
    let x_camber = code.digit(1)? as f64 / 10.0;
    let toc = code.percent(2)?;

    if camber == 0.0 {
        FourDigitSection::uncambered(toc, chord)
    } else {
        FourDigitSection::cambered(toc, camber, x_camber, chord)
    }
}

fn five_digit(code: &Code, chord: f64) -> Result<FourDigitSection> {
    let camber_code = code.digit(0)? * 10 + code.digit(1)?;
    let toc = code.percent(3)?;

    if code.digit(2)? == 0 {
        FourDigitSection::five_digit(toc, camber_code, chord)
    } else {
        FourDigitSection::five_digit_reflexed(toc, camber_code, chord)
    }
}

fn modified_four_digit(code: &Code, chord: f64) -> Result<FourDigitSection> {
    let camber = code.digit(0)? as f64 / 100.0;
    let x_camber = code.digit(1)? as f64 / 10.0;
    let toc = code.percent(2)?;
    let le_index = code.digit(5)? as u8;
    let x_max_thickness = code.digit(6)? as f64 / 10.0;

    if camber == 0.0 {
        FourDigitSection::modified(toc, le_index, x_max_thickness, chord)
    } else {
        FourDigitSection::modified_cambered(toc, camber, x_camber, le_index, x_max_thickness, chord)
    }
}

fn six_series(code: &Code, chord: f64) -> Result<SixSeriesSection> {
    let profile_digit = code.digit(1)?;
    let a_series = code.is(2, 'A');

    let mut start = if a_series { 3 } else { 2 };
    if code.is(start, '-') {
        start += 1;
    }
    if code.len() != start + 3 {
        return Err(code.invalid());
    }

    let cli = code.digit(start)? as f64 / 10.0;
    let toc = code.percent(start + 1)?;

    if a_series {
        if profile_digit == 5 {
            return Err(NacaError::UnsupportedProfile("65A".to_string()));
        }
        let profile = Profile::from_digit(profile_digit).map_err(|_| code.invalid())?;
        if !profile.has_a_series() {
            return Err(code.invalid());
        }
        SixSeriesSection::a_series(profile, cli, toc, chord)
    } else {
        let profile = Profile::from_digit(profile_digit).map_err(|e| match e {
            NacaError::UnsupportedProfile(p) => NacaError::UnsupportedProfile(p),
            _ => code.invalid(),
        })?;
        SixSeriesSection::new(profile, cli, toc, chord)
    }
}
