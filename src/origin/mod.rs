//! The defining constants of a Transverse Mercator grid
use crate::coordinate::check_range;
use crate::utm::UtmZone;
use crate::Error;
use log::{debug, warn};
use std::str::FromStr;

pub mod parameter;
use parameter::{OriginParameter, ParsedParameters};

/// The true origin, central meridian scale factor, and false origin offsets
/// of a Transverse Mercator grid.
///
/// The angular elements are kept in radians, the offsets in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionOrigin {
    lat_0: f64,
    lon_0: f64,
    k_0: f64,
    x_0: f64,
    y_0: f64,
}

impl ProjectionOrigin {
    /// A `ProjectionOrigin` from the latitude and longitude of true origin (in
    /// degrees), the scale factor on the central meridian, and the false
    /// easting and northing (in metres).
    pub fn new(lat_0: f64, lon_0: f64, k_0: f64, x_0: f64, y_0: f64) -> Result<Self, Error> {
        for (what, value) in [
            ("lat_0", lat_0),
            ("lon_0", lon_0),
            ("k_0", k_0),
            ("x_0", x_0),
            ("y_0", y_0),
        ] {
            if !value.is_finite() {
                return Err(Error::NonFinite(what));
            }
        }
        check_range("lat_0", lat_0, -90., 90.)?;
        check_range("lon_0", lon_0, -180., 180.)?;
        if k_0 <= 0. {
            return Err(Error::BadParam("k_0".to_string(), k_0.to_string()));
        }

        Ok(ProjectionOrigin {
            lat_0: lat_0.to_radians(),
            lon_0: lon_0.to_radians(),
            k_0,
            x_0,
            y_0,
        })
    }

    /// The Ordnance Survey National Grid (EPSG:27700), on OSGB36/Airy 1830
    #[must_use]
    pub fn british_national_grid() -> Self {
        ProjectionOrigin {
            lat_0: 49_f64.to_radians(),
            lon_0: (-2_f64).to_radians(),
            k_0: 0.999_601_271_7,
            x_0: 400_000.,
            y_0: -100_000.,
        }
    }

    /// The Irish Grid (EPSG:29903), on TM65/Airy modified
    #[must_use]
    pub fn irish_grid() -> Self {
        ProjectionOrigin {
            lat_0: 53.5_f64.to_radians(),
            lon_0: (-8_f64).to_radians(),
            k_0: 1.000_035,
            x_0: 200_000.,
            y_0: 250_000.,
        }
    }

    /// The origin of UTM `zone` (1..=60), northern or southern aspect
    pub fn utm(zone: u8, north: bool) -> Result<Self, Error> {
        Ok(UtmZone::new(zone, north)?.into())
    }

    /// The latitude of true origin, 𝜙₀, in radians
    #[must_use]
    pub fn lat_0(&self) -> f64 {
        self.lat_0
    }

    /// The longitude of true origin (the central meridian), 𝜆₀, in radians
    #[must_use]
    pub fn lon_0(&self) -> f64 {
        self.lon_0
    }

    /// The scale factor on the central meridian, *F₀*
    #[must_use]
    pub fn k_0(&self) -> f64 {
        self.k_0
    }

    /// The false easting, *E₀*, in metres
    #[must_use]
    pub fn x_0(&self) -> f64 {
        self.x_0
    }

    /// The false northing, *N₀*, in metres
    #[must_use]
    pub fn y_0(&self) -> f64 {
        self.y_0
    }
}

// ----- D E F I N I T I O N S ---------------------------------------------------------

#[rustfmt::skip]
pub const TMERC_GAMUT: [OriginParameter; 5] = [
    OriginParameter::Real { key: "lat_0", default: Some(0_f64) },
    OriginParameter::Real { key: "lon_0", default: Some(0_f64) },
    OriginParameter::Real { key: "k_0",   default: Some(1_f64) },
    OriginParameter::Real { key: "x_0",   default: Some(0_f64) },
    OriginParameter::Real { key: "y_0",   default: Some(0_f64) },
];

#[rustfmt::skip]
pub const UTM_GAMUT: [OriginParameter; 2] = [
    OriginParameter::Flag    { key: "south" },
    OriginParameter::Natural { key: "zone", default: None },
];

/// Parse a grid definition. Accepted forms are the presets `bng` and `irish`,
/// `utm zone=N [south]`, and the general `tmerc` form with any of the parameters
/// `lat_0 lon_0 k_0 x_0 y_0` given (angles in degrees), e.g.
/// `tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000`.
impl FromStr for ProjectionOrigin {
    type Err = Error;

    fn from_str(definition: &str) -> Result<Self, Error> {
        let (name, given) = parameter::split_into_parameters(definition)?;
        let origin = match name.as_str() {
            "bng" | "irish" => {
                for key in given.keys() {
                    warn!("{name}: ignoring parameter '{key}' for a preset grid");
                }
                if name == "bng" {
                    ProjectionOrigin::british_national_grid()
                } else {
                    ProjectionOrigin::irish_grid()
                }
            }

            "utm" => {
                let params = ParsedParameters::new(definition, &UTM_GAMUT)?;
                let zone = params.natural("zone")?;
                let zone = u8::try_from(zone)
                    .map_err(|_| Error::BadParam("zone".to_string(), zone.to_string()))?;
                ProjectionOrigin::utm(zone, !params.boolean("south"))?
            }

            "tmerc" => {
                let params = ParsedParameters::new(definition, &TMERC_GAMUT)?;
                ProjectionOrigin::new(
                    params.real("lat_0")?,
                    params.real("lon_0")?,
                    params.real("k_0")?,
                    params.real("x_0")?,
                    params.real("y_0")?,
                )?
            }

            _ => {
                return Err(Error::Syntax(format!(
                    "unknown grid '{name}' (expected one of: bng, irish, utm, tmerc)"
                )))
            }
        };
        debug!("'{definition}' -> {origin:?}");
        Ok(origin)
    }
}

impl From<UtmZone> for ProjectionOrigin {
    fn from(zone: UtmZone) -> Self {
        ProjectionOrigin {
            lat_0: 0.,
            lon_0: zone.central_meridian().to_radians(),
            k_0: 0.9996,
            x_0: 500_000.,
            y_0: if zone.is_north() { 0. } else { 10_000_000. },
        }
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() -> Result<(), Error> {
        let bng = ProjectionOrigin::british_national_grid();
        assert_eq!(bng.lat_0(), 49_f64.to_radians());
        assert_eq!(bng.lon_0(), (-2_f64).to_radians());
        assert_eq!(bng.k_0(), 0.9996012717);
        assert_eq!(bng.x_0(), 400_000.);
        assert_eq!(bng.y_0(), -100_000.);
        assert_eq!(
            ProjectionOrigin::new(49., -2., 0.9996012717, 4e5, -1e5)?,
            bng
        );

        let utm = ProjectionOrigin::utm(32, true)?;
        assert_eq!(utm.lon_0(), 9_f64.to_radians());
        assert_eq!((utm.k_0(), utm.x_0(), utm.y_0()), (0.9996, 5e5, 0.));
        assert_eq!(ProjectionOrigin::utm(32, false)?.y_0(), 1e7);
        assert_eq!(ProjectionOrigin::utm(1, true)?.lon_0(), (-177_f64).to_radians());
        assert!(ProjectionOrigin::utm(0, true).is_err());
        assert!(ProjectionOrigin::utm(61, true).is_err());

        let zone = UtmZone::resolve(-1.4, -50.9)?;
        assert_eq!(ProjectionOrigin::from(zone), ProjectionOrigin::utm(30, false)?);
        Ok(())
    }

    #[test]
    fn validation() {
        assert!(matches!(
            ProjectionOrigin::new(91., 0., 1., 0., 0.),
            Err(Error::OutOfRange { what: "lat_0", .. })
        ));
        assert!(ProjectionOrigin::new(0., 181., 1., 0., 0.).is_err());
        assert!(ProjectionOrigin::new(0., 0., 0., 0., 0.).is_err());
        assert_eq!(
            ProjectionOrigin::new(0., 0., 1., f64::NAN, 0.),
            Err(Error::NonFinite("x_0"))
        );
    }

    #[test]
    fn definitions() -> Result<(), Error> {
        let bng = ProjectionOrigin::british_national_grid();
        assert_eq!("bng".parse::<ProjectionOrigin>()?, bng);
        let def = "tmerc lat_0=49 lon_0=-2 k_0=0.9996012717 x_0=400000 y_0=-100000";
        assert_eq!(def.parse::<ProjectionOrigin>()?, bng);

        // Defaults, and unknown parameters ignored
        let plain: ProjectionOrigin = "tmerc lon_0=9 ellps=GRS80".parse()?;
        assert_eq!(plain, ProjectionOrigin::new(0., 9., 1., 0., 0.)?);

        let utm: ProjectionOrigin = "utm zone=30 south".parse()?;
        assert_eq!(utm, ProjectionOrigin::utm(30, false)?);
        assert!("utm zone=61".parse::<ProjectionOrigin>().is_err());
        assert!("utm zone=300".parse::<ProjectionOrigin>().is_err());
        assert_eq!(
            "utm".parse::<ProjectionOrigin>(),
            Err(Error::MissingParam("zone".to_string()))
        );

        assert_eq!("irish".parse::<ProjectionOrigin>()?, ProjectionOrigin::irish_grid());
        assert!(matches!(
            "lcc lat_1=55".parse::<ProjectionOrigin>(),
            Err(Error::Syntax(_))
        ));
        assert!("tmerc k_0=-1".parse::<ProjectionOrigin>().is_err());
        Ok(())
    }
}
