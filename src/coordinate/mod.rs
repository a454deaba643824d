use crate::math::angular;
use crate::Error;
use log::error;

pub mod coor2d;
pub use coor2d::Coor2D;

/// Check that `value` is within `[min, max]`. Non-finite values pass: they are
/// propagated through the computations, and show up as non-finite output.
pub(crate) fn check_range(
    what: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), Error> {
    if value.is_finite() && !(min..=max).contains(&value) {
        error!("{what} {value} outside the interval [{min}, {max}]");
        return Err(Error::OutOfRange {
            what,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Check a latitude/longitude pair, given in degrees
pub(crate) fn check_geographic(latitude: f64, longitude: f64) -> Result<(), Error> {
    check_range("latitude", latitude, -90., 90.)?;
    check_range("longitude", longitude, -180., 180.)
}

// ----- G E O D E T I C ---------------------------------------------------------------

/// A latitude/longitude pair on some ellipsoid. Internally in radians.
///
/// The constructors take degrees, and reject latitudes outside [-90, 90]
/// and longitudes outside [-180, 180]. `NaN` and infinities are let through,
/// and come out as non-finite projected coordinates.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Geodetic {
    latitude: f64,
    longitude: f64,
}

impl Geodetic {
    /// A `Geodetic` from latitude and longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Result<Geodetic, Error> {
        check_geographic(latitude, longitude)?;
        Ok(Geodetic {
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
        })
    }

    /// A `Geodetic` from latitude and longitude given as (negative, degrees,
    /// minutes, seconds) tuples, e.g. `(false, 52, 39, 27.2531)`
    pub fn dms(
        latitude: (bool, u16, u16, f64),
        longitude: (bool, u16, u16, f64),
    ) -> Result<Geodetic, Error> {
        let (n, d, m, s) = latitude;
        let latitude = angular::signed_dms_to_dd(n, d, m, s);
        let (n, d, m, s) = longitude;
        let longitude = angular::signed_dms_to_dd(n, d, m, s);
        Geodetic::new(latitude, longitude)
    }

    /// The latitude, 𝜙, in radians
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// The longitude, 𝜆, in radians
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// (latitude, longitude) in degrees
    #[must_use]
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.latitude.to_degrees(), self.longitude.to_degrees())
    }
}

// ----- P R O J E C T E D -------------------------------------------------------------

/// Easting and Northing, in metres. Only meaningful together with the
/// [`ProjectionOrigin`](crate::origin::ProjectionOrigin) that produced it.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Projected {
    pub easting: f64,
    pub northing: f64,
}

impl Projected {
    #[must_use]
    pub fn new(easting: f64, northing: f64) -> Projected {
        Projected { easting, northing }
    }

    /// Euclidean distance to `other`, in metres
    #[must_use]
    pub fn distance(&self, other: &Projected) -> f64 {
        (self.easting - other.easting).hypot(self.northing - other.northing)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.easting.is_finite() && self.northing.is_finite()
    }
}

// ----- T E S T S ---------------------------------------------------
