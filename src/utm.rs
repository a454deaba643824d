//! Universal Transverse Mercator zones and their EPSG codes
use crate::coordinate::check_geographic;
use crate::origin::ProjectionOrigin;
use crate::Error;
use log::trace;
use std::fmt;

/// A UTM zone: one of the 60 six-degree-wide longitude strips, numbered
/// eastwards from 1 at 180°W, together with its hemisphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UtmZone {
    band: u8,
    north: bool,
}

impl UtmZone {
    /// The zone numbered `band` (1..=60), northern or southern aspect
    pub fn new(band: u8, north: bool) -> Result<UtmZone, Error> {
        if !(1..=60).contains(&band) {
            return Err(Error::OutOfRange {
                what: "UTM zone",
                value: band as f64,
                min: 1.,
                max: 60.,
            });
        }
        Ok(UtmZone { band, north })
    }

    /// The zone covering `longitude`, `latitude` (degrees).
    ///
    /// Longitudes outside [-180, 180] and latitudes outside [-90, 90] are
    /// rejected. Both 180° and -180° map to zone 1. Latitude 0 counts as north.
    pub fn resolve(longitude: f64, latitude: f64) -> Result<UtmZone, Error> {
        check_geographic(latitude, longitude)?;
        UtmZone::wrapping(longitude, latitude)
    }

    /// As [resolve](UtmZone::resolve), but without range checks: any finite
    /// longitude is wrapped into one of the 60 zones.
    pub fn wrapping(longitude: f64, latitude: f64) -> Result<UtmZone, Error> {
        if !longitude.is_finite() {
            return Err(Error::NonFinite("longitude"));
        }
        if !latitude.is_finite() {
            return Err(Error::NonFinite("latitude"));
        }
        let band = ((longitude + 180.) / 6.).floor().rem_euclid(60.) as u8 + 1;
        let north = latitude >= 0.;
        trace!("({longitude}, {latitude}) -> zone {band}, north: {north}");
        Ok(UtmZone { band, north })
    }

    /// The zone number, 1..=60
    #[must_use]
    pub fn band(&self) -> u8 {
        self.band
    }

    /// The zone number as a two character, zero padded string, e.g. "05"
    #[must_use]
    pub fn band_code(&self) -> String {
        format!("{:02}", self.band)
    }

    #[must_use]
    pub fn is_north(&self) -> bool {
        self.north
    }

    /// The EPSG code of the WGS84 based UTM projection for this zone:
    /// 326xx in the north, 327xx in the south
    #[must_use]
    pub fn epsg(&self) -> u32 {
        let base = if self.north { 32600 } else { 32700 };
        base + self.band as u32
    }

    /// The EPSG code as a 5 character string, e.g. "32630"
    #[must_use]
    pub fn epsg_code(&self) -> String {
        let hemisphere = if self.north { "326" } else { "327" };
        format!("{hemisphere}{}", self.band_code())
    }

    /// The longitude of the central meridian, in degrees
    #[must_use]
    pub fn central_meridian(&self) -> f64 {
        -183. + 6. * self.band as f64
    }

    /// The grid defined by this zone: central meridian scale 0.9996, false
    /// easting 500 km, and false northing 10 000 km in the south
    #[must_use]
    pub fn origin(&self) -> ProjectionOrigin {
        ProjectionOrigin::from(*self)
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let hemisphere = if self.north { 'N' } else { 'S' };
        write!(f, "{}{}", self.band, hemisphere)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
