use super::*;
use std::ops::{Index, IndexMut};

/// Generic 2D Coordinate tuple, the element type of batch operations.
///
/// Geographic coordinates are stored as (longitude, latitude) in degrees,
/// i.e. in GIS order. After a forward projection, the same slots hold
/// (easting, northing) in metres.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor2D(pub [f64; 2]);

impl Index<usize> for Coor2D {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Coor2D {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coor2D {
    /// A `Coor2D` from latitude/longitude in degrees
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> Coor2D {
        Coor2D([longitude, latitude])
    }

    /// A `Coor2D` from longitude/latitude in degrees
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> Coor2D {
        Coor2D([longitude, latitude])
    }

    /// A `Coor2D` from latitude/longitude given in degrees, minutes and seconds
    #[must_use]
    pub fn dms(latitude: (i32, u16, f64), longitude: (i32, u16, f64)) -> Coor2D {
        let latitude = angular::dms_to_dd(latitude.0, latitude.1, latitude.2);
        let longitude = angular::dms_to_dd(longitude.0, longitude.1, longitude.2);
        Coor2D::geo(latitude, longitude)
    }

    /// A `Coor2D` from two arbitrary values, e.g. easting/northing
    #[must_use]
    pub fn raw(first: f64, second: f64) -> Coor2D {
        Coor2D([first, second])
    }

    /// A `Coor2D` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> Coor2D {
        Coor2D([f64::NAN, f64::NAN])
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl Coor2D {
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// The latitude of a geographic `Coor2D`, in degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.0[1]
    }

    /// The longitude of a geographic `Coor2D`, in degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.0[0]
    }

    /// Euclidean distance between two points in the 2D plane.
    #[must_use]
    pub fn hypot2(&self, other: &Self) -> f64 {
        (self.x() - other.x()).hypot(self.y() - other.y())
    }
}

impl From<Projected> for Coor2D {
    fn from(p: Projected) -> Coor2D {
        Coor2D::raw(p.easting, p.northing)
    }
}

impl From<Coor2D> for Projected {
    fn from(c: Coor2D) -> Projected {
        Projected::new(c.x(), c.y())
    }
}

// ----- T E S T S ---------------------------------------------------
