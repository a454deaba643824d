//! *Transverse Mercator grid coordinates, computed from first principles*.
//!
//! Map a latitude/longitude on a reference ellipsoid to Easting/Northing on a
//! Transverse Mercator grid (e.g. the British National Grid), using the classical
//! truncated power series for the forward projection, and find the UTM zone and
//! EPSG code covering an arbitrary longitude/latitude.
//!
//! No datum shift is applied: The latitude/longitude must already refer to the
//! datum the grid is defined on. For OSGB36 input given as WGS84, expect errors
//! of the order of 100 m. This is a known limitation, not a defect.
//!
//! ```
//! use tmgrid::prelude::*;
//!
//! let bng = Projector::new(ProjectionOrigin::british_national_grid());
//! let p = bng.project(49., -2., "osgb36")?;
//! assert_eq!((p.easting, p.northing), (400_000., -100_000.));
//!
//! let zone = UtmZone::resolve(-1.399073, 50.934358)?;
//! assert_eq!(zone.epsg_code(), "32630");
//! # Ok::<(), tmgrid::Error>(())
//! ```

pub mod coordinate;
pub mod ellipsoid;
pub mod gridref;
pub mod math;
pub mod origin;
pub mod tmerc;
pub mod utm;

/// Everything needed for ordinary use of the crate
pub mod prelude {
    pub use crate::coordinate::Coor2D;
    pub use crate::coordinate::Geodetic;
    pub use crate::coordinate::Projected;
    pub use crate::ellipsoid::Builtin;
    pub use crate::ellipsoid::Curvature;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::EllipsoidRegistry;
    pub use crate::ellipsoid::Registry;
    pub use crate::gridref::GridReference;
    pub use crate::origin::ProjectionOrigin;
    pub use crate::tmerc::Projector;
    pub use crate::utm::UtmZone;
    pub use crate::Error;
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("unknown datum '{0}' (expected one of: {1})")]
    UnknownDatum(String, String),

    #[error("{what} {value} outside the interval [{min}, {max}]")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("non-finite {0}")]
    NonFinite(&'static str),

    #[error("invalid ellipsoid (a = {a}, b = {b}): must satisfy a > b > 0")]
    BadEllipsoid { a: f64, b: f64 },

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),

    #[error("({easting}, {northing}) is outside the lettered grid")]
    OutsideGrid { easting: f64, northing: f64 },

    #[error("error: {0}")]
    General(&'static str),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// Ordnance Survey (2020): *A guide to coordinate systems in Great Britain*.
    /// Annexes B and C: Transverse Mercator map projection formulae, and the
    /// British National Grid.
    /// [pdf](https://www.ordnancesurvey.co.uk/documents/resources/guide-coordinate-systems-great-britain.pdf)
    Os20,

    /// J.P. Snyder (1987): *Map Projections: A Working Manual*.
    /// U.S. Geological Survey Professional Paper 1395, pp. 57–64.
    /// [DOI](https://doi.org/10.3133/pp1395)
    Sny87,

    /// Charles F.F. Karney (2011): *Transverse Mercator with an accuracy of a few nanometers*.
    /// J. Geodesy. 85(8): 475–485.
    /// [DOI](https://doi.org/10.1007/s00190-011-0445-3).
    Kar11,

    /// NGA (2014): *The Universal Grids and the Transverse Mercator and Polar
    /// Stereographic Map Projections*. NGA.SIG.0012_2.0.0_UTMUPS.
    Nga14,
}
