//! Forward Transverse Mercator, following the Ordnance Survey (2020) formulation
//! of the classical series
use crate::coordinate::{check_geographic, Coor2D, Geodetic, Projected};
use crate::ellipsoid::{Builtin, Ellipsoid, EllipsoidRegistry};
use crate::origin::ProjectionOrigin;
use crate::Error;
use log::{debug, trace};

// ----- F O R W A R D -----------------------------------------------------------------

/// Forward Transverse Mercator, from `latitude`, `longitude` (radians) on `ellps`,
/// to (easting, northing) in metres relative to `origin`.
///
/// The series is that of the [Ordnance Survey](crate::Bibliography::Os20), annex C,
/// eqs. C1–C4, and is good to the millimetre within a few degrees of the central
/// meridian. Further out, the truncation errors grow quickly: at 15° from the
/// central meridian they amount to some decimetres.
///
/// The latitude/longitude must be given on the datum the grid is defined on.
/// No datum shift is applied.
#[must_use]
pub fn fwd(
    origin: &ProjectionOrigin,
    ellps: &Ellipsoid,
    latitude: f64,
    longitude: f64,
) -> (f64, f64) {
    let k_0 = origin.k_0();
    let e2 = ellps.eccentricity_squared();

    // --- 1. Curvatures and the meridian arc

    let c = ellps.curvature(latitude, k_0);
    let (rho, nu, eta2) = (c.rho, c.nu, c.eta2);
    let m = ellps.meridian_arc(latitude, origin.lat_0(), k_0);
    trace!("e2={e2} rho={rho} nu={nu} eta2={eta2} M={m}");

    // --- 2. Trigonometric powers

    let (sin_lat, cos_lat) = latitude.sin_cos();
    let cos3 = cos_lat.powi(3);
    let cos5 = cos_lat.powi(5);
    let tan2 = latitude.tan().powi(2);
    let tan4 = tan2 * tan2;

    // --- 3. Series coefficients. Northing (I, II, III, IIIA) ...

    let a1 = m + origin.y_0();
    let a2 = nu / 2. * sin_lat * cos_lat;
    let a3 = nu / 24. * sin_lat * cos3 * (5. - tan2 + 9. * eta2);
    let a4 = nu / 720. * sin_lat * cos5 * (61. - 58. * tan2 + tan4);

    // ... and Easting (IV, V, VI)

    let b1 = nu * cos_lat;
    let b2 = nu / 6. * cos3 * (nu / rho - tan2);
    let b3 = nu / 120. * cos5 * (5. - 18. * tan2 + tan4 + eta2 * (14. - 58. * tan2));

    // --- 4. Sum up in Horner form, in powers of the longitude difference

    let dlon = longitude - origin.lon_0();
    let dlon2 = dlon * dlon;

    let northing = a1 + dlon2 * (a2 + dlon2 * (a3 + a4 * dlon2));
    let easting = origin.x_0() + dlon * (b1 + dlon2 * (b2 + b3 * dlon2));
    (easting, northing)
}

// ----- T H E   P R O J E C T O R -----------------------------------------------------

/// A forward Transverse Mercator projector for a fixed [`ProjectionOrigin`],
/// resolving datum keys through an [`EllipsoidRegistry`].
///
/// The projector holds no mutable state, so a single instance may be shared
/// freely between threads (given a `Sync` registry).
#[derive(Clone, Debug)]
pub struct Projector<R: EllipsoidRegistry = Builtin> {
    origin: ProjectionOrigin,
    registry: R,
}

impl Projector<Builtin> {
    /// A projector resolving datums through the built-in table
    #[must_use]
    pub fn new(origin: ProjectionOrigin) -> Projector<Builtin> {
        Projector {
            origin,
            registry: Builtin,
        }
    }
}

impl<R: EllipsoidRegistry> Projector<R> {
    /// A projector resolving datums through a user supplied registry
    pub fn with_registry(origin: ProjectionOrigin, registry: R) -> Projector<R> {
        Projector { origin, registry }
    }

    pub fn origin(&self) -> &ProjectionOrigin {
        &self.origin
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Project `latitude`, `longitude` (degrees), given on `datum`.
    pub fn project(&self, latitude: f64, longitude: f64, datum: &str) -> Result<Projected, Error> {
        let geo = Geodetic::new(latitude, longitude)?;
        self.project_geodetic(&geo, datum)
    }

    /// Project a [`Geodetic`] given on `datum`.
    pub fn project_geodetic(&self, geo: &Geodetic, datum: &str) -> Result<Projected, Error> {
        let ellps = self.registry.lookup(datum)?;
        Ok(self.project_on(geo, &ellps))
    }

    /// Project a [`Geodetic`] on an explicitly given ellipsoid, bypassing the registry.
    #[must_use]
    pub fn project_on(&self, geo: &Geodetic, ellps: &Ellipsoid) -> Projected {
        let (easting, northing) = fwd(&self.origin, ellps, geo.latitude(), geo.longitude());
        Projected { easting, northing }
    }

    /// Project a batch of geographic coordinates (degrees), given on `datum`, in place.
    ///
    /// Elements with latitude or longitude out of range are set to `NaN`.
    /// Returns the number of elements successfully projected to finite values.
    /// An unknown datum fails the whole batch, leaving the operands untouched.
    pub fn fwd(&self, datum: &str, operands: &mut [Coor2D]) -> Result<usize, Error> {
        let ellps = self.registry.lookup(datum)?;
        let mut successes = 0_usize;
        for coord in operands.iter_mut() {
            let (lat, lon) = (coord.latitude(), coord.longitude());
            if check_geographic(lat, lon).is_err() {
                *coord = Coor2D::nan();
                continue;
            }
            let (easting, northing) = fwd(&self.origin, &ellps, lat.to_radians(), lon.to_radians());
            *coord = Coor2D::raw(easting, northing);
            if easting.is_finite() && northing.is_finite() {
                successes += 1;
            }
        }
        debug!("fwd: {successes} of {} projected", operands.len());
        Ok(successes)
    }
}

// ----- T E S T S ---------------------------------------------------------------------
