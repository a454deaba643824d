mod curvature;
mod meridians;
mod registry;

pub use curvature::Curvature;
pub use registry::Builtin;
pub use registry::EllipsoidRegistry;
pub use registry::Registry;
pub use registry::BUILTIN_DATUMS;

use crate::Error;

/// An ellipsoid of revolution, given by its semimajor and semiminor axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
}

/// Constructors for `Ellipsoid`
impl Ellipsoid {
    /// User defined ellipsoid. The axes must satisfy *a > b > 0*.
    pub fn new(semimajor_axis: f64, semiminor_axis: f64) -> Result<Ellipsoid, Error> {
        let (a, b) = (semimajor_axis, semiminor_axis);
        // Written this way round, so NaNs are rejected as well
        if !(b > 0. && a > b && a.is_finite()) {
            return Err(Error::BadEllipsoid { a, b });
        }
        Ok(Ellipsoid { a, b })
    }

    /// For the built-in table, where the axes are known to be valid
    pub(crate) const fn from_axes(a: f64, b: f64) -> Ellipsoid {
        Ellipsoid { a, b }
    }

    /// Predefined ellipsoid, looked up by datum key in the built-in table
    pub fn named(datum: &str) -> Result<Ellipsoid, Error> {
        Builtin.lookup(datum)
    }
}

impl Ellipsoid {
    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.b
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// The third flattening, *n = (a - b) / (a + b)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }

    /// The eccentricity *e*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity_squared().sqrt()
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_ellipsoid() -> Result<(), Error> {
        let ellps = Ellipsoid::named("osgb36")?;
        assert_eq!(ellps.semimajor_axis(), 6_377_563.396);
        assert_eq!(ellps.semiminor_axis(), 6_356_256.909);

        // Airy 1830
        assert_float_eq!(ellps.eccentricity_squared(), 0.006_670_540_074_149, abs <= 1e-15);
        assert_float_eq!(1. / ellps.flattening(), 299.324_961_266, abs <= 1e-8);

        let ellps = Ellipsoid::named("wgs84")?;
        assert_float_eq!(ellps.eccentricity(), 0.081_819_191, abs <= 1e-9);
        assert_float_eq!(ellps.third_flattening(), 0.001_679_220_398, abs <= 1e-12);
        Ok(())
    }

    #[test]
    fn constructor_rejects_nonsense() {
        assert!(Ellipsoid::new(6_378_137., 6_356_752.).is_ok());
        assert!(matches!(
            Ellipsoid::new(6_356_752., 6_378_137.),
            Err(Error::BadEllipsoid { .. })
        ));
        assert!(Ellipsoid::new(1., 1.).is_err());
        assert!(Ellipsoid::new(1., 0.).is_err());
        assert!(Ellipsoid::new(f64::NAN, 1.).is_err());
        assert!(Ellipsoid::new(f64::INFINITY, 1.).is_err());
    }
}
