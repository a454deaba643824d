use super::*;

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The meridian arc, *M*, from the latitude of true origin, `lat_0`, to
    /// `latitude` (both in radians), scaled by the central meridian scale
    /// factor, `scale`.
    ///
    /// This is the series in the third flattening, *n*, truncated after the
    /// *n³* terms, as given by the [Ordnance Survey](crate::Bibliography::Os20)
    /// (annex C, eq. C3). The coefficients are those of the truncation, and must
    /// stay as they are for agreement with other implementations of the same
    /// series. For accuracy at the sub-millimetre level over long arcs, the
    /// series of [Karney (2011)](crate::Bibliography::Kar11) is preferable.
    #[must_use]
    pub fn meridian_arc(&self, latitude: f64, lat_0: f64, scale: f64) -> f64 {
        let n = self.third_flattening();
        let n2 = n * n;
        let n3 = n * n2;

        let dlat = latitude - lat_0;
        let slat = latitude + lat_0;

        let m1 = (1. + n + 5. / 4. * (n2 + n3)) * dlat;
        let m2 = (3. * n + 3. * n2 + 21. / 8. * n3) * dlat.sin() * slat.cos();
        let m3 = 15. / 8. * (n2 + n3) * (2. * dlat).sin() * (2. * slat).cos();
        let m4 = 35. / 24. * n3 * (3. * dlat).sin() * (3. * slat).cos();

        self.semiminor_axis() * scale * (m1 - m2 + m3 - m4)
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn meridian_arc() -> Result<(), Error> {
        let ellps = Ellipsoid::named("osgb36")?;
        let k_0 = 0.999_601_271_7;
        let lat_0 = 49_f64.to_radians();

        // Zero at the origin itself
        assert_eq!(ellps.meridian_arc(lat_0, lat_0, k_0), 0.);

        // Ordnance Survey guide, annex C worked example
        let lat = (52. + 39. / 60. + 27.2531 / 3600_f64).to_radians();
        assert_float_eq!(ellps.meridian_arc(lat, lat_0, k_0), 406_688.295_9, abs <= 1e-3);

        // Antisymmetric in the two latitudes
        let m = ellps.meridian_arc(lat, lat_0, k_0);
        assert_float_eq!(ellps.meridian_arc(lat_0, lat, k_0), -m, abs <= 1e-9);

        // Linear in the scale factor
        assert_float_eq!(ellps.meridian_arc(lat, lat_0, 1.) * k_0, m, abs <= 1e-9);

        // Reasonably close to the full series: The equator-to-pole distance on
        // WGS84 (10 001 965.729 m) from Karney's GeodSolve
        let wgs84 = Ellipsoid::named("wgs84")?;
        let quadrant = wgs84.meridian_arc(90_f64.to_radians(), 0., 1.);
        assert_float_eq!(quadrant, 10_001_965.729, abs <= 1e-2);
        Ok(())
    }

    #[test]
    fn monotonic() -> Result<(), Error> {
        let ellps = Ellipsoid::named("wgs84")?;
        let mut previous = f64::NEG_INFINITY;
        for i in -90..=90 {
            let m = ellps.meridian_arc((i as f64).to_radians(), 0., 1.);
            assert!(m > previous);
            previous = m;
        }
        Ok(())
    }
}
