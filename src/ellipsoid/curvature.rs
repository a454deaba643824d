use super::Ellipsoid;

/// The local radii of curvature entering the Transverse Mercator series,
/// scaled by the central meridian scale factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Curvature {
    /// 𝜌: The meridional radius of curvature
    pub rho: f64,
    /// 𝜈: The radius of curvature in the prime vertical (the transverse radius)
    pub nu: f64,
    /// 𝜂² = 𝜈/𝜌 - 1
    pub eta2: f64,
}

impl Curvature {
    /// Curvature at `latitude` (radians) on an ellipsoid with semimajor axis
    /// `semimajor_axis` and squared eccentricity `e2`, scaled by `scale`.
    #[must_use]
    pub fn at(latitude: f64, semimajor_axis: f64, scale: f64, e2: f64) -> Curvature {
        let af0 = semimajor_axis * scale;
        let s = latitude.sin();
        let w = 1. - e2 * s * s;
        let rho = af0 * (1. - e2) * w.powf(-1.5);
        let nu = af0 / w.sqrt();
        Curvature {
            rho,
            nu,
            eta2: nu / rho - 1.,
        }
    }
}

impl Ellipsoid {
    /// The scaled radii of curvature at `latitude` (radians).
    /// See [Curvature::at]
    #[must_use]
    pub fn curvature(&self, latitude: f64, scale: f64) -> Curvature {
        Curvature::at(
            latitude,
            self.semimajor_axis(),
            scale,
            self.eccentricity_squared(),
        )
    }
}

// ----- Tests ---------------------------------------------------------------------
