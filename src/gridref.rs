//! Lettered grid references for the British National Grid, e.g. `SU 42222 15222`
use crate::coordinate::Projected;
use crate::Error;
use std::fmt;

// The grid letters: A-Z without I
const LETTERS: &[u8; 25] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";

/// A British National Grid reference: The two letters of the 100 km square,
/// followed by the easting and northing within that square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridReference {
    square: [char; 2],
    easting: f64,
    northing: f64,
}

impl GridReference {
    /// The grid reference of a point projected with the
    /// [British National Grid](crate::origin::ProjectionOrigin::british_national_grid)
    /// origin. The lettered area covers 0 ≤ E < 700 km and 0 ≤ N < 1300 km.
    pub fn new(p: &Projected) -> Result<GridReference, Error> {
        if !(0.0..700_000.0).contains(&p.easting) || !(0.0..1_300_000.0).contains(&p.northing) {
            return Err(Error::OutsideGrid {
                easting: p.easting,
                northing: p.northing,
            });
        }

        let x = (p.easting / 100_000.).floor() as usize;
        let y = (p.northing / 100_000.).floor() as usize;

        // First letter: the 500 km square. Second letter: the 100 km square within
        // it. Both index a 5 x 5 block of letters, with row 0 at the top.
        let first = (17 - (y / 5) * 5) + x / 5;
        let second = (20 - (y % 5) * 5) + x % 5;

        Ok(GridReference {
            square: [LETTERS[first] as char, LETTERS[second] as char],
            easting: p.easting - (x as f64) * 100_000.,
            northing: p.northing - (y as f64) * 100_000.,
        })
    }

    /// The two letters identifying the 100 km square
    #[must_use]
    pub fn square(&self) -> String {
        self.square.iter().collect()
    }

    /// Format with `digits` digits in total (an even number, at most 10),
    /// e.g. 6 digits gives 100 m resolution: `SU 422 152`.
    /// The coordinates are truncated, not rounded, as is customary.
    pub fn format(&self, digits: usize) -> Result<String, Error> {
        if digits % 2 != 0 || digits > 10 {
            return Err(Error::BadParam(
                "digits".to_string(),
                format!("{digits} (must be one of 0, 2, 4, 6, 8, 10)"),
            ));
        }
        let square = self.square();
        if digits == 0 {
            return Ok(square);
        }
        let width = digits / 2;
        let unit = 10_f64.powi(5 - width as i32);
        let e = (self.easting / unit).floor() as u32;
        let n = (self.northing / unit).floor() as u32;
        Ok(format!("{square} {e:0width$} {n:0width$}"))
    }
}

impl fmt::Display for GridReference {
    /// Metre resolution, i.e. 10 digits
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let e = self.easting.floor() as u32;
        let n = self.northing.floor() as u32;
        write!(f, "{} {e:05} {n:05}", self.square())
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::origin::ProjectionOrigin;
    use crate::tmerc::Projector;

    #[test]
    fn squares() -> Result<(), Error> {
        let square =
            |e: f64, n: f64| GridReference::new(&Projected::new(e, n)).map(|g| g.square());
        assert_eq!(square(0., 0.)?, "SV");
        assert_eq!(square(442_222., 115_222.)?, "SU");
        assert_eq!(square(651_409., 313_177.)?, "TG");
        assert_eq!(square(325_000., 673_000.)?, "NT");
        assert_eq!(square(699_999., 1_299_999.)?, "JM");
        assert_eq!(square(0., 1_299_999.)?, "HL");
        Ok(())
    }

    #[test]
    fn outside() {
        for (e, n) in [(-1., 0.), (0., -1.), (700_000., 0.), (0., 1_300_000.), (f64::NAN, 0.)] {
            assert!(matches!(
                GridReference::new(&Projected::new(e, n)),
                Err(Error::OutsideGrid { .. })
            ));
        }
    }

    #[test]
    fn formatting() -> Result<(), Error> {
        let g = GridReference::new(&Projected::new(651_409.903, 313_177.270))?;
        assert_eq!(g.to_string(), "TG 51409 13177");
        assert_eq!(g.format(10)?, "TG 51409 13177");
        assert_eq!(g.format(6)?, "TG 514 131");
        assert_eq!(g.format(2)?, "TG 5 1");
        assert_eq!(g.format(0)?, "TG");
        assert!(g.format(5).is_err());
        assert!(g.format(12).is_err());

        let g = GridReference::new(&Projected::new(400_000., 5_007.))?;
        assert_eq!(g.format(8)?, "SZ 0000 0500");
        Ok(())
    }

    #[test]
    fn from_geographic() -> Result<(), Error> {
        let bng = Projector::new(ProjectionOrigin::british_national_grid());
        let p = bng.project(50.934358, -1.399073, "osgb36")?;
        assert_eq!(GridReference::new(&p)?.to_string(), "SU 42222 15222");

        // The true origin is south of the lettered grid
        let p = bng.project(49., -2., "osgb36")?;
        assert!(GridReference::new(&p).is_err());
        Ok(())
    }
}
