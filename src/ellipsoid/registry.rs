use super::Ellipsoid;
use crate::Error;
use log::{debug, error};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

// ----- T H E   R E G I S T R Y   T R A I T -------------------------------------------

/// The `EllipsoidRegistry` trait is the seam between the projection machinery
/// and whatever knows the ellipsoid parameters of a datum: The built-in table,
/// a user extended [`Registry`], or a wrapper around an external CRS database.
///
/// Implementations must be free of side effects, so lookups can be made
/// concurrently from any number of threads.
pub trait EllipsoidRegistry {
    /// The ellipsoid of `datum`, or [`Error::UnknownDatum`] listing the valid keys
    fn lookup(&self, datum: &str) -> Result<Ellipsoid, Error>;

    /// The datum keys known by this registry, in sorted order
    fn datums(&self) -> Vec<String>;
}

impl<R: EllipsoidRegistry + ?Sized> EllipsoidRegistry for &R {
    fn lookup(&self, datum: &str) -> Result<Ellipsoid, Error> {
        (**self).lookup(datum)
    }

    fn datums(&self) -> Vec<String> {
        (**self).datums()
    }
}

fn unknown(datum: &str, known: &[String]) -> Error {
    error!("Unknown datum '{datum}'");
    Error::UnknownDatum(datum.to_string(), known.join(", "))
}

// ----- B U I L T I N S ---------------------------------------------------------------

/// Datum key, ellipsoid name, and ellipsoid axes for the built-in datums.
#[rustfmt::skip]
pub const BUILTIN_DATUMS: [(&str, &str, Ellipsoid); 6] = [
    ("ed50",   "International 1924", Ellipsoid::from_axes(6_378_388.000, 6_356_911.946)),
    ("etrs89", "GRS80",              Ellipsoid::from_axes(6_378_137.000, 6_356_752.314_140)),
    ("ire65",  "Airy modified 1849", Ellipsoid::from_axes(6_377_340.189, 6_356_034.447)),
    ("nad27",  "Clarke 1866",        Ellipsoid::from_axes(6_378_206.400, 6_356_583.800)),
    ("osgb36", "Airy 1830",          Ellipsoid::from_axes(6_377_563.396, 6_356_256.909)),
    ("wgs84",  "WGS84",              Ellipsoid::from_axes(6_378_137.000, 6_356_752.314_1)),
];

// The table is tiny, but the map gives us sorted keys for the error message for free
static BUILTIN: Lazy<BTreeMap<&'static str, Ellipsoid>> = Lazy::new(|| {
    BUILTIN_DATUMS
        .iter()
        .map(|(key, _, ellps)| (*key, *ellps))
        .collect()
});

/// The immutable table of built-in datums. Keys are matched case insensitively.
#[derive(Clone, Copy, Debug, Default)]
pub struct Builtin;

impl EllipsoidRegistry for Builtin {
    fn lookup(&self, datum: &str) -> Result<Ellipsoid, Error> {
        let key = datum.trim().to_ascii_lowercase();
        if let Some(ellps) = BUILTIN.get(key.as_str()) {
            debug!("Builtin: '{datum}' -> {ellps:?}");
            return Ok(*ellps);
        }
        Err(unknown(datum, &self.datums()))
    }

    fn datums(&self) -> Vec<String> {
        BUILTIN.keys().map(|key| key.to_string()).collect()
    }
}

// ----- U S E R   E X T E N D A B L E   R E G I S T R Y -------------------------------

/// A registry which can be extended with user defined datums, without
/// touching the projection code.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    datums: BTreeMap<String, Ellipsoid>,
}

impl Registry {
    /// A registry holding the built-in datums
    #[must_use]
    pub fn new() -> Registry {
        let datums = BUILTIN
            .iter()
            .map(|(key, ellps)| (key.to_string(), *ellps))
            .collect();
        Registry { datums }
    }

    /// A registry holding nothing at all
    #[must_use]
    pub fn empty() -> Registry {
        Registry::default()
    }

    /// Register (or replace) the ellipsoid for `datum`
    pub fn register(&mut self, datum: &str, ellps: Ellipsoid) {
        let key = datum.trim().to_ascii_lowercase();
        debug!("Registry: registering '{key}' as {ellps:?}");
        self.datums.insert(key, ellps);
    }

    /// Register the ellipsoid for `datum` from its semimajor and semiminor axes
    pub fn register_axes(&mut self, datum: &str, a: f64, b: f64) -> Result<(), Error> {
        self.register(datum, Ellipsoid::new(a, b)?);
        Ok(())
    }
}

impl EllipsoidRegistry for Registry {
    fn lookup(&self, datum: &str) -> Result<Ellipsoid, Error> {
        let key = datum.trim().to_ascii_lowercase();
        if let Some(ellps) = self.datums.get(&key) {
            return Ok(*ellps);
        }
        Err(unknown(datum, &self.datums()))
    }

    fn datums(&self) -> Vec<String> {
        self.datums.keys().cloned().collect()
    }
}

// ----- Tests ---------------------------------------------------------------------
