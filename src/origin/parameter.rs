use crate::Error;
use log::{error, warn};
use std::collections::{BTreeMap, BTreeSet};

/// The `OriginParameter` enumeration is used to represent which defining
/// parameters are valid for a given kind of grid definition.
///
/// Parameters are *required* if their default value is `None`, and *optional*
/// otherwise. A flag is true if present and false if not, so it takes no default.
///
/// Any other parameters given are ignored, but warned about.
///
/// For a given grid kind, the union of the sets of its required and optional
/// parameters is called its *gamut*.
#[derive(Debug)]
pub enum OriginParameter {
    /// A flag is a boolean that is true if present, false if not
    Flag { key: &'static str },
    /// The natural numbers + zero
    Natural {
        key: &'static str,
        default: Option<usize>,
    },
    /// Reals
    Real {
        key: &'static str,
        default: Option<f64>,
    },
}

/// The result of checking a definition against a gamut
#[derive(Debug, Default, Clone)]
pub struct ParsedParameters {
    pub name: String,
    pub boolean: BTreeSet<&'static str>,
    pub natural: BTreeMap<&'static str, usize>,
    pub real: BTreeMap<&'static str, f64>,
    pub ignored: Vec<String>,
}

// Accessors
impl ParsedParameters {
    pub fn boolean(&self, key: &str) -> bool {
        self.boolean.contains(key)
    }
    pub fn natural(&self, key: &str) -> Result<usize, Error> {
        if let Some(value) = self.natural.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn real(&self, key: &str) -> Result<f64, Error> {
        if let Some(value) = self.real.get(key) {
            return Ok(*value);
        }
        Err(Error::MissingParam(key.to_string()))
    }
    pub fn ignored(&self) -> Vec<String> {
        self.ignored.clone()
    }
}

impl ParsedParameters {
    /// Check the `key=value` pairs of the `definition` against the `gamut`
    pub fn new(definition: &str, gamut: &[OriginParameter]) -> Result<ParsedParameters, Error> {
        let (name, mut given) = split_into_parameters(definition)?;
        let mut boolean = BTreeSet::<&'static str>::new();
        let mut natural = BTreeMap::<&'static str, usize>::new();
        let mut real = BTreeMap::<&'static str, f64>::new();

        // Try to locate all accepted parameters, type check, and place them into
        // their proper bins
        for p in gamut {
            match *p {
                OriginParameter::Flag { key } => {
                    if let Some(value) = given.remove(key) {
                        if value.is_empty() || value.to_lowercase() == "true" {
                            boolean.insert(key);
                            continue;
                        }
                        if value.to_lowercase() == "false" {
                            continue;
                        }
                        warn!("Cannot parse {key}={value} as a boolean constant!");
                        return Err(Error::BadParam(key.to_string(), value));
                    }
                    // Flags are implicitly false when not given
                    continue;
                }

                OriginParameter::Natural { key, default } => {
                    if let Some(value) = given.remove(key) {
                        if let Ok(v) = value.parse::<usize>() {
                            natural.insert(key, v);
                            continue;
                        }
                        warn!("Cannot parse {key}={value} as a natural number!");
                        return Err(Error::BadParam(key.to_string(), value));
                    }

                    // Key not found - default given?
                    if let Some(value) = default {
                        natural.insert(key, value);
                        continue;
                    }

                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }

                OriginParameter::Real { key, default } => {
                    if let Some(value) = given.remove(key) {
                        if let Ok(v) = value.parse::<f64>() {
                            real.insert(key, v);
                            continue;
                        }
                        warn!("Cannot parse {key}={value} as a real number");
                        return Err(Error::BadParam(key.to_string(), value));
                    }

                    // Key not found - default given?
                    if let Some(value) = default {
                        real.insert(key, value);
                        continue;
                    }

                    error!("Missing required parameter '{key}'");
                    return Err(Error::MissingParam(key.to_string()));
                }
            }
        }

        // Whatever is left was not in the gamut
        let ignored: Vec<String> = given.into_keys().collect();
        for key in &ignored {
            warn!("{name}: ignoring unknown parameter '{key}'");
        }

        Ok(ParsedParameters {
            name,
            boolean,
            natural,
            real,
            ignored,
        })
    }
}

/// Split a definition like `tmerc lat_0=49 lon_0=-2` into its name
/// (`tmerc`) and a map of its parameters. Bare words are flags, and map
/// to an empty value.
pub fn split_into_parameters(
    definition: &str,
) -> Result<(String, BTreeMap<String, String>), Error> {
    let mut words = definition.split_whitespace();
    let Some(name) = words.next() else {
        return Err(Error::Syntax("empty grid definition".to_string()));
    };
    if name.contains('=') {
        return Err(Error::Syntax(format!(
            "grid definition must start with a name, found '{name}'"
        )));
    }

    let mut parameters = BTreeMap::new();
    for word in words {
        let (key, value) = match word.split_once('=') {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (word, ""),
        };
        if key.is_empty() {
            return Err(Error::Syntax(format!("missing key in '{word}'")));
        }
        if parameters.insert(key.to_string(), value.to_string()).is_some() {
            return Err(Error::Syntax(format!("'{key}' given more than once")));
        }
    }
    Ok((name.to_string(), parameters))
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const GAMUT: [OriginParameter; 3] = [
        OriginParameter::Flag    { key: "south" },
        OriginParameter::Natural { key: "zone", default: None },
        OriginParameter::Real    { key: "k_0",  default: Some(1_f64) },
    ];

    #[test]
    fn split() -> Result<(), Error> {
        let (name, params) = split_into_parameters("  utm   zone=32 south ")?;
        assert_eq!(name, "utm");
        assert_eq!(params.len(), 2);
        assert_eq!(params["zone"], "32");
        assert_eq!(params["south"], "");

        assert!(matches!(split_into_parameters(""), Err(Error::Syntax(_))));
        assert!(matches!(split_into_parameters("zone=32"), Err(Error::Syntax(_))));
        assert!(matches!(split_into_parameters("utm =32"), Err(Error::Syntax(_))));
        assert!(matches!(
            split_into_parameters("utm zone=32 zone=33"),
            Err(Error::Syntax(_))
        ));
        Ok(())
    }

    #[test]
    fn parse() -> Result<(), Error> {
        let p = ParsedParameters::new("utm zone=32 south", &GAMUT)?;
        assert_eq!(p.name, "utm");
        assert!(p.boolean("south"));
        assert_eq!(p.natural("zone")?, 32);
        assert_eq!(p.real("k_0")?, 1.);
        assert!(p.ignored().is_empty());

        let p = ParsedParameters::new("utm zone=32 south=false k_0=0.9996 x_0=7", &GAMUT)?;
        assert!(!p.boolean("south"));
        assert_eq!(p.real("k_0")?, 0.9996);
        assert_eq!(p.ignored(), ["x_0"]);
        assert!(p.real("x_0").is_err());

        assert_eq!(
            ParsedParameters::new("utm", &GAMUT).unwrap_err(),
            Error::MissingParam("zone".to_string())
        );
        assert_eq!(
            ParsedParameters::new("utm zone=-3", &GAMUT).unwrap_err(),
            Error::BadParam("zone".to_string(), "-3".to_string())
        );
        assert!(ParsedParameters::new("utm zone=3 k_0=one", &GAMUT).is_err());
        assert!(ParsedParameters::new("utm zone=3 south=maybe", &GAMUT).is_err());
        Ok(())
    }
}
