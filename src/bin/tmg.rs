//! TMG: Transverse Mercator Grid coordinates from the command line.
//! Reads `latitude longitude` pairs, in degrees, one per line.
use anyhow::{bail, Context};
use clap::Parser;
use log::{debug, warn};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tmgrid::ellipsoid::BUILTIN_DATUMS;
use tmgrid::prelude::*;

/// Project latitude/longitude pairs to Transverse Mercator grid coordinates,
/// or look up their UTM zones.
///
/// Input lines hold latitude and longitude in degrees, separated by whitespace.
/// Anything after the first two columns is passed through to the output.
/// Everything after a '#' is a comment.
#[derive(Parser, Debug)]
#[clap(name = "tmg")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The grid: "bng", "irish", "utm zone=N [south]", or
    /// "tmerc lat_0=.. lon_0=.. k_0=.. x_0=.. y_0=.."
    #[clap(short, long, default_value = "bng")]
    grid: String,

    /// The datum of the input coordinates
    #[clap(long, default_value = "osgb36")]
    datum: String,

    /// Report UTM zone and EPSG code instead of projecting
    #[clap(long)]
    utm: bool,

    /// Report lettered British National Grid references with this many digits
    #[clap(long)]
    gridref: Option<usize>,

    /// Number of decimals in the projected output
    #[clap(short = 'd', long, default_value_t = 3)]
    decimals: usize,

    /// List the built-in datums and exit
    #[clap(long)]
    list_datums: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on. Standard input if none given
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    if options.list_datums {
        for (key, name, ellps) in BUILTIN_DATUMS {
            println!(
                "{key:8} {name:20} a={:.3} b={:.6}",
                ellps.semimajor_axis(),
                ellps.semiminor_axis()
            );
        }
        return Ok(());
    }

    let origin: ProjectionOrigin = options
        .grid
        .parse()
        .with_context(|| format!("Bad grid definition '{}'", options.grid))?;
    let projector = Projector::new(origin);

    // Fail early, rather than once per line
    if !options.utm {
        projector.registry().lookup(&options.datum)?;
    }
    if let Some(digits) = options.gridref {
        if digits % 2 != 0 || digits > 10 {
            bail!("--gridref takes an even number of digits, at most 10, not {digits}");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.args.is_empty() {
        let stdin = io::stdin();
        process(&options, &projector, stdin.lock(), &mut out)?;
        return Ok(());
    }

    for path in &options.args {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Cannot open '{}'", path.display()))?;
        process(&options, &projector, BufReader::new(file), &mut out)?;
    }
    Ok(())
}

fn process(
    options: &Cli,
    projector: &Projector,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let mut columns = line.split_whitespace();
        let coordinates = columns.next().zip(columns.next());
        let rest: Vec<&str> = columns.collect();

        let result = match coordinates {
            Some((lat, lon)) => convert(options, projector, lat, lon),
            None => Err(anyhow::anyhow!("Expected latitude and longitude")),
        };
        let converted = match result {
            Ok(converted) => converted,
            Err(e) => {
                warn!("Line {}: {e:#}", index + 1);
                "NaN NaN".to_string()
            }
        };

        if rest.is_empty() {
            writeln!(out, "{converted}")?;
        } else {
            writeln!(out, "{converted} {}", rest.join(" "))?;
        }
    }
    Ok(())
}

fn convert(
    options: &Cli,
    projector: &Projector,
    lat: &str,
    lon: &str,
) -> Result<String, anyhow::Error> {
    let lat: f64 = lat
        .parse()
        .with_context(|| format!("Bad latitude '{lat}'"))?;
    let lon: f64 = lon
        .parse()
        .with_context(|| format!("Bad longitude '{lon}'"))?;

    if options.utm {
        let zone = UtmZone::resolve(lon, lat)?;
        return Ok(format!("{zone} {}", zone.epsg_code()));
    }

    let p = projector.project(lat, lon, &options.datum)?;
    if let Some(digits) = options.gridref {
        return Ok(GridReference::new(&p)?.format(digits)?);
    }

    let d = options.decimals;
    Ok(format!("{:.d$} {:.d$}", p.easting, p.northing))
}
