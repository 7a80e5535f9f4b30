use gale::layout::{
    CityCatalog, HeadlessError, LayoutOptions, LayoutRequest, fit_viewport, layout_advisory,
};
use gale::{ParseOptions, parse_advisory};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Advisory(gale::Error),
    Layout(gale::layout::HeadlessError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Advisory(err) => write!(f, "{err}"),
            CliError::Layout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<gale::Error> for CliError {
    fn from(value: gale::Error) -> Self {
        Self::Advisory(value)
    }
}

impl From<gale::layout::HeadlessError> for CliError {
    fn from(value: gale::layout::HeadlessError) -> Self {
        Self::Layout(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Viewport,
    Layout,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    lenient: bool,
    config: Option<String>,
    cities: Option<String>,
    width: f64,
    height: f64,
    zoom: f64,
    allowlist: Vec<String>,
}

fn usage() -> &'static str {
    "gale-cli\n\
\n\
USAGE:\n\
  gale-cli [parse] [--pretty] [--lenient] [<path>|-]\n\
  gale-cli viewport [--pretty] [--lenient] [--config <json>] [<path>|-]\n\
  gale-cli layout --cities <geojson> [--pretty] [--lenient] [--config <json>] [--width <px>] [--height <px>] [--zoom <f>] [--city <id>]... [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - parse prints the advisory as a GeoJSON FeatureCollection.\n\
  - viewport prints the fitted bounds, or null when nothing can be framed.\n\
  - layout defaults to an 800x600 screen at zoom 1; --city may be repeated to pick cities.\n\
  - --config reads layout options from JSON; missing keys keep their defaults.\n\
  - Set RUST_LOG (e.g. RUST_LOG=gale_core=debug) for diagnostics on stderr.\n\
"
}

fn parse_positive(value: Option<&String>) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(CliError::Usage(usage())),
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let request = LayoutRequest::default();
    let mut args = Args {
        command: Command::Parse,
        width: request.width,
        height: request.height,
        zoom: request.zoom,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "viewport" => args.command = Command::Viewport,
            "layout" => args.command = Command::Layout,
            "--pretty" => args.pretty = true,
            "--lenient" => args.lenient = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--cities" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.cities = Some(path.clone());
            }
            "--width" => args.width = parse_positive(it.next())?,
            "--height" => args.height = parse_positive(it.next())?,
            "--zoom" => args.zoom = parse_positive(it.next())?,
            "--city" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.allowlist.push(id.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if matches!(args.command, Command::Layout) && args.cities.is_none() {
        return Err(CliError::Usage(usage()));
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn load_layout_options(path: Option<&str>) -> Result<LayoutOptions, CliError> {
    let Some(path) = path else {
        return Ok(LayoutOptions::default());
    };
    let text = std::fs::read_to_string(path)?;
    LayoutOptions::from_json_str(&text).map_err(|e| CliError::Layout(HeadlessError::Layout(e)))
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let parse_options = if args.lenient {
        ParseOptions::lenient()
    } else {
        ParseOptions::strict()
    };
    let advisory = parse_advisory(&text, parse_options)?;
    tracing::info!(title = advisory.title(), archived = advisory.is_archived(), "parsed advisory");

    match args.command {
        Command::Parse => write_json(&advisory.to_geojson(), args.pretty),
        Command::Viewport => {
            let options = load_layout_options(args.config.as_deref())?;
            write_json(&fit_viewport(&advisory, &options.viewport), args.pretty)
        }
        Command::Layout => {
            let options = load_layout_options(args.config.as_deref())?;
            let Some(cities_path) = args.cities.as_deref() else {
                return Err(CliError::Usage(usage()));
            };
            let catalog = CityCatalog::from_geojson(&std::fs::read_to_string(cities_path)?)
                .map_err(|e| CliError::Layout(HeadlessError::Layout(e)))?;
            let request = LayoutRequest {
                width: args.width,
                height: args.height,
                zoom: args.zoom,
                allowlist: (!args.allowlist.is_empty()).then_some(args.allowlist),
            };
            let layout = layout_advisory(&advisory, catalog.cities(), &request, &options);
            write_json(&layout, args.pretty)
        }
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
