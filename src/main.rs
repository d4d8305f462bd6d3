use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::time::Instant;

use gsmview::basemap::BasemapStyle;
use gsmview::config::{DEFAULT_OUTPUT, FileConfig};
use gsmview::domain::SectorError;
use gsmview::render::{MapView, write_geojson, write_page};
use gsmview::session::{InputChange, SectorInputs, Session};

/// Render a GSM base-station coverage sector on an interactive web map
///
/// Examples:
///   # Default sector (Santarém, azimuth 90, 2 km) to gsm_sector.html
///   gsmview
///
///   # South-west facing sector on satellite imagery with labels
///   gsmview --lat 38.7223 --lon -9.1393 --azimuth 225 --range 3.5 --style hybrid
///
///   # Narrow beam, also exported as GeoJSON
///   gsmview --beamwidth 65 --geojson sector.geojson
///
///   # Edit inputs line by line ("azimuth 120", "style satellite", ...)
///   gsmview --interactive
#[derive(Parser, Debug)]
#[command(name = "gsmview")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches gsmview.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// BTS latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// BTS longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Sector azimuth in whole degrees, 0 = north, clockwise [default: 90]
    #[arg(short = 'a', long, value_parser = clap::value_parser!(u16).range(0..=360))]
    azimuth: Option<u16>,

    /// Sector range in kilometers, rounded to 0.1 [default: 2.0]
    #[arg(short = 'r', long)]
    range: Option<f64>,

    /// Full angular width of the sector in degrees [default: 120]
    #[arg(short = 'b', long)]
    beamwidth: Option<f64>,

    /// Number of points sampled along the arc [default: 30]
    #[arg(long)]
    samples: Option<usize>,

    /// Basemap style [default: standard]
    #[arg(short = 's', long, value_enum)]
    style: Option<BasemapStyle>,

    /// Initial map zoom level [default: 13]
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=19))]
    zoom: Option<u8>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Sector stroke and fill color (any CSS color) [default: blue]
    #[arg(long)]
    color: Option<String>,

    /// Output HTML file path (defaults to gsm_sector.html)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Also write the marker and sector as GeoJSON to this path
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Refuse inputs outside the supported domain instead of warning
    #[arg(long)]
    strict: bool,

    /// Read "<field> <value>" edits from stdin and re-render after each one
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

struct Settings {
    inputs: SectorInputs,
    output: PathBuf,
    geojson: Option<PathBuf>,
    strict: bool,
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let settings = merge_settings(&args, file_config.unwrap_or_default());

    println!("gsmview - GSM Sector Map Generator");
    println!("==================================");
    println!();

    if settings.verbose {
        print_configuration(&settings);
    }

    check_inputs(&settings.inputs, settings.strict)?;

    let mut session = Session::initialize(settings.inputs.clone());
    render(session.view(), &settings)?;
    print_summary(session.view());

    if args.interactive {
        run_interactive(&mut session, &settings)?;
    }

    println!();
    println!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );
    println!();
    println!("Output: {}", settings.output.display());
    if let Some(ref path) = settings.geojson {
        println!("GeoJSON: {}", path.display());
    }

    Ok(())
}

/// CLI flags win over the config file, which wins over built-in defaults
fn merge_settings(args: &Args, file: FileConfig) -> Settings {
    let mut inputs = file.to_inputs();
    if let Some(lat) = args.lat {
        inputs.lat = lat;
    }
    if let Some(lon) = args.lon {
        inputs.lon = lon;
    }
    if let Some(azimuth) = args.azimuth {
        inputs.azimuth = azimuth;
    }
    if let Some(range) = args.range {
        inputs.range_km = range;
    }
    if let Some(beamwidth) = args.beamwidth {
        inputs.beamwidth_degrees = beamwidth;
    }
    if let Some(samples) = args.samples {
        inputs.num_samples = samples;
    }
    if let Some(style) = args.style {
        inputs.style = style;
    }
    if let Some(zoom) = args.zoom {
        inputs.zoom = zoom;
    }
    if let Some(ref title) = args.title {
        inputs.title = title.clone();
    }
    if let Some(ref color) = args.color {
        inputs.color = color.clone();
    }

    Settings {
        inputs: inputs.normalized(),
        output: args.output.clone().unwrap_or_else(|| file.output()),
        geojson: args.geojson.clone().or_else(|| file.geojson.clone()),
        strict: args.strict || file.strict,
        verbose: args.verbose || file.verbose,
    }
}

fn print_configuration(settings: &Settings) {
    let inputs = &settings.inputs;
    println!("Configuration:");
    println!("  BTS: ({:.6}, {:.6})", inputs.lat, inputs.lon);
    println!("  Azimuth: {}°", inputs.azimuth);
    println!("  Range: {:.1} km", inputs.range_km);
    println!("  Beamwidth: {}°", inputs.beamwidth_degrees);
    println!("  Arc samples: {}", inputs.num_samples);
    println!("  Basemap: {}", inputs.style);
    println!("  Zoom: {}", inputs.zoom);
    println!("  Title: {}", inputs.title);
    println!("  Color: {}", inputs.color);
    println!(
        "  Validation: {}",
        if settings.strict { "strict" } else { "warn" }
    );
    if settings.output != Path::new(DEFAULT_OUTPUT) {
        println!("  Output: {}", settings.output.display());
    }
    if let Some(ref path) = settings.geojson {
        println!("  GeoJSON: {}", path.display());
    }
    println!();
}

/// Warn about out-of-domain inputs, or refuse them in strict mode
fn check_inputs(inputs: &SectorInputs, strict: bool) -> Result<()> {
    let issues: Vec<SectorError> = inputs.spec().issues();
    if issues.is_empty() {
        return Ok(());
    }
    if strict {
        bail!("Invalid sector input: {}", issues[0]);
    }
    for issue in &issues {
        eprintln!("Warning: {} (rendering anyway)", issue);
    }
    Ok(())
}

fn render(view: &MapView, settings: &Settings) -> Result<()> {
    let spinner = create_spinner("Rendering map page...");
    let start = Instant::now();

    let bytes = write_page(&settings.output, view).context("Failed to render map page")?;
    let mut message = format!(
        "Wrote {} ({:.1} KB) [{:.1}s]",
        settings.output.display(),
        bytes as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    );

    if let Some(ref path) = settings.geojson {
        let bytes = write_geojson(path, view).context("Failed to export GeoJSON")?;
        message.push_str(&format!(
            ", {} ({:.1} KB)",
            path.display(),
            bytes as f64 / 1024.0
        ));
    }

    spinner.finish_with_message(message);
    Ok(())
}

fn print_summary(view: &MapView) {
    let summary = view.summary();
    println!(
        "Sector: {} vertices, bearings {:.1}° -> {:.1}°, {} basemap",
        summary.vertices, summary.start_bearing, summary.end_bearing, view.style
    );
    println!(
        "  Arc distance (haversine): {:.3} - {:.3} km, area ~{:.3} km²",
        summary.min_arc_km, summary.max_arc_km, summary.area_km2
    );
}

fn run_interactive(session: &mut Session, settings: &Settings) -> Result<()> {
    println!();
    println!("Interactive mode: enter \"<field> <value>\" (lat, lon, azimuth, range, style)");
    println!("Empty line or \"quit\" to finish.");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        let change: InputChange = match trimmed.parse() {
            Ok(change) => change,
            Err(e) => {
                eprintln!("Warning: {}", e);
                continue;
            }
        };

        let mut candidate = session.inputs().clone();
        candidate.apply(&change);
        if let Err(e) = check_inputs(&candidate, settings.strict) {
            eprintln!("Warning: {:#} (input ignored)", e);
            continue;
        }

        let view = session.update(&change).clone();
        if let Err(e) = render(&view, settings) {
            eprintln!("Warning: {:#}", e);
            continue;
        }
        print_summary(&view);
    }

    if settings.verbose {
        println!("Applied {} update(s)", session.updates());
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config(toml_text: &str) -> FileConfig {
        toml::from_str(toml_text).unwrap()
    }

    #[test]
    fn test_explicit_flag_beats_config_even_at_default() {
        let args = Args::parse_from(["gsmview", "--azimuth", "90", "--style", "standard"]);
        let file = file_config("azimuth = 200\nstyle = \"hybrid\"\nrange = 5.0");

        let settings = merge_settings(&args, file);

        assert_eq!(settings.inputs.azimuth, 90);
        assert_eq!(settings.inputs.style, BasemapStyle::Standard);
        assert_eq!(settings.inputs.range_km, 5.0);
    }

    #[test]
    fn test_merged_inputs_are_normalized() {
        let args = Args::parse_from(["gsmview", "--range", "2.37", "--color", "red"]);
        let settings = merge_settings(&args, file_config("azimuth = 500"));

        assert_eq!(settings.inputs.azimuth, 360);
        assert_eq!(settings.inputs.range_km, 2.4);
        assert_eq!(settings.inputs.color, "red");
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
    }
}
