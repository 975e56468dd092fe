use clap::Parser;
use filmmap::{Config, Coordinates, MapBuilder, MapRequest, NominatimClient};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Filmmap: films shot near you, and the neighbours of a country, on one map.
///
/// Reverse-geocodes your coordinates, finds up to ten filming locations from
/// the dataset that share the most address parts with it, and writes
/// map<YEAR>.html with those films plus markers for the given country and
/// every country bordering it. Missing arguments are asked for interactively.
///
/// Examples:
///   filmmap --coordinates "49.83826 24.02324" --year 2015 --country Ukraine
///   filmmap -c "34.05,-118.24" -y 1999 --country "United States" --json
///   filmmap --dataset data/locations.csv --output-dir maps
#[derive(Parser)]
#[command(name = "filmmap", version, about, long_about = None)]
struct Cli {
    /// Your coordinates: "<lat> <lon>" or "<lat>,<lon>".
    #[arg(long, short = 'c', allow_hyphen_values = true)]
    coordinates: Option<String>,

    /// Year the films were shot in.
    #[arg(long, short = 'y')]
    year: Option<i32>,

    /// Country whose neighbours to mark (name or ISO code).
    #[arg(long)]
    country: Option<String>,

    /// Locations CSV (overrides FILMMAP_DATASET).
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Directory for the map file (overrides FILMMAP_OUTPUT_DIR).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print the build report as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Debug logging (same as RUST_LOG=filmmap=debug).
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::from_env().unwrap_or_else(|e| fail(e));
    if let Some(dataset) = cli.dataset.clone() {
        config.dataset = dataset;
    }
    if let Some(dir) = cli.output_dir.clone() {
        config.output_dir = dir;
    }

    // ── Gather inputs ───────────────────────────────────────────

    let coordinates = cli
        .coordinates
        .clone()
        .unwrap_or_else(|| prompt("ENTER YOUR COORDINATES: "));
    let coordinates: Coordinates = coordinates
        .parse()
        .unwrap_or_else(|e| fail(format!("Invalid coordinates: {}", e)));

    let year = match cli.year {
        Some(y) => y,
        None => {
            let raw = prompt("ENTER THE YEAR: ");
            raw.trim()
                .parse()
                .unwrap_or_else(|_| fail(format!("Invalid year '{}'", raw.trim())))
        }
    };

    let country = cli
        .country
        .clone()
        .unwrap_or_else(|| prompt("Enter country to find its neighbours: "));

    // ── Build ───────────────────────────────────────────────────

    let geocoder = NominatimClient::new(
        &config.nominatim_url,
        &config.user_agent,
        config.timeout,
        config.min_interval,
    );
    let builder = MapBuilder::new(geocoder, &config.dataset, &config.output_dir);
    let request = MapRequest {
        year,
        coordinates,
        country: country.trim().to_string(),
    };

    let artifact = builder.build(&request).unwrap_or_else(|e| fail(e));

    if let Some(ref place) = artifact.query_location {
        eprintln!("  \u{1F4CD} {}", place);
    }
    if let Some(ref err) = artifact.country_error {
        eprintln!("  \u{26A0}\u{FE0F}  {}", err);
    }

    if cli.json {
        match serde_json::to_string_pretty(&artifact) {
            Ok(json) => println!("{}", json),
            Err(e) => fail(e),
        }
    } else {
        println!("Map created: {}", artifact.path.display());
        println!(
            "  {} film location(s), {} country marker(s)",
            artifact.films.len(),
            artifact.countries.len()
        );
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("filmmap=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("filmmap=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt(message: &str) -> String {
    print!("{}", message);
    io::stdout().flush().ok();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => fail("No input"),
        Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
        Err(e) => fail(e),
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
