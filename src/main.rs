mod dataset;
mod locate;
mod render;
mod trajectory;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use log::info;
use thiserror::Error;

use crate::dataset::DatasetError;
use crate::locate::LocateError;
use crate::render::RenderError;
use crate::trajectory::{QueryWindow, SscConfig, TrajectoryError};

/// NORAD object identifier the SSC service knows the station by.
const OBJECT_ID: &str = "iss";
/// Public rate-limited key accepted by the SSC service.
const DEFAULT_API_KEY: &str = "DEMO_KEY";

#[derive(Parser)]
#[command(name = "iss-overhead")]
#[command(about = "Plot the ISS trajectory against your location on an animated globe")]
struct Cli {
    /// Where to write the HTML report
    #[arg(long, default_value = "iss_overhead.html")]
    output: PathBuf,
    /// Do not open the report in a web browser
    #[arg(long)]
    no_open: bool,
    /// SSC API key (falls back to $SSC_API_KEY, then the public DEMO_KEY)
    #[arg(long)]
    api_key: Option<String>,
    /// Base URL of the SSC trajectory service
    #[arg(long, default_value = "https://sscweb.sci.gsfc.nasa.gov/WS/sscr/2")]
    ssc_url: String,
    /// Base URL of the IP geolocation service
    #[arg(long, default_value = "https://ipinfo.io/json")]
    geoip_url: String,
    /// How far back to fetch the trajectory, in minutes
    #[arg(long, default_value_t = 90)]
    lookback_minutes: i64,
    /// Timeout applied to each network call, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_seconds: u64,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("http client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("async runtime setup failed: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("location lookup failed: {0}")]
    Locate(#[from] LocateError),
    #[error("trajectory fetch failed: {0}")]
    Trajectory(#[from] TrajectoryError),
    #[error("dataset merge failed: {0}")]
    Dataset(#[from] DatasetError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(path) => {
            println!("Wrote {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<PathBuf, RunError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout_seconds))
        .build()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let window = QueryWindow::lookback(Utc::now(), cli.lookback_minutes);
    let config = SscConfig {
        base_url: cli.ssc_url.clone(),
        object_id: OBJECT_ID.to_string(),
        api_key: api_key(cli),
    };
    let samples = runtime.block_on(trajectory::fetch(&client, &config, &window))?;

    let user = runtime.block_on(locate::resolve(&client, &cli.geoip_url))?;
    info!(
        "caller located at ({:.2}°, {:.2}°)",
        user.latitude_deg, user.longitude_deg
    );

    let merged = dataset::merge(&samples, user)?;
    let title = format!("ISS over the last {} minutes", cli.lookback_minutes);
    render::write_report(&cli.output, &merged, &title)?;

    if !cli.no_open {
        render::open_with_web_browser(&cli.output);
    }
    Ok(cli.output.clone())
}

fn api_key(cli: &Cli) -> String {
    cli.api_key
        .clone()
        .or_else(|| std::env::var("SSC_API_KEY").ok())
        .unwrap_or_else(|| DEFAULT_API_KEY.to_string())
}
