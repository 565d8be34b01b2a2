//! # dopc: Delivery Order Price Calculator CLI
//!
//! The orchestration shell: collects raw field values, re-hydrates the last
//! submitted ones, invokes the quote service, renders the result.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (RUST_LOG-controlled)
//! 2. Merge flags over persisted inputs from the previous run
//! 3. Build the venue client from environment configuration
//! 4. Run one quote flow to completion
//! 5. On success, persist the submitted values and render the quote
//!
//! All validation and pricing semantics live below this crate; the shell
//! converts raw strings the same way the form did - a non-numeric coordinate
//! becomes NaN and is rejected by the canonical validator, never here.

mod error;
mod persist;

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use dopc_core::types::CalculationResult;
use dopc_gateway::{QuoteRequest, QuoteService, VenueClient};

use crate::error::ApiError;
use crate::persist::PersistedInputs;

/// The fixed venue quoted against when none is supplied.
const DEFAULT_VENUE: &str = "home-assignment-venue-helsinki";

/// Delivery Order Price Calculator.
///
/// Computes the delivery fee, small-order surcharge, and total price for an
/// order delivered from a venue to the given coordinates. Omitted flags fall
/// back to the values submitted on the previous run.
#[derive(Parser, Debug)]
#[command(name = "dopc", version, about)]
struct Cli {
    /// Cart value in major units, e.g. 8.50
    #[arg(long)]
    cart_value: Option<String>,

    /// User latitude in degrees
    #[arg(long)]
    lat: Option<String>,

    /// User longitude in degrees
    #[arg(long)]
    lon: Option<String>,

    /// Venue slug to quote against
    #[arg(long)]
    venue: Option<String>,

    /// Print the result as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let persisted = persist::default_path().and_then(|path| persist::load(&path));

    let cart_value = match resolve_field(cli.cart_value, persisted.as_ref().map(|p| &p.cart_value))
    {
        Some(value) => value,
        None => return missing_field("--cart-value"),
    };
    let latitude_raw = match resolve_field(cli.lat, persisted.as_ref().map(|p| &p.latitude)) {
        Some(value) => value,
        None => return missing_field("--lat"),
    };
    let longitude_raw = match resolve_field(cli.lon, persisted.as_ref().map(|p| &p.longitude)) {
        Some(value) => value,
        None => return missing_field("--lon"),
    };
    let venue_id = resolve_field(cli.venue, persisted.as_ref().map(|p| &p.venue_id))
        .unwrap_or_else(|| DEFAULT_VENUE.to_string());

    let client = match VenueClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };
    let service = QuoteService::new(client);

    let request = QuoteRequest {
        cart_value: cart_value.clone(),
        latitude: parse_coordinate(&latitude_raw),
        longitude: parse_coordinate(&longitude_raw),
        venue_id: venue_id.clone(),
    };

    match service.quote(&request).await {
        Ok(result) => {
            if let Some(path) = persist::default_path() {
                let inputs = PersistedInputs {
                    cart_value,
                    latitude: latitude_raw,
                    longitude: longitude_raw,
                    venue_id,
                    saved_at: Utc::now(),
                };
                if let Err(e) = persist::save(&path, &inputs) {
                    warn!(error = %e, "Failed to persist submitted inputs");
                }
            }

            if cli.json {
                // Serialization of a plain value struct cannot fail
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to encode result: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print!("{}", render_text(&result));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let api_error = ApiError::from(e);
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&api_error) {
                    eprintln!("{}", json);
                }
            } else {
                eprintln!("Error {}", api_error);
                eprintln!("{}", api_error.hint());
            }
            ExitCode::FAILURE
        }
    }
}

/// Flag value if given, else the persisted value from the previous run.
fn resolve_field(arg: Option<String>, persisted: Option<&String>) -> Option<String> {
    arg.or_else(|| persisted.cloned())
}

/// Converts a raw coordinate string the way the form did: non-numeric input
/// becomes NaN so the canonical validator reports it as `INVALID_INPUT`.
fn parse_coordinate(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Renders the quote in the original result-line shape.
fn render_text(result: &CalculationResult) -> String {
    format!(
        "Cart value: {}\n\
         Small order surcharge: {}\n\
         Delivery fee: {}\n\
         Delivery distance: {}m\n\
         Total price: {}\n",
        result.cart_value,
        result.small_order_surcharge,
        result.delivery_fee,
        result.delivery_distance,
        result.total_price,
    )
}

fn missing_field(flag: &str) -> ExitCode {
    eprintln!(
        "{} is required (no value given and none persisted from a previous run)",
        flag
    );
    ExitCode::from(2)
}

// =============================================================================
// Unit Tests
// =============================================================================
