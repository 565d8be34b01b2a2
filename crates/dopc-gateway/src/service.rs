//! # Quote Service
//!
//! The one-operation calculation API exposed to the orchestration shell.
//!
//! ## Quote Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Quote Flow                                      │
//! │                                                                         │
//! │  QuoteRequest { cartValue, latitude, longitude, venueId }               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_cart_value ──► validate_inputs     (fail fast, no I/O)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  venue cache ──hit──────────────────────┐                               │
//! │       │ miss                            │                               │
//! │       ▼                                 ▼                               │
//! │  VenueClient::fetch_venue ──────► price_order (distance, surcharge,     │
//! │  (two GETs, atomic, cached)              fee, total)                    │
//! │                                         │                               │
//! │                                         ▼                               │
//! │                              CalculationResult | QuoteError             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caching
//! Venue data is fetched at most once per session per venue. The cache is a
//! `RwLock<Option<CachedVenue>>`: reads take the read lock; a miss fetches
//! WITHOUT holding the lock and then overwrites under the write lock. Two
//! racing requests may both fetch - the overwrite is idempotent (same venue,
//! static for the session), so last-write-wins is correct and no fetch lock
//! is needed. The core below this service stays completely stateless.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use dopc_core::pricing::price_order;
use dopc_core::types::{CalculationResult, Coordinate, VenueData};
use dopc_core::validation::{parse_cart_value, validate_inputs};

use crate::client::VenueClient;
use crate::error::{GatewayResult, QuoteError};

// =============================================================================
// Request
// =============================================================================

/// One delivery price calculation request, as the shell submits it.
///
/// `cart_value` is the raw major-unit string (`"8.50"`); conversion to cents
/// and all validation happen inside [`QuoteService::quote`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub cart_value: String,
    pub latitude: f64,
    pub longitude: f64,
    pub venue_id: String,
}

// =============================================================================
// Venue Cache
// =============================================================================

/// A fetched venue, keyed by the slug it was fetched for.
#[derive(Debug, Clone)]
struct CachedVenue {
    venue_id: String,
    data: VenueData,
}

// =============================================================================
// Quote Service
// =============================================================================

/// Orchestrates validation, venue data resolution, and pricing.
pub struct QuoteService {
    client: VenueClient,
    cache: RwLock<Option<CachedVenue>>,
}

impl QuoteService {
    /// Creates a service with an empty venue cache.
    pub fn new(client: VenueClient) -> Self {
        QuoteService {
            client,
            cache: RwLock::new(None),
        }
    }

    /// Computes a delivery price quote.
    ///
    /// Validation failures surface before any network call; venue data is
    /// fetched only on a cache miss.
    pub async fn quote(&self, request: &QuoteRequest) -> Result<CalculationResult, QuoteError> {
        debug!(venue_id = %request.venue_id, "Quote requested");

        let cart_value = parse_cart_value(&request.cart_value)?;
        validate_inputs(cart_value, request.latitude, request.longitude)?;

        let venue = self.venue_data(&request.venue_id).await?;

        let user_location = Coordinate::new(request.latitude, request.longitude);
        let result = price_order(cart_value, user_location, &venue)?;

        info!(
            venue_id = %request.venue_id,
            distance_m = result.delivery_distance,
            total_cents = result.total_price.cents(),
            "Quote computed"
        );

        Ok(result)
    }

    /// Resolves venue data from the session cache, fetching on a miss.
    async fn venue_data(&self, venue_id: &str) -> GatewayResult<VenueData> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.venue_id == venue_id {
                    debug!(venue_id = %venue_id, "Venue cache hit");
                    return Ok(cached.data.clone());
                }
            }
        }

        // Fetch outside the lock; a racing request at worst fetches the same
        // value and overwrites it (idempotent, last-write-wins).
        let data = self.client.fetch_venue(venue_id).await?;

        let mut cache = self.cache.write().await;
        *cache = Some(CachedVenue {
            venue_id: venue_id.to_string(),
            data: data.clone(),
        });

        Ok(data)
    }

    /// Empties the venue cache; the next quote will fetch fresh data.
    pub async fn discard_cached_venue(&self) {
        let mut cache = self.cache.write().await;
        *cache = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
