//! Google Directions API client
//!
//! API documentation:
//! https://developers.google.com/maps/documentation/directions/get-directions

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::DirectionsService;
use crate::error::DirectionsError;
use crate::types::{CandidateRoute, Coordinates, Leg};

/// Google Directions client configuration
#[derive(Debug, Clone)]
pub struct GoogleDirectionsConfig {
    /// Endpoint URL (e.g., "https://maps.googleapis.com/maps/api/directions/json")
    pub base_url: String,
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Google Directions client
pub struct GoogleDirectionsClient {
    client: Client,
    config: GoogleDirectionsConfig,
}

impl GoogleDirectionsClient {
    pub fn new(config: GoogleDirectionsConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Query parameters for one directions request.
    ///
    /// With `optimize`, the intermediate waypoints may be reordered by the
    /// provider; the first and last location stay fixed.
    fn build_query(
        &self,
        locations: &[Coordinates],
        optimize: bool,
    ) -> Vec<(&'static str, String)> {
        let fmt = |c: &Coordinates| format!("{},{}", c.lat, c.lng);
        let n = locations.len();

        let mut query = vec![
            ("origin", fmt(&locations[0])),
            ("destination", fmt(&locations[n - 1])),
            ("mode", "driving".to_string()),
        ];

        if n > 2 {
            let mut waypoints: Vec<String> = locations[1..n - 1].iter().map(fmt).collect();
            if optimize {
                waypoints.insert(0, "optimize:true".to_string());
            }
            query.push(("waypoints", waypoints.join("|")));
        } else {
            query.push(("alternatives", "true".to_string()));
        }

        query.push(("key", self.config.api_key.clone()));
        query
    }

    async fn request(
        &self,
        locations: &[Coordinates],
        optimize: bool,
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        let query = self.build_query(locations, optimize);

        debug!(
            "Requesting directions for {} locations (optimize: {})",
            locations.len(),
            optimize
        );

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(DirectionsError::Status {
                status: status.as_u16().to_string(),
                message: body,
            });
        }

        let parsed: DirectionsResponse = serde_json::from_str(&body)?;
        let candidates = candidates_from_response(parsed, locations.len(), optimize)?;

        debug!("Received {} candidate routes", candidates.len());
        Ok(candidates)
    }
}

#[async_trait]
impl DirectionsService for GoogleDirectionsClient {
    async fn get_routes(
        &self,
        locations: &[Coordinates],
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        if locations.len() < 2 {
            return Ok(vec![CandidateRoute::empty()]);
        }

        let mut candidates = self.request(locations, false).await?;

        // With fewer than two intermediate stops there is nothing to reorder.
        if locations.len() >= 4 && !candidates.is_empty() {
            candidates.extend(self.request(locations, true).await?);
        }

        Ok(candidates)
    }

    fn name(&self) -> &str {
        "GoogleDirections"
    }
}

/// Convert a parsed response into candidates.
///
/// `ZERO_RESULTS` yields no candidates; any other non-OK status is an error.
fn candidates_from_response(
    response: DirectionsResponse,
    location_count: usize,
    optimized: bool,
) -> Result<Vec<CandidateRoute>, DirectionsError> {
    if response.status == "ZERO_RESULTS" {
        return Ok(vec![]);
    }
    if response.status != "OK" {
        let message = response
            .error_message
            .unwrap_or_else(|| response.status.clone());
        return Err(DirectionsError::Status {
            status: response.status,
            message,
        });
    }

    response
        .routes
        .into_iter()
        .map(|route| -> Result<CandidateRoute, DirectionsError> {
            let legs = route
                .legs
                .iter()
                .map(|leg| Leg {
                    duration_seconds: leg.duration.value,
                    distance_meters: leg.distance.value,
                })
                .collect();

            let geometry = match &route.overview_polyline {
                Some(polyline) => decode_polyline(&polyline.points, 5)?,
                None => vec![],
            };

            let mut candidate = CandidateRoute::from_legs(legs).with_geometry(geometry);
            if optimized && !route.waypoint_order.is_empty() {
                let order = widen_waypoint_order(&route.waypoint_order, location_count);
                candidate = candidate.with_waypoint_order(order);
            }
            Ok(candidate)
        })
        .collect()
}

/// Google reports the order of intermediate waypoints only; turn it into a
/// permutation over all locations with origin and destination fixed.
fn widen_waypoint_order(waypoint_order: &[usize], location_count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(location_count);
    order.push(0);
    order.extend(waypoint_order.iter().map(|i| i + 1));
    order.push(location_count - 1);
    order
}

// Google Directions API types

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    legs: Vec<DirectionsLeg>,
    #[serde(default)]
    waypoint_order: Vec<usize>,
    #[serde(default)]
    overview_polyline: Option<OverviewPolyline>,
}

#[derive(Debug, Deserialize)]
struct DirectionsLeg {
    /// Seconds
    duration: TextValue,
    /// Meters
    distance: TextValue,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct OverviewPolyline {
    points: String,
}

/// Decode an encoded polyline into [lng, lat] pairs.
/// Precision is 5 decimal places for Google (vs 6 for Valhalla)
fn decode_polyline(encoded: &str, precision: u32) -> Result<Vec<[f64; 2]>, DirectionsError> {
    fn next_value(bytes: &[u8], i: &mut usize) -> Result<i64, DirectionsError> {
        let mut shift = 0;
        let mut result = 0i64;
        loop {
            let byte = *bytes.get(*i).ok_or(DirectionsError::Polyline)? as i64 - 63;
            *i += 1;
            result |= (byte & 0x1f) << shift;
            shift += 5;
            if byte < 0x20 {
                break;
            }
        }
        Ok(if result & 1 != 0 { !(result >> 1) } else { result >> 1 })
    }

    let factor = 10_f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut coordinates = Vec::new();
    let mut lat = 0i64;
    let mut lng = 0i64;
    let mut i = 0;

    while i < bytes.len() {
        lat += next_value(bytes, &mut i)?;
        lng += next_value(bytes, &mut i)?;
        // GeoJSON uses [lng, lat] order
        coordinates.push([lng as f64 / factor, lat as f64 / factor]);
    }

    Ok(coordinates)
}
