//! Directions providers
//!
//! Uses the Google Directions API when an API key is configured, and a
//! straight-line estimate otherwise (local runs and tests).

mod google;

pub use google::{GoogleDirectionsClient, GoogleDirectionsConfig};

use async_trait::async_trait;
use tracing::info;

use crate::config::Config;
use crate::error::DirectionsError;
use crate::services::geo::{
    road_distance_meters, travel_time_seconds, AVERAGE_SPEED_KMH, ROAD_COEFFICIENT,
};
use crate::types::{CandidateRoute, Coordinates, Leg};

/// Source of candidate routes for an ordered list of stop coordinates.
///
/// The first candidate returned must travel the coordinates in the given
/// order. Further candidates are alternatives; any of them may carry a
/// `waypoint_order` over the full coordinate list.
#[async_trait]
pub trait DirectionsService: Send + Sync {
    async fn get_routes(
        &self,
        locations: &[Coordinates],
    ) -> Result<Vec<CandidateRoute>, DirectionsError>;

    /// Get service name for logging
    fn name(&self) -> &str;
}

/// Straight-line directions estimate
/// Uses Haversine distance × coefficient for estimation
pub struct MockDirectionsService {
    /// Coefficient for converting straight-line to road distance (default: 1.3)
    road_coefficient: f64,
    /// Average speed in km/h for time estimation (default: 40)
    average_speed_kmh: f64,
}

impl Default for MockDirectionsService {
    fn default() -> Self {
        Self {
            road_coefficient: ROAD_COEFFICIENT,
            average_speed_kmh: AVERAGE_SPEED_KMH,
        }
    }
}

impl MockDirectionsService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(road_coefficient: f64, average_speed_kmh: f64) -> Self {
        Self {
            road_coefficient,
            average_speed_kmh,
        }
    }

    fn leg(&self, from: &Coordinates, to: &Coordinates) -> Leg {
        Leg {
            duration_seconds: travel_time_seconds(
                from,
                to,
                self.road_coefficient,
                self.average_speed_kmh,
            ),
            distance_meters: road_distance_meters(from, to, self.road_coefficient),
        }
    }

    fn route_for_order(&self, locations: &[Coordinates], order: &[usize]) -> CandidateRoute {
        let legs = order
            .windows(2)
            .map(|w| self.leg(&locations[w[0]], &locations[w[1]]))
            .collect();
        let geometry = order
            .iter()
            .map(|&i| [locations[i].lng, locations[i].lat])
            .collect();
        CandidateRoute::from_legs(legs).with_geometry(geometry)
    }

    /// Greedy nearest-neighbour order over the intermediate stops, keeping the
    /// first and last stop in place.
    fn nearest_neighbour_order(&self, locations: &[Coordinates]) -> Vec<usize> {
        let n = locations.len();
        let mut order = vec![0];
        let mut remaining: Vec<usize> = (1..n - 1).collect();

        while !remaining.is_empty() {
            let current = order[order.len() - 1];
            let (pos, _) = remaining
                .iter()
                .enumerate()
                .map(|(pos, &idx)| {
                    (pos, self.leg(&locations[current], &locations[idx]).duration_seconds)
                })
                .min_by_key(|&(_, secs)| secs)
                .unwrap_or((0, 0));
            order.push(remaining.remove(pos));
        }

        order.push(n - 1);
        order
    }
}

#[async_trait]
impl DirectionsService for MockDirectionsService {
    async fn get_routes(
        &self,
        locations: &[Coordinates],
    ) -> Result<Vec<CandidateRoute>, DirectionsError> {
        let n = locations.len();
        if n < 2 {
            return Ok(vec![CandidateRoute::empty()]);
        }

        let requested: Vec<usize> = (0..n).collect();
        let mut candidates = vec![self.route_for_order(locations, &requested)];

        if n >= 4 {
            let suggested = self.nearest_neighbour_order(locations);
            if suggested != requested {
                candidates.push(
                    self.route_for_order(locations, &suggested)
                        .with_waypoint_order(suggested),
                );
            }
        }

        Ok(candidates)
    }

    fn name(&self) -> &str {
        "MockDirections"
    }
}

/// Create directions service based on configuration
pub fn create_directions_service(config: &Config) -> Box<dyn DirectionsService> {
    match &config.directions_api_key {
        Some(key) => {
            info!("Using Google Directions at {}", config.directions_api_url);
            Box::new(GoogleDirectionsClient::new(GoogleDirectionsConfig {
                base_url: config.directions_api_url.clone(),
                api_key: key.clone(),
                timeout_seconds: config.directions_timeout_seconds,
            }))
        }
        None => {
            info!("Using mock directions service (no DIRECTIONS_API_KEY configured)");
            Box::new(MockDirectionsService::new())
        }
    }
}
