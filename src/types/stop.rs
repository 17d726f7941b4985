//! Stop types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// GPS coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A location selected for a visit plan.
///
/// Owned by the caller's selection state and copied by value into the
/// schedule; the engine never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

impl Stop {
    pub fn new(
        id: Uuid,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_serializes_camel_case() {
        let stop = Stop::new(
            Uuid::nil(),
            "Riverside Family Practice",
            "12 Main St, Springfield",
            Coordinates { lat: 39.78, lng: -89.65 },
        );
        let json = serde_json::to_value(&stop).unwrap();
        assert_eq!(json["name"], "Riverside Family Practice");
        assert_eq!(json["coordinates"]["lat"], 39.78);
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
    }
}
