//! Domain entities routed by the path finder.

use serde::{Deserialize, Serialize};

/// Two-dimensional geographic position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// An addressable node payload supplied by a data provider.
///
/// Keys must be unique across one dataset; they are what callers pass to
/// [`crate::PathFinder::find_path`].
pub trait Entity: Clone + Send + Sync + 'static {
    fn key(&self) -> &str;

    /// Human readable label used by presentation layers.
    fn label(&self) -> String {
        self.key().to_string()
    }

    fn coordinate(&self) -> Option<Coordinate> {
        None
    }
}

/// A directed connection between two entity keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLink {
    /// Operator of the connection, when known.
    #[serde(default)]
    pub airline: Option<String>,
    pub origin: String,
    pub destination: String,
    /// Explicit cost; links without one use the finder's default weight.
    #[serde(default)]
    pub weight: Option<f64>,
}

impl RouteLink {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            airline: None,
            origin: origin.into(),
            destination: destination.into(),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}

/// Airport keyed by its three letter IATA code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,
    pub city: String,
    pub country: String,
    pub code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Entity for Airport {
    fn key(&self) -> &str {
        &self.code
    }

    fn label(&self) -> String {
        format!("{} {} {}", self.city, self.name, self.code)
    }

    fn coordinate(&self) -> Option<Coordinate> {
        Some(Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

impl Entity for String {
    fn key(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn airport_label_includes_city_and_code() {
        let airport = Airport {
            name: "Heathrow".to_string(),
            city: "London".to_string(),
            country: "United Kingdom".to_string(),
            code: "LHR".to_string(),
            latitude: 51.4706,
            longitude: -0.461941,
        };
        assert_eq!(airport.key(), "LHR");
        assert_eq!(airport.label(), "London Heathrow LHR");
        assert_eq!(
            airport.coordinate(),
            Some(Coordinate {
                latitude: 51.4706,
                longitude: -0.461941
            })
        );
    }

    #[test]
    fn plain_string_entities_use_defaults() {
        let key = "AAA".to_string();
        assert_eq!(Entity::key(&key), "AAA");
        assert_eq!(key.label(), "AAA");
        assert!(key.coordinate().is_none());
    }
}
