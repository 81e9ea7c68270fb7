use std::fmt::Write;

use serde::Serialize;

use crate::entity::{Coordinate, Entity};
use crate::error::{Error, Result};

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// Header line followed by one numbered line per stop.
    PlainText,
    /// Bare keys prefixed with `+` (origin), `|` (intermediate), `-` (destination).
    Basic,
}

/// Stop along a resolved route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

/// Structured representation of a route that presentation layers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub origin: String,
    pub destination: String,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<f64>,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Build a summary from the ordered entities returned by a query.
    pub fn from_entities<E: Entity>(entities: &[E], total_weight: Option<f64>) -> Result<Self> {
        let (Some(first), Some(last)) = (entities.first(), entities.last()) else {
            return Err(Error::EmptyRoute);
        };

        let steps = entities
            .iter()
            .enumerate()
            .map(|(index, entity)| RouteStep {
                index,
                key: entity.key().to_string(),
                label: entity.label(),
                coordinate: entity.coordinate(),
            })
            .collect();

        Ok(Self {
            origin: first.key().to_string(),
            destination: last.key().to_string(),
            hops: entities.len() - 1,
            total_weight,
            steps,
        })
    }

    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = write!(
            buffer,
            "Route: {} -> {} ({} hops",
            self.origin, self.destination, self.hops
        );
        if let Some(weight) = self.total_weight {
            let _ = write!(buffer, ", weight {weight}");
        }
        let _ = writeln!(buffer, ")");

        for step in &self.steps {
            let _ = write!(buffer, "{:>3}: {}", step.index, step.label);
            if let Some(coordinate) = step.coordinate {
                let _ = write!(
                    buffer,
                    " [{:.4}, {:.4}]",
                    coordinate.latitude, coordinate.longitude
                );
            }
            let _ = writeln!(buffer);
        }
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let last = self.steps.len().saturating_sub(1);
        for (position, step) in self.steps.iter().enumerate() {
            let marker = match position {
                0 => '+',
                p if p == last => '-',
                _ => '|',
            };
            let _ = writeln!(buffer, "{marker} {}", step.key);
        }
        buffer
    }
}
