//! Route query results.

use crate::identifiers::{BusName, StopName};

/// One traversed edge of a route. Times are in minutes.
#[derive(Clone, Debug, PartialEq)]
pub enum Leg {
    Wait {
        stop: StopName,
        time: f64,
    },
    Ride {
        bus: BusName,
        /// Number of stop-to-stop segments covered without leaving the bus
        span_count: usize,
        time: f64,
    },
}

impl Leg {
    pub fn time(&self) -> f64 {
        match self {
            Leg::Wait { time, .. } | Leg::Ride { time, .. } => *time,
        }
    }
}

/// A minimum-time journey between two stops
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Itinerary {
    pub total_time: f64,
    pub legs: Vec<Leg>,
}

impl Itinerary {
    /// How many times a bus is boarded
    pub fn boardings(&self) -> usize {
        self.legs
            .iter()
            .filter(|leg| matches!(leg, Leg::Ride { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boardings_and_time() {
        let itinerary = Itinerary {
            total_time: 11.5,
            legs: vec![
                Leg::Wait {
                    stop: StopName::new("A"),
                    time: 5.0,
                },
                Leg::Ride {
                    bus: BusName::new("1"),
                    span_count: 2,
                    time: 6.5,
                },
            ],
        };

        assert_eq!(itinerary.boardings(), 1);
        let sum: f64 = itinerary.legs.iter().map(Leg::time).sum();
        assert_eq!(sum, itinerary.total_time);
    }

    #[test]
    fn test_empty_itinerary() {
        let itinerary = Itinerary::default();
        assert_eq!(itinerary.boardings(), 0);
        assert_eq!(itinerary.total_time, 0.0);
    }
}
