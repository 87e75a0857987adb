//! Query façade over a finished catalogue.
//!
//! Building a [`RequestHandler`] takes ownership of the catalogue, so nothing
//! can mutate it once the routing graph exists. The handler is cheap to clone
//! and can be shared between threads.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::identifiers::BusName;
use crate::models::{traits::TransitProvider, types::*};
use crate::provider::Catalogue;
use crate::router::{Itinerary, RoutingSettings, TransportRouter};

#[derive(Clone, Debug)]
pub struct RequestHandler {
    catalogue: Arc<Catalogue>,
    router: Arc<TransportRouter>,
}

impl RequestHandler {
    pub fn build(catalogue: Catalogue, settings: RoutingSettings) -> Result<Self> {
        let router = TransportRouter::build(&catalogue, settings)?;
        Ok(Self {
            catalogue: Arc::new(catalogue),
            router: Arc::new(router),
        })
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn router(&self) -> &TransportRouter {
        &self.router
    }

    /// Statistics for a bus, `None` if the bus is unknown
    pub fn bus_stat(&self, bus_name: &str) -> Option<BusInfo> {
        let bus = self.catalogue.get_bus(bus_name)?;
        Some(self.catalogue.bus_info(bus))
    }

    /// Buses through a stop, `None` if the stop is unknown.
    ///
    /// A known stop that no bus serves yields `Some` of an empty set.
    pub fn buses_by_stop(&self, stop_name: &str) -> Option<&BTreeSet<BusName>> {
        self.catalogue.get_stop(stop_name)?;
        Some(self.catalogue.buses_by_stop(stop_name))
    }

    pub fn route(&self, from: &str, to: &str) -> Result<Option<Itinerary>> {
        self.router.find_route(from, to)
    }
}
