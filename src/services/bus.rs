//! Bus schedules and line details.

use std::sync::Arc;

use serde_json::Value;

use crate::category::ServiceCategory;
use crate::config::EmtConfig;
use crate::credentials::Credentials;
use crate::dispatch::Dispatcher;
use crate::endpoints::bus;
use crate::error::Result;
use crate::params::RequestParams;
use crate::transport::Transport;

/// Facade over the bus service family.
///
/// Dates use the `DD/MM/YYYY` format the platform expects; line lists are
/// pipe-separated (`"27|32"`).
#[derive(Debug, Clone)]
pub struct BusService {
    dispatcher: Dispatcher,
}

impl BusService {
    /// Create the facade with its own credential copy.
    pub fn new(
        credentials: Credentials,
        config: Arc<EmtConfig>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(ServiceCategory::Bus, credentials, config, transport),
        }
    }

    /// Dispatch any catalogued bus endpoint by id.
    pub async fn call(&self, endpoint_id: &str, params: RequestParams) -> Result<Value> {
        self.dispatcher.dispatch(endpoint_id, params).await
    }

    /// EMT calendar with day types and line schedules for a date range.
    pub async fn get_calendar(&self, date_begin: &str, date_end: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("SelectDateBegin", date_begin)
            .with("SelectDateEnd", date_end);
        self.call(bus::GET_CALENDAR, params).await
    }

    /// Every line type and its details.
    pub async fn get_groups(&self) -> Result<Value> {
        self.call(bus::GET_GROUPS, RequestParams::new()).await
    }

    /// Lines with description and group for a target date.
    pub async fn get_list_lines(&self, select_date: &str, lines: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("SelectDate", select_date)
            .with("Lines", lines);
        self.call(bus::GET_LIST_LINES, params).await
    }

    /// Stop identifiers with coordinates, name, lines and directions.
    pub async fn get_nodes_lines(&self, nodes: &str) -> Result<Value> {
        let params = RequestParams::new().with("Nodes", nodes);
        self.call(bus::GET_NODES_LINES, params).await
    }

    /// Line routes with the vertex info needed to draw them, plus stop and
    /// axis coordinates.
    pub async fn get_route_lines(&self, select_date: &str, lines: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("SelectDate", select_date)
            .with("Lines", lines);
        self.call(bus::GET_ROUTE_LINES, params).await
    }

    /// Route variant keyed by itinerary.
    pub async fn get_route_lines_route(&self, select_date: &str, lines: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("SelectDate", select_date)
            .with("Lines", lines);
        self.call(bus::GET_ROUTE_LINES_ROUTE, params).await
    }

    /// Travel details for the requested lines.
    pub async fn get_time_table_lines(&self, select_date: &str, lines: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("SelectDate", select_date)
            .with("Lines", lines);
        self.call(bus::GET_TIME_TABLE_LINES, params).await
    }

    /// Current schedules for the requested lines.
    pub async fn get_times_lines(&self, select_date: &str, lines: &str) -> Result<Value> {
        let params = RequestParams::new()
            .with("SelectDate", select_date)
            .with("Lines", lines);
        self.call(bus::GET_TIMES_LINES, params).await
    }
}
