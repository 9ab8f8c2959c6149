use crate::{AlertHeaders, ApiMetrics, SprintEndpoint};

use sprint_config::ApiConfig;
use sprint_db::SprintStore;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub endpoint: SprintEndpoint,
    pub alerts: AlertHeaders,
    pub api_config: ApiConfig,
    pub metrics: ApiMetrics,
    /// Present when a Prometheus recorder was installed
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(store: Arc<dyn SprintStore>, api_config: ApiConfig) -> Self {
        Self {
            endpoint: SprintEndpoint::new(store),
            alerts: AlertHeaders::new(api_config.application_name.clone()),
            api_config,
            metrics: ApiMetrics::new(),
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }

    /// Absolute path of the sprint collection, e.g. `/api/sprints`
    pub fn sprints_url(&self) -> String {
        format!("{}/sprints", self.api_config.route_prefix())
    }
}
