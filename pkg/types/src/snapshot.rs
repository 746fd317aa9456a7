use serde::{Deserialize, Serialize};

use crate::node::Node;
use crate::service::Service;

/// Point-in-time view of the services and nodes a reconciliation pass
/// decides against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}
