use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// --- Condition status ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl std::fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConditionStatus::True => write!(f, "True"),
            ConditionStatus::False => write!(f, "False"),
            ConditionStatus::Unknown => write!(f, "Unknown"),
        }
    }
}

// --- Condition type ---

/// Kind of a node condition. Serialized as its plain string so
/// condition types this crate doesn't know about still round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeConditionType {
    Ready,
    MemoryPressure,
    DiskPressure,
    PIDPressure,
    NetworkUnavailable,
    Other(String),
}

impl From<String> for NodeConditionType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Ready" => NodeConditionType::Ready,
            "MemoryPressure" => NodeConditionType::MemoryPressure,
            "DiskPressure" => NodeConditionType::DiskPressure,
            "PIDPressure" => NodeConditionType::PIDPressure,
            "NetworkUnavailable" => NodeConditionType::NetworkUnavailable,
            _ => NodeConditionType::Other(s),
        }
    }
}

impl From<NodeConditionType> for String {
    fn from(t: NodeConditionType) -> Self {
        t.to_string()
    }
}

impl std::fmt::Display for NodeConditionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeConditionType::Ready => write!(f, "Ready"),
            NodeConditionType::MemoryPressure => write!(f, "MemoryPressure"),
            NodeConditionType::DiskPressure => write!(f, "DiskPressure"),
            NodeConditionType::PIDPressure => write!(f, "PIDPressure"),
            NodeConditionType::NetworkUnavailable => write!(f, "NetworkUnavailable"),
            NodeConditionType::Other(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: NodeConditionType,
    pub status: ConditionStatus,
    #[serde(default)]
    pub last_heartbeat_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_transition_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

// --- Addresses ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NodeAddressType {
    InternalIP,
    ExternalIP,
    Hostname,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeAddress {
    #[serde(rename = "type")]
    pub address_type: NodeAddressType,
    pub address: String,
}

// --- Node ---

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeSpec {
    /// If true, the node is cordoned and must not receive new work.
    #[serde(default)]
    pub unschedulable: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeStatus {
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
    #[serde(default)]
    pub addresses: Vec<NodeAddress>,
}

/// Snapshot of a cluster node. Owned by the control plane; this crate
/// only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default)]
    pub spec: NodeSpec,
    /// `None` when the control plane has not reported status yet.
    #[serde(default)]
    pub status: Option<NodeStatus>,
}

impl Node {
    /// First address of the given type, in reported order.
    pub fn address(&self, address_type: NodeAddressType) -> Option<&str> {
        self.status
            .as_ref()?
            .addresses
            .iter()
            .find(|a| a.address_type == address_type)
            .map(|a| a.address.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_type_keeps_unknown_strings() {
        let t: NodeConditionType = serde_json::from_str("\"CustomPressure\"").unwrap();
        assert_eq!(t, NodeConditionType::Other("CustomPressure".to_string()));
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"CustomPressure\"");

        let ready: NodeConditionType = serde_json::from_str("\"Ready\"").unwrap();
        assert_eq!(ready, NodeConditionType::Ready);
    }

    #[test]
    fn node_without_status_deserializes() {
        let node: Node = serde_json::from_str(r#"{"name": "worker-1"}"#).unwrap();
        assert!(node.status.is_none());
        assert!(!node.spec.unschedulable);
        assert_eq!(node.address(NodeAddressType::InternalIP), None);
    }

    #[test]
    fn address_lookup_by_type() {
        let node: Node = serde_json::from_str(
            r#"{
                "name": "worker-1",
                "status": {
                    "conditions": [{"type": "Ready", "status": "True"}],
                    "addresses": [
                        {"type": "Hostname", "address": "worker-1"},
                        {"type": "InternalIP", "address": "192.168.0.10"}
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(node.address(NodeAddressType::InternalIP), Some("192.168.0.10"));
        assert_eq!(node.address(NodeAddressType::ExternalIP), None);
    }
}
