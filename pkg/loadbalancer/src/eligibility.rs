use pkg_types::node::{ConditionStatus, Node, NodeAddressType, NodeCondition, NodeConditionType};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A node rendered as a load-balancer pool member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackendMember {
    pub node_name: String,
    pub address: String,
}

/// Index a node's conditions by type. When the same type appears more
/// than once, the later entry wins.
fn latest_conditions(node: &Node) -> HashMap<&NodeConditionType, &NodeCondition> {
    let mut conditions = HashMap::new();
    if let Some(status) = &node.status {
        for cond in &status.conditions {
            conditions.insert(&cond.condition_type, cond);
        }
    }
    conditions
}

/// Whether a node may receive traffic from the load balancer.
///
/// Requires a `Ready` condition with status `True`; a cordoned node is
/// never eligible. A node with no status block is simply not eligible.
/// The error channel is reserved for malformed snapshots and is not
/// produced today.
pub fn is_eligible_backend(node: &Node) -> anyhow::Result<bool> {
    let conditions = latest_conditions(node);

    let mut eligible = match conditions.get(&NodeConditionType::Ready) {
        Some(cond) => cond.status == ConditionStatus::True,
        None => false,
    };

    if node.spec.unschedulable {
        eligible = false;
    }

    Ok(eligible)
}

/// Filter `nodes` down to pool members, keeping input order.
///
/// Members are addressed by InternalIP, falling back to ExternalIP.
/// Eligible nodes without either are skipped.
pub fn eligible_backends(nodes: &[Node]) -> anyhow::Result<Vec<BackendMember>> {
    let mut members = Vec::new();
    for node in nodes {
        if !is_eligible_backend(node)? {
            debug!("Node {} is not an eligible backend", node.name);
            continue;
        }

        let address = node
            .address(NodeAddressType::InternalIP)
            .or_else(|| node.address(NodeAddressType::ExternalIP));
        match address {
            Some(address) => members.push(BackendMember {
                node_name: node.name.clone(),
                address: address.to_string(),
            }),
            None => warn!("Node {} is eligible but has no IP address, skipping", node.name),
        }
    }
    Ok(members)
}
