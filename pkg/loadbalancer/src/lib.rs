//! Load-balancer decisions for `LoadBalancer` services.
//!
//! Every function here is a pure read of a Service/Node snapshot plus the
//! provider configuration. Provisioning, retries and watches belong to the
//! caller.

pub mod affinity;
pub mod annotations;
pub mod eligibility;
pub mod healthcheck;
pub mod identity;
pub mod variant;

#[cfg(test)]
pub(crate) mod fixtures;

use pkg_types::config::{ElbAlgorithm, LoadBalancerClass, LoadBalancerOpts};
use pkg_types::node::Node;
use pkg_types::service::Service;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::affinity::SessionAffinity;
use crate::eligibility::BackendMember;
use crate::healthcheck::HealthCheckListener;
use crate::identity::ListenerIdentity;

/// Desired provider-side state for one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerPlan {
    pub class: LoadBalancerClass,
    pub endpoint: String,
    pub listener: ListenerIdentity,
    /// Provider object to adopt instead of creating one.
    pub elb_id: Option<String>,
    pub mark: Option<String>,
    pub vpc_id: String,
    pub subnet_id: String,
    pub algorithm: ElbAlgorithm,
    pub session_affinity: Option<SessionAffinity>,
    pub health_check: Option<HealthCheckListener>,
    pub members: Vec<BackendMember>,
}

/// Runs every decision for a service against a shared, immutable
/// provider configuration.
#[derive(Debug, Clone)]
pub struct LoadBalancerResolver {
    opts: Arc<LoadBalancerOpts>,
}

impl LoadBalancerResolver {
    pub fn new(opts: Arc<LoadBalancerOpts>) -> Self {
        Self { opts }
    }

    /// Resolve the desired load balancer for `service`. Returns `None`
    /// when the service doesn't need one.
    pub fn plan(&self, service: &Service, nodes: &[Node]) -> anyhow::Result<Option<LoadBalancerPlan>> {
        let Some(class) = variant::select_variant(service, self.opts.default_class).class() else {
            return Ok(None);
        };

        let members = eligibility::eligible_backends(nodes)?;
        let plan = LoadBalancerPlan {
            class,
            endpoint: self.opts.endpoint_for(class).to_string(),
            listener: identity::listener_identity(service),
            elb_id: annotations::elb_id(service).map(str::to_string),
            mark: annotations::elb_mark(service).map(str::to_string),
            vpc_id: annotations::vpc_id(service, &self.opts).to_string(),
            subnet_id: self.opts.subnet_id.clone(),
            algorithm: self.opts.elb_algorithm,
            session_affinity: affinity::session_affinity(service),
            health_check: healthcheck::health_check_listener(service),
            members,
        };

        info!(
            "Service {}/{} → {} load balancer (listener {}, {}/{} backends)",
            service.namespace,
            service.name,
            plan.class,
            plan.listener.canonical,
            plan.members.len(),
            nodes.len()
        );
        Ok(Some(plan))
    }
}
