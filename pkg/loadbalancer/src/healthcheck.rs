use pkg_constants::loadbalancer::{HEALTHZ_CCE, LISTENER_DESCRIPTION, PING, PONG};
use pkg_types::service::{Protocol, Service, ServicePort};
use serde::Serialize;

use crate::identity::listener_name;

/// The controller-owned listener wired to a service's health-check port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthCheckListener {
    pub name: String,
    pub protocol: Protocol,
    pub port: u16,
    pub target_port: u16,
    pub node_port: Option<u16>,
    pub description: &'static str,
    pub probe_request: &'static str,
    pub probe_response: &'static str,
}

/// First port named `cce-healthz`, in declaration order.
pub fn health_check_port(service: &Service) -> Option<&ServicePort> {
    service.spec.ports.iter().find(|p| p.name == HEALTHZ_CCE)
}

pub fn health_check_listener(service: &Service) -> Option<HealthCheckListener> {
    let port = health_check_port(service)?;
    Some(HealthCheckListener {
        name: format!("{}-{}", listener_name(service), HEALTHZ_CCE),
        protocol: port.protocol,
        port: port.port,
        target_port: port.target_port,
        node_port: port.node_port,
        description: LISTENER_DESCRIPTION,
        probe_request: PING,
        probe_response: PONG,
    })
}
