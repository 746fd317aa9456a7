//! Load-balancer listener and health-check constants.

/// Name of the controller-managed health-check port on a Service.
pub const HEALTHZ_CCE: &str = "cce-healthz";

/// Description stamped on auto-generated listeners.
pub const LISTENER_DESCRIPTION: &str =
    "Attention! It is auto-generated by CCE service, do not modify!";

/// Health probe request payload.
pub const PING: &str = "ping";

/// Health probe expected response.
pub const PONG: &str = "pong";

/// Session affinity timeout in minutes when affinity is enabled.
pub const DEFAULT_SESSION_AFFINITY_TIME: u32 = 1440;
