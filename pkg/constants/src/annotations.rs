//! Service annotation keys understood by the resolver.

/// Id of an existing provider load balancer the service should adopt.
pub const ELB_ID_ANNOTATION: &str = "kubernetes.io/elb.id";

/// Load-balancer class: `classic`, `application` or `nat`.
pub const ELB_CLASS_ANNOTATION: &str = "kubernetes.io/elb.class";

/// Free-form tag propagated to the provider object.
pub const ELB_MARK_ANNOTATION: &str = "kubernetes.io/elb.mark";

/// VPC the load balancer is provisioned in. Overrides the provider default.
pub const VPC_ID_ANNOTATION: &str = "kubernetes.io/elb.vpc.id";

/// Session affinity mode. Only [`ELB_SESSION_SOURCE_IP`] enables it.
pub const ELB_SESSION_AFFINITY_MODE: &str = "kubernetes.io/session-affinity-mode";

/// The single recognized value of [`ELB_SESSION_AFFINITY_MODE`].
pub const ELB_SESSION_SOURCE_IP: &str = "SOURCE_IP";
