use pkg_constants::annotations::ELB_CLASS_ANNOTATION;
use pkg_types::config::LoadBalancerClass;
use pkg_types::service::Service;
use serde::Serialize;
use tracing::debug;

/// Which load balancer, if any, a service needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoadBalancerVariant {
    /// The service is not of type `LoadBalancer`.
    NotRequired,
    Classic,
    Application,
    Nat,
}

impl LoadBalancerVariant {
    /// The class to provision against, or `None` when nothing is needed.
    pub fn class(self) -> Option<LoadBalancerClass> {
        match self {
            LoadBalancerVariant::NotRequired => None,
            LoadBalancerVariant::Classic => Some(LoadBalancerClass::Classic),
            LoadBalancerVariant::Application => Some(LoadBalancerClass::Application),
            LoadBalancerVariant::Nat => Some(LoadBalancerClass::Nat),
        }
    }
}

impl From<LoadBalancerClass> for LoadBalancerVariant {
    fn from(class: LoadBalancerClass) -> Self {
        match class {
            LoadBalancerClass::Classic => LoadBalancerVariant::Classic,
            LoadBalancerClass::Application => LoadBalancerVariant::Application,
            LoadBalancerClass::Nat => LoadBalancerVariant::Nat,
        }
    }
}

impl std::fmt::Display for LoadBalancerVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.class() {
            Some(class) => write!(f, "{}", class),
            None => write!(f, "not-required"),
        }
    }
}

/// Pick the variant for a service.
///
/// Non-`LoadBalancer` services short-circuit to `NotRequired` before any
/// annotation is read. An absent or unrecognized class annotation falls
/// back to `default_class`.
pub fn select_variant(service: &Service, default_class: LoadBalancerClass) -> LoadBalancerVariant {
    if !service.is_load_balancer() {
        return LoadBalancerVariant::NotRequired;
    }

    let class = match service.annotation(ELB_CLASS_ANNOTATION) {
        None => default_class,
        Some(value) => LoadBalancerClass::from_annotation(value).unwrap_or_else(|| {
            debug!(
                "Service {}/{}: unrecognized {} '{}', using default '{}'",
                service.namespace, service.name, ELB_CLASS_ANNOTATION, value, default_class
            );
            default_class
        }),
    };
    class.into()
}
