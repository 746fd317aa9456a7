use pkg_constants::annotations::{ELB_SESSION_AFFINITY_MODE, ELB_SESSION_SOURCE_IP};
use pkg_constants::loadbalancer::DEFAULT_SESSION_AFFINITY_TIME;
use pkg_types::service::Service;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionAffinityKind {
    SourceIp,
}

/// Session stickiness to configure on the provider pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionAffinity {
    pub kind: SessionAffinityKind,
    pub timeout_minutes: u32,
}

/// True only when the affinity annotation is exactly `SOURCE_IP`.
pub fn session_affinity_enabled(service: &Service) -> bool {
    service.annotation(ELB_SESSION_AFFINITY_MODE) == Some(ELB_SESSION_SOURCE_IP)
}

pub fn session_affinity(service: &Service) -> Option<SessionAffinity> {
    session_affinity_enabled(service).then_some(SessionAffinity {
        kind: SessionAffinityKind::SourceIp,
        timeout_minutes: DEFAULT_SESSION_AFFINITY_TIME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::make_lb_service;

    fn with_mode(value: &str) -> Service {
        let mut svc = make_lb_service("web", "uid-1");
        svc.annotations
            .insert(ELB_SESSION_AFFINITY_MODE.to_string(), value.to_string());
        svc
    }

    #[test]
    fn source_ip_enables_affinity() {
        let svc = with_mode("SOURCE_IP");
        assert!(session_affinity_enabled(&svc));
        assert_eq!(
            session_affinity(&svc),
            Some(SessionAffinity {
                kind: SessionAffinityKind::SourceIp,
                timeout_minutes: 1440,
            })
        );
    }

    #[test]
    fn other_values_disable_affinity() {
        for value in ["source_ip", "SOURCE_IP ", "", "HTTP_COOKIE", "SOURCE"] {
            let svc = with_mode(value);
            assert!(!session_affinity_enabled(&svc), "value {:?}", value);
            assert_eq!(session_affinity(&svc), None);
        }
    }

    #[test]
    fn missing_annotation_disables_affinity() {
        let svc = make_lb_service("web", "uid-1");
        assert!(!session_affinity_enabled(&svc));
        assert_eq!(session_affinity(&svc), None);
    }
}
