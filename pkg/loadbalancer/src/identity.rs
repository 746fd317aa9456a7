//! Listener naming.
//!
//! New listeners are named after the Service UID. Older controller
//! versions named them `<name>_<uid>` with dots replaced, so lookups
//! probe the canonical name first and fall back to the legacy one.

use pkg_types::service::Service;
use serde::Serialize;

/// Provider-side listener name for a service. Stable for the lifetime
/// of the Service object.
pub fn listener_name(service: &Service) -> String {
    service.uid.clone()
}

/// Listener name used by earlier controller versions. Lookup only;
/// never name a new listener with it.
pub fn legacy_listener_name(service: &Service) -> String {
    format!("{}_{}", service.name, service.uid).replace('.', "_")
}

/// Which of a service's names a provider listener was found under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerMatch {
    Canonical,
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenerIdentity {
    pub canonical: String,
    pub legacy: String,
}

impl ListenerIdentity {
    /// Names to probe for an existing listener, in lookup order.
    pub fn candidates(&self) -> [&str; 2] {
        [self.canonical.as_str(), self.legacy.as_str()]
    }

    pub fn matches(&self, name: &str) -> Option<ListenerMatch> {
        if name == self.canonical {
            Some(ListenerMatch::Canonical)
        } else if name == self.legacy {
            Some(ListenerMatch::Legacy)
        } else {
            None
        }
    }
}

pub fn listener_identity(service: &Service) -> ListenerIdentity {
    ListenerIdentity {
        canonical: listener_name(service),
        legacy: legacy_listener_name(service),
    }
}
