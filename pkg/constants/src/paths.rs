//! Filesystem path constants.

/// Default provider config file path for the resolver CLI.
pub const DEFAULT_CLOUD_CONFIG: &str = "/etc/elb-resolver/cloud-config.yaml";
