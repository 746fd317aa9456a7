use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::validate::{validate_endpoint, validate_required};

/// Backend selection policy applied by the provider load balancer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ElbAlgorithm {
    #[default]
    #[serde(rename = "roundrobin")]
    RoundRobin,
    #[serde(rename = "leastconn")]
    LeastConnections,
    #[serde(rename = "source")]
    Source,
}

impl std::fmt::Display for ElbAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElbAlgorithm::RoundRobin => write!(f, "roundrobin"),
            ElbAlgorithm::LeastConnections => write!(f, "leastconn"),
            ElbAlgorithm::Source => write!(f, "source"),
        }
    }
}

/// Provider load-balancer technology a service can be provisioned against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerClass {
    Classic,
    #[default]
    Application,
    Nat,
}

impl LoadBalancerClass {
    /// Parse the value of the class annotation. Exact, case-sensitive match.
    pub fn from_annotation(value: &str) -> Option<Self> {
        match value {
            "classic" => Some(LoadBalancerClass::Classic),
            "application" => Some(LoadBalancerClass::Application),
            "nat" => Some(LoadBalancerClass::Nat),
            _ => None,
        }
    }
}

impl std::fmt::Display for LoadBalancerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadBalancerClass::Classic => write!(f, "classic"),
            LoadBalancerClass::Application => write!(f, "application"),
            LoadBalancerClass::Nat => write!(f, "nat"),
        }
    }
}

/// Provider configuration (YAML or JSON).
///
/// Loaded once at startup and shared read-only afterwards.
///
/// Example `cloud-config.yaml`:
/// ```yaml
/// apiserver: https://10.0.0.1:5443
/// secretName: cloud-credentials
/// signerType: ak-sk
/// elbAlgorithm: leastconn
/// tenantId: 0a1b2c
/// region: ap-southeast-1
/// vpcId: vpc-1234
/// subnetId: subnet-5678
/// elbEndpoint: https://elb.ap-southeast-1.example.com
/// albEndpoint: https://alb.ap-southeast-1.example.com
/// natEndpoint: https://nat.ap-southeast-1.example.com
/// ecsEndpoint: https://ecs.ap-southeast-1.example.com
/// vpcEndpoint: https://vpc.ap-southeast-1.example.com
/// defaultClass: application
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerOpts {
    #[serde(default)]
    pub apiserver: String,
    #[serde(default)]
    pub secret_name: String,
    #[serde(default)]
    pub signer_type: String,
    #[serde(default, alias = "algorithm")]
    pub elb_algorithm: ElbAlgorithm,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub vpc_id: String,
    #[serde(default)]
    pub subnet_id: String,
    #[serde(default)]
    pub ecs_endpoint: String,
    #[serde(default)]
    pub elb_endpoint: String,
    #[serde(default)]
    pub alb_endpoint: String,
    #[serde(default)]
    pub nat_endpoint: String,
    #[serde(default)]
    pub vpc_endpoint: String,
    /// Class used when a service carries no (or an unknown) class annotation.
    #[serde(default)]
    pub default_class: LoadBalancerClass,
}

impl LoadBalancerOpts {
    /// Provider endpoint serving the given class.
    pub fn endpoint_for(&self, class: LoadBalancerClass) -> &str {
        match class {
            LoadBalancerClass::Classic => &self.elb_endpoint,
            LoadBalancerClass::Application => &self.alb_endpoint,
            LoadBalancerClass::Nat => &self.nat_endpoint,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_required("region", &self.region)?;
        validate_required("vpcId", &self.vpc_id)?;
        validate_required("subnetId", &self.subnet_id)?;

        let default_endpoint = self.endpoint_for(self.default_class);
        if default_endpoint.is_empty() {
            anyhow::bail!(
                "endpoint for default class '{}' must be set",
                self.default_class
            );
        }

        for (field, value) in [
            ("apiserver", &self.apiserver),
            ("ecsEndpoint", &self.ecs_endpoint),
            ("elbEndpoint", &self.elb_endpoint),
            ("albEndpoint", &self.alb_endpoint),
            ("natEndpoint", &self.nat_endpoint),
            ("vpcEndpoint", &self.vpc_endpoint),
        ] {
            if !value.is_empty() {
                validate_endpoint(field, value)?;
            }
        }
        Ok(())
    }
}

/// Load a YAML config file, returning the default if the file doesn't exist.
pub fn load_config_file<T: serde::de::DeserializeOwned + Default>(path: &str) -> Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(T::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: T = serde_yaml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_opts() -> LoadBalancerOpts {
        serde_yaml::from_str(
            r#"
apiserver: https://10.0.0.1:5443
secretName: cloud-credentials
signerType: ak-sk
elbAlgorithm: leastconn
tenantId: tenant-1
region: ap-southeast-1
vpcId: vpc-1234
subnetId: subnet-5678
elbEndpoint: https://elb.example.com
albEndpoint: https://alb.example.com
natEndpoint: https://nat.example.com
"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_camel_case_fields() {
        let opts = make_opts();
        assert_eq!(opts.secret_name, "cloud-credentials");
        assert_eq!(opts.elb_algorithm, ElbAlgorithm::LeastConnections);
        assert_eq!(opts.vpc_id, "vpc-1234");
        assert_eq!(opts.default_class, LoadBalancerClass::Application);
        assert!(opts.ecs_endpoint.is_empty());
    }

    #[test]
    fn parses_json_config() {
        let opts: LoadBalancerOpts = serde_json::from_str(
            r#"{"region": "r1", "elbAlgorithm": "source", "defaultClass": "nat"}"#,
        )
        .unwrap();
        assert_eq!(opts.elb_algorithm, ElbAlgorithm::Source);
        assert_eq!(opts.default_class, LoadBalancerClass::Nat);
    }

    #[test]
    fn endpoint_per_class() {
        let opts = make_opts();
        assert_eq!(
            opts.endpoint_for(LoadBalancerClass::Classic),
            "https://elb.example.com"
        );
        assert_eq!(
            opts.endpoint_for(LoadBalancerClass::Application),
            "https://alb.example.com"
        );
        assert_eq!(
            opts.endpoint_for(LoadBalancerClass::Nat),
            "https://nat.example.com"
        );
    }

    #[test]
    fn valid_config() {
        assert!(make_opts().validate().is_ok());
    }

    #[test]
    fn invalid_configs() {
        let mut opts = make_opts();
        opts.region.clear();
        assert!(opts.validate().is_err());

        let mut opts = make_opts();
        opts.alb_endpoint.clear();
        assert!(opts.validate().is_err());

        // Missing endpoint is fine when it isn't the default class.
        let mut opts = make_opts();
        opts.nat_endpoint.clear();
        assert!(opts.validate().is_ok());

        let mut opts = make_opts();
        opts.vpc_endpoint = "vpc.example.com".to_string();
        assert!(opts.validate().is_err());
    }

    #[test]
    fn class_annotation_is_exact() {
        assert_eq!(
            LoadBalancerClass::from_annotation("nat"),
            Some(LoadBalancerClass::Nat)
        );
        assert_eq!(LoadBalancerClass::from_annotation("NAT"), None);
        assert_eq!(LoadBalancerClass::from_annotation(""), None);
    }

    #[test]
    fn missing_file_yields_default() {
        let opts: LoadBalancerOpts =
            load_config_file("/nonexistent/elb-resolver/cloud-config.yaml").unwrap();
        assert!(opts.region.is_empty());
        assert_eq!(opts.elb_algorithm, ElbAlgorithm::RoundRobin);
    }
}
