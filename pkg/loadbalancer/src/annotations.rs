use pkg_constants::annotations::{ELB_ID_ANNOTATION, ELB_MARK_ANNOTATION, VPC_ID_ANNOTATION};
use pkg_types::config::LoadBalancerOpts;
use pkg_types::service::Service;

fn non_empty<'a>(service: &'a Service, key: &str) -> Option<&'a str> {
    service.annotation(key).filter(|v| !v.is_empty())
}

/// Existing provider load balancer the service asks to adopt.
pub fn elb_id(service: &Service) -> Option<&str> {
    non_empty(service, ELB_ID_ANNOTATION)
}

pub fn elb_mark(service: &Service) -> Option<&str> {
    non_empty(service, ELB_MARK_ANNOTATION)
}

/// VPC to provision in: the service annotation, else the provider default.
pub fn vpc_id<'a>(service: &'a Service, opts: &'a LoadBalancerOpts) -> &'a str {
    non_empty(service, VPC_ID_ANNOTATION).unwrap_or(opts.vpc_id.as_str())
}
