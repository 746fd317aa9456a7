use pkg_types::config::{ElbAlgorithm, LoadBalancerOpts};
use pkg_types::node::{
    ConditionStatus, Node, NodeAddress, NodeAddressType, NodeCondition, NodeConditionType,
    NodeSpec, NodeStatus,
};
use pkg_types::service::{Protocol, Service, ServicePort, ServiceSpec, ServiceType};
use std::collections::HashMap;

pub fn make_service(name: &str, uid: &str) -> Service {
    Service {
        uid: uid.to_string(),
        name: name.to_string(),
        namespace: "default".to_string(),
        annotations: HashMap::new(),
        spec: ServiceSpec {
            selector: HashMap::new(),
            ports: vec![make_port("http", 80)],
            service_type: ServiceType::ClusterIP,
        },
    }
}

pub fn make_lb_service(name: &str, uid: &str) -> Service {
    let mut svc = make_service(name, uid);
    svc.spec.service_type = ServiceType::LoadBalancer;
    svc
}

pub fn make_port(name: &str, port: u16) -> ServicePort {
    ServicePort {
        name: name.to_string(),
        protocol: Protocol::TCP,
        port,
        target_port: port,
        node_port: Some(30000 + port % 2000),
    }
}

pub fn make_condition(condition_type: NodeConditionType, status: ConditionStatus) -> NodeCondition {
    NodeCondition {
        condition_type,
        status,
        last_heartbeat_time: Some(chrono::Utc::now()),
        last_transition_time: None,
        reason: None,
        message: None,
    }
}

pub fn make_node(name: &str, ready: ConditionStatus) -> Node {
    Node {
        name: name.to_string(),
        labels: HashMap::new(),
        spec: NodeSpec::default(),
        status: Some(NodeStatus {
            conditions: vec![make_condition(NodeConditionType::Ready, ready)],
            addresses: vec![
                NodeAddress {
                    address_type: NodeAddressType::InternalIP,
                    address: "10.0.0.1".to_string(),
                },
                NodeAddress {
                    address_type: NodeAddressType::ExternalIP,
                    address: "203.0.113.1".to_string(),
                },
            ],
        }),
    }
}

pub fn make_opts() -> LoadBalancerOpts {
    LoadBalancerOpts {
        region: "ap-southeast-1".to_string(),
        tenant_id: "tenant-1".to_string(),
        vpc_id: "vpc-default".to_string(),
        subnet_id: "subnet-default".to_string(),
        elb_algorithm: ElbAlgorithm::LeastConnections,
        elb_endpoint: "https://elb.example.com".to_string(),
        alb_endpoint: "https://alb.example.com".to_string(),
        nat_endpoint: "https://nat.example.com".to_string(),
        ..Default::default()
    }
}
