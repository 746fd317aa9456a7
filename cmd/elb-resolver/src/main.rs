use anyhow::Context;
use clap::Parser;
use pkg_constants::paths::DEFAULT_CLOUD_CONFIG;
use pkg_loadbalancer::{LoadBalancerPlan, LoadBalancerResolver};
use pkg_types::config::{LoadBalancerClass, LoadBalancerOpts, load_config_file};
use pkg_types::snapshot::ClusterSnapshot;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "elb-resolver",
    about = "Resolve desired load balancers for a cluster snapshot"
)]
struct Cli {
    /// Path to provider config file (YAML or JSON)
    #[arg(long, short, default_value = DEFAULT_CLOUD_CONFIG)]
    config: String,

    /// JSON file with `services` and `nodes`
    #[arg(long, short, required_unless_present = "validate_only")]
    snapshot: Option<String>,

    /// Override the region from the config file
    #[arg(long)]
    region: Option<String>,

    /// Override the default VPC from the config file
    #[arg(long)]
    vpc_id: Option<String>,

    /// Override the default class: classic, application or nat
    #[arg(long, value_parser = parse_class)]
    default_class: Option<LoadBalancerClass>,

    /// Validate the provider config and exit
    #[arg(long)]
    validate_only: bool,
}

fn parse_class(s: &str) -> Result<LoadBalancerClass, String> {
    LoadBalancerClass::from_annotation(s)
        .ok_or_else(|| format!("unknown class '{}' (expected classic, application or nat)", s))
}

#[derive(Debug, Serialize)]
struct ServicePlan {
    service: String,
    uid: String,
    plan: Option<LoadBalancerPlan>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    // Load config file (returns defaults if file not found)
    let mut opts: LoadBalancerOpts = load_config_file(&cli.config)
        .with_context(|| format!("failed to load provider config {}", cli.config))?;
    info!("Config file: {}", cli.config);

    // Merge: CLI args > config file > defaults
    if let Some(region) = cli.region {
        opts.region = region;
    }
    if let Some(vpc_id) = cli.vpc_id {
        opts.vpc_id = vpc_id;
    }
    if let Some(class) = cli.default_class {
        opts.default_class = class;
    }
    opts.validate().context("invalid provider config")?;

    info!("  Region:        {}", opts.region);
    info!("  VPC:           {}", opts.vpc_id);
    info!("  Default class: {}", opts.default_class);
    info!("  Algorithm:     {}", opts.elb_algorithm);

    if cli.validate_only {
        info!("Provider config is valid");
        return Ok(());
    }

    let Some(snapshot_path) = cli.snapshot else {
        anyhow::bail!("--snapshot is required");
    };
    let content = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("failed to read snapshot {}", snapshot_path))?;
    let snapshot: ClusterSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse snapshot {}", snapshot_path))?;
    info!(
        "Snapshot: {} services, {} nodes",
        snapshot.services.len(),
        snapshot.nodes.len()
    );

    let plans = resolve_all(LoadBalancerResolver::new(Arc::new(opts)), snapshot).await?;
    println!("{}", serde_json::to_string_pretty(&plans)?);
    Ok(())
}

/// Resolve every service on its own task against one shared resolver.
/// Output keeps snapshot order.
async fn resolve_all(
    resolver: LoadBalancerResolver,
    snapshot: ClusterSnapshot,
) -> anyhow::Result<Vec<ServicePlan>> {
    let nodes = Arc::new(snapshot.nodes);
    let mut handles = Vec::with_capacity(snapshot.services.len());
    for service in snapshot.services {
        let resolver = resolver.clone();
        let nodes = Arc::clone(&nodes);
        handles.push(tokio::spawn(async move {
            let plan = resolver.plan(&service, &nodes)?;
            Ok::<_, anyhow::Error>(ServicePlan {
                service: format!("{}/{}", service.namespace, service.name),
                uid: service.uid,
                plan,
            })
        }));
    }

    let mut plans = Vec::with_capacity(handles.len());
    for handle in handles {
        let plan = handle.await??;
        if plan.plan.is_none() {
            info!("Service {} does not need a load balancer", plan.service);
        }
        plans.push(plan);
    }
    Ok(plans)
}
