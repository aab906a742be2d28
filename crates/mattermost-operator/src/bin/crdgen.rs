use kube::core::CustomResourceExt;
use mattermost_operator::crds::mattermost::Mattermost;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let crd = Mattermost::crd();
    info!(name = ?crd.metadata.name, "generating CRD");
    print!("{}", serde_yaml::to_string(&crd)?);
    Ok(())
}
