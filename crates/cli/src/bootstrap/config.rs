use mesos_dns_domain::{CliOverrides, ClientConfig};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<ClientConfig> {
    let config = ClientConfig::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        servers = config.resolver.servers.len(),
        domain = %config.resolver.domain,
        cache = config.cache.enabled,
        retry = config.retry.enabled,
        "Configuration loaded"
    );

    Ok(config)
}
