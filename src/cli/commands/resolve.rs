//! Resolve command - operation key to method and URL

use std::path::Path;
use std::process::ExitCode;

use paps_serve::config::ClientConfig;
use paps_serve::output::{OutputMode, ResolveResult};
use paps_serve::serve::Registry;

use super::borrow_params;

/// Resolve an operation and render its path against the configured base URL
pub fn resolve(
    key: &str,
    params: &[(String, String)],
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<ExitCode> {
    let config = ClientConfig::load(config)?;
    let registry = Registry::standard()?;

    let endpoint = registry.resolve(key)?;
    let path = endpoint.render_path(&borrow_params(params))?;

    ResolveResult::new(endpoint, path, &config).render(mode);
    Ok(ExitCode::SUCCESS)
}
