//! Routes command - list registered operations

use std::process::ExitCode;

use paps_serve::output::{OutputMode, RouteInfo, RouteList};
use paps_serve::serve::Registry;

/// List operations, optionally filtered by resource or public access
pub fn routes(resource: Option<&str>, public_only: bool, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let registry = Registry::standard()?;

    let routes = registry
        .iter()
        .filter(|endpoint| resource.is_none_or(|r| endpoint.resource() == r))
        .filter(|endpoint| !public_only || !endpoint.auth)
        .map(RouteInfo::from)
        .collect();

    RouteList { routes }.render(mode);
    Ok(ExitCode::SUCCESS)
}
