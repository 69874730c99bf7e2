//! Output formatting for human and JSON modes
//!
//! Command results are plain serializable structs rendered either as
//! colored text or as pretty-printed JSON.

use colored::Colorize;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::serve::{Endpoint, ValidationError};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One row of the route table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    /// Operation key
    pub key: String,
    /// HTTP method
    pub method: String,
    /// Path template
    pub path: String,
    /// Whether a bearer credential is required
    pub auth: bool,
    /// Whether the payload is validated client-side
    pub validated: bool,
    /// Multipart field, if the operation uploads files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<String>,
}

impl From<&Endpoint> for RouteInfo {
    fn from(endpoint: &Endpoint) -> Self {
        Self {
            key: endpoint.key.to_string(),
            method: endpoint.method.to_string(),
            path: endpoint.path.to_string(),
            auth: endpoint.auth,
            validated: endpoint.validator.is_some(),
            upload: endpoint.upload.map(|upload| {
                if upload.multiple {
                    format!("{}[]", upload.field)
                } else {
                    upload.field.to_string()
                }
            }),
        }
    }
}

/// Result of `routes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteList {
    /// Matching operations, ordered by key
    pub routes: Vec<RouteInfo>,
}

/// Result of `resolve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveResult {
    /// Operation key
    pub key: String,
    /// HTTP method
    pub method: String,
    /// Rendered path
    pub path: String,
    /// Absolute URL against the configured base
    pub url: String,
    /// Whether a bearer credential is required
    pub auth: bool,
    /// Request timeout from the client config
    pub timeout_secs: u64,
}

impl ResolveResult {
    /// Build from an endpoint, its rendered path and the client config
    #[must_use]
    pub fn new(endpoint: &Endpoint, path: String, config: &ClientConfig) -> Self {
        Self {
            key: endpoint.key.to_string(),
            method: endpoint.method.to_string(),
            url: config.url_for(&path),
            path,
            auth: endpoint.auth,
            timeout_secs: config.timeout_secs,
        }
    }
}

/// Result of `validate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateResult {
    /// Operation key
    pub key: String,
    /// Whether the payload passed
    pub valid: bool,
    /// The first violated rule
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl RouteList {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.routes.is_empty() {
            println!("No operations match.");
            return;
        }

        let width = self.routes.iter().map(|r| r.key.len()).max().unwrap_or(0);
        for route in &self.routes {
            let lock = if route.auth { " " } else { "*" };
            print!("{lock} {:<width$}  {:<6} {}", route.key, route.method, route.path);
            if let Some(upload) = &route.upload {
                print!("  {}", format!("[{upload}]").dimmed());
            }
            println!();
        }
        println!("\n{} operation(s), * = public", self.routes.len());
    }
}

impl ResolveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} {}", self.method.bold(), self.url);
                println!("{}", format!("timeout {}s", self.timeout_secs).dimmed());
                if !self.auth {
                    println!("{}", "no credentials required".dimmed());
                }
            },
            OutputMode::Json => render_json(self),
        }
    }
}

impl ValidateResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => match &self.error {
                None => println!("{} {}: payload is valid", "✓".green(), self.key),
                Some(err) => {
                    println!("{} {}: {}", "✗".red(), self.key, err);
                    println!("  {} ({})", err.kind, err.status_code());
                },
            },
            OutputMode::Json => render_json(self),
        }
    }
}

fn render_json(value: &impl Serialize) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
