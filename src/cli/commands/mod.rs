//! Command implementations

mod resolve;
mod routes;
mod validate;

pub use resolve::resolve;
pub use routes::routes;
pub use validate::validate;

/// Borrow owned `name=value` pairs the way the registry expects them
fn borrow_params(params: &[(String, String)]) -> Vec<(&str, &str)> {
    params.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect()
}
