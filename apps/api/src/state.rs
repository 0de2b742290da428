use crate::config::Config;
use crate::db::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// `Storage` clones are cheap (the driver holds its connection pool behind an
/// `Arc`), so handlers receive the whole state by value.
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub config: Config,
}
