// src/api/mod.rs

pub mod assets;
pub mod health;
pub mod invocation;
pub mod query;

use std::sync::Arc;

use tera::Tera;

use crate::config::Config;
use crate::integrations::LedgerGateway;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<dyn LedgerGateway>,
    pub templates: Arc<Tera>,
}
