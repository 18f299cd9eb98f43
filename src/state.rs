use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::services::email::EmailProvider;

pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
    pub config: AppConfig,
    pub catalog: Catalog,
    pub email: Box<dyn EmailProvider>,
}
