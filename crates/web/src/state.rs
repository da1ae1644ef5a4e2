use std::sync::Arc;

use axum::extract::FromRef;
use storage::{Database, DisciplineCatalog};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: Arc<DisciplineCatalog>,
}

impl AppState {
    pub fn new(db: Database, catalog: DisciplineCatalog) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
        }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Arc<DisciplineCatalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}
