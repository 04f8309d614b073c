use db::PrototypeRepository;
use sqlx::SqlitePool;
use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub prototype_repository: PrototypeRepository,
    pub app_dir: Option<PathBuf>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            prototype_repository: PrototypeRepository::new(pool),
            app_dir: None,
        }
    }

    /// Serve a built frontend from `app_dir` for every non-API path.
    pub fn with_app_dir(mut self, app_dir: PathBuf) -> Self {
        self.app_dir = Some(app_dir);
        self
    }
}
