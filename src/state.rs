use std::sync::Arc;

use crate::repository::DevEventRepository;

#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn DevEventRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn DevEventRepository>) -> Self {
        Self { repository }
    }
}
