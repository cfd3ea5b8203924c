use std::sync::Arc;

use civitas_core::application::CivitasService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CivitasService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CivitasService) -> Self {
        Self { args, service }
    }
}
