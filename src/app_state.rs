use crate::ops::LanguageOps;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ops: Arc<dyn LanguageOps>,
}

impl AppState {
    pub fn new(ops: Arc<dyn LanguageOps>) -> Self {
        Self { ops }
    }
}
