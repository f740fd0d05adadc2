use std::sync::Arc;
use crate::assistant::LegalAssistant;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<LegalAssistant>,
}

impl AppState {
    pub fn new(assistant: LegalAssistant) -> Self {
        Self { assistant: Arc::new(assistant) }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Status {
    pub status: &'static str,
    pub articles: usize, // Artículos de la LFT cargados al arrancar
}
