use thiserror::Error;

/// Fallos del camino de chat. Sólo la consulta al modelo puede fallar;
/// los manejadores deterministas siempre producen una respuesta.
#[derive(Debug, Error)]
pub enum ChatError {
    /// La llamada al modelo superó el tiempo límite. No se reintenta.
    #[error("⚠️ El modelo tardó demasiado.")]
    ModelTimeout,

    /// Cualquier otro fallo del proveedor LLM, con la causa para diagnóstico.
    #[error("⚠️ Error interno: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<tokio::time::error::Elapsed> for ChatError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        ChatError::ModelTimeout
    }
}
