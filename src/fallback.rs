//! Camino de respaldo cuando ninguna regla clasifica el mensaje.
//!
//! Flujo:
//!   1. Construcción del contexto (artículo citado → reformas → Art. 76).
//!   2. Prompt: instrucción de sistema con el contexto + historial + mensaje.
//!   3. Llamada al modelo acotada por tiempo.
//!   4. Filtro de respuestas desactualizadas.

use std::time::Duration;

use tracing::{debug, error, warn};

use crate::answers::article_number;
use crate::error::ChatError;
use crate::facts::search_reforms;
use crate::llm::{CompletionRequest, ModelGateway};
use crate::models::ChatMessage;
use crate::statutes::{article_key, StatuteRepository};

/// Artículo usado como contexto cuando no hay nada más específico (vacaciones).
pub const DEFAULT_ARTICLE: &str = "Artículo 76";

pub const NO_RESPONSE: &str = "⚠️ Sin respuesta del modelo. Intenta de nuevo.";

pub const STALE_RESPONSE: &str = "⚠️ Respuesta no vigente. Consulta un artículo específico.";

/// Frases que delatan que el modelo cita legislación o cifras ya superadas.
const STALENESS_MARKERS: &[&str] = &[
    "no existe una ley llamada",
    "según datos de 2022",
    "actualmente el salario mínimo es de $140.70",
    "mi entrenamiento se basa en",
    "no tengo información actualizada",
];

/// Contexto legal para el modelo; gana la primera fuente no vacía.
pub fn build_context(message: &str, statutes: &dyn StatuteRepository) -> String {
    let cited = article_number(message)
        .and_then(|n| statutes.lookup(&article_key(&n)))
        .filter(|text| !text.is_empty());
    if let Some(text) = cited {
        return text;
    }

    if let Some(fact) = search_reforms(message).filter(|f| !f.is_empty()) {
        return fact;
    }

    statutes.lookup(DEFAULT_ARTICLE).unwrap_or_default()
}

/// Mensajes para el modelo: sistema, historial en orden y el mensaje nuevo.
pub fn build_prompt(context: &str, history: &[ChatMessage], message: &str) -> Vec<ChatMessage> {
    let mut prompt = Vec::with_capacity(history.len() + 2);
    prompt.push(ChatMessage::system(format!(
        "Eres un asistente legal de la LFT. Usa SOLO este contexto:\n\n\
         {context}\n\nHabla claro, como a alguien con primaria."
    )));
    prompt.extend(history.iter().cloned());
    prompt.push(ChatMessage::user(message));
    prompt
}

pub fn is_stale(answer: &str) -> bool {
    let low = answer.to_lowercase();
    STALENESS_MARKERS.iter().any(|marker| low.contains(marker))
}

/// Consulta al modelo con contexto recuperado y filtra la respuesta.
pub async fn answer_with_model(
    gateway: &dyn ModelGateway,
    statutes: &dyn StatuteRepository,
    model: &str,
    timeout: Duration,
    message: &str,
    history: &[ChatMessage],
) -> Result<String, ChatError> {
    let context = build_context(message, statutes);
    debug!(context_len = context.len(), "Contexto para el modelo construido");

    let request = CompletionRequest::new(model, build_prompt(&context, history, message));

    let candidates = match tokio::time::timeout(timeout, gateway.complete(request)).await {
        Ok(Ok(candidates)) => candidates,
        Ok(Err(e)) => {
            error!("Error llamando al modelo: {e:#}");
            return Err(ChatError::Internal(e));
        }
        Err(elapsed) => {
            warn!("El modelo no respondió en {:?}", timeout);
            return Err(elapsed.into());
        }
    };

    let Some(first) = candidates.into_iter().next() else {
        return Ok(NO_RESPONSE.to_string());
    };
    let answer = first.trim();

    if is_stale(answer) {
        warn!("Respuesta del modelo descartada por desactualizada");
        return Ok(STALE_RESPONSE.to_string());
    }
    Ok(answer.to_string())
}
