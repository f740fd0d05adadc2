//! Enrutador de intención: clasifica el mensaje y lo envía a la respuesta
//! determinista que corresponda o al modelo con contexto de la LFT.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::answers;
use crate::classifier::{classify, Topic};
use crate::error::ChatError;
use crate::fallback;
use crate::llm::ModelGateway;
use crate::models::{ChatMessage, ChatReply};
use crate::statutes::StatuteRepository;

/// Asistente legal. Todas sus dependencias son de sólo lectura, así que se
/// comparte entre peticiones sin bloqueos.
#[derive(Clone)]
pub struct LegalAssistant {
    statutes: Arc<dyn StatuteRepository>,
    gateway: Arc<dyn ModelGateway>,
    model: String,
    timeout: Duration,
}

impl LegalAssistant {
    pub fn new(
        statutes: Arc<dyn StatuteRepository>,
        gateway: Arc<dyn ModelGateway>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            statutes,
            gateway,
            model: model.into(),
            timeout,
        }
    }

    pub fn statutes(&self) -> &dyn StatuteRepository {
        self.statutes.as_ref()
    }

    /// Respuesta determinista para un tema reconocido.
    pub fn answer_topic(&self, topic: Topic, message: &str) -> String {
        match topic {
            Topic::Greeting => answers::GREETING.to_string(),
            Topic::GeneralFact => answers::DAYS_IN_YEAR.to_string(),
            Topic::Author => answers::AUTHOR.to_string(),
            Topic::Resignation => answers::RESIGNATION.to_string(),
            Topic::Vacation => answers::vacation(message),
            Topic::Severance => answers::severance(message),
            Topic::MinimumWage => answers::minimum_wage(message),
            Topic::Statute => answers::statute(message, self.statutes.as_ref()),
        }
    }

    /// Un turno de chat. El historial del llamador no se modifica.
    pub async fn chat(&self, message: &str, history: &[ChatMessage]) -> Result<ChatReply, ChatError> {
        let msg = message.trim();
        let topic = classify(msg);
        debug!(topic = topic.map(|t| t.label()).unwrap_or("none"), "Tema detectado");

        let reply = match topic {
            Some(topic) => self.answer_topic(topic, msg),
            None => {
                fallback::answer_with_model(
                    self.gateway.as_ref(),
                    self.statutes.as_ref(),
                    &self.model,
                    self.timeout,
                    msg,
                    history,
                )
                .await?
            }
        };
        Ok(ChatReply::new(reply))
    }
}
