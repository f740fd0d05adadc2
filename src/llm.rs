//! Pasarela hacia el modelo conversacional.
//!
//! `ModelGateway` es la costura que usa el camino de respaldo; `LlmManager`
//! la implementa sobre Rig (Groq por defecto, OpenAI opcional).

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use rig::completion::{Chat, Message};
use tracing::debug;

use crate::config::{AppConfig, LlmProvider};
use crate::models::{ChatMessage, ChatRole};

pub const TEMPERATURE: f64 = 0.2;
pub const MAX_TOKENS: u64 = 1024;

/// Petición de completado: modelo, mensajes en orden cronológico y parámetros de muestreo.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u64,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Servicio externo de completado de texto. Devuelve los candidatos
/// generados; la lista puede venir vacía.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>>;
}

/// Gestor del proveedor LLM configurado.
#[derive(Debug, Clone)]
pub struct LlmManager {
    pub provider: LlmProvider,
    api_key: Option<String>,
}

impl LlmManager {
    /// Construye el manager a partir de la configuración.
    pub fn from_config(cfg: &AppConfig) -> Self {
        Self {
            provider: cfg.llm_provider.clone(),
            api_key: cfg.llm_api_key.clone(),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow!("Falta {} en el entorno", self.provider.api_key_var()))
    }
}

/// Separa la petición en lo que Rig espera: preámbulo (mensajes de sistema),
/// historial y el último mensaje del usuario como prompt.
fn split_for_rig(messages: &[ChatMessage]) -> Result<(String, Vec<Message>, Message)> {
    let (last, earlier) = messages
        .split_last()
        .ok_or_else(|| anyhow!("La petición al modelo no tiene mensajes"))?;
    if last.role != ChatRole::User {
        return Err(anyhow!("El último mensaje de la petición debe ser del usuario"));
    }

    let mut preamble = Vec::new();
    let mut history = Vec::new();
    for m in earlier {
        match m.role {
            ChatRole::System => preamble.push(m.content.as_str()),
            ChatRole::User => history.push(Message::user(m.content.clone())),
            ChatRole::Assistant => history.push(Message::assistant(m.content.clone())),
        }
    }

    Ok((preamble.join("\n\n"), history, Message::user(last.content.clone())))
}

fn into_candidates(text: String) -> Vec<String> {
    if text.trim().is_empty() {
        Vec::new()
    } else {
        vec![text]
    }
}

#[async_trait]
impl ModelGateway for LlmManager {
    async fn complete(&self, request: CompletionRequest) -> Result<Vec<String>> {
        // Trait para client.agent(...)
        use rig::client::CompletionClient as _;

        let (preamble, history, prompt) = split_for_rig(&request.messages)?;
        let api_key = self.api_key()?;
        debug!(
            provider = ?self.provider,
            model = %request.model,
            history = history.len(),
            "Enviando petición al modelo"
        );

        let answer = match self.provider {
            LlmProvider::Groq => {
                use rig::providers::groq;
                let agent = groq::Client::new(api_key)
                    .agent(&request.model)
                    .preamble(&preamble)
                    .temperature(request.temperature)
                    .max_tokens(request.max_tokens)
                    .build();
                agent.chat(prompt, history).await?
            }
            LlmProvider::OpenAI => {
                use rig::providers::openai;
                let agent = openai::Client::new(api_key)
                    .agent(&request.model)
                    .preamble(&preamble)
                    .temperature(request.temperature)
                    .max_tokens(request.max_tokens)
                    .build();
                agent.chat(prompt, history).await?
            }
        };

        Ok(into_candidates(answer))
    }
}
