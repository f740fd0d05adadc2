//! Carga y gestión de configuración de la aplicación (servidor, LFT y LLM).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    Groq,
    OpenAI,
}

impl LlmProvider {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(Self::Groq),
            "openai" => Ok(Self::OpenAI),
            other => Err(anyhow!("Proveedor LLM no soportado: {other}")),
        }
    }

    /// Variable de entorno que contiene la API key del proveedor.
    pub fn api_key_var(&self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAI => "OPENAI_API_KEY",
        }
    }
}

/// Límite de espera de la llamada al modelo si no se configura otro.
pub const DEFAULT_LLM_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuración completa de la aplicación.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_addr: String,
    pub lft_path: PathBuf,
    pub static_dir: PathBuf,

    pub llm_provider: LlmProvider,
    pub llm_chat_model: String,
    pub llm_api_key: Option<String>,
    pub llm_timeout: Duration,
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno (usando .env si existe).
    ///
    /// La API key del LLM es opcional: sin ella el servidor arranca y las
    /// respuestas deterministas funcionan; sólo falla la llamada al modelo.
    pub fn from_env() -> Result<Self> {
        let server_addr =
            env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8000".to_string());
        let lft_path = env::var("LFT_PATH").unwrap_or_else(|_| "LFT.pdf".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let llm_provider_str = env::var("LLM_PROVIDER").unwrap_or_else(|_| "groq".to_string());
        let llm_provider = LlmProvider::from_str(&llm_provider_str)?;

        let llm_chat_model = env::var("LLM_CHAT_MODEL")
            .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string());
        let llm_api_key = env::var(llm_provider.api_key_var())
            .ok()
            .filter(|k| !k.trim().is_empty());

        let llm_timeout = match env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => DEFAULT_LLM_TIMEOUT,
        };

        Ok(Self {
            server_addr,
            lft_path: PathBuf::from(lft_path),
            static_dir: PathBuf::from(static_dir),
            llm_provider,
            llm_chat_model,
            llm_api_key,
            llm_timeout,
        })
    }
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow!("LLM_TIMEOUT_SECS no es un número válido: {raw}"))?;
    Ok(Duration::from_secs(secs))
}
