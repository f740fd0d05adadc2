//! SofIA: asistente legal de derecho laboral mexicano (LFT).
//!
//! Clasificador de intención por reglas léxicas, respuestas deterministas
//! (vacaciones, finiquito, salario mínimo, artículos) y respaldo con LLM
//! usando el texto de la ley como contexto.

pub mod answers;
pub mod api;
pub mod app_state;
pub mod assistant;
pub mod classifier;
pub mod config;
pub mod error;
pub mod facts;
pub mod fallback;
pub mod llm;
pub mod models;
pub mod statutes;
