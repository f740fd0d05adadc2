//! Repositorio de artículos de la LFT.
//!
//! Se construye una sola vez al arrancar a partir del texto del documento
//! (PDF o texto plano) y después sólo se consulta.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use tracing::{info, warn};

use crate::models::StatuteEntry;

/// Consulta de artículos por identificador ("Artículo N").
pub trait StatuteRepository: Send + Sync {
    fn lookup(&self, id: &str) -> Option<String>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clave con la que se guarda un artículo.
pub fn article_key(number: &str) -> String {
    format!("Artículo {number}")
}

/// Índice inmutable en memoria de los artículos.
#[derive(Debug, Default, Clone)]
pub struct ArticleIndex {
    articles: HashMap<String, String>,
}

impl ArticleIndex {
    pub fn from_entries(entries: impl IntoIterator<Item = StatuteEntry>) -> Self {
        Self {
            articles: entries.into_iter().map(|e| (e.id, e.body)).collect(),
        }
    }

    /// Segmenta el texto de la ley y lo indexa.
    pub fn from_text(text: &str) -> Self {
        Self::from_entries(segment_articles(text))
    }

    /// Carga la LFT desde disco. Los `.pdf` se extraen con `pdf-extract`;
    /// cualquier otra extensión se lee como texto UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or("")
            .to_lowercase();

        let text = if extension == "pdf" {
            pdf_extract::extract_text(path).map_err(|e| {
                anyhow!("No se pudo extraer texto del PDF {}: {}", path.display(), e)
            })?
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("No se pudo leer {}", path.display()))?
        };

        let index = Self::from_text(&text);
        if index.articles.is_empty() {
            warn!("No se encontraron artículos en {}", path.display());
        } else {
            info!("Cargados {} artículos de {}", index.articles.len(), path.display());
        }
        Ok(index)
    }
}

impl StatuteRepository for ArticleIndex {
    fn lookup(&self, id: &str) -> Option<String> {
        self.articles.get(id).cloned()
    }

    fn len(&self) -> usize {
        self.articles.len()
    }
}

static ARTICLE_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*Artículo\s+\d+").expect("Invalid regex: article heading")
});

/// Divide el texto en artículos: cada segmento empieza en una línea que
/// comienza con "Artículo <número>" y termina donde empieza el siguiente.
///
/// La clave es posicional (`Artículo {i+1}`), no el número impreso; si el
/// documento omite o fusiona un encabezado, las claves se desplazan.
pub fn segment_articles(text: &str) -> Vec<StatuteEntry> {
    let starts: Vec<usize> = ARTICLE_HEADING.find_iter(text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            StatuteEntry {
                id: article_key(&(i + 1).to_string()),
                body: text[start..end].trim().to_string(),
            }
        })
        .collect()
}
