//! Clasificación de intención por reglas léxicas.
//!
//! Una lista ordenada de reglas predicado → tema; gana la primera que
//! coincide. El orden es la política de precedencia: por ejemplo, "7 años"
//! se evalúa antes que la palabra "vacaciones" para capturar la respuesta
//! numérica dentro del diálogo de vacaciones.
//!
//! Las palabras clave se escriben con y sin acentos a propósito; nunca se
//! eliminan diacríticos del mensaje.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tema reconocido en el mensaje del usuario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Vacation,
    Resignation,
    Severance,
    MinimumWage,
    Statute,
    GeneralFact,
    Author,
    Greeting,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Vacation => "vacation",
            Topic::Resignation => "resignation",
            Topic::Severance => "severance",
            Topic::MinimumWage => "minimum_wage",
            Topic::Statute => "statute",
            Topic::GeneralFact => "general_fact",
            Topic::Author => "author",
            Topic::Greeting => "greeting",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Resultado de una regla. `Defer` corta la evaluación y manda el mensaje al modelo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Topic(Topic),
    Defer,
}

/// Una regla de la lista: nombre legible, predicado sobre el mensaje normalizado y resultado.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub outcome: Outcome,
}

pub(crate) static YEARS_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*años?\s*$").expect("Invalid regex: years-only reply")
});
pub(crate) static MONTHS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*mes").expect("Invalid regex: months"));
pub(crate) static ARTICLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"art[ií]culo\s+(\d+)").expect("Invalid regex: article number"));

const RESIGNATION_TRIGGERS: &[&str] = &[
    "renuncio",
    "quiero renunciar",
    "cómo renuncio",
    "como renuncio",
];

const MINIMUM_WAGE_TRIGGERS: &[&str] = &["salario mínimo", "salario minimo", "salario "];

const DAYS_IN_YEAR_TRIGGERS: &[&str] = &[
    "cuántos días tiene el año",
    "cuantos dias tiene el año",
    "cuantos días tiene el año",
    "cuántos dias tiene el año",
    "cuantos dias tiene el ano",
];

const AUTHOR_TRIGGERS: &[&str] = &[
    "quién te creó",
    "quien te creo",
    "quien te hizo",
    "quien te diseñó",
    "quien te programó",
    "quien es tu autor",
    "quien es tu creador",
    "desarrollado por",
    "diseñado por",
    "ingeniero y abogado",
    "origen",
    "origen del asistente",
];

const GREETINGS: &[&str] = &["hola", "buenas", "buenos días", "buen dia", "hey"];

fn contains_any(msg: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| msg.contains(n))
}

/// Reglas en orden de precedencia.
pub static RULES: &[Rule] = &[
    Rule {
        name: "respuesta_solo_años",
        matches: |m| YEARS_ONLY.is_match(m),
        outcome: Outcome::Topic(Topic::Vacation),
    },
    Rule {
        name: "liquidacion_y_finiquito",
        matches: |m| m.contains("liquidacion") && m.contains("finiquito"),
        outcome: Outcome::Defer,
    },
    Rule {
        name: "vacaciones",
        matches: |m| m.contains("vacaciones"),
        outcome: Outcome::Topic(Topic::Vacation),
    },
    Rule {
        name: "renuncia",
        matches: |m| contains_any(m, RESIGNATION_TRIGGERS),
        outcome: Outcome::Topic(Topic::Resignation),
    },
    Rule {
        name: "finiquito",
        matches: |m| m.contains("finiquito") || MONTHS.is_match(m),
        outcome: Outcome::Topic(Topic::Severance),
    },
    Rule {
        name: "salario",
        matches: |m| contains_any(m, MINIMUM_WAGE_TRIGGERS),
        outcome: Outcome::Topic(Topic::MinimumWage),
    },
    Rule {
        name: "dias_del_año",
        matches: |m| contains_any(m, DAYS_IN_YEAR_TRIGGERS),
        outcome: Outcome::Topic(Topic::GeneralFact),
    },
    Rule {
        name: "articulo",
        matches: |m| ARTICLE.is_match(m),
        outcome: Outcome::Topic(Topic::Statute),
    },
    Rule {
        name: "autor",
        matches: |m| contains_any(m, AUTHOR_TRIGGERS),
        outcome: Outcome::Topic(Topic::Author),
    },
    Rule {
        name: "saludo",
        matches: |m| GREETINGS.contains(&m),
        outcome: Outcome::Topic(Topic::Greeting),
    },
];

/// Normalización compartida por el clasificador y los manejadores.
pub(crate) fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Primera regla que coincide con el mensaje, si alguna.
pub fn matching_rule(message: &str) -> Option<&'static Rule> {
    let msg = normalize(message);
    RULES.iter().find(|rule| (rule.matches)(&msg))
}

/// Clasifica el mensaje. `None` significa "sin regla": el mensaje va al modelo.
pub fn classify(message: &str) -> Option<Topic> {
    let rule = matching_rule(message);
    let topic = match rule.map(|r| r.outcome) {
        Some(Outcome::Topic(topic)) => Some(topic),
        Some(Outcome::Defer) | None => None,
    };
    debug!(
        rule = rule.map(|r| r.name).unwrap_or("ninguna"),
        topic = topic.map(|t| t.label()).unwrap_or("none"),
        "Clasificando mensaje: {message:?}"
    );
    topic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_reply_wins_over_everything() {
        assert_eq!(classify("7 años"), Some(Topic::Vacation));
        assert_eq!(classify("  1 año "), Some(Topic::Vacation));
        assert_eq!(classify("12AÑOS"), Some(Topic::Vacation));
        assert_eq!(matching_rule("3 años").unwrap().name, "respuesta_solo_años");
    }

    #[test]
    fn years_inside_a_sentence_is_not_the_short_reply() {
        assert_eq!(classify("tengo 7 años trabajando"), None);
    }

    #[test]
    fn liquidacion_with_finiquito_defers_to_model() {
        assert_eq!(classify("liquidacion o finiquito?"), None);
        assert_eq!(
            classify("vacaciones, liquidacion y finiquito tras 6 meses"),
            None
        );
        assert_eq!(matching_rule("liquidacion finiquito").unwrap().outcome, Outcome::Defer);
    }

    #[test]
    fn accented_liquidación_is_not_the_ambiguity_rule() {
        assert_eq!(classify("liquidación o finiquito"), Some(Topic::Severance));
    }

    #[test]
    fn vacation_keyword() {
        assert_eq!(classify("¿Cuántos días de vacaciones me tocan?"), Some(Topic::Vacation));
        assert_eq!(classify("VACACIONES"), Some(Topic::Vacation));
    }

    #[test]
    fn resignation_triggers() {
        assert_eq!(classify("Quiero renunciar a mi trabajo"), Some(Topic::Resignation));
        assert_eq!(classify("cómo renuncio"), Some(Topic::Resignation));
        assert_eq!(classify("como renuncio"), Some(Topic::Resignation));
        assert_eq!(classify("ya renuncio"), Some(Topic::Resignation));
    }

    #[test]
    fn vacation_before_resignation() {
        assert_eq!(classify("renuncio, ¿me pagan vacaciones?"), Some(Topic::Vacation));
    }

    #[test]
    fn severance_by_keyword_or_months() {
        assert_eq!(classify("calcula mi finiquito"), Some(Topic::Severance));
        assert_eq!(classify("trabajé 8 meses"), Some(Topic::Severance));
        assert_eq!(classify("llevo 3mes"), Some(Topic::Severance));
    }

    #[test]
    fn minimum_wage_variants() {
        assert_eq!(classify("salario mínimo 2025"), Some(Topic::MinimumWage));
        assert_eq!(classify("salario minimo"), Some(Topic::MinimumWage));
        assert_eq!(classify("mi salario es bajo"), Some(Topic::MinimumWage));
        assert_eq!(classify("salario"), None);
    }

    #[test]
    fn days_in_year_variants() {
        assert_eq!(classify("¿Cuántos días tiene el año?"), Some(Topic::GeneralFact));
        assert_eq!(classify("cuantos dias tiene el año"), Some(Topic::GeneralFact));
        assert_eq!(classify("cuantos dias tiene el ano"), Some(Topic::GeneralFact));
    }

    #[test]
    fn statute_with_and_without_accent() {
        assert_eq!(classify("Artículo 76"), Some(Topic::Statute));
        assert_eq!(classify("que dice el articulo 123"), Some(Topic::Statute));
        assert_eq!(classify("el artículo de la ley"), None);
    }

    #[test]
    fn author_triggers() {
        assert_eq!(classify("¿Quién te creó?"), Some(Topic::Author));
        assert_eq!(classify("quien te programó"), Some(Topic::Author));
        assert_eq!(classify("cuál es tu origen"), Some(Topic::Author));
    }

    #[test]
    fn greetings_must_be_the_whole_message() {
        assert_eq!(classify("Hola"), Some(Topic::Greeting));
        assert_eq!(classify("  buenos días "), Some(Topic::Greeting));
        assert_eq!(classify("hey"), Some(Topic::Greeting));
        assert_eq!(classify("hola, tengo una duda"), None);
    }

    #[test]
    fn empty_and_unknown_messages_defer() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
        assert_eq!(classify("¿Me pueden despedir estando embarazada?"), None);
    }

    #[test]
    fn classification_is_pure() {
        let samples = ["7 años", "finiquito", "hola", "algo distinto", "artículo 5"];
        for s in samples {
            let first = classify(s);
            for _ in 0..5 {
                assert_eq!(classify(s), first);
            }
        }
    }

    #[test]
    fn rule_order_is_the_documented_precedence() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "respuesta_solo_años",
                "liquidacion_y_finiquito",
                "vacaciones",
                "renuncia",
                "finiquito",
                "salario",
                "dias_del_año",
                "articulo",
                "autor",
                "saludo",
            ]
        );
    }
}
