//! Respuestas deterministas por tema. Ninguna falla: si falta un dato se
//! devuelve una pregunta aclaratoria o un mensaje de "no encontrado".

use std::sync::LazyLock;

use regex::Regex;

use crate::classifier::{normalize, ARTICLE, MONTHS, YEARS_ONLY};
use crate::facts::{search_reforms, vacation_days, REFORMS};
use crate::statutes::{article_key, StatuteRepository};

pub const GREETING: &str = "¡Hola! ¿En qué aspecto del derecho laboral necesitas ayuda hoy?";

pub const DAYS_IN_YEAR: &str = "Un año común tiene 365 días. Si es bisiesto, 366.";

pub const AUTHOR: &str = "🎓 Soy SofIA, tu asistente legal desarrollado por el Ingeniero y Abogado \
Zaihd Armando Gutiérrez Jiménez, basado en el modelo Llama 3.1 by Meta.";

pub const RESIGNATION: &str = "Para renunciar adecuadamente: entrega tu carta de renuncia por escrito, \
guarda copia y notifica a Recursos Humanos. \
No es obligatorio preaviso, pero se recomienda avisar con 30 días.";

pub const ASK_YEARS: &str = "⚠️ Por favor indica tus años de servicio, por ejemplo: '7 años'";

pub const ASK_MONTHS: &str = "⚠️ Indica cuántos meses llevas trabajando para calcular tu finiquito.";

pub const MINIMUM_WAGE_NOT_FOUND: &str = "No encontré datos sobre salario mínimo.";

static MONTHLY_WAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\d.,]+)\s*pesos\s+al\s+mes").expect("Invalid regex: monthly wage")
});

/// Dígitos sin ceros a la izquierda; "000" queda como "0".
fn strip_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Días de vacaciones según años de servicio ("7 años").
pub fn vacation(message: &str) -> String {
    let msg = normalize(message);
    let Some(caps) = YEARS_ONLY.captures(&msg) else {
        return ASK_YEARS.to_string();
    };
    let years = strip_leading_zeros(&caps[1]);
    // Sólo dígitos: si no cabe en u32 está por encima del último tramo.
    let count = years.parse::<u32>().unwrap_or(u32::MAX);

    match vacation_days(count) {
        Some(days) => format!(
            "📅 Según la reforma publicada en el DOF el 27-dic-2022 (Art.76 LFT), \
             con {years} años de servicio tienes derecho a {days} días de vacaciones."
        ),
        None => ASK_YEARS.to_string(),
    }
}

/// Desglose del finiquito aproximado.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeveranceBreakdown {
    pub months: u64,
    pub daily_wage: f64,
    pub aguinaldo_days: f64,
    pub aguinaldo_amount: f64,
    pub vacation_days: f64,
    pub vacation_amount: f64,
    pub vacation_premium: f64,
    pub total: f64,
}

impl SeveranceBreakdown {
    /// Aproximación simplificada: 15 días de aguinaldo y 6 de vacaciones por
    /// año, proporcionales a los meses, más 25 % de prima vacacional.
    pub fn compute(months: u64, daily_wage: f64) -> Self {
        let m = months as f64;
        let aguinaldo_days = 15.0 * m / 12.0;
        let aguinaldo_amount = aguinaldo_days * daily_wage;
        let vacation_days = 6.0 * m / 12.0;
        let vacation_amount = vacation_days * daily_wage;
        let vacation_premium = vacation_amount * 0.25;
        Self {
            months,
            daily_wage,
            aguinaldo_days,
            aguinaldo_amount,
            vacation_days,
            vacation_amount,
            vacation_premium,
            total: aguinaldo_amount + vacation_amount + vacation_premium,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "🧾 Finiquito tras {} meses con salario diario ${:.2}:\n\
             • Aguinaldo proporcional ({:.2} días): ${:.2}\n\
             • Vacaciones proporcionales ({:.2} días): ${:.2}\n\
             • Prima vacacional: ${:.2}\n\
             Total aproximado: ${:.2}",
            self.months,
            self.daily_wage,
            self.aguinaldo_days,
            self.aguinaldo_amount,
            self.vacation_days,
            self.vacation_amount,
            self.vacation_premium,
            self.total
        )
    }
}

/// Salario diario: "<monto> pesos al mes" / 30, o el mínimo vigente.
fn daily_wage(msg: &str) -> f64 {
    MONTHLY_WAGE
        .captures(msg)
        .and_then(|c| c[1].replace(',', "").parse::<f64>().ok())
        .map(|monthly| monthly / 30.0)
        .unwrap_or(REFORMS.salario_minimo.resto_pais_daily)
}

/// Finiquito a partir de "<n> meses" y, opcionalmente, "<monto> pesos al mes".
pub fn severance(message: &str) -> String {
    let msg = normalize(message);
    let Some(caps) = MONTHS.captures(&msg) else {
        return ASK_MONTHS.to_string();
    };
    let months = caps[1].parse::<u64>().unwrap_or(u64::MAX);
    SeveranceBreakdown::compute(months, daily_wage(&msg)).render()
}

pub fn minimum_wage(message: &str) -> String {
    search_reforms(message).unwrap_or_else(|| MINIMUM_WAGE_NOT_FOUND.to_string())
}

/// Número de artículo mencionado ("artículo 76"), si lo hay, tal como se
/// escribió salvo los ceros a la izquierda.
pub fn article_number(message: &str) -> Option<String> {
    ARTICLE
        .captures(&normalize(message))
        .map(|c| strip_leading_zeros(&c[1]).to_string())
}

/// Texto del artículo mencionado en el mensaje.
pub fn statute(message: &str, statutes: &dyn StatuteRepository) -> String {
    let Some(number) = article_number(message) else {
        return "⚠️ Indica el número de artículo, por ejemplo: 'artículo 76'".to_string();
    };
    let key = article_key(&number);
    match statutes.lookup(&key) {
        Some(body) => format!("📘 {key}:\n\n{body}"),
        None => format!("⚠️ No encontré el {key} en la LFT vigente."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatuteEntry;
    use crate::statutes::ArticleIndex;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn vacation_reply_cites_reform_and_days() {
        let reply = vacation("7 años");
        assert!(reply.contains("Art.76 LFT"));
        assert!(reply.contains("con 7 años de servicio tienes derecho a 22 días"));
        assert!(vacation("1 año").contains("12 días"));
        assert!(vacation("40 años").contains("32 días"));
    }

    #[test]
    fn vacation_without_bare_years_asks_again() {
        assert_eq!(vacation("¿cuántas vacaciones me tocan?"), ASK_YEARS);
        assert_eq!(vacation("0 años"), ASK_YEARS);
    }

    #[test]
    fn huge_year_count_caps_at_top_bracket() {
        let reply = vacation("5000000000 años");
        assert!(reply.contains("con 5000000000 años de servicio tienes derecho a 32 días"));
        assert!(vacation("99999999999999999999999 años").contains("32 días"));
        assert!(vacation("007 años").contains("con 7 años de servicio tienes derecho a 22 días"));
    }

    #[test]
    fn severance_reference_figures() {
        let b = SeveranceBreakdown::compute(12, 278.80);
        assert!(close(b.aguinaldo_days, 15.0));
        assert!(close(b.aguinaldo_amount, 4182.00));
        assert!(close(b.vacation_days, 6.0));
        assert!(close(b.vacation_amount, 1672.80));
        assert!(close(b.vacation_premium, 418.20));
        assert!(close(b.total, 6273.00));
    }

    #[test]
    fn severance_is_linear_in_months() {
        for months in [1, 5, 12, 37] {
            let single = SeveranceBreakdown::compute(months, 312.5);
            let double = SeveranceBreakdown::compute(months * 2, 312.5);
            assert!(close(double.aguinaldo_amount, single.aguinaldo_amount * 2.0));
            assert!(close(double.vacation_amount, single.vacation_amount * 2.0));
        }
    }

    #[test]
    fn severance_defaults_to_minimum_wage() {
        let reply = severance("trabajé 12 meses");
        assert!(reply.contains("salario diario $278.80"));
        assert!(reply.contains("Total aproximado: $6273.00"));
    }

    #[test]
    fn severance_uses_monthly_wage_with_thousands_separator() {
        let reply = severance("Finiquito de 6 meses ganando 15,000 pesos al mes");
        assert!(reply.contains("salario diario $500.00"));
        // 7.5 días de aguinaldo * 500
        assert!(reply.contains("(7.50 días): $3750.00"));
    }

    #[test]
    fn unparsable_wage_falls_back_to_minimum() {
        let reply = severance("3 meses con . pesos al mes");
        assert!(reply.contains("$278.80"));
    }

    #[test]
    fn huge_month_count_still_gets_a_breakdown() {
        let reply = severance("5000000000 meses");
        assert!(reply.starts_with("🧾 Finiquito tras 5000000000 meses"));
        assert!(severance("99999999999999999999999 meses").starts_with("🧾 Finiquito tras"));
    }

    #[test]
    fn severance_without_months_asks() {
        assert_eq!(severance("quiero mi finiquito"), ASK_MONTHS);
    }

    #[test]
    fn minimum_wage_reply_or_not_found() {
        assert!(minimum_wage("salario mínimo").contains("$278.80"));
        assert_eq!(minimum_wage("mi salario es bajo"), MINIMUM_WAGE_NOT_FOUND);
    }

    #[test]
    fn statute_found_and_missing() {
        let index = ArticleIndex::from_entries([StatuteEntry {
            id: "Artículo 76".to_string(),
            body: "Las personas trabajadoras que tengan más de un año...".to_string(),
        }]);
        let found = statute("¿Qué dice el artículo 76?", &index);
        assert!(found.starts_with("📘 Artículo 76:\n\n"));
        assert_eq!(
            statute("articulo 900", &index),
            "⚠️ No encontré el Artículo 900 en la LFT vigente."
        );
    }

    #[test]
    fn article_number_tolerates_accent_and_case() {
        assert_eq!(article_number("ARTÍCULO 5").as_deref(), Some("5"));
        assert_eq!(article_number("articulo   042").as_deref(), Some("42"));
        assert_eq!(article_number("artículo 000").as_deref(), Some("0"));
        assert_eq!(article_number("artículos"), None);
    }

    #[test]
    fn very_long_article_number_is_reported_missing() {
        let index = ArticleIndex::default();
        assert_eq!(
            statute("artículo 99999999999", &index),
            "⚠️ No encontré el Artículo 99999999999 en la LFT vigente."
        );
        assert_eq!(
            statute("articulo 00000000000000000000000076", &index),
            "⚠️ No encontré el Artículo 76 en la LFT vigente."
        );
    }
}
