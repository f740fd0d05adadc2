//! Tablas de hechos estáticas: reformas recientes, salario mínimo vigente y
//! tabla de vacaciones del Art. 76 LFT.

use std::sync::LazyLock;

/// Salario mínimo publicado para un periodo.
#[derive(Debug, Clone)]
pub struct MinimumWage {
    pub period: &'static str,
    /// Salario diario "resto del país", usado como valor por defecto en el finiquito.
    pub resto_pais_daily: f64,
    pub resto_pais: &'static str,
    pub zona_frontera: &'static str,
    pub exenciones: &'static str,
    pub ajuste_real: &'static str,
}

/// Reformas agrupadas por materia más el salario mínimo vigente.
#[derive(Debug, Clone)]
pub struct ReformTable {
    pub laboral: Vec<&'static str>,
    pub civil: Vec<&'static str>,
    pub salario_minimo: MinimumWage,
}

pub static REFORMS: LazyLock<ReformTable> = LazyLock::new(|| ReformTable {
    laboral: vec![
        "Outsourcing (2021): reforma que regula estrictamente la subcontratación laboral.",
        "Justicia laboral (2022): eliminación de Juntas, creación de Tribunales y Centros de Conciliación.",
        "Capacitismo (2022): prohibición de discriminación por discapacidad en empleo.",
        "Ley Silla (2024): obligación de proporcionar sillas o descansos a trabajadores de pie.",
        "Infonavit (2025): aportaciones obligatorias incluso en incapacidad (art. 29).",
        "Iniciativas LFT (2025): reformas a artículos 759 y 899-G para armonizar con Poder Judicial.",
    ],
    civil: vec![
        "Matrimonio igualitario (Jalisco y Veracruz, 2022).",
        "CNPCyF (2023–2025): código nacional para procedimientos civiles y familiares.",
        "Alimentos recíprocos (2025): obligación mutua entre padres e hijos mayores de 60.",
        "Digitalización notarial (2021): firma electrónica en testamentos y contratos.",
        "Ley de Amparo (2025): lenguaje incluyente, uso de UMA, limitación de efectos generales.",
        "Prohibición de matrimonio forzado en niñas indígenas (2024).",
    ],
    salario_minimo: MinimumWage {
        period: "enero 2025",
        resto_pais_daily: 278.80,
        resto_pais: "$278.80 diarios / $8,364 mensuales",
        zona_frontera: "$419.88 diarios / $12,596 mensuales",
        exenciones: "Exento de ISR e IMSS; el empleador cubre IMSS",
        ajuste_real: "Aumento neto ~7% ajustado por inflación (~4.75%)",
    },
});

/// Palabras clave de reformas laborales y el índice de su texto en `REFORMS.laboral`.
/// El orden importa: gana la primera clave contenida en el mensaje.
const REFORM_KEYWORDS: &[(&str, usize)] = &[
    ("ley silla", 3),
    ("outsourcing", 0),
    ("justicia laboral", 1),
    ("infonavit", 4),
];

/// Busca un hecho de salario mínimo o de reforma laboral en el mensaje.
pub fn search_reforms(message: &str) -> Option<String> {
    let m = message.to_lowercase();
    let table = &*REFORMS;

    if m.contains("salario mínimo") || m.contains("salario minimo") {
        let w = &table.salario_minimo;
        return Some(format!(
            "💵 Salario mínimo diario ({}): {} (resto del país), {} (frontera norte). \
             Exenciones: {}. Ajuste real: {}.",
            w.period, w.resto_pais, w.zona_frontera, w.exenciones, w.ajuste_real
        ));
    }

    REFORM_KEYWORDS
        .iter()
        .find(|(keyword, _)| m.contains(keyword))
        .and_then(|(_, idx)| table.laboral.get(*idx))
        .map(|text| text.to_string())
}

/// Tramo de la tabla de vacaciones: años de servicio (inclusivo) → días.
#[derive(Debug, Clone, Copy)]
pub struct VacationBracket {
    pub from_years: u32,
    pub to_years: Option<u32>,
    pub days: u32,
}

/// Tabla del Art. 76 LFT tras la reforma DOF 27-dic-2022.
/// Tramos contiguos desde 1 año; el último queda abierto.
pub const VACATION_SCHEDULE: &[VacationBracket] = &[
    VacationBracket { from_years: 1, to_years: Some(1), days: 12 },
    VacationBracket { from_years: 2, to_years: Some(2), days: 14 },
    VacationBracket { from_years: 3, to_years: Some(3), days: 16 },
    VacationBracket { from_years: 4, to_years: Some(4), days: 18 },
    VacationBracket { from_years: 5, to_years: Some(5), days: 20 },
    VacationBracket { from_years: 6, to_years: Some(10), days: 22 },
    VacationBracket { from_years: 11, to_years: Some(15), days: 24 },
    VacationBracket { from_years: 16, to_years: Some(20), days: 26 },
    VacationBracket { from_years: 21, to_years: Some(25), days: 28 },
    VacationBracket { from_years: 26, to_years: Some(30), days: 30 },
    VacationBracket { from_years: 31, to_years: None, days: 32 },
];

/// Días de vacaciones para `years` años de servicio. `None` para 0 años.
pub fn vacation_days(years: u32) -> Option<u32> {
    VACATION_SCHEDULE
        .iter()
        .find(|b| years >= b.from_years && b.to_years.map_or(true, |to| years <= to))
        .map(|b| b.days)
}
