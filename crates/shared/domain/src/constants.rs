//! Well-known keys of the data document and the challenge configuration.

pub const SESEO: &str = "seseo";
pub const YEISMO: &str = "yeismo";
pub const ASPIRACION_S: &str = "aspiracion_s";
pub const ASPIRACION_J: &str = "aspiracion_j";
pub const PERDIDA_D: &str = "perdida_d";
pub const LAMBDACISMO: &str = "lambdacismo";
pub const USTEDEO: &str = "ustedeo";
pub const USO_TU: &str = "uso_tu";
pub const USO_TU_VOS: &str = "uso_tu_vos";
pub const USO_VOS: &str = "uso_vos";
pub const INDEFINIDO_VS_PERFECTO: &str = "indefinido_vs_perfecto";
pub const PRONOMBRE_SUJETO: &str = "pronombre_sujeto";
pub const QUEISMO: &str = "queismo";
pub const DEQUEISMO: &str = "dequeismo";
pub const ADJ_POR_ADV: &str = "adj_por_adv";
pub const VERBOS_REFLEXIVOS: &str = "verbos_reflexivos";

/// Features a challenge question may ask about, unless configured otherwise.
pub const CANDIDATE_FEATURES: &[&str] = &[
    SESEO,
    YEISMO,
    ASPIRACION_S,
    ASPIRACION_J,
    PERDIDA_D,
    LAMBDACISMO,
    USTEDEO,
    USO_VOS,
    INDEFINIDO_VS_PERFECTO,
    PRONOMBRE_SUJETO,
    QUEISMO,
    DEQUEISMO,
];

/// Labels used when the document carries no description for a feature.
pub const FALLBACK_LABELS: &[(&str, &str)] = &[
    (SESEO, "Seseo"),
    (YEISMO, "Yeísmo"),
    (ASPIRACION_S, "Aspiración de /s/"),
    (ASPIRACION_J, "Aspiración de /x/"),
    (PERDIDA_D, "Pérdida de /d/ intervocálica"),
    (LAMBDACISMO, "Lambdacismo"),
    (USTEDEO, "Ustedeo"),
    (USO_TU, "Uso de tú"),
    (USO_TU_VOS, "Uso de tú y vos"),
    (USO_VOS, "Uso de vos"),
    (INDEFINIDO_VS_PERFECTO, "Preferencia por indefinido"),
    (PRONOMBRE_SUJETO, "Pronombre sujeto obligatorio"),
    (QUEISMO, "Queísmo"),
    (DEQUEISMO, "Dequeísmo"),
    (ADJ_POR_ADV, "Adjetivo por adverbio"),
    (VERBOS_REFLEXIVOS, "Verbos reflexivos distintivos"),
];

/// Built-in label for a feature key.
#[must_use]
pub fn fallback_label(key: &str) -> Option<&'static str> {
    FALLBACK_LABELS.iter().find(|(k, _)| *k == key).map(|(_, label)| *label)
}

pub const KIND_FEATURE: &str = "feature";
pub const KIND_TEXT: &str = "text";

/// Caribbean coastal enclaves folded into the generic Caribbean zone.
pub const CARIBE: &str = "caribe";
pub const CARIBE_COLOMBIA: &str = "caribe_colombia";
pub const CARIBE_VENEZUELA: &str = "caribe_venezuela";

pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 250;
/// Upper bound of the double-click window.
pub const MAX_DOUBLE_CLICK_MS: u64 = 5_000;
pub const DEFAULT_DATA_PATH: &str = "data/linguistic_data.json";
