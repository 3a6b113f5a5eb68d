use regex::{NoExpand, Regex, RegexBuilder};
use std::sync::OnceLock;

/// Highway structure codes seen in the `Structure Details` column.
pub const STRUCTURE_ABBREVIATIONS: [(&str, &str); 6] = [
    ("SVUP", "Small Vehicle Under Pass"),
    ("VUP", "Vehicle Under Pass"),
    ("LVUP", "Large Vehicle Under Pass"),
    ("PUP", "Pedestrian Under Pass"),
    ("CUP", "Cattle Under Pass"),
    ("AUP", "Animal Under Pass"),
];

fn patterns() -> &'static [(Regex, String)] {
    static PATTERNS: OnceLock<Vec<(Regex, String)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        STRUCTURE_ABBREVIATIONS
            .iter()
            .filter_map(|(abbr, full)| {
                RegexBuilder::new(&format!(r"\b{}\b", abbr))
                    .case_insensitive(true)
                    .build()
                    .ok()
                    .map(|re| (re, format!("{} ({})", abbr, full)))
            })
            .collect()
    })
}

/// Rewrites each code as `CODE (Full Form)`, e.g. `VUP at km 12` becomes
/// `VUP (Vehicle Under Pass) at km 12`.
pub fn expand_structure_abbreviations(text: &str) -> String {
    patterns().iter().fold(text.to_string(), |acc, (re, replacement)| {
        re.replace_all(&acc, NoExpand(replacement.as_str())).into_owned()
    })
}
