use crate::data::evolution::RenderItem;
use crate::data::model::CreatureRecord;

/// Upper bound of the stat bars.
pub const STAT_BAR_MAX: u8 = 15;

const UNKNOWN: &str = "Unknown";

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// First character upper-cased, the rest lower-cased.
pub fn display_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `["male", "female"]` → `"♂ ♀"`; empty → `"Unknown"`.
pub fn format_gender(tags: &[String]) -> String {
    if tags.is_empty() {
        return UNKNOWN.to_string();
    }
    tags.iter()
        .map(|g| if g == "male" { "♂" } else { "♀" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `["solar-power", "blaze"]` → `"Solar Power, Blaze"`; empty → `"Unknown"`.
pub fn format_abilities(abilities: &[String]) -> String {
    if abilities.is_empty() {
        return UNKNOWN.to_string();
    }
    abilities
        .iter()
        .map(|a| title_case(&a.replace('-', " ")))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Upper-case every letter that follows a non-letter, lower-case the rest.
/// `"o'neil 2nd"` → `"O'Neil 2Nd"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if prev_is_letter {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    out
}

/// Scale a raw 0–255 stat onto the 0–15 bar. Values above 255 are capped.
pub fn stat_to_15(value: u16) -> u8 {
    let v = f64::from(value.min(255));
    (v / 255.0 * f64::from(STAT_BAR_MAX)).round() as u8
}

// ---------------------------------------------------------------------------
// CreatureDetail – everything the detail panel draws
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatBar {
    pub label: &'static str,
    pub raw: u16,
    pub scaled: u8,
}

impl StatBar {
    pub fn text(&self) -> String {
        format!("{}: {} / {STAT_BAR_MAX}", self.label, self.scaled)
    }

    pub fn fraction(&self) -> f32 {
        f32::from(self.scaled) / f32::from(STAT_BAR_MAX)
    }
}

/// Display-ready view of one creature. Built once per selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    pub height: String,
    pub weight: String,
    pub category: String,
    pub gender: String,
    pub abilities: String,
    pub stats: Vec<StatBar>,
    pub types: Vec<String>,
    pub weaknesses: Vec<String>,
    pub evolution: Vec<RenderItem>,
}

impl CreatureDetail {
    pub fn build(key: &str, record: &CreatureRecord, evolution: Vec<RenderItem>) -> Self {
        let or_unknown = |v: &Option<String>| v.clone().unwrap_or_else(|| UNKNOWN.to_string());
        CreatureDetail {
            id: record.id,
            name: display_name(key),
            height: or_unknown(&record.height),
            weight: or_unknown(&record.weight),
            category: or_unknown(&record.category),
            gender: format_gender(&record.gender),
            abilities: format_abilities(&record.abilities),
            stats: record
                .stats
                .labelled()
                .into_iter()
                .map(|(label, raw)| StatBar {
                    label,
                    raw,
                    scaled: stat_to_15(raw),
                })
                .collect(),
            types: record.types.clone(),
            weaknesses: record.weaknesses.clone(),
            evolution,
        }
    }
}
