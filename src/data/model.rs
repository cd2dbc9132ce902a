use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// CreatureRecord – one entry of the main dataset document
// ---------------------------------------------------------------------------

/// A single creature species as stored in the dataset.
///
/// List and stat fields fall back to empty / zero while parsing, so the
/// rest of the program never has to special-case a missing key. The free
/// text fields stay optional; the detail view renders `None` as "Unknown".
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatureRecord {
    pub id: u32,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Zero or more of `"male"` / `"female"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: Vec<String>,
    /// Hyphen-separated tokens, e.g. `"solar-power"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub abilities: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: BaseStats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<String>,
}

/// The six base stats. Missing or `null` keys read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    #[serde(deserialize_with = "null_as_default")]
    pub hp: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub attack: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub defense: u16,
    #[serde(rename = "special-attack", deserialize_with = "null_as_default")]
    pub special_attack: u16,
    #[serde(rename = "special-defense", deserialize_with = "null_as_default")]
    pub special_defense: u16,
    #[serde(deserialize_with = "null_as_default")]
    pub speed: u16,
}

/// An explicit `null` reads the same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BaseStats {
    /// Stats paired with their display labels, in panel order.
    pub fn labelled(&self) -> [(&'static str, u16); 6] {
        [
            ("HP", self.hp),
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Sp. Atk", self.special_attack),
            ("Sp. Def", self.special_defense),
            ("Speed", self.speed),
        ]
    }
}

// ---------------------------------------------------------------------------
// Evolution index: creature id → chain file id
// ---------------------------------------------------------------------------

/// Name of a chain document under the evolution directory, without `.json`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChainFileId(String);

impl ChainFileId {
    /// Interpret one value of the index document.
    ///
    /// Strings and numbers are accepted. Empty strings, zero, `null` and
    /// booleans mean "no chain" and yield `None`.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(s) if !s.is_empty() => Some(Self(s.clone())),
            JsonValue::Number(n) => {
                let is_zero = n.as_f64().is_some_and(|f| f == 0.0);
                (!is_zero).then(|| Self(n.to_string()))
            }
            _ => None,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for ChainFileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps a creature id (stringified, as in the index document) to its chain file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionIndex {
    entries: HashMap<String, ChainFileId>,
}

impl EvolutionIndex {
    /// Build from the raw JSON object, dropping entries that name no chain.
    pub fn from_json_map(raw: serde_json::Map<String, JsonValue>) -> Self {
        let entries = raw
            .into_iter()
            .filter_map(|(key, val)| ChainFileId::from_json(&val).map(|cid| (key, cid)))
            .collect();
        Self { entries }
    }

    pub fn get(&self, creature_id: u32) -> Option<&ChainFileId> {
        self.entries.get(&creature_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// EvolutionNode – one node of a chain document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EvolutionNode {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub evolves_to: Vec<EvolutionNode>,
}

// ---------------------------------------------------------------------------
// Dataset – the read-only snapshot built at startup
// ---------------------------------------------------------------------------

/// All creatures keyed by lowercase name, plus the id-ordered key list.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub creatures: BTreeMap<String, CreatureRecord>,
    /// Keys ordered ascending by `CreatureRecord::id`. Drives list order.
    pub sorted_keys: Vec<String>,
    pub evolution_index: EvolutionIndex,
}

impl Dataset {
    pub fn new(creatures: BTreeMap<String, CreatureRecord>, evolution_index: EvolutionIndex) -> Self {
        let mut sorted_keys: Vec<String> = creatures.keys().cloned().collect();
        sorted_keys.sort_by_key(|k| creatures[k].id);
        Dataset {
            creatures,
            sorted_keys,
            evolution_index,
        }
    }

    /// Key and record at a position of `sorted_keys`.
    pub fn entry(&self, index: usize) -> Option<(&str, &CreatureRecord)> {
        let key = self.sorted_keys.get(index)?;
        self.creatures.get(key).map(|rec| (key.as_str(), rec))
    }

    pub fn len(&self) -> usize {
        self.sorted_keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_defaults_for_missing_fields() {
        let rec: CreatureRecord = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(rec.id, 7);
        assert!(rec.height.is_none());
        assert!(rec.gender.is_empty());
        assert!(rec.abilities.is_empty());
        assert_eq!(rec.stats, BaseStats::default());
    }

    #[test]
    fn partial_stats_default_to_zero() {
        let rec: CreatureRecord = serde_json::from_value(json!({
            "id": 1,
            "stats": { "hp": 45, "special-attack": 65 }
        }))
        .unwrap();
        assert_eq!(rec.stats.hp, 45);
        assert_eq!(rec.stats.special_attack, 65);
        assert_eq!(rec.stats.speed, 0);
        assert_eq!(rec.stats.labelled()[3], ("Sp. Atk", 65));
    }

    #[test]
    fn null_fields_read_as_missing() {
        let rec: CreatureRecord = serde_json::from_value(json!({
            "id": 0,
            "gender": null,
            "abilities": null,
            "types": null,
            "stats": { "hp": null, "attack": 49 }
        }))
        .unwrap();
        assert!(rec.gender.is_empty());
        assert!(rec.abilities.is_empty());
        assert!(rec.types.is_empty());
        assert_eq!(rec.stats.hp, 0);
        assert_eq!(rec.stats.attack, 49);

        let rec: CreatureRecord = serde_json::from_value(json!({ "id": 1, "stats": null })).unwrap();
        assert_eq!(rec.stats, BaseStats::default());

        let node: EvolutionNode =
            serde_json::from_value(json!({ "id": 1, "name": "a", "evolves_to": null })).unwrap();
        assert!(node.evolves_to.is_empty());
    }

    #[test]
    fn chain_file_id_accepts_strings_and_numbers() {
        assert_eq!(ChainFileId::from_json(&json!("12")).unwrap().file_name(), "12.json");
        assert_eq!(ChainFileId::from_json(&json!(3)).unwrap().file_name(), "3.json");
        assert!(ChainFileId::from_json(&json!("")).is_none());
        assert!(ChainFileId::from_json(&json!(0)).is_none());
        assert!(ChainFileId::from_json(&json!(null)).is_none());
        assert!(ChainFileId::from_json(&json!(false)).is_none());
    }

    #[test]
    fn index_lookup_by_numeric_id() {
        let raw = json!({ "1": 1, "2": "1", "9": "" });
        let index = EvolutionIndex::from_json_map(raw.as_object().unwrap().clone());
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(2).unwrap().to_string(), "1");
        assert!(index.get(9).is_none());
    }

    #[test]
    fn dataset_orders_keys_by_id() {
        let mut creatures = BTreeMap::new();
        for (name, id) in [("charmander", 4), ("bulbasaur", 1), ("abra", 63)] {
            let rec: CreatureRecord = serde_json::from_value(json!({ "id": id })).unwrap();
            creatures.insert(name.to_string(), rec);
        }
        let ds = Dataset::new(creatures, EvolutionIndex::default());
        assert_eq!(ds.sorted_keys, vec!["bulbasaur", "charmander", "abra"]);
        assert_eq!(ds.entry(2).unwrap().1.id, 63);
        assert!(ds.entry(3).is_none());
    }
}
