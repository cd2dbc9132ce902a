use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CreatureRecord, Dataset, EvolutionIndex, EvolutionNode};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures reading the main dataset. These abort startup.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("reading {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the dataset document and the (optional) evolution index.
///
/// Expected main document shape:
///
/// ```json
/// {
///   "bulbasaur": { "id": 1, "types": ["grass", "poison"], "stats": { "hp": 45 } },
///   "ivysaur":   { "id": 2, ... }
/// }
/// ```
///
/// A missing or malformed dataset is an error. A missing index is not:
/// it yields an empty [`EvolutionIndex`].
pub fn load_dataset(dataset_path: &Path, index_path: &Path) -> Result<Dataset, DataError> {
    let creatures = load_creatures(dataset_path)?;
    let evolution_index = load_evolution_index(index_path);

    let dataset = Dataset::new(creatures, evolution_index);
    log::info!("Loaded {} creatures from {}", dataset.len(), dataset_path.display());
    if dataset.evolution_index.is_empty() {
        log::info!("Evolution index is empty, evolution strips disabled");
    } else {
        log::info!("{} evolution index entries", dataset.evolution_index.len());
    }
    Ok(dataset)
}

fn load_creatures(path: &Path) -> Result<BTreeMap<String, CreatureRecord>, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Optional documents
// ---------------------------------------------------------------------------

/// Read the evolution index. Absent or unreadable files give an empty index.
pub fn load_evolution_index(path: &Path) -> EvolutionIndex {
    match read_optional_json::<serde_json::Map<String, JsonValue>>(path) {
        Some(raw) => EvolutionIndex::from_json_map(raw),
        None => {
            log::info!("No evolution index at {}, evolutions disabled", path.display());
            EvolutionIndex::default()
        }
    }
}

/// Read one chain document. `None` when the file is absent or malformed.
pub fn load_chain(path: &Path) -> Option<EvolutionNode> {
    read_optional_json(path)
}

fn read_optional_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            log::warn!("Could not read {}: {e}", path.display());
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring malformed {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(p: &Path, s: &str) {
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, s).unwrap();
    }

    const DATASET: &str = r#"{
        "charmander": { "id": 4, "types": ["fire"] },
        "bulbasaur":  { "id": 1, "types": ["grass", "poison"], "gender": ["male", "female"] },
        "squirtle":   { "id": 7, "stats": { "hp": 44, "speed": 43 } },
        "ivysaur":    { "id": 2 }
    }"#;

    #[test]
    fn sorted_keys_follow_numeric_id() {
        let td = TempDir::new().unwrap();
        let data = td.path().join("pokemon_full.json");
        write(&data, DATASET);

        let ds = load_dataset(&data, &td.path().join("evolution_index.json")).unwrap();
        assert_eq!(ds.sorted_keys, vec!["bulbasaur", "ivysaur", "charmander", "squirtle"]);
        for pair in ds.sorted_keys.windows(2) {
            assert!(ds.creatures[&pair[0]].id <= ds.creatures[&pair[1]].id);
        }
        assert_eq!(ds.creatures["squirtle"].stats.hp, 44);
        assert_eq!(ds.creatures["squirtle"].stats.attack, 0);
    }

    #[test]
    fn missing_index_yields_empty_mapping() {
        let td = TempDir::new().unwrap();
        let data = td.path().join("pokemon_full.json");
        write(&data, DATASET);

        let ds = load_dataset(&data, &td.path().join("nope.json")).unwrap();
        assert!(ds.evolution_index.is_empty());
    }

    #[test]
    fn index_is_loaded_when_present() {
        let td = TempDir::new().unwrap();
        let data = td.path().join("pokemon_full.json");
        let index = td.path().join("evolution_index.json");
        write(&data, DATASET);
        write(&index, r#"{ "1": 1, "2": "1", "4": 2 }"#);

        let ds = load_dataset(&data, &index).unwrap();
        assert_eq!(ds.evolution_index.len(), 3);
        assert_eq!(ds.evolution_index.get(4).unwrap().file_name(), "2.json");
    }

    #[test]
    fn malformed_index_degrades_to_empty() {
        let td = TempDir::new().unwrap();
        let index = td.path().join("evolution_index.json");
        write(&index, "[1, 2");
        assert!(load_evolution_index(&index).is_empty());
    }

    #[test]
    fn null_optional_fields_do_not_reject_dataset() {
        let td = TempDir::new().unwrap();
        let data = td.path().join("pokemon_full.json");
        write(
            &data,
            r#"{
                "bulbasaur": { "id": 1 },
                "missingno": { "id": 2, "gender": null, "abilities": null, "stats": { "hp": null } }
            }"#,
        );

        let ds = load_dataset(&data, &td.path().join("i.json")).unwrap();
        assert_eq!(ds.sorted_keys, vec!["bulbasaur", "missingno"]);
        let rec = &ds.creatures["missingno"];
        assert!(rec.gender.is_empty());
        assert!(rec.abilities.is_empty());
        assert_eq!(rec.stats.hp, 0);
    }

    #[test]
    fn missing_dataset_is_a_read_error() {
        let td = TempDir::new().unwrap();
        let err = load_dataset(&td.path().join("absent.json"), &td.path().join("i.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn unparseable_dataset_is_a_parse_error() {
        let td = TempDir::new().unwrap();
        let data = td.path().join("pokemon_full.json");
        write(&data, r#"{ "bulbasaur": { "name": "no id" } }"#);
        let err = load_dataset(&data, &td.path().join("i.json")).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn chain_document_parses_nested_nodes() {
        let td = TempDir::new().unwrap();
        let chain = td.path().join("1.json");
        write(
            &chain,
            r#"{ "id": 1, "name": "bulbasaur", "evolves_to": [
                 { "id": 2, "name": "ivysaur", "evolves_to": [
                   { "id": 3, "name": "venusaur" } ] } ] }"#,
        );
        let root = load_chain(&chain).unwrap();
        assert_eq!(root.evolves_to[0].evolves_to[0].name, "venusaur");
        assert!(root.evolves_to[0].evolves_to[0].evolves_to.is_empty());
        assert!(load_chain(&td.path().join("2.json")).is_none());
    }
}
