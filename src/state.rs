use std::path::PathBuf;

use crate::config::Config;
use crate::data::evolution::{RenderItem, resolve_chain};
use crate::data::filter::filtered_indices;
use crate::data::model::{CreatureRecord, Dataset};
use crate::images::{IconCache, ImageDir};
use crate::view::CreatureDetail;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Read-only snapshot loaded at startup.
    pub dataset: Dataset,

    /// Directory holding evolution chain documents.
    pub evolution_dir: PathBuf,

    /// `<id>.png` URIs, resolved once.
    pub icons: IconCache,

    /// Creature id opened by the home button.
    pub home_id: u32,

    /// Current search box contents.
    pub query: String,

    /// Positions in `dataset.sorted_keys` passing the search (cached).
    pub visible_indices: Vec<usize>,

    /// Selected position in `dataset.sorted_keys`.
    pub selected: Option<usize>,

    /// Set by `select_by_id`; the list scrolls to the selection and clears it.
    pub scroll_to_selected: bool,

    /// Detail panel contents for the current selection.
    pub detail: Option<CreatureDetail>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        let visible_indices = (0..dataset.len()).collect();
        let icons = IconCache::scan(
            &ImageDir::new(config.images_dir.clone()),
            dataset.creatures.values().map(|rec| rec.id),
        );
        Self {
            dataset,
            evolution_dir: config.evolution_dir.clone(),
            icons,
            home_id: config.home_id,
            query: String::new(),
            visible_indices,
            selected: None,
            scroll_to_selected: false,
            detail: None,
        }
    }

    /// Replace the search text and recompute the visible rows.
    /// The selection is kept even when its row becomes hidden.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.refilter();
    }

    /// Recompute `visible_indices` after a query change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.query);
    }

    /// Select a row and rebuild the detail panel, chain included.
    pub fn select_index(&mut self, index: usize) {
        let Some((key, record)) = self.dataset.entry(index) else {
            return;
        };
        let evolution = resolve_chain(&self.dataset.evolution_index, &self.evolution_dir, record.id);
        self.detail = Some(CreatureDetail::build(key, record, evolution));
        self.selected = Some(index);
    }

    /// Select the first row (in list order) whose record has `id`.
    /// Returns `false` and leaves the selection alone when nothing matches.
    pub fn select_by_id(&mut self, id: u32) -> bool {
        let found = self
            .dataset
            .sorted_keys
            .iter()
            .position(|key| self.dataset.creatures.get(key).is_some_and(|rec| rec.id == id));
        match found {
            Some(index) => {
                self.select_index(index);
                self.scroll_to_selected = true;
                true
            }
            None => {
                log::debug!("No creature with id {id}");
                false
            }
        }
    }

    pub fn go_home(&mut self) -> bool {
        self.select_by_id(self.home_id)
    }

    /// Follow an evolution strip item. Arrows do nothing.
    pub fn activate(&mut self, item: &RenderItem) {
        if let RenderItem::Node { id, .. } = item {
            self.select_by_id(*id);
        }
    }

    pub fn selected_record(&self) -> Option<&CreatureRecord> {
        self.selected
            .and_then(|i| self.dataset.entry(i))
            .map(|(_, rec)| rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    use crate::data::loader::load_dataset;

    struct Fixture {
        _dir: TempDir,
        state: AppState,
    }

    fn fixture() -> Fixture {
        let td = TempDir::new().unwrap();
        let root = td.path();
        fs::write(
            root.join("pokemon_full.json"),
            r#"{
                "eevee":    { "id": 133, "types": ["normal"] },
                "vaporeon": { "id": 134, "types": ["water"] },
                "jolteon":  { "id": 135, "types": ["electric"] },
                "bulbasaur":{ "id": 1,   "types": ["grass", "poison"] },
                "pikachu":  { "id": 25,  "types": ["electric"] }
            }"#,
        )
        .unwrap();
        fs::write(
            root.join("evolution_index.json"),
            r#"{ "133": 67, "134": 67, "135": 67 }"#,
        )
        .unwrap();
        fs::create_dir_all(root.join("evolutions")).unwrap();
        fs::write(
            root.join("evolutions/67.json"),
            r#"{"id":133,"name":"eevee","evolves_to":[
                {"id":134,"name":"vaporeon","evolves_to":[]},
                {"id":135,"name":"jolteon","evolves_to":[]}]}"#,
        )
        .unwrap();

        let root_str = root.to_str().unwrap();
        let config = Config::parse_from([
            "rusty-dex".to_string(),
            "--evolution-dir".to_string(),
            format!("{root_str}/evolutions"),
            "--images-dir".to_string(),
            format!("{root_str}/images"),
        ]);
        let dataset = load_dataset(&root.join("pokemon_full.json"), &root.join("evolution_index.json")).unwrap();
        let state = AppState::new(dataset, &config);
        Fixture { _dir: td, state }
    }

    fn selected_id(state: &AppState) -> Option<u32> {
        state.selected_record().map(|r| r.id)
    }

    #[test]
    fn starts_with_everything_visible_and_nothing_selected() {
        let f = fixture();
        assert_eq!(f.state.visible_indices.len(), 5);
        assert!(f.state.selected.is_none());
        assert!(f.state.detail.is_none());
    }

    #[test]
    fn clearing_query_restores_full_list_and_keeps_selection() {
        let mut f = fixture();
        f.state.select_by_id(25);
        f.state.set_query("EON");
        assert_eq!(f.state.visible_indices.len(), 2);
        assert_eq!(selected_id(&f.state), Some(25));

        f.state.set_query("");
        assert_eq!(f.state.visible_indices, vec![0, 1, 2, 3, 4]);
        assert_eq!(selected_id(&f.state), Some(25));
    }

    #[test]
    fn selecting_builds_detail_with_evolution_strip() {
        let mut f = fixture();
        assert!(f.state.select_by_id(134));
        assert!(f.state.scroll_to_selected);

        let detail = f.state.detail.as_ref().unwrap();
        assert_eq!(detail.name, "Vaporeon");
        assert_eq!(detail.evolution.len(), 5);
        assert_eq!(detail.evolution[1], RenderItem::Arrow);
    }

    #[test]
    fn creature_without_chain_has_empty_strip() {
        let mut f = fixture();
        f.state.select_by_id(25);
        assert!(f.state.detail.as_ref().unwrap().evolution.is_empty());
    }

    #[test]
    fn activating_a_node_selects_that_creature() {
        let mut f = fixture();
        f.state.select_by_id(133);
        let strip = f.state.detail.as_ref().unwrap().evolution.clone();
        for item in &strip {
            if let RenderItem::Node { id, .. } = item {
                f.state.activate(item);
                assert_eq!(selected_id(&f.state), Some(*id));
            }
        }
    }

    #[test]
    fn activating_an_arrow_is_inert() {
        let mut f = fixture();
        f.state.select_by_id(135);
        f.state.activate(&RenderItem::Arrow);
        assert_eq!(selected_id(&f.state), Some(135));
    }

    #[test]
    fn unknown_id_leaves_selection_unchanged() {
        let mut f = fixture();
        f.state.select_by_id(133);
        f.state.scroll_to_selected = false;

        assert!(!f.state.select_by_id(9999));
        assert_eq!(selected_id(&f.state), Some(133));
        assert!(!f.state.scroll_to_selected);
    }

    #[test]
    fn icons_are_resolved_at_startup() {
        let td = TempDir::new().unwrap();
        let root = td.path();
        fs::write(root.join("pokemon_full.json"), r#"{ "pikachu": { "id": 25 }, "raichu": { "id": 26 } }"#).unwrap();
        fs::create_dir_all(root.join("images")).unwrap();
        fs::write(root.join("images/25.png"), b"\x89PNG").unwrap();

        let config = Config::parse_from([
            "rusty-dex".to_string(),
            "--images-dir".to_string(),
            format!("{}/images", root.to_str().unwrap()),
        ]);
        let dataset = load_dataset(&root.join("pokemon_full.json"), &root.join("none.json")).unwrap();
        let state = AppState::new(dataset, &config);

        fs::remove_dir_all(root.join("images")).unwrap();
        assert!(state.icons.get(25).is_some());
        assert!(state.icons.get(26).is_none());
    }

    #[test]
    fn home_jumps_to_configured_id() {
        let mut f = fixture();
        assert!(f.state.go_home());
        assert_eq!(selected_id(&f.state), Some(1));
        assert_eq!(f.state.selected, Some(0));
    }
}
