use std::path::Path;

use super::loader::load_chain;
use super::model::{EvolutionIndex, EvolutionNode};

// ---------------------------------------------------------------------------
// RenderItem – one element of the evolution strip
// ---------------------------------------------------------------------------

/// Instruction for the evolution strip. The UI draws these left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderItem {
    /// A creature in the chain; activating it selects that creature.
    Node { id: u32, name: String },
    Arrow,
}

// ---------------------------------------------------------------------------
// Chain resolution
// ---------------------------------------------------------------------------

/// Resolve the evolution strip for `creature_id`.
///
/// Returns an empty sequence when the index has no entry for the id or the
/// chain document is missing. The document is read on every call.
pub fn resolve_chain(index: &EvolutionIndex, chain_dir: &Path, creature_id: u32) -> Vec<RenderItem> {
    let Some(chain_id) = index.get(creature_id) else {
        return Vec::new();
    };
    let path = chain_dir.join(chain_id.file_name());
    let Some(root) = load_chain(&path) else {
        log::debug!("No chain document {} for #{creature_id}", path.display());
        return Vec::new();
    };
    let items = flatten_chain(&root);
    log::debug!("Chain {chain_id} for #{creature_id}: {} items", items.len());
    items
}

/// Pre-order walk: the root, then for each child in order an `Arrow`
/// followed by that child's subtree.
///
/// Sibling branches come out one after another, so every node except the
/// root is preceded by exactly one arrow regardless of the tree's shape.
pub fn flatten_chain(root: &EvolutionNode) -> Vec<RenderItem> {
    fn walk(node: &EvolutionNode, out: &mut Vec<RenderItem>) {
        out.push(RenderItem::Node {
            id: node.id,
            name: node.name.clone(),
        });
        for child in &node.evolves_to {
            out.push(RenderItem::Arrow);
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}
