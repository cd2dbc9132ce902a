use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Looks up `<id>.png` files. Missing images are simply not drawn.
#[derive(Debug, Clone)]
pub struct ImageDir {
    root: PathBuf,
}

impl ImageDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, id: u32) -> PathBuf {
        self.root.join(format!("{id}.png"))
    }

    /// `file://` URI for egui's image loaders, or `None` when the file is absent.
    pub fn uri_for(&self, id: u32) -> Option<String> {
        let path = self.path_for(id);
        path.is_file().then(|| file_uri(&path))
    }
}

fn file_uri(path: &Path) -> String {
    let abs = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", abs.display())
}

/// Image URIs resolved once at startup, so drawing a frame never touches the disk.
#[derive(Debug, Clone, Default)]
pub struct IconCache {
    uris: HashMap<u32, String>,
}

impl IconCache {
    pub fn scan(dir: &ImageDir, ids: impl IntoIterator<Item = u32>) -> Self {
        let uris: HashMap<u32, String> = ids
            .into_iter()
            .filter_map(|id| dir.uri_for(id).map(|uri| (id, uri)))
            .collect();
        log::info!("Found {} creature images under {}", uris.len(), dir.root.display());
        Self { uris }
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.uris.get(&id).map(String::as_str)
    }
}
