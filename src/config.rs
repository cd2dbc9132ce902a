use std::path::PathBuf;

use clap::Parser;

/// Where the viewer finds its data, and which creature the home button opens.
#[derive(Parser, Debug, Clone)]
#[command(name = "rusty-dex", about = "Browse a creature dataset with evolution chains")]
pub struct Config {
    /// Main dataset document (name → record).
    #[arg(long, default_value = "dataset/pokemon_full.json")]
    pub dataset: PathBuf,

    /// Creature id → chain file id. Optional.
    #[arg(long, default_value = "dataset/evolution_index.json")]
    pub evolution_index: PathBuf,

    /// Directory holding `<chain id>.json` documents.
    #[arg(long, default_value = "dataset/evolutions")]
    pub evolution_dir: PathBuf,

    /// Directory holding `<id>.png` images.
    #[arg(long, default_value = "images")]
    pub images_dir: PathBuf,

    /// Creature id selected by the home button.
    #[arg(long, default_value_t = 1)]
    pub home_id: u32,
}
