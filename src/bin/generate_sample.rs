use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{Value, json};

/// Writes a small dataset the viewer can open:
///
/// ```text
/// <out>/pokemon_full.json
/// <out>/evolution_index.json
/// <out>/evolutions/<chain>.json
/// ```
#[derive(Parser, Debug)]
#[command(name = "generate_sample", about = "Write a sample creature dataset")]
struct Args {
    /// Output directory.
    #[arg(default_value = "dataset")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let out = args.out_dir.as_path();
    fs::create_dir_all(out.join("evolutions")).context("creating output directory")?;

    let creatures = json!({
        "bulbasaur": creature(1, "0.7 m", "6.9 kg", "Seed", &["male", "female"], &["overgrow", "chlorophyll"],
            [45, 49, 49, 65, 65, 45], &["grass", "poison"], &["fire", "psychic", "flying", "ice"]),
        "ivysaur": creature(2, "1.0 m", "13.0 kg", "Seed", &["male", "female"], &["overgrow", "chlorophyll"],
            [60, 62, 63, 80, 80, 60], &["grass", "poison"], &["fire", "psychic", "flying", "ice"]),
        "venusaur": creature(3, "2.0 m", "100.0 kg", "Seed", &["male", "female"], &["overgrow", "chlorophyll"],
            [80, 82, 83, 100, 100, 80], &["grass", "poison"], &["fire", "psychic", "flying", "ice"]),
        "pikachu": creature(25, "0.4 m", "6.0 kg", "Mouse", &["male", "female"], &["static", "lightning-rod"],
            [35, 55, 40, 50, 50, 90], &["electric"], &["ground"]),
        "raichu": creature(26, "0.8 m", "30.0 kg", "Mouse", &["male", "female"], &["static", "lightning-rod"],
            [60, 90, 55, 90, 80, 110], &["electric"], &["ground"]),
        "tauros": creature(128, "1.4 m", "88.4 kg", "Wild Bull", &["male"], &["intimidate", "anger-point"],
            [75, 100, 95, 40, 70, 110], &["normal"], &["fighting"]),
        "eevee": creature(133, "0.3 m", "6.5 kg", "Evolution", &["male", "female"], &["run-away", "adaptability"],
            [55, 55, 50, 45, 65, 55], &["normal"], &["fighting"]),
        "vaporeon": creature(134, "1.0 m", "29.0 kg", "Bubble Jet", &["male", "female"], &["water-absorb"],
            [130, 65, 60, 110, 95, 65], &["water"], &["grass", "electric"]),
        "jolteon": creature(135, "0.8 m", "24.5 kg", "Lightning", &["male", "female"], &["volt-absorb"],
            [65, 65, 60, 110, 95, 130], &["electric"], &["ground"]),
        "flareon": creature(136, "0.9 m", "25.0 kg", "Flame", &["male", "female"], &["flash-fire"],
            [65, 130, 60, 95, 110, 65], &["fire"], &["water", "ground", "rock"]),
        "porygon": json!({ "id": 137, "types": ["normal"] }),
    });

    let chains: [(u32, Value); 3] = [
        (1, json!({ "id": 1, "name": "bulbasaur", "evolves_to": [
            { "id": 2, "name": "ivysaur", "evolves_to": [
                { "id": 3, "name": "venusaur", "evolves_to": [] } ] } ] })),
        (10, json!({ "id": 25, "name": "pikachu", "evolves_to": [
            { "id": 26, "name": "raichu", "evolves_to": [] } ] })),
        (67, json!({ "id": 133, "name": "eevee", "evolves_to": [
            { "id": 134, "name": "vaporeon", "evolves_to": [] },
            { "id": 135, "name": "jolteon", "evolves_to": [] },
            { "id": 136, "name": "flareon", "evolves_to": [] } ] })),
    ];

    // Tauros has a one-node chain; porygon has no index entry at all.
    let index = json!({
        "1": 1, "2": 1, "3": 1,
        "25": 10, "26": 10,
        "128": "55",
        "133": 67, "134": 67, "135": 67, "136": 67,
    });
    let tauros = json!({ "id": 128, "name": "tauros", "evolves_to": [] });

    write_json(&out.join("pokemon_full.json"), &creatures)?;
    write_json(&out.join("evolution_index.json"), &index)?;
    for (chain_id, chain) in &chains {
        write_json(&out.join("evolutions").join(format!("{chain_id}.json")), chain)?;
    }
    write_json(&out.join("evolutions").join("55.json"), &tauros)?;

    println!(
        "Wrote {} creatures and {} chains to {}",
        creatures.as_object().map_or(0, |m| m.len()),
        chains.len() + 1,
        out.display()
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn creature(
    id: u32,
    height: &str,
    weight: &str,
    category: &str,
    gender: &[&str],
    abilities: &[&str],
    stats: [u16; 6],
    types: &[&str],
    weaknesses: &[&str],
) -> Value {
    let [hp, attack, defense, special_attack, special_defense, speed] = stats;
    json!({
        "id": id,
        "height": height,
        "weight": weight,
        "category": category,
        "gender": gender,
        "abilities": abilities,
        "stats": {
            "hp": hp,
            "attack": attack,
            "defense": defense,
            "special-attack": special_attack,
            "special-defense": special_defense,
            "speed": speed,
        },
        "types": types,
        "weaknesses": weaknesses,
    })
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
