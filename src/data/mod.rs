/// Data layer: record types, loading, filtering and evolution chains.
///
/// Architecture:
/// ```text
///  pokemon_full.json   evolution_index.json   evolutions/<chain>.json
///        │                    │                       │
///        ▼                    ▼                       │
///   ┌──────────┐                                      │
///   │  loader   │  parse once → Dataset               │
///   └──────────┘                                      │
///        │                                            │
///        ├──────────────┐                             │
///        ▼              ▼                             ▼
///   ┌──────────┐   ┌────────────┐  per selection ┌──────────┐
///   │  filter   │   │ evolution  │ ◄───────────── │  chain   │
///   └──────────┘   └────────────┘                └──────────┘
///   visible rows    Vec<RenderItem>
/// ```

pub mod evolution;
pub mod filter;
pub mod loader;
pub mod model;
