//! Seed fixture loader.
//!
//! Loads recommendation rows from `contracts/seed/` for tests that need a
//! populated service.

use std::path::{Path, PathBuf};

use recommend_domain::recommendation::RecommendationPayload;

/// Default seed file, relative to the workspace root.
pub const SEED_FILE: &str = "contracts/seed/recommendations.json";

fn workspace_root() -> PathBuf {
    std::env::var("CARGO_MANIFEST_DIR")
        .map(|dir| {
            // Walk up from crate dir to workspace root
            let p = Path::new(&dir);
            p.ancestors()
                .find(|a| a.join("Cargo.lock").exists() || a.join("contracts").is_dir())
                .unwrap_or(p)
                .to_path_buf()
        })
        .unwrap_or_else(|_| std::env::current_dir().unwrap())
}

/// Load seed rows from `workspace_root/relative_path`.
///
/// Panics if the file is missing or invalid JSON.
pub fn load_seed(relative_path: &str) -> Vec<RecommendationPayload> {
    let full_path = workspace_root().join(relative_path);
    let contents = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("invalid JSON in fixture {}: {}", relative_path, e))
}
