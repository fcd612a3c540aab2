use std::path::PathBuf;

use mcqgen_llm::McqGenerator;

pub struct AppState {
    /// Question generator holding the configured provider.
    pub generator: McqGenerator,
    /// Shared scratch directory for transient per-request files.
    pub scratch_dir: PathBuf,
}
