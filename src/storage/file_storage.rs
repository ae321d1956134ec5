use crate::{config::Config, domain::Snapshot, error::Result, storage::BoardStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based storage implementation
pub struct FileStore {
    root_path: PathBuf,
}

impl FileStore {
    const STAGEBOARD_DIR: &'static str = ".stageboard";
    const BOARD_FILE: &'static str = "board.json";
    const BOARD_TEMP_FILE: &'static str = "board.json.tmp";
    const CONFIG_FILE: &'static str = "config.json";

    /// Creates a new FileStore for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::STAGEBOARD_DIR),
        }
    }

    pub fn board_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_FILE)
    }

    fn board_temp_file(&self) -> PathBuf {
        self.root_path.join(Self::BOARD_TEMP_FILE)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root_path.join(Self::CONFIG_FILE)
    }

    /// Reads `config.json`, falling back to defaults when it does not exist
    pub async fn load_config(&self) -> Result<Config> {
        let config_file = self.config_file();

        if !config_file.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_file).await?;
        Config::from_json_str(&contents)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BoardStore for FileStore {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        // Write aside then rename, so board.json is never left half written
        let json = serde_json::to_string_pretty(snapshot)?;
        let temp_file = self.board_temp_file();
        fs::write(&temp_file, json).await?;
        fs::rename(&temp_file, self.board_file()).await?;

        debug!(path = %self.board_file().display(), "Snapshot written");
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        let board_file = self.board_file();

        if !board_file.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&board_file).await?;
        let snapshot = Snapshot::from_json(&contents)?;

        Ok(Some(snapshot))
    }
}
