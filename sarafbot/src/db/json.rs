use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::db::StateStore;
use crate::error::{Error, Result};
use crate::service::rate::RateSnapshot;

pub const DEFAULT_PATH: &str = "state.json";

/// Snapshot stored as one pretty-printed JSON object.
pub struct Client {
    path: PathBuf,
}

impl Client {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn storage_err(&self, source: std::io::Error) -> Error {
        Error::Storage { path: self.path.clone(), source }
    }

    fn format_err(&self, source: serde_json::Error) -> Error {
        Error::StateFormat { path: self.path.clone(), source }
    }
}

#[async_trait]
impl StateStore for Client {
    async fn load(&self) -> Result<RateSnapshot> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no state at {}, starting empty", self.path.display());
                return Ok(RateSnapshot::new());
            }
            Err(err) => return Err(self.storage_err(err)),
        };

        serde_json::from_str(&content).map_err(|err| self.format_err(err))
    }

    async fn save(&self, rates: &RateSnapshot) -> Result<()> {
        let content = serde_json::to_string_pretty(rates).map_err(|err| self.format_err(err))?;

        tokio::fs::write(&self.path, content).await
            .map_err(|err| self.storage_err(err))
    }
}

#[cfg(test)]
mod test {
    use tempfile::TempDir;

    use super::*;
    use crate::service::rate::RateEntry;

    fn client(dir: &TempDir) -> Client {
        Client::new(dir.path().join(DEFAULT_PATH))
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(client(&dir).load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_overwrites_whole_snapshot() {
        let dir = TempDir::new().unwrap();
        let db = client(&dir);

        let first = RateSnapshot::from([
            ("USD".to_string(), RateEntry::new("70", "71")),
            ("EUR".to_string(), RateEntry::new("80", "81")),
        ]);
        db.save(&first).await.unwrap();

        let second = RateSnapshot::from([("USD".to_string(), RateEntry::new("70", "72"))]);
        db.save(&second).await.unwrap();

        assert_eq!(db.load().await.unwrap(), second);
    }

    #[tokio::test]
    async fn save_writes_indented_object() {
        let dir = TempDir::new().unwrap();
        let db = client(&dir);

        db.save(&RateSnapshot::from([("USD".to_string(), RateEntry::new("70", "71"))]))
            .await
            .unwrap();

        let content = std::fs::read_to_string(&db.path).unwrap();
        assert_eq!(content, "{\n  \"USD\": {\n    \"buy\": \"70\",\n    \"sell\": \"71\"\n  }\n}");
    }

    #[tokio::test]
    async fn load_corrupt_file_fails() {
        let dir = TempDir::new().unwrap();
        let db = client(&dir);
        std::fs::write(&db.path, "not json").unwrap();

        assert!(matches!(db.load().await, Err(Error::StateFormat { .. })));
    }

    #[tokio::test]
    async fn save_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let db = Client::new(dir.path().join("missing").join(DEFAULT_PATH));

        let err = db.save(&RateSnapshot::new()).await.unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
    }
}
