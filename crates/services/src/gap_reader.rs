use std::sync::Arc;

use storage::repository::KeyValueStore;
use tracing::debug;
use upskill_core::model::GapList;

use crate::error::GapReaderError;

/// Local-storage key holding the JSON-encoded list of unknown skills.
pub const UNKNOWN_SKILLS_KEY: &str = "unknownSkills";

/// Reads (and, for tooling, writes) the persisted gap list.
#[derive(Clone)]
pub struct GapReader {
    store: Arc<dyn KeyValueStore>,
}

impl GapReader {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the stored gap list. A missing key yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `GapReaderError::Malformed` if the stored value is not a JSON
    /// array of strings, or `GapReaderError::Storage` if the store fails.
    pub async fn load_gap_skills(&self) -> Result<GapList, GapReaderError> {
        let Some(raw) = self.store.get(UNKNOWN_SKILLS_KEY).await? else {
            debug!("no stored gap list");
            return Ok(GapList::empty());
        };

        let skills: Vec<String> = serde_json::from_str(&raw).map_err(GapReaderError::Malformed)?;
        debug!(count = skills.len(), "loaded gap list");
        Ok(GapList::new(skills))
    }

    /// Replace the stored gap list.
    ///
    /// # Errors
    ///
    /// Returns `GapReaderError::Storage` if the store fails.
    pub async fn save_gap_skills(&self, skills: &[String]) -> Result<(), GapReaderError> {
        let raw = serde_json::Value::from(skills.to_vec()).to_string();
        self.store.set(UNKNOWN_SKILLS_KEY, &raw).await?;
        Ok(())
    }

    /// Forget the stored gap list.
    ///
    /// # Errors
    ///
    /// Returns `GapReaderError::Storage` if the store fails.
    pub async fn clear(&self) -> Result<(), GapReaderError> {
        self.store.remove(UNKNOWN_SKILLS_KEY).await?;
        Ok(())
    }
}
