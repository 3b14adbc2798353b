use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::{Detection, Emotion, Record, Role, VoteKind};
use super::json;
use super::roles::RoleBook;
use super::votes;
use crate::config::AppConfig;
use crate::error::{Result, VoteError};

/// Detection listing inside each scene folder
pub const DETECTIONS_FILE: &str = "emotion_results.json";

/// Frame folder inside each scene folder
pub const IMAGES_DIR: &str = "segment_images";

/// The Library holds every record of the dataset together with the
/// vote and role files they are persisted to.
pub struct Library {
    records: Vec<Record>,
    roles: RoleBook,
    votes_path: PathBuf,
    roles_path: PathBuf,
}

impl Library {
    /// Scan the data root and merge in previously saved votes and roles.
    pub fn open(config: &AppConfig) -> Result<Self> {
        Self::open_paths(&config.data_root, &config.votes_path, &config.roles_path)
    }

    pub fn open_paths(data_root: &Path, votes_path: &Path, roles_path: &Path) -> Result<Self> {
        let mut records = scan_scenes(data_root)?;

        let saved = votes::load_votes(votes_path)?;
        let matched = votes::apply_votes(&mut records, saved);

        let roles = RoleBook::load(roles_path)?;
        for record in records.iter_mut() {
            record.role = roles.get(&record.scene, &record.person_id).cloned();
        }

        log::info!(
            "📁 Library ready: {} samples, {} with saved votes",
            records.len(),
            matched
        );

        Ok(Library {
            records,
            roles,
            votes_path: votes_path.to_path_buf(),
            roles_path: roles_path.to_path_buf(),
        })
    }

    #[cfg(test)]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count of records still missing at least one vote
    pub fn remaining(&self) -> usize {
        self.records.iter().filter(|r| !r.is_resolved()).count()
    }

    /// Record a vote and rewrite the votes file
    pub fn set_vote(&mut self, index: usize, kind: VoteKind, emotion: Emotion) -> Result<()> {
        let Some(record) = self.records.get_mut(index) else {
            return Ok(());
        };
        record.set_vote(kind, emotion);
        log::debug!(
            "🗳️  {:?} vote {} for {}/person {}",
            kind,
            emotion.as_str(),
            record.scene,
            record.person_id
        );

        votes::save_votes(&self.votes_path, &self.records)
    }

    /// Set or clear the role of a record's person and rewrite the roles file.
    ///
    /// Every record of the same person in the same scene picks up the change.
    pub fn set_role(&mut self, index: usize, role: Option<Role>) -> Result<()> {
        let Some(record) = self.records.get(index) else {
            return Ok(());
        };
        let scene = record.scene.clone();
        let person_id = record.person_id.clone();

        match &role {
            Some(role) => self.roles.assign(&scene, person_id.clone(), role.clone()),
            None => {
                self.roles.clear(&scene, &person_id);
            }
        }

        for record in self
            .records
            .iter_mut()
            .filter(|r| r.scene == scene && r.person_id == person_id)
        {
            record.role = role.clone();
        }

        self.roles.save(&self.roles_path)
    }
}

/// Build records from every scene folder under `data_root`.
///
/// A folder counts as a scene only if it holds both the detection listing
/// and the frame folder. Scenes are read in name order.
pub fn scan_scenes(data_root: &Path) -> Result<Vec<Record>> {
    if !data_root.is_dir() {
        return Err(VoteError::DataRootMissing(data_root.to_path_buf()));
    }

    let mut records = Vec::new();

    for entry in WalkDir::new(data_root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let scene_dir = entry.path();
        if !scene_dir.is_dir() {
            continue;
        }

        let detections_path = scene_dir.join(DETECTIONS_FILE);
        let image_folder = scene_dir.join(IMAGES_DIR);
        if !(detections_path.is_file() && image_folder.is_dir()) {
            log::debug!("Skipping {}: not a scene folder", scene_dir.display());
            continue;
        }

        let scene = entry.file_name().to_string_lossy().to_string();
        let detections: Vec<Detection> = json::read(&detections_path)?;
        log::info!("🎬 Scene {}: {} detections", scene, detections.len());

        records.extend(
            detections
                .into_iter()
                .map(|d| Record::from_detection(&scene, &image_folder, d)),
        );
    }

    Ok(records)
}

// Implement Debug for better error messages
impl std::fmt::Debug for Library {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Library")
            .field("records", &self.records.len())
            .field("votes_path", &self.votes_path)
            .field("roles_path", &self.roles_path)
            .finish()
    }
}
