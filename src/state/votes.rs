/// Vote persistence
///
/// The votes file is a flat JSON array with one object per record, fully
/// rewritten after every vote. Saved votes are matched back to records by
/// scene, person and frame ids.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::path::Path;

use super::data::{Emotion, FrameIds, Id, Record, RecordKey};
use super::json;
use crate::error::Result;

/// On-disk shape of one vote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteEntry {
    pub person_id: Id,
    pub onset_frame_id: Id,
    pub apex_frame_id: Id,
    pub offset_frame_id: Id,
    #[serde(default, deserialize_with = "lenient_emotion")]
    pub external_vote: Option<Emotion>,
    #[serde(default, deserialize_with = "lenient_emotion")]
    pub internal_vote: Option<Emotion>,
    /// Scene name
    #[serde(rename = "trich_doan")]
    pub scene: String,
    #[serde(default)]
    pub emotion: Option<Value>,
    #[serde(default)]
    pub emotion_merged: Option<Value>,
}

/// Read a vote label, treating anything that is not one of the six
/// emotions as "not voted" instead of rejecting the whole file
fn lenient_emotion<'de, D>(deserializer: D) -> std::result::Result<Option<Emotion>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    match raw {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match serde_json::from_value::<Emotion>(value.clone()) {
            Ok(emotion) => Ok(Some(emotion)),
            Err(_) => {
                log::warn!("⚠️  Ignoring unknown vote label {}", value);
                Ok(None)
            }
        },
    }
}

impl VoteEntry {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            scene: self.scene.clone(),
            person_id: self.person_id.clone(),
            frames: FrameIds {
                onset: self.onset_frame_id.clone(),
                apex: self.apex_frame_id.clone(),
                offset: self.offset_frame_id.clone(),
            },
        }
    }
}

impl From<&Record> for VoteEntry {
    fn from(record: &Record) -> Self {
        VoteEntry {
            person_id: record.person_id.clone(),
            onset_frame_id: record.frames.onset.clone(),
            apex_frame_id: record.frames.apex.clone(),
            offset_frame_id: record.frames.offset.clone(),
            external_vote: record.external_vote,
            internal_vote: record.internal_vote,
            scene: record.scene.clone(),
            emotion: record.emotion.clone(),
            emotion_merged: record.emotion_merged.clone(),
        }
    }
}

/// Load saved votes. A missing file means no votes yet.
pub fn load_votes(path: &Path) -> Result<Vec<VoteEntry>> {
    let votes: Vec<VoteEntry> = json::read_optional(path)?.unwrap_or_default();
    log::info!("🗳️  Loaded {} saved votes from {}", votes.len(), path.display());
    Ok(votes)
}

/// Rewrite the votes file from the current records
pub fn save_votes(path: &Path, records: &[Record]) -> Result<()> {
    let output: Vec<VoteEntry> = records.iter().map(VoteEntry::from).collect();
    json::write_pretty(path, &output)
}

/// Copy saved votes onto matching records. Returns how many records matched.
///
/// Records sharing one identity take the saved entries with that identity
/// in file order, so duplicates keep their own votes.
pub fn apply_votes(records: &mut [Record], saved: Vec<VoteEntry>) -> usize {
    let mut by_key: HashMap<RecordKey, VecDeque<VoteEntry>> = HashMap::new();
    for entry in saved {
        by_key.entry(entry.key()).or_default().push_back(entry);
    }

    let mut matched = 0;
    for record in records.iter_mut() {
        let entry = by_key
            .get_mut(&record.key())
            .and_then(|queue| queue.pop_front());
        if let Some(entry) = entry {
            record.external_vote = entry.external_vote;
            record.internal_vote = entry.internal_vote;
            matched += 1;
        }
    }
    matched
}
