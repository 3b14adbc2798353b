/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the JSON stores and the UI layer.
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// A person or frame identifier. Detection files use integers, but strings
/// are accepted and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Id::Number(n)
    }
}

/// The six emotion categories a reviewer can vote for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happiness,
    Anger,
    Love,
    Hatred,
    Sadness,
    Fear,
}

impl Emotion {
    /// Button order in the UI
    pub const ALL: [Emotion; 6] = [
        Emotion::Happiness,
        Emotion::Anger,
        Emotion::Love,
        Emotion::Hatred,
        Emotion::Sadness,
        Emotion::Fear,
    ];

    /// Stored (English) name
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Happiness => "Happiness",
            Emotion::Anger => "Anger",
            Emotion::Love => "Love",
            Emotion::Hatred => "Hatred",
            Emotion::Sadness => "Sadness",
            Emotion::Fear => "Fear",
        }
    }
}

/// Which of the two labels a vote is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteKind {
    /// What the face shows
    External,
    /// What the character feels
    Internal,
}

/// Character archetype tag: a category plus a role name inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub category: String,
    pub name: String,
}

/// Onset, apex and offset frame ids of one detected expression
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameIds {
    pub onset: Id,
    pub apex: Id,
    pub offset: Id,
}

/// One entry of a scene's `emotion_results.json`
#[derive(Debug, Clone, Deserialize)]
pub struct Detection {
    pub person_id: Id,
    pub onset_frame_id: Id,
    pub apex_frame_id: Id,
    pub offset_frame_id: Id,
    /// Detector output, carried through to the votes file untouched
    #[serde(default)]
    pub emotion: Option<Value>,
    #[serde(default)]
    pub emotion_merged: Option<Value>,
}

/// Identity of a record across sessions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub scene: String,
    pub person_id: Id,
    pub frames: FrameIds,
}

/// One reviewable sample
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Name of the scene folder the detection came from
    pub scene: String,
    pub person_id: Id,
    pub frames: FrameIds,
    /// Onset, apex and offset JPEGs
    pub image_paths: [PathBuf; 3],
    pub external_vote: Option<Emotion>,
    pub internal_vote: Option<Emotion>,
    pub role: Option<Role>,
    pub emotion: Option<Value>,
    pub emotion_merged: Option<Value>,
}

impl Record {
    /// Build an unvoted record from a detection found in `image_folder`
    pub fn from_detection(scene: &str, image_folder: &std::path::Path, detection: Detection) -> Self {
        let frames = FrameIds {
            onset: detection.onset_frame_id,
            apex: detection.apex_frame_id,
            offset: detection.offset_frame_id,
        };
        let image_paths = [
            image_folder.join(frame_filename(&detection.person_id, &frames.onset)),
            image_folder.join(frame_filename(&detection.person_id, &frames.apex)),
            image_folder.join(frame_filename(&detection.person_id, &frames.offset)),
        ];

        Record {
            scene: scene.to_string(),
            person_id: detection.person_id,
            frames,
            image_paths,
            external_vote: None,
            internal_vote: None,
            role: None,
            emotion: detection.emotion,
            emotion_merged: detection.emotion_merged,
        }
    }

    pub fn key(&self) -> RecordKey {
        RecordKey {
            scene: self.scene.clone(),
            person_id: self.person_id.clone(),
            frames: self.frames.clone(),
        }
    }

    pub fn vote(&self, kind: VoteKind) -> Option<Emotion> {
        match kind {
            VoteKind::External => self.external_vote,
            VoteKind::Internal => self.internal_vote,
        }
    }

    pub fn set_vote(&mut self, kind: VoteKind, emotion: Emotion) {
        match kind {
            VoteKind::External => self.external_vote = Some(emotion),
            VoteKind::Internal => self.internal_vote = Some(emotion),
        }
    }

    /// Both votes have been cast
    pub fn is_resolved(&self) -> bool {
        self.external_vote.is_some() && self.internal_vote.is_some()
    }
}

/// File name of a frame: `person_<id>_frame_<frame_id>.jpg`
pub fn frame_filename(person_id: &Id, frame_id: &Id) -> String {
    format!("person_{}_frame_{}.jpg", person_id, frame_id)
}
