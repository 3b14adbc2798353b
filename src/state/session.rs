/// A review session: the library plus the cursor over it.
///
/// All reviewer actions (voting, role selection, navigation) go through
/// here so the GUI only maps widgets to calls.
use super::data::{Emotion, Record, Role, VoteKind};
use super::library::Library;
use super::roles;
use super::sequencer::Sequencer;
use crate::error::{Result, VoteError};

/// Counter shown under the frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based position in the visiting order
    pub position: usize,
    pub total: usize,
    pub remaining: usize,
}

#[derive(Debug)]
pub struct Session {
    library: Library,
    sequencer: Sequencer,
}

impl Session {
    pub fn new(library: Library) -> Self {
        if library.is_empty() {
            log::warn!("⚠️  No samples found, nothing to vote on");
        }
        let sequencer = Sequencer::new(library.len());
        Session { library, sequencer }
    }

    #[cfg(test)]
    pub fn library(&self) -> &Library {
        &self.library
    }

    #[cfg(test)]
    pub fn current_index(&self) -> Option<usize> {
        self.sequencer.current()
    }

    pub fn current(&self) -> Option<&Record> {
        self.library.record(self.sequencer.current()?)
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.sequencer.position() + 1,
            total: self.sequencer.len(),
            remaining: self.library.remaining(),
        }
    }

    pub fn next(&mut self) -> bool {
        self.sequencer.advance()
    }

    pub fn previous(&mut self) -> bool {
        self.sequencer.retreat()
    }

    /// Jump to the first sample (from the start of the order) missing a vote
    pub fn goto_first_unvoted(&mut self) -> bool {
        let library = &self.library;
        self.sequencer.seek_first_unresolved(|index| {
            library.record(index).map_or(true, Record::is_resolved)
        })
    }

    /// Vote on the current sample. Once both votes are in, move on to the
    /// next sample.
    pub fn cast_vote(&mut self, kind: VoteKind, emotion: Emotion) -> Result<()> {
        let Some(index) = self.sequencer.current() else {
            return Ok(());
        };

        self.library.set_vote(index, kind, emotion)?;

        if self.library.record(index).is_some_and(Record::is_resolved) {
            self.sequencer.advance();
        }
        Ok(())
    }

    /// Pick a role category for the current sample. `None` is the
    /// placeholder entry and clears the role. A real category keeps the
    /// current role name when it belongs to that category, otherwise the
    /// category's first role name is used.
    pub fn select_category(&mut self, category: Option<&str>) -> Result<()> {
        let Some(index) = self.sequencer.current() else {
            return Ok(());
        };

        let role = match category {
            None => None,
            Some(category) => {
                let current_name = self
                    .library
                    .record(index)
                    .and_then(|r| r.role.as_ref())
                    .map(|role| role.name.clone());

                let keeps_name = |name: &str| {
                    roles::role_names(category).is_some_and(|names| names.contains(&name))
                };

                match current_name {
                    Some(name) if keeps_name(&name) => Some(Role::new(category, &name)?),
                    _ => Some(Role::first_of(category)?),
                }
            }
        };

        self.library.set_role(index, role)
    }

    /// Pick a role name inside the current sample's category
    pub fn select_role_name(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.sequencer.current() else {
            return Ok(());
        };

        let category = self
            .library
            .record(index)
            .and_then(|r| r.role.as_ref())
            .map(|role| role.category.clone())
            .ok_or_else(|| VoteError::UnknownRole {
                category: String::new(),
                name: name.to_string(),
            })?;

        let role = Role::new(&category, name)?;
        self.library.set_role(index, Some(role))
    }
}
