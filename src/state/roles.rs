/// Character archetype taxonomy and the per-person role memory
///
/// Roles are remembered per (scene, person id), so every detection of the
/// same person in a scene shares one role. The roles file groups them by
/// scene:
///
/// ```json
/// { "scene": [ { "id": 3, "role_category": "Kép", "role_name": "Kép chính" } ] }
/// ```
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::data::{Id, Role};
use super::json;
use crate::error::{Result, VoteError};

/// Fixed two-level taxonomy: category -> role names
pub const ROLE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Đào", &["Đào chín", "Đào lệch", "Đào pha (ngang)"]),
    ("Kép", &["Kép chính", "Kép lệch", "Kép pha (ngang)"]),
    ("Hề", &["Hề áo trùng", "Hề áo ngắn"]),
    (
        "Lão",
        &[
            "Lão tướng",
            "Lão say",
            "Lão mốc",
            "Lão thiện",
            "Lão ác",
            "Lão bộc",
            "Lão chài",
            "Lão tiều",
        ],
    ),
    ("Mụ", &["Mụ ác", "Mụ thiện", "Mụ mối"]),
];

/// Role names of a category, or None for an unknown category
pub fn role_names(category: &str) -> Option<&'static [&'static str]> {
    ROLE_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, roles)| *roles)
}

pub fn categories() -> impl Iterator<Item = &'static str> {
    ROLE_CATEGORIES.iter().map(|(name, _)| *name)
}

impl Role {
    /// Build a role, checking it against the taxonomy
    pub fn new(category: &str, name: &str) -> Result<Self> {
        match role_names(category) {
            Some(names) if names.contains(&name) => Ok(Role {
                category: category.to_string(),
                name: name.to_string(),
            }),
            _ => Err(VoteError::UnknownRole {
                category: category.to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// A category with its first role name
    pub fn first_of(category: &str) -> Result<Self> {
        let first = role_names(category)
            .and_then(|names| names.first())
            .copied()
            .unwrap_or_default();
        Role::new(category, first)
    }
}

/// On-disk shape of one assignment
#[derive(Debug, Serialize, Deserialize)]
struct RoleEntry {
    id: Option<Id>,
    role_category: Option<String>,
    role_name: Option<String>,
}

/// In-memory role assignments keyed by scene, then person id
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoleBook {
    scenes: BTreeMap<String, BTreeMap<Id, Role>>,
}

impl RoleBook {
    /// Load the roles file. A missing file is an empty book.
    ///
    /// Entries without an id, or whose category/name is not in the taxonomy,
    /// are dropped.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: BTreeMap<String, Vec<RoleEntry>> = json::read_optional(path)?.unwrap_or_default();
        let mut book = RoleBook::default();

        for (scene, entries) in raw {
            for entry in entries {
                let (Some(id), Some(category), Some(name)) =
                    (entry.id, entry.role_category, entry.role_name)
                else {
                    continue;
                };

                match Role::new(&category, &name) {
                    Ok(role) => book.assign(&scene, id, role),
                    Err(e) => log::warn!("⚠️  Skipping role for {}/{}: {}", scene, id, e),
                }
            }
        }

        log::info!("🎭 Loaded {} role assignments from {}", book.len(), path.display());
        Ok(book)
    }

    /// Rewrite the whole roles file
    pub fn save(&self, path: &Path) -> Result<()> {
        let output: BTreeMap<&str, Vec<RoleEntry>> = self
            .scenes
            .iter()
            .filter(|(_, people)| !people.is_empty())
            .map(|(scene, people)| {
                let entries = people
                    .iter()
                    .map(|(id, role)| RoleEntry {
                        id: Some(id.clone()),
                        role_category: Some(role.category.clone()),
                        role_name: Some(role.name.clone()),
                    })
                    .collect();
                (scene.as_str(), entries)
            })
            .collect();

        json::write_pretty(path, &output)
    }

    pub fn get(&self, scene: &str, person_id: &Id) -> Option<&Role> {
        self.scenes.get(scene)?.get(person_id)
    }

    pub fn assign(&mut self, scene: &str, person_id: Id, role: Role) {
        self.scenes
            .entry(scene.to_string())
            .or_default()
            .insert(person_id, role);
    }

    pub fn clear(&mut self, scene: &str, person_id: &Id) -> Option<Role> {
        self.scenes.get_mut(scene)?.remove(person_id)
    }

    /// Number of (scene, person) pairs with a role
    pub fn len(&self) -> usize {
        self.scenes.values().map(BTreeMap::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
