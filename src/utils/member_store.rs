// Flat JSON store of group members

use crate::error::{MeetingPointError, Result};
use crate::models::Member;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Outcome of registering a member
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
    Added,
    /// A member with the same name (ignoring case) was overwritten
    Updated,
}

/// Counters shown next to the member list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub members: usize,
    pub with_email: usize,
    pub with_location: usize,
}

/// Members persisted as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct MemberStore {
    path: PathBuf,
    members: Vec<Member>,
}

impl MemberStore {
    /// Loads members from `path`; a missing file yields an empty store
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let members: Vec<Member> = match File::open(&path) {
            Ok(file) => serde_json::from_reader(BufReader::new(file))
                .map_err(|e| MeetingPointError::json(&path, e))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No member file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(MeetingPointError::io(&path, e)),
        };

        log::info!("Loaded {} members from {}", members.len(), path.display());
        Ok(Self { path, members })
    }

    /// Writes all members back, creating the parent directory if needed
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| MeetingPointError::io(parent, e))?;
        }

        let file = File::create(&self.path).map_err(|e| MeetingPointError::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.members)
            .map_err(|e| MeetingPointError::json(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| MeetingPointError::io(&self.path, e))?;

        log::info!("Saved {} members to {}", self.members.len(), self.path.display());
        Ok(())
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Finds a member by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.same_name(name))
    }

    /// Adds a member, or updates address, email and coordinates of the
    /// member with the same name. The stored name keeps its original casing;
    /// stored coordinates are only replaced by a complete new location.
    pub fn upsert(&mut self, member: Member) -> Result<Upserted> {
        if member.name.trim().is_empty() {
            return Err(MeetingPointError::InvalidMember("name is required".into()));
        }
        if member.address.trim().is_empty() {
            return Err(MeetingPointError::InvalidMember(format!(
                "address is required for {}",
                member.name
            )));
        }

        match self.members.iter_mut().find(|m| m.same_name(&member.name)) {
            Some(existing) => {
                log::warn!("{} already exists, updating their details", existing.name);
                let new_location = member.location();
                existing.address = member.address;
                existing.email = member.email;
                if let Some(location) = new_location {
                    existing.latitude = Some(location.latitude);
                    existing.longitude = Some(location.longitude);
                }
                Ok(Upserted::Updated)
            }
            None => {
                log::info!("Added {}", member.name);
                self.members.push(member);
                Ok(Upserted::Added)
            }
        }
    }

    /// Removes the member with this name, ignoring case
    pub fn remove(&mut self, name: &str) -> Result<Member> {
        let index = self
            .members
            .iter()
            .position(|m| m.same_name(name))
            .ok_or_else(|| MeetingPointError::UnknownMember(name.to_string()))?;

        log::info!("Removed {name}");
        Ok(self.members.remove(index))
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            members: self.members.len(),
            with_email: self
                .members
                .iter()
                .filter(|m| m.email.as_deref().is_some_and(|e| !e.is_empty()))
                .count(),
            with_location: self.members.iter().filter(|m| m.has_location()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = MemberStore::open(dir.path().join("friends.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("friends.json");
        fs::write(&path, "{ not json").unwrap();

        let err = MemberStore::open(&path).unwrap_err();
        assert!(matches!(err, MeetingPointError::Json { .. }));
    }

    #[test]
    fn test_upsert_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut store = MemberStore::open(dir.path().join("friends.json")).unwrap();

        let alice = Member::located("Alice", "1 Rue de Rivoli", Location::new(48.8606, 2.3376));
        assert_eq!(store.upsert(alice).unwrap(), Upserted::Added);

        let moved = Member::located("ALICE", "60 Rue Charlot", Location::new(48.8625, 2.3630))
            .with_email("alice@example.com");
        assert_eq!(store.upsert(moved).unwrap(), Upserted::Updated);

        assert_eq!(store.len(), 1);
        let stored = store.get("alice").unwrap();
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.address, "60 Rue Charlot");
        assert_eq!(stored.location(), Some(Location::new(48.8625, 2.3630)));
    }

    #[test]
    fn test_upsert_requires_name_and_address() {
        let dir = tempdir().unwrap();
        let mut store = MemberStore::open(dir.path().join("friends.json")).unwrap();

        assert!(store.upsert(Member::new("", "somewhere")).is_err());
        assert!(store.upsert(Member::new("Bob", "  ")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_and_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("friends.json");

        let mut store = MemberStore::open(&path).unwrap();
        store
            .upsert(Member::located("Alice", "a", Location::new(48.80, 2.30)).with_email("a@x.org"))
            .unwrap();
        store.upsert(Member::new("Bob", "b")).unwrap();
        store.save().unwrap();

        let reopened = MemberStore::open(&path).unwrap();
        assert_eq!(reopened.members(), store.members());
        assert_eq!(
            reopened.stats(),
            StoreStats {
                members: 2,
                with_email: 1,
                with_location: 1,
            }
        );
    }

    #[test]
    fn test_remove_ignores_case() {
        let dir = tempdir().unwrap();
        let mut store = MemberStore::open(dir.path().join("friends.json")).unwrap();
        store.upsert(Member::new("Alice", "a")).unwrap();

        assert!(matches!(
            store.remove("Bob"),
            Err(MeetingPointError::UnknownMember(_))
        ));
        assert_eq!(store.remove("aLiCe").unwrap().name, "Alice");
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_without_coordinates_keeps_location() {
        let dir = tempdir().unwrap();
        let mut store = MemberStore::open(dir.path().join("friends.json")).unwrap();
        let home = Location::new(48.8606, 2.3376);
        store
            .upsert(Member::located("Alice", "1 Rue de Rivoli", home))
            .unwrap();

        let outcome = store
            .upsert(Member::new("alice", "2 Rue de Rivoli").with_email("alice@example.com"))
            .unwrap();
        assert_eq!(outcome, Upserted::Updated);

        let stored = store.get("Alice").unwrap();
        assert_eq!(stored.address, "2 Rue de Rivoli");
        assert_eq!(stored.email.as_deref(), Some("alice@example.com"));
        assert_eq!(stored.location(), Some(home));
    }
}
