use crate::error::{NextTagError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Created and pushed tags are recorded so callers can assert on them.
pub struct MockRepository {
    tags: Mutex<HashMap<String, Oid>>,
    head: Option<Oid>,
    remotes: Vec<String>,
    pushed: Mutex<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Mutex::new(HashMap::new()),
            head: None,
            remotes: vec!["origin".to_string()],
            pushed: Mutex::new(Vec::new()),
        }
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        if let Ok(tags) = self.tags.get_mut() {
            tags.insert(name.into(), oid);
        }
    }

    /// Set the commit HEAD points to
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// OID a tag points to, if it exists
    pub fn tag_oid(&self, name: &str) -> Option<Oid> {
        self.tags.lock().ok()?.get(name).copied()
    }

    /// (remote, tag) pairs pushed so far
    pub fn pushed(&self) -> Vec<(String, String)> {
        self.pushed
            .lock()
            .map(|pushed| pushed.clone())
            .unwrap_or_default()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> NextTagError {
    NextTagError::tag("mock repository lock poisoned")
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .tags
            .lock()
            .map_err(|_| poisoned())?
            .keys()
            .cloned()
            .collect();
        tags.sort();
        Ok(tags)
    }

    fn head_oid(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| NextTagError::tag("Cannot resolve HEAD: no commits"))
    }

    fn create_tag(&self, name: &str, oid: Oid) -> Result<()> {
        let mut tags = self.tags.lock().map_err(|_| poisoned())?;
        if tags.contains_key(name) {
            return Err(NextTagError::tag(format!(
                "Cannot create tag '{}': tag already exists",
                name
            )));
        }
        tags.insert(name.to_string(), oid);
        Ok(())
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()> {
        if !self.remotes.iter().any(|r| r == remote) {
            return Err(NextTagError::remote(format!(
                "Cannot find remote '{}'",
                remote
            )));
        }

        let tags = self.tags.lock().map_err(|_| poisoned())?;
        let mut pushed = self.pushed.lock().map_err(|_| poisoned())?;
        for tag in tag_names {
            if !tags.contains_key(*tag) {
                return Err(NextTagError::remote(format!(
                    "Push failed: tag '{}' does not exist",
                    tag
                )));
            }
            pushed.push((remote.to_string(), tag.to_string()));
        }
        Ok(())
    }
}
