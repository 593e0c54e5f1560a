//! The task store: a flat JSON file holding every task record.
//!
//! Every public operation is a full load -> transform -> rewrite cycle.
//! The store holds no in-memory state between calls; the file is the
//! single source of truth and is re-read on every operation, so ids are
//! never cached. The whole-file rewrite is the unit of atomicity — there
//! is no temp-file-and-rename step, and a reader tolerates a corrupt
//! file by treating the store as empty.

use crate::error::{StoreError, StoreResult};
use crate::types::{Status, Task, TaskDraft, TaskUpdate};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Handle to the on-disk task collection.
///
/// Explicitly constructed with a file path and passed to every caller;
/// there is no process-wide store.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Connect to the store at the given path, creating an empty file if
    /// none exists. An existing file is left untouched and is not parsed
    /// here.
    pub fn connect<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if path.is_file() {
            info!(path = %path.display(), "opened existing task store");
        } else {
            fs::File::create(&path)?;
            info!(path = %path.display(), "created new task store");
        }
        Ok(Self { path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks in stored order.
    ///
    /// A file that does not parse as a JSON task array (including the
    /// empty file `connect` creates) reads as an empty store. I/O errors
    /// propagate.
    pub fn tasks(&self) -> StoreResult<Vec<Task>> {
        let raw = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                debug!(path = %self.path.display(), %err, "store unreadable, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Next free id: max existing id + 1, or 1 for an empty store.
    /// Recomputed from the file on every call.
    pub fn next_id(&self) -> StoreResult<u64> {
        let max = self.tasks()?.iter().map(|t| t.id).max().unwrap_or(0);
        Ok(max + 1)
    }

    /// Look up a task by id.
    pub fn get(&self, id: u64) -> StoreResult<Task> {
        self.tasks()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::not_found(id))
    }

    /// Whether a task with the given id is present.
    pub fn exists(&self, id: u64) -> StoreResult<bool> {
        Ok(self.tasks()?.iter().any(|t| t.id == id))
    }

    /// Append a new task. The store assigns the id and the record starts
    /// as not-done regardless of caller intent.
    pub fn add(&self, draft: TaskDraft) -> StoreResult<()> {
        let mut tasks = self.tasks()?;
        let id = self.next_id()?;
        tasks.push(draft.into_task(id));
        self.rewrite(&tasks)?;
        info!(id, "task added");
        Ok(())
    }

    /// Edit a task in place. Present, non-empty update values overwrite
    /// the corresponding fields; absent or empty values leave them
    /// unchanged. Fails with `NotFound` (writing nothing) when the id
    /// does not exist; otherwise the whole list is rewritten with the
    /// modified record substituted in place.
    pub fn edit(&self, id: u64, update: &TaskUpdate) -> StoreResult<()> {
        let mut task = self.get(id)?;
        update.apply_to(&mut task);

        let tasks: Vec<Task> = self
            .tasks()?
            .into_iter()
            .map(|t| if t.id == id { task.clone() } else { t })
            .collect();
        self.rewrite(&tasks)?;
        info!(id, "task edited");
        Ok(())
    }

    /// Mark a task as done. Convenience wrapper over [`edit`](Self::edit);
    /// the reverse transition is reachable only through a generic edit.
    pub fn mark_done(&self, id: u64) -> StoreResult<()> {
        self.edit(
            id,
            &TaskUpdate {
                status: Some(Status::Done),
                ..Default::default()
            },
        )
    }

    /// Remove the task with the given id. Fails with `NotFound` (writing
    /// nothing) when absent.
    pub fn delete_by_id(&self, id: u64) -> StoreResult<()> {
        if !self.exists(id)? {
            return Err(StoreError::not_found(id));
        }
        let tasks: Vec<Task> = self
            .tasks()?
            .into_iter()
            .filter(|t| t.id != id)
            .collect();
        self.rewrite(&tasks)?;
        info!(id, "task deleted");
        Ok(())
    }

    /// Remove every task whose category matches exactly (case-sensitive).
    /// Returns the number removed; zero matches is not an error.
    pub fn delete_by_category(&self, category: &str) -> StoreResult<usize> {
        let tasks = self.tasks()?;
        let before = tasks.len();
        let kept: Vec<Task> = tasks
            .into_iter()
            .filter(|t| t.category != category)
            .collect();
        let removed = before - kept.len();
        self.rewrite(&kept)?;
        info!(category, removed, "tasks deleted by category");
        Ok(removed)
    }

    /// Keyword search. The query matches a task when, lowercased, it
    /// equals one whitespace-delimited token of the title, or equals the
    /// category (case-insensitive), or equals the stored status tag.
    /// Field/token equality, not substring match. Stored order preserved.
    pub fn search(&self, query: &str) -> StoreResult<Vec<Task>> {
        let query = query.to_lowercase();
        Ok(self
            .tasks()?
            .into_iter()
            .filter(|t| {
                t.title
                    .to_lowercase()
                    .split_whitespace()
                    .any(|word| word == query)
                    || t.category.to_lowercase() == query
                    || t.status.as_str() == query
            })
            .collect())
    }

    /// Rewrite the whole backing file with the given records.
    fn rewrite(&self, tasks: &[Task]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
