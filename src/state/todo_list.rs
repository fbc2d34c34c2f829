//! To-do list backed by a JSON file

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::error::AppError;

/// Ordered list of task descriptions, saved after every change
#[derive(Debug, Clone)]
pub struct TodoList {
    path: PathBuf,
    tasks: Vec<String>,
}

impl TodoList {
    /// Load the list from `path`; a missing file means an empty list
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();

        let tasks: Vec<String> = match fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No to-do file at {}, starting empty", path.display());
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, tasks })
    }

    pub fn tasks(&self) -> &[String] {
        &self.tasks
    }

    pub async fn add(&mut self, task: String) -> Result<(), AppError> {
        debug!("Adding task: {}", task);
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        self.commit(tasks).await
    }

    /// Remove the first entry equal to `task`. Returns whether one was found.
    pub async fn remove(&mut self, task: &str) -> Result<bool, AppError> {
        let mut tasks = self.tasks.clone();
        let removed = match tasks.iter().position(|t| t == task) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        };
        self.commit(tasks).await?;
        Ok(removed)
    }

    /// Replace the whole list with `new_order`
    pub async fn reorder(&mut self, new_order: Vec<String>) -> Result<(), AppError> {
        self.commit(new_order).await
    }

    /// Write `tasks` to disk, then adopt them. A failed write keeps the old list.
    async fn commit(&mut self, tasks: Vec<String>) -> Result<(), AppError> {
        let contents = serde_json::to_string(&tasks)?;
        fs::write(&self.path, contents).await?;
        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        self.tasks = tasks;
        Ok(())
    }
}
