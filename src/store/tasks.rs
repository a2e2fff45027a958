use std::collections::HashSet;

use crate::error::Result;
use crate::model::{Category, Frequency, Task};
use crate::seed;
use crate::store::TASKS_KEY;
use crate::store::kv::KvStore;

/// The authoritative task list, mirrored to the `maintenanceTasks` record.
/// Every mutating operation persists before returning.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

/// Fields a task edit may touch. Category and id are immutable after
/// creation, so they have no slot here.
#[derive(Debug, Default, Clone)]
pub struct TaskEdit {
    /// Trimmed before applying; an empty result keeps the old name.
    pub name: Option<String>,
    /// Raw user input. Anything that does not parse as a positive integer
    /// keeps the stored value.
    pub minutes: Option<String>,
    pub frequency: Option<Frequency>,
}

/// Coerce any task whose category is outside the fixed set to the default
/// category. Pure; passes in-set tasks through unchanged.
pub fn normalize(tasks: Vec<Task>) -> Vec<Task> {
    tasks
        .into_iter()
        .map(|mut task| {
            if Category::from_label(&task.category).is_none() {
                task.category = Category::default().label().to_string();
            }
            task
        })
        .collect()
}

/// Parse the persisted task record as-is. Missing or malformed data yields
/// an empty list, never an error.
pub fn load_raw<S: KvStore>(kv: &S) -> Vec<Task> {
    kv.get(TASKS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

impl TaskStore {
    /// Load and normalize the persisted task list.
    pub fn load<S: KvStore>(kv: &S) -> Self {
        Self {
            tasks: normalize(load_raw(kv)),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// The set of live task ids, for pruning schedule references.
    pub fn ids(&self) -> HashSet<String> {
        self.tasks.iter().map(|t| t.id.clone()).collect()
    }

    /// Populate the default catalog when the store is empty. Returns
    /// whether seeding happened.
    pub fn seed_if_empty<S: KvStore>(&mut self, kv: &mut S) -> Result<bool> {
        if !self.tasks.is_empty() {
            return Ok(false);
        }
        self.tasks = seed::default_tasks();
        self.persist(kv)?;
        Ok(true)
    }

    /// Create a task. Returns `None` without touching the store when the
    /// name is empty, the minutes are zero, or the category is empty; an
    /// out-of-set category silently becomes the default instead.
    pub fn add<S: KvStore>(
        &mut self,
        kv: &mut S,
        name: &str,
        minutes: u32,
        category: &str,
        frequency: Frequency,
    ) -> Result<Option<Task>> {
        let name = name.trim();
        if name.is_empty() || minutes == 0 || category.is_empty() {
            return Ok(None);
        }
        let category = Category::from_label(category).unwrap_or_default();
        let task = Task::new(name, minutes, category.label(), frequency, true);
        self.tasks.push(task.clone());
        self.persist(kv)?;
        Ok(Some(task))
    }

    /// Apply an edit to the task with the given id. An unknown id is a
    /// silent no-op (`false`); invalid field values keep the old values.
    pub fn update<S: KvStore>(&mut self, kv: &mut S, id: &str, edit: TaskEdit) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        if let Some(name) = edit.name {
            let name = name.trim();
            if !name.is_empty() {
                task.name = name.to_string();
            }
        }
        if let Some(raw) = edit.minutes
            && let Ok(minutes) = raw.trim().parse::<u32>()
            && minutes > 0
        {
            task.minutes = minutes;
        }
        if let Some(frequency) = edit.frequency {
            task.frequency = frequency;
        }
        self.persist(kv)?;
        Ok(true)
    }

    /// Delete the task with the given id; no-op if absent. The caller is
    /// responsible for pruning the schedule afterwards.
    pub fn remove<S: KvStore>(&mut self, kv: &mut S, id: &str) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist(kv)?;
        Ok(true)
    }

    fn persist<S: KvStore>(&self, kv: &mut S) -> Result<()> {
        kv.set(TASKS_KEY, &serde_json::to_string(&self.tasks)?)
    }
}
