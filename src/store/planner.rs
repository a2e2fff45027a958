use std::path::Path;

use crate::error::Result;
use crate::plan::{self, Grid, PrintPlan};
use crate::store::kv::{FileStore, KvStore};
use crate::store::limit;
use crate::store::schedule::Schedule;
use crate::store::tasks::TaskStore;

/// Application context: the key-value store plus the loaded collections,
/// constructed once at startup and threaded through the command layer.
pub struct Planner<S: KvStore> {
    pub kv: S,
    pub tasks: TaskStore,
    pub schedule: Schedule,
}

impl<S: KvStore> Planner<S> {
    /// Load both collections, seed the default catalog on first run, and
    /// drop schedule references to tasks that no longer exist.
    pub fn open(mut kv: S) -> Result<Self> {
        let mut tasks = TaskStore::load(&kv);
        tasks.seed_if_empty(&mut kv)?;
        let mut schedule = Schedule::load(&kv);
        schedule.prune(&mut kv, &tasks.ids())?;
        Ok(Self {
            kv,
            tasks,
            schedule,
        })
    }

    /// Delete a task and cascade into the schedule so no period keeps a
    /// reference to it.
    pub fn remove_task(&mut self, id: &str) -> Result<bool> {
        if !self.tasks.remove(&mut self.kv, id)? {
            return Ok(false);
        }
        self.schedule.prune(&mut self.kv, &self.tasks.ids())?;
        Ok(true)
    }

    pub fn limit(&self) -> u32 {
        limit::load(&self.kv)
    }

    pub fn set_limit(&mut self, minutes: u32) -> Result<u32> {
        limit::save(&mut self.kv, minutes)
    }

    pub fn grid(&self) -> Grid {
        plan::build_grid(self.tasks.tasks(), &self.schedule, self.limit())
    }

    pub fn print_plan(&self) -> PrintPlan {
        plan::build_print_sections(self.tasks.tasks(), &self.schedule)
    }
}

/// Open the planner over the on-disk store rooted at `dir`.
pub fn open_dir(dir: &Path) -> Result<Planner<FileStore>> {
    Planner::open(FileStore::open(dir)?)
}
