use std::path::Path;

use crate::error::{HomeplanError, Result};
use crate::model::Frequency;
use crate::output::{self, Format};
use crate::store::planner;
use crate::store::tasks::TaskEdit;

pub fn run(
    dir: &Path,
    id: String,
    name: Option<String>,
    minutes: Option<String>,
    frequency: Option<Frequency>,
    format: Format,
) -> Result<()> {
    let mut planner = planner::open_dir(dir)?;
    let edit = TaskEdit {
        name,
        minutes,
        frequency,
    };
    if !planner.tasks.update(&mut planner.kv, &id, edit)? {
        return Err(HomeplanError::TaskNotFound(id));
    }
    if let Some(task) = planner.tasks.get(&id) {
        output::print_task(task, format)?;
    }
    Ok(())
}
