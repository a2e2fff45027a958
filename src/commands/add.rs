use std::path::Path;

use crate::error::{HomeplanError, Result};
use crate::model::{Category, Frequency};
use crate::output::{self, Format};
use crate::store::planner;

pub fn run(
    dir: &Path,
    name: String,
    minutes: u32,
    category: Category,
    frequency: Frequency,
    format: Format,
) -> Result<()> {
    let mut planner = planner::open_dir(dir)?;
    let task = planner
        .tasks
        .add(&mut planner.kv, &name, minutes, category.label(), frequency)?
        .ok_or(HomeplanError::TaskRejected(
            "name must be non-empty and minutes positive",
        ))?;
    output::print_task(&task, format)
}
