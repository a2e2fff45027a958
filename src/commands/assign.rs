use std::path::Path;

use crate::error::{HomeplanError, Result};
use crate::model::Period;
use crate::output::{self, Format};
use crate::store::planner;

pub fn assign(dir: &Path, period: Period, id: String, format: Format) -> Result<()> {
    toggle(dir, period, id, true, format)
}

pub fn unassign(dir: &Path, period: Period, id: String, format: Format) -> Result<()> {
    toggle(dir, period, id, false, format)
}

fn toggle(dir: &Path, period: Period, id: String, included: bool, format: Format) -> Result<()> {
    let mut planner = planner::open_dir(dir)?;
    if planner.tasks.get(&id).is_none() {
        return Err(HomeplanError::TaskNotFound(id));
    }
    planner
        .schedule
        .toggle(&mut planner.kv, period, &id, included)?;
    output::print_grid(&planner.grid(), format)
}
