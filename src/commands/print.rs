use std::path::Path;

use crate::error::Result;
use crate::output::{self, Format};
use crate::store::planner;

pub fn run(dir: &Path, format: Format) -> Result<()> {
    let planner = planner::open_dir(dir)?;
    output::print_plan(&planner.print_plan(), format)
}
