use serde::Serialize;

use crate::budget;
use crate::model::{Category, Period, Task};
use crate::store::schedule::Schedule;

/// Renderable Category x Period matrix with per-period budget totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub limit: u32,
    pub periods: Vec<PeriodSummary>,
    pub rows: Vec<GridRow>,
}

/// Period-wide totals; the over-limit flag covers the whole column even
/// though renderers shade it cell by cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    pub period: Period,
    pub total_minutes: u32,
    pub over_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub category: Category,
    /// One cell per period, in `Period::ALL` order.
    pub cells: Vec<Vec<GridEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridEntry {
    pub id: String,
    pub name: String,
    pub minutes: u32,
}

/// Printable schedule, or an explicit empty-state marker when nothing is
/// assigned anywhere.
#[derive(Debug, Clone, PartialEq)]
pub enum PrintPlan {
    Empty,
    Sections(Vec<PrintSection>),
}

/// One non-empty period, with its tasks grouped by category in canonical
/// order. Categories without assigned tasks are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintSection {
    pub period: Period,
    pub groups: Vec<PrintGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintGroup {
    pub category: Category,
    pub task_names: Vec<String>,
}

/// Compose tasks, schedule, and budget into the schedule grid. Cell (c, p)
/// holds the tasks of category `c` assigned to period `p`; the over-limit
/// flag is computed per period over all categories.
pub fn build_grid(tasks: &[Task], schedule: &Schedule, limit: u32) -> Grid {
    let resolve = |id: &str| tasks.iter().find(|t| t.id == id);

    let periods = Period::ALL
        .iter()
        .map(|&period| {
            let total = budget::total_minutes(schedule.assigned(period), resolve);
            PeriodSummary {
                period,
                total_minutes: total,
                over_limit: budget::is_over_limit(total, limit),
            }
        })
        .collect();

    let rows = Category::ALL
        .iter()
        .map(|&category| {
            let cells = Period::ALL
                .iter()
                .map(|&period| {
                    let assigned = schedule.assigned(period);
                    tasks
                        .iter()
                        .filter(|t| t.category == category.label())
                        .filter(|t| assigned.iter().any(|id| *id == t.id))
                        .map(|t| GridEntry {
                            id: t.id.clone(),
                            name: t.name.clone(),
                            minutes: t.minutes,
                        })
                        .collect()
                })
                .collect();
            GridRow { category, cells }
        })
        .collect();

    Grid {
        limit,
        periods,
        rows,
    }
}

/// Build the print view: one section per period with at least one assigned
/// task, in period order. An id that no longer resolves contributes
/// nothing.
pub fn build_print_sections(tasks: &[Task], schedule: &Schedule) -> PrintPlan {
    let mut sections = Vec::new();

    for &period in &Period::ALL {
        let assigned: Vec<&Task> = schedule
            .assigned(period)
            .iter()
            .filter_map(|id| tasks.iter().find(|t| t.id == *id))
            .collect();
        if assigned.is_empty() {
            continue;
        }

        let groups = Category::ALL
            .iter()
            .filter_map(|&category| {
                let task_names: Vec<String> = assigned
                    .iter()
                    .filter(|t| t.category == category.label())
                    .map(|t| t.name.clone())
                    .collect();
                if task_names.is_empty() {
                    None
                } else {
                    Some(PrintGroup {
                        category,
                        task_names,
                    })
                }
            })
            .collect();

        sections.push(PrintSection { period, groups });
    }

    if sections.is_empty() {
        PrintPlan::Empty
    } else {
        PrintPlan::Sections(sections)
    }
}
