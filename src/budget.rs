use crate::model::Task;

/// Sum the minutes of every task id that still resolves. Stale ids are
/// dropped, not errors, and the sum does not depend on id order.
pub fn total_minutes<'a, F>(task_ids: &[String], resolve: F) -> u32
where
    F: Fn(&str) -> Option<&'a Task>,
{
    task_ids
        .iter()
        .filter_map(|id| resolve(id))
        .map(|task| task.minutes)
        .sum()
}

/// Strictly greater: a period sitting exactly at the limit is not over.
pub fn is_over_limit(total: u32, limit: u32) -> bool {
    total > limit
}
