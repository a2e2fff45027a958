use std::collections::{BTreeMap, HashSet};

use crate::error::Result;
use crate::model::Period;
use crate::store::SCHEDULE_KEY;
use crate::store::kv::KvStore;

/// Period-to-task-id mapping, mirrored to the `maintenanceSchedule` record.
///
/// Holds ids only, never task objects: resolution goes through the task
/// store, and deleting a task reduces to filtering these lists.
#[derive(Debug, Default)]
pub struct Schedule {
    periods: BTreeMap<Period, Vec<String>>,
}

impl Schedule {
    /// Load the persisted mapping; missing or malformed data yields an
    /// empty schedule.
    pub fn load<S: KvStore>(kv: &S) -> Self {
        let periods = kv
            .get(SCHEDULE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { periods }
    }

    /// Current membership list for a period, empty if unseen.
    pub fn assigned(&self, period: Period) -> &[String] {
        self.periods.get(&period).map(Vec::as_slice).unwrap_or_default()
    }

    /// Replace a period's membership list wholesale.
    pub fn set_assigned<S: KvStore>(
        &mut self,
        kv: &mut S,
        period: Period,
        ids: Vec<String>,
    ) -> Result<()> {
        self.periods.insert(period, ids);
        self.persist(kv)
    }

    /// Add or remove one task in a period. Adding is idempotent — an id
    /// appears at most once per period; removing drops every occurrence.
    pub fn toggle<S: KvStore>(
        &mut self,
        kv: &mut S,
        period: Period,
        task_id: &str,
        included: bool,
    ) -> Result<()> {
        let ids = self.periods.entry(period).or_default();
        if included {
            if !ids.iter().any(|id| id == task_id) {
                ids.push(task_id.to_string());
            }
        } else {
            ids.retain(|id| id != task_id);
        }
        self.persist(kv)
    }

    /// Drop every id not in `valid` from every period. Must run after any
    /// task deletion so the schedule never references a missing task.
    pub fn prune<S: KvStore>(&mut self, kv: &mut S, valid: &HashSet<String>) -> Result<()> {
        for period in Period::ALL {
            if let Some(ids) = self.periods.get_mut(&period) {
                ids.retain(|id| valid.contains(id));
            }
        }
        self.persist(kv)
    }

    fn persist<S: KvStore>(&self, kv: &mut S) -> Result<()> {
        kv.set(SCHEDULE_KEY, &serde_json::to_string(&self.periods)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::kv::MemoryStore;

    #[test]
    fn unseen_period_has_empty_assignment() {
        let schedule = Schedule::default();
        assert!(schedule.assigned(Period::JanFeb).is_empty());
    }

    #[test]
    fn toggle_on_is_idempotent() {
        let mut kv = MemoryStore::new();
        let mut schedule = Schedule::default();
        schedule.toggle(&mut kv, Period::JanFeb, "a", true).unwrap();
        schedule.toggle(&mut kv, Period::JanFeb, "a", true).unwrap();

        let ids = schedule.assigned(Period::JanFeb);
        assert_eq!(ids.iter().filter(|id| *id == "a").count(), 1);
    }

    #[test]
    fn toggle_off_removes_the_id() {
        let mut kv = MemoryStore::new();
        let mut schedule = Schedule::default();
        schedule.toggle(&mut kv, Period::MarApr, "a", true).unwrap();
        schedule.toggle(&mut kv, Period::MarApr, "a", false).unwrap();
        assert!(schedule.assigned(Period::MarApr).is_empty());
    }

    #[test]
    fn toggle_scopes_to_one_period() {
        let mut kv = MemoryStore::new();
        let mut schedule = Schedule::default();
        schedule.toggle(&mut kv, Period::JanFeb, "a", true).unwrap();
        schedule.toggle(&mut kv, Period::NovDec, "a", true).unwrap();
        schedule.toggle(&mut kv, Period::JanFeb, "a", false).unwrap();

        assert!(schedule.assigned(Period::JanFeb).is_empty());
        assert_eq!(schedule.assigned(Period::NovDec), ["a".to_string()]);
    }

    #[test]
    fn set_assigned_replaces_the_list() {
        let mut kv = MemoryStore::new();
        let mut schedule = Schedule::default();
        schedule.toggle(&mut kv, Period::MayJun, "a", true).unwrap();
        schedule
            .set_assigned(&mut kv, Period::MayJun, vec!["b".into(), "c".into()])
            .unwrap();
        assert_eq!(
            schedule.assigned(Period::MayJun),
            ["b".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn prune_drops_stale_ids_everywhere() {
        let mut kv = MemoryStore::new();
        let mut schedule = Schedule::default();
        schedule.toggle(&mut kv, Period::JanFeb, "live", true).unwrap();
        schedule.toggle(&mut kv, Period::JanFeb, "stale", true).unwrap();
        schedule.toggle(&mut kv, Period::SepOct, "stale", true).unwrap();

        let valid: HashSet<String> = ["live".to_string()].into();
        schedule.prune(&mut kv, &valid).unwrap();

        assert_eq!(schedule.assigned(Period::JanFeb), ["live".to_string()]);
        assert!(schedule.assigned(Period::SepOct).is_empty());
    }

    #[test]
    fn mutations_persist_and_reload() {
        let mut kv = MemoryStore::new();
        let mut schedule = Schedule::default();
        schedule.toggle(&mut kv, Period::JulAug, "a", true).unwrap();
        schedule.toggle(&mut kv, Period::JulAug, "b", true).unwrap();

        let reloaded = Schedule::load(&kv);
        assert_eq!(
            reloaded.assigned(Period::JulAug),
            ["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn load_fails_soft_on_malformed_record() {
        let mut kv = MemoryStore::new();
        kv.set(SCHEDULE_KEY, "42").unwrap();
        let schedule = Schedule::load(&kv);
        assert!(schedule.assigned(Period::JanFeb).is_empty());
    }
}
