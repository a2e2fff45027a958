use crate::error::Result;
use crate::store::LIMIT_KEY;
use crate::store::kv::KvStore;

/// Fallback per-period minute budget.
pub const DEFAULT_LIMIT: u32 = 75;

/// Read the per-period minute budget. Absent, non-numeric, or zero values
/// fall back to the default.
pub fn load<S: KvStore>(kv: &S) -> u32 {
    kv.get(LIMIT_KEY)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|&minutes| minutes > 0)
        .unwrap_or(DEFAULT_LIMIT)
}

/// Persist the budget, substituting the default for zero. Returns the
/// value actually stored.
pub fn save<S: KvStore>(kv: &mut S, minutes: u32) -> Result<u32> {
    let minutes = if minutes == 0 { DEFAULT_LIMIT } else { minutes };
    kv.set(LIMIT_KEY, &minutes.to_string())?;
    Ok(minutes)
}
