use crate::model::ForecastEntry;

/// Maximum number of daily entries the reduced forecast holds.
pub const MAX_DAILY_ENTRIES: usize = 5;

/// Slot marker identifying each day's representative mid-day record.
const NOON_SLOT: &str = "12:00:00";

/// Reduce the provider's 3-hour interval list to one representative
/// entry per day: the "12:00:00" slot, in the order the provider sent
/// them, capped at [`MAX_DAILY_ENTRIES`].
///
/// Sparse input yields fewer entries; nothing is padded or substituted.
/// An input with no qualifying slot yields an empty vector, which is
/// still a successful reduction.
pub fn reduce_to_daily(entries: Vec<ForecastEntry>) -> Vec<ForecastEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.slot.contains(NOON_SLOT))
        .take(MAX_DAILY_ENTRIES)
        .collect()
}
