use chrono::Utc;

use crate::models::EntryId;

/// Timestamp-based id source for list entries.
///
/// Ids are milliseconds since the epoch, bumped past the last issued id and past
/// any id already present in the target list, so rapid inserts (or a restored
/// document carrying future ids) never collide.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    last: EntryId,
    clock: fn() -> EntryId,
}

fn now_millis() -> EntryId {
    Utc::now().timestamp_millis().max(0) as EntryId
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::with_clock(now_millis)
    }
}

impl IdGenerator {
    pub fn with_clock(clock: fn() -> EntryId) -> Self {
        Self { last: 0, clock }
    }

    pub fn next_id(&mut self, existing: impl IntoIterator<Item = EntryId>) -> EntryId {
        let max_existing = existing.into_iter().max().unwrap_or(0);
        let id = (self.clock)()
            .max(self.last.saturating_add(1))
            .max(max_existing.saturating_add(1));
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen() -> EntryId {
        1_700_000_000_000
    }

    #[test]
    fn test_frozen_clock_still_unique() {
        let mut ids = IdGenerator::with_clock(frozen);
        let a = ids.next_id([]);
        let b = ids.next_id([]);
        let c = ids.next_id([]);
        assert_eq!(a, frozen());
        assert_eq!(b, a + 1);
        assert_eq!(c, b + 1);
    }

    #[test]
    fn test_skips_past_existing_ids() {
        let mut ids = IdGenerator::with_clock(frozen);
        let id = ids.next_id([frozen() + 50, 3]);
        assert_eq!(id, frozen() + 51);
    }

    #[test]
    fn test_real_clock_is_positive() {
        let mut ids = IdGenerator::default();
        assert!(ids.next_id([]) > 0);
    }
}
