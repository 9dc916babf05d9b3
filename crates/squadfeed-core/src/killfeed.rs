//! Bounded, arrival-ordered buffer of recent wound events.
//!
//! The kill feed keeps the last [`KILLFEED_CAPACITY`] attributable wounds in
//! the order the connector delivered them. The connector emits wounds in
//! non-decreasing time order, so arrival order is also time order.
//!
//! Two read paths exist:
//!
//! - [`KillFeed::latest`] -- the most recent `n` events.
//! - [`KillFeed::since`] -- events after a time cursor.

use std::collections::VecDeque;

use squadfeed_types::{WoundEvent, WoundNotification};
use tracing::debug;

use crate::projector::project;

/// Maximum number of wound events kept in memory.
pub const KILLFEED_CAPACITY: usize = 30;

/// In-memory kill feed.
#[derive(Debug, Clone, Default)]
pub struct KillFeed {
    /// Recorded events, oldest first.
    events: VecDeque<WoundEvent>,
}

impl KillFeed {
    /// Create an empty kill feed.
    pub const fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Record a wound notification.
    ///
    /// Wounds whose attacker or victim has no resolvable steam id cannot be
    /// attributed; they are dropped and the feed is left unchanged. When the feed
    /// grows past [`KILLFEED_CAPACITY`] the oldest event is evicted.
    pub fn append(&mut self, wound: &WoundNotification) {
        let Some(event) = record(wound) else {
            debug!(weapon = %wound.weapon, "dropping unattributable wound");
            return;
        };

        self.events.push_back(event);
        if self.events.len() > KILLFEED_CAPACITY {
            self.events.pop_front();
        }
    }

    /// Return the last `n` events, oldest first.
    ///
    /// `n == 0` means "no limit" and returns the whole feed, matching the
    /// behaviour dashboards were built against.
    pub fn latest(&self, n: usize) -> Vec<WoundEvent> {
        let skip = if n == 0 {
            0
        } else {
            self.events.len().saturating_sub(n)
        };
        self.events.iter().skip(skip).cloned().collect()
    }

    /// Return the events recorded after the first event at or past `cursor_ms`.
    ///
    /// The first event whose time is `>= cursor_ms` is itself excluded; only
    /// the events strictly after it are returned. Dashboards pass the time of
    /// the newest event they already hold, so this skips that one event, but
    /// it also skips a genuinely new event whose time is past the cursor.
    ///
    /// Returns `None` when every recorded event is older than the cursor,
    /// which is distinct from `Some(vec![])` (the cursor matched the newest
    /// event).
    pub fn since(&self, cursor_ms: i64) -> Option<Vec<WoundEvent>> {
        let first = self.events.iter().position(|e| e.time >= cursor_ms)?;
        Some(
            self.events
                .iter()
                .skip(first.saturating_add(1))
                .cloned()
                .collect(),
        )
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate over recorded events, oldest first.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, WoundEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a KillFeed {
    type Item = &'a WoundEvent;
    type IntoIter = std::collections::vec_deque::Iter<'a, WoundEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Build the recorded form of a wound, or `None` if it is unattributable.
fn record(wound: &WoundNotification) -> Option<WoundEvent> {
    let attacker = wound.attacker.as_ref()?;
    let victim = wound.victim.as_ref()?;
    let attacker_id = attacker.resolved_steam_id()?;
    let victim_id = victim.resolved_steam_id()?;

    Some(WoundEvent {
        time: wound.time.timestamp_millis(),
        attacker: project(attacker),
        victim: project(victim),
        damage: wound.damage,
        weapon: wound.weapon.clone(),
        teamkill: wound.teamkill,
        suicide: attacker_id == victim_id,
    })
}
