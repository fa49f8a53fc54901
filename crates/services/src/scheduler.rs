use std::time::Duration;

use atlas_core::transition::Event;

#[derive(Debug, Clone)]
struct PendingEvent {
    due: Duration,
    seq: u64,
    event: Event,
}

/// Virtual-time queue of timed session events.
///
/// Time only moves when the owner asks it to, so tests step through a quiz
/// deterministically and a UI driver maps real elapsed time onto it. Events
/// fire in due order; events due at the same instant fire in scheduling order.
#[derive(Debug, Clone, Default)]
pub struct PacingScheduler {
    now: Duration,
    next_seq: u64,
    queue: Vec<PendingEvent>,
}

impl PacingScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the scheduler was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Time left until the earliest pending event.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.queue
            .first()
            .map(|pending| pending.due.saturating_sub(self.now))
    }

    pub fn schedule(&mut self, delay: Duration, event: Event) {
        let due = self.now.saturating_add(delay);
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);

        let pos = self
            .queue
            .partition_point(|pending| (pending.due, pending.seq) <= (due, seq));
        self.queue.insert(pos, PendingEvent { due, seq, event });
    }

    /// Drop everything pending; returns how many events were discarded.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.queue.len();
        self.queue.clear();
        dropped
    }

    /// Pop the earliest event due at or before `deadline`, moving virtual time
    /// to its due instant.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<Event> {
        if self.queue.first().is_none_or(|pending| pending.due > deadline) {
            return None;
        }
        let pending = self.queue.remove(0);
        self.now = self.now.max(pending.due);
        Some(pending.event)
    }

    /// Move virtual time to `deadline` without firing anything.
    pub fn finish_at(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(epoch: u64) -> Event {
        Event::ShowFeedback { epoch }
    }

    #[test]
    fn events_fire_in_due_order() {
        let mut scheduler = PacingScheduler::new();
        scheduler.schedule(Duration::from_secs(2), feedback(2));
        scheduler.schedule(Duration::from_secs(1), feedback(1));

        assert_eq!(scheduler.next_due_in(), Some(Duration::from_secs(1)));
        assert_eq!(scheduler.pop_due(Duration::from_secs(5)), Some(feedback(1)));
        assert_eq!(scheduler.now(), Duration::from_secs(1));
        assert_eq!(scheduler.pop_due(Duration::from_secs(5)), Some(feedback(2)));
        assert_eq!(scheduler.pop_due(Duration::from_secs(5)), None);
    }

    #[test]
    fn ties_keep_scheduling_order() {
        let mut scheduler = PacingScheduler::new();
        scheduler.schedule(Duration::ZERO, feedback(1));
        scheduler.schedule(Duration::ZERO, feedback(2));

        assert_eq!(scheduler.pop_due(Duration::ZERO), Some(feedback(1)));
        assert_eq!(scheduler.pop_due(Duration::ZERO), Some(feedback(2)));
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut scheduler = PacingScheduler::new();
        scheduler.schedule(Duration::from_secs(1), feedback(1));

        assert_eq!(scheduler.pop_due(Duration::from_millis(999)), None);
        scheduler.finish_at(Duration::from_millis(999));
        assert_eq!(scheduler.next_due_in(), Some(Duration::from_millis(1)));
    }

    #[test]
    fn delays_are_relative_to_virtual_now() {
        let mut scheduler = PacingScheduler::new();
        scheduler.finish_at(Duration::from_secs(10));
        scheduler.schedule(Duration::from_secs(2), feedback(1));

        assert_eq!(scheduler.next_due_in(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn cancel_all_empties_queue() {
        let mut scheduler = PacingScheduler::new();
        scheduler.schedule(Duration::from_secs(1), feedback(1));
        scheduler.schedule(Duration::from_secs(3), feedback(1));

        assert_eq!(scheduler.cancel_all(), 2);
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.next_due_in(), None);
    }
}
