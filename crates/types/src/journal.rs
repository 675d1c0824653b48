use serde::{Deserialize, Serialize};

/// An append-only log of the events a contract has emitted.
///
/// Each contract instance owns one journal. Operations push into it as part
/// of their state change, and test suites assert against its contents the
/// way an on-chain suite asserts emitted events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventJournal<E> {
    events: Vec<E>,
}

impl<E> EventJournal<E> {
    /// Create an empty journal.
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event.
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// All events in emission order.
    pub fn all(&self) -> &[E] {
        &self.events
    }

    /// The most recently recorded event, if any.
    pub fn last(&self) -> Option<&E> {
        self.events.last()
    }

    /// The number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all recorded events out of the journal, leaving it empty.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }
}

impl<E> Default for EventJournal<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, E> IntoIterator for &'a EventJournal<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
