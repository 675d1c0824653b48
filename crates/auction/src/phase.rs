use serde::{Deserialize, Serialize};

/// Seconds after the bidding deadline during which sealed bids may be
/// revealed.
pub const REVEAL_PERIOD: u64 = 60;

/// The window of the auction lifecycle a timestamp falls in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionPhase {
    /// Sealed bids are being collected.
    Bidding,
    /// Commitments may be opened.
    Reveal,
    /// Only settlement remains.
    Closed,
}

/// Maps timestamps onto auction phases.
///
/// Bidding runs through the deadline inclusive, the reveal window covers
/// the [`REVEAL_PERIOD`] seconds after it, and everything later is closed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseClock {
    /// Unix seconds at which bidding closes.
    deadline: u64,
}

impl PhaseClock {
    /// Makes a new clock closing bids at `deadline`.
    pub const fn new(deadline: u64) -> Self {
        Self { deadline }
    }

    /// Unix seconds at which bidding closes. A bid landing exactly at the
    /// deadline still counts.
    pub const fn deadline(&self) -> u64 {
        self.deadline
    }

    /// Unix seconds at which the reveal window closes. A reveal landing
    /// exactly at this instant still counts.
    pub const fn reveal_deadline(&self) -> u64 {
        self.deadline.saturating_add(REVEAL_PERIOD)
    }

    /// The phase `timestamp` falls in.
    pub const fn phase_at(&self, timestamp: u64) -> AuctionPhase {
        if timestamp <= self.deadline {
            AuctionPhase::Bidding
        } else if timestamp <= self.reveal_deadline() {
            AuctionPhase::Reveal
        } else {
            AuctionPhase::Closed
        }
    }

    /// True while sealed bids are accepted.
    pub const fn bidding_open(&self, timestamp: u64) -> bool {
        matches!(self.phase_at(timestamp), AuctionPhase::Bidding)
    }

    /// True while commitments may be opened.
    pub const fn reveal_open(&self, timestamp: u64) -> bool {
        matches!(self.phase_at(timestamp), AuctionPhase::Reveal)
    }

    /// True once only settlement remains.
    pub const fn closed(&self, timestamp: u64) -> bool {
        matches!(self.phase_at(timestamp), AuctionPhase::Closed)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn phase_boundaries() {
        let clock = PhaseClock::new(1_000);

        assert_eq!(clock.phase_at(0), AuctionPhase::Bidding);
        assert_eq!(clock.phase_at(999), AuctionPhase::Bidding);
        assert_eq!(clock.phase_at(1_000), AuctionPhase::Bidding);
        assert_eq!(clock.phase_at(1_001), AuctionPhase::Reveal);
        assert_eq!(clock.phase_at(1_059), AuctionPhase::Reveal);
        assert_eq!(clock.phase_at(1_060), AuctionPhase::Reveal);
        assert_eq!(clock.phase_at(1_061), AuctionPhase::Closed);
        assert_eq!(clock.phase_at(u64::MAX), AuctionPhase::Closed);
    }

    #[test]
    fn reveal_window_length() {
        let clock = PhaseClock::new(1_000);
        assert_eq!(clock.reveal_deadline() - clock.deadline(), REVEAL_PERIOD);

        assert!(clock.bidding_open(1_000));
        assert!(!clock.bidding_open(1_001));
        assert!(clock.reveal_open(1_001));
        assert!(clock.reveal_open(1_060));
        assert!(!clock.reveal_open(1_061));
        assert!(clock.closed(1_061));
    }

    #[test]
    fn late_deadlines_do_not_wrap() {
        let clock = PhaseClock::new(u64::MAX - 10);
        assert_eq!(clock.reveal_deadline(), u64::MAX);
        assert_eq!(clock.phase_at(u64::MAX), AuctionPhase::Reveal);
    }
}
