//! Sample passenger names for demo fills.
//!
//! The `fill-seats`, `fill-waitlist`, and `suggest-name` commands need a
//! supply of plausible names. The roster pairs first and last names
//! deterministically so scripted sessions produce stable output.

use cabin::NameSource;

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bruno", "Carla", "Dmitri", "Elena", "Farid", "Greta", "Hugo", "Ines", "Jonas",
];

const LAST_NAMES: [&str; 10] = [
    "Price", "Keller", "Moreau", "Santos", "Okafor", "Lindgren", "Baker", "Novak", "Ferrara",
    "Quinn",
];

/// Deterministic rotating pool of sample passenger names.
///
/// Walks every first/last combination before repeating, so consecutive
/// calls never produce duplicate names within one fill of a small cabin.
#[derive(Debug, Default)]
pub struct RosterNameSource {
    next: usize,
}

impl RosterNameSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NameSource for RosterNameSource {
    fn next_name(&mut self) -> String {
        let first = FIRST_NAMES[self.next % FIRST_NAMES.len()];
        let last = LAST_NAMES[(self.next / FIRST_NAMES.len()) % LAST_NAMES.len()];
        self.next += 1;
        format!("{first} {last}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_starts_with_first_pairing() {
        let mut roster = RosterNameSource::new();
        assert_eq!(roster.next_name(), "Alice Price");
        assert_eq!(roster.next_name(), "Bruno Price");
    }

    #[test]
    fn test_roster_advances_last_name_after_a_round() {
        let mut roster = RosterNameSource::new();
        for _ in 0..FIRST_NAMES.len() {
            roster.next_name();
        }
        assert_eq!(roster.next_name(), "Alice Keller");
    }

    #[test]
    fn test_roster_yields_distinct_names_for_a_full_cabin() {
        let mut roster = RosterNameSource::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..15 {
            assert!(seen.insert(roster.next_name()));
        }
    }

    #[test]
    fn test_roster_wraps_after_every_combination() {
        let mut roster = RosterNameSource::new();
        let total = FIRST_NAMES.len() * LAST_NAMES.len();
        let first = roster.next_name();
        for _ in 1..total {
            roster.next_name();
        }
        assert_eq!(roster.next_name(), first);
    }
}
