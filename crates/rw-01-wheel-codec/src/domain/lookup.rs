//! Decoder lookup tables
//!
//! The tables depend only on [`PRIME_TABLE`] and the condition registry, so
//! they are built once per process ([`LOOKUP_TABLES`]) and never mutated.
//!
//! Index ranges per table:
//! - day codes: prime indices `0..=len-3` (first prime of a report)
//! - condition codes: prime indices `1..=len-2` (second prime)
//! - case codes: prime indices `2..=len-1` (third prime)

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use super::condition::ConditionType;
use super::message::zero_pad3;
use super::primes::{MAX_START_INDEX, PRIME_TABLE};
use super::validation::{CASE_COUNT_RANGE, DAY_RANGE};

/// Process-wide tables, built on first use.
pub static LOOKUP_TABLES: LazyLock<LookupTables> = LazyLock::new(LookupTables::build);

/// Reverse lookups from 3-digit segments to prime indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTables {
    /// day code -> prime indices that can produce it (ascending)
    day: HashMap<String, BTreeSet<usize>>,
    /// prime index -> condition code -> condition
    condition: BTreeMap<usize, HashMap<String, ConditionType>>,
    /// prime index -> valid case codes
    cases: BTreeMap<usize, HashSet<String>>,
}

impl LookupTables {
    /// Build all three tables from scratch.
    pub fn build() -> Self {
        let mut day: HashMap<String, BTreeSet<usize>> = HashMap::new();
        let mut condition: BTreeMap<usize, HashMap<String, ConditionType>> = BTreeMap::new();
        let mut cases: BTreeMap<usize, HashSet<String>> = BTreeMap::new();

        for (index, &prime) in PRIME_TABLE.iter().enumerate() {
            if index <= MAX_START_INDEX {
                for d in DAY_RANGE {
                    day.entry(zero_pad3(d * prime)).or_default().insert(index);
                }
            }

            if (1..PRIME_TABLE.len() - 1).contains(&index) {
                let codes = condition.entry(index).or_default();
                for c in ConditionType::ALL {
                    codes.insert(zero_pad3(c.rank() * prime), c);
                }
            }

            if index >= 2 {
                let codes = cases.entry(index).or_default();
                for n in CASE_COUNT_RANGE {
                    codes.insert(zero_pad3(n * prime));
                }
            }
        }

        Self { day, condition, cases }
    }

    /// Candidate start indices for a day code, ascending.
    pub fn day_candidates(&self, day_code: &str) -> Option<&BTreeSet<usize>> {
        self.day.get(day_code)
    }

    /// Condition encoded as `condition_code` with the prime at `prime_index`.
    pub fn condition_at(&self, prime_index: usize, condition_code: &str) -> Option<ConditionType> {
        self.condition.get(&prime_index)?.get(condition_code).copied()
    }

    /// Whether `case_code` is a valid case segment for the prime at `prime_index`.
    pub fn case_valid_at(&self, prime_index: usize, case_code: &str) -> bool {
        self.cases
            .get(&prime_index)
            .is_some_and(|codes| codes.contains(case_code))
    }
}
