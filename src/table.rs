//! Tables of factorials from `1!` to `n!`, built incrementally from a running product.

use std::ops::Index;

use num_bigint::BigUint;
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::{KeyNotFound, Overflow};

/// The largest bound whose factorial fits in a `u128`.
pub const MAX_CHECKED_ARG: u64 = 34;

/// Upper limit on the entries reserved up front; larger tables grow as they are filled.
const MAX_PREALLOC: u64 = 1 << 16;

/// Maps each key `i` in `1..=n` to `i!`. Populated in full before it is handed out and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorialTable<V> {
    entries: FxHashMap<u64, V>,
}
impl<V> FactorialTable<V> {
    fn with_capacity(bound: u64) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(
                reserved_capacity(bound),
                Default::default(),
            ),
        }
    }

    fn insert_next(&mut self, key: u64, value: V) {
        debug_assert_eq!(self.bound() + 1, key, "keys must be inserted in ascending order");
        self.entries.insert(key, value);
    }

    pub fn get(&self, key: u64) -> Option<&V> {
        self.entries.get(&key)
    }

    pub fn lookup(&self, key: u64) -> Result<&V, KeyNotFound> {
        self.get(key).ok_or(KeyNotFound {
            key,
            bound: self.bound(),
        })
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The largest key in the table, or 0 if the table is empty.
    pub fn bound(&self) -> u64 {
        self.entries.len() as u64
    }

    /// `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &V)> + '_ {
        (1..=self.bound()).map(|key| (key, &self[key]))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

fn reserved_capacity(bound: u64) -> usize {
    bound.min(MAX_PREALLOC) as usize
}

impl<V> Index<u64> for FactorialTable<V> {
    type Output = V;

    fn index(&self, key: u64) -> &Self::Output {
        self.lookup(key).unwrap_or_else(|err| panic!("{err}"))
    }
}

/// Serialises as a map from key to the decimal rendering of the factorial, in ascending key order.
impl<V: ToString> Serialize for FactorialTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, &value.to_string())?;
        }
        map.end()
    }
}

/// Computes `i!` for every `i` in `1..=n`. A bound below 1 yields an empty table.
pub fn compute_factorials(n: i64) -> FactorialTable<BigUint> {
    let bound = n.max(0) as u64;
    let mut table = FactorialTable::with_capacity(bound);
    let mut product = BigUint::from(1u8);
    for i in 1..=bound {
        product *= i;
        table.insert_next(i, product.clone());
    }
    debug!("computed {} factorials for bound {n}", table.len());
    table
}

/// Computes `i!` for every `i` in `1..=n` over `u128`. Fails before computing anything if `n!`
/// would not fit, that is, for `n` past [`MAX_CHECKED_ARG`].
pub fn compute_factorials_checked(n: i64) -> Result<FactorialTable<u128>, Overflow> {
    let bound = n.max(0) as u64;
    if bound > MAX_CHECKED_ARG {
        return Err(Overflow { arg: bound });
    }
    let mut table = FactorialTable::with_capacity(bound);
    let mut product = 1u128;
    for i in 1..=bound {
        product *= i as u128;
        table.insert_next(i, product);
    }
    debug!("computed {} checked factorials for bound {n}", table.len());
    Ok(table)
}
