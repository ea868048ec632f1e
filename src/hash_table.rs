use std::mem;

use tracing::debug;

use crate::{
    error::{Error, Result},
    hashing::{primary_hash, step_hash},
    policy::ResizePolicy,
    primes::next_prime,
};

/// Slot count requested by [`DoubleHashTable::default`]
const DEFAULT_CAPACITY: usize = 64;

/// A key-value pair stored in an occupied slot
#[derive(Debug, Clone)]
struct Bucket<V> {
    /// The key in the key-value pair
    key: String,
    /// The value associated with the key
    value: V,
}

/// A cell of the slot array
#[derive(Debug, Clone)]
enum Slot<V> {
    /// Never held an entry. Ends every probe.
    Empty,
    /// Held an entry that has been removed. Probes walk past it.
    Tombstone,
    /// Holds a live entry
    Occupied(Bucket<V>),
}

/// Outcome of walking the probe sequence of a key
#[derive(Debug, Clone, Copy)]
struct Probe {
    /// Slot holding the key, if it is present
    found: Option<usize>,
    /// First slot on the walk that a new entry for the key may take
    vacancy: Option<usize>,
    /// Number of slots inspected
    probes: usize,
}

/// A string-keyed hash table using open addressing with double hashing.
///
/// The home slot of a key comes from [`primary_hash`] and collisions are resolved by
/// stepping through the table with a stride from [`step_hash`]. The capacity is always
/// prime and the stride is always in `1..capacity`, so a probe reaches every slot within
/// `capacity` steps.
///
/// Removal leaves a tombstone: lookups skip it, insertions reuse it, and only a slot that
/// was never used ends a probe. The table is rebuilt from scratch whenever an insertion
/// finds the load at or above [`ResizePolicy::grow_at`] or a removal finds it at or below
/// [`ResizePolicy::shrink_at`].
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone)]
pub struct DoubleHashTable<V> {
    /// The slots storing the key-value pairs
    slots: Vec<Slot<V>>,
    /// Current number of occupied slots
    size: usize,
    /// Exclusive upper bound of the probe stride
    max_step: usize,
    /// Thresholds driving grow and shrink
    policy: ResizePolicy,
}

impl<V> Default for DoubleHashTable<V> {
    fn default() -> Self {
        Self::allocate(DEFAULT_CAPACITY, ResizePolicy::default())
    }
}

impl<V> Extend<(String, V)> for DoubleHashTable<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for DoubleHashTable<V> {
    fn from_iter<T: IntoIterator<Item = (String, V)>>(iter: T) -> Self {
        let mut table = Self::allocate(1, ResizePolicy::default());
        table.extend(iter);
        table
    }
}

impl<V> DoubleHashTable<V> {
    /// Creates a table with at least `requested_capacity` slots, rounded up to a prime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `requested_capacity` is zero.
    pub fn new(requested_capacity: usize) -> Result<Self> {
        Self::with_policy(requested_capacity, ResizePolicy::default())
    }

    /// Creates a table with at least `requested_capacity` slots and custom resize thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `requested_capacity` is zero.
    pub fn with_policy(requested_capacity: usize, policy: ResizePolicy) -> Result<Self> {
        if requested_capacity < 1 {
            return Err(Error::InvalidArgument("max size must be positive".to_owned()));
        }
        Ok(Self::allocate(requested_capacity, policy))
    }

    /// Builds an all-empty table with `next_prime(requested)` slots
    fn allocate(requested: usize, policy: ResizePolicy) -> Self {
        let capacity = next_prime(requested);
        Self { slots: empty_slots(capacity), size: 0, max_step: next_prime(capacity / 2), policy }
    }

    /// Inserts a key-value pair, returning the previous value if the key was present.
    ///
    /// An existing key is overwritten in place. A new key first grows the table if the
    /// load is at or above the grow threshold.
    pub fn put(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();

        if let Some(index) = self.probe(&key).found {
            if let Some(Slot::Occupied(bucket)) = self.slots.get_mut(index) {
                return Some(mem::replace(&mut bucket.value, value));
            }
        }

        if self.load_factor() >= self.policy.grow_at() {
            self.resize();
        }
        self.occupy(key, value);
        None
    }

    /// Places a key that is known to be absent into the first free slot of its probe
    fn occupy(&mut self, key: String, value: V) {
        let Some(index) = self.probe(&key).vacancy else {
            // Only reachable if every slot is occupied; make room and retry.
            self.rebuild(self.capacity().saturating_add(1));
            return self.occupy(key, value);
        };

        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Occupied(Bucket { key, value });
            self.size = self.size.saturating_add(1);
        }
    }

    /// Retrieve the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not in the table.
    pub fn get(&self, key: &str) -> Result<&V> {
        match self.probe(key).found.and_then(|index| self.slots.get(index)) {
            Some(Slot::Occupied(bucket)) => Ok(&bucket.value),
            _ => Err(Error::KeyNotFound(key.to_owned())),
        }
    }

    /// Get a mutable reference to the value stored for `key`
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not in the table.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut V> {
        let index = self.probe(key).found;
        match index.and_then(|index| self.slots.get_mut(index)) {
            Some(Slot::Occupied(bucket)) => Ok(&mut bucket.value),
            _ => Err(Error::KeyNotFound(key.to_owned())),
        }
    }

    /// Removes `key` from the table and returns its value.
    ///
    /// If the key is present and the load is at or below the shrink threshold, the table
    /// is rebuilt before the entry is tombstoned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is not in the table. The table is left
    /// untouched in that case.
    pub fn remove(&mut self, key: &str) -> Result<V> {
        if self.probe(key).found.is_none() {
            return Err(Error::KeyNotFound(key.to_owned()));
        }

        if self.load_factor() <= self.policy.shrink_at() {
            self.resize();
        }

        let slot = self
            .probe(key)
            .found
            .and_then(|index| self.slots.get_mut(index))
            .ok_or_else(|| Error::KeyNotFound(key.to_owned()))?;

        match mem::replace(slot, Slot::Tombstone) {
            Slot::Occupied(bucket) => {
                self.size = self.size.saturating_sub(1);
                Ok(bucket.value)
            }
            other => {
                *slot = other;
                Err(Error::KeyNotFound(key.to_owned()))
            }
        }
    }

    /// Returns true if the table holds an entry for `key`
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.probe(key).found.is_some()
    }

    /// Number of slots a lookup of `key` inspects before it finds the key or gives up
    #[must_use]
    pub fn probe_count(&self, key: &str) -> usize {
        self.probe(key).probes
    }

    /// Walks the probe sequence of `key`.
    ///
    /// Stops at the slot holding the key, at the first never-used slot, or after visiting
    /// every slot once.
    fn probe(&self, key: &str) -> Probe {
        let capacity = self.capacity();
        let step = step_hash(key, self.max_step);
        let mut index = primary_hash(key, capacity);
        let mut vacancy = None;
        let mut probes: usize = 0;

        while probes < capacity {
            probes = probes.saturating_add(1);
            match self.slots.get(index) {
                None => break,
                Some(Slot::Empty) => {
                    return Probe { found: None, vacancy: vacancy.or(Some(index)), probes };
                }
                Some(Slot::Tombstone) => {
                    if vacancy.is_none() {
                        vacancy = Some(index);
                    }
                }
                Some(Slot::Occupied(bucket)) => {
                    if bucket.key == key {
                        return Probe { found: Some(index), vacancy: None, probes };
                    }
                }
            }
            index = index.saturating_add(step).checked_rem(capacity).unwrap_or(0);
        }

        Probe { found: None, vacancy, probes }
    }

    /// Rebuilds the table sized for the policy's target load
    fn resize(&mut self) {
        let load = self.load_factor();
        let requested = self.policy.target_slots(self.size);
        debug!(load, size = self.size, capacity = self.capacity(), "resize triggered");
        self.rebuild(requested);
    }

    /// Replaces the slot array with `next_prime(requested)` empty slots and reinserts
    /// every live entry. Tombstones are dropped.
    fn rebuild(&mut self, requested: usize) {
        let capacity = next_prime(requested);
        let old_capacity = self.capacity();
        let old_slots = mem::replace(&mut self.slots, empty_slots(capacity));
        self.max_step = next_prime(capacity / 2);
        self.size = 0;

        for slot in old_slots {
            if let Slot::Occupied(Bucket { key, value }) = slot {
                self.occupy(key, value);
            }
        }

        debug!(old_capacity, new_capacity = capacity, size = self.size, "table rebuilt");
    }

    /// Returns the number of entries in the table
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots, always a prime
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current load factor of the table
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Returns the resize thresholds in use
    #[must_use]
    pub fn policy(&self) -> ResizePolicy {
        self.policy
    }

    /// Removes every entry, keeping the current capacity
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.size = 0;
    }

    /// Returns an iterator over the key-value pairs, in slot order
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { slots: &self.slots, index: 0 }
    }
}

/// Builds `capacity` never-used slots
fn empty_slots<V>(capacity: usize) -> Vec<Slot<V>> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

/// Iterator over the key-value pairs of a [`DoubleHashTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    /// Slots of the table being iterated
    slots: &'a [Slot<V>],
    /// Current position in the iteration
    index: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(slot) = self.slots.get(self.index) {
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied(bucket) = slot {
                return Some((bucket.key.as_str(), &bucket.value));
            }
        }
        None
    }
}
