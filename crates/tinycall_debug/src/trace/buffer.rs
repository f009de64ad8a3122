//! Ring buffer for trace records.
//!
//! Provides a fixed-size buffer that stores the most recent trace records,
//! discarding the oldest first.

use std::collections::{HashMap, VecDeque};

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Buffer
// =============================================================================

/// A ring buffer for storing trace records.
#[derive(Clone, Debug)]
pub struct TraceBuffer {
    /// The records, oldest first.
    records: VecDeque<TraceRecord>,
    /// Maximum number of records to store.
    max_size: usize,
    /// Next record ID to assign.
    next_id: u64,
}

impl TraceBuffer {
    /// Creates a new trace buffer with the given maximum size.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            next_id: 0,
        }
    }

    /// Creates a buffer with default size (10000 records).
    #[must_use]
    pub fn default_size() -> Self {
        Self::new(10_000)
    }

    /// Pushes a new event to the buffer.
    ///
    /// Returns the assigned record ID.
    pub fn push(&mut self, compile: u64, timestamp_ns: u64, event: TraceEvent) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.records
            .push_back(TraceRecord::new(id, compile, timestamp_ns, event));
        while self.records.len() > self.max_size {
            self.records.pop_front();
        }

        id
    }

    /// Returns the number of records in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the maximum number of records kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Clears all records from the buffer.
    ///
    /// Record IDs keep increasing across clears.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Returns an iterator over all records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TraceRecord> {
        self.records.iter()
    }

    /// Returns the most recently pushed record, if still buffered.
    #[must_use]
    pub fn last(&self) -> Option<&TraceRecord> {
        self.records.back()
    }

    /// Returns records for a specific compile.
    #[must_use]
    pub fn records_for_compile(&self, compile: u64) -> Vec<&TraceRecord> {
        self.filter(|r| r.compile == compile)
    }

    /// Returns the most recent N records.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&TraceRecord> {
        let start = self.records.len().saturating_sub(count);
        self.records.iter().skip(start).collect()
    }

    /// Returns records matching a predicate.
    pub fn filter<F>(&self, predicate: F) -> Vec<&TraceRecord>
    where
        F: Fn(&TraceRecord) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    /// Returns records of a specific event type.
    #[must_use]
    pub fn by_event_type(&self, event_type: &str) -> Vec<&TraceRecord> {
        self.filter(|r| r.event_type() == event_type)
    }

    /// Returns the oldest compile number in the buffer.
    #[must_use]
    pub fn oldest_compile(&self) -> Option<u64> {
        self.records.front().map(|r| r.compile)
    }

    /// Returns the newest compile number in the buffer.
    #[must_use]
    pub fn newest_compile(&self) -> Option<u64> {
        self.records.back().map(|r| r.compile)
    }

    /// Returns the distinct compile numbers in the buffer, oldest first.
    #[must_use]
    pub fn compiles(&self) -> Vec<u64> {
        let mut compiles: Vec<u64> = self.records.iter().map(|r| r.compile).collect();
        compiles.dedup();
        compiles
    }

    /// Returns statistics about the buffer.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        let mut event_counts = HashMap::new();
        for record in &self.records {
            *event_counts.entry(record.event_type()).or_insert(0) += 1;
        }

        TraceBufferStats {
            record_count: self.records.len(),
            max_size: self.max_size,
            oldest_compile: self.oldest_compile(),
            newest_compile: self.newest_compile(),
            compile_count: self.compiles().len(),
            event_counts,
        }
    }
}

impl Default for TraceBuffer {
    fn default() -> Self {
        Self::default_size()
    }
}

// =============================================================================
// Buffer Statistics
// =============================================================================

/// Statistics about a trace buffer.
#[derive(Clone, Debug)]
pub struct TraceBufferStats {
    /// Number of records currently in buffer.
    pub record_count: usize,
    /// Maximum buffer size.
    pub max_size: usize,
    /// Oldest compile in buffer.
    pub oldest_compile: Option<u64>,
    /// Newest compile in buffer.
    pub newest_compile: Option<u64>,
    /// Number of distinct compiles.
    pub compile_count: usize,
    /// Count of each event type.
    pub event_counts: HashMap<&'static str, usize>,
}

// =============================================================================
// Tests
// =============================================================================
