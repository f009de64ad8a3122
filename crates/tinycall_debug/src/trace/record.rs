//! Trace event and record types.
//!
//! This module defines the events a [`Tracer`](super::Tracer) records while
//! observing a compile.

use tinycall_language::Stage;

// =============================================================================
// Trace Event
// =============================================================================

/// Events that can be traced during a compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceEvent {
    /// A compile has started.
    CompileStart {
        /// Length of the source text in bytes.
        input_len: usize,
    },

    /// A compile has ended.
    CompileEnd {
        /// Whether the compile produced output.
        success: bool,
    },

    /// A pipeline stage has started.
    StageStart {
        /// The stage that started.
        stage: Stage,
    },

    /// A pipeline stage has finished.
    StageEnd {
        /// The stage that finished.
        stage: Stage,
        /// Tokens, nodes, or output bytes produced.
        produced: usize,
    },

    /// A pipeline stage has failed.
    StageFailed {
        /// The stage that failed.
        stage: Stage,
        /// The rendered error.
        message: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CompileStart { .. } => "compile-start",
            Self::CompileEnd { .. } => "compile-end",
            Self::StageStart { .. } => "stage-start",
            Self::StageEnd { .. } => "stage-end",
            Self::StageFailed { .. } => "stage-failed",
        }
    }

    /// Returns true if this is a compile boundary event.
    #[must_use]
    pub fn is_compile_boundary(&self) -> bool {
        matches!(self, Self::CompileStart { .. } | Self::CompileEnd { .. })
    }

    /// Returns the stage this event concerns, if any.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::StageStart { stage }
            | Self::StageEnd { stage, .. }
            | Self::StageFailed { stage, .. } => Some(*stage),
            Self::CompileStart { .. } | Self::CompileEnd { .. } => None,
        }
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A timestamped trace record.
#[derive(Clone, Debug)]
pub struct TraceRecord {
    /// Unique record ID within the tracer's lifetime.
    pub id: u64,
    /// Which compile this event belongs to, counting from 1.
    pub compile: u64,
    /// Timestamp in nanoseconds since the tracer was created.
    pub timestamp_ns: u64,
    /// The trace event.
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, compile: u64, timestamp_ns: u64, event: TraceEvent) -> Self {
        Self {
            id,
            compile,
            timestamp_ns,
            event,
        }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
