//! Compile tracing for tinycall.
//!
//! This crate provides:
//! - [`Tracer`] - A [`CompileObserver`](tinycall_language::CompileObserver)
//!   that records each pipeline stage
//! - [`TraceBuffer`] - Bounded history of trace records
//! - [`HumanFormatter`] / [`JsonFormatter`] - Trace output formats
//!
//! # Example
//!
//! ```
//! use tinycall_debug::{Tracer, TracerConfig};
//! use tinycall_language::Compiler;
//!
//! let mut tracer = Tracer::new(TracerConfig::new().enabled());
//! let output = Compiler::new().compile_observed("(add 1 2)", &mut tracer).unwrap();
//! assert_eq!(output, "add(1, 2);");
//! assert_eq!(tracer.buffer().by_event_type("stage-end").len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceOutput, TraceRecord, Tracer, TracerConfig,
};
