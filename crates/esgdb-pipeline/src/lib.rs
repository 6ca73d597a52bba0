//! Batch orchestration for esgdb.
//!
//! Sequences the four collection stages per company (acquire content →
//! sentiment → metrics → score), assembles a `CollectionResult`, and hands
//! it to a pluggable sink. Failures are isolated at the company boundary:
//! one company's fault is logged and skipped, and the batch always runs to
//! completion.

pub mod error;
pub mod result;
pub mod runner;
pub mod sink;

pub use error::PipelineError;
pub use result::{CollectionResult, PipelineReport};
pub use runner::Pipeline;
pub use sink::{JsonlSink, NoopSink, ResultSink, SinkError};
