//! Pipeline coordination: extract → brand → audience → offer → brief.
//!
//! The coordinator is a thin sequencing layer over `briefkit-extract` and
//! `briefkit-classify`. Each step's outcome is recorded independently in a
//! [`PipelineResult`]; a single failed source degrades only that source,
//! while a failure after extraction aborts the run with all prior step
//! records preserved.

pub mod run;
pub mod steps;

pub use run::{Assembler, DocumentText, Pipeline, PipelineRequest};
pub use steps::{PipelineResult, RunStatus, StepRecord, StepStatus};
