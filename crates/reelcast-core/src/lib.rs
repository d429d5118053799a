//! reelcast-core
//!
//! The post lifecycle engine: schedule stock videos into daily publish
//! slots, persist them as durable records, and drive each due post through
//! the external create-container → poll-processing → publish protocol.
//!
//! # Module layout
//! - **domain**: records and events (Post, PostStatus, Video, PostEvent,
//!   PublishOutcome)
//! - **ports**: collaborator seams (PostStore, Clock, IdGenerator,
//!   MediaService, VideoSource, EventSink)
//! - **schedule**: slot placement (Scheduler, SchedulePolicy)
//! - **publish**: the three-phase publish pipeline (PublishPipeline,
//!   PollPolicy)
//! - **runner**: the periodic lifecycle scan (LifecycleRunner, RunReport)
//! - **impls**: concrete adapters (in-memory and JSON-file stores, Graph
//!   and stock-footage HTTP clients, tracing sink)

pub mod domain;
pub mod error;
pub mod impls;
pub mod ports;
pub mod publish;
pub mod runner;
pub mod schedule;

#[cfg(test)]
pub(crate) mod testing;

pub use error::ReelcastError;
pub use publish::{CaptionTemplate, PollPolicy, PublishPipeline};
pub use runner::{LifecycleRunner, RunReport};
pub use schedule::{SchedulePolicy, Scheduler};
