//! Ports - the abstraction layer.
//!
//! Each trait here is a seam to an external collaborator (durable store,
//! wall clock, id source, the media publish service, the stock-footage
//! search API, the observability sink). The engine only ever talks to these
//! traits; `impls` holds the concrete adapters.

pub mod clock;
pub mod event_sink;
pub mod id_generator;
pub mod media_service;
pub mod post_store;
pub mod video_source;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{CollectingSink, EventSink, NoopSink};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::media_service::{
    ContainerId, ContainerRequest, ContainerStatus, MediaError, MediaService,
};
pub use self::post_store::{PostStore, StoreError};
pub use self::video_source::{SourceError, VideoSource};
