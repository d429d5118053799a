//! Concrete adapters for the ports.

mod graph_media;
mod json_store;
mod memory_store;
mod stock_source;
mod tracing_sink;

pub use graph_media::GraphMediaClient;
pub use json_store::JsonFileStore;
pub use memory_store::InMemoryPostStore;
pub use stock_source::StockFootageClient;
pub use tracing_sink::TracingSink;
