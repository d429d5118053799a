//! IdGenerator port - id generation abstraction.

use ulid::Ulid;

use crate::domain::PostId;
use crate::ports::Clock;

/// Generates post ids.
///
/// Abstracted as a trait so tests can produce deterministic ids; production
/// uses [`UlidGenerator`].
pub trait IdGenerator: Send + Sync {
    fn post_id(&self) -> PostId;
}

/// ULID-based id generator.
///
/// Builds ULIDs from the injected clock's milliseconds plus random entropy,
/// so a `FixedClock` pins the sortable timestamp half while ids stay unique.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn post_id(&self) -> PostId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        PostId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
