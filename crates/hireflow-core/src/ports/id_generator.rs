//! IdGenerator port - generated id abstraction.
//!
//! # Implementations
//! - **UlidGenerator**: ULID whose timestamp comes from a `Clock`

use crate::domain::ids::ScheduleId;
use crate::ports::Clock;
use ulid::Ulid;

pub trait IdGenerator: Send + Sync {
    fn generate_schedule_id(&self) -> ScheduleId;
}

/// ULID generator driven by a `Clock`.
///
/// With a `FixedClock` the timestamp part is deterministic; the random part
/// still keeps ids unique.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_schedule_id(&self) -> ScheduleId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        ScheduleId::from(ulid)
    }
}
