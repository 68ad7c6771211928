pub mod clock;
pub mod errors;
pub mod ids;
pub mod scratch;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{Result, SettlementError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use scratch::ScratchSpace;
