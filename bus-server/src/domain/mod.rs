//! Domain types for the bus route resolver.
//!
//! The types here represent validated routing data. Invariants are
//! enforced at construction time, so code that receives these types can
//! trust their validity.

mod route;
mod stop;

pub use route::{Route, RouteSet};
pub use stop::{InvalidStopId, StopId};
