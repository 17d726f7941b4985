//! Type definitions

pub mod route;
pub mod schedule;
pub mod stop;

pub use route::*;
pub use schedule::*;
pub use stop::*;
