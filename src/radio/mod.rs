//! A module to encapsulate all things related to radio operation.
pub mod prelude;

mod xn297;
pub use xn297::{constants, Xn297, Xn297Error};

mod config;
pub use config::RadioConfig;

mod handlers;
#[cfg(feature = "defmt")]
pub use handlers::DefmtDebug;
#[cfg(feature = "std")]
pub use handlers::PrintDebug;
pub use handlers::{NoDebug, NoReceive, OnDebug, OnReceive, RxFifo};
