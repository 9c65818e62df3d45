//! `worldkeeper-core` — Domain types shared by the settings registry.
//!
//! Every enumerated type here persists by its canonical upper-case name,
//! never by ordinal.

pub mod builder;
pub mod difficulty;
pub mod error;
pub mod material;
pub mod status;
pub mod world_type;

pub use builder::Builder;
pub use difficulty::Difficulty;
pub use error::ParseNameError;
pub use material::Material;
pub use status::WorldStatus;
pub use world_type::WorldType;
