pub mod bond;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod ignore;
pub mod log;
pub mod placement;
pub mod rect;
pub mod session;
pub mod shake;
pub mod version;

#[cfg(test)]
mod fake;

pub use bond::{Bond, BondRegistry, Offset};
pub use engine::SyncEngine;
pub use error::{MagnetError, WindowResult};
pub use geometry::Geometry;
pub use ignore::IgnoreSet;
pub use rect::Rect;
