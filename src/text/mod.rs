//! Text blocks fed to the banner renderer.

mod segment;

pub use segment::{Block, segment};
