//! `glyph_banner` - block-letter banners painted with glyph pairs
//!
//! Text is drawn with a fixed 5×6 bitmap font. Each lit pixel becomes the
//! foreground glyph of a style and each unlit pixel its background glyph,
//! so `"hi"` with 🌻/🌿 turns into a grid of sunflowers on leaves.
//!
//! The rendering engine ([`render_text`]) is a pure function of text,
//! palette, and [`Options`]. The editor, persistence, and export modules
//! are collaborators built around it.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional size casts
#![allow(clippy::module_name_repetitions)] // Allow state::StateStore etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::needless_pass_by_value)] // Allow pass by value for small Copy types
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod editor;
pub mod error;
pub mod event;
pub mod export;
pub mod font;
pub mod options;
pub mod palette;
pub mod renderer;
pub mod state;
pub mod style;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use editor::Editor;
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use options::{ApplyStylesOn, Direction, FillSpaces, Options, OptionsPatch};
pub use palette::{Palette, random_style};
pub use renderer::{Grid, RenderStats, render_grid, render_text, render_with_stats};
pub use state::{EditorState, FileStore, MemoryStore, STORAGE_KEY, StateStore, Validation};
pub use style::{Glyph, Style, StyleTarget};
