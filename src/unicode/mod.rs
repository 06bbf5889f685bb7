//! Unicode utilities: input normalization, grapheme handling, display width.

mod grapheme;
mod normalize;
mod width;

pub use grapheme::{GraphemeIterator, grapheme_count, graphemes, unique_graphemes};
pub use normalize::normalize;
pub use width::{WidthMethod, cell_width, display_width, display_width_with_method};
