//! Layout options for banner rendering.
//!
//! The engine reads every field explicitly; [`Options::default`] exists for
//! callers that need a starting point.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Accepted range for both paddings in persisted state.
pub const PADDING_RANGE: RangeInclusive<u32> = 0..=10;
/// Accepted range for the space size in persisted state.
pub const SPACE_SIZE_RANGE: RangeInclusive<u32> = 1..=10;

/// How rendered characters are laid out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One character below the other.
    #[default]
    Vertical,
    /// Characters side by side, row by row.
    Horizontal,
}

/// What a run of spaces is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillSpaces {
    /// Spaces take a style and are painted with its background glyph.
    #[default]
    Background,
    /// Spaces stay blank and consume no style.
    Nothing,
}

/// Granularity at which styles rotate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyStylesOn {
    /// Every character takes the next style.
    #[default]
    Letter,
    /// Every word takes the next style.
    Word,
}

/// Full layout policy for one render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub direction: Direction,
    /// Background columns on each side of a character.
    pub horizontal_padding: u32,
    /// Background rows above and below a character.
    pub vertical_padding: u32,
    /// Width (horizontal) or height (vertical) of one space, in cells.
    pub space_size: u32,
    pub fill_spaces_with: FillSpaces,
    pub apply_styles_on: ApplyStylesOn,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            direction: Direction::Vertical,
            horizontal_padding: 1,
            vertical_padding: 1,
            space_size: 2,
            fill_spaces_with: FillSpaces::Background,
            apply_styles_on: ApplyStylesOn::Letter,
        }
    }
}

impl Options {
    /// Options with no padding and single-cell spaces.
    #[must_use]
    pub const fn compact(direction: Direction) -> Self {
        Self {
            direction,
            horizontal_padding: 0,
            vertical_padding: 0,
            space_size: 1,
            fill_spaces_with: FillSpaces::Nothing,
            apply_styles_on: ApplyStylesOn::Letter,
        }
    }

    /// Set the direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set both paddings.
    #[must_use]
    pub const fn with_padding(mut self, horizontal: u32, vertical: u32) -> Self {
        self.horizontal_padding = horizontal;
        self.vertical_padding = vertical;
        self
    }

    /// Set the space size.
    #[must_use]
    pub const fn with_space_size(mut self, space_size: u32) -> Self {
        self.space_size = space_size;
        self
    }

    /// Set how spaces are filled.
    #[must_use]
    pub const fn with_fill_spaces(mut self, fill: FillSpaces) -> Self {
        self.fill_spaces_with = fill;
        self
    }

    /// Set the style rotation granularity.
    #[must_use]
    pub const fn with_apply_styles_on(mut self, apply: ApplyStylesOn) -> Self {
        self.apply_styles_on = apply;
        self
    }

    /// Width of a padded character in cells.
    #[must_use]
    pub const fn cell_width(&self) -> usize {
        crate::font::LETTER_WIDTH + 2 * self.horizontal_padding as usize
    }

    /// Height of a padded character in rows.
    #[must_use]
    pub const fn cell_height(&self) -> usize {
        crate::font::LETTER_HEIGHT + 2 * self.vertical_padding as usize
    }

    /// Check every field against the ranges the editor accepts.
    pub fn validate(&self) -> Result<()> {
        check_range("horizontalPadding", self.horizontal_padding, &PADDING_RANGE)?;
        check_range("verticalPadding", self.vertical_padding, &PADDING_RANGE)?;
        check_range("spaceSize", self.space_size, &SPACE_SIZE_RANGE)?;
        Ok(())
    }

    /// Apply a partial update.
    #[must_use]
    pub fn patched(mut self, patch: &OptionsPatch) -> Self {
        if let Some(direction) = patch.direction {
            self.direction = direction;
        }
        if let Some(padding) = patch.horizontal_padding {
            self.horizontal_padding = padding;
        }
        if let Some(padding) = patch.vertical_padding {
            self.vertical_padding = padding;
        }
        if let Some(size) = patch.space_size {
            self.space_size = size;
        }
        if let Some(fill) = patch.fill_spaces_with {
            self.fill_spaces_with = fill;
        }
        if let Some(apply) = patch.apply_styles_on {
            self.apply_styles_on = apply;
        }
        self
    }
}

fn check_range(field: &'static str, value: u32, range: &RangeInclusive<u32>) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidOption { field, value })
    }
}

/// A partial [`Options`] update; `None` fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsPatch {
    pub direction: Option<Direction>,
    pub horizontal_padding: Option<u32>,
    pub vertical_padding: Option<u32>,
    pub space_size: Option<u32>,
    pub fill_spaces_with: Option<FillSpaces>,
    pub apply_styles_on: Option<ApplyStylesOn>,
}
