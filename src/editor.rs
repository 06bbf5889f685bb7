//! Editing session: input text, styles, options, and the rendered output.
//!
//! Every mutation re-renders the banner in full and then persists the new
//! state. A failed save is logged, never fatal; the in-memory state is
//! already updated when it happens.

use crate::error::Result;
use crate::event::{LogLevel, emit_log};
use crate::options::{Options, OptionsPatch};
use crate::palette::{Palette, random_style};
use crate::renderer::render_text;
use crate::state::{EditorState, StateStore, load_state, save_state};
use crate::style::{Glyph, Style, StyleTarget};
use rand::Rng;

/// Input shown on first launch: every supported character.
pub const DEFAULT_INPUT: &str = "abcdefghijklmnopqrstubvwxyz0123456789";

/// State used when nothing valid is stored.
#[must_use]
pub fn default_state() -> EditorState {
    let styles = Palette::single(Style::new(Glyph("🌻".to_string()), Glyph("🌿".to_string())));
    let options = Options::default();
    let output_text = render_text(DEFAULT_INPUT, &styles, &options);
    EditorState {
        input_text: DEFAULT_INPUT.to_string(),
        styles,
        options,
        output_text,
    }
}

/// An editing session bound to a state store.
pub struct Editor<S: StateStore> {
    state: EditorState,
    store: S,
}

impl<S: StateStore> Editor<S> {
    /// Open a session, restoring stored state when it is valid.
    ///
    /// Stored output is discarded and rendered again from the restored
    /// input, styles, and options.
    pub fn open(store: S) -> Self {
        let state = match load_state(&store) {
            Some(mut state) => {
                state.output_text = render_text(&state.input_text, &state.styles, &state.options);
                emit_log(LogLevel::Debug, "restored stored editor state");
                state
            }
            None => default_state(),
        };
        Self { state, store }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &EditorState {
        &self.state
    }

    /// Current rendered banner.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.state.output_text
    }

    /// Borrow the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Persist the current state.
    pub fn save(&mut self) -> Result<()> {
        save_state(&mut self.store, &self.state)
    }

    /// Replace the input text.
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        self.update(|state| state.input_text = text.into());
    }

    /// Apply a partial options update.
    pub fn update_options(&mut self, patch: &OptionsPatch) {
        self.update(|state| state.options = state.options.patched(patch));
    }

    /// Replace all options.
    pub fn set_options(&mut self, options: Options) {
        self.update(|state| state.options = options);
    }

    /// Append a style.
    pub fn add_style(&mut self, style: Style) {
        self.update(|state| state.styles.push(style));
    }

    /// Append a random style.
    pub fn add_random_style<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let style = random_style(rng);
        self.add_style(style);
    }

    /// Replace the whole palette.
    pub fn set_styles(&mut self, styles: Palette) {
        self.update(|state| state.styles = styles);
    }

    /// Remove the style at `index`. The last style cannot be removed.
    pub fn remove_style(&mut self, index: usize) -> Result<Style> {
        self.try_update(|state| state.styles.remove(index))
    }

    /// Replace one glyph of the style at `index`.
    pub fn change_style(&mut self, index: usize, target: StyleTarget, glyph: Glyph) -> Result<()> {
        self.try_update(|state| state.styles.change(index, target, glyph))
    }

    /// Exchange foreground and background of the style at `index`.
    pub fn swap_style(&mut self, index: usize) -> Result<()> {
        self.try_update(|state| state.styles.swap(index))
    }

    /// Move the style at `from` to position `to`.
    pub fn move_style(&mut self, from: usize, to: usize) -> Result<()> {
        self.try_update(|state| state.styles.move_style(from, to))
    }

    fn update(&mut self, change: impl FnOnce(&mut EditorState)) {
        change(&mut self.state);
        self.commit();
    }

    fn try_update<T>(&mut self, change: impl FnOnce(&mut EditorState) -> Result<T>) -> Result<T> {
        let value = change(&mut self.state)?;
        self.commit();
        Ok(value)
    }

    fn commit(&mut self) {
        let state = &mut self.state;
        state.output_text = render_text(&state.input_text, &state.styles, &state.options);

        if let Err(e) = save_state(&mut self.store, &self.state) {
            emit_log(LogLevel::Warn, &format!("cannot save editor state: {e}"));
        }
    }
}
