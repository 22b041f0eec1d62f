//! Recording sprite batch
//!
//! Headless backend that captures draw traffic instead of rendering it.
//! Used by tests to assert on submitted commands and by demos to run
//! without a graphics device. Enforces the begin/end balance contract.

use super::batch::{BlendMode, RenderError, SortMode, SpriteBatch, SpriteEffects};
use super::commands::DrawCommand;
use crate::content::{Font, Texture};
use crate::foundation::math::{Color, Rect, Vec2};

/// Sprite batch that records commands in submission order
#[derive(Debug, Default)]
pub struct RecordingBatch {
    commands: Vec<DrawCommand>,
    open_pass: Option<(SortMode, BlendMode)>,
    passes_completed: usize,
}

impl RecordingBatch {
    /// Create an empty recording batch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, in submission order
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of begin/end pairs completed
    #[must_use]
    pub const fn passes_completed(&self) -> usize {
        self.passes_completed
    }

    /// Configuration of the currently open pass, if any
    #[must_use]
    pub const fn open_pass(&self) -> Option<(SortMode, BlendMode)> {
        self.open_pass
    }

    /// Drop all recorded commands and pass counters
    pub fn reset(&mut self) {
        self.commands.clear();
        self.open_pass = None;
        self.passes_completed = 0;
    }

    fn require_open(&self) -> Result<(), RenderError> {
        if self.open_pass.is_some() {
            Ok(())
        } else {
            Err(RenderError::BatchNotBegun)
        }
    }
}

impl SpriteBatch for RecordingBatch {
    fn begin(&mut self, sort_mode: SortMode, blend_mode: BlendMode) -> Result<(), RenderError> {
        if self.open_pass.is_some() {
            return Err(RenderError::BatchAlreadyBegun);
        }
        log::trace!("batch begin ({sort_mode:?}, {blend_mode:?})");
        self.open_pass = Some((sort_mode, blend_mode));
        Ok(())
    }

    fn draw_texture(
        &mut self,
        texture: Texture,
        position: Vec2,
        source: Rect,
        color: Color,
        rotation_degrees: f32,
        origin: Vec2,
        scale: Vec2,
        effects: SpriteEffects,
        depth: f32,
    ) -> Result<(), RenderError> {
        self.require_open()?;
        self.commands.push(DrawCommand::Texture {
            texture,
            position,
            source,
            color,
            rotation_degrees,
            origin,
            scale,
            effects,
            depth,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        position: Vec2,
        color: Color,
        rotation_degrees: f32,
        origin: Vec2,
        scale: Vec2,
        effects: SpriteEffects,
        depth: f32,
    ) -> Result<(), RenderError> {
        self.require_open()?;
        self.commands.push(DrawCommand::Text {
            font,
            text: text.to_owned(),
            position,
            color,
            rotation_degrees,
            origin,
            scale,
            effects,
            depth,
        });
        Ok(())
    }

    fn end(&mut self) -> Result<(), RenderError> {
        if self.open_pass.take().is_none() {
            return Err(RenderError::UnbalancedEnd);
        }
        self.passes_completed += 1;
        log::trace!(
            "batch end ({} commands, {} passes)",
            self.commands.len(),
            self.passes_completed
        );
        Ok(())
    }
}
