//! Sprite batch trait and pass configuration

use crate::content::{Font, Texture};
use crate::foundation::math::{Color, Rect, Vec2};

bitflags::bitflags! {
    /// Mirror flags applied when drawing a texture or text
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpriteEffects: u8 {
        /// Mirror along the vertical axis
        const FLIP_HORIZONTALLY = 0b01;
        /// Mirror along the horizontal axis
        const FLIP_VERTICALLY = 0b10;
    }
}

impl Default for SpriteEffects {
    fn default() -> Self {
        Self::empty()
    }
}

/// Order in which a pass resolves overlapping draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Submission order, no reordering
    Deferred,
    /// Sort by depth, largest depth first (1 = farthest, drawn first)
    BackToFront,
    /// Sort by depth, smallest depth first
    FrontToBack,
}

/// Blend state for a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Source replaces destination
    Opaque,
    /// Standard premultiplied alpha blending
    AlphaBlend,
    /// Additive blending
    Additive,
}

/// Errors surfaced by sprite batch backends
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// `begin` was called while a pass was already open
    #[error("sprite batch pass is already open")]
    BatchAlreadyBegun,

    /// A draw was issued outside an open pass
    #[error("sprite draw issued outside an open batch pass")]
    BatchNotBegun,

    /// `end` was called with no open pass
    #[error("sprite batch end without a matching begin")]
    UnbalancedEnd,

    /// Backend-specific failure
    #[error("backend error: {0}")]
    Backend(String),
}

/// Backend-agnostic batched sprite drawing
///
/// Contract: `begin` and `end` bracket every frame's draws and must stay
/// balanced; primitive draws are only valid between them. Depth ordering
/// under [`SortMode::BackToFront`] happens inside the pass using the
/// per-draw depth value, so callers submit in any order.
pub trait SpriteBatch {
    /// Open a batched pass with the given sort and blend configuration
    fn begin(&mut self, sort_mode: SortMode, blend_mode: BlendMode) -> Result<(), RenderError>;

    /// Draw a region of a texture
    ///
    /// `rotation_degrees` rotates around `origin` (in texture space);
    /// `depth` is the normalized layer value in [0, 1].
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
    ) -> Result<(), RenderError>;

    /// Draw a text string with font metrics in place of a source rectangle
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
    ) -> Result<(), RenderError>;

    /// Close the current pass
    fn end(&mut self) -> Result<(), RenderError>;
}
