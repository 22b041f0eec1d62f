//! Recorded draw commands

use super::batch::SpriteEffects;
use crate::content::{Font, Texture};
use crate::foundation::math::{Color, Rect, Vec2};

/// One primitive draw captured by a recording backend
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A textured quad draw
    Texture {
        /// Texture sampled by the draw
        texture: Texture,
        /// Screen-space position
        position: Vec2,
        /// Sampled sub-rectangle
        source: Rect,
        /// Blend color
        color: Color,
        /// Rotation around the origin, in degrees
        rotation_degrees: f32,
        /// Rotation origin in texture space
        origin: Vec2,
        /// Scale factors
        scale: Vec2,
        /// Mirror flags
        effects: SpriteEffects,
        /// Layer depth in [0, 1]
        depth: f32,
    },
    /// A text string draw
    Text {
        /// Font used for glyph metrics
        font: Font,
        /// Rendered string
        text: String,
        /// Screen-space position
        position: Vec2,
        /// Blend color
        color: Color,
        /// Rotation around the origin, in degrees
        rotation_degrees: f32,
        /// Rotation origin
        origin: Vec2,
        /// Scale factors
        scale: Vec2,
        /// Mirror flags
        effects: SpriteEffects,
        /// Layer depth in [0, 1]
        depth: f32,
    },
}

impl DrawCommand {
    /// Layer depth carried by the command
    #[must_use]
    pub const fn depth(&self) -> f32 {
        match self {
            Self::Texture { depth, .. } | Self::Text { depth, .. } => *depth,
        }
    }

    /// Screen-space position carried by the command
    #[must_use]
    pub fn position(&self) -> Vec2 {
        match self {
            Self::Texture { position, .. } | Self::Text { position, .. } => *position,
        }
    }
}
