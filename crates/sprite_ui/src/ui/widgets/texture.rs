//! Texture object - draws a texture region on screen

use super::core::{UiObject, UiObjectType};
use crate::content::Texture;
use crate::foundation::math::{Color, Rect, Vec2};
use crate::foundation::time::FrameTime;
use crate::render::{RenderError, SpriteBatch, SpriteEffects};
use crate::ui::transform::Transform2D;

/// UI element rendering a texture region
///
/// Holds a default texture, an optional alternate (hover/press swaps), and
/// the source sub-rectangle to sample. The current texture selects between
/// default and alternate and is what `draw` samples.
#[derive(Debug)]
pub struct UiTextureObject {
    /// Shared base state
    pub object: UiObject,

    /// Texture shown by default
    pub default_texture: Texture,

    /// Alternate texture for hover/press effects, if any
    pub alternate_texture: Option<Texture>,

    /// Region of the current texture to sample, e.g. the filled part of a
    /// progress bar
    pub source_rectangle: Rect,

    /// Texture sampled by `draw`; either the default or the alternate
    pub current_texture: Texture,
}

impl UiTextureObject {
    /// Create a white-blend, unrotated, zero-origin texture object sampling
    /// the full texture bounds
    #[must_use]
    pub fn new(
        name: &str,
        object_type: UiObjectType,
        transform: Transform2D,
        layer_depth: f32,
        default_texture: Texture,
    ) -> Self {
        Self::with_style(
            name,
            object_type,
            transform,
            layer_depth,
            Color::WHITE,
            SpriteEffects::empty(),
            Vec2::zeros(),
            default_texture,
            None,
            default_texture.bounds(),
        )
    }

    /// Create a texture object with full control over its draw state
    #[must_use]
    pub fn with_style(
        name: &str,
        object_type: UiObjectType,
        transform: Transform2D,
        layer_depth: f32,
        color: Color,
        sprite_effects: SpriteEffects,
        origin: Vec2,
        default_texture: Texture,
        alternate_texture: Option<Texture>,
        source_rectangle: Rect,
    ) -> Self {
        Self {
            object: UiObject::new(
                name,
                object_type,
                transform,
                layer_depth,
                color,
                sprite_effects,
                origin,
            ),
            default_texture,
            alternate_texture,
            source_rectangle,
            current_texture: default_texture,
        }
    }

    /// Make the default texture current
    pub fn use_default_texture(&mut self) {
        self.current_texture = self.default_texture;
    }

    /// Make the alternate texture current
    ///
    /// No-op when no alternate was provided.
    pub fn use_alternate_texture(&mut self) {
        if let Some(alternate) = self.alternate_texture {
            self.current_texture = alternate;
        } else {
            log::debug!(
                "'{}' has no alternate texture, keeping current",
                self.object.name()
            );
        }
    }

    /// Per-frame update, forwarded to the base
    pub fn update(&mut self, time: &FrameTime) {
        self.object.update(time);
    }

    /// Draw the current texture's source region at this object's transform
    pub fn draw(&self, batch: &mut dyn SpriteBatch) -> Result<(), RenderError> {
        batch.draw_texture(
            self.current_texture,
            self.object.transform.translation,
            self.source_rectangle,
            self.object.color,
            self.object.transform.rotation_degrees,
            self.object.origin,
            self.object.transform.scale,
            self.object.sprite_effects,
            self.object.layer_depth(),
        )
    }

    /// Deep copy with a freshly generated id
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            object: self.object.deep_clone(),
            default_texture: self.default_texture,
            alternate_texture: self.alternate_texture,
            source_rectangle: self.source_rectangle,
            current_texture: self.current_texture,
        }
    }
}
