//! UI object hierarchy
//!
//! - `core`: shared [`UiObject`] base and category tags
//! - `texture`: [`UiTextureObject`] drawing a texture region
//! - `text`: [`UiTextObject`] drawing a string
//!
//! The element kinds form a closed set, so dispatch goes through the
//! [`UiNode`] enum rather than open-ended trait objects.

pub mod core;
pub mod text;
pub mod texture;

pub use self::core::{UiObject, UiObjectType};
pub use self::text::UiTextObject;
pub use self::texture::UiTextureObject;

use crate::foundation::time::FrameTime;
use crate::render::{RenderError, SpriteBatch};

/// A renderable scene member: one of the concrete UI element kinds
#[derive(Debug)]
pub enum UiNode {
    /// Texture-region element
    Texture(UiTextureObject),
    /// Text-string element
    Text(UiTextObject),
}

impl UiNode {
    /// Shared base state of the element
    #[must_use]
    pub const fn object(&self) -> &UiObject {
        match self {
            Self::Texture(texture) => &texture.object,
            Self::Text(text) => &text.object,
        }
    }

    /// Mutable shared base state of the element
    pub fn object_mut(&mut self) -> &mut UiObject {
        match self {
            Self::Texture(texture) => &mut texture.object,
            Self::Text(text) => &mut text.object,
        }
    }

    /// One-time activation, forwarded to the base
    pub fn initialize(&mut self) {
        self.object_mut().initialize();
    }

    /// Per-frame update
    pub fn update(&mut self, time: &FrameTime) {
        match self {
            Self::Texture(texture) => texture.update(time),
            Self::Text(text) => text.update(time),
        }
    }

    /// Draw the element between the manager's batch bounds
    pub fn draw(&self, batch: &mut dyn SpriteBatch) -> Result<(), RenderError> {
        match self {
            Self::Texture(texture) => texture.draw(batch),
            Self::Text(text) => text.draw(batch),
        }
    }

    /// Deep copy with a freshly generated id
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        match self {
            Self::Texture(texture) => Self::Texture(texture.deep_clone()),
            Self::Text(text) => Self::Text(text.deep_clone()),
        }
    }
}

impl From<UiTextureObject> for UiNode {
    fn from(object: UiTextureObject) -> Self {
        Self::Texture(object)
    }
}

impl From<UiTextObject> for UiNode {
    fn from(object: UiTextObject) -> Self {
        Self::Text(object)
    }
}
