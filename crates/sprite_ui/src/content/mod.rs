//! Content handles
//!
//! The UI layer never parses or decodes media. The host's content pipeline
//! loads textures and fonts; this module holds the opaque handles the UI
//! stores and hands back to the sprite batch at draw time. Handles are
//! `Copy` borrows of host-owned resources: the UI never mutates or
//! releases what they refer to.

use crate::foundation::math::Rect;
use std::collections::HashMap;

/// Handle to a host-loaded texture plus its pixel dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Texture {
    id: u64,
    width: u32,
    height: u32,
}

impl Texture {
    /// Opaque backend identifier
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Full-texture source rectangle
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Handle to a host-loaded font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    id: u64,
    line_height: f32,
}

impl Font {
    /// Opaque backend identifier
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Height of a text line in pixels at scale 1
    #[must_use]
    pub const fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Name-keyed registry of content handles
///
/// Stands in for the host engine's content manager: the host registers
/// what it has loaded, the UI looks handles up by name. Registering a name
/// twice returns the handle from the first registration.
#[derive(Debug, Default)]
pub struct ContentStore {
    textures: HashMap<String, Texture>,
    fonts: HashMap<String, Font>,
    next_id: u64,
}

impl ContentStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loaded texture under `name` and return its handle
    pub fn load_texture(&mut self, name: &str, width: u32, height: u32) -> Texture {
        if let Some(existing) = self.textures.get(name) {
            return *existing;
        }

        let texture = Texture {
            id: self.allocate_id(),
            width,
            height,
        };
        log::debug!("registered texture '{name}' ({width}x{height})");
        self.textures.insert(name.to_owned(), texture);
        texture
    }

    /// Register a loaded font under `name` and return its handle
    pub fn load_font(&mut self, name: &str, line_height: f32) -> Font {
        if let Some(existing) = self.fonts.get(name) {
            return *existing;
        }

        let font = Font {
            id: self.allocate_id(),
            line_height,
        };
        log::debug!("registered font '{name}' (line height {line_height})");
        self.fonts.insert(name.to_owned(), font);
        font
    }

    /// Look up a texture handle by name
    #[must_use]
    pub fn texture(&self, name: &str) -> Option<Texture> {
        self.textures.get(name).copied()
    }

    /// Look up a font handle by name
    #[must_use]
    pub fn font(&self, name: &str) -> Option<Font> {
        self.fonts.get(name).copied()
    }

    fn allocate_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}
