//! # sprite_ui
//!
//! Retained-mode 2D UI overlay scene-graph for game HUDs: health bars,
//! name labels, progress textures.
//!
//! ## Architecture
//!
//! - **foundation**: math aliases, frame timing, logging setup
//! - **content**: opaque texture/font handles borrowed from the host
//! - **render**: the backend-agnostic [`SpriteBatch`](render::SpriteBatch)
//!   seam plus a headless recording backend
//! - **ui**: the scene-graph — transform, object hierarchy, scene, manager
//! - **config**: serde-backed config loading for host applications
//!
//! The host engine owns the game loop, content pipeline, and graphics
//! device. Once per frame it calls [`UiSceneManager::update`] then
//! [`UiSceneManager::draw`] on the calling thread; the manager opens one
//! back-to-front alpha-blended batch pass, the active scene's objects draw
//! themselves into it, and the pass closes. Everything is synchronous,
//! single-owner, in-process bookkeeping.
//!
//! ## Quick start
//!
//! ```
//! use sprite_ui::prelude::*;
//!
//! let mut content = ContentStore::new();
//! let texture = content.load_texture("ui_progress_32_8", 32, 8);
//!
//! let mut scene = UiScene::new("main game ui");
//! scene.add(UiTextureObject::new(
//!     "health",
//!     UiObjectType::Progress,
//!     Transform2D::at(Vec2::new(50.0, 100.0)),
//!     0.0,
//!     texture,
//! ));
//!
//! let mut manager = UiSceneManager::new();
//! manager.add(scene);
//! assert!(manager.set_active_scene("main game ui"));
//!
//! let mut batch = RecordingBatch::new();
//! manager.update(&FrameTime::zero());
//! manager.draw(&FrameTime::zero(), &mut batch).unwrap();
//! assert_eq!(batch.commands().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod content;
pub mod foundation;
pub mod render;
pub mod ui;

pub use ui::{UiNode, UiObject, UiObjectType, UiScene, UiSceneManager, UiTextObject, UiTextureObject};

/// Common imports for overlay users
pub mod prelude {
    pub use crate::config::{Config, ConfigError};
    pub use crate::content::{ContentStore, Font, Texture};
    pub use crate::foundation::math::{Color, Rect, Vec2};
    pub use crate::foundation::time::{FrameTime, Timer};
    pub use crate::render::{
        BlendMode, DrawCommand, RecordingBatch, RenderError, SortMode, SpriteBatch, SpriteEffects,
    };
    pub use crate::ui::{
        Transform2D, UiComponent, UiNode, UiObject, UiObjectType, UiScene, UiSceneManager,
        UiTextObject, UiTextureObject,
    };
}
