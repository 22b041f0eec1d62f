//! Retained-mode UI scene-graph
//!
//! Architecture, leaves first:
//! - [`Transform2D`]: screen-space translation/scale/rotation value holder
//! - [`UiComponent`]: behavior attachable to a single UI object
//! - widgets: the [`UiObject`] base and its texture/text variants
//! - [`UiScene`]: ordered collection updated and drawn as a unit
//! - [`UiSceneManager`]: owns all scenes, drives the one active scene
//!
//! The host engine calls the manager's update then draw once per frame;
//! everything below that is synchronous single-owner bookkeeping.

pub mod component;
pub mod manager;
pub mod scene;
pub mod transform;
pub mod widgets;

pub use component::UiComponent;
pub use manager::UiSceneManager;
pub use scene::UiScene;
pub use transform::Transform2D;
pub use widgets::{UiNode, UiObject, UiObjectType, UiTextObject, UiTextureObject};
