//! Sprite rendering interface
//!
//! Keeps the UI scene-graph independent of any concrete graphics backend.
//! The scene manager opens one batched pass per frame; UI objects issue
//! per-primitive draws between those bounds.
//!
//! - [`SpriteBatch`]: the backend-agnostic batching trait
//! - [`RecordingBatch`]: a headless backend recording draw traffic

pub mod batch;
pub mod commands;
pub mod recording;

pub use batch::{BlendMode, RenderError, SortMode, SpriteBatch, SpriteEffects};
pub use commands::DrawCommand;
pub use recording::RecordingBatch;
