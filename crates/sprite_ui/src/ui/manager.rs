//! UI scene manager
//!
//! Owns every registered scene and drives exactly zero or one active scene
//! per frame. The manager is the only caller of the sprite batch's
//! begin/end pair; scene members issue primitive draws between them.

use super::scene::UiScene;
use crate::foundation::time::FrameTime;
use crate::render::{BlendMode, RenderError, SortMode, SpriteBatch};
use std::collections::HashMap;

/// Name-keyed registry of UI scenes with one optional active scene
///
/// The active scene is tracked by name, so removing a scene can never
/// leave a dangling reference: `remove` and `clear` reset the active
/// selection when it names a dropped scene.
#[derive(Debug, Default)]
pub struct UiSceneManager {
    scenes: HashMap<String, UiScene>,
    active_scene: Option<String>,
}

impl UiSceneManager {
    /// Create a manager with no scenes and no active scene
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene under its name
    ///
    /// First registration wins: a scene whose name is already registered
    /// is dropped, never overwritten and never an error.
    pub fn add(&mut self, scene: UiScene) {
        if self.scenes.contains_key(scene.name()) {
            log::debug!(
                "scene '{}' already registered, keeping the first registration",
                scene.name()
            );
            return;
        }
        self.scenes.insert(scene.name().to_owned(), scene);
    }

    /// Select the active scene by name
    ///
    /// On a miss the previous selection is unchanged and false is
    /// returned.
    pub fn set_active_scene(&mut self, name: &str) -> bool {
        if self.scenes.contains_key(name) {
            self.active_scene = Some(name.to_owned());
            true
        } else {
            log::debug!("cannot activate unknown scene '{name}'");
            false
        }
    }

    /// The currently active scene, if one is selected
    #[must_use]
    pub fn active_scene(&self) -> Option<&UiScene> {
        self.active_scene
            .as_deref()
            .and_then(|name| self.scenes.get(name))
    }

    /// Name of the currently active scene, if one is selected
    #[must_use]
    pub fn active_scene_name(&self) -> Option<&str> {
        self.active_scene.as_deref()
    }

    /// Look up a registered scene by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&UiScene> {
        self.scenes.get(name)
    }

    /// Mutable access to a registered scene by name
    pub fn find_mut(&mut self, name: &str) -> Option<&mut UiScene> {
        self.scenes.get_mut(name)
    }

    /// Remove a registered scene by name
    ///
    /// Clears the active selection when it names the removed scene.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.scenes.remove(name).is_some();
        if removed && self.active_scene.as_deref() == Some(name) {
            log::debug!("removed scene '{name}' was active, clearing the active selection");
            self.active_scene = None;
        }
        removed
    }

    /// Drop every registered scene and the active selection
    pub fn clear(&mut self) {
        self.scenes.clear();
        self.active_scene = None;
    }

    /// Number of registered scenes
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Per-frame update, delegated to the active scene
    ///
    /// No-op when no scene is active.
    pub fn update(&mut self, time: &FrameTime) {
        if let Some(name) = self.active_scene.as_deref() {
            if let Some(scene) = self.scenes.get_mut(name) {
                scene.update(time);
            }
        }
    }

    /// Per-frame draw
    ///
    /// Opens one back-to-front, alpha-blended batch pass, draws the active
    /// scene if any, then closes the pass. The begin/end pair stays
    /// balanced exactly once per call, even with no active scene and even
    /// when a member draw fails.
    pub fn draw(&self, _time: &FrameTime, batch: &mut dyn SpriteBatch) -> Result<(), RenderError> {
        batch.begin(SortMode::BackToFront, BlendMode::AlphaBlend)?;

        let drawn = self
            .active_scene()
            .map_or(Ok(()), |scene| scene.draw(batch));

        batch.end()?;
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::render::{DrawCommand, RecordingBatch};
    use crate::ui::transform::Transform2D;
    use crate::ui::widgets::{UiObjectType, UiTextObject, UiTextureObject};
    use nalgebra::Vector2;

    fn hud_manager() -> UiSceneManager {
        let mut content = ContentStore::new();
        let texture = content.load_texture("ui_progress_32_8", 32, 8);
        let font = content.load_font("ui_font", 14.0);

        let mut scene = UiScene::new("ui");
        scene.add(UiTextureObject::new(
            "health",
            UiObjectType::Progress,
            Transform2D::at(Vector2::new(50.0, 100.0)),
            0.5,
            texture,
        ));
        scene.add(UiTextObject::new(
            "player name",
            UiObjectType::Text,
            Transform2D::at(Vector2::new(50.0, 50.0)),
            0.2,
            font,
            "Brutus Maximus",
        ));

        let mut manager = UiSceneManager::new();
        manager.add(scene);
        manager
    }

    #[test]
    fn duplicate_scene_name_keeps_first_registration() {
        let mut manager = UiSceneManager::new();

        let mut first = UiScene::new("main");
        first.add(UiTextObject::new(
            "marker",
            UiObjectType::Text,
            Transform2D::identity(),
            0.0,
            ContentStore::new().load_font("f", 10.0),
            "first",
        ));
        let first_id = first.id().to_owned();

        manager.add(first);
        manager.add(UiScene::new("main"));

        assert_eq!(manager.scene_count(), 1);
        assert_eq!(manager.find("main").unwrap().id(), first_id);
        assert_eq!(manager.find("main").unwrap().len(), 1);
    }

    #[test]
    fn activating_missing_scene_fails_and_keeps_previous() {
        let mut manager = hud_manager();

        assert!(manager.set_active_scene("ui"));
        assert!(!manager.set_active_scene("missing"));
        assert_eq!(manager.active_scene_name(), Some("ui"));
    }

    #[test]
    fn draw_without_active_scene_still_balances_the_pass() {
        let manager = hud_manager();
        let mut batch = RecordingBatch::new();

        manager.draw(&FrameTime::zero(), &mut batch).unwrap();

        assert_eq!(batch.passes_completed(), 1);
        assert!(batch.commands().is_empty());
    }

    #[test]
    fn draw_submits_members_in_insertion_order_with_stored_state() {
        let mut manager = hud_manager();
        assert!(manager.set_active_scene("ui"));

        let mut batch = RecordingBatch::new();
        manager.draw(&FrameTime::zero(), &mut batch).unwrap();

        assert_eq!(batch.passes_completed(), 1);
        assert_eq!(batch.commands().len(), 2);

        match &batch.commands()[0] {
            DrawCommand::Texture {
                position, depth, ..
            } => {
                assert_eq!(*position, Vector2::new(50.0, 100.0));
                assert!((depth - 0.5).abs() < f32::EPSILON);
            }
            other => panic!("expected the texture member first, got {other:?}"),
        }
        match &batch.commands()[1] {
            DrawCommand::Text {
                text,
                position,
                depth,
                ..
            } => {
                assert_eq!(text, "Brutus Maximus");
                assert_eq!(*position, Vector2::new(50.0, 50.0));
                assert!((depth - 0.2).abs() < f32::EPSILON);
            }
            other => panic!("expected the text member second, got {other:?}"),
        }
    }

    #[test]
    fn removing_the_active_scene_clears_the_selection() {
        let mut manager = hud_manager();
        assert!(manager.set_active_scene("ui"));

        assert!(manager.remove("ui"));
        assert!(manager.active_scene_name().is_none());
        assert!(manager.active_scene().is_none());

        // Update and draw must not touch the removed scene; draw still
        // opens and closes exactly one (empty) pass.
        manager.update(&FrameTime::zero());
        let mut batch = RecordingBatch::new();
        manager.draw(&FrameTime::zero(), &mut batch).unwrap();
        assert_eq!(batch.passes_completed(), 1);
        assert!(batch.commands().is_empty());
    }

    #[test]
    fn removing_an_inactive_scene_keeps_the_selection() {
        let mut manager = hud_manager();
        manager.add(UiScene::new("pause menu"));
        assert!(manager.set_active_scene("ui"));

        assert!(manager.remove("pause menu"));
        assert_eq!(manager.active_scene_name(), Some("ui"));
        assert!(!manager.remove("pause menu"));
    }

    #[test]
    fn clear_drops_scenes_and_selection() {
        let mut manager = hud_manager();
        assert!(manager.set_active_scene("ui"));

        manager.clear();

        assert_eq!(manager.scene_count(), 0);
        assert!(manager.active_scene_name().is_none());
    }

    #[test]
    fn update_activates_members_of_the_active_scene() {
        let mut manager = hud_manager();
        assert!(manager.set_active_scene("ui"));

        manager.update(&FrameTime::zero());

        let scene = manager.find("ui").unwrap();
        assert!(scene.objects().iter().all(|node| node.object().is_running()));
    }
}
