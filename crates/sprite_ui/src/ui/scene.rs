//! UI scene - an ordered collection of UI objects

use super::widgets::core::generate_id;
use super::widgets::UiNode;
use crate::foundation::time::FrameTime;
use crate::render::{RenderError, SpriteBatch};

/// Id prefix for UI scenes
pub(crate) const SCENE_ID_PREFIX: &str = "UIS_";

/// Named, identified, ordered collection of UI objects
///
/// Insertion order is update and draw order; depth ordering across
/// overlapping members happens inside the sprite batch pass, not here.
/// Duplicate member names are not guarded (unlike scene names at the
/// manager).
#[derive(Debug)]
pub struct UiScene {
    id: String,
    name: String,
    objects: Vec<UiNode>,
}

impl UiScene {
    /// Create an empty scene
    ///
    /// The name is trimmed; a blank name falls back to the generated id.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let id = generate_id(SCENE_ID_PREFIX);
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            id.clone()
        } else {
            trimmed.to_owned()
        };

        Self {
            id,
            name,
            objects: Vec::new(),
        }
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Scene name, the manager's registry key
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a UI object; it will be drawn after existing members
    pub fn add(&mut self, object: impl Into<UiNode>) {
        self.objects.push(object.into());
    }

    /// Remove the member with the given object id
    ///
    /// Returns false when no member matches.
    pub fn remove(&mut self, object_id: &str) -> bool {
        let before = self.objects.len();
        self.objects.retain(|node| node.object().id() != object_id);
        self.objects.len() != before
    }

    /// First member with the given object id
    #[must_use]
    pub fn find_by_id(&self, object_id: &str) -> Option<&UiNode> {
        self.objects
            .iter()
            .find(|node| node.object().id() == object_id)
    }

    /// First member with the given name
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&UiNode> {
        self.objects.iter().find(|node| node.object().name() == name)
    }

    /// Mutable access to the first member with the given name
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut UiNode> {
        self.objects
            .iter_mut()
            .find(|node| node.object().name() == name)
    }

    /// Members in insertion order
    #[must_use]
    pub fn objects(&self) -> &[UiNode] {
        &self.objects
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Update every member in insertion order
    ///
    /// Members added since the last frame are initialized here, matching
    /// the running-flag contract (first update activates the object).
    pub fn update(&mut self, time: &FrameTime) {
        for node in &mut self.objects {
            if !node.object().is_running() {
                node.initialize();
            }
            node.update(time);
        }
    }

    /// Draw every member in insertion order
    ///
    /// No enabled-filtering or depth sorting is applied; each member
    /// submits its own depth to the already-open batch pass.
    pub fn draw(&self, batch: &mut dyn SpriteBatch) -> Result<(), RenderError> {
        for node in &self.objects {
            node.draw(batch)?;
        }
        Ok(())
    }
}
