//! Attachable UI sub-components
//!
//! A UI object carries an ordered list of behavior components. Lifecycle
//! hooks mirror the object's own: `awake` fires on attach, `start` fires
//! when the owning object is (or becomes) running, `update` every frame
//! after that.

use crate::foundation::time::FrameTime;
use crate::ui::transform::Transform2D;
use std::any::Any;

/// Behavior attached to a single UI object
///
/// Components are ordered by [`priority`](Self::priority) (ascending,
/// stable — equal priorities keep insertion order). Implementors must be
/// `'static` so lookups can downcast through [`as_any`](Self::as_any).
pub trait UiComponent: Any {
    /// Sort key deciding execution order within the owner's list
    fn priority(&self) -> i32 {
        0
    }

    /// Called once when the component is attached, with the owner's id
    fn on_attach(&mut self, _owner_id: &str) {}

    /// First-time wake-up, called immediately after attach
    fn awake(&mut self) {}

    /// First-frame setup, called once when the owner starts running
    fn start(&mut self) {}

    /// Per-frame update with mutable access to the owner's transform
    fn update(&mut self, _transform: &mut Transform2D, _time: &FrameTime) {}

    /// Clone into a fresh boxed component with no shared state
    fn clone_box(&self) -> Box<dyn UiComponent>;

    /// Upcast for type-based lookups
    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn UiComponent> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Owner-side record of one attached component
///
/// The running flag lives here rather than in each component so that
/// implementors only provide behavior.
#[derive(Clone)]
pub(crate) struct ComponentSlot {
    pub(crate) running: bool,
    pub(crate) component: Box<dyn UiComponent>,
}

impl ComponentSlot {
    pub(crate) fn new(component: Box<dyn UiComponent>) -> Self {
        Self {
            running: false,
            component,
        }
    }
}

impl std::fmt::Debug for ComponentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentSlot")
            .field("running", &self.running)
            .field("priority", &self.component.priority())
            .finish()
    }
}
