//! Shared UI object base
//!
//! Every renderable overlay element (texture or text) embeds a [`UiObject`]
//! carrying identity, transform, draw state, and the attached component
//! list. The concrete visual variants live in the sibling modules.

use crate::foundation::math::{Color, Vec2};
use crate::foundation::time::FrameTime;
use crate::render::SpriteEffects;
use crate::ui::component::{ComponentSlot, UiComponent};
use crate::ui::transform::Transform2D;

/// Capacity hint for the attached component list
const DEFAULT_COMPONENT_CAPACITY: usize = 4;

/// Id prefix for UI objects
pub(crate) const OBJECT_ID_PREFIX: &str = "UIO-";

/// Generate a fresh opaque identifier with the given prefix
///
/// Random per instance; no shared counter is involved.
pub(crate) fn generate_id(prefix: &str) -> String {
    format!("{prefix}{:032x}", rand::random::<u128>())
}

/// Category of a UI object, used for search and grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiObjectType {
    /// A text label
    Text,
    /// A texture drawn as-is
    Texture,
    /// A full-screen or panel background
    Background,
    /// A progress indicator (health, loading)
    Progress,
}

/// Common state for every renderable UI element
///
/// Owns its [`Transform2D`] and attached components exclusively. The
/// running flag flips once on first initialization; the enabled flag is
/// caller-controlled data and is not consulted during traversal.
#[derive(Debug)]
pub struct UiObject {
    /// Unique identifier, generated at construction
    id: String,

    /// Friendly name; falls back to the id when blank
    name: String,

    /// Category tag
    object_type: UiObjectType,

    /// Set once on first initialize
    is_running: bool,

    /// Enabled by default on instantiation
    is_enabled: bool,

    /// Drawn translation, rotation, and scale on screen
    pub transform: Transform2D,

    /// Depth used to order overlapping draws (0 = front-most, 1 = back-most)
    layer_depth: f32,

    /// Mirror flags applied at draw time
    pub sprite_effects: SpriteEffects,

    /// Blend color for the texture or text
    pub color: Color,

    /// Rotation origin in texture space ([0,0] to [w,h])
    ///
    /// Useful for rotating around unusual pivots, e.g. a speedometer needle.
    pub origin: Vec2,

    /// Attached components in execution order
    components: Vec<ComponentSlot>,
}

impl UiObject {
    /// Create a UI object base
    ///
    /// A blank or whitespace name is replaced by the generated id. An
    /// out-of-range `layer_depth` silently resets to 0; this lenient
    /// clamping is intentional, matching [`set_layer_depth`](Self::set_layer_depth).
    #[must_use]
    pub fn new(
        name: &str,
        object_type: UiObjectType,
        transform: Transform2D,
        layer_depth: f32,
        color: Color,
        sprite_effects: SpriteEffects,
        origin: Vec2,
    ) -> Self {
        let id = generate_id(OBJECT_ID_PREFIX);
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            id.clone()
        } else {
            trimmed.to_owned()
        };

        let mut object = Self {
            id,
            name,
            object_type,
            is_running: false,
            is_enabled: true,
            transform,
            layer_depth: 0.0,
            sprite_effects,
            color,
            origin,
            components: Vec::with_capacity(DEFAULT_COMPONENT_CAPACITY),
        };
        object.set_layer_depth(layer_depth);
        object
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Friendly name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the object; blank names fall back to the id
    pub fn set_name(&mut self, name: &str) {
        let trimmed = name.trim();
        self.name = if trimmed.is_empty() {
            self.id.clone()
        } else {
            trimmed.to_owned()
        };
    }

    /// Category tag
    #[must_use]
    pub const fn object_type(&self) -> UiObjectType {
        self.object_type
    }

    /// Whether first-time initialization has run
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Whether the object is enabled
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Enable or disable the object
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    /// Layer depth in [0, 1]
    #[must_use]
    pub const fn layer_depth(&self) -> f32 {
        self.layer_depth
    }

    /// Set the layer depth
    ///
    /// Values outside [0, 1] reset to 0 rather than erroring; lenient by
    /// contract, with a warning in the log.
    pub fn set_layer_depth(&mut self, depth: f32) {
        if (0.0..=1.0).contains(&depth) {
            self.layer_depth = depth;
        } else {
            log::warn!(
                "layer depth {depth} out of range for '{}', resetting to 0",
                self.name
            );
            self.layer_depth = 0.0;
        }
    }

    /// One-time activation
    ///
    /// The first call flips the running flag, orders the component list by
    /// priority, and starts every attached component. Repeat calls are
    /// no-ops.
    pub fn initialize(&mut self) {
        if self.is_running {
            return;
        }
        self.is_running = true;

        self.sort_components();
        for slot in &mut self.components {
            if !slot.running {
                slot.component.start();
                slot.running = true;
            }
        }
    }

    /// Per-frame update, forwarded to every running component in order
    pub fn update(&mut self, time: &FrameTime) {
        for slot in &mut self.components {
            if slot.running {
                slot.component.update(&mut self.transform, time);
            }
        }
    }

    /// Attach a component
    ///
    /// Sets the owner back-link, fires `awake`, and appends. If the object
    /// is already running the component is started immediately and the
    /// list is re-sorted by priority (insertion order breaks ties).
    pub fn add_component(&mut self, mut component: Box<dyn UiComponent>) {
        component.on_attach(&self.id);
        component.awake();
        self.components.push(ComponentSlot::new(component));

        if self.is_running {
            if let Some(slot) = self.components.last_mut() {
                slot.component.start();
                slot.running = true;
            }
            self.sort_components();
        }
    }

    /// Number of attached components
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// First attached component of type `T`, in list order
    #[must_use]
    pub fn get_component<T: UiComponent>(&self) -> Option<&T> {
        self.components
            .iter()
            .find_map(|slot| slot.component.as_any().downcast_ref::<T>())
    }

    /// First attached component of type `T` matching `pred`
    pub fn get_component_where<T, P>(&self, pred: P) -> Option<&T>
    where
        T: UiComponent,
        P: Fn(&T) -> bool,
    {
        self.components
            .iter()
            .filter_map(|slot| slot.component.as_any().downcast_ref::<T>())
            .find(|component| pred(component))
    }

    /// All attached components of type `T`, in list order
    #[must_use]
    pub fn get_components<T: UiComponent>(&self) -> Vec<&T> {
        self.components
            .iter()
            .filter_map(|slot| slot.component.as_any().downcast_ref::<T>())
            .collect()
    }

    /// All attached components of type `T` matching `pred`, in list order
    pub fn get_components_where<T, P>(&self, pred: P) -> Vec<&T>
    where
        T: UiComponent,
        P: Fn(&T) -> bool,
    {
        self.components
            .iter()
            .filter_map(|slot| slot.component.as_any().downcast_ref::<T>())
            .filter(|component| pred(component))
            .collect()
    }

    /// Deep copy with a freshly generated id
    ///
    /// Value fields are copied, components are cloned (never shared), and
    /// the copy starts not-running so it initializes independently.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            id: generate_id(OBJECT_ID_PREFIX),
            name: format!("Clone - {}", self.name),
            object_type: self.object_type,
            is_running: false,
            is_enabled: self.is_enabled,
            transform: self.transform.clone(),
            layer_depth: self.layer_depth,
            sprite_effects: self.sprite_effects,
            color: self.color,
            origin: self.origin,
            components: self
                .components
                .iter()
                .map(|slot| ComponentSlot::new(slot.component.clone_box()))
                .collect(),
        }
    }

    // Stable sort keeps insertion order for equal priorities.
    fn sort_components(&mut self) {
        self.components.sort_by_key(|slot| slot.component.priority());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    fn base_object(name: &str, depth: f32) -> UiObject {
        UiObject::new(
            name,
            UiObjectType::Texture,
            Transform2D::identity(),
            depth,
            Color::WHITE,
            SpriteEffects::empty(),
            Vec2::zeros(),
        )
    }

    #[derive(Debug, Clone, Default)]
    struct CountingComponent {
        priority: i32,
        label: &'static str,
        owner: String,
        awakes: u32,
        starts: u32,
        updates: u32,
    }

    impl UiComponent for CountingComponent {
        fn priority(&self) -> i32 {
            self.priority
        }

        fn on_attach(&mut self, owner_id: &str) {
            self.owner = owner_id.to_owned();
        }

        fn awake(&mut self) {
            self.awakes += 1;
        }

        fn start(&mut self) {
            self.starts += 1;
        }

        fn update(&mut self, _transform: &mut Transform2D, _time: &FrameTime) {
            self.updates += 1;
        }

        fn clone_box(&self) -> Box<dyn UiComponent> {
            Box::new(self.clone())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn id_is_prefixed_and_unique() {
        let a = base_object("a", 0.0);
        let b = base_object("b", 0.0);

        assert!(a.id().starts_with("UIO-"));
        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn blank_name_falls_back_to_id() {
        let object = base_object("   ", 0.0);
        assert_eq!(object.name(), object.id());

        let named = base_object("  health  ", 0.0);
        assert_eq!(named.name(), "health");
    }

    #[test]
    fn layer_depth_clamps_out_of_range_to_zero() {
        let mut object = base_object("d", 0.5);
        assert!((object.layer_depth() - 0.5).abs() < f32::EPSILON);

        object.set_layer_depth(1.0);
        assert!((object.layer_depth() - 1.0).abs() < f32::EPSILON);

        object.set_layer_depth(1.5);
        assert!(object.layer_depth().abs() < f32::EPSILON);

        object.set_layer_depth(-0.1);
        assert!(object.layer_depth().abs() < f32::EPSILON);
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut object = base_object("init", 0.0);
        object.add_component(Box::new(CountingComponent::default()));

        assert!(!object.is_running());
        object.initialize();
        object.initialize();
        object.initialize();

        assert!(object.is_running());
        let counting = object.get_component::<CountingComponent>().unwrap();
        assert_eq!(counting.awakes, 1);
        assert_eq!(counting.starts, 1);
    }

    #[test]
    fn attach_sets_owner_back_link() {
        let mut object = base_object("owner", 0.0);
        object.add_component(Box::new(CountingComponent::default()));

        let counting = object.get_component::<CountingComponent>().unwrap();
        assert_eq!(counting.owner, object.id());
    }

    #[test]
    fn late_attach_starts_immediately_and_sorts() {
        let mut object = base_object("sort", 0.0);
        object.add_component(Box::new(CountingComponent {
            priority: 5,
            label: "first",
            ..CountingComponent::default()
        }));
        object.initialize();

        object.add_component(Box::new(CountingComponent {
            priority: -1,
            label: "second",
            ..CountingComponent::default()
        }));

        let ordered = object.get_components::<CountingComponent>();
        assert_eq!(ordered.len(), 2);
        assert_eq!(ordered[0].label, "second");
        assert_eq!(ordered[1].label, "first");
        assert_eq!(ordered[0].starts, 1);
    }

    #[test]
    fn equal_priorities_keep_insertion_order() {
        let mut object = base_object("ties", 0.0);
        for label in ["a", "b", "c"] {
            object.add_component(Box::new(CountingComponent {
                label,
                ..CountingComponent::default()
            }));
        }
        object.initialize();

        let ordered = object.get_components::<CountingComponent>();
        let labels: Vec<_> = ordered.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn predicate_lookups_filter_in_order() {
        let mut object = base_object("find", 0.0);
        for (label, priority) in [("keep", 1), ("skip", 2), ("keep", 3)] {
            object.add_component(Box::new(CountingComponent {
                priority,
                label,
                ..CountingComponent::default()
            }));
        }

        let first = object
            .get_component_where::<CountingComponent, _>(|c| c.label == "keep")
            .unwrap();
        assert_eq!(first.priority, 1);

        let all = object.get_components_where::<CountingComponent, _>(|c| c.label == "keep");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn update_reaches_running_components() {
        let mut object = base_object("tick", 0.0);
        object.add_component(Box::new(CountingComponent::default()));

        // Not running yet: updates are withheld until initialize.
        object.update(&FrameTime::zero());
        assert_eq!(
            object.get_component::<CountingComponent>().unwrap().updates,
            0
        );

        object.initialize();
        object.update(&FrameTime::zero());
        object.update(&FrameTime::zero());
        assert_eq!(
            object.get_component::<CountingComponent>().unwrap().updates,
            2
        );
    }

    #[test]
    fn deep_clone_gets_fresh_id_and_independent_components() {
        let mut object = base_object("original", 0.25);
        object.add_component(Box::new(CountingComponent::default()));
        object.initialize();

        let clone = object.deep_clone();

        assert_ne!(clone.id(), object.id());
        assert!(clone.id().starts_with("UIO-"));
        assert_eq!(clone.name(), "Clone - original");
        assert!(!clone.is_running());
        assert!((clone.layer_depth() - 0.25).abs() < f32::EPSILON);

        // The clone's component is a copy, not a shared reference.
        let original_starts = object.get_component::<CountingComponent>().unwrap().starts;
        let clone_starts = clone.get_component::<CountingComponent>().unwrap().starts;
        assert_eq!(original_starts, 1);
        assert_eq!(clone_starts, 1);
    }
}
