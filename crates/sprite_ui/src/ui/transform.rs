//! 2D transform for screen-space UI elements

use crate::foundation::math::Vec2;

/// Drawn translation, scale, and rotation of a UI object on screen
///
/// Pure value holder owned by exactly one UI object. `Clone` is a
/// field-for-field copy with no shared storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform2D {
    /// Screen-space translation in pixels
    pub translation: Vec2,

    /// Scale factors applied at draw time
    pub scale: Vec2,

    /// Rotation in degrees around the object's origin
    pub rotation_degrees: f32,
}

impl Transform2D {
    /// Create a transform from its components
    //TODO - validate scale once non-uniform negative scale handling is decided
    #[must_use]
    pub const fn new(translation: Vec2, scale: Vec2, rotation_degrees: f32) -> Self {
        Self {
            translation,
            scale,
            rotation_degrees,
        }
    }

    /// Identity transform: zero translation, unit scale, no rotation
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Vec2::zeros(), Vec2::new(1.0, 1.0), 0.0)
    }

    /// Transform translated to `translation` with unit scale and no rotation
    #[must_use]
    pub fn at(translation: Vec2) -> Self {
        Self::new(translation, Vec2::new(1.0, 1.0), 0.0)
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_has_unit_scale() {
        let transform = Transform2D::identity();

        assert_eq!(transform.translation, Vec2::zeros());
        assert_eq!(transform.scale, Vec2::new(1.0, 1.0));
        assert_relative_eq!(transform.rotation_degrees, 0.0);
    }

    #[test]
    fn clone_shares_no_storage() {
        let original = Transform2D::new(Vec2::new(10.0, 20.0), Vec2::new(2.0, 2.0), 45.0);
        let mut copy = original.clone();

        assert_eq!(copy, original);

        copy.translation = Vec2::new(99.0, 99.0);
        assert_eq!(original.translation, Vec2::new(10.0, 20.0));
    }
}
