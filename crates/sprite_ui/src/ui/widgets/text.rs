//! Text object - draws a string on screen

use super::core::{UiObject, UiObjectType};
use crate::content::Font;
use crate::foundation::math::{Color, Vec2};
use crate::foundation::time::FrameTime;
use crate::render::{RenderError, SpriteBatch, SpriteEffects};
use crate::ui::transform::Transform2D;

/// UI element rendering a text string
#[derive(Debug)]
pub struct UiTextObject {
    /// Shared base state
    pub object: UiObject,

    /// Font used to render the text
    pub font: Font,

    /// Rendered string; trimmed on assignment
    text: String,
}

impl UiTextObject {
    /// Create a white-blend, unrotated, zero-origin text object
    #[must_use]
    pub fn new(
        name: &str,
        object_type: UiObjectType,
        transform: Transform2D,
        layer_depth: f32,
        font: Font,
        text: &str,
    ) -> Self {
        Self::with_style(
            name,
            object_type,
            transform,
            layer_depth,
            Color::WHITE,
            SpriteEffects::empty(),
            Vec2::zeros(),
            font,
            text,
        )
    }

    /// Create a text object with full control over its draw state
    #[must_use]
    pub fn with_style(
        name: &str,
        object_type: UiObjectType,
        transform: Transform2D,
        layer_depth: f32,
        color: Color,
        sprite_effects: SpriteEffects,
        origin: Vec2,
        font: Font,
        text: &str,
    ) -> Self {
        Self {
            object: UiObject::new(
                name,
                object_type,
                transform,
                layer_depth,
                color,
                sprite_effects,
                origin,
            ),
            font,
            text: text.trim().to_owned(),
        }
    }

    /// Rendered string
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the rendered string; leading/trailing whitespace is trimmed
    pub fn set_text(&mut self, text: &str) {
        self.text = text.trim().to_owned();
    }

    /// Per-frame update, forwarded to the base
    pub fn update(&mut self, time: &FrameTime) {
        self.object.update(time);
    }

    /// Draw the string at this object's transform
    pub fn draw(&self, batch: &mut dyn SpriteBatch) -> Result<(), RenderError> {
        batch.draw_text(
            self.font,
            &self.text,
            self.object.transform.translation,
            self.object.color,
            self.object.transform.rotation_degrees,
            self.object.origin,
            self.object.transform.scale,
            self.object.sprite_effects,
            self.object.layer_depth(),
        )
    }

    /// Deep copy with a freshly generated id
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        Self {
            object: self.object.deep_clone(),
            font: self.font,
            text: self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crate::render::{BlendMode, DrawCommand, RecordingBatch, SortMode};

    fn ui_font() -> Font {
        ContentStore::new().load_font("ui_font", 14.0)
    }

    #[test]
    fn text_is_trimmed_on_construction_and_assignment() {
        let mut label = UiTextObject::new(
            "player name",
            UiObjectType::Text,
            Transform2D::identity(),
            0.0,
            ui_font(),
            "  Brutus Maximus  ",
        );
        assert_eq!(label.text(), "Brutus Maximus");

        label.set_text("  92 / 100 \n");
        assert_eq!(label.text(), "92 / 100");
    }

    #[test]
    fn draw_submits_string_and_depth() {
        let label = UiTextObject::new(
            "score",
            UiObjectType::Text,
            Transform2D::at(Vec2::new(50.0, 50.0)),
            0.2,
            ui_font(),
            "Brutus Maximus",
        );

        let mut batch = RecordingBatch::new();
        batch
            .begin(SortMode::BackToFront, BlendMode::AlphaBlend)
            .unwrap();
        label.draw(&mut batch).unwrap();
        batch.end().unwrap();

        match &batch.commands()[0] {
            DrawCommand::Text {
                text,
                position,
                depth,
                ..
            } => {
                assert_eq!(text, "Brutus Maximus");
                assert_eq!(*position, Vec2::new(50.0, 50.0));
                assert!((depth - 0.2).abs() < f32::EPSILON);
            }
            other => panic!("expected text command, got {other:?}"),
        }
    }
}
