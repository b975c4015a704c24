use crate::color::Color;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

/// Approximate rendered width of a single character in pixels.
pub const CHARACTER_WIDTH: usize = 6;

/// A renderable badge.
///
/// Implementation agnostic representation of the image that is ultimately
/// served to the requesting party.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    title: String,
    value: String,
    color: Color,
}

impl Badge {
    pub fn new<T, V>(title: T, value: V, color: Color) -> Self
    where
        T: Into<String>,
        V: Into<String>,
    {
        Badge {
            title: title.into(),
            value: value.into(),
            color,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn title_width(&self) -> usize {
        self.title.chars().count() * CHARACTER_WIDTH
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_width(&self) -> usize {
        self.value.chars().count() * CHARACTER_WIDTH
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn background_color_code(&self) -> String {
        self.color.background_code()
    }

    pub fn text_color_code(&self) -> String {
        self.color.text_code()
    }
}

impl Serialize for Badge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Badge", 5)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("color", &self.color)?;
        state.serialize_field("background_color", &self.background_color_code())?;
        state.serialize_field("text_color", &self.text_color_code())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accessors() {
        let badge = Badge::new("stars", "42", Color::Default);
        assert_eq!(badge.title(), "stars");
        assert_eq!(badge.value(), "42");
        assert_eq!(badge.color(), Color::Default);
        assert_eq!(badge.title_width(), 30);
        assert_eq!(badge.value_width(), 12);
        assert_eq!(badge.background_color_code(), "#2196F3");
        assert_eq!(badge.text_color_code(), "#FFFFFF");
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let badge = Badge::new("größe", "日本", Color::Red);
        assert_eq!(badge.title_width(), 30);
        assert_eq!(badge.value_width(), 12);
    }

    #[test]
    fn test_serialize() {
        let badge = Badge::new("build", "passing", Color::LightGreen);
        let json = serde_json::to_value(&badge).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "build",
                "value": "passing",
                "color": "light-green",
                "background_color": "#8BC34A",
                "text_color": "#000000",
            })
        );
    }

    proptest! {
        #[test]
        fn prop_width_is_six_per_character(title in ".{0,40}", value in ".{0,40}") {
            let badge = Badge::new(title.clone(), value.clone(), Color::Blue);
            prop_assert_eq!(badge.title_width(), 6 * title.chars().count());
            prop_assert_eq!(badge.value_width(), 6 * value.chars().count());
        }
    }
}
