/// Packed 0xAARRGGBB
pub type Color = u32;

pub const COLOR_WHITE: Color = 0xFFFF_FFFF;

/// An atomic mixable item. Identity is the `id`; everything else is display.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ingredient {
    pub id: String,
    pub display_name: String,
    pub color: Color,
}

impl Ingredient {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            color: COLOR_WHITE,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Display name, or the id when no name was authored
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.id
        } else {
            &self.display_name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_falls_back_to_id() {
        assert_eq!(Ingredient::new("vinegar", "Vinegar (Acetic Acid)").label(), "Vinegar (Acetic Acid)");
        assert_eq!(Ingredient::new("vinegar", "  ").label(), "vinegar");
    }
}
