//! Category presentation table, keyed by category id.

/// Emoji and accent color used to render a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub emoji: &'static str,
    pub color: &'static str,
}

const FALLBACK: CategoryStyle = CategoryStyle {
    emoji: "📚",
    color: "#666",
};

pub fn category_style(category_id: i64) -> CategoryStyle {
    match category_id {
        1 => CategoryStyle {
            emoji: "🎓",
            color: "#388e3c",
        },
        2 => CategoryStyle {
            emoji: "📖",
            color: "#1976d2",
        },
        3 => CategoryStyle {
            emoji: "📝",
            color: "#f57c00",
        },
        4 => CategoryStyle {
            emoji: "📋",
            color: "#7b1fa2",
        },
        _ => FALLBACK,
    }
}
