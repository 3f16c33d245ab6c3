//! A normal model file with no schema declarations.

pub struct Widget {
    pub id: i64,
    pub label: String,
}

pub const MAX_WIDGETS: usize = 64;

pub fn label_of(widget: &Widget) -> &str {
    &widget.label
}
