use serde::{Deserialize, Serialize};

/// What a submitted photo shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Restaurant,
    Food,
    Menu,
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Restaurant => "restaurant",
            Category::Food => "food",
            Category::Menu => "menu",
        }
    }

    /// Fluent id of the checkbox label
    pub fn label_key(&self) -> &'static str {
        match self {
            Category::Restaurant => "category-restaurant",
            Category::Food => "category-food",
            Category::Menu => "category-menu",
        }
    }

    pub fn all() -> &'static [Category] {
        static ALL: [Category; 3] = [Category::Restaurant, Category::Food, Category::Menu];
        &ALL
    }
}
