use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories offered by the shortcut form, in display order.
pub const CATEGORIES: [&str; 8] = [
    "Selection",
    "Transform",
    "Modeling",
    "Editing",
    "Navigation",
    "Rendering",
    "Animation",
    "Other",
];

pub const DEFAULT_CATEGORY: &str = "Other";

/// Bucket name for shortcuts that carry no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub id: String,
    pub action: String,
    pub keys: Vec<String>,
    pub description: String,
    pub software_id: String,
    pub folder_id: Option<String>,
    pub category: Option<String>,
}

impl Shortcut {
    pub fn new(action: String, keys: Vec<String>, software_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            action,
            keys,
            description: String::new(),
            software_id,
            folder_id: None,
            category: None,
        }
    }

    /// Key chord as typed in the form, e.g. `Ctrl + A`
    pub fn keys_display(&self) -> String {
        self.keys.join(" + ")
    }

    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }

    /// Whether the chord uses `label`, compared in upper case like the
    /// keyboard map
    pub fn uses_key(&self, label: &str) -> bool {
        let label = label.to_uppercase();
        self.keys.iter().any(|key| key.to_uppercase() == label)
    }
}
