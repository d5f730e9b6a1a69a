use serde::{Deserialize, Serialize};

/// A 3D package from the static catalog. Not user-editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Software {
    pub id: String,
    pub name: String,
    pub icon: String,
}

impl Software {
    pub fn new(id: &str, name: &str, icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Icon and name, as shown in the sidebar and CLI listings
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}
