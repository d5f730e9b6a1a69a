use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub software_id: String,
    pub folder_id: Option<String>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, content: String, software_id: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content,
            software_id,
            folder_id: None,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Tags joined the way the note form expects them back
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// First line of the content, cut to `max_chars`
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or_default();
        if first_line.chars().count() > max_chars {
            let cut: String = first_line.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{}...", cut)
        } else {
            first_line.to_string()
        }
    }

    pub fn updated_label(&self) -> String {
        self.updated_at.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_first_line() {
        let mut note = Note::new("T".into(), "a".repeat(50), "blender".into(), Utc::now());
        assert_eq!(note.preview(10), "aaaaaaa...");

        note.content = "short\nsecond line".into();
        assert_eq!(note.preview(10), "short");
    }

    #[test]
    fn tags_display_joins_with_comma() {
        let mut note = Note::new("T".into(), "C".into(), "blender".into(), Utc::now());
        note.tags = vec!["beginner".into(), "interface".into()];
        assert_eq!(note.tags_display(), "beginner, interface");
    }
}
