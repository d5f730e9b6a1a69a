//! The built-in software catalog and the sample content a fresh session
//! starts with. Nothing here is persisted; every launch seeds from it.

use super::{Folder, Note, Shortcut, Software};
use chrono::{DateTime, TimeZone, Utc};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn software() -> Vec<Software> {
    vec![
        Software::new("blender", "Blender", "🧊"),
        Software::new("maya", "Maya", "🎭"),
        Software::new("cinema4d", "Cinema 4D", "🎬"),
        Software::new("zbrush", "ZBrush", "🗿"),
        Software::new("substance", "Substance Painter", "🎨"),
    ]
}

pub fn folders() -> Vec<Folder> {
    vec![
        Folder {
            id: "folder-1".into(),
            name: "Modeling Basics".into(),
            software_id: "blender".into(),
            created_at: date(2023, 3, 1),
        },
        Folder {
            id: "folder-2".into(),
            name: "Shortcuts Practice".into(),
            software_id: "blender".into(),
            created_at: date(2023, 3, 5),
        },
    ]
}

pub fn notes() -> Vec<Note> {
    vec![
        Note {
            id: "1".into(),
            title: "Getting Started with Blender Interface".into(),
            content: "The Blender interface is divided into editors, which can be customized \
                      for different workflows. Right-click to select objects by default."
                .into(),
            software_id: "blender".into(),
            folder_id: None,
            tags: vec!["beginner".into(), "interface".into()],
            created_at: date(2023, 1, 15),
            updated_at: date(2023, 1, 15),
        },
        Note {
            id: "2".into(),
            title: "Modeling Workflow Tips".into(),
            content: "Start with basic shapes and refine. Use the modifier stack for \
                      non-destructive editing. Mirror modifier is great for symmetrical objects."
                .into(),
            software_id: "blender".into(),
            folder_id: None,
            tags: vec!["modeling".into(), "workflow".into()],
            created_at: date(2023, 2, 10),
            updated_at: date(2023, 2, 12),
        },
    ]
}

pub fn shortcuts() -> Vec<Shortcut> {
    let blender = |id: &str, action: &str, key: &str, description: &str, category: &str| {
        Shortcut {
            id: id.into(),
            action: action.into(),
            keys: vec![key.into()],
            description: description.into(),
            software_id: "blender".into(),
            folder_id: None,
            category: Some(category.into()),
        }
    };

    vec![
        blender("1", "Select All", "A", "Select all objects in the scene", "Selection"),
        blender("2", "Delete", "X", "Delete selected objects", "Editing"),
        blender(
            "3",
            "Extrude",
            "E",
            "Extrude selected vertices, edges, or faces",
            "Modeling",
        ),
        blender(
            "4",
            "Grab/Move",
            "G",
            "Move selected objects or components",
            "Transform",
        ),
        blender(
            "5",
            "Rotate",
            "R",
            "Rotate selected objects or components",
            "Transform",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_content_belongs_to_catalog_software() {
        let ids: Vec<String> = software().into_iter().map(|s| s.id).collect();

        assert_eq!(ids.len(), 5);
        assert!(folders().iter().all(|f| ids.contains(&f.software_id)));
        assert!(notes().iter().all(|n| ids.contains(&n.software_id)));
        assert!(shortcuts().iter().all(|s| ids.contains(&s.software_id)));
    }

    #[test]
    fn sample_sizes() {
        assert_eq!(folders().len(), 2);
        assert_eq!(notes().len(), 2);
        assert_eq!(shortcuts().len(), 5);
    }
}
