//! Domain entities: the software catalog and the folders, notes and
//! shortcuts a learner keeps for each package.

pub mod catalog;
pub mod folder;
pub mod keyboard;
pub mod note;
pub mod shortcut;
pub mod software;

pub use folder::Folder;
pub use note::Note;
pub use shortcut::Shortcut;
pub use software::Software;
