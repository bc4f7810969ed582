// Kit component module organization

// Selection components
pub mod combo_box;
pub mod tag_panel;

// Re-export commonly used components
pub use combo_box::ComboBox;
pub use tag_panel::TagPanel;
