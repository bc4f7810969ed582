// Component kit: the combo box family and its helpers

pub mod components;
pub mod utils;

/// Re-export of common components for convenience
pub mod prelude {
    pub use crate::kit::components::combo_box::{
        Accessors, Action, Candidate, ComboBox, ComboBoxProps, ComboBoxState, Effect, Part,
    };
    pub use crate::kit::components::tag_panel::{PanelMode, TagPanel, TagPanelProps};
}
