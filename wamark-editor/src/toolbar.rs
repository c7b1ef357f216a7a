//! Toolbar model: one button per configured action

use crate::action::FormattingAction;
use crate::config::ClassNames;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub name: String,
    pub icon: String,
    pub title: String,
    pub selected: bool,
}

impl ToolbarButton {
    /// Buttons never submit an enclosing form.
    pub const BUTTON_TYPE: &'static str = "button";

    /// Space-separated class list for the current state
    pub fn class_list(&self, classes: &ClassNames) -> String {
        if self.selected {
            format!("{} {}", classes.button, classes.selected)
        } else {
            classes.button.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub class: String,
    pub buttons: Vec<ToolbarButton>,
}

impl Toolbar {
    pub fn build(actions: &[FormattingAction], classes: &ClassNames) -> Self {
        Toolbar {
            class: classes.actionbar.clone(),
            buttons: actions
                .iter()
                .map(|action| ToolbarButton {
                    name: action.name().to_string(),
                    icon: action.icon().to_string(),
                    title: action.title().to_string(),
                    selected: false,
                })
                .collect(),
        }
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.buttons.iter().position(|button| button.name == name)
    }

    /// Names of the buttons currently shown as selected
    pub fn selected(&self) -> Vec<&str> {
        self.buttons
            .iter()
            .filter(|button| button.selected)
            .map(|button| button.name.as_str())
            .collect()
    }
}
