/*
 * Footer text and icon. Both can change on the running dialog, but whether the
 * footer icon is a native handle or a stock icon is decided by a flag at bind time,
 * so a bound footer cannot switch between the two.
 */

use crate::controls::{Control, ControlCapabilities, ControlKind, Sealed};
use crate::error::{ControlError, Result as ControlResult};
use crate::types::{DialogCommand, DialogElement, DialogIcon, IconElement, TaskDialogFlags};

#[derive(Debug, Clone, Default)]
pub struct Footer {
    text: String,
    icon: DialogIcon,
}

impl Sealed for Footer {}

impl ControlCapabilities for Footer {
    fn kind(&self) -> ControlKind {
        ControlKind::Footer
    }

    fn is_creatable(&self) -> bool {
        !self.text.is_empty()
    }

    fn flags_core(&self) -> TaskDialogFlags {
        if self.icon.is_handle() {
            TaskDialogFlags::USE_HICON_FOOTER
        } else {
            TaskDialogFlags::empty()
        }
    }
}

pub type TaskDialogFooter = Control<Footer>;

impl Control<Footer> {
    pub fn new(text: impl Into<String>) -> Self {
        Control::from_kind(Footer {
            text: text.into(),
            icon: DialogIcon::None,
        })
    }

    pub fn text(&self) -> &str {
        &self.kind.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        self.kind.text = text.into();
        self.binding.post(DialogCommand::UpdateElementText {
            element: DialogElement::Footer,
            text: self.kind.text.clone(),
        });
        Ok(())
    }

    pub fn icon(&self) -> DialogIcon {
        self.kind.icon
    }

    pub fn set_icon(&mut self, icon: DialogIcon) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        if self.is_bound() && icon.is_handle() != self.kind.icon.is_handle() {
            return Err(ControlError::InvalidOperation(
                "Cannot switch the footer between a handle icon and a stock icon while bound"
                    .to_string(),
            ));
        }
        self.kind.icon = icon;
        self.binding.post(DialogCommand::UpdateIcon {
            element: IconElement::Footer,
            icon,
        });
        Ok(())
    }
}
