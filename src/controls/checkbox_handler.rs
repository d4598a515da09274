/*
 * The verification check box shown at the bottom of a task dialog.
 * It exists only when it has text. The text is read once at bind time and is
 * therefore fixed while bound; the checked state stays live and is changed on the
 * running dialog through a click request.
 */

use crate::controls::{Control, ControlCapabilities, ControlKind, Sealed};
use crate::error::Result as ControlResult;
use crate::types::{DialogCommand, TaskDialogFlags};

#[derive(Debug, Clone, Default)]
pub struct CheckBox {
    text: String,
    checked: bool,
}

impl Sealed for CheckBox {}

impl ControlCapabilities for CheckBox {
    fn kind(&self) -> ControlKind {
        ControlKind::CheckBox
    }

    fn is_creatable(&self) -> bool {
        !self.text.is_empty()
    }

    fn flags_core(&self) -> TaskDialogFlags {
        if self.checked {
            TaskDialogFlags::VERIFICATION_FLAG_CHECKED
        } else {
            TaskDialogFlags::empty()
        }
    }
}

pub type TaskDialogCheckBox = Control<CheckBox>;

impl Control<CheckBox> {
    pub fn new(text: impl Into<String>) -> Self {
        Control::from_kind(CheckBox {
            text: text.into(),
            checked: false,
        })
    }

    pub fn text(&self) -> &str {
        &self.kind.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.kind.text = text.into();
        Ok(())
    }

    pub fn checked(&self) -> bool {
        self.kind.checked
    }

    /*
     * While detached the value is stored directly. While bound the click is
     * requested from the dialog and the stored value follows once the platform
     * reports the verification click back.
     */
    pub fn set_checked(&mut self, checked: bool) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        if !self.binding.post(DialogCommand::ClickVerification {
            checked,
            focus: false,
        }) {
            self.kind.checked = checked;
        }
        Ok(())
    }

    pub(crate) fn handle_verification_clicked(&mut self, checked: bool) {
        log::debug!("CheckBox: Verification clicked, checked: {checked}");
        self.kind.checked = checked;
    }
}
