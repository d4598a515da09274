/*
 * Radio buttons of a task dialog. The host numbers them once bound and keeps
 * the group consistent when the platform reports a click. While bound a radio
 * button can only be checked (the native dialog has no way to clear a group).
 */

use crate::controls::{Control, ControlBinding, ControlCapabilities, ControlKind, Sealed};
use crate::error::{ControlError, Result as ControlResult};
use crate::types::DialogCommand;

#[derive(Debug, Clone)]
pub struct RadioButton {
    text: String,
    enabled: bool,
    checked: bool,
    button_id: Option<i32>,
}

impl Default for RadioButton {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
            checked: false,
            button_id: None,
        }
    }
}

impl Sealed for RadioButton {}

impl ControlCapabilities for RadioButton {
    fn kind(&self) -> ControlKind {
        ControlKind::RadioButton
    }

    fn is_creatable(&self) -> bool {
        !self.text.is_empty()
    }

    fn apply_initialization_core(&mut self, binding: &ControlBinding) {
        let Some(button_id) = self.button_id else {
            log::warn!("RadioButton: '{}' created without a button id", self.text);
            return;
        };
        if self.checked {
            binding.post(DialogCommand::ClickRadioButton { button_id });
        }
        if !self.enabled {
            binding.post(DialogCommand::EnableRadioButton {
                button_id,
                enabled: false,
            });
        }
    }

    fn unbind_core(&mut self) {
        self.button_id = None;
    }
}

pub type TaskDialogRadioButton = Control<RadioButton>;

impl Control<RadioButton> {
    pub fn new(text: impl Into<String>) -> Self {
        Control::from_kind(RadioButton {
            text: text.into(),
            ..Default::default()
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

    pub fn button_id(&self) -> Option<i32> {
        self.kind.button_id
    }

    pub(crate) fn assign_button_id(&mut self, button_id: i32) {
        self.kind.button_id = Some(button_id);
    }

    /*
     * Native id of a bound control. The host assigns it on every successful bind,
     * so `None` while bound means the control was bound outside the host; the live
     * update is skipped rather than reported to the caller.
     */
    fn bound_button_id(&self) -> Option<i32> {
        if !self.is_bound() {
            return None;
        }
        if self.kind.button_id.is_none() {
            log::warn!(
                "RadioButton: '{}' is bound without a button id, skipping live update",
                self.kind.text
            );
        }
        self.kind.button_id
    }

    pub fn enabled(&self) -> bool {
        self.kind.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        if let Some(button_id) = self.bound_button_id() {
            self.binding
                .post(DialogCommand::EnableRadioButton { button_id, enabled });
        }
        self.kind.enabled = enabled;
        Ok(())
    }

    pub fn checked(&self) -> bool {
        self.kind.checked
    }

    /*
     * Detached: stores the value; the host rejects groups with more than one checked
     * button at bind time. Bound: requests the click, and the group is updated when
     * the platform reports it back.
     */
    pub fn set_checked(&mut self, checked: bool) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        if !self.is_bound() {
            self.kind.checked = checked;
            return Ok(());
        }
        if !checked {
            return Err(ControlError::InvalidOperation(
                "Cannot uncheck a radio button while it is bound".to_string(),
            ));
        }
        if let Some(button_id) = self.bound_button_id() {
            self.binding
                .post(DialogCommand::ClickRadioButton { button_id });
        }
        Ok(())
    }

    /// Simulates a click on the live dialog.
    pub fn click(&self) -> ControlResult<()> {
        self.deny_if_not_bound()?;
        self.deny_if_bound_and_not_created()?;
        if let Some(button_id) = self.bound_button_id() {
            self.binding
                .post(DialogCommand::ClickRadioButton { button_id });
        }
        Ok(())
    }

    pub(crate) fn handle_radio_button_clicked(&mut self, checked: bool) {
        self.kind.checked = checked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contents::TaskDialogContents;

    fn bound_radio(text: &str) -> (TaskDialogContents, TaskDialogRadioButton) {
        let contents = TaskDialogContents::default();
        let mut radio = TaskDialogRadioButton::new(text);
        radio.assign_button_id(3);
        radio.bind(Some(contents.host_ref())).unwrap();
        (contents, radio)
    }

    #[test]
    fn detached_check_is_stored() {
        let mut radio = TaskDialogRadioButton::new("Fast");
        radio.set_checked(true).unwrap();
        assert!(radio.checked());
        radio.set_checked(false).unwrap();
        assert!(!radio.checked());
    }

    #[test]
    fn bound_check_requests_click() {
        let (mut contents, mut radio) = bound_radio("Fast");
        radio.set_checked(true).unwrap();
        assert_eq!(
            contents.drain_commands(),
            vec![DialogCommand::ClickRadioButton { button_id: 3 }]
        );
    }

    #[test]
    fn bound_uncheck_is_rejected() {
        let (_contents, mut radio) = bound_radio("Fast");
        assert!(matches!(
            radio.set_checked(false),
            Err(ControlError::InvalidOperation(_))
        ));
    }

    #[test]
    fn initialization_checks_and_disables() {
        let mut contents = TaskDialogContents::default();
        let mut radio = TaskDialogRadioButton::new("Thorough");
        radio.set_checked(true).unwrap();
        radio.set_enabled(false).unwrap();
        radio.assign_button_id(2);
        radio.bind(Some(contents.host_ref())).unwrap();

        radio.apply_initialization();

        assert_eq!(
            contents.drain_commands(),
            vec![
                DialogCommand::ClickRadioButton { button_id: 2 },
                DialogCommand::EnableRadioButton {
                    button_id: 2,
                    enabled: false
                },
            ]
        );
    }

    #[test]
    fn click_requires_created_binding() {
        let radio = TaskDialogRadioButton::new("Fast");
        assert!(radio.click().is_err());

        let (_contents, radio) = bound_radio("");
        assert!(radio.click().is_err());
    }

    #[test]
    fn text_is_fixed_while_bound() {
        let (_contents, mut radio) = bound_radio("Fast");
        assert!(radio.set_text("Slow").is_err());
        radio.unbind();
        assert!(radio.set_text("Slow").is_ok());
        assert_eq!(radio.button_id(), None);
    }

    #[test]
    fn bound_radio_without_id_accepts_live_changes() {
        let mut contents = TaskDialogContents::default();
        let mut radio = TaskDialogRadioButton::new("Fast");
        radio.bind(Some(contents.host_ref())).unwrap();
        assert!(radio.is_created());

        assert!(radio.set_enabled(false).is_ok());
        assert!(radio.set_checked(true).is_ok());
        assert!(radio.click().is_ok());
        assert!(!radio.checked());
        assert!(contents.drain_commands().is_empty());
    }
}
