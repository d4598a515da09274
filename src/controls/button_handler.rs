/*
 * Custom push buttons (shown as command links when the contents ask for them).
 * The host assigns each button its native id once it is bound; the id is
 * released again on unbind. Text and the default-button choice are read at bind
 * time, enabled and elevation state stay live.
 */

use crate::controls::{Control, ControlBinding, ControlCapabilities, ControlKind, Sealed};
use crate::error::Result as ControlResult;
use crate::types::DialogCommand;

#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    enabled: bool,
    elevation_required: bool,
    default: bool,
    button_id: Option<i32>,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            text: String::new(),
            enabled: true,
            elevation_required: false,
            default: false,
            button_id: None,
        }
    }
}

impl Sealed for Button {}

impl ControlCapabilities for Button {
    fn kind(&self) -> ControlKind {
        ControlKind::Button
    }

    fn is_creatable(&self) -> bool {
        !self.text.is_empty()
    }

    fn apply_initialization_core(&mut self, binding: &ControlBinding) {
        let Some(button_id) = self.button_id else {
            log::warn!("Button: '{}' created without a button id", self.text);
            return;
        };
        if !self.enabled {
            binding.post(DialogCommand::EnableButton {
                button_id,
                enabled: false,
            });
        }
        if self.elevation_required {
            binding.post(DialogCommand::SetButtonElevationRequired {
                button_id,
                required: true,
            });
        }
    }

    fn unbind_core(&mut self) {
        self.button_id = None;
    }
}

pub type TaskDialogButton = Control<Button>;

impl Control<Button> {
    pub fn new(text: impl Into<String>) -> Self {
        Control::from_kind(Button {
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

    pub fn is_default(&self) -> bool {
        self.kind.default
    }

    pub fn set_default(&mut self, default: bool) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.kind.default = default;
        Ok(())
    }

    /// Native id assigned by the host for the current bind, if any.
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
                "Button: '{}' is bound without a button id, skipping live update",
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
                .post(DialogCommand::EnableButton { button_id, enabled });
        }
        self.kind.enabled = enabled;
        Ok(())
    }

    pub fn elevation_required(&self) -> bool {
        self.kind.elevation_required
    }

    pub fn set_elevation_required(&mut self, required: bool) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        if let Some(button_id) = self.bound_button_id() {
            self.binding
                .post(DialogCommand::SetButtonElevationRequired {
                    button_id,
                    required,
                });
        }
        self.kind.elevation_required = required;
        Ok(())
    }

    /// Simulates a click on the live dialog.
    pub fn click(&self) -> ControlResult<()> {
        self.deny_if_not_bound()?;
        self.deny_if_bound_and_not_created()?;
        if let Some(button_id) = self.bound_button_id() {
            log::debug!("Button: Requesting click on '{}' ({button_id})", self.kind.text);
            self.binding.post(DialogCommand::ClickButton { button_id });
        }
        Ok(())
    }
}
