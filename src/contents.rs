/*
 * Host side of the binding contract. `TaskDialogContents` owns the controls shown on
 * one page of a task dialog, binds them all when the page is shown or navigated to,
 * and collects the commands they issue while the page is live.
 *
 * Controls never own their host. They hold a `HostRef`, a logical `ContentsId` plus
 * a `Weak` handle to the small piece of shared state the host exposes (its bound
 * mark and its command queue). The reference is used for delegated state queries and
 * command posting only, never for lifetime management.
 */

use crate::controls::button_handler::TaskDialogButton;
use crate::controls::checkbox_handler::TaskDialogCheckBox;
use crate::controls::expander_handler::TaskDialogExpander;
use crate::controls::footer_handler::TaskDialogFooter;
use crate::controls::progress_handler::TaskDialogProgressBar;
use crate::controls::radiobutton_handler::TaskDialogRadioButton;
use crate::error::{ControlError, Result as ControlResult};
use crate::types::{
    ContentsConfig, ContentsId, DialogCommand, DialogElement, DialogEvent, DialogNotification,
    TaskDialogFlags,
};

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

// Custom buttons are numbered above the standard dialog result ids (IDOK..IDCONTINUE).
pub(crate) const CUSTOM_BUTTON_START_ID: i32 = 100;
pub(crate) const RADIO_BUTTON_START_ID: i32 = 1;

#[derive(Debug, Default)]
pub(crate) struct HostShared {
    bound: Cell<bool>,
    commands: RefCell<Vec<DialogCommand>>,
}

/// Non-owning reference from a control to the contents it is bound to.
#[derive(Debug, Clone)]
pub struct HostRef {
    contents_id: ContentsId,
    shared: Weak<HostShared>,
}

impl HostRef {
    pub fn contents_id(&self) -> ContentsId {
        self.contents_id
    }

    /// Whether the referenced contents still exist.
    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// Whether the referenced contents are currently bound to a dialog.
    pub fn is_host_bound(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.bound.get())
    }

    pub(crate) fn deny_if_bound(&self) -> ControlResult<()> {
        if self.is_host_bound() {
            return Err(contents_bound_error(self.contents_id));
        }
        Ok(())
    }

    pub(crate) fn post(&self, command: DialogCommand) {
        match self.shared.upgrade() {
            Some(shared) => {
                log::trace!(
                    "TaskDialogContents: Queued {command:?} for contents {:?}",
                    self.contents_id
                );
                shared.commands.borrow_mut().push(command);
            }
            None => {
                log::warn!(
                    "TaskDialogContents: Contents {:?} dropped, discarding {command:?}",
                    self.contents_id
                );
            }
        }
    }
}

fn contents_bound_error(contents_id: ContentsId) -> ControlError {
    ControlError::InvalidOperation(format!(
        "Cannot set this property or call this method while contents {contents_id:?} are bound to a task dialog"
    ))
}

#[derive(Debug)]
pub struct TaskDialogContents {
    id: ContentsId,
    shared: Rc<HostShared>,
    config: ContentsConfig,
    check_box: TaskDialogCheckBox,
    expander: TaskDialogExpander,
    footer: TaskDialogFooter,
    progress_bar: TaskDialogProgressBar,
    buttons: Vec<TaskDialogButton>,
    radio_buttons: Vec<TaskDialogRadioButton>,
}

impl Default for TaskDialogContents {
    fn default() -> Self {
        Self::new(ContentsConfig::default())
    }
}

impl TaskDialogContents {
    pub fn new(config: ContentsConfig) -> Self {
        Self {
            id: ContentsId::next(),
            shared: Rc::new(HostShared::default()),
            config,
            check_box: TaskDialogCheckBox::default(),
            expander: TaskDialogExpander::default(),
            footer: TaskDialogFooter::default(),
            progress_bar: TaskDialogProgressBar::default(),
            buttons: Vec::new(),
            radio_buttons: Vec::new(),
        }
    }

    pub fn id(&self) -> ContentsId {
        self.id
    }

    pub fn host_ref(&self) -> HostRef {
        HostRef {
            contents_id: self.id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.shared.bound.get()
    }

    pub fn deny_if_bound(&self) -> ControlResult<()> {
        if self.is_bound() {
            return Err(contents_bound_error(self.id));
        }
        Ok(())
    }

    pub fn deny_if_not_bound(&self) -> ControlResult<()> {
        if !self.is_bound() {
            return Err(ControlError::InvalidOperation(format!(
                "Contents {:?} are not bound to a task dialog",
                self.id
            )));
        }
        Ok(())
    }

    pub fn config(&self) -> &ContentsConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ContentsConfig) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.config = config;
        Ok(())
    }

    /// Updates the content text; applied to the live dialog when bound.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.config.text = text.into();
        if self.is_bound() {
            self.host_ref().post(DialogCommand::UpdateElementText {
                element: DialogElement::Content,
                text: self.config.text.clone(),
            });
        }
    }

    pub fn set_instruction(&mut self, instruction: impl Into<String>) {
        self.config.instruction = instruction.into();
        if self.is_bound() {
            self.host_ref().post(DialogCommand::UpdateElementText {
                element: DialogElement::MainInstruction,
                text: self.config.instruction.clone(),
            });
        }
    }

    pub fn check_box(&self) -> &TaskDialogCheckBox {
        &self.check_box
    }

    pub fn check_box_mut(&mut self) -> &mut TaskDialogCheckBox {
        &mut self.check_box
    }

    pub fn set_check_box(&mut self, check_box: TaskDialogCheckBox) -> ControlResult<()> {
        self.deny_if_bound()?;
        check_box.deny_if_bound()?;
        self.check_box = check_box;
        Ok(())
    }

    pub fn expander(&self) -> &TaskDialogExpander {
        &self.expander
    }

    pub fn expander_mut(&mut self) -> &mut TaskDialogExpander {
        &mut self.expander
    }

    pub fn set_expander(&mut self, expander: TaskDialogExpander) -> ControlResult<()> {
        self.deny_if_bound()?;
        expander.deny_if_bound()?;
        self.expander = expander;
        Ok(())
    }

    pub fn footer(&self) -> &TaskDialogFooter {
        &self.footer
    }

    pub fn footer_mut(&mut self) -> &mut TaskDialogFooter {
        &mut self.footer
    }

    pub fn set_footer(&mut self, footer: TaskDialogFooter) -> ControlResult<()> {
        self.deny_if_bound()?;
        footer.deny_if_bound()?;
        self.footer = footer;
        Ok(())
    }

    pub fn progress_bar(&self) -> &TaskDialogProgressBar {
        &self.progress_bar
    }

    pub fn progress_bar_mut(&mut self) -> &mut TaskDialogProgressBar {
        &mut self.progress_bar
    }

    pub fn set_progress_bar(&mut self, progress_bar: TaskDialogProgressBar) -> ControlResult<()> {
        self.deny_if_bound()?;
        progress_bar.deny_if_bound()?;
        self.progress_bar = progress_bar;
        Ok(())
    }

    pub fn buttons(&self) -> &[TaskDialogButton] {
        &self.buttons
    }

    pub fn button_mut(&mut self, index: usize) -> Option<&mut TaskDialogButton> {
        self.buttons.get_mut(index)
    }

    /// Appends a custom button and returns its index.
    pub fn add_button(&mut self, button: TaskDialogButton) -> ControlResult<usize> {
        self.deny_if_bound()?;
        button.deny_if_bound()?;
        self.buttons.push(button);
        Ok(self.buttons.len() - 1)
    }

    pub fn clear_buttons(&mut self) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.buttons.clear();
        Ok(())
    }

    pub fn radio_buttons(&self) -> &[TaskDialogRadioButton] {
        &self.radio_buttons
    }

    pub fn radio_button_mut(&mut self, index: usize) -> Option<&mut TaskDialogRadioButton> {
        self.radio_buttons.get_mut(index)
    }

    pub fn add_radio_button(&mut self, radio_button: TaskDialogRadioButton) -> ControlResult<usize> {
        self.deny_if_bound()?;
        radio_button.deny_if_bound()?;
        self.radio_buttons.push(radio_button);
        Ok(self.radio_buttons.len() - 1)
    }

    pub fn clear_radio_buttons(&mut self) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.radio_buttons.clear();
        Ok(())
    }

    /*
     * Rejects configurations the native dialog cannot represent. Runs before any
     * state is touched so a failed bind leaves everything detached.
     */
    fn validate(&self) -> ControlResult<()> {
        let checked_radios = self.radio_buttons.iter().filter(|r| r.checked()).count();
        if checked_radios > 1 {
            return Err(ControlError::InvalidOperation(format!(
                "Only one radio button can be checked, found {checked_radios}"
            )));
        }
        let default_buttons = self.buttons.iter().filter(|b| b.is_default()).count();
        if default_buttons > 1 {
            return Err(ControlError::InvalidOperation(format!(
                "Only one button can be the default button, found {default_buttons}"
            )));
        }
        Ok(())
    }

    /*
     * Binds the contents and every control they own, returning the combined flags
     * for the dialog. If any control refuses to bind, everything bound so far is
     * unbound again before the error is returned.
     */
    pub fn bind(&mut self) -> ControlResult<TaskDialogFlags> {
        self.deny_if_bound()?;
        self.validate()?;

        log::debug!(
            "TaskDialogContents: Binding contents {:?} ({} buttons, {} radio buttons)",
            self.id,
            self.buttons.len(),
            self.radio_buttons.len()
        );
        self.shared.bound.set(true);

        match self.bind_controls() {
            Ok(flags) => Ok(flags),
            Err(err) => {
                log::warn!(
                    "TaskDialogContents: Bind of contents {:?} failed: {err}",
                    self.id
                );
                self.unbind();
                Err(err)
            }
        }
    }

    fn bind_controls(&mut self) -> ControlResult<TaskDialogFlags> {
        let host = self.host_ref();
        let mut flags = self.config.flags();

        flags |= self.check_box.bind(Some(host.clone()))?;
        flags |= self.expander.bind(Some(host.clone()))?;
        flags |= self.footer.bind(Some(host.clone()))?;
        flags |= self.progress_bar.bind(Some(host.clone()))?;

        for (index, button) in self.buttons.iter_mut().enumerate() {
            flags |= button.bind(Some(host.clone()))?;
            button.assign_button_id(CUSTOM_BUTTON_START_ID + index as i32);
        }

        let mut has_created_radio = false;
        let mut has_checked_radio = false;
        for (index, radio_button) in self.radio_buttons.iter_mut().enumerate() {
            flags |= radio_button.bind(Some(host.clone()))?;
            radio_button.assign_button_id(RADIO_BUTTON_START_ID + index as i32);
            if radio_button.is_created() {
                has_created_radio = true;
                has_checked_radio |= radio_button.checked();
            }
        }
        if has_created_radio && !has_checked_radio {
            flags |= TaskDialogFlags::NO_DEFAULT_RADIO_BUTTON;
        }

        Ok(flags)
    }

    /// Applies post-display initialization to every created control.
    pub fn apply_initialization(&mut self) -> ControlResult<()> {
        self.deny_if_not_bound()?;
        self.check_box.apply_initialization();
        self.expander.apply_initialization();
        self.footer.apply_initialization();
        self.progress_bar.apply_initialization();
        for button in &mut self.buttons {
            button.apply_initialization();
        }
        for radio_button in &mut self.radio_buttons {
            radio_button.apply_initialization();
        }
        Ok(())
    }

    /*
     * Unbinds every control bound to these contents and clears the bound mark.
     * Controls bound elsewhere are left alone. Commands still queued belong to the
     * closed dialog and are discarded.
     */
    pub fn unbind(&mut self) {
        let host = self.host_ref();
        if self.check_box.is_bound_to(&host) {
            self.check_box.unbind();
        }
        if self.expander.is_bound_to(&host) {
            self.expander.unbind();
        }
        if self.footer.is_bound_to(&host) {
            self.footer.unbind();
        }
        if self.progress_bar.is_bound_to(&host) {
            self.progress_bar.unbind();
        }
        for button in self.buttons.iter_mut().filter(|b| b.is_bound_to(&host)) {
            button.unbind();
        }
        for radio_button in self.radio_buttons.iter_mut().filter(|r| r.is_bound_to(&host)) {
            radio_button.unbind();
        }

        let discarded = self.shared.commands.borrow_mut().drain(..).count();
        if discarded > 0 {
            log::debug!(
                "TaskDialogContents: Discarded {discarded} pending commands for contents {:?}",
                self.id
            );
        }
        if self.shared.bound.replace(false) {
            log::debug!("TaskDialogContents: Unbound contents {:?}", self.id);
        }
    }

    /// Returns and clears the commands queued by bound controls.
    pub fn drain_commands(&mut self) -> Vec<DialogCommand> {
        std::mem::take(&mut *self.shared.commands.borrow_mut())
    }

    /*
     * Applies a platform notification to the matching control and translates it into
     * an application event. Notifications arriving while unbound, or for ids no
     * control owns, yield `None`.
     */
    pub fn handle_notification(&mut self, notification: DialogNotification) -> Option<DialogEvent> {
        if !self.is_bound() {
            log::trace!(
                "TaskDialogContents: Ignoring {notification:?} for unbound contents {:?}",
                self.id
            );
            return None;
        }

        match notification {
            DialogNotification::VerificationClicked { checked } => {
                self.check_box.handle_verification_clicked(checked);
                Some(DialogEvent::VerificationToggled {
                    contents_id: self.id,
                    checked,
                })
            }
            DialogNotification::ExpandoButtonClicked { expanded } => {
                self.expander.handle_expando_button_clicked(expanded);
                Some(DialogEvent::ExpanderToggled {
                    contents_id: self.id,
                    expanded,
                })
            }
            DialogNotification::RadioButtonClicked { button_id } => {
                let Some(index) = self
                    .radio_buttons
                    .iter()
                    .position(|r| r.button_id() == Some(button_id))
                else {
                    log::warn!(
                        "TaskDialogContents: No radio button with id {button_id} in contents {:?}",
                        self.id
                    );
                    return None;
                };
                for (i, radio_button) in self.radio_buttons.iter_mut().enumerate() {
                    radio_button.handle_radio_button_clicked(i == index);
                }
                Some(DialogEvent::RadioButtonChecked {
                    contents_id: self.id,
                    index,
                })
            }
            DialogNotification::ButtonClicked { button_id } => {
                let Some(index) = self
                    .buttons
                    .iter()
                    .position(|b| b.button_id() == Some(button_id))
                else {
                    log::warn!(
                        "TaskDialogContents: No custom button with id {button_id} in contents {:?}",
                        self.id
                    );
                    return None;
                };
                Some(DialogEvent::ButtonClicked {
                    contents_id: self.id,
                    index,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DialogIcon, ProgressBarState};

    fn populated_contents() -> TaskDialogContents {
        let mut contents = TaskDialogContents::new(ContentsConfig {
            instruction: "Copy files".to_string(),
            allow_cancel: true,
            ..Default::default()
        });
        contents
            .set_check_box(TaskDialogCheckBox::new("Do not ask again"))
            .unwrap();
        contents
            .set_footer(TaskDialogFooter::new("Footer text"))
            .unwrap();
        contents.add_button(TaskDialogButton::new("Retry")).unwrap();
        contents.add_button(TaskDialogButton::new("Skip")).unwrap();
        contents
            .add_radio_button(TaskDialogRadioButton::new("Fast"))
            .unwrap();
        contents
            .add_radio_button(TaskDialogRadioButton::new("Thorough"))
            .unwrap();
        contents
    }

    #[test]
    fn bind_binds_every_control_and_aggregates_flags() {
        // Arrange
        let mut contents = populated_contents();
        contents.check_box_mut().set_checked(true).unwrap();
        // Act
        let flags = contents.bind().unwrap();
        // Assert
        assert!(contents.is_bound());
        assert!(contents.check_box().is_created());
        assert!(contents.footer().is_created());
        assert!(contents.expander().is_bound());
        assert!(!contents.expander().is_created());
        assert!(!contents.progress_bar().is_created());
        assert!(contents.buttons().iter().all(|b| b.is_created()));
        assert!(contents.radio_buttons().iter().all(|r| r.is_created()));
        assert_eq!(
            flags,
            TaskDialogFlags::ALLOW_DIALOG_CANCELLATION
                | TaskDialogFlags::VERIFICATION_FLAG_CHECKED
                | TaskDialogFlags::NO_DEFAULT_RADIO_BUTTON
        );
    }

    #[test]
    fn bind_assigns_button_ids_in_order() {
        let mut contents = populated_contents();
        contents.bind().unwrap();
        assert_eq!(contents.buttons()[0].button_id(), Some(CUSTOM_BUTTON_START_ID));
        assert_eq!(
            contents.buttons()[1].button_id(),
            Some(CUSTOM_BUTTON_START_ID + 1)
        );
        assert_eq!(
            contents.radio_buttons()[1].button_id(),
            Some(RADIO_BUTTON_START_ID + 1)
        );
    }

    #[test]
    fn checked_radio_suppresses_no_default_flag() {
        let mut contents = populated_contents();
        contents
            .radio_button_mut(1)
            .unwrap()
            .set_checked(true)
            .unwrap();
        let flags = contents.bind().unwrap();
        assert!(!flags.contains(TaskDialogFlags::NO_DEFAULT_RADIO_BUTTON));
    }

    #[test]
    fn bind_twice_is_rejected() {
        let mut contents = populated_contents();
        contents.bind().unwrap();
        assert!(matches!(
            contents.bind(),
            Err(ControlError::InvalidOperation(_))
        ));
        assert!(contents.is_bound());
    }

    #[test]
    fn invalid_configuration_fails_before_binding_anything() {
        let mut contents = populated_contents();
        contents
            .radio_button_mut(0)
            .unwrap()
            .set_checked(true)
            .unwrap();
        contents
            .radio_button_mut(1)
            .unwrap()
            .set_checked(true)
            .unwrap();

        assert!(matches!(
            contents.bind(),
            Err(ControlError::InvalidOperation(_))
        ));
        assert!(!contents.is_bound());
        assert!(!contents.check_box().is_bound());
    }

    #[test]
    fn two_default_buttons_are_rejected() {
        let mut contents = populated_contents();
        contents.button_mut(0).unwrap().set_default(true).unwrap();
        contents.button_mut(1).unwrap().set_default(true).unwrap();
        assert!(contents.bind().is_err());
    }

    #[test]
    fn failed_control_bind_rolls_back() {
        // Arrange: the progress bar is held by another, bound contents.
        let other = TaskDialogContents::default();
        let mut contents = populated_contents();
        contents
            .set_progress_bar(TaskDialogProgressBar::new(ProgressBarState::Normal))
            .unwrap();
        contents
            .progress_bar_mut()
            .bind(Some(other.host_ref()))
            .unwrap();
        // Act
        let result = contents.bind();
        // Assert
        assert!(matches!(result, Err(ControlError::InvalidOperation(_))));
        assert!(!contents.is_bound());
        assert!(!contents.check_box().is_bound());
        assert!(!contents.footer().is_bound());
        assert!(contents.progress_bar().is_bound_to(&other.host_ref()));
    }

    #[test]
    fn failed_bind_keeps_ids_of_controls_bound_elsewhere() {
        // Arrange: the second button is held by another contents under its own id.
        let other = TaskDialogContents::default();
        let mut contents = populated_contents();
        let stray = contents.button_mut(1).unwrap();
        stray.bind(Some(other.host_ref())).unwrap();
        stray.assign_button_id(7);
        // Act
        let result = contents.bind();
        // Assert
        assert!(matches!(result, Err(ControlError::InvalidOperation(_))));
        assert_eq!(contents.buttons()[1].button_id(), Some(7));
        assert!(contents.buttons()[1].is_bound_to(&other.host_ref()));
        assert_eq!(contents.buttons()[0].button_id(), None);
        assert!(!contents.buttons()[0].is_bound());
    }

    #[test]
    fn owned_controls_stay_locked_for_the_whole_bind() {
        let mut contents = populated_contents();
        contents.bind().unwrap();

        assert!(
            contents
                .check_box_mut()
                .set_text("Changed while dialog shown")
                .is_err()
        );
        contents.apply_initialization().unwrap();
        assert!(contents.check_box_mut().set_text("Still shown").is_err());
        assert!(contents.button_mut(0).unwrap().set_text("Abort").is_err());
        assert!(
            contents
                .radio_button_mut(0)
                .unwrap()
                .set_text("Slow")
                .is_err()
        );
        assert!(contents.check_box().is_bound());
        assert_eq!(contents.check_box().text(), "Do not ask again");

        contents.unbind();
        assert!(contents.check_box_mut().set_text("Changed after close").is_ok());
    }

    #[test]
    fn unbind_detaches_every_control_and_is_idempotent() {
        let mut contents = populated_contents();
        contents.bind().unwrap();

        contents.unbind();
        contents.unbind();

        assert!(!contents.is_bound());
        assert!(!contents.check_box().is_bound());
        assert!(!contents.footer().is_bound());
        assert!(contents.buttons().iter().all(|b| !b.is_bound()));
        assert!(contents.radio_buttons().iter().all(|r| !r.is_bound()));
        assert!(contents.buttons().iter().all(|b| b.button_id().is_none()));
    }

    #[test]
    fn contents_can_be_rebound_after_unbind() {
        let mut contents = populated_contents();
        contents.bind().unwrap();
        contents.unbind();
        contents.check_box_mut().set_text("").unwrap();

        contents.bind().unwrap();
        assert!(!contents.check_box().is_created());
    }

    #[test]
    fn structural_changes_are_denied_while_bound() {
        let mut contents = populated_contents();
        contents.bind().unwrap();

        assert!(contents.add_button(TaskDialogButton::new("More")).is_err());
        assert!(contents.clear_radio_buttons().is_err());
        assert!(contents.set_config(ContentsConfig::default()).is_err());
        assert!(
            contents
                .set_footer(TaskDialogFooter::new("Replacement"))
                .is_err()
        );
    }

    #[test]
    fn bound_control_cannot_be_added_to_other_contents() {
        let mut first = populated_contents();
        first.bind().unwrap();
        let mut button = TaskDialogButton::new("Stray");
        button.bind(Some(first.host_ref())).unwrap();

        let mut second = TaskDialogContents::default();
        assert!(matches!(
            second.add_button(button),
            Err(ControlError::InvalidOperation(_))
        ));
    }

    #[test]
    fn control_guard_delegates_to_bound_contents() {
        let mut contents = populated_contents();
        contents.bind().unwrap();
        let err = contents.check_box().deny_if_bound().unwrap_err();
        assert_eq!(err, contents_bound_error(contents.id()));
    }

    #[test]
    fn apply_initialization_requires_binding() {
        let mut contents = populated_contents();
        assert!(contents.apply_initialization().is_err());
        contents.bind().unwrap();
        assert!(contents.apply_initialization().is_ok());
    }

    #[test]
    fn apply_initialization_queues_commands_for_created_controls_only() {
        let mut contents = populated_contents();
        contents.button_mut(1).unwrap().set_enabled(false).unwrap();
        contents
            .set_progress_bar(TaskDialogProgressBar::new(ProgressBarState::Marquee))
            .unwrap();
        contents.bind().unwrap();

        contents.apply_initialization().unwrap();

        assert_eq!(
            contents.drain_commands(),
            vec![
                DialogCommand::SetProgressBarMarquee {
                    enabled: true,
                    animation_speed: 0
                },
                DialogCommand::EnableButton {
                    button_id: CUSTOM_BUTTON_START_ID + 1,
                    enabled: false
                },
            ]
        );
        assert!(contents.drain_commands().is_empty());
    }

    #[test]
    fn live_text_updates_are_queued_only_while_bound() {
        let mut contents = populated_contents();
        contents.set_text("before");
        assert!(contents.drain_commands().is_empty());

        contents.bind().unwrap();
        contents.set_text("after");
        contents.set_instruction("Now copying");
        assert_eq!(
            contents.drain_commands(),
            vec![
                DialogCommand::UpdateElementText {
                    element: DialogElement::Content,
                    text: "after".to_string()
                },
                DialogCommand::UpdateElementText {
                    element: DialogElement::MainInstruction,
                    text: "Now copying".to_string()
                },
            ]
        );
        assert_eq!(contents.config().text, "after");
    }

    #[test]
    fn unbind_discards_pending_commands() {
        let mut contents = populated_contents();
        contents.bind().unwrap();
        contents.footer_mut().set_icon(DialogIcon::Warning).unwrap();
        contents.unbind();
        assert!(contents.drain_commands().is_empty());
    }

    #[test]
    fn notifications_update_control_state() {
        let mut contents = populated_contents();
        contents
            .set_expander(TaskDialogExpander::new("Details"))
            .unwrap();
        contents.bind().unwrap();
        let id = contents.id();

        assert_eq!(
            contents.handle_notification(DialogNotification::VerificationClicked { checked: true }),
            Some(DialogEvent::VerificationToggled {
                contents_id: id,
                checked: true
            })
        );
        assert!(contents.check_box().checked());

        assert_eq!(
            contents.handle_notification(DialogNotification::ExpandoButtonClicked {
                expanded: true
            }),
            Some(DialogEvent::ExpanderToggled {
                contents_id: id,
                expanded: true
            })
        );
        assert!(contents.expander().expanded());

        let radio_id = RADIO_BUTTON_START_ID + 1;
        assert_eq!(
            contents.handle_notification(DialogNotification::RadioButtonClicked {
                button_id: radio_id
            }),
            Some(DialogEvent::RadioButtonChecked {
                contents_id: id,
                index: 1
            })
        );
        assert!(!contents.radio_buttons()[0].checked());
        assert!(contents.radio_buttons()[1].checked());

        assert_eq!(
            contents.handle_notification(DialogNotification::ButtonClicked {
                button_id: CUSTOM_BUTTON_START_ID
            }),
            Some(DialogEvent::ButtonClicked {
                contents_id: id,
                index: 0
            })
        );
    }

    #[test]
    fn unknown_or_unbound_notifications_are_ignored() {
        let mut contents = populated_contents();
        assert_eq!(
            contents.handle_notification(DialogNotification::VerificationClicked { checked: true }),
            None
        );
        assert!(!contents.check_box().checked());

        contents.bind().unwrap();
        assert_eq!(
            contents.handle_notification(DialogNotification::ButtonClicked { button_id: 1 }),
            None
        );
        assert_eq!(
            contents.handle_notification(DialogNotification::RadioButtonClicked { button_id: 99 }),
            None
        );
    }

    #[test]
    fn commands_posted_after_contents_drop_are_discarded() {
        let host = TaskDialogContents::default().host_ref();
        assert!(!host.is_alive());
        assert!(!host.is_host_bound());
        host.post(DialogCommand::ClickButton { button_id: 100 });
    }
}
