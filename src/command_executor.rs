/*
 * Translates queued `DialogCommand`s into task dialog messages and, on Windows,
 * sends them to the live dialog window.
 *
 * The translation itself is plain data (message id, WPARAM, LPARAM, optional text)
 * so it is compiled and tested on every platform. Only the final `SendMessageW`
 * call and the native flag conversion are Windows-specific.
 */

use crate::types::{DialogCommand, DialogElement, DialogIcon, IconElement, ProgressBarState};

const WM_USER: u32 = 0x0400;

pub(crate) const TDM_CLICK_BUTTON: u32 = WM_USER + 102;
pub(crate) const TDM_SET_MARQUEE_PROGRESS_BAR: u32 = WM_USER + 103;
pub(crate) const TDM_SET_PROGRESS_BAR_STATE: u32 = WM_USER + 104;
pub(crate) const TDM_SET_PROGRESS_BAR_RANGE: u32 = WM_USER + 105;
pub(crate) const TDM_SET_PROGRESS_BAR_POS: u32 = WM_USER + 106;
pub(crate) const TDM_SET_PROGRESS_BAR_MARQUEE: u32 = WM_USER + 107;
pub(crate) const TDM_CLICK_RADIO_BUTTON: u32 = WM_USER + 110;
pub(crate) const TDM_ENABLE_BUTTON: u32 = WM_USER + 111;
pub(crate) const TDM_ENABLE_RADIO_BUTTON: u32 = WM_USER + 112;
pub(crate) const TDM_CLICK_VERIFICATION: u32 = WM_USER + 113;
pub(crate) const TDM_UPDATE_ELEMENT_TEXT: u32 = WM_USER + 114;
pub(crate) const TDM_SET_BUTTON_ELEVATION_REQUIRED_STATE: u32 = WM_USER + 115;
pub(crate) const TDM_UPDATE_ICON: u32 = WM_USER + 116;

// PBST_* values of the progress bar common control.
const PBST_NORMAL: usize = 0x0001;
const PBST_ERROR: usize = 0x0002;
const PBST_PAUSED: usize = 0x0003;

// Stock icons are passed as MAKEINTRESOURCE(-1..-4).
const TD_WARNING_ICON: isize = 0xFFFF;
const TD_ERROR_ICON: isize = 0xFFFE;
const TD_INFORMATION_ICON: isize = 0xFFFD;
const TD_SHIELD_ICON: isize = 0xFFFC;

/// A task dialog message ready to be sent. Text arguments are NUL-terminated UTF-16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogMessage {
    pub msg: u32,
    pub wparam: usize,
    pub lparam: isize,
    pub text: Option<Vec<u16>>,
}

impl DialogMessage {
    fn new(msg: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            msg,
            wparam,
            lparam,
            text: None,
        }
    }
}

fn element_index(element: DialogElement) -> usize {
    match element {
        DialogElement::Content => 0,
        DialogElement::ExpandedInformation => 1,
        DialogElement::Footer => 2,
        DialogElement::MainInstruction => 3,
    }
}

fn icon_resource(icon: DialogIcon) -> isize {
    match icon {
        DialogIcon::None => 0,
        DialogIcon::Warning => TD_WARNING_ICON,
        DialogIcon::Error => TD_ERROR_ICON,
        DialogIcon::Information => TD_INFORMATION_ICON,
        DialogIcon::Shield => TD_SHIELD_ICON,
        DialogIcon::Handle(handle) => handle,
    }
}

fn progress_state_value(state: ProgressBarState) -> usize {
    match state {
        ProgressBarState::Error => PBST_ERROR,
        ProgressBarState::Paused => PBST_PAUSED,
        ProgressBarState::Normal => PBST_NORMAL,
        other => {
            log::warn!("CommandExecutor: {other:?} has no range bar state, using normal");
            PBST_NORMAL
        }
    }
}

fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}

/*
 * Pure mapping from a command to the message the native dialog expects.
 * Text-carrying commands leave `lparam` at zero; the sender points it at `text`
 * for the duration of the call.
 */
pub fn command_message(command: &DialogCommand) -> DialogMessage {
    match command {
        DialogCommand::ClickVerification { checked, focus } => DialogMessage::new(
            TDM_CLICK_VERIFICATION,
            usize::from(*checked),
            isize::from(*focus),
        ),
        DialogCommand::ClickButton { button_id } => {
            DialogMessage::new(TDM_CLICK_BUTTON, *button_id as usize, 0)
        }
        DialogCommand::ClickRadioButton { button_id } => {
            DialogMessage::new(TDM_CLICK_RADIO_BUTTON, *button_id as usize, 0)
        }
        DialogCommand::EnableButton { button_id, enabled } => DialogMessage::new(
            TDM_ENABLE_BUTTON,
            *button_id as usize,
            isize::from(*enabled),
        ),
        DialogCommand::EnableRadioButton { button_id, enabled } => DialogMessage::new(
            TDM_ENABLE_RADIO_BUTTON,
            *button_id as usize,
            isize::from(*enabled),
        ),
        DialogCommand::SetButtonElevationRequired {
            button_id,
            required,
        } => DialogMessage::new(
            TDM_SET_BUTTON_ELEVATION_REQUIRED_STATE,
            *button_id as usize,
            isize::from(*required),
        ),
        DialogCommand::SetMarqueeProgressBar { marquee } => {
            DialogMessage::new(TDM_SET_MARQUEE_PROGRESS_BAR, usize::from(*marquee), 0)
        }
        DialogCommand::SetProgressBarMarquee {
            enabled,
            animation_speed,
        } => DialogMessage::new(
            TDM_SET_PROGRESS_BAR_MARQUEE,
            usize::from(*enabled),
            *animation_speed as isize,
        ),
        DialogCommand::SetProgressBarState { state } => {
            DialogMessage::new(TDM_SET_PROGRESS_BAR_STATE, progress_state_value(*state), 0)
        }
        DialogCommand::SetProgressBarRange { min, max } => {
            // MAKELPARAM(min, max)
            let lparam = ((*max as u32) << 16 | *min as u32) as isize;
            DialogMessage::new(TDM_SET_PROGRESS_BAR_RANGE, 0, lparam)
        }
        DialogCommand::SetProgressBarPosition { position } => {
            DialogMessage::new(TDM_SET_PROGRESS_BAR_POS, *position as usize, 0)
        }
        DialogCommand::UpdateElementText { element, text } => DialogMessage {
            msg: TDM_UPDATE_ELEMENT_TEXT,
            wparam: element_index(*element),
            lparam: 0,
            text: Some(to_wide(text)),
        },
        DialogCommand::UpdateIcon { element, icon } => {
            let slot = match element {
                IconElement::Main => 0,
                IconElement::Footer => 1,
            };
            DialogMessage::new(TDM_UPDATE_ICON, slot, icon_resource(*icon))
        }
    }
}

#[cfg(target_os = "windows")]
pub use native::{execute_dialog_command, to_native_flags};

#[cfg(target_os = "windows")]
mod native {
    use super::command_message;
    use crate::types::{DialogCommand, TaskDialogFlags};

    use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
    use windows::Win32::UI::Controls::TASKDIALOG_FLAGS;
    use windows::Win32::UI::WindowsAndMessaging::SendMessageW;

    pub fn to_native_flags(flags: TaskDialogFlags) -> TASKDIALOG_FLAGS {
        TASKDIALOG_FLAGS(flags.bits() as i32)
    }

    /*
     * Sends one command to the live task dialog. Must run on the thread that owns
     * `hwnd_dialog`, which is the thread driving the dialog's message loop.
     */
    pub fn execute_dialog_command(hwnd_dialog: HWND, command: &DialogCommand) {
        let message = command_message(command);
        log::trace!(
            "CommandExecutor: Sending {command:?} as message {:#x} to {hwnd_dialog:?}",
            message.msg
        );
        let lparam = match &message.text {
            Some(text) => text.as_ptr() as isize,
            None => message.lparam,
        };
        unsafe {
            SendMessageW(
                hwnd_dialog,
                message.msg,
                Some(WPARAM(message.wparam)),
                Some(LPARAM(lparam)),
            );
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_verification_maps_checked_and_focus() {
        let message = command_message(&DialogCommand::ClickVerification {
            checked: true,
            focus: false,
        });
        assert_eq!(message, DialogMessage::new(TDM_CLICK_VERIFICATION, 1, 0));
    }

    #[test]
    fn progress_range_packs_min_and_max() {
        let message = command_message(&DialogCommand::SetProgressBarRange { min: 10, max: 200 });
        assert_eq!(message.msg, TDM_SET_PROGRESS_BAR_RANGE);
        assert_eq!(message.lparam, (200 << 16) | 10);
    }

    #[test]
    fn progress_states_map_to_native_values() {
        let state = |state| {
            command_message(&DialogCommand::SetProgressBarState { state }).wparam
        };
        assert_eq!(state(ProgressBarState::Normal), PBST_NORMAL);
        assert_eq!(state(ProgressBarState::Error), PBST_ERROR);
        assert_eq!(state(ProgressBarState::Paused), PBST_PAUSED);
    }

    #[test]
    fn element_text_is_nul_terminated_utf16() {
        let message = command_message(&DialogCommand::UpdateElementText {
            element: DialogElement::Footer,
            text: "ok".to_string(),
        });
        assert_eq!(message.msg, TDM_UPDATE_ELEMENT_TEXT);
        assert_eq!(message.wparam, 2);
        assert_eq!(message.text, Some(vec![b'o' as u16, b'k' as u16, 0]));
    }

    #[test]
    fn footer_icon_uses_stock_resource_or_handle() {
        let stock = command_message(&DialogCommand::UpdateIcon {
            element: IconElement::Footer,
            icon: DialogIcon::Shield,
        });
        assert_eq!((stock.wparam, stock.lparam), (1, TD_SHIELD_ICON));

        let handle = command_message(&DialogCommand::UpdateIcon {
            element: IconElement::Main,
            icon: DialogIcon::Handle(0x5000),
        });
        assert_eq!((handle.wparam, handle.lparam), (0, 0x5000));
    }
}
