/*
 * Platform-agnostic types shared between the binding state machine, the concrete
 * control kinds, and the host contents. Nothing here touches Win32; the native
 * translation of flags and commands lives in `command_executor` and is only
 * compiled on Windows.
 */

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTENTS_ID: AtomicU64 = AtomicU64::new(1);

/// Logical identifier of a `TaskDialogContents` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentsId(pub u64);

impl ContentsId {
    pub(crate) fn next() -> Self {
        ContentsId(NEXT_CONTENTS_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

bitflags::bitflags! {
    /// Configuration flags contributed to the dialog before it is shown or navigated.
    /// Bit values match the native `TDF_*` constants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TaskDialogFlags: u32 {
        const ENABLE_HYPERLINKS = 0x0001;
        const USE_HICON_MAIN = 0x0002;
        const USE_HICON_FOOTER = 0x0004;
        const ALLOW_DIALOG_CANCELLATION = 0x0008;
        const USE_COMMAND_LINKS = 0x0010;
        const USE_COMMAND_LINKS_NO_ICON = 0x0020;
        const EXPAND_FOOTER_AREA = 0x0040;
        const EXPANDED_BY_DEFAULT = 0x0080;
        const VERIFICATION_FLAG_CHECKED = 0x0100;
        const SHOW_PROGRESS_BAR = 0x0200;
        const SHOW_MARQUEE_PROGRESS_BAR = 0x0400;
        const CALLBACK_TIMER = 0x0800;
        const POSITION_RELATIVE_TO_WINDOW = 0x1000;
        const RTL_LAYOUT = 0x2000;
        const NO_DEFAULT_RADIO_BUTTON = 0x4000;
        const CAN_BE_MINIMIZED = 0x8000;
        const NO_SET_FOREGROUND = 0x0001_0000;
        const SIZE_TO_CONTENT = 0x0100_0000;
    }
}

/// Icon shown in the main instruction area or in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogIcon {
    #[default]
    None,
    Information,
    Warning,
    Error,
    Shield,
    /// A caller-owned native icon handle.
    Handle(isize),
}

impl DialogIcon {
    pub fn is_handle(&self) -> bool {
        matches!(self, DialogIcon::Handle(_))
    }
}

/// Visual state of the progress bar. `None` means no progress bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressBarState {
    #[default]
    None,
    Normal,
    Paused,
    Error,
    Marquee,
    MarqueePaused,
}

impl ProgressBarState {
    pub fn is_marquee(&self) -> bool {
        matches!(
            self,
            ProgressBarState::Marquee | ProgressBarState::MarqueePaused
        )
    }
}

/// Text elements that can be updated while the dialog is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogElement {
    Content,
    ExpandedInformation,
    Footer,
    MainInstruction,
}

/// Icon slots that can be updated while the dialog is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconElement {
    Main,
    Footer,
}

/*
 * Requests a bound control issues against the live dialog. They are queued on the
 * host contents and drained by the platform layer, which translates them into
 * native messages (see `command_executor` on Windows).
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCommand {
    ClickVerification { checked: bool, focus: bool },
    ClickButton { button_id: i32 },
    ClickRadioButton { button_id: i32 },
    EnableButton { button_id: i32, enabled: bool },
    EnableRadioButton { button_id: i32, enabled: bool },
    SetButtonElevationRequired { button_id: i32, required: bool },
    /// Switches the progress bar between marquee and range display.
    SetMarqueeProgressBar { marquee: bool },
    /// Starts or stops the marquee animation.
    SetProgressBarMarquee { enabled: bool, animation_speed: u32 },
    SetProgressBarState { state: ProgressBarState },
    SetProgressBarRange { min: u16, max: u16 },
    SetProgressBarPosition { position: u16 },
    UpdateElementText { element: DialogElement, text: String },
    UpdateIcon { element: IconElement, icon: DialogIcon },
}

/// Notifications the platform layer reports back while the dialog is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogNotification {
    VerificationClicked { checked: bool },
    RadioButtonClicked { button_id: i32 },
    ExpandoButtonClicked { expanded: bool },
    ButtonClicked { button_id: i32 },
}

/// Application-facing events produced from platform notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    VerificationToggled {
        contents_id: ContentsId,
        checked: bool,
    },
    RadioButtonChecked {
        contents_id: ContentsId,
        index: usize,
    },
    ExpanderToggled {
        contents_id: ContentsId,
        expanded: bool,
    },
    ButtonClicked {
        contents_id: ContentsId,
        index: usize,
    },
}

/// Construction-time configuration of a `TaskDialogContents`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentsConfig {
    pub title: String,
    pub instruction: String,
    pub text: String,
    pub icon: DialogIcon,
    pub enable_hyperlinks: bool,
    pub allow_cancel: bool,
    pub right_to_left: bool,
    pub can_be_minimized: bool,
    pub size_to_content: bool,
    pub use_command_links: bool,
}

impl ContentsConfig {
    /*
     * Flags the contents contribute on their own, independent of any control.
     */
    pub(crate) fn flags(&self) -> TaskDialogFlags {
        let mut flags = TaskDialogFlags::empty();
        flags.set(TaskDialogFlags::ENABLE_HYPERLINKS, self.enable_hyperlinks);
        flags.set(TaskDialogFlags::ALLOW_DIALOG_CANCELLATION, self.allow_cancel);
        flags.set(TaskDialogFlags::RTL_LAYOUT, self.right_to_left);
        flags.set(TaskDialogFlags::CAN_BE_MINIMIZED, self.can_be_minimized);
        flags.set(TaskDialogFlags::SIZE_TO_CONTENT, self.size_to_content);
        flags.set(TaskDialogFlags::USE_COMMAND_LINKS, self.use_command_links);
        flags.set(TaskDialogFlags::USE_HICON_MAIN, self.icon.is_handle());
        flags
    }
}
