/*
 * Provides the public entry point for the taskdialogui crate: the lifecycle binding
 * model behind composable task dialog controls. Controls (verification check box,
 * expander, footer, progress bar, custom and radio buttons) are attached to a
 * `TaskDialogContents`, which binds them when the dialog is shown or navigated,
 * applies their post-display initialization, and unbinds them when it closes.
 *
 * Rendering and the dialog's message loop belong to the embedding platform layer.
 * It drains the `DialogCommand`s queued by bound controls and reports native
 * notifications back through `TaskDialogContents::handle_notification`. The command
 * translation is portable; sending it to a window is only compiled on Windows.
 */
pub mod command_executor;
pub mod contents;
pub(crate) mod controls;
pub mod error;
pub mod types;

pub use command_executor::{DialogMessage, command_message};
#[cfg(target_os = "windows")]
pub use command_executor::{execute_dialog_command, to_native_flags};
pub use contents::{HostRef, TaskDialogContents};
pub use controls::button_handler::{Button, TaskDialogButton};
pub use controls::checkbox_handler::{CheckBox, TaskDialogCheckBox};
pub use controls::expander_handler::{Expander, TaskDialogExpander};
pub use controls::footer_handler::{Footer, TaskDialogFooter};
pub use controls::progress_handler::{ProgressBar, TaskDialogProgressBar};
pub use controls::radiobutton_handler::{RadioButton, TaskDialogRadioButton};
pub use controls::{Control, ControlBinding, ControlCapabilities, ControlKind};
pub use error::{ControlError, Result as ControlResult};
pub use types::{
    ContentsConfig, ContentsId, DialogCommand, DialogElement, DialogEvent, DialogIcon,
    DialogNotification, IconElement, ProgressBarState, TaskDialogFlags,
};
