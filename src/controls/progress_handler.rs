/*
 * The progress bar. It is shown unless its state is `None`; marquee states ask the
 * dialog for a marquee bar, every other state for a range bar. The native bar only
 * accepts its range, position, and state after the dialog exists, so they are sent
 * during post-display initialization and on every later change while bound.
 */

use crate::controls::{Control, ControlBinding, ControlCapabilities, ControlKind, Sealed};
use crate::error::{ControlError, Result as ControlResult};
use crate::types::{DialogCommand, ProgressBarState, TaskDialogFlags};

const DEFAULT_MAXIMUM: u16 = 100;

#[derive(Debug, Clone)]
pub struct ProgressBar {
    state: ProgressBarState,
    minimum: u16,
    maximum: u16,
    value: u16,
    marquee_speed: u32,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            state: ProgressBarState::None,
            minimum: 0,
            maximum: DEFAULT_MAXIMUM,
            value: 0,
            marquee_speed: 0,
        }
    }
}

impl ProgressBar {
    fn marquee_command(&self) -> DialogCommand {
        DialogCommand::SetProgressBarMarquee {
            enabled: self.state == ProgressBarState::Marquee,
            animation_speed: self.marquee_speed,
        }
    }

    fn initialization_commands(&self) -> Vec<DialogCommand> {
        if self.state.is_marquee() {
            vec![self.marquee_command()]
        } else {
            vec![
                DialogCommand::SetProgressBarState { state: self.state },
                DialogCommand::SetProgressBarRange {
                    min: self.minimum,
                    max: self.maximum,
                },
                DialogCommand::SetProgressBarPosition {
                    position: self.value,
                },
            ]
        }
    }
}

impl Sealed for ProgressBar {}

impl ControlCapabilities for ProgressBar {
    fn kind(&self) -> ControlKind {
        ControlKind::ProgressBar
    }

    fn is_creatable(&self) -> bool {
        self.state != ProgressBarState::None
    }

    fn flags_core(&self) -> TaskDialogFlags {
        if self.state.is_marquee() {
            TaskDialogFlags::SHOW_MARQUEE_PROGRESS_BAR
        } else {
            TaskDialogFlags::SHOW_PROGRESS_BAR
        }
    }

    fn apply_initialization_core(&mut self, binding: &ControlBinding) {
        for command in self.initialization_commands() {
            binding.post(command);
        }
    }
}

fn to_range_value(value: u32, what: &str) -> ControlResult<u16> {
    u16::try_from(value).map_err(|_| {
        ControlError::InvalidArgument(format!(
            "Progress bar {what} {value} is outside 0..={}",
            u16::MAX
        ))
    })
}

pub type TaskDialogProgressBar = Control<ProgressBar>;

impl Control<ProgressBar> {
    pub fn new(state: ProgressBarState) -> Self {
        Control::from_kind(ProgressBar {
            state,
            ..Default::default()
        })
    }

    pub fn state(&self) -> ProgressBarState {
        self.kind.state
    }

    /*
     * A bound bar cannot be removed, since its existence was fixed at bind time.
     * Switching between marquee and range display while bound changes the bar type
     * first and then resends the full initialization for the new type.
     */
    pub fn set_state(&mut self, state: ProgressBarState) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        if !self.is_bound() {
            self.kind.state = state;
            return Ok(());
        }
        if state == ProgressBarState::None {
            return Err(ControlError::InvalidOperation(
                "Cannot remove the progress bar while it is bound".to_string(),
            ));
        }

        let switches_type = state.is_marquee() != self.kind.state.is_marquee();
        log::debug!(
            "ProgressBar: State {:?} -> {state:?} (type switch: {switches_type})",
            self.kind.state
        );
        self.kind.state = state;
        if switches_type {
            self.binding.post(DialogCommand::SetMarqueeProgressBar {
                marquee: state.is_marquee(),
            });
            for command in self.kind.initialization_commands() {
                self.binding.post(command);
            }
        } else if state.is_marquee() {
            self.binding.post(self.kind.marquee_command());
        } else {
            self.binding
                .post(DialogCommand::SetProgressBarState { state });
        }
        Ok(())
    }

    pub fn minimum(&self) -> u16 {
        self.kind.minimum
    }

    pub fn maximum(&self) -> u16 {
        self.kind.maximum
    }

    pub fn value(&self) -> u16 {
        self.kind.value
    }

    /// Sets the range; the current value is clamped into it.
    pub fn set_range(&mut self, minimum: u32, maximum: u32) -> ControlResult<()> {
        let minimum = to_range_value(minimum, "minimum")?;
        let maximum = to_range_value(maximum, "maximum")?;
        if minimum > maximum {
            return Err(ControlError::InvalidArgument(format!(
                "Progress bar minimum {minimum} exceeds maximum {maximum}"
            )));
        }
        self.deny_if_bound_and_not_created()?;

        self.kind.minimum = minimum;
        self.kind.maximum = maximum;
        self.kind.value = self.kind.value.clamp(minimum, maximum);
        if !self.kind.state.is_marquee() {
            self.binding.post(DialogCommand::SetProgressBarRange {
                min: minimum,
                max: maximum,
            });
        }
        Ok(())
    }

    pub fn set_value(&mut self, value: u32) -> ControlResult<()> {
        let value = to_range_value(value, "value")?;
        if value < self.kind.minimum || value > self.kind.maximum {
            return Err(ControlError::InvalidArgument(format!(
                "Progress bar value {value} is outside {}..={}",
                self.kind.minimum, self.kind.maximum
            )));
        }
        self.deny_if_bound_and_not_created()?;

        self.kind.value = value;
        if !self.kind.state.is_marquee() {
            self.binding
                .post(DialogCommand::SetProgressBarPosition { position: value });
        }
        Ok(())
    }

    pub fn marquee_speed(&self) -> u32 {
        self.kind.marquee_speed
    }

    /// Marquee animation interval in milliseconds; 0 uses the platform default.
    pub fn set_marquee_speed(&mut self, speed: u32) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        self.kind.marquee_speed = speed;
        if self.kind.state.is_marquee() {
            self.binding.post(self.kind.marquee_command());
        }
        Ok(())
    }
}
