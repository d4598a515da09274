/*
 * The control binding state machine shared by every task dialog control.
 *
 * A control is constructed detached. The host contents bind it when the dialog is
 * about to be shown or navigated; at that moment the control snapshots its
 * creatability and, if creatable, reports the flags it needs. Once the native
 * dialog exists the host applies post-display initialization, and when the dialog
 * closes (or the control is detached) the host unbinds it again.
 *
 *   Detached --bind--> Bound-Created | Bound-NotCreated --unbind--> Detached
 *
 * Concrete kinds plug in through `ControlCapabilities`. The trait is sealed, so the
 * set of kinds is closed and enumerated by `ControlKind`.
 */

pub(crate) mod button_handler;
pub(crate) mod checkbox_handler;
pub(crate) mod expander_handler;
pub(crate) mod footer_handler;
pub(crate) mod progress_handler;
pub(crate) mod radiobutton_handler;

use crate::contents::HostRef;
use crate::error::{ControlError, Result as ControlResult};
use crate::types::{DialogCommand, TaskDialogFlags};

use std::any::Any;
use std::fmt;

mod sealed {
    pub trait Sealed {}
}

pub(crate) use sealed::Sealed;

/// Identifies the kind of a control without inspecting its state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    CheckBox,
    Expander,
    Footer,
    ProgressBar,
    Button,
    RadioButton,
}

/*
 * Extension points of a control kind. Every method except `kind` has a default, so
 * a kind only overrides what it actually customizes.
 *
 * `is_creatable` is evaluated at every bind and never memoized; it must be cheap and
 * free of side effects. `flags_core` and `apply_initialization_core` are only called
 * for controls that were created at the last bind.
 */
pub trait ControlCapabilities: Sealed + fmt::Debug {
    fn kind(&self) -> ControlKind;

    fn is_creatable(&self) -> bool {
        true
    }

    fn flags_core(&self) -> TaskDialogFlags {
        TaskDialogFlags::empty()
    }

    /// One-time setup that needs the native element to exist.
    fn apply_initialization_core(&mut self, _binding: &ControlBinding) {}

    /// Releases kind-specific state. Runs before the binding itself is cleared.
    fn unbind_core(&mut self) {}
}

/// Binding state carried by every control.
#[derive(Debug, Default)]
pub struct ControlBinding {
    bound_host: Option<HostRef>,
    is_created: bool,
}

impl ControlBinding {
    pub fn bound_host(&self) -> Option<&HostRef> {
        self.bound_host.as_ref()
    }

    pub fn is_bound(&self) -> bool {
        self.bound_host.is_some()
    }

    pub fn is_created(&self) -> bool {
        self.is_created
    }

    /*
     * Queues a command on the bound host. Returns false when the control is not
     * bound; the caller decides whether that matters.
     */
    pub(crate) fn post(&self, command: DialogCommand) -> bool {
        match &self.bound_host {
            Some(host) => {
                host.post(command);
                true
            }
            None => {
                log::trace!("ControlBinding: Not bound, dropping {command:?}");
                false
            }
        }
    }
}

/*
 * A task dialog control: user tag, binding state, and the kind-specific state.
 * Instances are only constructed through the kind-specific constructors in the
 * `*_handler` modules.
 */
pub struct Control<K: ControlCapabilities> {
    tag: Option<Box<dyn Any>>,
    pub(crate) binding: ControlBinding,
    pub(crate) kind: K,
}

impl<K: ControlCapabilities> fmt::Debug for Control<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("has_tag", &self.tag.is_some())
            .field("binding", &self.binding)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<K: ControlCapabilities + Default> Default for Control<K> {
    fn default() -> Self {
        Self::from_kind(K::default())
    }
}

impl<K: ControlCapabilities> Control<K> {
    pub(crate) fn from_kind(kind: K) -> Self {
        Self {
            tag: None,
            binding: ControlBinding::default(),
            kind,
        }
    }

    pub fn tag(&self) -> Option<&dyn Any> {
        self.tag.as_deref()
    }

    pub fn set_tag<T: Any>(&mut self, tag: T) {
        self.tag = Some(Box::new(tag));
    }

    pub fn take_tag(&mut self) -> Option<Box<dyn Any>> {
        self.tag.take()
    }

    pub fn control_kind(&self) -> ControlKind {
        self.kind.kind()
    }

    pub fn binding(&self) -> &ControlBinding {
        &self.binding
    }

    pub fn bound_host(&self) -> Option<&HostRef> {
        self.binding.bound_host()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Whether the control exists in the dialog, as decided at the last bind.
    pub fn is_created(&self) -> bool {
        self.binding.is_created()
    }

    /// Current creatability. May differ from `is_created` until the next bind.
    pub fn is_creatable(&self) -> bool {
        self.kind.is_creatable()
    }

    pub(crate) fn is_bound_to(&self, host: &HostRef) -> bool {
        self.binding
            .bound_host
            .as_ref()
            .is_some_and(|current| current.contents_id() == host.contents_id())
    }

    /*
     * Binds the control to `host` and returns the flags it contributes.
     *
     * Creatability is read now and stored; it stays fixed for the rest of this bind
     * cycle even if the inputs of `is_creatable` change. Binding again to the same
     * host re-takes the snapshot. Binding to a different host without unbinding
     * first is rejected, as is an absent or dropped host. Failed binds leave the
     * state untouched.
     */
    pub(crate) fn bind(&mut self, host: Option<HostRef>) -> ControlResult<TaskDialogFlags> {
        let kind = self.kind.kind();
        let host = match host {
            Some(host) if host.is_alive() => host,
            Some(host) => {
                return Err(ControlError::InvalidArgument(format!(
                    "Cannot bind {kind:?}: contents {:?} no longer exist",
                    host.contents_id()
                )));
            }
            None => {
                return Err(ControlError::InvalidArgument(format!(
                    "Cannot bind {kind:?}: no host contents given"
                )));
            }
        };

        if let Some(current) = &self.binding.bound_host {
            if current.contents_id() != host.contents_id() {
                log::warn!(
                    "ControlBinding: {kind:?} is bound to contents {:?}, refusing bind to {:?}",
                    current.contents_id(),
                    host.contents_id()
                );
                return Err(ControlError::InvalidOperation(format!(
                    "This {kind:?} is already bound to contents {:?}",
                    current.contents_id()
                )));
            }
        }

        let is_created = self.kind.is_creatable();
        log::debug!(
            "ControlBinding: Bound {kind:?} to contents {:?} (created: {is_created})",
            host.contents_id()
        );
        self.binding.bound_host = Some(host);
        self.binding.is_created = is_created;

        Ok(if is_created {
            self.kind.flags_core()
        } else {
            TaskDialogFlags::empty()
        })
    }

    /*
     * Detaches the control. Always succeeds and may be called repeatedly. The kind's
     * release hook only runs when leaving a bound state, before the binding is reset.
     */
    pub(crate) fn unbind(&mut self) {
        if self.binding.is_bound() {
            log::debug!("ControlBinding: Unbinding {:?}", self.kind.kind());
            self.kind.unbind_core();
        }
        self.binding.is_created = false;
        self.binding.bound_host = None;
    }

    /// Applies post-display initialization. Silent no-op if the control was not created.
    pub(crate) fn apply_initialization(&mut self) {
        if self.binding.is_created {
            self.kind.apply_initialization_core(&self.binding);
        } else {
            log::trace!(
                "ControlBinding: {:?} not created, skipping initialization",
                self.kind.kind()
            );
        }
    }

    /*
     * Fails if the control has a host, created or not. The host is asked first so
     * its own (stricter) error surfaces when the dialog is being displayed.
     */
    pub(crate) fn deny_if_bound(&self) -> ControlResult<()> {
        match &self.binding.bound_host {
            None => Ok(()),
            Some(host) => {
                host.deny_if_bound()?;
                Err(ControlError::InvalidOperation(format!(
                    "This {:?} is currently bound to contents {:?}",
                    self.kind.kind(),
                    host.contents_id()
                )))
            }
        }
    }

    pub(crate) fn deny_if_not_bound(&self) -> ControlResult<()> {
        if self.binding.bound_host.is_none() {
            return Err(ControlError::InvalidOperation(format!(
                "This {:?} is not currently bound to a task dialog",
                self.kind.kind()
            )));
        }
        Ok(())
    }

    /// Fails only when bound but not created; detached controls pass.
    pub(crate) fn deny_if_bound_and_not_created(&self) -> ControlResult<()> {
        if self.binding.bound_host.is_some() && !self.binding.is_created {
            return Err(ControlError::InvalidOperation(format!(
                "This {:?} has not been created",
                self.kind.kind()
            )));
        }
        Ok(())
    }
}
