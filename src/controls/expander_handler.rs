/*
 * The expander: expanded information text plus the button that shows or hides it.
 * Button texts, the initial expanded state, and the footer placement are read at
 * bind time; only the information text itself can change on the running dialog.
 */

use crate::controls::{Control, ControlCapabilities, ControlKind, Sealed};
use crate::error::Result as ControlResult;
use crate::types::{DialogCommand, DialogElement, TaskDialogFlags};

#[derive(Debug, Clone, Default)]
pub struct Expander {
    text: String,
    expanded_button_text: String,
    collapsed_button_text: String,
    expanded: bool,
    expand_footer_area: bool,
}

impl Sealed for Expander {}

impl ControlCapabilities for Expander {
    fn kind(&self) -> ControlKind {
        ControlKind::Expander
    }

    fn is_creatable(&self) -> bool {
        !self.text.is_empty()
    }

    fn flags_core(&self) -> TaskDialogFlags {
        let mut flags = TaskDialogFlags::empty();
        flags.set(TaskDialogFlags::EXPANDED_BY_DEFAULT, self.expanded);
        flags.set(TaskDialogFlags::EXPAND_FOOTER_AREA, self.expand_footer_area);
        flags
    }
}

pub type TaskDialogExpander = Control<Expander>;

impl Control<Expander> {
    pub fn new(text: impl Into<String>) -> Self {
        Control::from_kind(Expander {
            text: text.into(),
            ..Default::default()
        })
    }

    pub fn text(&self) -> &str {
        &self.kind.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> ControlResult<()> {
        self.deny_if_bound_and_not_created()?;
        self.kind.text = text.into();
        self.binding.post(DialogCommand::UpdateElementText {
            element: DialogElement::ExpandedInformation,
            text: self.kind.text.clone(),
        });
        Ok(())
    }

    pub fn expanded_button_text(&self) -> &str {
        &self.kind.expanded_button_text
    }

    pub fn set_expanded_button_text(&mut self, text: impl Into<String>) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.kind.expanded_button_text = text.into();
        Ok(())
    }

    pub fn collapsed_button_text(&self) -> &str {
        &self.kind.collapsed_button_text
    }

    pub fn set_collapsed_button_text(&mut self, text: impl Into<String>) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.kind.collapsed_button_text = text.into();
        Ok(())
    }

    pub fn expanded(&self) -> bool {
        self.kind.expanded
    }

    pub fn set_expanded(&mut self, expanded: bool) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.kind.expanded = expanded;
        Ok(())
    }

    pub fn expand_footer_area(&self) -> bool {
        self.kind.expand_footer_area
    }

    pub fn set_expand_footer_area(&mut self, expand_footer_area: bool) -> ControlResult<()> {
        self.deny_if_bound()?;
        self.kind.expand_footer_area = expand_footer_area;
        Ok(())
    }

    pub(crate) fn handle_expando_button_clicked(&mut self, expanded: bool) {
        log::debug!("Expander: Expando button clicked, expanded: {expanded}");
        self.kind.expanded = expanded;
    }
}
