/// Action offered by a row menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
    /// Ban/unban style flip of the record's status flag
    ToggleStatus,
    ViewDetail,
    /// Move the record to the named lifecycle status
    ChangeStatus(String),
}

impl RowAction {
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, RowAction::Delete | RowAction::ToggleStatus)
    }
}

/// What the list should do after a selection transition.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionStep<T> {
    /// Open the edit form for the record; the selection is already idle.
    Navigate(T),
    /// Show the confirmation dialog.
    AwaitConfirm,
    /// Show the record's detail dialog.
    ShowDetail,
    /// Start the backend call; the selection stays `Submitting` until finished.
    Submit(T, RowAction),
    /// The transition does not apply in the current state.
    Ignored,
}

/// The single record currently open for a row action.
///
/// `Idle → MenuOpen → (Confirming →) Submitting → Idle`; closing the menu or
/// cancelling a dialog returns to `Idle`. While `Submitting`, nothing else can
/// be opened, which keeps two mutations from running for one selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection<T> {
    #[default]
    Idle,
    MenuOpen(T),
    Confirming { record: T, action: RowAction },
    Submitting { record: T, action: RowAction },
    Viewing(T),
}

impl<T: Clone> Selection<T> {
    pub fn record(&self) -> Option<&T> {
        match self {
            Selection::Idle => None,
            Selection::MenuOpen(record)
            | Selection::Viewing(record)
            | Selection::Confirming { record, .. }
            | Selection::Submitting { record, .. } => Some(record),
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Selection::Submitting { .. })
    }

    pub fn pending_action(&self) -> Option<&RowAction> {
        match self {
            Selection::Confirming { action, .. } | Selection::Submitting { action, .. } => {
                Some(action)
            }
            _ => None,
        }
    }

    /// Opens the row menu for `record`, replacing any previous selection.
    /// Refused while a mutation is in flight.
    pub fn open_menu(&mut self, record: T) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Selection::MenuOpen(record);
        true
    }

    /// Picks an action from the open menu.
    pub fn choose(&mut self, action: RowAction) -> SelectionStep<T> {
        let record = match self {
            Selection::MenuOpen(record) => record.clone(),
            _ => return SelectionStep::Ignored,
        };
        match action {
            RowAction::Edit => {
                *self = Selection::Idle;
                SelectionStep::Navigate(record)
            }
            RowAction::ViewDetail => {
                *self = Selection::Viewing(record);
                SelectionStep::ShowDetail
            }
            action if action.needs_confirmation() => {
                *self = Selection::Confirming { record, action };
                SelectionStep::AwaitConfirm
            }
            action => {
                *self = Selection::Submitting {
                    record: record.clone(),
                    action: action.clone(),
                };
                SelectionStep::Submit(record, action)
            }
        }
    }

    /// Confirms the pending dialog and moves to `Submitting`.
    pub fn confirm(&mut self) -> SelectionStep<T> {
        match std::mem::take(self) {
            Selection::Confirming { record, action } => {
                *self = Selection::Submitting {
                    record: record.clone(),
                    action: action.clone(),
                };
                SelectionStep::Submit(record, action)
            }
            other => {
                *self = other;
                SelectionStep::Ignored
            }
        }
    }

    /// Closes the menu or dialog. Ignored while submitting.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = Selection::Idle;
        true
    }

    /// Ends the running mutation, successful or not.
    pub fn finish(&mut self) {
        if self.is_submitting() {
            *self = Selection::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_requires_confirmation() {
        let mut sel: Selection<u32> = Selection::Idle;
        assert!(sel.open_menu(1));
        assert_eq!(sel.choose(RowAction::Delete), SelectionStep::AwaitConfirm);
        assert_eq!(sel.pending_action(), Some(&RowAction::Delete));
        assert_eq!(sel.confirm(), SelectionStep::Submit(1, RowAction::Delete));
        assert!(sel.is_submitting());
        sel.finish();
        assert_eq!(sel, Selection::Idle);
    }

    #[test]
    fn test_status_change_submits_directly() {
        let mut sel: Selection<u32> = Selection::Idle;
        sel.open_menu(4);
        let step = sel.choose(RowAction::ChangeStatus("Shipped".into()));
        assert_eq!(step, SelectionStep::Submit(4, RowAction::ChangeStatus("Shipped".into())));
    }

    #[test]
    fn test_new_menu_replaces_previous() {
        let mut sel: Selection<u32> = Selection::Idle;
        sel.open_menu(1);
        sel.open_menu(2);
        assert_eq!(sel.record(), Some(&2));
    }

    #[test]
    fn test_no_second_mutation_while_submitting() {
        let mut sel: Selection<u32> = Selection::Idle;
        sel.open_menu(1);
        sel.choose(RowAction::ToggleStatus);
        sel.confirm();
        assert!(!sel.open_menu(2));
        assert!(!sel.close());
        assert_eq!(sel.confirm(), SelectionStep::Ignored);
        assert_eq!(sel.record(), Some(&1));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut sel: Selection<u32> = Selection::Idle;
        sel.open_menu(1);
        sel.choose(RowAction::Delete);
        assert!(sel.close());
        assert_eq!(sel, Selection::Idle);
        assert_eq!(sel.confirm(), SelectionStep::Ignored);
    }

    #[test]
    fn test_edit_clears_selection() {
        let mut sel: Selection<u32> = Selection::Idle;
        sel.open_menu(7);
        assert_eq!(sel.choose(RowAction::Edit), SelectionStep::Navigate(7));
        assert_eq!(sel, Selection::Idle);
    }

    #[test]
    fn test_choose_without_menu_ignored() {
        let mut sel: Selection<u32> = Selection::Idle;
        assert_eq!(sel.choose(RowAction::Delete), SelectionStep::Ignored);
    }

    #[test]
    fn test_view_detail() {
        let mut sel: Selection<u32> = Selection::Idle;
        sel.open_menu(3);
        assert_eq!(sel.choose(RowAction::ViewDetail), SelectionStep::ShowDetail);
        assert_eq!(sel, Selection::Viewing(3));
        sel.close();
        assert_eq!(sel, Selection::Idle);
    }
}
