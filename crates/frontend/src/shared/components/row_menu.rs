use crate::shared::icons::icon;
use crate::shared::list_view::controller::action_label;
use crate::shared::list_view::RowAction;
use leptos::prelude::*;
use thaw::*;

/// One entry of a row menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub action: RowAction,
    pub label: String,
    pub icon: &'static str,
    pub danger: bool,
}

impl MenuItem {
    pub fn new(action: RowAction, icon: &'static str) -> Self {
        Self {
            label: action_label(&action),
            action,
            icon,
            danger: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn danger(mut self) -> Self {
        self.danger = true;
        self
    }
}

/// Kebab button of a table row with its dropdown of actions.
///
/// Open state is owned by the list's selection; this component only reports
/// clicks.
#[component]
pub fn RowMenu(
    #[prop(into)] open: Signal<bool>,
    items: Vec<MenuItem>,
    on_open: Callback<()>,
    on_close: Callback<()>,
    on_select: Callback<RowAction>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let items = StoredValue::new(items);

    view! {
        <div class="row-menu">
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| {
                    if open.get_untracked() {
                        on_close.run(());
                    } else {
                        on_open.run(());
                    }
                }
                disabled=disabled
                attr:title="Actions"
            >
                {icon("more-vertical")}
            </Button>
            <Show when=move || open.get()>
                <div class="row-menu__backdrop" on:click=move |_| on_close.run(())></div>
                <ul class="row-menu__list">
                    {items.get_value().into_iter().map(|item| {
                        let action = item.action.clone();
                        view! {
                            <li
                                class="row-menu__item"
                                class:row-menu__item--danger=item.danger
                                on:click=move |_| on_select.run(action.clone())
                            >
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_labels() {
        let item = MenuItem::new(RowAction::ChangeStatus("Shipped".into()), "check");
        assert_eq!(item.label, "Change status to Shipped");
        assert!(!item.danger);

        let delete = MenuItem::new(RowAction::Delete, "trash").danger();
        assert_eq!(delete.label, "Delete");
        assert!(delete.danger);

        let ban = MenuItem::new(RowAction::ToggleStatus, "ban").with_label("Ban");
        assert_eq!(ban.label, "Ban");
    }
}
