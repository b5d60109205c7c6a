use contracts::domain::a004_user::aggregate::{Role, User, UserFilter, UserStatusFilter};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_user::api::{self, UserResource};
use crate::layout::global_context::use_global_context;
use crate::layout::tabs::tab_labels::A004_USER;
use crate::layout::tabs::{edit_tab_key, new_tab_key, tab_label_for_key};
use crate::shared::components::{MenuItem, PaginationControls, RowMenu};
use crate::shared::icons::icon;
use crate::shared::list_view::{use_list_controller, RowAction, SelectionStep};
use crate::shared::modal::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Row menu of a user; ban/unban only for regular accounts.
pub fn user_menu(user: &User) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::new(RowAction::Edit, "edit")];
    if user.can_toggle_ban() {
        items.push(if user.is_banned() {
            MenuItem::new(RowAction::ToggleStatus, "unlock").with_label("Unban")
        } else {
            MenuItem::new(RowAction::ToggleStatus, "ban").with_label("Ban")
        });
    }
    items.push(MenuItem::new(RowAction::Delete, "trash").danger());
    items
}

/// (title, message, button) of the confirmation for `action` on `user`.
pub fn confirmation_text(user: &User, action: &RowAction) -> (String, String, String) {
    match action {
        RowAction::ToggleStatus if user.is_banned() => (
            "Unban user".to_string(),
            format!("Unban \"{}\"? The account will be able to sign in again.", user.user_name),
            "Unban".to_string(),
        ),
        RowAction::ToggleStatus => (
            "Ban user".to_string(),
            format!("Ban \"{}\"? The account will no longer be able to sign in.", user.user_name),
            "Ban".to_string(),
        ),
        _ => (
            "Delete user".to_string(),
            format!("Delete user \"{}\"? This cannot be undone.", user.user_name),
            "Delete".to_string(),
        ),
    }
}

pub fn status_badge_class(user: &User) -> &'static str {
    if user.is_banned() {
        "badge badge--error"
    } else {
        "badge badge--success"
    }
}

#[component]
pub fn UserList() -> impl IntoView {
    let ctl = use_list_controller::<UserResource>();
    let tabs = use_global_context();
    ctl.load_on(move || tabs.list_version(A004_USER));

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(UserStatusFilter::All);

    let apply_filter = move || {
        ctl.apply_filter(UserFilter {
            search: search.get_untracked().trim().to_string(),
            status: status.get_untracked(),
        });
    };
    let reset_filter = move || {
        search.set(String::new());
        status.set(UserStatusFilter::All);
        ctl.apply_filter(UserFilter::default());
    };

    let open_form = move |key: String| tabs.open_tab(&key, &tab_label_for_key(&key));

    let on_action = move |action: RowAction| {
        if let SelectionStep::Navigate(user) = ctl.choose(action) {
            open_form(edit_tab_key(A004_USER, user.user_id));
        }
    };

    let toggle_ban = move |user: User| {
        let id = user.user_id;
        let verb = if user.is_banned() { "unbanned" } else { "banned" };
        ctl.run_row_mutation(
            RowAction::ToggleStatus,
            format!("User \"{}\" {}", user.user_name, verb),
            move |client| async move { api::toggle_status(&client, id).await },
            move |state, _| {
                state.patch(&id, |u| u.user_status = !u.user_status);
            },
        );
    };

    let on_confirm = move || match ctl.pending_confirmation() {
        Some((_, RowAction::Delete)) => ctl.delete_selected(),
        Some((_, RowAction::ToggleStatus)) => {
            if let SelectionStep::Submit(user, _) = ctl.confirm() {
                toggle_ban(user);
            }
        }
        _ => {}
    };

    let loading = Signal::derive(move || ctl.state.with(|s| s.loading));
    let busy = Signal::derive(move || ctl.is_submitting());

    view! {
        <PageFrame page_id="a004_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_form(new_tab_key(A004_USER))
                    >
                        {icon("plus")}
                        " Add User"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctl.reload()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || ctl.state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                current_page=Signal::derive(move || ctl.state.with(|s| s.page_index))
                                total_pages=Signal::derive(move || ctl.state.with(|s| s.total_pages))
                                page_size=Signal::derive(move || ctl.query.with(|q| q.page_size))
                                on_page_change=Callback::new(move |page| ctl.go_to_page(page))
                                on_page_size_change=Callback::new(move |size| ctl.set_page_size(size))
                                disabled=loading
                            />
                        </div>
                    </div>

                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div style="flex: 1; max-width: 320px;" on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    apply_filter();
                                }
                            }>
                                <Input value=search placeholder="Username or email..." />
                            </div>
                            <div class="form__group form__group--inline">
                                <Label>"Status"</Label>
                                <select
                                    class="form__select"
                                    prop:value=move || status.get().key()
                                    on:change=move |ev| {
                                        status.set(UserStatusFilter::from_key(&event_target_value(&ev)));
                                        apply_filter();
                                    }
                                >
                                    {UserStatusFilter::ALL.into_iter().map(|option| view! {
                                        <option value=option.key()>{option.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_filter()
                                disabled=loading
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_filter()
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=160.0>"Username"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || ctl.state.with(|s| s.items.clone())
                                key=|u: &User| (u.user_id, u.user_status)
                                children=move |user| {
                                    let id = user.user_id;
                                    let menu = user_menu(&user);
                                    let role_badge = match user.role() {
                                        Role::Admin => view! { <span class="badge badge--warning">"Admin"</span> }.into_any(),
                                        Role::User => view! { <span class="badge badge--neutral">"User"</span> }.into_any(),
                                    };
                                    let status_class = status_badge_class(&user);
                                    let status_label = user.status_label();
                                    let name = user.user_name.clone();
                                    let email = user.email.clone();
                                    let for_menu = user;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {role_badge}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status_label}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowMenu
                                                    open=Signal::derive(move || ctl.menu_open_for(&id))
                                                    items=menu
                                                    on_open=Callback::new(move |_| {
                                                        ctl.open_menu(for_menu.clone());
                                                    })
                                                    on_close=Callback::new(move |_| ctl.close())
                                                    on_select=Callback::new(on_action)
                                                    disabled=busy
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || ctl.state.with(|s| s.is_loaded && s.items.is_empty())>
                        <div class="table__empty">"No users found"</div>
                    </Show>
                </div>

                {move || ctl.pending_confirmation().map(|(user, action)| {
                    let (title, message, confirm_label) = confirmation_text(&user, &action);
                    view! {
                        <ConfirmDialog
                            title=title
                            message=message
                            confirm_label=confirm_label
                            on_confirm=Callback::new(move |_| on_confirm())
                            on_cancel=Callback::new(move |_| ctl.close())
                            busy=busy
                        />
                    }
                })}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_user::aggregate::{UserId, ADMIN_ROLE_ID, USER_ROLE_ID};

    fn user(role_id: i64, active: bool) -> User {
        User {
            user_id: UserId(4),
            user_name: "reader".into(),
            email: "reader@example.com".into(),
            role_id,
            user_status: active,
        }
    }

    #[test]
    fn test_admin_cannot_be_banned() {
        let items = user_menu(&user(ADMIN_ROLE_ID, true));
        assert!(!items.iter().any(|i| i.action == RowAction::ToggleStatus));
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_ban_label_follows_status() {
        let active = user_menu(&user(USER_ROLE_ID, true));
        assert!(active.iter().any(|i| i.label == "Ban"));
        let banned = user_menu(&user(USER_ROLE_ID, false));
        assert!(banned.iter().any(|i| i.label == "Unban"));
    }

    #[test]
    fn test_status_badge_follows_ban() {
        assert_eq!(status_badge_class(&user(USER_ROLE_ID, true)), "badge badge--success");
        assert_eq!(status_badge_class(&user(USER_ROLE_ID, false)), "badge badge--error");
    }

    #[test]
    fn test_confirmation_text() {
        let (title, _, button) = confirmation_text(&user(USER_ROLE_ID, false), &RowAction::ToggleStatus);
        assert_eq!(title, "Unban user");
        assert_eq!(button, "Unban");
        let (_, message, _) = confirmation_text(&user(USER_ROLE_ID, true), &RowAction::Delete);
        assert!(message.contains("\"reader\""));
    }
}
