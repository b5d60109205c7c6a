use super::view_model::UserDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_user::aggregate::{Role, PASSWORD_MIN_LEN};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn UserDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = UserDetailsViewModel::new(id);
    vm.load_if_needed();

    let disabled = Signal::derive(move || vm.loading.get() || vm.form.with(|f| f.submitting));
    let password_hint = if vm.is_edit_mode() {
        "Leave blank to keep the current password".to_string()
    } else {
        format!("At least {} characters", PASSWORD_MIN_LEN)
    };

    view! {
        <PageFrame page_id="a004_user--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {if vm.is_edit_mode() { "Edit User" } else { "New User" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.form.with(|f| f.server_error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form__group">
                        <Label>"Username"</Label>
                        <Input value=vm.username placeholder="Username" disabled=disabled />
                        {move || vm.field_error("username").map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=vm.email placeholder="name@example.com" disabled=disabled />
                        {move || vm.field_error("email").map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Role"</Label>
                        <select
                            class="form__select"
                            prop:value=move || vm.role.get()
                            on:change=move |ev| vm.role.set(event_target_value(&ev))
                            disabled=move || disabled.get()
                        >
                            {[Role::Admin, Role::User].into_iter().map(|role| view! {
                                <option value=role.label()>{role.label()}</option>
                            }).collect_view()}
                        </select>
                        {move || vm.field_error("role").map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Password"</Label>
                        <Input
                            value=vm.password
                            input_type=InputType::Password
                            placeholder=password_hint
                            disabled=disabled
                        />
                        {move || vm.field_error("password").map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>

                    <Show when=move || vm.can_ban()>
                        <div class="form__group">
                            <Checkbox checked=vm.banned label="Banned" />
                        </div>
                    </Show>
                </div>

                <div class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved)
                        disabled=disabled
                    >
                        {icon("save")}
                        {move || {
                            if vm.form.with(|f| f.submitting) {
                                " Saving..."
                            } else if vm.is_edit_mode() {
                                " Save"
                            } else {
                                " Create"
                            }
                        }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                        " Cancel"
                    </Button>
                </div>
            </div>
        </PageFrame>
    }
}
