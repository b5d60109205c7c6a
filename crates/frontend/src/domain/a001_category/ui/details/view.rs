use super::view_model::CategoryDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(id);
    vm.load_if_needed();

    let disabled = Signal::derive(move || vm.loading.get() || vm.form.with(|f| f.submitting));

    view! {
        <PageFrame page_id="a001_category--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {if vm.is_edit_mode() { "Edit Category" } else { "New Category" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.form.with(|f| f.server_error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form__group">
                        <Label>"Name"</Label>
                        <Input value=vm.name placeholder="Category name" disabled=disabled />
                        {move || vm.field_error("name").map(|e| view! { <div class="form__error">{e}</div> })}
                    </div>

                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Textarea value=vm.description placeholder="Optional description" disabled=disabled />
                    </div>
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
