use super::view_model::BookDetailsViewModel;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use leptos::prelude::*;
use thaw::*;
use web_sys::HtmlInputElement;

fn field_error(vm: BookDetailsViewModel, field: &'static str) -> impl IntoView {
    move || vm.field_error(field).map(|e| view! { <div class="form__error">{e}</div> })
}

#[component]
pub fn BookDetails(
    id: Option<i64>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BookDetailsViewModel::new(id);
    vm.load();

    let disabled = Signal::derive(move || vm.is_busy());

    let on_files = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        vm.pick_files(files);
    };

    view! {
        <PageFrame page_id="a002_book--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {if vm.is_edit_mode() { "Edit Product" } else { "New Product" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                {move || vm.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || vm.form.with(|f| f.server_error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="details-form">
                    <div class="form__group">
                        <Label>"Name"</Label>
                        <Input value=vm.name placeholder="Product name" disabled=disabled />
                        {field_error(vm, "name")}
                    </div>

                    <div class="form__group">
                        <Label>"Description"</Label>
                        <Textarea value=vm.description placeholder="Description" disabled=disabled />
                        {field_error(vm, "description")}
                    </div>

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Price (VND)"</Label>
                            <Input value=vm.unit_price input_type=InputType::Number disabled=disabled />
                            {field_error(vm, "unit_price")}
                        </div>
                        <div class="form__group">
                            <Label>"Stock"</Label>
                            <Input value=vm.units_in_stock input_type=InputType::Number disabled=disabled />
                            {field_error(vm, "units_in_stock")}
                        </div>
                        <div class="form__group">
                            <Label>"Discount (%)"</Label>
                            <Input value=vm.discount input_type=InputType::Number disabled=disabled />
                            {field_error(vm, "discount")}
                        </div>
                    </div>

                    <div class="form__group">
                        <Label>"Category"</Label>
                        <select
                            class="form__select"
                            prop:value=move || vm.category_id.get()
                            on:change=move |ev| vm.category_id.set(event_target_value(&ev))
                            prop:disabled=move || disabled.get()
                        >
                            <option value="">"Select a category"</option>
                            <For
                                each=move || vm.categories.get()
                                key=|c| c.id
                                children=move |category| {
                                    let value = category.id.to_string();
                                    let selected_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || vm.category_id.get() == selected_value
                                        >
                                            {category.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                        {field_error(vm, "category_id")}
                    </div>

                    <Show when=move || vm.is_edit_mode()>
                        <div class="form__group">
                            <Label>"Current images"</Label>
                            <div class="image-grid">
                                <For
                                    each=move || vm.images.get()
                                    key=|i| i.image_id
                                    children=move |image| {
                                        let image_id = image.image_id;
                                        view! {
                                            <div class="image-grid__item">
                                                <img src=image.url alt="" />
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| vm.delete_image(image_id)
                                                    disabled=Signal::derive(move || vm.deleting_image.get().is_some())
                                                    attr:title="Delete image"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </div>
                                        }
                                    }
                                />
                                <Show when=move || vm.images.with(Vec::is_empty)>
                                    <span class="form__hint">"No images yet"</span>
                                </Show>
                            </div>
                        </div>
                    </Show>

                    <div class="form__group">
                        <Label>{if vm.is_edit_mode() { "Add images" } else { "Images" }}</Label>
                        <input
                            type="file"
                            accept="image/*"
                            multiple=true
                            on:change=on_files
                            prop:disabled=move || disabled.get()
                        />
                        <ul class="form__file-list">
                            {move || vm.file_names().into_iter().map(|name| view! {
                                <li>{icon("image")}" "{name}</li>
                            }).collect_view()}
                        </ul>
                    </div>

                    {move || vm.upload_progress.get().map(|pct| view! {
                        <div class="upload-progress">
                            <div class="upload-progress__bar" style:width=format!("{}%", pct)></div>
                            <span class="upload-progress__label">{format!("Uploading {}%", pct)}</span>
                        </div>
                    })}
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
