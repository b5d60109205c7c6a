use leptos::prelude::*;
use thaw::*;

use super::Modal;

/// Yes/no dialog for destructive row actions.
///
/// While `busy` is set both buttons are disabled and closing is ignored, so a
/// submitted mutation cannot be abandoned halfway.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(into, optional)] busy: Signal<bool>,
) -> impl IntoView {
    let cancel = Callback::new(move |_: ()| {
        if !busy.get_untracked() {
            on_cancel.run(());
        }
    });

    let footer = move || {
        let confirm_label = confirm_label.clone();
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| cancel.run(())
                disabled=busy
            >
                "Cancel"
            </Button>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_confirm.run(())
                disabled=busy
            >
                {move || if busy.get() { "Working...".to_string() } else { confirm_label.clone() }}
            </Button>
        }
    };

    view! {
        <Modal title=title on_close=cancel footer=ChildrenFn::to_children(footer) class="modal--confirm">
            <p class="confirm__message">{move || message.get()}</p>
        </Modal>
    }
}
