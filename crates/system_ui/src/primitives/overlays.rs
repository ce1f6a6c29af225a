use super::*;

#[component]
/// Shared dialog primitive.
///
/// The dialog stays mounted and toggles `hidden`, so DOM ids inside it remain addressable while
/// closed. Escape and backdrop clicks call `on_dismiss`.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let title_id = format!("{id}-title");
    let labelled_by = title_id.clone();
    let dismiss = move || {
        if let Some(on_dismiss) = on_dismiss.as_ref() {
            on_dismiss.call(());
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-modal", layout_class)
            id=id
            role="dialog"
            aria-modal="true"
            aria-labelledby=labelled_by
            hidden=move || !open.get()
            data-ui-primitive="true"
            data-ui-kind="modal"
            data-ui-state=move || if open.get() { "open" } else { "closed" }
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.prevent_default();
                    dismiss();
                }
            }
        >
            <div
                class="ui-modal-backdrop"
                data-ui-slot="backdrop"
                on:click=move |_: MouseEvent| dismiss()
            ></div>
            <div class="ui-modal-dialog" data-ui-slot="dialog">
                <h2 class="ui-modal-title" id=title_id data-ui-slot="title">
                    {title}
                </h2>
                {children()}
            </div>
        </div>
    }
}

#[component]
/// Fixed-position live region hosting transient notifications.
pub fn ToastRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-region", layout_class)
            role="status"
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// Dismissible notification.
pub fn Toast(
    #[prop(default = TextTone::Info)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast", layout_class)
            role="alert"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="message">{children()}</span>
            <button
                type="button"
                class="ui-toast-close"
                aria-label="Dismiss notification"
                data-ui-slot="dismiss"
                on:click=move |ev| {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(ev);
                    }
                }
            >
                "×"
            </button>
        </div>
    }
}
