use leptos::*;

/// Overlay with a titled dialog. Closing is left to the owner.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: String,
    on_close: Callback<()>,
    #[prop(default = "modal-content")] class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class=class role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2>{title}</h2>
                    <button
                        class="modal-close"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                    >"x"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}
