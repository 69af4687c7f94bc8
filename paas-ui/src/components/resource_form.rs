use super::{DynamicForm, ModalFrame};
use crate::error::ErrorAlert;
use leptos::*;
use paas_common::{EditSession, FormValues, ResourceKind, SelectOption};
use std::rc::Rc;

/// Create/edit dialog around [`DynamicForm`] with the save error banner
#[component]
pub fn ResourceForm(
    kind: Rc<ResourceKind>,
    #[prop(into)] session: Signal<EditSession>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] submitting: Signal<bool>,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    on_submit: Callback<FormValues>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let creating = session.with_untracked(EditSession::is_create);
    let (title, submit_label) = if creating {
        (kind.create_title(), "Create".to_string())
    } else {
        (kind.edit_title(), "Save Changes".to_string())
    };

    view! {
        <ModalFrame title=title on_close=on_cancel>
            <div class="modal-body">
                {move || error.get().map(|message| view! { <ErrorAlert message=message/> })}
                <DynamicForm
                    schema=kind.form.clone()
                    session=session
                    options=options
                    on_submit=on_submit
                    on_cancel=on_cancel
                    submitting=submitting
                    submit_label=submit_label
                />
            </div>
        </ModalFrame>
    }
}
