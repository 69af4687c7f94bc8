//! Form engine: renders any [`FormSchema`] and validates it on submit

use crate::error::FieldError;
use leptos::*;
use paas_common::{
    EditSession, FieldDescriptor, FieldKind, FormSchema, FormState, FormValues, SelectOption,
};
use tracing::debug;

/// Schema-driven form.
///
/// Values are seeded from `session` and reset whenever a session with a
/// different id arrives; the form never resets itself after submitting.
/// `on_submit` only fires after every required field has a value.
#[component]
pub fn DynamicForm(
    schema: FormSchema,
    #[prop(into)] session: Signal<EditSession>,
    /// Choices for fields whose options come from the owner
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    on_submit: Callback<FormValues>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
    #[prop(into, optional)] submitting: Signal<bool>,
    #[prop(into)] submit_label: String,
) -> impl IntoView {
    let form = create_rw_signal(session.with_untracked(FormState::new));

    create_effect(move |_| {
        session.with(|session| {
            let stale = form.with_untracked(|form| form.session_id() != session.id());
            if stale {
                debug!(session = session.id(), "Resetting form for new edit session");
                form.set(FormState::new(session));
            }
        });
    });

    let fields = schema
        .fields()
        .iter()
        .cloned()
        .map(|field| view! { <FormField field=field form=form options=options/> })
        .collect_view();

    let schema = store_value(schema);
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let values = schema
            .with_value(|schema| form.try_update(|form| form.submit(schema)))
            .flatten();
        if let Some(values) = values {
            on_submit.call(values);
        }
    };

    view! {
        <form class="dynamic-form" novalidate on:submit=submit>
            {fields}
            <div class="form-actions">
                {on_cancel.map(|on_cancel| view! {
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| on_cancel.call(())
                    >"Cancel"</button>
                })}
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Saving...".to_string() } else { submit_label.clone() }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn FormField(
    field: FieldDescriptor,
    form: RwSignal<FormState>,
    options: Signal<Vec<SelectOption>>,
) -> impl IntoView {
    let id = format!("field-{}", field.name);
    let name = field.name.clone();

    let current = {
        let name = name.clone();
        move || form.with(|form| form.value(&name).to_string())
    };
    let error = {
        let name = name.clone();
        move || form.with(|form| form.error(&name).map(str::to_string))
    };
    let on_input = {
        let name = name.clone();
        move |ev: ev::Event| form.update(|form| form.set(&name, event_target_value(&ev)))
    };

    let input = match field.kind.clone() {
        FieldKind::Text => view! {
            <input
                type="text"
                id=id.clone()
                name=name
                placeholder=field.placeholder.clone()
                prop:value=current
                on:input=on_input
            />
        }
        .into_view(),
        FieldKind::Number { min, max } => view! {
            <input
                type="number"
                step="1"
                id=id.clone()
                name=name
                min=min.map(|min| min.to_string())
                max=max.map(|max| max.to_string())
                placeholder=field.placeholder.clone()
                prop:value=current
                on:input=on_input
            />
        }
        .into_view(),
        FieldKind::TextArea { rows } => view! {
            <textarea
                id=id.clone()
                name=name
                rows=rows
                placeholder=field.placeholder.clone()
                prop:value=current
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        FieldKind::Select(_) => {
            let unselected = field.unselected_label();
            let select_field = field.clone();
            view! {
                <select id=id.clone() name=name on:change=on_input>
                    {move || {
                        let selected = current();
                        let choices = options.with(|external| select_field.options(external).to_vec());
                        let blank = selected.is_empty();
                        view! {
                            <option value="" prop:selected=blank>{unselected.clone()}</option>
                            {choices.into_iter().map(|choice| {
                                let is_selected = choice.value == selected;
                                view! {
                                    <option value=choice.value prop:selected=is_selected>
                                        {choice.label}
                                    </option>
                                }
                            }).collect_view()}
                        }
                    }}
                </select>
            }
            .into_view()
        }
    };

    view! {
        <div class="form-group">
            <label for=id>
                {field.label.clone()}
                {field.required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            {input}
            {move || error().map(|message| view! { <FieldError message=message/> })}
        </div>
    }
}
