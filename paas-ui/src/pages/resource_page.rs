//! One page per resource kind: list, create/edit dialog and detail view

use crate::components::{ResourceDetail, ResourceForm, ResourceList};
use crate::error::{ErrorAlert, ErrorSeverity, LoadingError};
use crate::state::SignalState;
use leptos::*;
use paas_common::{
    FormValues, ListState, Resource, ResourceController, ResourceKind, ResourceService,
};
use std::future::Future;
use std::rc::Rc;
use tracing::debug;

type PageController = ResourceController<SignalState>;

/// Run an async controller operation on the page's event loop. Does nothing
/// once the page is gone.
fn spawn_with<F, Fut>(controller: StoredValue<PageController>, task: F)
where
    F: FnOnce(PageController) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    if let Some(controller) = controller.try_get_value() {
        spawn_local(task(controller));
    }
}

#[component]
pub fn ResourcePage(
    kind: Rc<ResourceKind>,
    service: Rc<dyn ResourceService>,
    /// Template service for kinds whose form picks a template
    #[prop(optional)]
    templates: Option<Rc<dyn ResourceService>>,
) -> impl IntoView {
    let state = SignalState::new();
    let controller = ResourceController::new(kind.clone(), service, state);
    let controller = match templates {
        Some(templates) => controller.with_templates(templates),
        None => controller,
    };
    let controller = store_value(controller);

    create_effect(move |_| {
        spawn_with(controller, |controller| async move { controller.activate().await });
    });

    let key = kind.key;
    on_cleanup(move || debug!(kind = key, "Resource page closed"));

    let signal = state.signal();
    let list = create_memo(move |_| signal.with(|s| s.list().clone()));
    let page_error = create_memo(move |_| signal.with(|s| s.page_error().map(str::to_string)));
    let output = create_memo(move |_| signal.with(|s| s.output().cloned()));
    let viewing = create_memo(move |_| signal.with(|s| s.viewing().cloned()));
    let editor = create_memo(move |_| signal.with(|s| s.editor().cloned()));
    let template_options = create_memo(move |_| signal.with(|s| s.template_options().to_vec()));

    // The dialog stays mounted across submits; only a new session id resets it.
    let session = create_memo(move |_| {
        editor.with(|e| e.as_ref().map(|e| e.session.clone()).unwrap_or_default())
    });
    let editor_error =
        Signal::derive(move || editor.with(|e| e.as_ref().and_then(|e| e.error.clone())));
    let submitting =
        Signal::derive(move || editor.with(|e| e.as_ref().map_or(false, |e| e.submitting)));

    let on_view = Callback::new(move |resource: Resource| {
        controller.with_value(|c| c.view(resource));
    });
    let on_edit = Callback::new(move |resource: Resource| {
        controller.with_value(|c| c.edit(resource));
    });
    let on_delete = Callback::new(move |resource: Resource| {
        spawn_with(controller, move |c| async move { c.delete(resource).await });
    });
    let on_submit = Callback::new(move |values: FormValues| {
        spawn_with(controller, move |c| async move { c.submit(values).await });
    });
    let on_close = Callback::new(move |_| controller.with_value(|c| c.close()));
    let on_retry = Callback::new(move |_| {
        spawn_with(controller, |c| async move { c.load().await });
    });
    let on_dismiss_error = Callback::new(move |_| controller.with_value(|c| c.dismiss_error()));
    let on_dismiss_output = move |_| controller.with_value(|c| c.dismiss_output());

    let list_kind = kind.clone();
    let form_kind = kind.clone();
    let detail_kind = kind.clone();

    view! {
        <div class="resource-page">
            <div class="page-header">
                <h1>{kind.title}</h1>
                <button
                    class="btn btn-primary"
                    on:click=move |_| controller.with_value(|c| c.create())
                >
                    {kind.create_label()}
                </button>
            </div>

            {move || page_error.get().map(|message| view! {
                <ErrorAlert
                    message=message
                    severity=ErrorSeverity::Warning
                    on_dismiss=on_dismiss_error
                />
            })}

            {move || output.get().map(|output| view! {
                <div class="provisioning-output">
                    <div class="provisioning-output-header">
                        <h3>{format!("Provisioning output for {}", output.name)}</h3>
                        <button
                            class="btn btn-ghost btn-sm"
                            aria-label="Dismiss"
                            on:click=on_dismiss_output
                        >"✕"</button>
                    </div>
                    <pre>{output.text}</pre>
                </div>
            })}

            {move || match list.get() {
                ListState::Idle | ListState::Loading => view! {
                    <p class="loading">{format!("Loading {}...", list_kind.plural)}</p>
                }.into_view(),
                ListState::Failed(message) => view! {
                    <LoadingError message=message on_retry=on_retry/>
                }.into_view(),
                ListState::Loaded(resources) => view! {
                    <ResourceList
                        resources=resources
                        columns=list_kind.columns.clone()
                        on_view=on_view
                        on_edit=on_edit
                        on_delete=on_delete
                        empty_message=list_kind.empty_message
                    />
                }.into_view(),
            }}

            <Show when=move || editor.with(Option::is_some)>
                <ResourceForm
                    kind=form_kind.clone()
                    session=session
                    error=editor_error
                    submitting=submitting
                    options=template_options
                    on_submit=on_submit
                    on_cancel=on_close
                />
            </Show>

            {move || viewing.get().map(|resource| view! {
                <ResourceDetail
                    resource=resource
                    fields=detail_kind.detail.clone()
                    title=detail_kind.view_title()
                    on_close=on_close
                />
            })}
        </div>
    }
}

