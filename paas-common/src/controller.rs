//! Resource controller
//!
//! One controller per resource kind owns the collection, its loading state,
//! the open modal and the dependent template choices. [`ControllerState`] is
//! a plain state machine; [`ResourceController`] drives it from remote calls.
//!
//! Every async operation carries a ticket. List and template fetches use
//! generation counters, so a newer fetch supersedes an older one no matter
//! which response arrives first. Submissions are tied to the edit session
//! they were started from. State is written through a [`ControllerCell`],
//! which stops accepting writes once the owning view is gone.

use crate::form::{EditSession, FormValues};
use crate::kinds::ResourceKind;
use crate::normalize::normalize_submission;
use crate::resource::{Resource, NAME};
use crate::schema::{FormSchema, SelectOption};
use crate::service::{ListFilter, ResourceService};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

pub type Ticket = u64;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Resource>),
    Failed(String),
}

/// The open create/edit form
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    pub session: EditSession,
    /// Mutation failure shown inside the modal
    pub error: Option<String>,
    pub submitting: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Modal {
    #[default]
    Closed,
    Viewing(Resource),
    Editing(Editor),
}

/// Rendered provisioning output returned by the last create/update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningOutput {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerState {
    list: ListState,
    modal: Modal,
    template_options: Vec<SelectOption>,
    page_error: Option<String>,
    output: Option<ProvisioningOutput>,
    list_generation: Ticket,
    options_generation: Ticket,
    sessions: u64,
}

impl ControllerState {
    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn template_options(&self) -> &[SelectOption] {
        &self.template_options
    }

    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    pub fn output(&self) -> Option<&ProvisioningOutput> {
        self.output.as_ref()
    }

    pub fn viewing(&self) -> Option<&Resource> {
        match &self.modal {
            Modal::Viewing(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn editor(&self) -> Option<&Editor> {
        match &self.modal {
            Modal::Editing(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.editor().map(|e| &e.session)
    }

    /// Enter `Loading`, superseding any fetch still in flight
    pub fn begin_load(&mut self) -> Ticket {
        self.list_generation += 1;
        self.list = ListState::Loading;
        self.list_generation
    }

    /// Apply a list response. Responses for superseded tickets are dropped.
    pub fn finish_load(&mut self, ticket: Ticket, result: Result<Vec<Resource>, String>) -> bool {
        if ticket != self.list_generation {
            return false;
        }
        self.list = match result {
            Ok(items) => ListState::Loaded(items),
            Err(message) => ListState::Failed(message),
        };
        true
    }

    pub fn begin_options_load(&mut self) -> Ticket {
        self.options_generation += 1;
        self.options_generation
    }

    pub fn finish_options_load(&mut self, ticket: Ticket, options: Vec<SelectOption>) -> bool {
        if ticket != self.options_generation {
            return false;
        }
        self.template_options = options;
        true
    }

    pub fn open_view(&mut self, resource: Resource) {
        self.modal = Modal::Viewing(resource);
    }

    pub fn open_create(&mut self) {
        let session = EditSession::create(self.next_session());
        self.open_editor(session);
    }

    pub fn open_edit(&mut self, schema: &FormSchema, target: Resource) {
        let session = EditSession::edit(self.next_session(), schema, target);
        self.open_editor(session);
    }

    fn open_editor(&mut self, session: EditSession) {
        self.modal = Modal::Editing(Editor {
            session,
            error: None,
            submitting: false,
        });
    }

    fn next_session(&mut self) -> u64 {
        self.sessions += 1;
        self.sessions
    }

    pub fn close(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Mark the open form as submitting and return its session
    pub fn begin_submit(&mut self) -> Option<EditSession> {
        match &mut self.modal {
            Modal::Editing(editor) => {
                editor.submitting = true;
                editor.error = None;
                Some(editor.session.clone())
            }
            _ => None,
        }
    }

    /// Apply the outcome of a submission started from session `session_id`.
    ///
    /// Success closes the form, failure keeps it open with the error
    /// attached. Either only touches the modal if that session is still the
    /// open one; returns whether it was.
    pub fn finish_submit(&mut self, session_id: u64, result: Result<Resource, String>) -> bool {
        if let Ok(entity) = &result {
            if let Some(text) = entity.rendered_template() {
                self.output = Some(ProvisioningOutput {
                    name: entity.display_name(),
                    text: text.to_string(),
                });
            }
        }

        match &self.modal {
            Modal::Editing(editor) if editor.session.id() == session_id => {}
            _ => return false,
        }

        match result {
            Ok(_) => self.modal = Modal::Closed,
            Err(message) => {
                if let Modal::Editing(editor) = &mut self.modal {
                    editor.submitting = false;
                    editor.error = Some(message);
                }
            }
        }
        true
    }

    pub fn fail_delete(&mut self, message: String) {
        self.page_error = Some(message);
    }

    pub fn dismiss_page_error(&mut self) {
        self.page_error = None;
    }

    pub fn dismiss_output(&mut self) {
        self.output = None;
    }
}

/// Write access to a controller's state.
///
/// `update` returns `None` once the owner has been torn down; the controller
/// treats that as "abandon this operation".
pub trait ControllerCell: Clone + 'static {
    fn update<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> Option<R>;

    fn is_active(&self) -> bool {
        self.update(|_| ()).is_some()
    }
}

/// Reference-counted state for hosts without a reactive runtime
#[derive(Debug, Clone, Default)]
pub struct SharedState {
    state: Rc<RefCell<ControllerState>>,
    disposed: Rc<std::cell::Cell<bool>>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ControllerState {
        self.state.borrow().clone()
    }

    /// Tear down: later writes are refused
    pub fn dispose(&self) {
        self.disposed.set(true);
    }
}

impl ControllerCell for SharedState {
    fn update<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> Option<R> {
        if self.disposed.get() {
            return None;
        }
        Some(f(&mut self.state.borrow_mut()))
    }
}

#[derive(Clone)]
pub struct ResourceController<C> {
    kind: Rc<ResourceKind>,
    service: Rc<dyn ResourceService>,
    templates: Option<Rc<dyn ResourceService>>,
    cell: C,
}

impl<C: ControllerCell> ResourceController<C> {
    pub fn new(kind: Rc<ResourceKind>, service: Rc<dyn ResourceService>, cell: C) -> Self {
        Self {
            kind,
            service,
            templates: None,
            cell,
        }
    }

    /// Source of the template choices for kinds that reference a template
    pub fn with_templates(mut self, templates: Rc<dyn ResourceService>) -> Self {
        self.templates = Some(templates);
        self
    }

    /// Initial fetch: the collection and, independently, template choices
    pub async fn activate(&self) {
        futures::join!(self.load(), self.load_template_options());
    }

    pub async fn load(&self) {
        let Some(ticket) = self.cell.update(ControllerState::begin_load) else {
            return;
        };
        debug!(kind = self.kind.key, ticket, "Loading resources");

        let result = self
            .service
            .list(ListFilter::all())
            .await
            .map_err(|e| format!("Failed to load {}: {}", self.kind.plural, e.user_message()));

        if let Err(message) = &result {
            error!(kind = self.kind.key, ticket, "{}", message);
        }

        match self.cell.update(|state| state.finish_load(ticket, result)) {
            Some(true) => {}
            Some(false) => debug!(kind = self.kind.key, ticket, "Dropped superseded list response"),
            None => debug!(kind = self.kind.key, ticket, "Dropped list response for a closed view"),
        }
    }

    /// Fetch template choices. Failure is logged and leaves the list alone.
    pub async fn load_template_options(&self) {
        let (Some(templates), Some(template_type)) = (&self.templates, self.kind.template_type)
        else {
            return;
        };
        let Some(ticket) = self.cell.update(ControllerState::begin_options_load) else {
            return;
        };

        match templates.list(ListFilter::templates_of(template_type)).await {
            Ok(items) => {
                let options: Vec<SelectOption> = items.iter().filter_map(template_option).collect();
                debug!(kind = self.kind.key, count = options.len(), "Loaded template choices");
                self.cell
                    .update(|state| state.finish_options_load(ticket, options));
            }
            Err(e) => {
                warn!(
                    kind = self.kind.key,
                    template_type = %template_type,
                    "Failed to load templates: {}",
                    e.user_message()
                );
            }
        }
    }

    pub fn view(&self, resource: Resource) {
        self.cell.update(|state| state.open_view(resource));
    }

    pub fn create(&self) {
        self.cell.update(ControllerState::open_create);
    }

    pub fn edit(&self, resource: Resource) {
        let schema = &self.kind.form;
        self.cell.update(|state| state.open_edit(schema, resource));
    }

    pub fn close(&self) {
        self.cell.update(ControllerState::close);
    }

    /// Normalize and send the open form's values. Success closes the form
    /// and re-fetches; failure keeps the form open with the error attached.
    pub async fn submit(&self, values: FormValues) {
        let Some(session) = self.cell.update(ControllerState::begin_submit).flatten() else {
            return;
        };

        let payload = match normalize_submission(&self.kind.form, &values, session.target()) {
            Ok(payload) => payload,
            Err(e) => {
                self.cell
                    .update(|state| state.finish_submit(session.id(), Err(e.to_string())));
                return;
            }
        };

        let result = if session.is_create() {
            self.service.create(payload).await
        } else {
            self.service.update(payload).await
        };

        match result {
            Ok(entity) => {
                info!(
                    kind = self.kind.key,
                    id = %entity.id().unwrap_or_default(),
                    created = session.is_create(),
                    "Saved resource"
                );
                if self
                    .cell
                    .update(|state| state.finish_submit(session.id(), Ok(entity)))
                    .is_some()
                {
                    self.load().await;
                }
            }
            Err(e) => {
                let message = format!("Failed to save {}: {}", self.kind.singular, e.user_message());
                error!(kind = self.kind.key, "{}", message);
                self.cell
                    .update(|state| state.finish_submit(session.id(), Err(message)));
            }
        }
    }

    /// Delete a confirmed resource. Success re-fetches; failure becomes a
    /// page-level error and the list is left as it is.
    pub async fn delete(&self, resource: Resource) {
        let Some(id) = resource.id() else {
            let message = format!("Failed to delete {}: it has no id", self.kind.singular);
            self.cell.update(|state| state.fail_delete(message));
            return;
        };

        match self.service.delete(&id).await {
            Ok(()) => {
                info!(kind = self.kind.key, id = %id, "Deleted resource");
                if self.cell.is_active() {
                    self.load().await;
                }
            }
            Err(e) => {
                let message = format!(
                    "Failed to delete {} \"{}\": {}",
                    self.kind.singular,
                    resource.display_name(),
                    e.user_message()
                );
                error!(kind = self.kind.key, id = %id, "{}", message);
                self.cell.update(|state| state.fail_delete(message));
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.cell.update(ControllerState::dismiss_page_error);
    }

    pub fn dismiss_output(&self) {
        self.cell.update(ControllerState::dismiss_output);
    }
}

/// Select option for a template: its id, labelled by its name
fn template_option(template: &Resource) -> Option<SelectOption> {
    let id = template.id()?;
    let label = template
        .get(NAME)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map_or_else(|| id.clone(), str::to_string);
    Some(SelectOption::new(id, label))
}
