//! PaaS Console UI
//!
//! Browser front end for managing virtual machines, Kubernetes clusters and
//! the templates they are provisioned from. Every resource page is the same
//! generic [`pages::ResourcePage`] bound to a declaration from
//! [`paas_common::kinds`] and a Connect service.

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use paas_common::{Catalog, ResourceKind, ResourceService};
use std::rc::Rc;
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod pages;
pub mod state;

use api::{ConnectClient, ConnectService};
use config::ConsoleConfig;
use error::ErrorAlert;
use logging::LoggingConfig;
use pages::{Home, ResourcePage};

/// Remote services, built once and handed to the pages
#[derive(Clone)]
pub struct Services {
    pub virtual_machines: Rc<dyn ResourceService>,
    pub kubernetes_clusters: Rc<dyn ResourceService>,
    pub templates: Rc<dyn ResourceService>,
}

impl Services {
    pub fn connect(client: &ConnectClient, catalog: &Catalog) -> Self {
        let service = |kind: &ResourceKind| -> Rc<dyn ResourceService> {
            Rc::new(ConnectService::new(client.clone(), kind.endpoint))
        };
        Self {
            virtual_machines: service(&catalog.virtual_machines),
            kubernetes_clusters: service(&catalog.kubernetes_clusters),
            templates: service(&catalog.templates),
        }
    }
}

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    provide_meta_context();

    let content = match Catalog::new() {
        Ok(catalog) => {
            let client = ConnectClient::new(&config.api_base_url);
            let services = Services::connect(&client, &catalog);
            view! { <Console catalog=catalog services=services/> }.into_view()
        }
        Err(e) => {
            error!("Invalid resource declaration: {}", e);
            view! {
                <main class="container">
                    <ErrorAlert message=format!("The console is misconfigured: {}", e)/>
                </main>
            }
            .into_view()
        }
    };

    view! {
        <Title text="PaaS Console"/>
        <Meta name="description" content="Provision virtual machines and Kubernetes clusters from templates"/>
        {content}
    }
}

#[component]
fn Console(catalog: Catalog, services: Services) -> impl IntoView {
    let home = {
        let catalog = catalog.clone();
        move || view! { <Home catalog=catalog.clone()/> }
    };
    let vms = {
        let kind = catalog.virtual_machines.clone();
        let services = services.clone();
        move || {
            view! {
                <ResourcePage
                    kind=kind.clone()
                    service=services.virtual_machines.clone()
                    templates=services.templates.clone()
                />
            }
        }
    };
    let clusters = {
        let kind = catalog.kubernetes_clusters.clone();
        let services = services.clone();
        move || {
            view! {
                <ResourcePage
                    kind=kind.clone()
                    service=services.kubernetes_clusters.clone()
                    templates=services.templates.clone()
                />
            }
        }
    };
    let templates = {
        let kind = catalog.templates.clone();
        let service = services.templates.clone();
        move || view! { <ResourcePage kind=kind.clone() service=service.clone()/> }
    };

    view! {
        <Router>
            <nav class="navbar">
                <div class="navbar-brand">
                    <h1>"PaaS Console"</h1>
                </div>
                <div class="navbar-menu">
                    <A href="/" class="navbar-item">"Home"</A>
                    <A href="/vms" class="navbar-item">{catalog.virtual_machines.title}</A>
                    <A href="/clusters" class="navbar-item">{catalog.kubernetes_clusters.title}</A>
                    <A href="/templates" class="navbar-item">{catalog.templates.title}</A>
                </div>
            </nav>

            <main class="container">
                <Routes>
                    <Route path="/" view=home/>
                    <Route path="/vms" view=vms/>
                    <Route path="/clusters" view=clusters/>
                    <Route path="/templates" view=templates/>
                </Routes>
            </main>
        </Router>
    }
}

/// Entry point: install panic and log hooks, then mount the app
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, stored_error) = match ConsoleConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };

    if let Err(e) = LoggingConfig::new(&config.log_level).init() {
        leptos::logging::warn!("Logging was already initialized: {}", e);
    }
    if let Some(e) = stored_error {
        warn!("Ignoring stored console settings: {}", e);
    }
    info!(api = %config.api_base_url, "Starting PaaS console");

    mount_to_body(move || view! { <App config=config.clone()/> });
}
