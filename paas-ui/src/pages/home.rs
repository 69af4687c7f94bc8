use leptos::*;
use leptos_router::*;
use paas_common::Catalog;

/// Landing page linking to each resource section
#[component]
pub fn Home(catalog: Catalog) -> impl IntoView {
    let sections = [
        (catalog.virtual_machines, "Provision virtual machines from VM templates."),
        (catalog.kubernetes_clusters, "Run Kubernetes clusters built from cluster templates."),
        (catalog.templates, "Maintain the templates both are rendered from."),
    ];

    view! {
        <div class="home">
            <h1>"PaaS Console"</h1>
            <div class="card-grid">
                {sections.into_iter().map(|(kind, blurb)| view! {
                    <A href=format!("/{}", kind.key) class="card">
                        <h2>{kind.title}</h2>
                        <p>{blurb}</p>
                    </A>
                }).collect_view()}
            </div>
        </div>
    }
}
