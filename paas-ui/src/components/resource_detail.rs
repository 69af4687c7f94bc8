use super::{render_cell, ModalFrame};
use leptos::*;
use paas_common::{ColumnDescriptor, DetailView, Resource};

/// Read-only view of one resource. Blank values show a placeholder and a
/// rendered template is always shown in full below the fields.
#[component]
pub fn ResourceDetail(
    resource: Resource,
    fields: Vec<ColumnDescriptor>,
    #[prop(into)] title: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let DetailView {
        rows,
        rendered_template,
    } = DetailView::project(&resource, &fields);

    view! {
        <ModalFrame title=title on_close=on_close>
            <div class="modal-body">
                <dl class="detail-list">
                    {rows.into_iter().map(|row| view! {
                        <div class="detail-row">
                            <dt>{row.label}</dt>
                            <dd>{render_cell(row.value)}</dd>
                        </div>
                    }).collect_view()}
                </dl>
                {rendered_template.map(|text| view! {
                    <div class="rendered-template">
                        <h3>"Rendered Template"</h3>
                        <pre>{text}</pre>
                    </div>
                })}
            </div>
            <div class="modal-footer">
                <button class="btn btn-secondary" on:click=move |_| on_close.call(())>"Close"</button>
            </div>
        </ModalFrame>
    }
}
