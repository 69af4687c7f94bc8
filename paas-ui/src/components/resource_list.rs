//! List engine: a table of resources with optional row actions

use super::{render_cell, ModalFrame};
use crate::error::EmptyState;
use leptos::*;
use paas_common::{ColumnDescriptor, DeleteConfirmation, ListView, Resource, Row, RowActions};

/// Table of `resources`, one column per descriptor.
///
/// A row action is offered only when its callback is given. Delete asks
/// for confirmation first and calls `on_delete` once per confirmation.
#[component]
pub fn ResourceList(
    resources: Vec<Resource>,
    columns: Vec<ColumnDescriptor>,
    #[prop(optional)] on_view: Option<Callback<Resource>>,
    #[prop(optional)] on_edit: Option<Callback<Resource>>,
    #[prop(optional)] on_delete: Option<Callback<Resource>>,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    let actions = RowActions {
        view: on_view.is_some(),
        edit: on_edit.is_some(),
        delete: on_delete.is_some(),
    };
    let confirmation = create_rw_signal(DeleteConfirmation::default());

    let (headers, rows) = match ListView::project(&resources, &columns, &empty_message) {
        ListView::Empty(message) => return view! { <EmptyState message=message/> }.into_view(),
        ListView::Table { headers, rows } => (headers, rows),
    };

    let confirm = move |_| {
        let target = confirmation.try_update(DeleteConfirmation::confirm).flatten();
        if let (Some(target), Some(on_delete)) = (target, on_delete) {
            on_delete.call(target);
        }
    };
    let cancel = Callback::new(move |_| confirmation.update(DeleteConfirmation::cancel));

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {headers.into_iter().map(|header| view! { <th>{header}</th> }).collect_view()}
                    {actions.any().then(|| view! { <th>"Actions"</th> })}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.clone()
                    key=|row: &Row| row.key.clone()
                    children=move |row: Row| {
                        let resource = row.resource;
                        view! {
                            <tr>
                                {row.cells.into_iter().map(|cell| view! { <td>{render_cell(cell)}</td> }).collect_view()}
                                {actions.any().then(|| view! {
                                    <td class="actions">
                                        {on_view.map(|on_view| {
                                            let resource = resource.clone();
                                            view! {
                                                <button
                                                    class="btn btn-sm btn-secondary"
                                                    on:click=move |_| on_view.call(resource.clone())
                                                >"View"</button>
                                            }
                                        })}
                                        {on_edit.map(|on_edit| {
                                            let resource = resource.clone();
                                            view! {
                                                <button
                                                    class="btn btn-sm btn-primary"
                                                    on:click=move |_| on_edit.call(resource.clone())
                                                >"Edit"</button>
                                            }
                                        })}
                                        {on_delete.map(|_| {
                                            let resource = resource.clone();
                                            view! {
                                                <button
                                                    class="btn btn-sm btn-danger"
                                                    on:click=move |_| {
                                                        confirmation.update(|c| c.request(resource.clone()))
                                                    }
                                                >"Delete"</button>
                                            }
                                        })}
                                    </td>
                                })}
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>

        {move || confirmation.with(DeleteConfirmation::prompt).map(|prompt| view! {
            <ModalFrame title="Confirm Delete" on_close=cancel class="modal-content modal-sm">
                <div class="modal-body">
                    <p>{prompt}</p>
                </div>
                <div class="modal-footer">
                    <button class="btn btn-secondary" on:click=move |_| cancel.call(())>"Cancel"</button>
                    <button class="btn btn-danger" on:click=confirm>"Delete"</button>
                </div>
            </ModalFrame>
        })}
    }
    .into_view()
}
