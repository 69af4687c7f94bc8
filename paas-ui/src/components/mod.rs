//! Generic CRUD components driven by resource declarations

mod dynamic_form;
mod modal;
mod resource_detail;
mod resource_form;
mod resource_list;

pub use dynamic_form::DynamicForm;
pub use modal::ModalFrame;
pub use resource_detail::ResourceDetail;
pub use resource_form::ResourceForm;
pub use resource_list::ResourceList;

use leptos::*;
use paas_common::Cell;

/// Plain text, or a `<code>` element for source snippets
pub fn render_cell(cell: Cell) -> View {
    match cell {
        Cell::Text(text) => text.into_view(),
        Cell::Code(code) => view! { <code class="cell-code">{code}</code> }.into_view(),
    }
}
