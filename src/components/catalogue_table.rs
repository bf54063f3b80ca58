//! Catalogue Table Component
//!
//! Paginated table of catalogue records with a per-row edit action.

use leptos::prelude::*;

use crate::catalogue::{page_count, page_slice};
use crate::config::PAGE_SIZES;
use crate::models::CatalogueItem;

/// Paginated catalogue table
///
/// # Arguments
/// * `rows` - Records to show, already filtered
/// * `default_page_size` - Initial rows per page, one of `PAGE_SIZES`
/// * `on_edit` - Called with a record id when its edit button is pressed
#[component]
pub fn CatalogueTable(
    #[prop(into)] rows: Signal<Vec<CatalogueItem>>,
    default_page_size: usize,
    #[prop(into)] on_edit: Callback<u32>,
) -> impl IntoView {
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(default_page_size);

    let total = Memo::new(move |_| rows.with(|r| r.len()));
    let pages = Memo::new(move |_| page_count(total.get(), page_size.get()));

    // Filtering or resizing can leave the current page past the end
    Effect::new(move |_| {
        let last = pages.get() - 1;
        if page.get_untracked() > last {
            set_page.set(last);
        }
    });

    let visible = move || rows.with(|r| page_slice(r, page.get(), page_size.get()).to_vec());

    let range_label = move || {
        let total = total.get();
        if total == 0 {
            return "0 de 0".to_string();
        }
        let start = page.get() * page_size.get();
        let end = (start + page_size.get()).min(total);
        format!("{}–{} de {}", start + 1, end, total)
    };

    view! {
        <table class="catalogue-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nombre"</th>
                    <th>"Altura"</th>
                    <th>"Peso"</th>
                    <th>"Experiencia Base"</th>
                    <th class="wide">"Ubicación"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=visible
                    key=|row| (row.id, row.location().to_string())
                    children=move |row| {
                        let id = row.id;
                        view! {
                            <tr>
                                <td>{row.id}</td>
                                <td>{row.name.clone()}</td>
                                <td>{row.height}</td>
                                <td>{row.weight}</td>
                                <td>{row.base_experience.map(|xp| xp.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                <td>{row.location().to_string()}</td>
                                <td>
                                    <button class="edit-btn" title="Editar ubicación" on:click=move |_| on_edit.run(id)>
                                        "✎"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>

        <div class="table-footer">
            <label>
                "Filas por página: "
                <select on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        set_page_size.set(size);
                        set_page.set(0);
                    }
                }>
                    {PAGE_SIZES.iter().map(|&size| view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size}
                        </option>
                    }).collect_view()}
                </select>
            </label>
            <span class="page-range">{range_label}</span>
            <button
                class="page-btn"
                disabled=move || page.get() == 0
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
            >
                "‹"
            </button>
            <button
                class="page-btn"
                disabled=move || page.get() + 1 >= pages.get()
                on:click=move |_| set_page.update(|p| *p += 1)
            >
                "›"
            </button>
        </div>
    }
}
