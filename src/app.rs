use dioxus::prelude::*;
use tracing::debug;

use crate::config::TableConfig;
use crate::domain::entities::edit::RowMode;
use crate::domain::entities::page::PaginationControls;
use crate::domain::entities::record::Field;
use crate::infra::http::source::HttpRecordSource;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::table_controller::{CellView, RowView, TableController};
use crate::{
    page_button_class, page_button_style, pagination_style, root_container_style, row_style,
    table_cell_style, table_container_style, table_header_cell_style, toolbar_style,
};

#[component]
pub fn App() -> Element {
    let config = use_hook(TableConfig::default);
    let AppState {
        mut table,
        mut search_input,
    } = AppState::new(&config);

    use_future(move || {
        let data_url = config.data_url.clone();
        async move {
            let loader = LoadService::new(HttpRecordSource::new(data_url));
            let result = loader.load().await;
            table.write().apply_load(result);
        }
    });

    let view = table.read().view();
    let select_all = view.select_all;
    let rows = view.rows;
    let pagination = view.pagination;

    rsx! {
        div {
            style: "{root_container_style()}",

            h2 { "Admin UI" }

            div {
                style: "{toolbar_style()}",
                input {
                    id: "search",
                    r#type: "text",
                    style: "flex: 1; padding: 6px;",
                    placeholder: "Search by name, email or role",
                    value: search_input(),
                    oninput: move |event| {
                        let term = event.value();
                        table.write().set_search_term(term.clone());
                        search_input.set(term);
                    },
                    onkeydown: move |event| {
                        if event.key() == Key::Enter {
                            table.write().search(search_input());
                        }
                    }
                }
                button {
                    id: "searchBtn",
                    onclick: move |_| {
                        table.write().search(search_input());
                    },
                    "Search"
                }
                button {
                    id: "deleteBtn",
                    style: "color: #fff; background: #d24; border: none; padding: 6px 12px; border-radius: 4px;",
                    onclick: move |_| {
                        table.write().delete_selected();
                    },
                    "Delete Selected"
                }
            }

            div {
                style: "{table_container_style()}",
                table { id: "userTable", style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            th { style: "{table_header_cell_style()}",
                                input {
                                    id: "selectAll",
                                    r#type: "checkbox",
                                    checked: select_all,
                                    onclick: move |_| {
                                        table.write().set_select_all(!select_all);
                                    }
                                }
                            }
                            th { style: "{table_header_cell_style()}", "ID" }
                            {Field::EDITABLE.iter().map(|field| rsx!(
                                th { style: "{table_header_cell_style()}", "{field.label()}" }
                            ))}
                            th { style: "{table_header_cell_style()}", "Actions" }
                        }
                    }
                    tbody {
                        {rows.into_iter().map(|row| rsx!(
                            UserRow { key: "{row.id}", row: row.clone(), table }
                        ))}
                    }
                }
            }

            PaginationStrip { pagination, table }
        }
    }
}

#[component]
fn UserRow(row: RowView, mut table: Signal<TableController>) -> Element {
    let selected = row.selected;
    let row_editing = row.mode == RowMode::RowEditing;
    let id_for_checkbox = row.id.clone();
    let id_for_edit = row.id.clone();
    let id_for_delete = row.id.clone();

    rsx! {
        tr {
            "data-id": "{row.id}",
            style: "{row_style(selected)}",
            td { style: "{table_cell_style(false)}",
                input {
                    class: "rowCheckbox",
                    r#type: "checkbox",
                    checked: selected,
                    onclick: move |_| {
                        table.write().toggle_row(&id_for_checkbox, !selected);
                    }
                }
            }
            td { style: "{table_cell_style(false)}", "{row.id}" }
            {row.cells.iter().map(|cell| rsx!(
                EditableCell {
                    key: "{cell.field}",
                    row_id: row.id.clone(),
                    cell: cell.clone(),
                    row_editing,
                    table,
                }
            ))}
            td { style: "{table_cell_style(false)}",
                if row_editing {
                    button {
                        class: "saveBtn",
                        onclick: move |_| {
                            table.write().finish_row_edit();
                        },
                        "Save"
                    }
                    button {
                        class: "cancelBtn",
                        onclick: move |_| {
                            table.write().finish_row_edit();
                        },
                        "Cancel"
                    }
                } else {
                    button {
                        class: "editBtn",
                        onclick: move |_| {
                            table.write().begin_row_edit(&id_for_edit);
                        },
                        "Edit"
                    }
                    button {
                        class: "deleteBtn",
                        onclick: move |_| {
                            table.write().delete_row(&id_for_delete);
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn EditableCell(
    row_id: String,
    cell: CellView,
    row_editing: bool,
    mut table: Signal<TableController>,
) -> Element {
    let field = cell.field;

    let Some(draft) = cell.draft else {
        return rsx! {
            td {
                class: "editable",
                "data-field": field.as_str(),
                style: "{table_cell_style(row_editing)}",
                onclick: move |_| {
                    if row_editing {
                        table.write().begin_cell_edit(&row_id, field);
                    }
                },
                "{cell.text}"
            }
        };
    };

    let id_for_input = row_id.clone();
    let id_for_key = row_id.clone();
    let id_for_blur = row_id;

    rsx! {
        td {
            class: "editable editing",
            "data-field": field.as_str(),
            style: "{table_cell_style(true)}",
            input {
                style: "width: 100%;",
                value: draft,
                onmounted: move |event| async move {
                    if let Err(err) = event.data().set_focus(true).await {
                        debug!(error = ?err, "could not focus cell input");
                    }
                },
                oninput: move |event| {
                    table.write().update_cell_input(&id_for_input, field, event.value());
                },
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        table.write().commit_cell(&id_for_key, field);
                    } else if event.key() == Key::Escape {
                        table.write().cancel_cell(&id_for_key, field);
                    }
                },
                onblur: move |_| {
                    table.write().commit_cell(&id_for_blur, field);
                }
            }
        }
    }
}

#[component]
fn PaginationStrip(pagination: PaginationControls, mut table: Signal<TableController>) -> Element {
    if !pagination.is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "pagination",
            style: "{pagination_style()}",
            {pagination.buttons.iter().map(|control| {
                let target = control.target;
                let class_name = page_button_class(control.kind);
                rsx!(
                    button {
                        key: "{class_name}",
                        class: "{class_name}",
                        style: "{page_button_style(control.is_current)}",
                        disabled: control.disabled,
                        onclick: move |_| {
                            table.write().go_to_page(target);
                        },
                        "{control.label}"
                    }
                )
            })}
        }
    }
}
