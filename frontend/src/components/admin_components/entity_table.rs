use common::admin_entity::{EntityKind, display_cell, record_id};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_content_icons::MdCreate, icons::md_action_icons::MdDelete};
use serde_json::Value;

/// Records of one entity, one column per list field plus edit/delete actions.
#[component]
pub fn EntityTable(
    kind: EntityKind,
    records: ReadSignal<Vec<Value>>,
    on_edit: Callback<Value>,
    on_delete: Callback<Value>,
) -> Element {
    let fields = kind.list_fields();
    let rows = records
        .read()
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let row_key = record_id(record).map(|id| id.to_string()).unwrap_or_else(|| format!("row-{index}"));
            let cells = fields
                .iter()
                .map(|field| display_cell(record.get(field.key), field.field_type))
                .collect::<Vec<_>>();
            (row_key, record.clone(), cells)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            style: "width: 100%; overflow-x: auto; background: white; border: 1px solid #E5E7EB; border-radius: 10px;",
            table {
                class: "catalog-table",
                thead {
                    tr {
                        for field in fields.iter() {
                            th { key: "{field.key}", "{field.label}" }
                        }
                        th { "Actions" }
                    }
                }
                tbody {
                    for (row_key, record, cells) in rows {
                        tr {
                            key: "{row_key}",
                            for cell in cells {
                                td { "{cell}" }
                            }
                            td {
                                div {
                                    style: "display:flex; flex-direction: row; gap: 6px;",
                                    button {
                                        style: "display:flex; align-items:center; gap: 4px; padding: 4px 10px; border-radius: 6px; border: 1px solid #D1D5DB; background: white; cursor: pointer;",
                                        onclick: {
                                            let record = record.clone();
                                            move |_| on_edit.call(record.clone())
                                        },
                                        Icon { icon: MdCreate, style: "width: 16px; height: 16px;" }
                                        "Edit"
                                    }
                                    button {
                                        style: "display:flex; align-items:center; gap: 4px; padding: 4px 10px; border-radius: 6px; border: 1px solid #FCA5A5; background: #FEF2F2; color: #B91C1C; cursor: pointer;",
                                        onclick: move |_| on_delete.call(record.clone()),
                                        Icon { icon: MdDelete, style: "width: 16px; height: 16px;" }
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
