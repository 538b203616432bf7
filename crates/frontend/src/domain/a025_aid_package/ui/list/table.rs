//! Table of unpublished aid packages with per-row publish / save-draft actions

use super::state::{create_state, PublishResult};
use crate::shared::components::table::TableCellMoney;
use crate::shared::date_utils::format_period_or_current;
use contracts::domain::a025_aid_package::{
    build_rows, AidPackageStatus, AidPackages, MedicalNeed, NeedAssignments, SupplierId,
};
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

pub type PublishFuture = Pin<Box<dyn Future<Output = PublishResult>>>;

/// Stores the new status of a package. Supplied by the page.
pub type PublishHandler = Rc<dyn Fn(SupplierId, AidPackageStatus) -> PublishFuture>;

const TABLE_ID: &str = "a025-aid-packages-table";

#[component]
pub fn AidPackageTable(
    #[prop(into)]
    aid_packages: Signal<AidPackages>,

    #[prop(into)]
    medical_needs: Signal<Vec<MedicalNeed>>,

    #[prop(into)]
    need_assignments: Signal<NeedAssignments>,

    /// Called with the clicked supplier, or `None` when the selection is cleared
    set_selected_package: Callback<Option<SupplierId>>,

    handle_publish: PublishHandler,
) -> impl IntoView {
    let table_state = create_state();
    let handler = StoredValue::new_local(handle_publish);

    let rows = Memo::new(move |_| {
        aid_packages.with(|packages| {
            medical_needs.with(|needs| {
                need_assignments.with(|assignments| build_rows(packages, needs, assignments))
            })
        })
    });

    // Forget busy flags and selection of rows that dropped out (e.g. just published)
    Effect::new(move |_| {
        let visible: HashSet<SupplierId> =
            rows.with(|rows| rows.iter().map(|r| r.supplier_id).collect());
        let selection_dropped = table_state
            .try_update(|s| s.retain_rows(&visible))
            .unwrap_or(false);
        if selection_dropped {
            set_selected_package.run(None);
        }
    });

    let select_row = move |supplier_id: SupplierId| {
        table_state.update(|s| s.select_row(supplier_id));
        set_selected_package.run(Some(supplier_id));
    };

    let run_action = move |supplier_id: SupplierId, status: AidPackageStatus| {
        let started = table_state
            .try_update(|s| s.begin_action(supplier_id))
            .unwrap_or(false);
        if !started {
            return;
        }

        let pending = handler.with_value(|handle| handle(supplier_id, status));
        spawn_local(async move {
            let result = pending.await;
            match &result {
                Ok(()) => log::info!("Aid package {} saved as {}", supplier_id, status),
                Err(e) => log::error!("Failed to save aid package {}: {}", supplier_id, e),
            }

            // The table may be gone by now; then there is nothing to update.
            let selection_cleared = table_state
                .try_update(|s| s.finish_action(supplier_id, &result))
                .unwrap_or(false);
            if selection_cleared {
                set_selected_package.run(None);
            }
        });
    };
    let on_press = Callback::new(move |(supplier_id, status): (SupplierId, AidPackageStatus)| {
        run_action(supplier_id, status)
    });

    view! {
        {move || {
            table_state
                .with(|s| s.last_error.clone())
                .map(|err| view! { <div class="alert alert--error">{err}</div> })
        }}

        <div class="table-wrapper">
            <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
                <TableHeader>
                    <TableRow class="manage-package-header-row">
                        <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Supplier"</TableHeaderCell>
                        <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Period"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Total Cost"</TableHeaderCell>
                        <TableHeaderCell min_width=200.0>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>

                <TableBody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout>"No unpublished aid packages"</TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }

                        rows.into_iter()
                            .map(|row| {
                                let supplier_id = row.supplier_id;
                                let is_selected = move || table_state.with(|s| s.is_selected(supplier_id));
                                let is_busy = move || table_state.with(|s| s.is_busy(supplier_id));

                                view! {
                                    <TableRow
                                        class="manage-package-row"
                                        class:manage-package-row--selected=is_selected
                                        attr:style="cursor: pointer;"
                                        on:click=move |_| select_row(supplier_id)
                                    >
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.supplier}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{row.description}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_period_or_current(row.period)}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=row.total_cost />
                                        <TableCell>
                                            <TableCellLayout>
                                                {move || {
                                                    if is_busy() {
                                                        view! { <span class="table__saving">"Saving Aid Package..."</span> }
                                                            .into_any()
                                                    } else {
                                                        view! {
                                                            <PublishAidPackageButton
                                                                supplier_id=supplier_id
                                                                status=AidPackageStatus::Published
                                                                label="Publish"
                                                                on_press=on_press
                                                            />
                                                            <PublishAidPackageButton
                                                                supplier_id=supplier_id
                                                                status=AidPackageStatus::Draft
                                                                label="Save Draft"
                                                                on_press=on_press
                                                            />
                                                        }
                                                            .into_any()
                                                    }
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}

/// Row action button. Clicks do not reach the row, so pressing it never changes the selection.
#[component]
fn PublishAidPackageButton(
    supplier_id: SupplierId,
    status: AidPackageStatus,
    label: &'static str,
    on_press: Callback<(SupplierId, AidPackageStatus)>,
) -> impl IntoView {
    let appearance = match status {
        AidPackageStatus::Published => ButtonAppearance::Primary,
        AidPackageStatus::Draft => ButtonAppearance::Secondary,
    };

    view! {
        <Button
            class="table-action-button"
            appearance=appearance
            size=ButtonSize::Small
            on_click=move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                on_press.run((supplier_id, status));
            }
        >
            {label}
        </Button>
    }
}
