//! Table cell for money values
//!
//! ```rust,ignore
//! <TableCellMoney value=row.total_cost />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned cell with a formatted amount
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<f64>,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let style = if bold {
        "font-variant-numeric: tabular-nums; font-weight: 600"
    } else {
        "font-variant-numeric: tabular-nums"
    };

    view! {
        <TableCell class="text-right">
            <TableCellLayout>
                <span style=style>{move || format_money(value.get())}</span>
            </TableCellLayout>
        </TableCell>
    }
}
