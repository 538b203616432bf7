use crate::domain::a025_aid_package::ui::list::ManageAidPackages;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ManageAidPackages />
    }
}
