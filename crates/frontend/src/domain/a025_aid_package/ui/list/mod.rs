pub mod model;
pub mod state;
pub mod table;

use self::table::{AidPackageTable, PublishFuture, PublishHandler};
use contracts::domain::a025_aid_package::{
    AidPackageStatus, AidPackages, MedicalNeed, NeedAssignments, SupplierId,
};
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// "Manage aid packages" page: loads packages, needs and assignments and hosts the table
#[component]
pub fn ManageAidPackages() -> impl IntoView {
    let aid_packages = RwSignal::new(AidPackages::new());
    let medical_needs = RwSignal::new(Vec::<MedicalNeed>::new());
    let need_assignments = RwSignal::new(NeedAssignments::new());
    let selected_package = RwSignal::new(None::<SupplierId>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load = move || {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let loaded = async {
                let packages = model::fetch_aid_packages().await?;
                let needs = model::fetch_medical_needs().await?;
                let assignments = model::fetch_need_assignments().await?;
                Ok::<_, String>((packages, needs, assignments))
            }
            .await;

            match loaded {
                Ok((packages, needs, assignments)) => {
                    log::debug!(
                        "Loaded {} aid packages, {} medical needs",
                        packages.len(),
                        needs.len()
                    );
                    aid_packages.set(packages);
                    medical_needs.set(needs);
                    need_assignments.set(assignments);
                }
                Err(e) => {
                    log::warn!("Failed to load aid packages: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load());

    let handle_publish: PublishHandler = Rc::new(move |supplier_id: SupplierId, status: AidPackageStatus| {
        Box::pin(async move {
            model::update_status(supplier_id, status).await?;
            // Published packages drop out of the table on the next recompute
            aid_packages.try_update(|packages| {
                if let Some(package) = packages.get_mut(&supplier_id) {
                    *package = package.with_status(status);
                }
            });
            Ok::<(), String>(())
        }) as PublishFuture
    });

    let selected_summary = move || {
        let id = selected_package.get()?;
        aid_packages.with(|packages| {
            packages.get(&id).map(|package| {
                let status = match package.status {
                    AidPackageStatus::Draft => "Draft",
                    AidPackageStatus::Published => "Published",
                };
                view! {
                    <div class="manage-package-selection">
                        <span class="manage-package-selection__name">{package.name.clone()}</span>
                        <span class="manage-package-selection__status">{status}</span>
                    </div>
                }
            })
        })
    };

    view! {
        <div id="a025_aid_packages--list" class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Manage Aid Packages"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error.get().map(|err| view! {
                        <div class="alert alert--error">{err}</div>
                    })
                }}

                {selected_summary}

                <AidPackageTable
                    aid_packages=aid_packages
                    medical_needs=medical_needs
                    need_assignments=need_assignments
                    set_selected_package=Callback::new(move |id: Option<SupplierId>| selected_package.set(id))
                    handle_publish=handle_publish
                />
            </div>
        </div>
    }
}
