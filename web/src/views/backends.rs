use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use shared::BackendId;
use ui::{BackendSwitcher, HealthProbe, ProbeFuture};

#[component]
pub fn BackendsPage() -> Element {
    let mut current_backend = use_signal(|| BackendId::Google);

    // Selection is session scoped; the server only supplies the default.
    use_future(move || async move {
        if let Ok(default) = api::default_backend().await {
            current_backend.set(default);
        }
    });

    let probe: HealthProbe = Callback::new(move |id: BackendId| {
        Box::pin(async move { api::probe_backend(id).await.map_err(|e| e.to_string()) })
            as ProbeFuture
    });

    rsx! {
        div { class: "w-full max-w-4xl mx-auto z-10",
            BackendSwitcher {
                current_backend: current_backend(),
                on_backend_change: move |id: BackendId| {
                    info!("switching active backend to {id}");
                    current_backend.set(id);
                },
                on_health_check: probe,
            }
        }
    }
}
