use dioxus::prelude::*;
use shared::{evaluate_switch, BackendDescriptor, BackendId, SwitchDecision};

mod card;
mod panels;
mod poller;
mod status_badge;

pub use card::BackendCard;
pub use panels::{ComparisonNotes, SupabasePanel};
pub use poller::ProbeFuture;
pub use status_badge::StatusBadge;

use crate::components::simple::{Button, ButtonVariant};
use poller::{poll_catalog, probe_with_timeout};

/// Injected health probe: resolves true when the backend is reachable.
pub type HealthProbe = Callback<BackendId, ProbeFuture>;

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    /// Externally owned selection; read for highlighting and gating only.
    pub current_backend: BackendId,
    /// Asked to change the selection. The outcome is not awaited or
    /// verified; the new value flows back in through `current_backend`.
    pub on_backend_change: EventHandler<BackendId>,
    pub on_health_check: HealthProbe,
}

#[component]
pub fn BackendSwitcher(props: Props) -> Element {
    let mut catalog = use_signal(BackendDescriptor::catalog);
    let mut checking = use_signal(|| false);
    let mut notice = use_signal(String::new);

    let probe = props.on_health_check;
    let check_all = move || async move {
        checking.set(true);
        let polled = poll_catalog(catalog(), |id| {
            Box::pin(probe_with_timeout(probe.call(id))) as ProbeFuture
        })
        .await;
        catalog.set(polled);
        checking.set(false);
    };

    // First poll on mount; later polls are user triggered.
    use_future(move || async move { check_all().await });

    let current = props.current_backend;
    let on_backend_change = props.on_backend_change;
    let request_switch = move |target: BackendId| {
        match evaluate_switch(&catalog.read(), current, target) {
            SwitchDecision::AlreadyActive => {}
            SwitchDecision::Refused { name } => notice.set(format!(
                "{name} is offline right now. Re-check its status before switching."
            )),
            SwitchDecision::Forward => {
                notice.set(String::new());
                on_backend_change.call(target);
            }
        }
    };

    rsx! {
      section { class: "space-y-6 text-white w-full",
        div { class: "flex items-center justify-between gap-4",
          div {
            h2 { class: "text-2xl font-bold text-yard-accent font-display", "Storage Backends" }
            p { class: "text-gray-400 font-mono text-sm",
              "Compare the available integrations and switch the active one."
            }
          }
          Button {
            variant: ButtonVariant::Secondary,
            disabled: checking(),
            onclick: move |_| check_all(),
            if checking() {
              "Checking..."
            } else {
              "Re-check status"
            }
          }
        }

        if !notice().is_empty() {
          div { class: "p-4 bg-amber-900/20 border border-amber-500/50 rounded text-amber-300 font-mono text-sm flex items-center justify-between gap-4",
            span { "{notice}" }
            button {
              class: "uppercase text-xs tracking-widest hover:text-white transition-colors cursor-pointer",
              onclick: move |_| notice.set(String::new()),
              "Dismiss"
            }
          }
        }

        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
          for entry in catalog() {
            BackendCard {
              key: "{entry.id}",
              descriptor: entry.clone(),
              active: entry.id == current,
              checking: checking(),
              on_select: request_switch,
            }
          }
        }

        ComparisonNotes {}

        if current == BackendId::Supabase {
          SupabasePanel {}
        }
      }
    }
}
