use dioxus::prelude::*;
use shared::{BackendDescriptor, BackendId, BackendStatus};

use super::status_badge::StatusBadge;
use crate::components::simple::{Button, ButtonVariant};

/// Whether the switch control for an entry is interactive.
pub(crate) fn switch_disabled(status: BackendStatus, checking: bool) -> bool {
    checking || status == BackendStatus::Offline
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    pub descriptor: BackendDescriptor,
    pub active: bool,
    pub checking: bool,
    pub on_select: EventHandler<BackendId>,
}

#[component]
pub fn BackendCard(props: Props) -> Element {
    let entry = props.descriptor.clone();
    let on_select = props.on_select;
    let id = entry.id;
    let disabled = switch_disabled(entry.status, props.checking);
    let border = if props.active {
        "border-yard-accent shadow-[0_0_20px_rgba(56,189,248,0.15)]"
    } else {
        "border-white/10"
    };

    rsx! {
      div { class: "bg-yard-panel border {border} p-6 rounded-lg shadow-2xl flex flex-col gap-4",
        div { class: "flex items-start justify-between gap-4",
          div {
            h3 { class: "text-xl font-bold text-white font-display", "{entry.name}" }
            p { class: "text-sm text-gray-400 font-mono mt-1", "{entry.description}" }
          }
          if props.active {
            span { class: "px-2 py-1 text-[10px] font-mono uppercase tracking-widest bg-yard-accent/20 text-yard-accent border border-yard-accent/50 rounded shrink-0",
              "Active"
            }
          }
        }

        StatusBadge { status: entry.status }

        div { class: "space-y-3",
          LabelList {
            title: "Features",
            accent: "bg-yard-accent",
            items: entry.features.clone(),
          }
          LabelList {
            title: "Advantages",
            accent: "bg-emerald-400",
            items: entry.advantages.clone(),
          }
          LabelList {
            title: "Considerations",
            accent: "bg-amber-400",
            items: entry.considerations.clone(),
          }
        }

        Button {
          variant: ButtonVariant::Secondary,
          disabled,
          class: "mt-auto w-full text-center",
          onclick: move |_| on_select.call(id),
          if props.active {
            "Active backend"
          } else {
            "Switch to this backend"
          }
        }
      }
    }
}

#[component]
fn LabelList(title: &'static str, accent: &'static str, items: Vec<String>) -> Element {
    rsx! {
      div {
        h4 { class: "text-xs font-mono uppercase tracking-wider text-gray-400 mb-1", "{title}" }
        ul { class: "space-y-1",
          for item in items {
            li { class: "flex items-start gap-2 text-sm text-gray-300",
              span { class: "mt-1.5 w-1.5 h-1.5 rounded-full shrink-0 {accent}" }
              "{item}"
            }
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_control_gating() {
        assert!(!switch_disabled(BackendStatus::Online, false));
        assert!(!switch_disabled(BackendStatus::Checking, false));
        assert!(switch_disabled(BackendStatus::Offline, false));
        // any status is locked while a poll is in flight
        assert!(switch_disabled(BackendStatus::Online, true));
        assert!(switch_disabled(BackendStatus::Checking, true));
    }
}
