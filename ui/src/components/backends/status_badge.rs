use dioxus::prelude::*;
use shared::BackendStatus;

#[component]
pub fn StatusBadge(status: BackendStatus) -> Element {
    let (dot, text, label) = match status {
        BackendStatus::Online => ("bg-emerald-400", "text-emerald-400", "Online"),
        BackendStatus::Offline => ("bg-red-500", "text-red-400", "Offline"),
        BackendStatus::Checking => ("bg-amber-400 animate-pulse", "text-amber-300", "Checking..."),
        // BackendStatus is non-exhaustive; render anything unrecognized neutrally.
        _ => ("bg-gray-500", "text-gray-400", "Unknown"),
    };

    rsx! {
      span { class: "flex items-center gap-2 text-xs font-mono uppercase tracking-widest {text}",
        span { class: "w-2 h-2 rounded-full {dot}" }
        "{label}"
      }
    }
}
