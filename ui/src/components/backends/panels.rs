use dioxus::prelude::*;

/// Static comparison notes shown under the cards regardless of selection.
#[component]
pub fn ComparisonNotes() -> Element {
    rsx! {
      div { class: "bg-yard-panel border border-white/10 p-6 rounded-lg",
        h3 { class: "text-sm font-mono uppercase tracking-widest text-gray-400 mb-3",
          "Good to know"
        }
        ul { class: "space-y-2 text-sm text-gray-300",
          li { "Switching changes where new data is read and written. Existing records stay where they are." }
          li { "Health is checked once on load and again on demand. A backend marked offline cannot be activated until it comes back." }
          li { "Both integrations expose the same data shape, so the rest of the app does not care which one is active." }
        }
      }
    }
}

/// Extra capabilities panel, only relevant while Supabase is the active
/// backend.
#[component]
pub fn SupabasePanel() -> Element {
    rsx! {
      div { class: "bg-yard-panel border border-yard-accent/40 p-6 rounded-lg",
        h3 { class: "text-sm font-mono uppercase tracking-widest text-yard-accent mb-3",
          "Supabase Features Active"
        }
        ul { class: "space-y-2 text-sm text-gray-300",
          li { "Realtime change subscriptions keep open sessions in sync." }
          li { "Row-level security policies apply to every request." }
          li { "The project's SQL console can query live data directly." }
        }
      }
    }
}
