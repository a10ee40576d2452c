use dioxus::prelude::*;

use ui::{Layout, Navbar};
use views::BackendsPage;

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move { Ok(dioxus::server::router(App)) });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Switchyard" }

        Layout {
            Navbar {
                span { class: "text-xs font-mono uppercase tracking-widest text-gray-400",
                    "Backend console"
                }
            }
            main { class: "px-4 sm:px-6 lg:px-8 flex-grow flex flex-col relative overflow-y-auto w-full py-8 no-scrollbar",
                BackendsPage {}
            }
        }
    }
}
