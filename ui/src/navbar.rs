use dioxus::prelude::*;

#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header { class: "flex justify-between items-center py-6 border-b border-white/5",
            // Logo area
            div { class: "flex items-center gap-3 group cursor-default",
                div { class: "w-10 h-10 bg-yard-accent rounded-sm flex items-center justify-center shadow-[0_0_15px_rgba(56,189,248,0.5)] group-hover:rotate-12 transition-transform",
                    svg {
                        class: "w-6 h-6 text-white",
                        fill: "none",
                        stroke: "currentColor",
                        view_box: "0 0 24 24",
                        path {
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                            stroke_width: "2",
                            d: "M8 7h12m0 0l-4-4m4 4l-4 4m0 6H4m0 0l4 4m-4-4l4-4",
                        }
                    }
                }
                h1 { class: "text-2xl font-bold tracking-tighter uppercase text-transparent bg-clip-text bg-gradient-to-r from-white to-gray-400",
                    "Switchyard"
                }
            }

            // Menu
            nav { class: "flex items-center gap-8 bg-yard-panel/50 px-6 py-2 rounded-full border border-white/5 backdrop-blur-sm",
                {children}
            }
        }
    }
}
