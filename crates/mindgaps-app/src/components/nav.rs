// crates/mindgaps-app/src/components/nav.rs
// Fixed navbar: mobile toggle, scrolled style, active link, smooth anchors

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use mindgaps_core::SiteConfig;
use mindgaps_core::nav::{MenuState, active_section, navbar_scrolled};
use wasm_bindgen::JsCast;

use crate::content::Section;
use crate::dom::{measure_sections, scroll_y, smooth_scroll};

#[component]
pub fn Navbar(sections: &'static [Section]) -> impl IntoView {
    let nav = expect_context::<SiteConfig>().nav;
    let menu = RwSignal::new(MenuState::default());
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(None::<&'static str>);
    let hamburger = NodeRef::<html::Div>::new();
    let nav_menu = NodeRef::<html::Ul>::new();

    let ids: Vec<&'static str> = sections.iter().map(|s| s.id).collect();
    let _scroll = window_event_listener(ev::scroll, move |_| {
        let y = scroll_y();
        set_scrolled.set(navbar_scrolled(y, nav.scrolled_threshold));
        set_active.set(active_section(y, &measure_sections(&ids), nav.section_offset));
    });

    // Clicking anywhere outside the hamburger and the menu closes the menu
    let _outside = window_event_listener(ev::click, move |ev| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
            return;
        };
        let in_hamburger = hamburger.get().is_some_and(|el| el.contains(Some(&target)));
        let in_menu = nav_menu.get().is_some_and(|el| el.contains(Some(&target)));
        if !in_hamburger && !in_menu && menu.get_untracked().is_open() {
            menu.update(MenuState::close);
        }
    });

    let links = sections
        .iter()
        .map(|section| {
            let id = section.id;
            view! {
                <li class="nav-item">
                    <a
                        href=format!("#{}", id)
                        class="nav-link"
                        class:active=move || active.get() == Some(id)
                        on:click=move |ev| {
                            ev.prevent_default();
                            menu.update(MenuState::close);
                            smooth_scroll(id, nav.anchor_offset);
                        }
                    >
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" id="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <AnchorLink target="home" class="nav-logo">"BridgingMindGaps"</AnchorLink>
                <ul
                    class="nav-menu"
                    id="nav-menu"
                    node_ref=nav_menu
                    class:active=move || menu.get().is_open()
                >
                    {links}
                </ul>
                <div
                    class="hamburger"
                    id="hamburger"
                    node_ref=hamburger
                    class:active=move || menu.get().is_open()
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

/// In-page link that smooth-scrolls to section `target` instead of jumping
#[component]
pub fn AnchorLink(
    target: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let offset = expect_context::<SiteConfig>().nav.anchor_offset;

    view! {
        <a
            href=format!("#{}", target)
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                smooth_scroll(target, offset);
            }
        >
            {children()}
        </a>
    }
}
