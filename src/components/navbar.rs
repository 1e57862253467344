use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::utils::scroll;

const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("portfolio", "Portfolio"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Fixed top navigation. The hamburger drives the mobile menu state, a
/// link click closes the menu and smooth-scrolls to its section, and the
/// bar picks up a solid background once the page is scrolled past 50px.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = Closure::<dyn FnMut()>::new(move || {
                    if let Some(window) = web_sys::window() {
                        let y = window.scroll_y().unwrap_or(0.0);
                        scrolled.set(y > 50.0);
                    }
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                    drop(listener);
                }
            },
            (),
        );
    }

    let on_hamburger = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |section: &'static str, label: &'static str| -> Html {
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll::scroll_to_section(section);
        });
        html! {
            <a class="nav-link" href={format!("#{section}")} {onclick}>{label}</a>
        }
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*scrolled).then_some("scrolled"))}>
            <style>
            {r#".navbar {
                position: fixed;
                top: 0;
                left: 0;
                width: 100%;
                z-index: 1000;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1rem 2rem;
                transition: background-color 0.3s ease, box-shadow 0.3s ease;
            }
            .navbar.scrolled {
                background: rgba(18, 18, 18, 0.95);
                backdrop-filter: blur(8px);
                box-shadow: 0 2px 12px rgba(0, 0, 0, 0.4);
            }
            .nav-logo {
                font-weight: 700;
                font-size: 1.2rem;
                color: var(--color-text);
                text-decoration: none;
            }
            .nav-logo span {
                color: var(--color-primary);
            }
            .nav-menu {
                display: flex;
                gap: 2rem;
            }
            .nav-link {
                color: var(--color-text-secondary);
                text-decoration: none;
                transition: color 0.3s ease;
            }
            .nav-link:hover {
                color: var(--color-primary);
            }
            .hamburger {
                display: none;
                background: none;
                border: none;
                cursor: pointer;
                flex-direction: column;
                gap: 5px;
            }
            .hamburger span {
                width: 24px;
                height: 2px;
                background: var(--color-text);
            }
            @media (max-width: 768px) {
                .hamburger {
                    display: flex;
                }
                .nav-menu {
                    display: none;
                    position: absolute;
                    top: 100%;
                    left: 0;
                    width: 100%;
                    flex-direction: column;
                    gap: 0;
                    background: rgba(18, 18, 18, 0.98);
                }
                .nav-menu.active {
                    display: flex;
                }
                .nav-menu .nav-link {
                    padding: 1rem 2rem;
                    border-top: 1px solid var(--color-border);
                }
            }"#}
            </style>
            <a class="nav-logo" href="#home">{"SS "}<span>{"Edit Studio"}</span></a>
            <div class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                { for NAV_SECTIONS.iter().map(|&(section, label)| nav_link(section, label)) }
            </div>
            <button class="hamburger" aria-label={format!("Toggle {} menu", config::STUDIO_NAME)} onclick={on_hamburger}>
                <span></span><span></span><span></span>
            </button>
        </nav>
    }
}
