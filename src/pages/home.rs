use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::portfolio_grid::PortfolioGrid;
use crate::components::services::Services;
use crate::components::skills::Skills;
use crate::contact::ContactSection;
use crate::modal::demo::DemoReelModal;
use crate::modal::project::ProjectModal;
use crate::portfolio::PortfolioItem;

/// The whole site: sections in page order plus the two modal flags. Each
/// modal instance owns its own lifecycle; closing one clears its flag here
/// which unmounts it and tears down its Escape listener.
#[function_component(Home)]
pub fn home() -> Html {
    let show_demo = use_state(|| false);
    let selected_project = use_state(|| None::<PortfolioItem>);

    // Start at the top on a fresh mount.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let on_show_demo = {
        let show_demo = show_demo.clone();
        Callback::from(move |_| show_demo.set(true))
    };
    let on_close_demo = {
        let show_demo = show_demo.clone();
        Callback::from(move |_| show_demo.set(false))
    };
    let on_view_project = {
        let selected_project = selected_project.clone();
        Callback::from(move |item: PortfolioItem| selected_project.set(Some(item)))
    };
    let on_close_project = {
        let selected_project = selected_project.clone();
        Callback::from(move |_| selected_project.set(None))
    };

    html! {
        <div class="site">
            <Navbar />
            <Hero on_show_demo={on_show_demo} />
            <Services />
            <PortfolioGrid on_view={on_view_project} />
            <Skills />
            <ContactSection />
            <Footer />
            if *show_demo {
                <DemoReelModal on_close={on_close_demo} />
            }
            if let Some(item) = (*selected_project).clone() {
                <ProjectModal {item} on_close={on_close_project} />
            }
        </div>
    }
}
