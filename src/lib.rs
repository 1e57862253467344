use yew::prelude::*;

pub mod components;
pub mod config;
pub mod contact;
pub mod modal;
pub mod pages;
pub mod portfolio;
pub mod utils;

use pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Home />
    }
}
