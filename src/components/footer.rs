use yew::prelude::*;

use crate::config;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
            {r#".site-footer {
                border-top: 1px solid var(--color-border);
                padding: 2.5rem 2rem;
                text-align: center;
                color: var(--color-text-secondary);
                font-size: 0.9rem;
            }
            .site-footer a {
                color: var(--color-primary);
                text-decoration: none;
            }
            .site-footer a:hover {
                text-decoration: underline;
            }"#}
            </style>
            <p>
                {format!("{} · professional video editing. Reach us at ", config::STUDIO_NAME)}
                <a href={config::mailto_href()}>{config::contact_email()}</a>
            </p>
            <p>{format!("© 2026 {}", config::STUDIO_NAME)}</p>
        </footer>
    }
}
