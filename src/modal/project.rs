use yew::prelude::*;

use super::Modal;
use crate::config;
use crate::portfolio::PortfolioItem;

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub item: PortfolioItem,
    pub on_close: Callback<()>,
}

/// Detail dialog for one portfolio item. The detail paragraph comes from
/// the item's category; an unrecognized category reuses the description.
#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let item = &props.item;
    html! {
        <Modal title={item.title.to_string()} on_close={props.on_close.clone()}>
            <style>
            {r#".project-banner {
                width: 100%;
                height: 200px;
                background: linear-gradient(135deg, var(--color-primary), #ff8a50);
                border-radius: 10px;
                display: flex;
                align-items: center;
                justify-content: center;
                color: white;
                font-weight: 600;
                margin-bottom: 20px;
            }
            .project-overview {
                font-size: 16px;
                color: var(--color-text);
                margin-bottom: 15px;
            }
            .project-description {
                color: var(--color-text-secondary);
                line-height: 1.6;
                margin-bottom: 15px;
            }
            .project-tags {
                display: flex;
                gap: 10px;
                flex-wrap: wrap;
                margin: 20px 0;
                justify-content: center;
            }
            .project-tags .tag {
                background: rgba(255, 107, 53, 0.1);
                color: var(--color-primary);
                padding: 5px 12px;
                border-radius: 15px;
                font-size: 12px;
                font-weight: 500;
                border: 1px solid rgba(255, 107, 53, 0.2);
            }
            .project-contact {
                background: rgba(255, 107, 53, 0.05);
                padding: 15px;
                border-radius: 8px;
                margin-top: 20px;
            }
            .project-contact p {
                color: var(--color-text-secondary);
                font-size: 14px;
                margin: 0;
                font-style: italic;
            }
            .project-contact a {
                color: var(--color-primary);
                font-weight: bold;
            }"#}
            </style>
            <div class="project-banner">{format!("{} Project", item.category)}</div>
            <p class="project-overview"><strong>{"Project Overview:"}</strong></p>
            <p class="project-description">{item.description}</p>
            <p class="project-description">{item.detail_text()}</p>
            <div class="project-tags">
                { for item.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
            </div>
            <div class="project-contact">
                <p>
                    {format!("Interested in similar work? Contact {} at ", config::STUDIO_NAME)}
                    <a href={config::mailto_href()}>{config::contact_email()}</a>
                </p>
            </div>
        </Modal>
    }
}
