use yew::prelude::*;

use super::Modal;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct DemoReelModalProps {
    pub on_close: Callback<()>,
}

/// Promotional demo-reel dialog opened from the hero's video placeholder.
#[function_component(DemoReelModal)]
pub fn demo_reel_modal(props: &DemoReelModalProps) -> Html {
    html! {
        <Modal title={format!("{} - Demo Reel", config::STUDIO_NAME)} on_close={props.on_close.clone()}>
            <style>
            {r#".video-placeholder-modal {
                width: 100%;
                min-height: 300px;
                background: linear-gradient(135deg, #1a1a1a, #2d2d2d);
                border-radius: 10px;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                border: 2px dashed var(--color-border);
                color: var(--color-text);
                padding: 20px;
            }
            .video-placeholder-modal .play-icon {
                font-size: 60px;
                margin-bottom: 20px;
            }
            .video-placeholder-modal .reel-note {
                color: var(--color-text-secondary);
                font-size: 14px;
                margin-top: 15px;
            }
            .video-placeholder-modal ul {
                text-align: left;
                color: var(--color-text-secondary);
                font-size: 14px;
                margin-top: 10px;
            }
            .video-placeholder-modal .reel-contact {
                color: var(--color-text-secondary);
                font-size: 12px;
                margin-top: 15px;
                font-style: italic;
            }"#}
            </style>
            <div class="video-placeholder-modal">
                <div class="play-icon">{"▶"}</div>
                <p><strong>{"Professional Demo Reel"}</strong></p>
                <p class="reel-note">{format!("This showcases {}'s best work including:", config::STUDIO_NAME)}</p>
                <ul>
                    <li>{"MS Production Logo Animation (4K)"}</li>
                    <li>{"Motion Graphics & Animations"}</li>
                    <li>{"Color Grading Examples"}</li>
                    <li>{"Social Media Content Creation"}</li>
                    <li>{"Commercial Projects"}</li>
                    <li>{"Audio Enhancement Work"}</li>
                </ul>
                <p class="reel-contact">
                    {format!("Contact us at {} to see our full portfolio", config::contact_email())}
                </p>
            </div>
        </Modal>
    }
}
