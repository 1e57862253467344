use web_sys::MouseEvent;
use yew::prelude::*;

use crate::utils::scroll;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Opens the demo-reel modal.
    pub on_show_demo: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_cta = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section("contact");
    });

    let on_demo_click = {
        let on_show_demo = props.on_show_demo.clone();
        Callback::from(move |_: MouseEvent| on_show_demo.emit(()))
    };

    html! {
        <section id="home" class="hero">
            <style>
            {r#".hero {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 6rem 2rem 4rem;
                background: radial-gradient(circle at 30% 20%, rgba(255, 107, 53, 0.15), transparent 45%),
                            radial-gradient(circle at 75% 70%, rgba(255, 138, 80, 0.1), transparent 50%);
            }
            .hero-title {
                font-size: clamp(2.2rem, 6vw, 4rem);
                line-height: 1.15;
                margin-bottom: 1rem;
            }
            .hero-title span {
                color: var(--color-primary);
            }
            .hero-subtitle {
                color: var(--color-text-secondary);
                max-width: 560px;
                margin-bottom: 2.5rem;
            }
            .hero-cta {
                background: var(--color-primary);
                color: white;
                border: none;
                border-radius: 30px;
                padding: 0.9rem 2.4rem;
                font-weight: 600;
                cursor: pointer;
                transition: transform 0.3s ease, opacity 0.3s ease;
            }
            .hero-cta:hover {
                transform: translateY(-2px);
                opacity: 0.9;
            }
            .video-placeholder {
                margin-top: 3.5rem;
                width: min(560px, 90%);
                aspect-ratio: 16 / 9;
                border: 2px dashed var(--color-border);
                border-radius: 12px;
                background: linear-gradient(135deg, #1a1a1a, #2d2d2d);
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                cursor: pointer;
                transition: border-color 0.3s ease;
            }
            .video-placeholder:hover {
                border-color: var(--color-primary);
            }
            .video-placeholder .play-icon {
                font-size: 48px;
                margin-bottom: 0.5rem;
            }
            .video-placeholder p {
                color: var(--color-text-secondary);
                font-size: 0.9rem;
            }"#}
            </style>
            <h1 class="hero-title">{"Stories, cut "}<span>{"frame-perfect"}</span></h1>
            <p class="hero-subtitle">
                {"Professional video editing, motion graphics, color grading and audio post-production for creators, brands and filmmakers."}
            </p>
            <button class="hero-cta" onclick={on_cta}>{"Start Your Project"}</button>
            <div class="video-placeholder" onclick={on_demo_click}>
                <div class="play-icon">{"▶"}</div>
                <p>{"Watch our demo reel"}</p>
            </div>
        </section>
    }
}
