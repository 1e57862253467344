use yew::prelude::*;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "✂️",
        "Video Editing",
        "Full edits from raw footage to delivery: story structure, pacing, transitions and platform-ready exports.",
    ),
    (
        "🎞️",
        "Motion Graphics",
        "Animated titles, kinetic typography and logo reveals built in After Effects.",
    ),
    (
        "🎨",
        "Color Grading",
        "Cinematic looks and shot matching in DaVinci Resolve, from correction to final grade.",
    ),
    (
        "🔊",
        "Audio Enhancement",
        "Noise cleanup, mixing and sound design so every word lands clearly.",
    ),
    (
        "📱",
        "Social Media Content",
        "Short-form packages cut for Reels, Shorts and TikTok with captions and hooks.",
    ),
    (
        "🏷️",
        "Logo Animation",
        "Brand idents and stingers delivered in 4K for cinema, web and broadcast.",
    ),
];

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="services-section">
            <style>
            {r#".services-section {
                padding: 6rem 2rem;
                max-width: 1080px;
                margin: 0 auto;
            }
            .services-section h2 {
                font-size: 2rem;
                text-align: center;
                margin-bottom: 2.5rem;
            }
            .services-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                gap: 1.5rem;
            }
            .service-card {
                background: var(--color-surface);
                border: 1px solid var(--color-border);
                border-radius: 12px;
                padding: 2rem;
                transition: transform 0.3s ease, border-color 0.3s ease;
            }
            .service-card:hover {
                transform: translateY(-4px);
                border-color: rgba(255, 107, 53, 0.4);
            }
            .service-card .service-icon {
                font-size: 2rem;
                margin-bottom: 1rem;
            }
            .service-card h3 {
                margin-bottom: 0.6rem;
            }
            .service-card p {
                color: var(--color-text-secondary);
                font-size: 0.95rem;
            }"#}
            </style>
            <h2>{"What We Do"}</h2>
            <div class="services-grid">
                { for SERVICES.iter().map(|&(icon, title, blurb)| html! {
                    <div class="service-card">
                        <div class="service-icon">{icon}</div>
                        <h3>{title}</h3>
                        <p>{blurb}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
