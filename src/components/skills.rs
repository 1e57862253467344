use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const SKILLS: &[(&str, u32)] = &[
    ("Adobe Premiere Pro", 95),
    ("After Effects", 90),
    ("DaVinci Resolve", 85),
    ("Color Grading", 88),
    ("Motion Graphics", 92),
    ("Audio Post-Production", 80),
];

/// Skill bars that animate from zero to their target width the first time
/// the section scrolls into view (30% visibility threshold).
#[function_component(Skills)]
pub fn skills() -> Html {
    let section_ref = use_node_ref();
    let animated = use_state(|| false);

    {
        let animated = animated.clone();
        let section_ref = section_ref.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, _observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: IntersectionObserverEntry = entry.unchecked_into();
                            if entry.is_intersecting() {
                                animated.set(true);
                            }
                        }
                    },
                );
                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(0.3));
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok();
                if let (Some(observer), Some(element)) =
                    (&observer, section_ref.cast::<Element>())
                {
                    observer.observe(&element);
                }
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    html! {
        <section id="skills" class="skills-section" ref={section_ref}>
            <style>
            {r#".skills-section {
                padding: 6rem 2rem;
                max-width: 720px;
                margin: 0 auto;
            }
            .skills-section h2 {
                font-size: 2rem;
                text-align: center;
                margin-bottom: 2.5rem;
            }
            .skill {
                margin-bottom: 1.4rem;
            }
            .skill-label {
                display: flex;
                justify-content: space-between;
                margin-bottom: 0.4rem;
                color: var(--color-text-secondary);
                font-size: 0.95rem;
            }
            .skill-bar {
                height: 8px;
                background: rgba(255, 255, 255, 0.08);
                border-radius: 4px;
                overflow: hidden;
            }
            .skill-progress {
                height: 100%;
                background: linear-gradient(90deg, var(--color-primary), #ff8a50);
                border-radius: 4px;
                transition: width 1.2s ease-out;
            }"#}
            </style>
            <h2>{"Our Toolkit"}</h2>
            { for SKILLS.iter().map(|&(label, width)| {
                let style = if *animated {
                    format!("width: {width}%;")
                } else {
                    "width: 0;".to_string()
                };
                html! {
                    <div class="skill">
                        <div class="skill-label">
                            <span>{label}</span>
                            <span>{format!("{width}%")}</span>
                        </div>
                        <div class="skill-bar">
                            <div class="skill-progress" {style}></div>
                        </div>
                    </div>
                }
            }) }
        </section>
    }
}
