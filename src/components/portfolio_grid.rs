use web_sys::MouseEvent;
use yew::prelude::*;

use crate::portfolio::{catalog, PortfolioItem, ProjectCategory, ProjectFilter};

#[derive(Properties, PartialEq)]
pub struct PortfolioGridProps {
    /// Opens the project modal for the clicked item.
    pub on_view: Callback<PortfolioItem>,
}

/// Portfolio section: filter bar plus the card grid. Filtering is plain
/// state; the grid re-renders with only the matching items.
#[function_component(PortfolioGrid)]
pub fn portfolio_grid(props: &PortfolioGridProps) -> Html {
    let filter = use_state(ProjectFilter::default);

    let filter_button = |target: ProjectFilter, label: &'static str| -> Html {
        let filter = filter.clone();
        let active = *filter == target;
        let onclick = Callback::from(move |_: MouseEvent| filter.set(target));
        html! {
            <button class={classes!("filter-btn", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    let visible: Vec<&PortfolioItem> = catalog()
        .iter()
        .filter(|item| item.matches(*filter))
        .collect();

    html! {
        <section id="portfolio" class="portfolio-section">
            <style>
            {r#".portfolio-section {
                padding: 6rem 2rem;
                max-width: 1080px;
                margin: 0 auto;
            }
            .portfolio-section h2 {
                font-size: 2rem;
                text-align: center;
                margin-bottom: 2rem;
            }
            .portfolio-filters {
                display: flex;
                flex-wrap: wrap;
                gap: 0.6rem;
                justify-content: center;
                margin-bottom: 2.5rem;
            }
            .filter-btn {
                background: none;
                border: 1px solid var(--color-border);
                color: var(--color-text-secondary);
                border-radius: 20px;
                padding: 0.45rem 1.2rem;
                cursor: pointer;
                transition: all 0.3s ease;
            }
            .filter-btn:hover {
                border-color: var(--color-primary);
                color: var(--color-primary);
            }
            .filter-btn.active {
                background: var(--color-primary);
                border-color: var(--color-primary);
                color: white;
            }
            .portfolio-grid {
                display: grid;
                grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                gap: 1.5rem;
            }
            .portfolio-item {
                background: var(--color-surface);
                border: 1px solid var(--color-border);
                border-radius: 12px;
                overflow: hidden;
                transition: transform 0.3s ease;
            }
            .portfolio-item:hover {
                transform: translateY(-4px);
            }
            .portfolio-thumb {
                height: 160px;
                background: linear-gradient(135deg, rgba(255, 107, 53, 0.6), rgba(255, 138, 80, 0.35));
                display: flex;
                align-items: center;
                justify-content: center;
                color: white;
                font-weight: 600;
            }
            .portfolio-item .item-body {
                padding: 1.4rem;
            }
            .portfolio-item h3 {
                margin-bottom: 0.5rem;
            }
            .portfolio-item p {
                color: var(--color-text-secondary);
                font-size: 0.92rem;
                margin-bottom: 1rem;
            }
            .portfolio-item .tags {
                display: flex;
                flex-wrap: wrap;
                gap: 0.4rem;
                margin-bottom: 1.2rem;
            }
            .portfolio-item .tag {
                background: rgba(255, 107, 53, 0.1);
                color: var(--color-primary);
                border: 1px solid rgba(255, 107, 53, 0.2);
                border-radius: 12px;
                padding: 3px 10px;
                font-size: 12px;
            }
            .portfolio-item .btn {
                background: none;
                border: 1px solid var(--color-primary);
                color: var(--color-primary);
                border-radius: 8px;
                padding: 0.5rem 1.2rem;
                cursor: pointer;
                transition: all 0.3s ease;
            }
            .portfolio-item .btn:hover {
                background: var(--color-primary);
                color: white;
            }"#}
            </style>
            <h2>{"Selected Work"}</h2>
            <div class="portfolio-filters">
                { filter_button(ProjectFilter::All, "All") }
                { for ProjectCategory::ALL.iter().map(|&category| {
                    filter_button(ProjectFilter::Category(category), category.label())
                }) }
            </div>
            <div class="portfolio-grid">
                { for visible.iter().map(|item| {
                    let item = (*item).clone();
                    let on_view = {
                        let on_view = props.on_view.clone();
                        let item = item.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            on_view.emit(item.clone());
                        })
                    };
                    html! {
                        <div class="portfolio-item" data-category={item.category}>
                            <div class="portfolio-thumb">{item.category}</div>
                            <div class="item-body">
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                                <div class="tags">
                                    { for item.tags.iter().map(|tag| html! {
                                        <span class="tag">{*tag}</span>
                                    }) }
                                </div>
                                <button class="btn" onclick={on_view}>{"View Project"}</button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
