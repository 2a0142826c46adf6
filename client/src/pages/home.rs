//! Landing page: hero banner, trending topics and top projects.

use leptos::prelude::*;

use crate::mock::catalog::{Highlight, top_projects, trending_topics};
use crate::util::format;

fn highlight_card(item: Highlight, href: String, metric: String, accent: &'static str) -> impl IntoView {
    view! {
        <a href=href class="cyber-card highlight-card">
            <div class="highlight-card__image">
                <img src=item.image alt=item.title.clone()/>
            </div>
            <div class="highlight-card__body">
                <h3 class=format!("highlight-card__title text-{accent}")>{item.title}</h3>
                <p class="muted">{metric}</p>
            </div>
        </a>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <div class="hero">
                <img
                    class="hero__image"
                    src="https://images.unsplash.com/photo-1515630278258-407f66498911?w=1600&h=800&fit=crop"
                    alt="Cyberpunk City"
                />
                <div class="hero__overlay">
                    <h1 class="cyber-heading hero__title">"CYBER_NET" <span class="text-blue">"_2025"</span></h1>
                    <p class="hero__tagline">"Connect. Create. Conquer the Digital Frontier."</p>
                    <a href="/projects" class="cyber-button">
                        "Explore Projects →"
                    </a>
                </div>
            </div>

            <section class="home-section">
                <div class="home-section__head">
                    <h2 class="cyber-heading">"Trending Topics"</h2>
                    <a href="/forum" class="cyber-button">
                        "View All"
                    </a>
                </div>
                <div class="card-grid">
                    {trending_topics()
                        .into_iter()
                        .map(|topic| {
                            let views = format!("{} views", format::count(u64::from(topic.metric)));
                            highlight_card(topic, "/forum".to_owned(), views, "blue")
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__head">
                    <h2 class="cyber-heading">"Top Projects"</h2>
                    <a href="/projects" class="cyber-button">
                        "View All"
                    </a>
                </div>
                <div class="card-grid">
                    {top_projects()
                        .into_iter()
                        .map(|project| {
                            let href = format!("/projects/{}", project.id);
                            let stars = format!("★ {} stars", project.metric);
                            highlight_card(project, href, stars, "purple")
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
