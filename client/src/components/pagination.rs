//! Previous/next pager shared by the paginated listings.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    on_prev: Callback<()>,
    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination">
                <button
                    class="cyber-button"
                    disabled=move || page.get() <= 1
                    on:click=move |_| on_prev.run(())
                >
                    "‹ Prev"
                </button>
                <span class="pagination__status">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="cyber-button"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| on_next.run(())
                >
                    "Next ›"
                </button>
            </div>
        </Show>
    }
}
