use crate::results::RenderItem;
use leptos::control_flow::For;
use leptos::prelude::*;

#[component]
pub fn ImageGrid(items: Vec<RenderItem>) -> impl IntoView {
    view! {
        <div style="
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
            gap: 1rem;
            "
        >
            <For
                each=move || items.clone()
                key=|item| item.src.clone()
                children=move |item| view! {
                    <img
                        src=item.src
                        alt=item.alt
                        style="
                            width: 100%;
                            height: 200px;
                            object-fit: cover;
                            border-radius: 8px;
                            display: block;
                        "
                    />
                }
            />
        </div>
    }
}
