use crate::controller::{SearchController, SearchOutput};
use crate::drop_zone::DropZone;
use crate::image_grid::ImageGrid;
use crate::search_bar::SearchBar;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let controller = SearchController::new();
    let output = controller.output();

    view! {
        <div style="display: flex; flex-direction: column; min-height: 100vh; background-color: #161618;">
            <SearchBar controller=controller />
            <main style="flex: 1; padding-top: 60px; color: white;">
                <DropZone controller=controller />
                <div style="padding: 1rem;">
                    {move || match output.get() {
                        SearchOutput::Idle => ().into_any(),
                        SearchOutput::Message(message) => {
                            view! { <p>{message}</p> }.into_any()
                        }
                        SearchOutput::Results(items) => {
                            view! { <ImageGrid items=items /> }.into_any()
                        }
                    }}
                </div>
            </main>
        </div>
    }
}
