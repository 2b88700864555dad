use crate::controller::{SearchController, SearchOutput};
use crate::image_search;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;

#[component]
pub fn DropZone(controller: SearchController) -> impl IntoView {
    let (highlight, set_highlight) = signal(false);
    let (preview, set_preview) = signal(None::<String>);

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_highlight.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_highlight.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_highlight.set(false);

        // Only the first file counts, the rest are ignored.
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));

        match file {
            Some(file) if file.type_().starts_with("image/") => {
                spawn_local(image_search::run(controller, set_preview, file.into()));
            }
            _ => controller.publish(
                controller.begin(),
                SearchOutput::Message("Please drop an image file.".to_string()),
            ),
        }
    };

    let zone_style = move || {
        let mut style = String::from(
            "margin: 1rem; \
             padding: 2rem; \
             border: 2px dashed #ccc; \
             border-radius: 8px; \
             text-align: center; \
             color: white; \
             min-height: 120px; \
             background-size: cover; \
             background-position: center;",
        );
        if highlight.get() {
            style.push_str("border-color: #4caf50; background-color: #2a2a2e;");
        }
        if let Some(url) = preview.get() {
            // The prompt text disappears behind the uploaded image.
            style.push_str(&format!("background-image: url({url}); color: transparent;"));
        }
        style
    };

    view! {
        <div
            style=zone_style
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            "Drop an image here to search for similar ones"
        </div>
    }
}
