use crate::controller::SearchController;
use crate::text_search;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SearchBar(controller: SearchController) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    // Empty queries still trigger the flow so it can show its prompt.
    let submit = move || spawn_local(text_search::run(controller, query.get()));

    let on_key_down = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" {
            submit();
        }
    };

    view! {
        <header style="
            height: 60px;
            background-color: #646472;
            color: white;
            padding: 0rem 1rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 1000;
            font-size: 18px;
        ">
            <h1>"Image Search"</h1>
            <input
                type="search"
                placeholder="Search..."
                prop:value=query
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=on_key_down
                style="
                    padding: 0.15rem;
                    font-size: 1rem;
                    border-radius: 4px;
                    border: none;
                    width: 400px;
                "
            />
            <button
                on:click=move |_| submit()
                style="
                    padding: 0.3rem 0.75rem;
                    font-size: 1rem;
                    border-radius: 4px;
                    border: none;
                    background-color: #4caf50;
                    color: white;
                    cursor: pointer;
                "
            >
                "Search"
            </button>
        </header>
    }
}
