use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="animate-spin h-8 w-8 border-t-2 border-green-500 rounded-full"></div>
    }
}

#[component]
pub fn FullScreenSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center w-dvw h-dvh bg-white">
            <Spinner />
        </div>
    }
}
