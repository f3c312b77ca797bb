use leptos::prelude::*;

#[component]
pub fn TitleText(children: Children) -> impl IntoView {
    view! {
        <div class="flex sticky top-0 z-10 items-center py-3 w-full bg-white border-b border-gray-100">
            {children()}
        </div>
    }
}
