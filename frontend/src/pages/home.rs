use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Delivery"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Order food or manage rider leave"
                    </p>
                    <div class="mt-5 max-w-md mx-auto flex flex-col gap-3 sm:flex-row sm:justify-center lg:mt-8">
                        <a href="/cart" class="flex items-center justify-center px-8 py-3 rounded-md text-base font-medium text-action-primary-text bg-action-primary-bg">
                            "Go to cart"
                        </a>
                        <a href="/leave" class="flex items-center justify-center px-8 py-3 rounded-md text-base font-medium text-fg bg-surface-muted">
                            "Submit leave"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}
