use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Admin,
    Storefront,
}

impl Section {
    fn title(&self) -> &'static str {
        match self {
            Section::Admin => "Delivery Admin",
            Section::Storefront => "Delivery",
        }
    }

    fn links(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Section::Admin => &[
                ("/leave", "Submit Leave"),
                ("/admin/leave-requests", "Leave Requests"),
            ],
            Section::Storefront => &[("/cart", "Cart"), ("/order", "Checkout")],
        }
    }
}

#[component]
pub fn Header(section: Section) -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">{section.title()}</h1>
                    <nav class="flex space-x-4">
                        {section
                            .links()
                            .iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=*href
                                        class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(section: Section, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header section=section />
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8 gap-3">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
            {label.map(|text| view! { <span class="text-sm text-fg-muted">{text}</span> })}
        </div>
    }
}

fn banner(role: &'static str, tone: &'static str, message: String) -> impl IntoView {
    view! {
        <div role=role class=format!("border px-4 py-3 rounded mb-4 text-sm {}", tone)>
            {message}
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    banner(
        "alert",
        "bg-status-error-bg border-status-error-border text-status-error-text",
        message,
    )
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    banner(
        "status",
        "bg-status-success-bg border-status-success-border text-status-success-text",
        message,
    )
}
