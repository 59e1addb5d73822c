use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Speedsolving Canada"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/competitions" attr:class="navbar__link">
                        "Competitions"
                    </A>
                    <A href="/documents" attr:class="navbar__link">
                        "Documents"
                    </A>
                    <a href="mailto:info@speedsolvingcanada.org" class="navbar__link navbar__link--cta">
                        "Contact"
                    </a>
                </div>
            </div>
        </nav>
    }
}
