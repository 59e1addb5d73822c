use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container" style="padding: 2rem; max-width: 1200px; margin: 0 auto;">
            <div style="text-align: center; margin-bottom: 3rem;">
                <h1 style="font-size: 3rem; margin-bottom: 1rem;">"Speedsolving Canada"</h1>
                <p style="font-size: 1.2rem; color: #666; margin-bottom: 2rem;">
                    "The national federation for competitive puzzle solving"
                </p>
            </div>

            <div style="display: flex; gap: 2rem; justify-content: center; margin-bottom: 3rem;">
                <A href="/competitions">
                    <button class="btn-primary">"Find a Competition"</button>
                </A>
                <A href="/documents">
                    <button class="btn-primary">"Organization Documents"</button>
                </A>
            </div>

            <div style="margin-top: 3rem; max-width: 700px; margin-left: auto; margin-right: auto;">
                <h2 style="text-align: center; margin-bottom: 2rem;">"What we do"</h2>
                <p style="color: #444; line-height: 1.6;">
                    "We support officially sanctioned speedsolving competitions across the
                    country, from local weekend meets to the national championship. Every
                    listed competition is open to the public, whether you average ten
                    seconds or ten minutes."
                </p>
            </div>

            <div style="text-align: center; margin-top: 4rem;">
                <p style="color: #888;">
                    "Questions? Reach us at "
                    <a href="mailto:info@speedsolvingcanada.org">"info@speedsolvingcanada.org"</a>
                </p>
            </div>
        </div>
    }
}
