use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page used as the router fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found-page" style="min-height: 60vh; display: flex; align-items: center; justify-content: center; padding: 1rem;">
            <div style="max-width: 480px; width: 100%; text-align: center;">
                <div style="font-size: 6rem; font-weight: 900; color: #cbd5e0; line-height: 1;">
                    "404"
                </div>
                <h1 style="font-size: 2rem; color: #2d3748; margin: 1rem 0;">
                    "Page Not Found"
                </h1>
                <p style="color: #4a5568; margin-bottom: 2rem;">
                    "The page you're looking for doesn't exist or may have been moved."
                </p>
                <div style="display: flex; gap: 1rem; justify-content: center;">
                    <button
                        class="btn-primary"
                        on:click={
                            let navigate = navigate.clone();
                            move |_| {
                                navigate("/", Default::default());
                            }
                        }
                    >
                        "Go Home"
                    </button>
                    <button
                        class="btn-outlined"
                        on:click=move |_| {
                            navigate("/competitions", Default::default());
                        }
                    >
                        "See Competitions"
                    </button>
                </div>
            </div>
        </div>
    }
}
