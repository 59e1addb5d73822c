use leptos::prelude::*;

use crate::documents::{document_href, documents, DocumentKind};

/// Catalogue of by-laws, minutes, policies and corporate filings.
/// Entirely static; the catalogue lives in `crate::documents`.
#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <div class="documents-page">
            <div class="documents-header">
                <h1>"Organization Documents"</h1>
                <p>
                    "Records the federation is required to publish, current and
                    historical. All documents are PDF files."
                </p>
            </div>

            {DocumentKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <section class="documents-section">
                            <h2>{kind.heading()}</h2>
                            <ul class="documents-list">
                                {documents(kind)
                                    .iter()
                                    .map(|document| {
                                        view! {
                                            <li>
                                                <a
                                                    href=document_href(document)
                                                    target="_blank"
                                                    rel="noopener"
                                                >
                                                    {document.name}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
