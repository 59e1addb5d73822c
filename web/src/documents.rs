//! Static catalogue of organizational documents served by the site.
//! New filings are added here and the matching PDF is dropped into
//! `public/documents/`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    ByLaws,
    Minutes,
    Policies,
    Corporate,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::ByLaws,
        DocumentKind::Minutes,
        DocumentKind::Policies,
        DocumentKind::Corporate,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            DocumentKind::ByLaws => "By-laws",
            DocumentKind::Minutes => "Meeting Minutes",
            DocumentKind::Policies => "Policies",
            DocumentKind::Corporate => "Corporate Filings",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    pub name: &'static str,
    pub id: &'static str,
}

const BY_LAWS: &[Document] = &[
    Document { name: "By-laws", id: "by-laws" },
    Document { name: "By-laws (v1.0)", id: "by-laws-v1.0" },
    Document { name: "By-laws (v1.1)", id: "by-laws-v1.1" },
];

const MINUTES: &[Document] = &[
    Document {
        name: "Directors' Meeting April 23, 2025",
        id: "directors-meeting-apr-23-2025",
    },
    Document {
        name: "Annual Members' Meeting January 26, 2025",
        id: "annual-members-meeting-jan-26-2025",
    },
    Document {
        name: "Directors' Meeting August 14, 2024",
        id: "directors-meeting-aug-14-2024",
    },
    Document {
        name: "First Members' Meeting May 11, 2024",
        id: "first-members-meeting-may-11-2024",
    },
    Document {
        name: "First Directors' Meeting March 2, 2024",
        id: "first-directors-meeting-mar-2-2024",
    },
];

const POLICIES: &[Document] = &[
    Document {
        name: "Reimbursement Policy",
        id: "reimbursement-policy",
    },
    Document {
        name: "Supported Events Policy",
        id: "supported-events-policy",
    },
    Document {
        name: "Reimbursement Policy (v1.0)",
        id: "reimbursement-policy-v1.0",
    },
];

const CORPORATE: &[Document] = &[Document {
    name: "Certificate of Incorporation",
    id: "certificate-of-incorporation",
}];

pub fn documents(kind: DocumentKind) -> &'static [Document] {
    match kind {
        DocumentKind::ByLaws => BY_LAWS,
        DocumentKind::Minutes => MINUTES,
        DocumentKind::Policies => POLICIES,
        DocumentKind::Corporate => CORPORATE,
    }
}

pub fn document_href(document: &Document) -> String {
    format!("/documents/{}.pdf", document.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_kind_has_at_least_one_document() {
        for kind in DocumentKind::ALL {
            assert!(!documents(kind).is_empty(), "{:?} is empty", kind);
        }
    }

    #[test]
    fn ids_are_unique_across_the_catalogue() {
        let mut seen = HashSet::new();
        for kind in DocumentKind::ALL {
            for document in documents(kind) {
                assert!(seen.insert(document.id), "duplicate id {}", document.id);
            }
        }
    }

    #[test]
    fn hrefs_are_rooted_pdf_paths() {
        for kind in DocumentKind::ALL {
            for document in documents(kind) {
                let href = document_href(document);
                assert!(href.starts_with("/documents/"));
                assert!(href.ends_with(".pdf"));
                assert!(!href.contains(' '), "unescaped space in {}", href);
            }
        }
    }
}
