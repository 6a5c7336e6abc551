//! The closed set of navigable views.

/// One navigable view. The set is fixed at build time; navigation with a
/// name outside it is a silent no-op, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Page {
    Home,
    About,
    Experience,
    Projects,
    Services,
    Contact,
    Blog,
    /// The article reading view; reached through `post/<id>` routes and
    /// blog-list selection rather than the navigation bar.
    Reading,
}

impl Page {
    /// Every registered view, in navigation order.
    pub const ALL: &[Page] = &[
        Page::Home,
        Page::About,
        Page::Experience,
        Page::Projects,
        Page::Services,
        Page::Contact,
        Page::Blog,
        Page::Reading,
    ];

    /// The page identifier as it appears in fragments and content names.
    pub fn name(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Experience => "experience",
            Page::Projects => "projects",
            Page::Services => "services",
            Page::Contact => "contact",
            Page::Blog => "blog",
            Page::Reading => "reading",
        }
    }

    /// Parse a page identifier. Unknown names are `None`.
    pub fn from_name(name: &str) -> Option<Page> {
        Page::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// Whether a `content/<page>.json` document backs this page.
    /// Home is static, Blog renders the post index, Reading renders an
    /// article document.
    pub fn has_content_document(self) -> bool {
        matches!(
            self,
            Page::About | Page::Experience | Page::Projects | Page::Services | Page::Contact
        )
    }
}
