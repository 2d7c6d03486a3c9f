//! LaTeX rendering for the `muratcan_cv` document class.
//!
//! Every generator here is a pure function over a borrowed [`Resume`]
//! slice; [`document::render_document`] stitches them together.
//!
//! [`Resume`]: crate::domain::model::Resume

pub mod date;
pub mod document;
pub mod escape;
pub mod header;
pub mod sections;

pub use date::format_date;
pub use document::render_document;
pub use escape::escape_latex;

pub const DEFAULT_DOCUMENT_CLASS: &str = "muratcan_cv";
pub const DEFAULT_THEME_COLOR: &str = "MidnightBlue";
pub const DEFAULT_REPOSITORY_HOSTS: [&str; 3] = ["github.com", "gitlab.com", "bitbucket.org"];

/// Template parameters that are not part of the resume itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub document_class: String,
    pub theme_color: String,
    /// Project URLs containing one of these hosts are labelled "Repo".
    pub repository_hosts: Vec<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            document_class: DEFAULT_DOCUMENT_CLASS.to_string(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            repository_hosts: DEFAULT_REPOSITORY_HOSTS
                .iter()
                .map(|host| host.to_string())
                .collect(),
        }
    }
}
