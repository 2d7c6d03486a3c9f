use crate::domain::model::{RenderedDocument, Resume};
use crate::latex::header::render_header;
use crate::latex::sections::SectionKind;
use crate::latex::RenderOptions;

pub const END_DOCUMENT: &str = r"\end{document}";

/// Header, every non-empty section in fixed order, then `\end{document}`,
/// joined by newlines.
pub fn render_document(resume: &Resume, options: &RenderOptions) -> RenderedDocument {
    let mut pieces = vec![render_header(&resume.basics, options)];
    let mut sections = Vec::new();

    for kind in SectionKind::ALL {
        let block = kind.render(resume, options);
        if block.is_empty() {
            tracing::debug!("Skipping empty section: {}", kind.heading());
            continue;
        }
        tracing::debug!("Rendered section {} ({} bytes)", kind.heading(), block.len());
        sections.push(kind.heading());
        pieces.push(block);
    }

    pieces.push(END_DOCUMENT.to_string());

    RenderedDocument {
        content: pieces.join("\n"),
        sections,
    }
}
