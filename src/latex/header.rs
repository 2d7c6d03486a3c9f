use crate::domain::model::Basics;
use crate::latex::escape::escape_latex;
use crate::latex::RenderOptions;

/// Profile URLs picked out of `basics.profiles` by network name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileLinks {
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub blog: String,
}

impl ProfileLinks {
    /// Case-insensitive match on the network name; a later profile for the
    /// same network replaces an earlier one.
    pub fn from_basics(basics: &Basics) -> Self {
        let mut links = Self::default();
        for profile in &basics.profiles {
            let slot = match profile.network.to_lowercase().as_str() {
                "linkedin" => &mut links.linkedin,
                "github" => &mut links.github,
                "website" => &mut links.website,
                "blog" => &mut links.blog,
                _ => continue,
            };
            *slot = profile.url.clone();
        }
        links
    }
}

/// Preamble, personal details and the header view. URLs are emitted raw.
pub fn render_header(basics: &Basics, options: &RenderOptions) -> String {
    let links = ProfileLinks::from_basics(basics);
    let location = &basics.location;

    let lines = [
        format!(r"\documentclass{{{}}}", options.document_class),
        String::new(),
        format!(r"\setname{{{}}}{{}}", escape_latex(&basics.name)),
        format!(r"\setposition{{{}}}", escape_latex(&basics.label)),
        format!(
            r"\setaddress{{{}, {}}}",
            escape_latex(&location.city),
            escape_latex(&location.region)
        ),
        format!(r"\setmail{{{}}}", escape_latex(&basics.email)),
        format!(r"\setlinkedinaccount{{{}}}", links.linkedin),
        format!(r"\setgithubaccount{{{}}}", links.github),
        format!(r"\setwebsite{{{}}}", links.website),
        format!(r"\setblog{{{}}}", links.blog),
        format!(r"\setthemecolor{{{}}}", options.theme_color),
        String::new(),
        r"\begin{document}".to_string(),
        String::new(),
        "%Create header".to_string(),
        r"\headerview".to_string(),
        r"\vspace{1ex}".to_string(),
    ];
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Location, Profile};

    fn profile(network: &str, url: &str) -> Profile {
        Profile {
            network: network.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_profile_links_case_insensitive_last_wins() {
        let basics = Basics {
            profiles: vec![
                profile("GitHub", "https://github.com/old"),
                profile("LinkedIn", "https://linkedin.com/in/ada"),
                profile("twitter", "https://twitter.com/ada"),
                profile("github", "https://github.com/new"),
                profile("BLOG", "https://blog.example.com"),
            ],
            ..Default::default()
        };

        let links = ProfileLinks::from_basics(&basics);
        assert_eq!(links.github, "https://github.com/new");
        assert_eq!(links.linkedin, "https://linkedin.com/in/ada");
        assert_eq!(links.blog, "https://blog.example.com");
        assert_eq!(links.website, "");
    }

    #[test]
    fn test_render_header_escapes_text_not_urls() {
        let basics = Basics {
            name: "A&B".to_string(),
            label: "R&D Engineer".to_string(),
            email: "first_last@example.com".to_string(),
            location: Location {
                city: "Istanbul".to_string(),
                region: "TR".to_string(),
            },
            profiles: vec![profile("website", "https://example.com/~me_site")],
        };

        let header = render_header(&basics, &RenderOptions::default());

        assert!(header.starts_with("\\documentclass{muratcan_cv}\n\n"));
        assert!(header.contains("\\setname{A\\&B}{}"));
        assert!(header.contains("\\setposition{R\\&D Engineer}"));
        assert!(header.contains("\\setaddress{Istanbul, TR}"));
        assert!(header.contains("\\setmail{first\\_last@example.com}"));
        assert!(header.contains("\\setwebsite{https://example.com/~me_site}"));
        assert!(header.contains("\\setthemecolor{MidnightBlue}"));
        assert!(header.ends_with("\\begin{document}\n\n%Create header\n\\headerview\n\\vspace{1ex}"));
    }

    #[test]
    fn test_render_header_empty_basics() {
        let header = render_header(&Basics::default(), &RenderOptions::default());
        assert!(header.contains("\\setname{}{}"));
        assert!(header.contains("\\setaddress{, }"));
        assert!(header.contains("\\setlinkedinaccount{}"));
    }

    #[test]
    fn test_render_header_uses_options() {
        let options = RenderOptions {
            document_class: "other_cv".to_string(),
            theme_color: "ForestGreen".to_string(),
            ..Default::default()
        };
        let header = render_header(&Basics::default(), &options);
        assert!(header.starts_with("\\documentclass{other_cv}"));
        assert!(header.contains("\\setthemecolor{ForestGreen}"));
    }
}
