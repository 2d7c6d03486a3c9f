use crate::domain::model::{
    Certificate, Education, Language, Project, Publication, Resume, Skill, Work,
};
use crate::latex::date::format_date;
use crate::latex::escape::escape_latex;
use crate::latex::RenderOptions;

const NUMBER_WORDS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// The body sections of the CV, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Education,
    Certifications,
    Skills,
    Projects,
    Publications,
    Languages,
}

impl SectionKind {
    pub const ALL: [SectionKind; 7] = [
        SectionKind::Experience,
        SectionKind::Education,
        SectionKind::Certifications,
        SectionKind::Skills,
        SectionKind::Projects,
        SectionKind::Publications,
        SectionKind::Languages,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            SectionKind::Experience => "Experience",
            SectionKind::Education => "Education",
            SectionKind::Certifications => "Certifications",
            SectionKind::Skills => "Skills",
            SectionKind::Projects => "Projects",
            SectionKind::Publications => "Articles",
            SectionKind::Languages => "Languages",
        }
    }

    /// Render this section, or an empty string when it has no entries.
    pub fn render(self, resume: &Resume, options: &RenderOptions) -> String {
        match self {
            SectionKind::Experience => render_experience(&resume.work),
            SectionKind::Education => render_education(&resume.education),
            SectionKind::Certifications => render_certifications(&resume.certificates),
            SectionKind::Skills => render_skills(&resume.skills),
            SectionKind::Projects => render_projects(&resume.projects, &options.repository_hosts),
            SectionKind::Publications => render_publications(&resume.publications),
            SectionKind::Languages => render_languages(&resume.languages),
        }
    }
}

fn section_start(kind: SectionKind) -> Vec<String> {
    vec!["%".to_string(), format!(r"\section{{{}}}", kind.heading())]
}

/// `\coloredbullet` followed by the escaped text and a blank line.
fn push_bullet(lines: &mut Vec<String>, indent: &str, text: &str) {
    lines.push(format!(r"{}\coloredbullet\ %", indent));
    lines.push(format!("     {}", escape_latex(text)));
    lines.push(String::new());
}

pub fn render_experience(work: &[Work]) -> String {
    if work.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Experience);

    for job in work {
        let start = format_date(&job.start_date);
        let end = match job.end_date.as_deref() {
            Some(end) if !end.is_empty() => format_date(end),
            _ => "Present".to_string(),
        };

        lines.push("    %".to_string());
        lines.push(format!(
            r"    \datedexperience{{{}}}{{{} - {}}}",
            escape_latex(&job.name),
            start,
            end
        ));
        lines.push(format!(
            r"    \explanation{{{}}}{{{}}}",
            escape_latex(&job.position),
            escape_latex(&job.location)
        ));
        lines.push(r"    \explanationdetail{".to_string());
        lines.push(r"    \smallskip".to_string());

        for (i, highlight) in job.highlights.iter().enumerate() {
            push_bullet(&mut lines, "     ", highlight);
            if i + 1 < job.highlights.len() {
                lines.push(r"    \smallskip".to_string());
            }
        }

        lines.push(r"     \smallskip".to_string());
        lines.push("     }".to_string());
    }

    lines.join("\n")
}

pub fn render_education(education: &[Education]) -> String {
    if education.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Education);

    for edu in education {
        let start = format_date(&edu.start_date);
        let end = format_date(&edu.end_date);
        let title = format!("{} - {}", edu.study_type, edu.area);

        lines.push(format!(
            r"    \datedexperience{{{}}}{{{} - {}}}",
            escape_latex(&title),
            start,
            end
        ));
        lines.push(format!(
            r"    \explanation{{{}}}{{{}}}",
            escape_latex(&edu.institution),
            escape_latex(&edu.location)
        ));
        lines.push(r"    \explanationdetail{".to_string());
        lines.push(r"    \smallskip".to_string());

        if let Some(score) = edu.score.as_deref().filter(|s| !s.is_empty()) {
            push_bullet(&mut lines, "     ", score);
            lines.push(r"    \smallskip".to_string());
        }

        for course in &edu.courses {
            push_bullet(&mut lines, "     ", course);
            lines.push(r"    \smallskip".to_string());
        }

        lines.push("     }".to_string());
    }

    lines.join("\n")
}

pub fn render_certifications(certificates: &[Certificate]) -> String {
    if certificates.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Certifications);
    lines.push(r"    \explanationdetail{".to_string());

    for cert in certificates {
        lines.push(r"    \smallskip".to_string());
        lines.push(r"    \coloredbullet\ %".to_string());
        // date is emitted raw
        lines.push(format!(
            r"     \textbf{{{}}} - {}, {}",
            escape_latex(&cert.name),
            escape_latex(&cert.issuer),
            cert.date
        ));
        lines.push(String::new());
    }

    lines.push(r"     \smallskip".to_string());
    lines.push("     }".to_string());

    lines.join("\n")
}

/// Word used in generated command names: `\skillone`, `\skilltwo`, ...
/// Past ten the decimal number is used instead.
pub fn num_to_word(n: usize) -> String {
    NUMBER_WORDS
        .get(n)
        .map(|word| word.to_string())
        .unwrap_or_else(|| n.to_string())
}

pub fn render_skills(skills: &[Skill]) -> String {
    if skills.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Skills);

    for (i, skill) in skills.iter().enumerate() {
        let keywords = skill
            .keywords
            .iter()
            .map(|keyword| escape_latex(keyword))
            .collect::<Vec<_>>()
            .join(r" \cpshalf ");
        lines.push(format!(
            r"    \newcommand{{\skill{}}}{{\createskill{{{}}}{{{}}}}}",
            num_to_word(i + 1),
            escape_latex(&skill.name),
            keywords
        ));
        lines.push("    %".to_string());
    }

    let skill_list = (1..=skills.len())
        .map(|i| format!(r"\skill{}", num_to_word(i)))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!(r"    \createskills{{{}}}", skill_list));
    lines.push(r"    \vspace{-3mm}".to_string());

    lines.join("\n")
}

/// Display text for a project link: "Repo" for code hosts, otherwise the
/// URL without its scheme, escaped.
pub fn project_link_text(url: &str, repository_hosts: &[String]) -> String {
    if repository_hosts.iter().any(|host| url.contains(host.as_str())) {
        return "Repo".to_string();
    }

    let display = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    escape_latex(display)
}

pub fn render_projects(projects: &[Project], repository_hosts: &[String]) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Projects);

    for project in projects {
        lines.push("     %".to_string());
        lines.push(format!(
            r"    \datedexperience{{{}}}{{}}",
            escape_latex(&project.name)
        ));

        let link = format!(
            r"\href{{{}}}{{{}}}",
            project.url,
            project_link_text(&project.url, repository_hosts)
        );
        match project.blog.as_deref().filter(|blog| !blog.is_empty()) {
            Some(blog) => lines.push(format!(
                r"    \explanation{{{} | \href{{{}}}{{Blog}}}}{{}}",
                link, blog
            )),
            None => lines.push(format!(r"    \explanation{{{}}}{{}}", link)),
        }
        lines.push(r"    \explanationdetail{".to_string());
        lines.push(r"    \smallskip".to_string());

        for highlight in &project.highlights {
            push_bullet(&mut lines, "    ", highlight);
            lines.push(r"    \smallskip".to_string());
        }

        lines.push("     }".to_string());
    }

    lines.join("\n")
}

pub fn render_publications(publications: &[Publication]) -> String {
    if publications.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Publications);

    for publication in publications {
        lines.push("     %".to_string());
        // releaseDate is already a display string
        lines.push(format!(
            r"    \datedexperience{{{}}}{{{}}}",
            escape_latex(&publication.name),
            publication.release_date
        ));
        lines.push(format!(
            r"    \explanation{{{}}}{{}}",
            escape_latex(&publication.publisher)
        ));
        lines.push(r"    \explanationdetail{".to_string());
        lines.push(r"    \smallskip".to_string());

        if let Some(summary) = publication.summary.as_deref().filter(|s| !s.is_empty()) {
            push_bullet(&mut lines, "    ", summary);
            lines.push(r"    \smallskip".to_string());
        }

        lines.push("     }".to_string());
    }

    lines.join("\n")
}

pub fn render_languages(languages: &[Language]) -> String {
    if languages.is_empty() {
        return String::new();
    }

    let mut lines = section_start(SectionKind::Languages);
    lines.push(r"\explanationdetail{".to_string());

    let items = languages
        .iter()
        .map(|lang| {
            format!(
                "    \\coloredbullet\\ %\n     \\textbf{{{}}} - {}",
                escape_latex(&lang.language),
                escape_latex(&lang.fluency)
            )
        })
        .collect::<Vec<_>>();
    lines.push(items.join("\n     \\hspace{2cm}\n"));
    lines.push("     }".to_string());

    lines.join("\n")
}
