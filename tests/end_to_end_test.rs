use anyhow::Result;
use cv_tex::{CvError, GenerationConfig, GenerationEngine, LocalStorage, ResumePipeline};
use tempfile::TempDir;

fn engine_for(
    temp_dir: &TempDir,
    input: &str,
    output: &str,
) -> GenerationEngine<ResumePipeline<LocalStorage, GenerationConfig>> {
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap().to_string());
    let pipeline = ResumePipeline::new(storage, GenerationConfig::new(input, output));
    GenerationEngine::new(pipeline)
}

const FULL_RESUME: &str = r#"{
  "basics": {
    "name": "Ada Lovelace",
    "label": "Software Engineer",
    "email": "ada@example.com",
    "location": {"city": "London", "region": "UK"},
    "profiles": [
      {"network": "LinkedIn", "url": "https://linkedin.com/in/ada"},
      {"network": "GitHub", "url": "https://github.com/ada"},
      {"network": "Website", "url": "https://ada.dev"},
      {"network": "Blog", "url": "https://blog.ada.dev"}
    ]
  },
  "work": [
    {
      "name": "Analytical Engines Ltd",
      "position": "Lead Engineer",
      "location": "London",
      "startDate": "2020-04",
      "highlights": ["Reduced build time by 40%", "Mentored 5 engineers"]
    }
  ],
  "education": [
    {
      "institution": "University of London",
      "location": "London",
      "area": "Mathematics",
      "studyType": "BSc",
      "startDate": "2012-09",
      "endDate": "2016-06",
      "score": "First Class",
      "courses": ["Number Theory"]
    }
  ],
  "certificates": [{"name": "CKA", "issuer": "CNCF", "date": "2022"}],
  "skills": [{"name": "Languages", "keywords": ["Rust", "C++"]}],
  "projects": [
    {"name": "engine_sim", "url": "https://github.com/ada/engine", "highlights": ["Simulates the engine"]},
    {"name": "Notes", "url": "https://notes.ada.dev/index", "blog": "https://blog.ada.dev/notes"}
  ],
  "publications": [
    {"name": "Sketch of the Engine", "publisher": "Taylor's Memoirs", "releaseDate": "Oct 1843", "summary": "Notes & translation"}
  ],
  "languages": [
    {"language": "English", "fluency": "Native"},
    {"language": "French", "fluency": "Fluent"}
  ]
}"#;

#[tokio::test]
async fn test_full_resume_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("resume.json"), FULL_RESUME)?;

    let output_path = engine_for(&temp_dir, "resume.json", "cv.tex").run().await?;
    assert_eq!(output_path, "cv.tex");

    let tex = std::fs::read_to_string(temp_dir.path().join("cv.tex"))?;

    assert!(tex.starts_with("\\documentclass{muratcan_cv}"));
    assert!(tex.contains("\\setlinkedinaccount{https://linkedin.com/in/ada}"));
    assert!(tex.contains("\\setblog{https://blog.ada.dev}"));
    assert!(tex.contains("\\datedexperience{Analytical Engines Ltd}{Apr 2020 - Present}"));
    assert!(tex.contains("     Reduced build time by 40\\%"));
    assert!(tex.contains("\\datedexperience{BSc - Mathematics}{Sep 2012 - Jun 2016}"));
    assert!(tex.contains("\\textbf{CKA} - CNCF, 2022"));
    assert!(tex.contains("\\createskill{Languages}{Rust \\cpshalf C++}"));
    assert!(tex.contains("\\href{https://github.com/ada/engine}{Repo}"));
    assert!(tex.contains(
        "\\href{https://notes.ada.dev/index}{notes.ada.dev/index} | \\href{https://blog.ada.dev/notes}{Blog}"
    ));
    assert!(tex.contains("\\datedexperience{Sketch of the Engine}{Oct 1843}"));
    assert!(tex.contains("\\textbf{English} - Native\n     \\hspace{2cm}\n"));
    assert!(tex.ends_with("\n\\end{document}"));

    let headings: Vec<&str> = tex
        .lines()
        .filter(|line| line.starts_with("\\section{"))
        .collect();
    assert_eq!(
        headings,
        vec![
            "\\section{Experience}",
            "\\section{Education}",
            "\\section{Certifications}",
            "\\section{Skills}",
            "\\section{Projects}",
            "\\section{Articles}",
            "\\section{Languages}",
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_minimal_resume_has_no_sections() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("resume.json"),
        r#"{"basics": {"name": "A&B"}, "work": [], "publications": []}"#,
    )?;

    engine_for(&temp_dir, "resume.json", "cv.tex").run().await?;
    let tex = std::fs::read_to_string(temp_dir.path().join("cv.tex"))?;

    assert!(tex.contains("\\setname{A\\&B}{}"));
    assert!(tex.ends_with("\\end{document}"));
    assert!(!tex.contains("\\section"));
    assert!(!tex.contains("\\coloredbullet"));

    Ok(())
}

#[tokio::test]
async fn test_missing_input_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let err = engine_for(&temp_dir, "missing.json", "cv.tex")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CvError::InputReadError { .. }));
    assert!(!temp_dir.path().join("cv.tex").exists());
    Ok(())
}

#[tokio::test]
async fn test_failed_run_leaves_existing_output_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("resume.json"), "{ not json")?;
    std::fs::write(temp_dir.path().join("cv.tex"), "previous build")?;

    let err = engine_for(&temp_dir, "resume.json", "cv.tex")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CvError::ParseError { .. }));
    assert_eq!(
        std::fs::read_to_string(temp_dir.path().join("cv.tex"))?,
        "previous build"
    );
    Ok(())
}

#[tokio::test]
async fn test_wrong_field_shape_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("resume.json"),
        r#"{"basics": {"name": "Ada"}, "work": {"name": "not an array"}}"#,
    )?;

    let result = engine_for(&temp_dir, "resume.json", "cv.tex").run().await;

    assert!(matches!(result, Err(CvError::ParseError { .. })));
    assert!(!temp_dir.path().join("cv.tex").exists());
    Ok(())
}

#[tokio::test]
async fn test_null_education_end_date_renders_empty() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("resume.json"),
        r#"{
            "basics": {"name": "Ada"},
            "work": [{"name": "Acme", "startDate": null, "endDate": null}],
            "education": [{
                "institution": "MIT",
                "studyType": "MSc",
                "area": "CS",
                "startDate": "2019-09",
                "endDate": null
            }]
        }"#,
    )?;

    engine_for(&temp_dir, "resume.json", "cv.tex").run().await?;
    let tex = std::fs::read_to_string(temp_dir.path().join("cv.tex"))?;

    assert!(tex.contains("\\datedexperience{Acme}{ - Present}"));
    assert!(tex.contains("\\datedexperience{MSc - CS}{Sep 2019 - }"));
    Ok(())
}

#[tokio::test]
async fn test_missing_output_directory_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("resume.json"), r#"{"basics": {"name": "Ada"}}"#)?;

    let err = engine_for(&temp_dir, "resume.json", "no-such-dir/cv.tex")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, CvError::OutputWriteError { ref path, .. } if path == "no-such-dir/cv.tex"));
    assert!(!temp_dir.path().join("no-such-dir").exists());
    Ok(())
}
