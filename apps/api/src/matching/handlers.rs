//! Match endpoint handlers: multipart upload in, profile + comparison out.
//!
//! Two surfaces share one pipeline: the HTML form flow (`GET /`, `POST /`)
//! and the JSON API (`POST /api/v1/match`). A missing file part or an
//! unrecognized extension degrades to empty text by default; strict mode
//! (STRICT_FORMATS) rejects unrecognized extensions instead.

use axum::{
    extract::{Multipart, State},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::fields::{
    self, extract_profile, ExtractedProfile, EMAIL_NOT_FOUND, NAME_NOT_FOUND, PHONE_NOT_FOUND,
};
use crate::extract::loader::{detect_format, load_text};
use crate::matching::{compare, ComparisonResult};
use crate::state::AppState;

/// One uploaded file part, name and bytes as received.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Resume fields as surfaced to clients: absent fields become the literal
/// sentinel strings rather than nulls.
#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub skills: Vec<String>,
}

impl ProfileView {
    fn from_profile(profile: &ExtractedProfile) -> Self {
        Self {
            name: profile
                .name
                .clone()
                .unwrap_or_else(|| NAME_NOT_FOUND.to_string()),
            email: profile
                .email
                .clone()
                .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string()),
            phone: profile
                .phone
                .clone()
                .unwrap_or_else(|| PHONE_NOT_FOUND.to_string()),
            experience: fields::experience_label(profile.experience_years),
            skills: profile.skills.clone(),
        }
    }
}

/// JD side of the report. Only experience and skills are surfaced for the
/// job description; contact fields are a resume concern.
#[derive(Debug, Serialize)]
pub struct JdView {
    pub experience: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub resume: ProfileView,
    pub jd: JdView,
    pub comparison: ComparisonResult,
}

/// GET /
pub async fn handle_upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

/// POST /
pub async fn handle_match_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let response = run_match(&state, multipart).await?;
    Ok(Html(render_results(&response)))
}

/// POST /api/v1/match
pub async fn handle_match_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    Ok(Json(run_match(&state, multipart).await?))
}

async fn run_match(state: &AppState, multipart: Multipart) -> Result<MatchResponse, AppError> {
    let (resume, jd) = read_uploads(multipart).await?;
    let strict = state.config.strict_formats;

    let resume_text = upload_text(resume.as_ref(), strict)?;
    let jd_text = upload_text(jd.as_ref(), strict)?;

    let resume_profile = extract_profile(&resume_text, &state.vocabulary);
    let jd_profile = extract_profile(&jd_text, &state.vocabulary);
    let comparison = compare(&resume_profile, &jd_profile);

    tracing::debug!(
        resume_skills = resume_profile.skills.len(),
        jd_skills = jd_profile.skills.len(),
        score = comparison.similarity_score,
        "match computed"
    );

    Ok(MatchResponse {
        resume: ProfileView::from_profile(&resume_profile),
        jd: JdView {
            experience: fields::experience_label(jd_profile.experience_years),
            skills: jd_profile.skills.clone(),
        },
        comparison,
    })
}

/// Pulls the `resume` and `jd` file parts out of the multipart body.
/// Either may be absent; unknown part names are ignored.
async fn read_uploads(mut multipart: Multipart) -> Result<(Option<Upload>, Option<Upload>), AppError> {
    let mut resume = None;
    let mut jd = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload '{name}': {e}")))?
            .to_vec();

        let upload = Upload { filename, bytes };
        match name.as_str() {
            "resume" => resume = Some(upload),
            "jd" => jd = Some(upload),
            _ => {}
        }
    }

    Ok((resume, jd))
}

/// Text of one upload: missing file or unrecognized extension is empty
/// text, unless strict formats are enabled.
fn upload_text(upload: Option<&Upload>, strict: bool) -> Result<String, AppError> {
    let Some(upload) = upload else {
        return Ok(String::new());
    };
    match detect_format(&upload.filename) {
        Some(format) => load_text(&upload.bytes, format),
        None if strict => Err(AppError::UnsupportedFormat(format!(
            "unrecognized extension on '{}'",
            upload.filename
        ))),
        None => Ok(String::new()),
    }
}

// ── HTML rendering ──────────────────────────────────────────────────────────

const UPLOAD_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><title>Resumatch</title></head>
<body>
  <h1>Resume / Job Description Match</h1>
  <form action="/" method="post" enctype="multipart/form-data">
    <p><label>Resume (PDF or DOCX): <input type="file" name="resume"></label></p>
    <p><label>Job description (PDF or DOCX): <input type="file" name="jd"></label></p>
    <p><button type="submit">Compare</button></p>
  </form>
</body>
</html>
"#;

fn render_results(response: &MatchResponse) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Resumatch results</title></head>
<body>
  <h1>Match Results</h1>
  <h2>Resume</h2>
  <ul>
    <li>Name: {name}</li>
    <li>Email: {email}</li>
    <li>Phone: {phone}</li>
    <li>Experience: {resume_exp}</li>
    <li>Skills: {resume_skills}</li>
  </ul>
  <h2>Job Description</h2>
  <ul>
    <li>Experience: {jd_exp}</li>
    <li>Skills: {jd_skills}</li>
  </ul>
  <h2>Comparison</h2>
  <ul>
    <li>Matching skills: {matching}</li>
    <li>Missing skills: {missing}</li>
    <li>Similarity score: {score}%</li>
  </ul>
  <p><a href="/">Compare another pair</a></p>
</body>
</html>
"#,
        name = escape_html(&response.resume.name),
        email = escape_html(&response.resume.email),
        phone = escape_html(&response.resume.phone),
        resume_exp = escape_html(&response.resume.experience),
        resume_skills = escape_html(&response.resume.skills.join(", ")),
        jd_exp = escape_html(&response.jd.experience),
        jd_skills = escape_html(&response.jd.skills.join(", ")),
        matching = escape_html(&response.comparison.matching_skills.join(", ")),
        missing = escape_html(&response.comparison.missing_skills.join(", ")),
        score = response.comparison.similarity_score,
    )
}

/// Field values come from arbitrary document text; escape before embedding.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fields::EXPERIENCE_NOT_MENTIONED;

    fn empty_profile() -> ExtractedProfile {
        ExtractedProfile {
            name: None,
            email: None,
            phone: None,
            experience_years: None,
            skills: vec![],
        }
    }

    #[test]
    fn test_profile_view_surfaces_sentinels() {
        let view = ProfileView::from_profile(&empty_profile());
        assert_eq!(view.name, NAME_NOT_FOUND);
        assert_eq!(view.email, EMAIL_NOT_FOUND);
        assert_eq!(view.phone, PHONE_NOT_FOUND);
        assert_eq!(view.experience, EXPERIENCE_NOT_MENTIONED);
        assert!(view.skills.is_empty());
    }

    #[test]
    fn test_profile_view_present_fields_pass_through() {
        let profile = ExtractedProfile {
            name: Some("John Smith".to_string()),
            email: Some("john.smith@example.com".to_string()),
            phone: Some("555-123-4567".to_string()),
            experience_years: Some(5),
            skills: vec!["Python".to_string()],
        };
        let view = ProfileView::from_profile(&profile);
        assert_eq!(view.name, "John Smith");
        assert_eq!(view.experience, "5 years");
        assert_eq!(view.skills, vec!["Python".to_string()]);
    }

    #[test]
    fn test_upload_text_missing_file_is_empty() {
        assert_eq!(upload_text(None, false).unwrap(), "");
        assert_eq!(upload_text(None, true).unwrap(), "");
    }

    #[test]
    fn test_upload_text_unknown_extension_parity_mode() {
        let upload = Upload {
            filename: "resume.txt".to_string(),
            bytes: b"plain text".to_vec(),
        };
        assert_eq!(upload_text(Some(&upload), false).unwrap(), "");
    }

    #[test]
    fn test_upload_text_unknown_extension_strict_mode() {
        let upload = Upload {
            filename: "resume.txt".to_string(),
            bytes: b"plain text".to_vec(),
        };
        let result = upload_text(Some(&upload), true);
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_render_results_contains_report() {
        let response = MatchResponse {
            resume: ProfileView::from_profile(&empty_profile()),
            jd: JdView {
                experience: EXPERIENCE_NOT_MENTIONED.to_string(),
                skills: vec!["SQL".to_string()],
            },
            comparison: ComparisonResult {
                matching_skills: vec![],
                missing_skills: vec!["SQL".to_string()],
                similarity_score: 0.0,
            },
        };
        let html = render_results(&response);
        assert!(html.contains(NAME_NOT_FOUND));
        assert!(html.contains("Missing skills: SQL"));
        assert!(html.contains("Similarity score: 0%"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A&B"</b>"#),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
    }
}
