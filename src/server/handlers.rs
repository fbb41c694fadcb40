use super::{pages, types::ResumeForm};
use crate::resume::Generator;
use axum::{body::Bytes, extract::State, response::Html};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn Generator>,
}

pub async fn input_form() -> Html<&'static str> {
    Html(pages::INPUT_FORM_HTML)
}

pub async fn generate_resume(
    State(state): State<AppState>,
    body: Bytes,
) -> Html<String> {
    // Any body is accepted, whatever its content type; a missing field is
    // an empty description.
    let form = ResumeForm::from_urlencoded(&body);

    info!(
        "Received resume request ({} bytes)",
        form.user_description.len()
    );

    let output = match state.generator.generate(&form.user_description).await {
        Ok(resume) => resume,
        Err(e) => e.to_string(),
    };

    Html(pages::results_html(
        &form.user_description,
        &pages::line_breaks_to_html(&output),
    ))
}
