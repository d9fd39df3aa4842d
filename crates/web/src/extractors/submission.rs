//! Form submission extractor - urlencoded form plus its CSRF token.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Form,
};
use serde::{de::DeserializeOwned, Deserialize};

use common::AppError;

/// A posted form and the CSRF token that came with it.
///
/// Validation is left to the handler so that an invalid form can be
/// rendered again with its messages; only a body that cannot be decoded at
/// all is rejected here.
///
/// # Example
///
/// ```rust,ignore
/// use domain::NameForm;
/// use web_lib::extractors::Submission;
///
/// async fn submit(submission: Submission<NameForm>) {
///     let result = submission.form.validated();
/// }
/// ```
pub struct Submission<T> {
    pub form: T,
    /// `None` when the field was absent or empty
    pub csrf_token: Option<String>,
}

#[derive(Deserialize)]
struct RawSubmission<T> {
    #[serde(flatten)]
    form: T,
    #[serde(default)]
    csrf_token: Option<String>,
}

#[async_trait]
impl<S, T> FromRequest<S> for Submission<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(raw) = Form::<RawSubmission<T>>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(Submission {
            form: raw.form,
            csrf_token: raw.csrf_token.filter(|token| !token.is_empty()),
        })
    }
}
