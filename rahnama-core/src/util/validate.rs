use crate::entities::*;

pub use fast_chemail::is_valid_email;

/// Reasons for rejecting a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInvalidation {
    Required,
    TooLong { max_len: usize },
    Email,
    RatingValue,
}

/// Field level validation result of a submitted comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentInvalidation {
    pub name: Option<FieldInvalidation>,
    pub email: Option<FieldInvalidation>,
    pub comment: Option<FieldInvalidation>,
    pub rating: Option<FieldInvalidation>,
}

impl CommentInvalidation {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldInvalidation> {
    if name.trim().is_empty() {
        return Err(FieldInvalidation::Required);
    }
    if name.chars().count() > Comment::MAX_NAME_LEN {
        return Err(FieldInvalidation::TooLong {
            max_len: Comment::MAX_NAME_LEN,
        });
    }
    Ok(())
}

pub fn parse_optional_email(email: &str) -> Result<Option<EmailAddress>, FieldInvalidation> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(None);
    }
    if !is_valid_email(email) {
        return Err(FieldInvalidation::Email);
    }
    email
        .parse()
        .map(Some)
        .map_err(|_| FieldInvalidation::Email)
}

pub fn parse_rating_value(value: &str) -> Result<RatingValue, FieldInvalidation> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldInvalidation::Required);
    }
    value
        .parse::<u8>()
        .ok()
        .map(RatingValue::from)
        .filter(|v| v.is_valid())
        .ok_or(FieldInvalidation::RatingValue)
}
