use crate::{Result as ServiceResult, ServiceError, TicketDraft};

use desk_config::ValidationConfig;
use desk_core::{NewTicket, TicketGrade, deadline_format};

use std::str::FromStr;

use chrono::NaiveDateTime;

/// Turns client input into domain values, rejecting anything malformed
pub struct TicketValidator;

impl TicketValidator {
    /// Trimmed identity; blank or longer than `limits.max_identity_length`
    /// is rejected against `field`
    #[track_caller]
    pub fn identity(
        value: Option<&str>,
        field: &str,
        limits: &ValidationConfig,
    ) -> ServiceResult<String> {
        let value = value.map(str::trim).unwrap_or_default();

        if value.is_empty() {
            return Err(ServiceError::validation(
                format!("{} is required", field),
                field,
            ));
        }

        if value.chars().count() > limits.max_identity_length {
            return Err(ServiceError::validation(
                format!(
                    "{} must not exceed {} characters",
                    field, limits.max_identity_length
                ),
                field,
            ));
        }

        Ok(value.to_string())
    }

    /// Validate a creation request from `writer`.
    ///
    /// Text fields are trimmed. Receivers are trimmed and de-duplicated in
    /// first-occurrence order.
    #[track_caller]
    pub fn validate_create(
        writer: Option<&str>,
        draft: TicketDraft,
        limits: &ValidationConfig,
    ) -> ServiceResult<NewTicket> {
        let writer = Self::identity(writer, "writer", limits)?;

        let title = draft.title.as_deref().map(str::trim).unwrap_or_default();
        Self::check_length(title, "title", 1, limits.max_title_length)?;

        let content = Self::optional_text(draft.content, "content", limits)?;
        let purpose = Self::optional_text(draft.purpose, "purpose", limits)?;
        let requirement = Self::optional_text(draft.requirement, "requirement", limits)?;

        let grade = Self::grade(draft.grade.as_deref())?;
        let deadline = Self::deadline(draft.deadline.as_deref())?;
        let receivers = Self::receivers(draft.receivers, limits)?;

        Ok(NewTicket {
            writer,
            title: title.to_string(),
            content,
            purpose,
            requirement,
            grade,
            deadline,
            receivers,
        })
    }

    #[track_caller]
    fn grade(value: Option<&str>) -> ServiceResult<TicketGrade> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => Ok(TicketGrade::from_str(v)?),
            None => Err(ServiceError::validation("grade is required", "grade")),
        }
    }

    #[track_caller]
    fn deadline(value: Option<&str>) -> ServiceResult<NaiveDateTime> {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Err(ServiceError::validation("deadline is required", "deadline"));
        };

        deadline_format::parse(value).ok_or_else(|| {
            ServiceError::validation(
                format!("deadline '{}' must be formatted as yyyy-MM-dd HH:mm", value),
                "deadline",
            )
        })
    }

    #[track_caller]
    fn receivers(
        value: Option<Vec<String>>,
        limits: &ValidationConfig,
    ) -> ServiceResult<Vec<String>> {
        let raw = value.unwrap_or_default();
        if raw.is_empty() {
            return Err(ServiceError::validation(
                "at least one receiver is required",
                "receivers",
            ));
        }

        let mut receivers: Vec<String> = Vec::with_capacity(raw.len());
        for receiver in &raw {
            let receiver = Self::identity(Some(receiver), "receivers", limits)?;
            if !receivers.contains(&receiver) {
                receivers.push(receiver);
            }
        }

        if receivers.len() > limits.max_receivers {
            return Err(ServiceError::validation(
                format!(
                    "receivers must not exceed {} entries, got {}",
                    limits.max_receivers,
                    receivers.len()
                ),
                "receivers",
            ));
        }

        Ok(receivers)
    }

    #[track_caller]
    fn optional_text(
        value: Option<String>,
        field: &str,
        limits: &ValidationConfig,
    ) -> ServiceResult<String> {
        let value = value.as_deref().map(str::trim).unwrap_or_default();
        Self::check_length(value, field, 0, limits.max_content_length)?;
        Ok(value.to_string())
    }

    #[track_caller]
    fn check_length(value: &str, field: &str, min: usize, max: usize) -> ServiceResult<()> {
        let length = value.chars().count();

        if length < min {
            return Err(ServiceError::validation(
                format!("{} is required", field),
                field,
            ));
        }

        if length > max {
            return Err(ServiceError::validation(
                format!("{} must not exceed {} characters", field, max),
                field,
            ));
        }

        Ok(())
    }
}
