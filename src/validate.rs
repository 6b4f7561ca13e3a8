use async_trait::async_trait;

use crate::error::ValidationError;

/// Checks an operation's required fields before a request goes out.
#[async_trait]
pub trait Validator: Send + Sync {
    /// Fail with the first key in `required` whose field is absent or empty.
    async fn validate(
        &self,
        fields: &[(&str, Option<&str>)],
        required: &[&str],
    ) -> Result<(), ValidationError>;
}

/// Default validator: presence and non-emptiness, checked in required order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

#[async_trait]
impl Validator for RequiredFields {
    async fn validate(
        &self,
        fields: &[(&str, Option<&str>)],
        required: &[&str],
    ) -> Result<(), ValidationError> {
        for key in required {
            let supplied = fields
                .iter()
                .find(|(name, _)| name == key)
                .and_then(|(_, value)| *value)
                .is_some_and(|value| !value.is_empty());
            if !supplied {
                return Err(ValidationError::new(*key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_fields_present() {
        let result = RequiredFields
            .validate(
                &[("trackingId", Some("dev1")), ("token", Some("t"))],
                &["trackingId", "token"],
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_first_missing_key_is_reported() {
        let err = RequiredFields
            .validate(
                &[("trackingId", None), ("token", None)],
                &["trackingId", "token"],
            )
            .await
            .unwrap_err();
        assert_eq!(err.field, "trackingId");
    }

    #[tokio::test]
    async fn test_empty_value_is_falsy() {
        let err = RequiredFields
            .validate(&[("token", Some(""))], &["token"])
            .await
            .unwrap_err();
        assert_eq!(err.field, "token");
    }

    #[tokio::test]
    async fn test_key_absent_from_mapping() {
        let err = RequiredFields
            .validate(&[("trackingId", Some("dev1"))], &["trackingId", "token"])
            .await
            .unwrap_err();
        assert_eq!(err.field, "token");
    }

    #[tokio::test]
    async fn test_unrequired_fields_are_ignored() {
        let result = RequiredFields
            .validate(
                &[("token", Some("t")), ("ruleId", None)],
                &["token"],
            )
            .await;
        assert!(result.is_ok());
    }
}
