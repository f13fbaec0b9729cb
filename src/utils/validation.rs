use crate::utils::error::{PressureError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PressureError::invalid_configuration(
            field_name,
            url_str,
            "URL cannot be empty",
        ));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PressureError::invalid_configuration(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(PressureError::invalid_configuration(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

/// 設定檔中未被環境變數替換的 `${VAR}`
pub fn is_unresolved_placeholder(value: &str) -> bool {
    value
        .find("${")
        .is_some_and(|start| value[start..].contains('}'))
}

/// 憑證類欄位：空值或未替換的 `${VAR}` 視為未設定，錯誤訊息中不回顯內容
pub fn validate_credential(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() || is_unresolved_placeholder(value) {
        return Err(PressureError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// 門檻必須為有限正數，否則比例計算會除以零或變成負值
pub fn validate_positive_threshold(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PressureError::invalid_configuration(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(PressureError::invalid_configuration(
            field_name,
            value,
            "Value must be strictly positive",
        ));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(PressureError::invalid_configuration(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base_url", "https://api.trello.com").is_ok());
        assert!(validate_url("api_base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api_base_url", "").is_err());
        assert!(validate_url("api_base_url", "invalid-url").is_err());
        assert!(validate_url("api_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_threshold() {
        assert!(validate_positive_threshold("max_threshold", 50.0).is_ok());
        assert!(validate_positive_threshold("max_threshold", 0.001).is_ok());
        assert!(validate_positive_threshold("max_threshold", 0.0).is_err());
        assert!(validate_positive_threshold("max_threshold", -1.0).is_err());
        assert!(validate_positive_threshold("max_threshold", f64::NAN).is_err());
        assert!(validate_positive_threshold("max_threshold", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_credential_reports_missing() {
        match validate_credential("api_key", "  ") {
            Err(PressureError::MissingConfigError { field }) => assert_eq!(field, "api_key"),
            other => panic!("expected MissingConfigError, got {:?}", other),
        }
        assert!(validate_credential("api_key", "abc123").is_ok());
    }

    #[test]
    fn test_unresolved_placeholder_is_missing_credential() {
        assert!(is_unresolved_placeholder("${TRELLO_TOKEN}"));
        assert!(is_unresolved_placeholder("prefix-${TRELLO_TOKEN}"));
        assert!(!is_unresolved_placeholder("plain-token"));
        assert!(!is_unresolved_placeholder("${unterminated"));

        assert!(matches!(
            validate_credential("token", "${TRELLO_TOKEN}"),
            Err(PressureError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("interval_secs", 5, 1).is_ok());
        assert!(validate_positive_number("interval_secs", 0, 1).is_err());
    }
}
