use crate::catalog::{recommendation_url, ID_PLACEHOLDER};
use crate::config::types::{
    Config, HttpConfig, OutputConfig, SeedConfig, SiteConfig, SiteProfile, UserAgentConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_seed_config(&config.seed)?;
    validate_site_config(&config.site)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    validate_site_profile(&config.markup)?;
    Ok(())
}

/// Validates the seed product id
fn validate_seed_config(config: &SeedConfig) -> Result<(), ConfigError> {
    validate_product_id(&config.product_id)
}

/// Product ids are the digit runs captured from card anchors
pub fn validate_product_id(id: &str) -> Result<(), ConfigError> {
    if id.is_empty() {
        return Err(ConfigError::Validation(
            "product-id cannot be empty".to_string(),
        ));
    }

    if !id.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::Validation(format!(
            "product-id must contain only digits, got '{}'",
            id
        )));
    }

    Ok(())
}

/// Validates origin and recommendation template
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let origin = parse_http_url(&config.origin, "origin")?;

    if origin.path() != "/" || config.origin.ends_with('/') {
        return Err(ConfigError::Validation(format!(
            "origin must be scheme and host only without a trailing slash, got '{}'",
            config.origin
        )));
    }

    if origin.query().is_some() || origin.fragment().is_some() {
        return Err(ConfigError::Validation(format!(
            "origin must not carry a query or fragment, got '{}'",
            config.origin
        )));
    }

    if !config.recommendation_url_template.contains(ID_PLACEHOLDER) {
        return Err(ConfigError::Validation(format!(
            "recommendation-url-template must contain the {} placeholder",
            ID_PLACEHOLDER
        )));
    }

    let sample = recommendation_url(&config.recommendation_url_template, "0");
    parse_http_url(&sample, "recommendation-url-template")?;

    Ok(())
}

/// Parses a URL and requires an http(s) scheme
fn parse_http_url(value: &str, field: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            field, value
        )));
    }

    Ok(url)
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Validates HTTP timeouts
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "request-timeout-secs must be >= 1".to_string(),
        ));
    }

    if config.connect_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "connect-timeout-secs must be >= 1".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.html_path.is_empty() {
        return Err(ConfigError::Validation(
            "html-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the markup profile used by the card extractor
fn validate_site_profile(profile: &SiteProfile) -> Result<(), ConfigError> {
    for (field, value) in [
        ("container-tag", &profile.container_tag),
        ("anchor-tag", &profile.anchor_tag),
        ("id-attribute", &profile.id_attribute),
        ("id-prefix", &profile.id_prefix),
        ("price-tag", &profile.price_tag),
        ("image-tag", &profile.image_tag),
        ("image-fallback-attribute", &profile.image_fallback_attribute),
    ] {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "markup {} cannot be empty",
                field
            )));
        }
    }

    if profile.container_classes.is_empty() {
        return Err(ConfigError::Validation(
            "markup container-classes needs at least one class".to_string(),
        ));
    }

    for token in profile
        .container_classes
        .iter()
        .chain([&profile.anchor_class, &profile.price_class, &profile.image_class])
    {
        validate_class_token(token)?;
    }

    Ok(())
}

/// A class token is one whitespace-free word
fn validate_class_token(token: &str) -> Result<(), ConfigError> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "class token '{}' must be a single non-empty word",
            token
        )));
    }
    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact-email cannot be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !domain.contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}
