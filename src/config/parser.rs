use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use shelfwalk::config::load_config;
///
/// let config = load_config(Path::new("shelfwalk.toml")).unwrap();
/// println!("Seed product: {}", config.seed.product_id);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// The hash is logged at startup and echoed in the crawl report so that two
/// output files can be traced back to the configuration that produced them.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash of the file content
/// * `Err(ConfigError)` - Failed to read the file
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read(path)?;
    Ok(hash_bytes(&content))
}

/// Hex-encoded SHA-256 of arbitrary bytes
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}

/// Loads a configuration and returns both the config and its hash
///
/// The file is read once; the hash always describes the bytes that were
/// parsed.
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok((config, hash_bytes(content.as_bytes())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[seed]
product-id = "1"

[site]
origin = "https://shop.example.com"
recommendation-url-template = "https://shop.example.com/recommendations/products?product_id={id}"

[user-agent]
crawler-name = "TestCrawler"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[http]
request-timeout-secs = 5
connect-timeout-secs = 2

[output]
html-path = "./out.html"
escape-html = true

[markup]
anchor-class = "card-link"
container-classes = ["card"]
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.seed.product_id, "1");
        assert_eq!(config.site.origin, "https://shop.example.com");
        assert_eq!(config.user_agent.crawler_name, "TestCrawler");
        assert_eq!(config.http.request_timeout_secs, 5);
        assert_eq!(config.output.html_path, "./out.html");
        assert!(config.output.escape_html);
        assert_eq!(config.markup.anchor_class, "card-link");
        assert_eq!(config.markup.container_classes, vec!["card".to_string()]);
        // Unset markup keys keep their defaults
        assert_eq!(config.markup.price_class, "price");
        assert_eq!(
            config.seed_url(),
            "https://shop.example.com/recommendations/products?product_id=1"
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.seed.product_id, "4434084855901");
        assert_eq!(config.site.origin, "https://arbysshop.com");
        assert_eq!(config.output.html_path, "index.html");
        assert_eq!(
            config.seed_url(),
            "https://arbysshop.com/recommendations/products\
             ?&section_id=product-recommendations&product_id=4434084855901"
        );
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[output]\nhtml-path = \"cards.html\"\n").unwrap();
        assert_eq!(config.output.html_path, "cards.html");
        assert!(!config.output.escape_html);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[seed]
product-id = "abc"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_load_config_with_hash() {
        let file = create_temp_config("[seed]\nproduct-id = \"12\"\n");
        let (config, hash) = load_config_with_hash(file.path()).unwrap();
        assert_eq!(config.seed.product_id, "12");
        assert_eq!(hash, hash_bytes(b"[seed]\nproduct-id = \"12\"\n"));
        assert_eq!(hash, compute_config_hash(file.path()).unwrap());
    }

    #[test]
    fn test_load_config_with_hash_rejects_invalid_file() {
        let file = create_temp_config("[seed]\nproduct-id = \"x1\"\n");
        let result = load_config_with_hash(file.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
