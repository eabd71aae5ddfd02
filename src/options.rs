use sky::SkyConfig;
use web_sys::HtmlElement;

use crate::{console_log, error::StarfallError, CONFIG_KEY};

/// Reads the JSON config from the element's `data-sky` attribute, falling
/// back to defaults when it is missing or unusable.
pub fn read_config(element: &HtmlElement) -> SkyConfig {
    match parse_config(element.dataset().get(CONFIG_KEY)) {
        Ok(config) => config,
        Err(err) => {
            console_log!("{err}, using default sky");
            SkyConfig::default()
        }
    }
}

pub fn parse_config(raw: Option<String>) -> Result<SkyConfig, StarfallError> {
    let config = match raw {
        Some(raw) => serde_json::from_str::<SkyConfig>(&raw)?,
        None => SkyConfig::default(),
    };

    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attribute_means_defaults() {
        assert_eq!(parse_config(None).unwrap(), SkyConfig::default());
    }

    #[test]
    fn attribute_overrides_fields() {
        let config = parse_config(Some(r#"{"volleyCount": 4, "triggerRatio": 0.5}"#.into())).unwrap();

        assert_eq!(config.volley_count, 4);
        assert_eq!(config.trigger_ratio, 0.5);
        assert_eq!(config.salvo_rockets, 5);
    }

    #[test]
    fn bad_attribute_is_reported() {
        let err = parse_config(Some("{ nope".into())).unwrap_err();
        assert!(err.0.starts_with("invalid JSON"));

        let err = parse_config(Some(r#"{"cometPairChance": 2}"#.into())).unwrap_err();
        assert!(err.0.contains("cometPairChance"));

        let err = parse_config(Some(r#"{"volleyCount": 18446744073709551615}"#.into())).unwrap_err();
        assert!(err.0.contains("volleyCount"));
    }
}
