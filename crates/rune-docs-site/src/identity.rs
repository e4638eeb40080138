//! Site identity validation.

use rune_docs_config::{HeadTag, SiteConfig, SocialLink};

use crate::SiteError;

/// Head meta name carrying the browser accent colour.
const THEME_COLOR_META: &str = "theme-color";

/// Validated site identity.
///
/// Built from [`SiteConfig`] with [`SiteIdentity::from_config`]. The theme
/// colour is folded into the head tags as a `theme-color` meta tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteIdentity {
    /// Canonical site origin.
    pub site: String,
    pub title: String,
    pub tagline: String,
    pub social: Vec<SocialLink>,
    pub custom_css: Vec<String>,
    /// Head tags including the generated `theme-color` meta tag.
    pub head: Vec<HeadTag>,
}

impl SiteIdentity {
    /// Validate site settings.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::Validation` if the origin or a social link is not
    /// an http(s) URL, the title is empty, a stylesheet or head tag is blank,
    /// or the theme colour is not `#rgb`/`#rrggbb`.
    pub fn from_config(config: &SiteConfig) -> Result<Self, SiteError> {
        require_http_url(&config.url, "site.url")?;
        require_non_empty(&config.title, "site.title")?;

        for (index, link) in config.social.iter().enumerate() {
            require_non_empty(&link.icon, &format!("site.social[{index}].icon"))?;
            require_non_empty(&link.label, &format!("site.social[{index}].label"))?;
            require_http_url(&link.href, &format!("site.social[{index}].href"))?;
        }
        for (index, css) in config.custom_css.iter().enumerate() {
            require_non_empty(css, &format!("site.custom_css[{index}]"))?;
        }
        for (index, tag) in config.head.iter().enumerate() {
            require_non_empty(&tag.tag, &format!("site.head[{index}].tag"))?;
        }

        let mut head = config.head.clone();
        if let Some(color) = &config.theme_color {
            require_hex_color(color, "site.theme_color")?;
            let authored = head.iter().any(|tag| {
                tag.tag == "meta"
                    && tag
                        .attrs
                        .get("name")
                        .is_some_and(|name| name == THEME_COLOR_META)
            });
            if authored {
                tracing::debug!("theme-color meta tag already present, keeping authored tag");
            } else {
                head.push(HeadTag::meta(THEME_COLOR_META, color.as_str()));
            }
        }

        Ok(Self {
            site: config.url.clone(),
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            social: config.social.clone(),
            custom_css: config.custom_css.clone(),
            head,
        })
    }
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), SiteError> {
    if value.trim().is_empty() {
        return Err(SiteError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), SiteError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(SiteError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a CSS hex colour (`#rgb` or `#rrggbb`).
fn require_hex_color(value: &str, field: &str) -> Result<(), SiteError> {
    let valid = value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });
    if !valid {
        return Err(SiteError::Validation(format!(
            "{field} must be a hex colour like #7c3aed, got '{value}'"
        )));
    }
    Ok(())
}
