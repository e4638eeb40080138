//! Site definition assembly.
//!
//! Assembly runs once per build. Reading grammar files is the only I/O and
//! happens in [`load_languages`]; [`assemble`] itself is a pure function of
//! the configuration and the loaded languages.

use rune_docs_config::{Config, GrammarConfig};
use rune_docs_grammar::{GrammarOverrides, LanguageRegistry, load_and_adapt};
use rune_docs_nav::NavigationBuilder;

use crate::definition::{DocsTheme, ExpressiveCode, Integration, Shiki, SiteDefinition};
use crate::{SiteError, SiteIdentity};

/// Sidebar nesting limit: sections containing pages.
pub const MAX_SIDEBAR_DEPTH: usize = 2;

/// Load every configured grammar, retag it, and register it in order.
///
/// # Errors
///
/// Returns `SiteError::Grammar` on the first grammar that cannot be read,
/// parsed, retagged, or registered.
pub fn load_languages(grammars: &[GrammarConfig]) -> Result<LanguageRegistry, SiteError> {
    let mut registry = LanguageRegistry::new();
    for grammar in grammars {
        let overrides = GrammarOverrides::new(grammar.name.clone(), grammar.aliases.clone());
        let document = load_and_adapt(&grammar.path, &overrides)?;
        registry.register(document)?;
    }
    Ok(registry)
}

/// Assemble the site definition from configuration and loaded languages.
///
/// # Errors
///
/// Returns `SiteError::Validation` for invalid site identity and
/// `SiteError::Navigation` for an invalid sidebar.
pub fn assemble(config: &Config, languages: LanguageRegistry) -> Result<SiteDefinition, SiteError> {
    let identity = SiteIdentity::from_config(&config.site)?;
    let sidebar = NavigationBuilder::new()
        .entries(config.sidebar.iter().cloned())
        .max_depth(MAX_SIDEBAR_DEPTH)
        .build()?;

    tracing::info!(
        site = %identity.site,
        languages = languages.len(),
        sections = sidebar.sections().len(),
        pages = sidebar.page_count(),
        "Site definition assembled"
    );

    Ok(SiteDefinition {
        site: identity.site,
        integrations: vec![Integration::Docs(DocsTheme {
            title: identity.title,
            tagline: identity.tagline,
            social: identity.social,
            custom_css: identity.custom_css,
            expressive_code: ExpressiveCode {
                shiki: Shiki { langs: languages },
            },
            head: identity.head,
            sidebar,
        })],
    })
}

/// Load grammars and assemble the site definition.
///
/// # Errors
///
/// Returns any error from [`load_languages`] or [`assemble`].
pub fn build(config: &Config) -> Result<SiteDefinition, SiteError> {
    let languages = load_languages(&config.grammars_resolved)?;
    assemble(config, languages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rune_docs_grammar::GrammarError;
    use rune_docs_nav::NavigationError;
    use std::path::{Path, PathBuf};

    static_assertions::assert_impl_all!(crate::SiteDefinition: Send, Sync);

    const GRAMMAR: &str = r##"{
  "name": "draft",
  "aliases": [],
  "scopeName": "source.rune",
  "patterns": [{ "include": "#keywords" }],
  "repository": {
    "keywords": { "match": "\\b(summon|ritual)\\b", "name": "keyword.control.rune" }
  }
}"##;

    /// Write a grammar and a config file into a temp project.
    fn create_project(config_toml: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let grammar_dir = dir.path().join("src/grammars");
        std::fs::create_dir_all(&grammar_dir).unwrap();
        std::fs::write(grammar_dir.join("runelang.tmLanguage.json"), GRAMMAR).unwrap();
        let config_path = dir.path().join("rune-docs.toml");
        std::fs::write(&config_path, config_toml).unwrap();
        (dir, config_path)
    }

    fn load_config(path: &Path) -> Config {
        Config::load(Some(path), None).unwrap()
    }

    #[test]
    fn test_assemble_default_config() {
        let config = Config::default();

        let definition = assemble(&config, LanguageRegistry::new()).unwrap();

        assert_eq!(definition.site, "https://runelang.com");
        let theme = definition.docs_theme().unwrap();
        assert_eq!(theme.title, "RuneLang");
        let sections: Vec<_> = theme
            .sidebar
            .sections()
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(
            sections,
            vec![
                "Getting Started",
                "Language Guide",
                "Reference",
                "Comparisons",
                "Examples"
            ]
        );
        assert_eq!(theme.sidebar.page_count(), 20);
        assert_eq!(
            theme.sidebar.find("guide/operators").unwrap().label,
            "Operators"
        );
    }

    #[test]
    fn test_bundled_site_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../site/rune-docs.toml");
        let config = load_config(&path);

        let definition = build(&config).unwrap();

        let languages = load_languages(&config.grammars_resolved).unwrap();
        assert_eq!(definition, assemble(&Config::default(), languages).unwrap());
        let lang = &definition.docs_theme().unwrap().expressive_code.shiki.langs;
        assert_eq!(lang.resolve("runelang").unwrap().scope_name(), Some("source.rune"));
    }

    #[test]
    fn test_build_end_to_end() {
        let (_dir, config_path) = create_project("");
        let config = load_config(&config_path);

        let definition = build(&config).unwrap();
        let json = serde_json::to_value(&definition).unwrap();

        assert_eq!(json["site"], "https://runelang.com");
        let integration = &json["integrations"][0];
        assert_eq!(integration["name"], "starlight");
        let options = &integration["options"];
        assert_eq!(options["title"], "RuneLang");
        assert_eq!(options["customCss"][0], "./src/styles/custom.css");
        assert_eq!(options["social"][0]["href"], "https://github.com/runelang/runelang");

        let lang = &options["expressiveCode"]["shiki"]["langs"][0];
        assert_eq!(lang["name"], "rune");
        assert_eq!(lang["aliases"], serde_json::json!(["runelang"]));
        assert_eq!(lang["scopeName"], "source.rune");
        assert_eq!(
            lang["repository"]["keywords"]["name"],
            "keyword.control.rune"
        );

        assert_eq!(
            options["head"],
            serde_json::json!([
                { "tag": "meta", "attrs": { "content": "#7c3aed", "name": "theme-color" } }
            ])
        );
        assert_eq!(options["sidebar"][0]["label"], "Getting Started");
        assert_eq!(
            options["sidebar"][0]["items"][0],
            serde_json::json!({ "label": "Introduction", "slug": "getting-started/introduction" })
        );
    }

    #[test]
    fn test_build_custom_sidebar_two_sections() {
        let (_dir, config_path) = create_project(
            r#"
[[sidebar]]
label = "Getting Started"
items = [{ label = "Introduction", slug = "getting-started/introduction" }]

[[sidebar]]
label = "Guide"
items = [{ label = "Operators", slug = "guide/operators" }]
"#,
        );
        let config = load_config(&config_path);

        let definition = build(&config).unwrap();

        let sidebar = &definition.docs_theme().unwrap().sidebar;
        assert_eq!(sidebar.sections().len(), 2);
        assert_eq!(sidebar.sections()[0].label, "Getting Started");
        assert_eq!(sidebar.sections()[1].label, "Guide");
        assert_eq!(sidebar.sections()[0].items.len(), 1);
        assert_eq!(sidebar.sections()[1].items.len(), 1);
    }

    #[test]
    fn test_build_missing_grammar_fails() {
        let (dir, config_path) = create_project(
            r#"
[[grammars]]
path = "src/grammars/missing.json"
name = "rune"
"#,
        );
        let config = load_config(&config_path);

        let err = build(&config).unwrap_err();

        assert!(
            matches!(
                err,
                SiteError::Grammar(GrammarError::NotFound(ref p))
                    if *p == dir.path().join("src/grammars/missing.json")
            ),
            "Expected grammar NotFound, got {err:?}"
        );
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_build_duplicate_slug_fails() {
        let (_dir, config_path) = create_project(
            r#"
[[sidebar]]
label = "Guide"
items = [{ label = "Operators", slug = "guide/operators" }]

[[sidebar]]
label = "Reference"
items = [{ label = "Operator Table", slug = "guide/operators" }]
"#,
        );
        let config = load_config(&config_path);

        let err = build(&config).unwrap_err();

        assert!(
            matches!(
                err,
                SiteError::Navigation(NavigationError::DuplicateSlug { ref slug, .. })
                    if slug == "guide/operators"
            ),
            "Expected duplicate slug error, got {err:?}"
        );
    }

    #[test]
    fn test_assemble_rejects_nested_sidebar() {
        let (_dir, config_path) = create_project(
            r#"
[[sidebar]]
label = "Guide"
items = [{ label = "Advanced", items = [{ label = "Macros", slug = "guide/macros" }] }]
"#,
        );
        let config = load_config(&config_path);

        let err = assemble(&config, LanguageRegistry::new()).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Navigation(NavigationError::TooDeep { max_depth: 2, .. })
        ));
    }

    #[test]
    fn test_assemble_names_entry_with_mistyped_key() {
        let (_dir, config_path) = create_project(
            r#"
[[sidebar]]
label = "Guide"
items = [
  { label = "Operators", slug = "guide/operators" },
  { label = "Control Flow", slg = "guide/control-flow" },
]
"#,
        );
        let config = load_config(&config_path);

        let err = assemble(&config, LanguageRegistry::new()).unwrap_err();

        assert!(
            matches!(
                err,
                SiteError::Navigation(NavigationError::MalformedEntry { ref path, ref label, .. })
                    if path == "Guide > #2" && label == "Control Flow"
            ),
            "Expected malformed entry error, got {err:?}"
        );
        let message = err.to_string();
        assert!(message.contains("Control Flow"), "{message}");
        assert!(message.contains("Guide > #2"), "{message}");
        assert!(message.contains("slg"), "{message}");
    }

    #[test]
    fn test_assemble_rejects_invalid_identity() {
        let mut config = Config::default();
        config.site.url = "ftp://runelang.com".to_owned();

        let err = assemble(&config, LanguageRegistry::new()).unwrap_err();

        assert!(matches!(err, SiteError::Validation(_)));
    }

    #[test]
    fn test_load_languages_rejects_colliding_aliases() {
        let (dir, _config_path) = create_project("");
        let path = dir.path().join("src/grammars/runelang.tmLanguage.json");
        let grammars = vec![
            GrammarConfig {
                path: path.clone(),
                name: "rune".to_owned(),
                aliases: vec!["runelang".to_owned()],
            },
            GrammarConfig {
                path,
                name: "runelang".to_owned(),
                aliases: Vec::new(),
            },
        ];

        let err = load_languages(&grammars).unwrap_err();

        assert!(matches!(
            err,
            SiteError::Grammar(GrammarError::DuplicateIdentifier { .. })
        ));
    }

    #[test]
    fn test_write_to_creates_parent_directories() {
        let (dir, config_path) = create_project("");
        let config = load_config(&config_path);
        let definition = build(&config).unwrap();

        definition.write_to(&config.output_resolved.path).unwrap();

        let written = std::fs::read_to_string(dir.path().join("dist/site-config.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["integrations"][0]["options"]["title"], "RuneLang");
    }
}
