//! CLI command implementations.

mod build;
mod check;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;

use rune_docs_site::SiteDefinition;

use crate::output::Output;

/// Summary lines describing an assembled site definition.
fn summary_lines(definition: &SiteDefinition) -> Vec<String> {
    let Some(theme) = definition.docs_theme() else {
        return vec![format!("Site: {}", definition.site)];
    };

    let languages: Vec<_> = theme
        .expressive_code
        .shiki
        .langs
        .languages()
        .iter()
        .map(|grammar| {
            let name = grammar.name.as_deref().unwrap_or_default();
            if grammar.aliases.is_empty() {
                name.to_owned()
            } else {
                format!("{name} ({})", grammar.aliases.join(", "))
            }
        })
        .collect();

    vec![
        format!("Site: {} ({})", theme.title, definition.site),
        format!(
            "Languages: {}",
            if languages.is_empty() {
                "none".to_owned()
            } else {
                languages.join(", ")
            }
        ),
        format!(
            "Sidebar: {} sections, {} pages",
            theme.sidebar.sections().len(),
            theme.sidebar.page_count()
        ),
    ]
}

/// Print the summary of an assembled site definition.
fn print_summary(output: &Output, definition: &SiteDefinition) {
    for line in summary_lines(definition) {
        output.detail(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rune_docs_config::Config;
    use rune_docs_grammar::{GrammarDocument, LanguageRegistry};
    use rune_docs_site::assemble;

    #[test]
    fn test_summary_lines_without_languages() {
        let definition = assemble(&Config::default(), LanguageRegistry::new()).unwrap();

        assert_eq!(
            summary_lines(&definition),
            vec![
                "Site: RuneLang (https://runelang.com)".to_owned(),
                "Languages: none".to_owned(),
                "Sidebar: 5 sections, 20 pages".to_owned(),
            ]
        );
    }

    #[test]
    fn test_summary_lines_lists_languages_with_aliases() {
        let mut languages = LanguageRegistry::new();
        languages
            .register(GrammarDocument {
                name: Some("rune".to_owned()),
                aliases: vec!["runelang".to_owned()],
                ..GrammarDocument::default()
            })
            .unwrap();
        languages
            .register(GrammarDocument {
                name: Some("glyph".to_owned()),
                ..GrammarDocument::default()
            })
            .unwrap();

        let definition = assemble(&Config::default(), languages).unwrap();

        assert_eq!(summary_lines(&definition)[1], "Languages: rune (runelang), glyph");
    }
}
