//! Built-in values for the RuneLang documentation site.

use rune_docs_nav::{NavNode, Section, SidebarEntry};

use crate::SocialLink;

pub(crate) const SITE_URL: &str = "https://runelang.com";
pub(crate) const TITLE: &str = "RuneLang";
pub(crate) const TAGLINE: &str = "A fantasy-themed programming language built in Rust.";
pub(crate) const CUSTOM_CSS: &str = "./src/styles/custom.css";
pub(crate) const THEME_COLOR: &str = "#7c3aed";

pub(crate) const GRAMMAR_PATH: &str = "src/grammars/runelang.tmLanguage.json";
pub(crate) const GRAMMAR_NAME: &str = "rune";
pub(crate) const GRAMMAR_ALIAS: &str = "runelang";

pub(crate) const OUTPUT_PATH: &str = "dist/site-config.json";

pub(crate) fn social() -> Vec<SocialLink> {
    vec![SocialLink {
        icon: "github".to_owned(),
        label: "GitHub".to_owned(),
        href: "https://github.com/runelang/runelang".to_owned(),
    }]
}

/// Sidebar of the RuneLang docs, in rendered order.
pub(crate) fn sidebar() -> Vec<SidebarEntry> {
    [
        Section::new("Getting Started")
            .leaf("Introduction", "getting-started/introduction")
            .leaf("Installation", "getting-started/installation")
            .leaf("Quick Start", "getting-started/quick-start"),
        Section::new("Language Guide")
            .leaf("Variables & Types", "guide/variables-and-types")
            .leaf("Operators", "guide/operators")
            .leaf("Control Flow", "guide/control-flow")
            .leaf("Rituals & Spells", "guide/rituals-and-spells")
            .leaf("Guilds & Realms", "guide/guilds-and-realms")
            .leaf("Scrolls & Tomes", "guide/scrolls-and-tomes")
            .leaf("Error Handling", "guide/error-handling")
            .leaf("Modules", "guide/modules"),
        Section::new("Reference")
            .leaf("Type System", "reference/type-system")
            .leaf("Keywords", "reference/keywords")
            .leaf("Built-in Functions", "reference/builtins")
            .leaf("Methods", "reference/methods"),
        Section::new("Comparisons")
            .leaf("RuneLang vs Python", "comparisons/vs-python")
            .leaf("RuneLang vs JavaScript", "comparisons/vs-javascript"),
        Section::new("Examples")
            .leaf("Hello World", "examples/hello-world")
            .leaf("Dungeon Crawler", "examples/dungeon-crawler")
            .leaf("Feature Showcase", "examples/showcase"),
    ]
    .into_iter()
    .map(NavNode::Section)
    .map(SidebarEntry::from)
    .collect()
}
