//! View shaping and the stdout sink.
//!
//! Shaping is pure: each view becomes a list of text lines from the data
//! alone, so it can be tested without a terminal. The sink is the only
//! place that actually prints.

use folio_blog::{PostIndex, to_markup};
use folio_core::PageContent;
use folio_i18n::Translations;
use folio_terminal::{OutputCategory, Sink};
use folio_types::Lang;

/// Prints interpreter and view output to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn emit(&mut self, text: &str, category: OutputCategory) {
        match category {
            OutputCategory::Error => println!("! {text}"),
            OutputCategory::Suggestion => println!("  {text}"),
            _ => println!("{text}"),
        }
    }
}

/// Lines for the static home view.
pub fn home_lines(i18n: &Translations, lang: Lang) -> Vec<String> {
    vec![
        i18n.resolve(lang, "terminal.welcome"),
        i18n.resolve(lang, "terminal.help_prompt"),
    ]
}

/// Lines for a structured page document.
pub fn page_lines(content: &PageContent) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(heading) = &content.heading {
        lines.push(format!("== {heading} =="));
    }
    for section in &content.sections {
        if let Some(title) = &section.title {
            lines.push(format!("-- {title} --"));
        }
        for para in &section.paragraphs {
            lines.push(para.clone());
        }
        for bullet in &section.bullets {
            lines.push(format!("  * {bullet}"));
        }
    }
    lines
}

/// Lines for the blog list: one card per published post, newest first.
pub fn blog_lines(index: &PostIndex, lang: Lang, i18n: &Translations) -> Vec<String> {
    let listed = index.published();
    if listed.is_empty() {
        return vec![i18n.resolve(lang, "blog.no_posts")];
    }
    let mut lines = Vec::new();
    for post in listed {
        let card = PostIndex::card(post, lang);
        lines.push(format!("[{}] {}", card.id, card.title));
        lines.push(format!("    {} · {}", card.date_label, card.reading_label));
        lines.push(format!("    {}", card.excerpt));
        if !card.tags.is_empty() {
            lines.push(format!("    #{}", card.tags.join(" #")));
        }
    }
    lines
}

/// Lines for the reading view: rendered markup of the article.
pub fn article_lines(markdown: &str) -> Vec<String> {
    to_markup(markdown).lines().map(str::to_string).collect()
}
