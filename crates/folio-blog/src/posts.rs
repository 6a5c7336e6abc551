//! Post metadata index.
//!
//! `posts/posts.json` holds a `posts` array describing every article:
//! which are published, when, and their per-locale titles and excerpts.
//! The index controls listing order and visibility; the markdown documents
//! themselves are fetched separately on demand.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;

use folio_store::{ContentStore, fetch_json};
use folio_types::{Lang, LocalizedText};

/// Metadata for one blog post, as stored in `posts/posts.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub id: String,
    #[serde(default)]
    pub published: bool,
    /// ISO date, `YYYY-MM-DD`.
    pub published_date: String,
    pub title: LocalizedText,
    pub excerpt: LocalizedText,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Minutes; estimated from the excerpt when absent.
    #[serde(default)]
    pub reading_time: Option<u32>,
}

impl PostMeta {
    fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published_date, "%Y-%m-%d").ok()
    }
}

/// A list-view model for one post, shaped for the active locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub date_label: String,
    pub reading_label: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PostsDoc {
    #[serde(default)]
    posts: Vec<PostMeta>,
}

/// The loaded post index.
#[derive(Debug, Default)]
pub struct PostIndex {
    posts: Vec<PostMeta>,
}

impl PostIndex {
    /// Load the index from `posts/posts.json`.
    ///
    /// An absent or malformed index degrades to an empty list; the blog
    /// page then shows its "no posts" placeholder instead of failing.
    pub fn load(store: &dyn ContentStore) -> PostIndex {
        match fetch_json::<PostsDoc>(store, "posts/posts.json") {
            Ok(doc) => {
                let mut seen = HashSet::new();
                for post in &doc.posts {
                    if !seen.insert(post.id.as_str()) {
                        log::warn!(
                            "posts/posts.json: duplicate post id {:?}, first entry wins",
                            post.id
                        );
                    }
                }
                PostIndex { posts: doc.posts }
            },
            Err(e) => {
                log::warn!("posts/posts.json: {e}, blog list will be empty");
                PostIndex::default()
            },
        }
    }

    /// Build directly from metadata. Test seam.
    pub fn from_posts(posts: Vec<PostMeta>) -> PostIndex {
        PostIndex { posts }
    }

    /// Published posts, newest first.
    ///
    /// Unparseable dates sort last so a typo in one entry cannot hide the
    /// rest of the list.
    pub fn published(&self) -> Vec<&PostMeta> {
        let mut listed: Vec<&PostMeta> = self.posts.iter().filter(|p| p.published).collect();
        listed.sort_by(|a, b| b.date().cmp(&a.date()));
        listed
    }

    /// Look up a post by id. Unpublished posts are findable here even
    /// though `published()` never lists them.
    pub fn find(&self, id: &str) -> Option<&PostMeta> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Case-insensitive search over title, excerpt, and tags.
    pub fn search(&self, query: &str, lang: Lang) -> Vec<&PostMeta> {
        let needle = query.to_lowercase();
        self.published()
            .into_iter()
            .filter(|p| {
                p.title.get(lang).to_lowercase().contains(&needle)
                    || p.excerpt.get(lang).to_lowercase().contains(&needle)
                    || p.tags
                        .iter()
                        .flatten()
                        .any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Shape a post into its list-view card for the given locale.
    pub fn card(post: &PostMeta, lang: Lang) -> PostCard {
        let minutes = post
            .reading_time
            .unwrap_or_else(|| reading_minutes(post.excerpt.get(lang)));
        let reading_label = match lang {
            Lang::De => format!("{minutes} Min. Lesezeit"),
            Lang::En => format!("{minutes} min read"),
        };
        PostCard {
            id: post.id.clone(),
            title: post.title.get(lang).to_string(),
            excerpt: post.excerpt.get(lang).to_string(),
            date_label: format_date(&post.published_date, lang),
            reading_label,
            tags: post.tags.clone().unwrap_or_default(),
        }
    }
}

/// Estimate reading time from an excerpt, assuming the full article runs
/// about four times as long and reads at 200 words per minute.
pub fn reading_minutes(excerpt: &str) -> u32 {
    let words = excerpt.split_whitespace().count() as u32 * 4;
    words.div_ceil(200).max(1)
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

/// Format an ISO date for display in the given locale.
///
/// Unparseable dates pass through verbatim.
pub fn format_date(iso: &str, lang: Lang) -> String {
    let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") else {
        return iso.to_string();
    };
    use chrono::Datelike;
    let month = (date.month0()) as usize;
    match lang {
        Lang::En => format!("{} {}, {}", MONTHS_EN[month], date.day(), date.year()),
        Lang::De => format!("{}. {} {}", date.day(), MONTHS_DE[month], date.year()),
    }
}
