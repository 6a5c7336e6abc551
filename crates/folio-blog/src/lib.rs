//! Blog subsystem: post metadata index, bilingual article resolution, and
//! the restricted markdown-to-markup renderer.

mod article;
mod markdown;
mod posts;

pub use article::{ArticleDoc, placeholder_markdown, resolve_document};
pub use markdown::to_markup;
pub use posts::{PostCard, PostIndex, PostMeta, format_date, reading_minutes};
