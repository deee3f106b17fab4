#![allow(dead_code)]

use readlater::prelude::*;

pub fn save_form(url: &str, tags: &[&str]) -> SaveArticleForm {
    SaveArticleForm {
        url: url.to_string(),
        category_id: None,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        metadata: ArticleMetadata::default(),
    }
}

pub fn titled_form(url: &str, title: &str, tags: &[&str]) -> SaveArticleForm {
    let mut form = save_form(url, tags);
    form.metadata.title = Some(title.to_string());
    form
}

pub fn test_categories() -> Vec<Category> {
    vec![
        Category {
            id: "c-tech".to_string(),
            name: "Tech".to_string(),
            color: "#6B7280".to_string(),
            display_order: 0,
            is_default: true,
        },
        Category {
            id: "c-news".to_string(),
            name: "News".to_string(),
            color: "#EF4444".to_string(),
            display_order: 1,
            is_default: false,
        },
    ]
}

/// Library seeded with two articles mirroring the canonical two-article
/// scenario: one unread with a "go" tag, one read favorite with "rust".
pub fn seeded_library() -> (LibraryService, Article, Article) {
    let mut library = LibraryService::new();
    library.set_categories(test_categories());

    let a1 = library
        .save(titled_form(
            "https://go.dev/blog/article",
            "Concurrency patterns",
            &["go"],
        ))
        .unwrap();

    let a2 = library
        .save(titled_form(
            "https://blog.rust-lang.org/post",
            "Understanding ownership",
            &["rust"],
        ))
        .unwrap();

    library.set_status(&a2.id, ArticleStatus::Read).unwrap();
    let a2 = library.toggle_favorite(&a2.id).unwrap();

    (library, a1, a2)
}
