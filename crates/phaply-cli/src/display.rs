//! Terminal rendering for listings and search results.

use phaply_client::{AnnotationPanel, FoundResult};
use phaply_core::ArticleRecord;

const SUMMARY_CHARS: usize = 80;

/// Print the admin listing as a compact table.
pub fn print_listing(articles: &[ArticleRecord]) {
    if articles.is_empty() {
        println!("(danh mục trống)");
        return;
    }
    println!("{:<12} {:<24} Nội dung tóm tắt", "Số Điều", "Mã Luật");
    for article in articles {
        println!(
            "{:<12} {:<24} {}",
            article.article_num,
            article.law_id,
            summarize(&article.content)
        );
    }
    println!("\n{} điều luật.", articles.len());
}

/// Print a resolved search result as a sectioned card.
pub fn print_result(result: &FoundResult) {
    println!("=== {} ({}) ===", result.article_num, result.law_id);
    println!("\n{}", result.content);

    println!("\nMâu thuẫn & Chồng chéo");
    match result.conflicts_panel() {
        AnnotationPanel::Entries(entries) => {
            for entry in entries {
                println!("  - {entry}");
            }
        }
        AnnotationPanel::Placeholder(text) => println!("  {text}"),
    }

    if !result.related_decrees().is_empty() {
        println!("\nVăn bản hướng dẫn");
        for decree in result.related_decrees() {
            println!("  - {decree}");
        }
    }

    println!("\nRủi ro thực tiễn");
    match result.risks_panel() {
        AnnotationPanel::Entries(entries) => {
            for entry in entries {
                println!("  - {entry}");
            }
        }
        AnnotationPanel::Placeholder(text) => println!("  {text}"),
    }

    println!("\nAI Trợ Lý");
    println!("{}", result.ai_response);
}

/// First line of the content, shortened to a displayable width.
fn summarize(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or_default();
    let mut summary: String = first_line.chars().take(SUMMARY_CHARS).collect();
    if first_line.chars().count() > SUMMARY_CHARS || content.lines().count() > 1 {
        summary.push_str("...");
    }
    summary
}
