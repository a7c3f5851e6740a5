//! Catalog seeding: reads the sample-data file, embeds every article, and
//! writes a fresh catalog.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use phaply_ai::GeminiClient;
use phaply_core::KbInfo;
use phaply_store::{ArticleCatalog, StoredArticle};
use serde::Deserialize;

/// One entry of the seed file.
#[derive(Deserialize)]
struct SeedEntry {
    law_id: String,
    article_num: String,
    content: String,
    #[serde(default)]
    knowledge_base: KbInfo,
}

pub struct SeedStats {
    pub total: usize,
    pub elapsed_secs: f64,
}

/// Read the seed file, embed each article's content, and replace the
/// catalog's contents wholesale.
pub async fn run_seed(
    catalog: &mut ArticleCatalog,
    ai: &GeminiClient,
    input: &Path,
) -> anyhow::Result<SeedStats> {
    let start = Instant::now();

    let data = std::fs::read_to_string(input)
        .with_context(|| format!("reading seed file {}", input.display()))?;
    let entries: Vec<SeedEntry> =
        serde_json::from_str(&data).with_context(|| format!("parsing {}", input.display()))?;

    let total = entries.len();
    eprintln!("  Read {total} articles from {}", input.display());

    let mut articles = Vec::with_capacity(total);
    for (i, entry) in entries.into_iter().enumerate() {
        let embedding = ai
            .embed(&entry.content)
            .await
            .with_context(|| format!("embedding {}", entry.article_num))?;

        articles.push(StoredArticle {
            law_id: entry.law_id,
            article_num: entry.article_num,
            content: entry.content,
            kb: entry.knowledge_base,
            embedding,
        });
        eprint!("\r  Embedded {}/{total}", i + 1);
    }
    eprintln!();

    catalog.replace_all(articles)?;

    Ok(SeedStats {
        total,
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}
