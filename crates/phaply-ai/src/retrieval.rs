//! Cosine-similarity retrieval over catalog embeddings.

/// Minimum cosine score for a query to count as a match.
///
/// gemini-embedding-001 scores run tight; 0.5 keeps recall usable without
/// letting unrelated articles through.
pub const MATCH_THRESHOLD: f32 = 0.5;

/// Cosine similarity between two vectors.
///
/// Zero-length or mismatched inputs score 0.0 rather than NaN, so an entry
/// with a missing embedding can never win.
pub fn cosine_sim(a: &[f32], b: &[f32]) -> f32 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Scan candidates for the best match at or above `threshold`.
///
/// Returns the winning key and its score, or `None` when nothing clears the
/// threshold (the "no matching article" outcome, distinct from an error).
pub fn best_match<'a, I>(query: &[f32], candidates: I, threshold: f32) -> Option<(&'a str, f32)>
where
    I: IntoIterator<Item = (&'a str, &'a [f32])>,
{
    let mut best: Option<(&str, f32)> = None;
    for (key, embedding) in candidates {
        let score = cosine_sim(query, embedding);
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((key, score));
        }
    }
    best.filter(|&(_, score)| score > threshold)
}
