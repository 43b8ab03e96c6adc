//! Bag-of-words cosine similarity between two token strings.
//!
//! The vector space is the distinct tokens observed across both inputs;
//! each string becomes a raw term-frequency vector in that space.

use std::collections::BTreeMap;

/// Cosine similarity between the term-frequency vectors of `a` and `b`,
/// scaled to 0-100. Tokenization lowercases and splits on non-word
/// characters. Returns 0.0 when either side has no tokens; the zero-vector
/// case never divides by zero.
pub fn similarity(a: &str, b: &str) -> f64 {
    let tf_a = term_frequencies(a);
    let tf_b = term_frequencies(b);
    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0_f64;
    for (token, &count) in &tf_a {
        if let Some(&other) = tf_b.get(token) {
            dot += f64::from(count) * f64::from(other);
        }
    }

    let denom = norm(&tf_a) * norm(&tf_b);
    if denom == 0.0 {
        return 0.0;
    }
    // Guard against 100.0000000002 from float noise on identical inputs.
    (dot / denom * 100.0).min(100.0)
}

/// Rounds to 2 decimal places for presentation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn term_frequencies(text: &str) -> BTreeMap<String, u32> {
    let mut tf = BTreeMap::new();
    for token in text
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
    {
        if token.is_empty() {
            continue;
        }
        *tf.entry(token.to_string()).or_insert(0) += 1;
    }
    tf
}

fn norm(tf: &BTreeMap<String, u32>) -> f64 {
    tf.values()
        .map(|&c| f64::from(c) * f64::from(c))
        .sum::<f64>()
        .sqrt()
}
