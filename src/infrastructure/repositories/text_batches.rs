use regex::Regex;
use std::sync::OnceLock;

fn sentence_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Latin sentence punctuation plus the Devanagari danda
    PATTERN.get_or_init(|| Regex::new(r"[.!?।]+\s+").expect("sentence pattern is valid"))
}

/// One provider-sized piece of text plus the whitespace that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub text: String,
    /// `"\n"` after a line break, `" "` after other whitespace, `""` inside a word or at the end
    pub separator: &'static str,
}

/// Split text into batches of at most `max_chars` characters.
///
/// Sentence boundaries are preferred. A sentence that does not fit is broken on
/// whitespace, and a single word that does not fit is cut by characters.
/// Limits are counted in characters, not bytes, so Tamil and Hindi text is not
/// over-split.
pub fn split_into_batches(text: &str, max_chars: usize) -> Vec<String> {
    split_keeping_separators(text, max_chars)
        .into_iter()
        .map(|batch| batch.text)
        .collect()
}

/// Same split as [`split_into_batches`], remembering what separated consecutive batches
/// so results can be stitched back with the original line breaks.
pub fn split_keeping_separators(text: &str, max_chars: usize) -> Vec<Batch> {
    let text = text.trim();
    if text.is_empty() || max_chars == 0 {
        return Vec::new();
    }
    if text.chars().count() <= max_chars {
        return vec![Batch {
            text: text.to_string(),
            separator: "",
        }];
    }

    let mut units: Vec<String> = Vec::new();
    for sentence in split_sentences(text) {
        if sentence.chars().count() <= max_chars {
            units.push(sentence.to_string());
            continue;
        }
        for word in sentence.split_inclusive(char::is_whitespace) {
            if word.chars().count() <= max_chars {
                units.push(word.to_string());
            } else {
                let chars: Vec<char> = word.chars().collect();
                units.extend(chars.chunks(max_chars).map(|chunk| chunk.iter().collect()));
            }
        }
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();
    let mut current_len = 0usize;

    for unit in units {
        let unit_len = unit.chars().count();
        if current_len > 0 && current_len + unit_len > max_chars {
            push_batch(&mut batches, &current_batch);
            current_batch.clear();
            current_len = 0;
        }
        current_batch.push_str(&unit);
        current_len += unit_len;
    }
    push_batch(&mut batches, &current_batch);

    batches
}

/// Rejoin per-batch results with the separators recorded by [`split_keeping_separators`]
pub fn join_batches<'a>(parts: impl IntoIterator<Item = (&'a str, &'a Batch)>) -> String {
    let mut joined = String::new();
    for (part, batch) in parts {
        joined.push_str(part);
        joined.push_str(batch.separator);
    }
    joined
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last_end = 0;
    for mat in sentence_pattern().find_iter(text) {
        sentences.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        sentences.push(&text[last_end..]);
    }
    sentences
}

fn push_batch(batches: &mut Vec<Batch>, raw: &str) {
    let text = raw.trim();
    if text.is_empty() {
        return;
    }
    let trailing = &raw[raw.trim_end().len()..];
    let separator = if trailing.contains('\n') {
        "\n"
    } else if trailing.is_empty() {
        ""
    } else {
        " "
    };
    batches.push(Batch {
        text: text.to_string(),
        separator,
    });
}
