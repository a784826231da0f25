//! Word tokenizer and balanced line builder.
//!
//! Neither function knows about fonts or sizes: candidates differ only in how
//! many consecutive words land on each line.

/// Marker joining lines of a candidate layout.
pub const LINE_BREAK: char = '\n';

/// Splits `text` into words on any run of whitespace, newlines included.
///
/// The input's own line breaks carry no meaning; the engine re-flows freely.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Joins `words` into at most `lines_count` lines of near-equal word counts.
///
/// With `W` words and `n` lines every line gets `W / n` words and the first
/// `W % n` lines get one more. Lines that would be empty are dropped, so asking
/// for more lines than words yields one word per line. `lines_count <= 1`
/// puts everything on a single line.
pub fn build_balanced_lines(words: &[&str], lines_count: usize) -> String {
    if lines_count <= 1 {
        return words.join(" ");
    }

    let total = words.len();
    let base = total / lines_count;
    let extra = total % lines_count;

    let mut out = String::new();
    let mut idx = 0;
    for line in 0..lines_count {
        let take = base + usize::from(line < extra);
        if take == 0 {
            continue;
        }
        if !out.is_empty() {
            out.push(LINE_BREAK);
        }
        out.push_str(&words[idx..idx + take].join(" "));
        idx += take;
    }

    // Never drop words, even if the distribution above undershoots.
    if idx < total {
        if !out.is_empty() {
            out.push(LINE_BREAK);
        }
        out.push_str(&words[idx..].join(" "));
    }
    out
}
