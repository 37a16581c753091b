// src/services/preprocess.rs
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Standard English stopword list (179 entries).
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

// Words may carry inner hyphens or apostrophes; any other symbol is a token on its own.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+(?:['\-]\w+)*|[^\w\s]").expect("token pattern is valid")
});

const CLITICS: &[&str] = &["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// Split text into ordered word tokens, treebank style: punctuation stands alone
/// and English clitics (`n't`, `'re`, `'s`, ...) are separated from their host.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for m in TOKEN_RE.find_iter(text) {
        split_clitic(m.as_str(), &mut tokens);
    }
    tokens
}

fn split_clitic(word: &str, out: &mut Vec<String>) {
    for clitic in std::iter::once("n't").chain(CLITICS.iter().copied()) {
        if let Some(cut) = clitic_boundary(word, clitic) {
            out.push(word[..cut].to_string());
            out.push(word[cut..].to_string());
            return;
        }
    }
    out.push(word.to_string());
}

fn clitic_boundary(word: &str, clitic: &str) -> Option<usize> {
    let cut = word.len().checked_sub(clitic.len()).filter(|&c| c > 0)?;
    (word.is_char_boundary(cut) && word[cut..].eq_ignore_ascii_case(clitic)).then_some(cut)
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token.to_lowercase().as_str())
}

/// Tokenize, drop stopwords, lowercase and rejoin with single spaces.
pub fn clean_text(text: &str) -> String {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .map(|t| t.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
