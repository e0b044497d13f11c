//! Entry Tokenizer
//!
//! Turns an entry's name into candidate words and filters stopwords out of
//! both name and description word lists.

/// Words never used as match candidates
const STOP_WORDS: &[&str] = &["the", "and"];

/// Tokenization policy applied to names and descriptions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    /// Append the whole name (underscores as spaces) as an extra candidate
    pub include_phrase: bool,
    /// Words shorter than this many chars are dropped (0 disables the cutoff)
    pub min_word_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            include_phrase: true,
            min_word_len: 0,
        }
    }
}

impl Tokenizer {
    /// Split words only, and drop anything shorter than three chars
    pub fn strict() -> Self {
        Self {
            include_phrase: false,
            min_word_len: 3,
        }
    }

    /// Split a name on spaces and underscores.
    ///
    /// Empty pieces from doubled or trailing separators are skipped. With
    /// `include_phrase`, multi-word names also yield the full phrase.
    pub fn tokenize(&self, name: &str) -> Vec<String> {
        let mut tokens: Vec<String> = name
            .split([' ', '_'])
            .filter(|word| !word.is_empty())
            .map(str::to_string)
            .collect();

        if self.include_phrase && tokens.len() > 1 {
            tokens.push(tokens.join(" "));
        }

        tokens
    }

    /// Whether a single token survives stopword and length filtering
    pub fn keep(&self, token: &str) -> bool {
        !token.is_empty()
            && token.chars().count() >= self.min_word_len
            && !STOP_WORDS.contains(&token)
    }

    /// Drop stopwords (and short words under the strict policy), keeping order
    pub fn filter_stopwords<I, S>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tokens
            .into_iter()
            .filter(|token| self.keep(token.as_ref()))
            .map(|token| token.as_ref().to_string())
            .collect()
    }

    /// Candidate words for an entry name: tokenize, then filter
    pub fn name_words(&self, name: &str) -> Vec<String> {
        self.filter_stopwords(self.tokenize(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_spaces_and_underscores() {
        let tokenizer = Tokenizer::strict();
        assert_eq!(
            tokenizer.tokenize("face_with tears_of_joy"),
            vec!["face", "with", "tears", "of", "joy"]
        );
    }

    #[test]
    fn test_tokenize_appends_phrase() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("party_popper"),
            vec!["party", "popper", "party popper"]
        );
        // Single word names do not repeat themselves
        assert_eq!(tokenizer.tokenize("tada"), vec!["tada"]);
    }

    #[test]
    fn test_tokenize_skips_empty_pieces() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.tokenize("  red__heart "),
            vec!["red", "heart", "red heart"]
        );
        assert!(tokenizer.tokenize("").is_empty());
    }

    #[test]
    fn test_filter_stopwords_default() {
        let tokenizer = Tokenizer::default();
        let words = tokenizer.filter_stopwords(["the", "cat", "and", "a", "dog"]);
        assert_eq!(words, vec!["cat", "a", "dog"]);
    }

    #[test]
    fn test_filter_stopwords_strict() {
        let tokenizer = Tokenizer::strict();
        let words = tokenizer.filter_stopwords(["the", "cat", "and", "a", "of", "dogs"]);
        assert_eq!(words, vec!["cat", "dogs"]);
    }

    #[test]
    fn test_name_words() {
        let tokenizer = Tokenizer::default();
        assert_eq!(
            tokenizer.name_words("the_end"),
            vec!["end", "the end"]
        );
    }
}
