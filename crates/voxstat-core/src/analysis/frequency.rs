//! Word frequency counting.

use std::collections::HashMap;
use std::hash::Hash;

use super::reports::WordCount;

/// Count items and order them by count, most frequent first.
///
/// Ties keep the order in which items were first seen. Every call builds its
/// own accumulator.
pub(crate) fn tally<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match slots.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    // `sort_by` is stable, so equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Count tokens from an iterator.
pub fn count_tokens<'a, I>(tokens: I) -> Vec<WordCount>
where
    I: IntoIterator<Item = &'a str>,
{
    tally(tokens)
        .into_iter()
        .map(|(word, count)| WordCount {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Count whitespace-delimited tokens in `text`.
///
/// An empty or blank corpus yields an empty list.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn count_words(text: &str) -> Vec<WordCount> {
    count_tokens(text.split_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text;

    fn pairs(counts: &[WordCount]) -> Vec<(&str, usize)> {
        counts.iter().map(|c| (c.word.as_str(), c.count)).collect()
    }

    #[test]
    fn empty_corpus_is_empty() {
        assert!(count_words("").is_empty());
        assert!(count_words(" \n\t").is_empty());
    }

    #[test]
    fn single_token() {
        assert_eq!(pairs(&count_words("hello")), vec![("hello", 1)]);
    }

    #[test]
    fn cat_sat_on_the_mat() {
        let counts = count_words("the cat sat on the mat");
        assert_eq!(
            pairs(&counts),
            vec![("the", 2), ("cat", 1), ("sat", 1), ("on", 1), ("mat", 1)]
        );
    }

    #[test]
    fn ties_keep_first_appearance() {
        let counts = count_words("b a c a b c d");
        assert_eq!(pairs(&counts), vec![("b", 2), ("a", 2), ("c", 2), ("d", 1)]);
    }

    #[test]
    fn case_and_punctuation_are_distinct() {
        let counts = count_words("The the the.");
        assert_eq!(pairs(&counts), vec![("The", 1), ("the", 1), ("the.", 1)]);
    }

    #[test]
    fn counts_sum_to_token_count() {
        for corpus in [
            "",
            "one",
            "a a a b",
            "the quick brown fox jumps over the lazy dog the end",
            "  spaced\tout \n words  words ",
        ] {
            let total: usize = count_words(corpus).iter().map(|c| c.count).sum();
            assert_eq!(total, text::token_count(corpus), "corpus {corpus:?}");
        }
    }

    #[test]
    fn counts_are_non_increasing() {
        let counts = count_words("x y y z z z w");
        assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn calls_do_not_share_state() {
        let first = count_words("alpha alpha");
        let second = count_words("alpha");
        assert_eq!(first[0].count, 2);
        assert_eq!(second[0].count, 1);
    }
}
