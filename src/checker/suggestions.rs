/// Maximum edit distance for a dictionary word to count as a suggestion.
pub const MAX_DISTANCE: usize = 2;

/// Maximum number of dictionary neighbours contributed to a suggestion list.
pub const MAX_NEIGHBOURS: usize = 3;

/// Rank dictionary words by edit distance to `word`.
///
/// Keeps words within `max_distance`, ordered by ascending distance. Words at
/// the same distance are ordered lexicographically, which makes the result
/// independent of the iteration order of the underlying set.
pub fn nearest<'a, I>(word: &str, candidates: I, max_distance: usize, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let word_len = word.chars().count();

    let mut ranked: Vec<(usize, &str)> = candidates
        .into_iter()
        .filter(|candidate| {
            // Length difference is a lower bound on the distance
            candidate.chars().count().abs_diff(word_len) <= max_distance
        })
        .filter_map(|candidate| {
            let distance = edit_distance(word, candidate);
            (distance <= max_distance).then_some((distance, candidate))
        })
        .collect();

    ranked.sort_unstable();
    ranked.truncate(limit);
    ranked.into_iter().map(|(_, w)| w.to_string()).collect()
}

/// Canonical greeting forms for words that extend a known greeting.
pub fn greeting_forms(word: &str) -> Vec<String> {
    let mut forms = Vec::new();

    if word.starts_with("здравствуйте") {
        forms.push("здравствуйте".to_string());
    }
    if word.starts_with("привет") && word.chars().count() > 6 {
        forms.push("привет".to_string());
    }

    forms
}

/// Levenshtein distance over characters: insert, delete and substitute all
/// cost 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a_chars.len();
    }

    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, a_char) in a_chars.iter().enumerate() {
        current[0] = i + 1;

        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = usize::from(a_char != b_char);

            current[j + 1] = std::cmp::min(
                std::cmp::min(
                    previous[j + 1] + 1, // deletion
                    current[j] + 1,      // insertion
                ),
                previous[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}

/// Drop repeated entries, keeping the first occurrence, then cap the length.
pub fn dedup_truncate(candidates: Vec<String>, limit: usize) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(limit);
    for candidate in candidates {
        if result.len() == limit {
            break;
        }
        if !result.contains(&candidate) {
            result.push(candidate);
        }
    }
    result
}
