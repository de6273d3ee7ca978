//! Client-side fuzzy search over the recipe catalog.
//!
//! Ranking is recomputed per query over the whole in-memory list, so
//! scoring stays deliberately small: a contiguous occurrence of the query
//! outranks a scattered subsequence, earlier occurrences outrank later
//! ones, and matching is case-insensitive. Scores order results and are
//! never shown to the user.

use crate::types::Recipe;

/// Score awarded for each adjacent pair of matched characters.
const CONSECUTIVE_BONUS: i64 = 8;

/// Score `candidate` against `query`; higher is better, `None` means the
/// query characters do not appear in order in the candidate.
pub fn fuzzy_score(query: &str, candidate: &str) -> Option<i64> {
    if query.is_empty() {
        return Some(0);
    }
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();

    // A contiguous run gets the full consecutive bonus, minus a penalty
    // for starting late in the candidate.
    if let Some(pos) = candidate.find(&query) {
        let pairs = query.chars().count().saturating_sub(1) as i64;
        let start = candidate[..pos].chars().count() as i64;
        return Some(pairs * CONSECUTIVE_BONUS - start);
    }

    // Otherwise match the query as an in-order subsequence, greedily left
    // to right: bonus per adjacent pair, penalties for gaps and for the
    // distance to the first matched character.
    let chars: Vec<char> = candidate.chars().collect();
    let mut score = 0i64;
    let mut last: Option<usize> = None;
    let mut from = 0usize;
    for qc in query.chars() {
        let found = (from..chars.len()).find(|&i| chars[i] == qc)?;
        match last {
            Some(prev) if found == prev + 1 => score += CONSECUTIVE_BONUS,
            Some(prev) => score -= (found - prev - 1) as i64,
            None => score -= found as i64,
        }
        last = Some(found);
        from = found + 1;
    }
    Some(score)
}

/// Rank `recipes` against `query` across title and description.
///
/// An empty query returns every recipe in input order rather than nothing.
/// Otherwise each recipe is scored against both fields and the best field
/// score wins; recipes matching neither field are dropped, and the result
/// is sorted by descending score with input order breaking ties.
pub fn search_recipes<'a>(query: &str, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
    if query.is_empty() {
        return recipes.iter().collect();
    }
    let mut hits: Vec<(&Recipe, i64)> = recipes
        .iter()
        .filter_map(|recipe| {
            let title = fuzzy_score(query, &recipe.title);
            let description = fuzzy_score(query, &recipe.description);
            match (title, description) {
                (None, None) => None,
                (a, b) => Some((recipe, a.unwrap_or(i64::MIN).max(b.unwrap_or(i64::MIN)))),
            }
        })
        .collect();
    // Vec::sort_by_key is stable, preserving input order among equal scores.
    hits.sort_by_key(|&(_, score)| std::cmp::Reverse(score));
    hits.into_iter().map(|(recipe, _)| recipe).collect()
}
