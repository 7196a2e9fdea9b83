//! Quiz session selection: picking the next unasked question.
//!
//! Sessions hold no server-side state — the caller resubmits the set of
//! already-asked question ids on every call and appends the returned id
//! before the next one.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Question;
use crate::names;

/// Which subset of the catalog a quiz session draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    /// An absent scope or the `0` sentinel means the whole catalog.
    pub fn from_category_id(id: Option<i64>) -> Self {
        match id {
            None => QuizScope::All,
            Some(names::ALL_CATEGORIES_ID) => QuizScope::All,
            Some(id) => QuizScope::Category(id),
        }
    }

    fn admits(&self, question: &Question) -> bool {
        match self {
            QuizScope::All => true,
            QuizScope::Category(id) => question.category == *id,
        }
    }
}

/// Pick the next question to present: filter the catalog to the scope, drop
/// everything already asked, then draw uniformly at random from what remains.
/// `None` means the scope is exhausted ("quiz complete"), not an error — a
/// scope naming an unknown category lands here too.
pub fn next_question<'a, R: Rng>(
    scope: QuizScope,
    asked: &HashSet<i64>,
    catalog: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    let candidates: Vec<&Question> = catalog
        .iter()
        .filter(|q| scope.admits(q))
        .filter(|q| !asked.contains(&q.id))
        .collect();

    candidates.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("Question {id}"),
            answer: format!("Answer {id}"),
            category,
            difficulty: 1,
        }
    }

    fn catalog() -> Vec<Question> {
        vec![
            question(1, 1),
            question(2, 1),
            question(3, 1),
            question(4, 2),
            question(5, 2),
            question(6, 3),
        ]
    }

    #[test]
    fn scope_sentinel_and_absence_mean_all() {
        assert_eq!(QuizScope::from_category_id(None), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(Some(0)), QuizScope::All);
        assert_eq!(
            QuizScope::from_category_id(Some(2)),
            QuizScope::Category(2)
        );
    }

    #[test]
    fn never_returns_an_asked_question() {
        let all = catalog();
        let asked: HashSet<i64> = [1, 2, 4, 6].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = next_question(QuizScope::All, &asked, &all, &mut rng)
                .expect("unasked questions remain");
            assert!(!asked.contains(&picked.id));
        }
    }

    #[test]
    fn respects_category_scope() {
        let all = catalog();
        let asked = HashSet::new();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = next_question(QuizScope::Category(2), &asked, &all, &mut rng)
                .expect("category 2 has questions");
            assert_eq!(picked.category, 2);
        }
    }

    #[test]
    fn unknown_category_yields_none() {
        let all = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_question(QuizScope::Category(99), &HashSet::new(), &all, &mut rng).is_none());
    }

    #[test]
    fn empty_catalog_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_question(QuizScope::All, &HashSet::new(), &[], &mut rng).is_none());
    }

    #[test]
    fn growing_asked_set_exhausts_the_scope() {
        let all = catalog();
        let mut asked = HashSet::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..3 {
            let picked = next_question(QuizScope::Category(1), &asked, &all, &mut rng)
                .expect("category 1 should not be exhausted yet");
            assert!(asked.insert(picked.id), "question repeated within session");
        }
        assert!(next_question(QuizScope::Category(1), &asked, &all, &mut rng).is_none());
    }

    #[test]
    fn all_ids_asked_yields_none() {
        let all = catalog();
        let asked: HashSet<i64> = all.iter().map(|q| q.id).collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(next_question(QuizScope::All, &asked, &all, &mut rng).is_none());
    }

    #[test]
    fn draw_covers_every_remaining_candidate() {
        // Not just the first unasked item in catalog order: over many draws
        // every candidate must show up.
        let all = catalog();
        let asked: HashSet<i64> = [1].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(3);

        let mut seen = HashSet::new();
        for _ in 0..200 {
            let picked = next_question(QuizScope::All, &asked, &all, &mut rng).unwrap();
            seen.insert(picked.id);
        }
        let expected: HashSet<i64> = [2, 3, 4, 5, 6].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn asked_set_is_not_mutated() {
        let all = catalog();
        let asked: HashSet<i64> = [1, 2].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        next_question(QuizScope::All, &asked, &all, &mut rng);
        assert_eq!(asked, [1, 2].into_iter().collect());
    }
}
