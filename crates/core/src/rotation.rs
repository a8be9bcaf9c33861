//! Quote rotation: pick a quote for a mood that the client has not seen yet.
//!
//! Each client gets every active quote for a mood once before any repeat.
//! When the client has seen them all, its exposure history for that mood is
//! cleared and the full active set becomes eligible again. Because the reset
//! and the next pick happen in the same call, the quote shown last before a
//! reset can be shown again right after it.
//!
//! Storage is abstracted behind [`QuoteStore`] and [`ExposureStore`]; the
//! selector holds no state of its own. Concurrent calls for the same client
//! and mood are not serialized, so a race can record a duplicate exposure or
//! skip a reset. That only weakens the "avoid repeats" behaviour.

use std::collections::HashSet;
use std::fmt;
use std::future::Future;

use rand::seq::IndexedRandom;

use crate::mood::MoodType;
use crate::types::DbId;

/// Read access to quotes.
pub trait QuoteStore: Send + Sync {
    /// Quote representation returned to callers (with author name resolved).
    type Quote: Send;
    /// Storage failure, propagated unchanged by the selector.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Ids of all active quotes tagged with `mood`. Must not be cached.
    fn list_active_quote_ids(
        &self,
        mood: MoodType,
    ) -> impl Future<Output = Result<Vec<DbId>, Self::Error>> + Send;

    /// Load a single quote by id.
    fn get_quote(
        &self,
        id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Quote>, Self::Error>> + Send;
}

/// Per-client record of which quotes have been shown.
pub trait ExposureStore: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The subset of `candidate_ids` already shown to `client_id`.
    fn list_exposed_ids(
        &self,
        client_id: &str,
        mood: MoodType,
        candidate_ids: &[DbId],
    ) -> impl Future<Output = Result<Vec<DbId>, Self::Error>> + Send;

    /// Record that `quote_id` was shown to `client_id`.
    fn add_exposure(
        &self,
        client_id: &str,
        quote_id: DbId,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Forget every quote of `mood` shown to `client_id`, including quotes
    /// that have since been deactivated. Returns the number of exposure
    /// records removed.
    fn delete_exposures(
        &self,
        client_id: &str,
        mood: MoodType,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;
}

/// Outcome of a successful [`select_quote`] call.
#[derive(Debug, Clone)]
pub struct Selection<Q> {
    pub quote: Q,
    /// Id of the chosen quote.
    pub quote_id: DbId,
    /// Whether the client's history for this mood was cleared first.
    pub reset: bool,
    /// Number of active quotes the choice was made from (the whole mood).
    pub active_count: usize,
}

/// Errors returned by [`select_quote`].
#[derive(Debug)]
pub enum RotationError<E> {
    /// The mood is valid but has no active quotes.
    NoQuotesAvailable(MoodType),
    /// The underlying store failed.
    Store(E),
}

impl<E: fmt::Display> fmt::Display for RotationError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQuotesAvailable(mood) => write!(f, "No quotes found for mood type: {mood}"),
            Self::Store(err) => write!(f, "Quote store error: {err}"),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RotationError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NoQuotesAvailable(_) => None,
        }
    }
}

/// Choose one element uniformly at random. `None` only for an empty slice.
pub fn pick_uniform<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::rng())
}

/// Ids in `active` that are not in `exposed`, preserving `active` order.
pub fn unseen_ids(active: &[DbId], exposed: &[DbId]) -> Vec<DbId> {
    let exposed: HashSet<DbId> = exposed.iter().copied().collect();
    active
        .iter()
        .copied()
        .filter(|id| !exposed.contains(id))
        .collect()
}

/// Select a quote for `mood` that `client_id` has not been shown, record the
/// exposure, and return the quote.
///
/// 1. Load the active quote ids for the mood (fails with
///    [`RotationError::NoQuotesAvailable`] when there are none).
/// 2. Load which of those the client has already seen.
/// 3. If nothing is left unseen, delete all of the client's exposures for
///    the mood and treat every active id as unseen.
/// 4. Pick uniformly among the unseen ids, record the exposure, and load
///    the quote.
pub async fn select_quote<Q, X>(
    quotes: &Q,
    exposures: &X,
    mood: MoodType,
    client_id: &str,
) -> Result<Selection<Q::Quote>, RotationError<Q::Error>>
where
    Q: QuoteStore,
    X: ExposureStore<Error = Q::Error>,
{
    let active = quotes
        .list_active_quote_ids(mood)
        .await
        .map_err(RotationError::Store)?;
    if active.is_empty() {
        return Err(RotationError::NoQuotesAvailable(mood));
    }

    let exposed = exposures
        .list_exposed_ids(client_id, mood, &active)
        .await
        .map_err(RotationError::Store)?;

    let mut unseen = unseen_ids(&active, &exposed);
    let reset = unseen.is_empty();
    if reset {
        exposures
            .delete_exposures(client_id, mood)
            .await
            .map_err(RotationError::Store)?;
        unseen = active.clone();
    }

    let chosen = *pick_uniform(&unseen).ok_or(RotationError::NoQuotesAvailable(mood))?;

    exposures
        .add_exposure(client_id, chosen)
        .await
        .map_err(RotationError::Store)?;

    // The quote can vanish between the id scan and this read when its
    // author is hard-deleted.
    let quote = quotes
        .get_quote(chosen)
        .await
        .map_err(RotationError::Store)?
        .ok_or(RotationError::NoQuotesAvailable(mood))?;

    Ok(Selection {
        quote,
        quote_id: chosen,
        reset,
        active_count: active.len(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashMap};
    use std::sync::Mutex;

    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug)]
    struct StoreDown;

    impl fmt::Display for StoreDown {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("store unavailable")
        }
    }

    impl std::error::Error for StoreDown {}

    #[derive(Debug, Clone)]
    struct MemQuote {
        id: DbId,
        mood: MoodType,
        active: bool,
    }

    /// In-memory quote and exposure store.
    #[derive(Default)]
    struct MemStore {
        quotes: Mutex<Vec<MemQuote>>,
        exposures: Mutex<Vec<(String, DbId)>>,
        fail: bool,
    }

    impl MemStore {
        fn with_quotes(quotes: &[(DbId, MoodType)]) -> Self {
            let store = Self::default();
            store.quotes.lock().unwrap().extend(quotes.iter().map(|&(id, mood)| MemQuote {
                id,
                mood,
                active: true,
            }));
            store
        }

        fn deactivate(&self, id: DbId) {
            for q in self.quotes.lock().unwrap().iter_mut() {
                if q.id == id {
                    q.active = false;
                }
            }
        }

        fn exposures_for(&self, client_id: &str) -> Vec<DbId> {
            self.exposures
                .lock()
                .unwrap()
                .iter()
                .filter(|(c, _)| c == client_id)
                .map(|(_, id)| *id)
                .collect()
        }
    }

    impl QuoteStore for MemStore {
        type Quote = MemQuote;
        type Error = StoreDown;

        async fn list_active_quote_ids(&self, mood: MoodType) -> Result<Vec<DbId>, StoreDown> {
            if self.fail {
                return Err(StoreDown);
            }
            Ok(self
                .quotes
                .lock()
                .unwrap()
                .iter()
                .filter(|q| q.active && q.mood == mood)
                .map(|q| q.id)
                .collect())
        }

        async fn get_quote(&self, id: DbId) -> Result<Option<MemQuote>, StoreDown> {
            Ok(self.quotes.lock().unwrap().iter().find(|q| q.id == id).cloned())
        }
    }

    impl ExposureStore for MemStore {
        type Error = StoreDown;

        async fn list_exposed_ids(
            &self,
            client_id: &str,
            _mood: MoodType,
            candidate_ids: &[DbId],
        ) -> Result<Vec<DbId>, StoreDown> {
            Ok(self
                .exposures_for(client_id)
                .into_iter()
                .filter(|id| candidate_ids.contains(id))
                .collect())
        }

        async fn add_exposure(&self, client_id: &str, quote_id: DbId) -> Result<(), StoreDown> {
            self.exposures
                .lock()
                .unwrap()
                .push((client_id.to_string(), quote_id));
            Ok(())
        }

        async fn delete_exposures(
            &self,
            client_id: &str,
            mood: MoodType,
        ) -> Result<u64, StoreDown> {
            let of_mood: Vec<DbId> = self
                .quotes
                .lock()
                .unwrap()
                .iter()
                .filter(|q| q.mood == mood)
                .map(|q| q.id)
                .collect();
            let mut exposures = self.exposures.lock().unwrap();
            let before = exposures.len();
            exposures.retain(|(c, id)| !(c == client_id && of_mood.contains(id)));
            Ok((before - exposures.len()) as u64)
        }
    }

    async fn pick(store: &MemStore, mood: MoodType, client: &str) -> Selection<MemQuote> {
        select_quote(store, store, mood, client).await.unwrap()
    }

    #[test]
    fn unseen_preserves_active_order() {
        assert_eq!(unseen_ids(&[5, 3, 9, 1], &[9, 42]), vec![5, 3, 1]);
        assert!(unseen_ids(&[1, 2], &[2, 1]).is_empty());
    }

    #[test]
    fn pick_uniform_handles_empty_and_singleton() {
        assert_eq!(pick_uniform::<DbId>(&[]), None);
        assert_eq!(pick_uniform(&[7]), Some(&7));
        let ids = [1, 2, 3];
        for _ in 0..50 {
            assert!(ids.contains(pick_uniform(&ids).unwrap()));
        }
    }

    #[tokio::test]
    async fn fresh_client_always_gets_a_quote() {
        let store = MemStore::with_quotes(&[(1, MoodType::Anxiety)]);
        let selection = pick(&store, MoodType::Anxiety, "fresh").await;
        assert_eq!(selection.quote.id, 1);
        assert!(!selection.reset);
        assert_eq!(store.exposures_for("fresh"), vec![1]);
    }

    #[tokio::test]
    async fn mood_without_quotes_is_not_found() {
        let store = MemStore::with_quotes(&[(1, MoodType::Stress)]);
        for _ in 0..3 {
            assert_matches!(
                select_quote(&store, &store, MoodType::Guilt, "c1").await,
                Err(RotationError::NoQuotesAvailable(MoodType::Guilt))
            );
        }
        assert!(store.exposures_for("c1").is_empty());
    }

    #[tokio::test]
    async fn no_repeats_until_every_quote_was_shown() {
        let ids: Vec<(DbId, MoodType)> = (1..=6).map(|id| (id, MoodType::Fear)).collect();
        let store = MemStore::with_quotes(&ids);

        let mut seen = BTreeSet::new();
        for _ in 0..6 {
            let selection = pick(&store, MoodType::Fear, "c1").await;
            assert!(!selection.reset);
            assert!(seen.insert(selection.quote_id), "quote repeated before reset");
        }
        assert_eq!(seen, (1..=6).collect());
    }

    #[tokio::test]
    async fn call_after_exhaustion_resets_history_to_one() {
        let store = MemStore::with_quotes(&[
            (1, MoodType::Stress),
            (2, MoodType::Stress),
            (3, MoodType::Stress),
        ]);
        for _ in 0..3 {
            pick(&store, MoodType::Stress, "c1").await;
        }
        assert_eq!(store.exposures_for("c1").len(), 3);

        let selection = pick(&store, MoodType::Stress, "c1").await;
        assert!(selection.reset);
        assert_eq!(store.exposures_for("c1"), vec![selection.quote_id]);
    }

    #[tokio::test]
    async fn stress_scenario_two_quotes() {
        let store = MemStore::with_quotes(&[(10, MoodType::Stress), (11, MoodType::Stress)]);
        let first = pick(&store, MoodType::Stress, "c1").await.quote_id;
        let second = pick(&store, MoodType::Stress, "c1").await.quote_id;
        assert_eq!(BTreeSet::from([first, second]), BTreeSet::from([10, 11]));

        let third = pick(&store, MoodType::Stress, "c1").await;
        assert!(third.reset);
        assert!([10, 11].contains(&third.quote_id));
    }

    #[tokio::test]
    async fn single_quote_is_shown_every_time() {
        let store = MemStore::with_quotes(&[(4, MoodType::Anger)]);
        let first = pick(&store, MoodType::Anger, "c1").await;
        assert!(!first.reset);
        for _ in 0..3 {
            let next = pick(&store, MoodType::Anger, "c1").await;
            assert_eq!(next.quote_id, 4);
            assert!(next.reset);
        }
        assert_eq!(store.exposures_for("c1"), vec![4]);
    }

    #[tokio::test]
    async fn deactivated_quote_leaves_pool_immediately() {
        let store = MemStore::with_quotes(&[
            (1, MoodType::Sadness),
            (2, MoodType::Sadness),
            (3, MoodType::Sadness),
        ]);
        let shown = pick(&store, MoodType::Sadness, "c1").await.quote_id;
        store.deactivate(shown);

        for _ in 0..10 {
            let selection = pick(&store, MoodType::Sadness, "c1").await;
            assert_ne!(selection.quote_id, shown);
        }
    }

    #[tokio::test]
    async fn deactivating_last_unseen_quote_triggers_reset() {
        let store = MemStore::with_quotes(&[(1, MoodType::Fear), (2, MoodType::Fear)]);
        let shown = pick(&store, MoodType::Fear, "c1").await.quote_id;
        let other = if shown == 1 { 2 } else { 1 };
        store.deactivate(other);

        let selection = pick(&store, MoodType::Fear, "c1").await;
        assert!(selection.reset);
        assert_eq!(selection.quote_id, shown);
        assert_eq!(selection.active_count, 1);
    }

    #[tokio::test]
    async fn reset_forgets_exposures_of_deactivated_quotes() {
        let store = MemStore::with_quotes(&[
            (1, MoodType::Stress),
            (2, MoodType::Stress),
            (3, MoodType::Stress),
        ]);
        let shown = pick(&store, MoodType::Stress, "c1").await.quote_id;
        store.deactivate(shown);

        // Two picks exhaust the remaining quotes, the third resets.
        for _ in 0..2 {
            assert!(!pick(&store, MoodType::Stress, "c1").await.reset);
        }
        let selection = pick(&store, MoodType::Stress, "c1").await;
        assert!(selection.reset);
        assert_ne!(selection.quote_id, shown);
        assert_eq!(store.exposures_for("c1"), vec![selection.quote_id]);
    }

    #[tokio::test]
    async fn reset_keeps_exposures_of_other_moods() {
        let store = MemStore::with_quotes(&[(1, MoodType::Anger), (2, MoodType::Guilt)]);
        pick(&store, MoodType::Guilt, "c1").await;
        pick(&store, MoodType::Anger, "c1").await;

        let selection = pick(&store, MoodType::Anger, "c1").await;
        assert!(selection.reset);
        let mut remaining = store.exposures_for("c1");
        remaining.sort_unstable();
        assert_eq!(remaining, vec![1, 2]);
    }

    #[tokio::test]
    async fn clients_and_moods_are_tracked_independently() {
        let store = MemStore::with_quotes(&[
            (1, MoodType::Stress),
            (2, MoodType::Stress),
            (3, MoodType::Guilt),
        ]);
        pick(&store, MoodType::Stress, "a").await;
        pick(&store, MoodType::Stress, "a").await;

        let guilt = pick(&store, MoodType::Guilt, "a").await;
        assert_eq!(guilt.quote_id, 3);
        assert!(!guilt.reset);

        let other_client = pick(&store, MoodType::Stress, "b").await;
        assert!(!other_client.reset);

        let mut per_client: HashMap<&str, usize> = HashMap::new();
        for client in ["a", "b"] {
            per_client.insert(client, store.exposures_for(client).len());
        }
        assert_eq!(per_client["a"], 3);
        assert_eq!(per_client["b"], 1);
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store = MemStore {
            fail: true,
            ..MemStore::default()
        };
        let err = select_quote(&store, &store, MoodType::Stress, "c1")
            .await
            .unwrap_err();
        assert_matches!(err, RotationError::Store(StoreDown));
        assert_eq!(err.to_string(), "Quote store error: store unavailable");
    }
}
