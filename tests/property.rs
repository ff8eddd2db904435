//! Property tests for the like ledger
//!
//! The core invariant: an idea's like count always equals the number
//! of distinct keys whose latest operation left them in the liked
//! state, no matter what sequence of sets and toggles produced it.

use std::collections::HashMap;

use proptest::prelude::*;

use tradeboard::backend::ideas::IdeaStore;
use tradeboard::shared::NewIdea;

#[derive(Debug, Clone)]
enum LikeOp {
    Set(bool),
    Toggle,
}

fn like_op() -> impl Strategy<Value = LikeOp> {
    prop_oneof![
        any::<bool>().prop_map(LikeOp::Set),
        Just(LikeOp::Toggle),
    ]
}

/// A who-key drawn from a small pool so sequences revisit the same key
fn who_key() -> impl Strategy<Value = String> {
    (0u8..5).prop_map(|n| format!("who-{}", n))
}

proptest! {
    #[test]
    fn like_count_matches_latest_state_per_key(
        ops in prop::collection::vec((who_key(), like_op()), 0..60)
    ) {
        let mut store = IdeaStore::new();
        let idea = store
            .create(NewIdea { title: "prop".to_string(), ..Default::default() })
            .unwrap();

        // Reference model: latest state per key
        let mut model: HashMap<String, bool> = HashMap::new();

        for (who, op) in ops {
            let liked = match op {
                LikeOp::Set(flag) => {
                    store.set_like(&idea.id, &who, flag).unwrap();
                    flag
                }
                LikeOp::Toggle => store.toggle_like(&idea.id, &who).unwrap().0,
            };
            model.insert(who.clone(), liked);

            let expected = model.values().filter(|v| **v).count();
            prop_assert_eq!(store.like_count(&idea.id), expected);
            prop_assert_eq!(store.is_liked_by(&idea.id, &who), liked);
        }
    }

    #[test]
    fn toggle_twice_restores_count(
        warmup in prop::collection::vec((who_key(), any::<bool>()), 0..20),
        who in who_key()
    ) {
        let mut store = IdeaStore::new();
        let idea = store
            .create(NewIdea { title: "prop".to_string(), ..Default::default() })
            .unwrap();

        for (key, flag) in warmup {
            store.set_like(&idea.id, &key, flag).unwrap();
        }

        let before = store.like_count(&idea.id);
        store.toggle_like(&idea.id, &who).unwrap();
        store.toggle_like(&idea.id, &who).unwrap();
        prop_assert_eq!(store.like_count(&idea.id), before);
    }

    #[test]
    fn set_is_idempotent(
        who in who_key(),
        flag in any::<bool>(),
        repeats in 1usize..5
    ) {
        let mut store = IdeaStore::new();
        let idea = store
            .create(NewIdea { title: "prop".to_string(), ..Default::default() })
            .unwrap();

        for _ in 0..repeats {
            store.set_like(&idea.id, &who, flag).unwrap();
        }
        let expected = if flag { 1 } else { 0 };
        prop_assert_eq!(store.like_count(&idea.id), expected);
    }
}
