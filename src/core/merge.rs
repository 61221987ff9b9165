//! Merging of the local quote list with the remote one.

use super::quote::Quote;
use std::collections::HashSet;

/// Combines `local` and `remote` into one list.
///
/// The result starts with `remote` in its given order; local quotes whose text
/// does not appear in `remote` follow in their original order. Remote entries
/// win any text collision, so the operation is not commutative.
pub fn merge(local: &[Quote], remote: &[Quote]) -> Vec<Quote> {
    let remote_texts: HashSet<&str> = remote.iter().map(|q| q.text.as_str()).collect();

    let mut merged = Vec::with_capacity(local.len() + remote.len());
    merged.extend_from_slice(remote);
    merged.extend(
        local
            .iter()
            .filter(|q| !remote_texts.contains(q.text.as_str()))
            .cloned(),
    );
    merged
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    // Few distinct texts so local and remote collide often
    fn quote_strategy() -> impl Strategy<Value = Quote> {
        ("[ab]{1,2}", prop_oneof![Just("X"), Just("Y"), Just("General")])
            .prop_map(|(text, category)| Quote::new(text, category))
    }

    fn quotes_strategy() -> impl Strategy<Value = Vec<Quote>> {
        proptest::collection::vec(quote_strategy(), 0..8)
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

        #[test]
        fn empty_remote_is_identity(local in quotes_strategy()) {
            prop_assert_eq!(merge(&local, &[]), local);
        }

        #[test]
        fn empty_local_yields_remote(remote in quotes_strategy()) {
            prop_assert_eq!(merge(&[], &remote), remote);
        }

        #[test]
        fn remote_comes_first_then_local_survivors(
            local in quotes_strategy(),
            remote in quotes_strategy(),
        ) {
            let merged = merge(&local, &remote);
            let survivors: Vec<Quote> = local
                .iter()
                .filter(|l| remote.iter().all(|r| r.text != l.text))
                .cloned()
                .collect();

            prop_assert_eq!(&merged[..remote.len()], remote.as_slice());
            prop_assert_eq!(&merged[remote.len()..], survivors.as_slice());
            prop_assert!(merged.len() <= local.len() + remote.len());
        }

        #[test]
        fn no_local_text_is_lost(local in quotes_strategy(), remote in quotes_strategy()) {
            let merged = merge(&local, &remote);
            for quote in &local {
                prop_assert!(merged.iter().any(|m| m.text == quote.text));
            }
        }

        #[test]
        fn idempotent_on_stable_remote(local in quotes_strategy(), remote in quotes_strategy()) {
            let once = merge(&local, &remote);
            prop_assert_eq!(merge(&once, &remote), once);
        }
    }
}
