//! Property tests for the marker block splice.

use proptest::prelude::*;

use concat_config::domain::{splice, MarkerPair, SpliceAction};

/// Text that can never contain a marker line
fn marker_free_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 =\"\\[\\]._\n-]{0,200}").unwrap()
}

/// Raw bytes, not necessarily UTF-8, that can never contain a marker line
fn marker_free_bytes() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>().prop_filter("no '#'", |b| *b != b'#'), 0..128)
}

fn markers() -> MarkerPair {
    MarkerPair::for_base("base.toml")
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging the same base twice gives the same file as merging once.
    #[test]
    fn property_merge_is_idempotent(
        target in marker_free_text(),
        base in marker_free_text(),
    ) {
        let once = splice(&target, &base, &markers()).unwrap();
        let twice = splice(&once.content, &base, &markers()).unwrap();

        prop_assert_eq!(once.action, SpliceAction::Appended);
        prop_assert_eq!(twice.action, SpliceAction::Replaced);
        prop_assert_eq!(twice.content, once.content);
    }

    /// PROPERTY: text outside the markers survives a replace byte for byte.
    #[test]
    fn property_replace_preserves_surrounding_text(
        before in marker_free_text(),
        stale in marker_free_text(),
        after in marker_free_text(),
        base in marker_free_text(),
    ) {
        let m = markers();
        let target = format!("{before}{}{stale}{}{after}", m.begin(), m.end());

        let out = splice(&target, &base, &m).unwrap();

        prop_assert_eq!(
            out.content,
            format!("{before}{}\n{base}\n{}{after}", m.begin(), m.end()).into_bytes()
        );
    }

    /// PROPERTY: arbitrary bytes outside the block, valid UTF-8 or not, survive.
    #[test]
    fn property_arbitrary_bytes_are_preserved(
        before in marker_free_bytes(),
        base in marker_free_bytes(),
    ) {
        let m = markers();
        let out = splice(&before, &base, &m).unwrap();

        prop_assert!(out.content.starts_with(&before));
        let twice = splice(&out.content, &base, &m).unwrap();
        prop_assert_eq!(twice.content, out.content);
    }

    /// PROPERTY: the block only ever reflects the latest base.
    #[test]
    fn property_latest_base_wins(
        target in marker_free_text(),
        old_base in marker_free_text(),
        new_base in marker_free_text(),
    ) {
        let m = markers();
        let first = splice(&target, &old_base, &m).unwrap();
        let updated = splice(&first.content, &new_base, &m).unwrap();
        let direct = splice(&target, &new_base, &m).unwrap();

        prop_assert_eq!(updated.content, direct.content);
    }

    /// PROPERTY: the merged file has exactly one begin and one end marker.
    #[test]
    fn property_exactly_one_block(
        target in marker_free_text(),
        base in marker_free_text(),
    ) {
        let m = markers();
        let out = splice(&target, &base, &m).unwrap();
        let merged = String::from_utf8(out.content).unwrap();

        prop_assert_eq!(merged.matches(m.begin()).count(), 1);
        prop_assert_eq!(merged.matches(m.end()).count(), 1);
    }
}
