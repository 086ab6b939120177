//! Property tests for scoring bounds and collection merging.

use std::collections::HashSet;

use geo::Coord;
use playscout_core::{
    Attraction, AttractionCollection, Coordinates, MAX_SCORE, Tags, search_popularity,
    seo_saturation,
};
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

fn tag_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("name".to_owned()),
        Just("website".to_owned()),
        Just("phone".to_owned()),
        Just("wikipedia".to_owned()),
        Just("wikidata".to_owned()),
        Just("tourism".to_owned()),
        Just("leisure".to_owned()),
        "[a-z:_]{1,12}",
    ]
}

fn tags() -> impl Strategy<Value = Tags> {
    btree_map(tag_key(), "[A-Za-z _]{0,10}", 0..24)
}

fn record(name: String) -> Attraction {
    Attraction {
        city: "Berlin".to_owned(),
        name,
        kind: "Playground".to_owned(),
        coordinates: Coordinates::new(52.5, 13.4),
        seo_saturation: 0,
        search_popularity: 0,
    }
}

fn unique_names(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::hash_set("[A-C][a-c]{0,2}", 0..max)
        .prop_map(|names| names.into_iter().collect())
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(tags in tags()) {
        prop_assert!(seo_saturation(&tags) <= MAX_SCORE);
        prop_assert!(search_popularity(&tags) <= MAX_SCORE);
    }

    #[test]
    fn built_attractions_respect_bounds(tags in tags(), lat in -90.0..90.0_f64, lon in -180.0..180.0_f64) {
        if let Some(attraction) = Attraction::from_tags("berlin", Coord { x: lon, y: lat }, &tags) {
            prop_assert!(attraction.seo_saturation <= MAX_SCORE);
            prop_assert!(attraction.search_popularity <= MAX_SCORE);
            prop_assert!(!attraction.name.is_empty());
        } else {
            prop_assert!(tags.get("name").is_none_or(String::is_empty));
        }
    }

    #[test]
    fn names_stay_unique_across_runs(runs in vec(unique_names(6), 1..6)) {
        let mut collection = AttractionCollection::new();
        for batch in runs {
            collection.append_unseen(batch.into_iter().map(record));
        }
        let mut seen = HashSet::new();
        for attraction in &collection {
            prop_assert!(seen.insert(attraction.name.clone()), "duplicate {}", attraction.name);
        }
    }

    #[test]
    fn rerunning_a_batch_adds_nothing(
        stored in unique_names(6),
        batch in vec("[A-C][a-c]{0,2}", 0..8),
    ) {
        let mut collection: AttractionCollection = stored.into_iter().map(record).collect();
        collection.append_unseen(batch.iter().cloned().map(record));
        let snapshot = collection.clone();

        let added = collection.append_unseen(batch.into_iter().map(record));

        prop_assert_eq!(added, 0);
        prop_assert_eq!(collection, snapshot);
    }
}
