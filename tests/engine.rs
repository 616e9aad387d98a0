//! Filtering and sorting tests for the result engine.
mod common;
use common::*;
use saji::engine::sort_by_time;
use saji::prelude::*;

fn query_with(events: impl IntoIterator<Item = QueryEvent>) -> QueryState {
    let reducer = QueryReducer::default();
    events
        .into_iter()
        .fold(QueryState::default(), |state, event| reducer.reduce(state, event))
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_default_query_keeps_both_recipes_sorted_by_time() {
        let catalog = scenario_catalog();
        let outcome = filter(&catalog, &QueryState::default());
        assert_eq!(outcome.count, 2);
        assert_eq!(outcome.names(), vec!["Tomato Gravy", "Quinoa Boiled"]);
    }

    #[test]
    fn test_threshold_19_excludes_quinoa() {
        let catalog = scenario_catalog();
        let outcome = filter(&catalog, &query_with([QueryEvent::SetMaxTime(19)]));
        assert_eq!(outcome.names(), vec!["Tomato Gravy"]);
        assert_eq!(outcome.count, 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let catalog = scenario_catalog();
        let outcome = filter(&catalog, &query_with([QueryEvent::SetMaxTime(18)]));
        assert_eq!(outcome.names(), vec!["Tomato Gravy"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = scenario_catalog();
        let outcome = filter(
            &catalog,
            &query_with([QueryEvent::SetSearch("GrAvY".to_string())]),
        );
        assert_eq!(outcome.names(), vec!["Tomato Gravy"]);

        let blank = filter(&catalog, &query_with([QueryEvent::SetSearch("   ".into())]));
        assert_eq!(blank.count, 2);
    }

    #[test]
    fn test_accessory_selection() {
        let catalog = scenario_catalog();
        let outcome = filter(
            &catalog,
            &query_with([QueryEvent::SetFacet {
                facet: Facet::Accessory,
                selection: "Pot".into(),
            }]),
        );
        assert_eq!(outcome.names(), vec!["Quinoa Boiled"]);
    }

    #[test]
    fn test_threshold_zero_yields_empty() {
        let catalog = scenario_catalog();
        let outcome = filter(&catalog, &query_with([QueryEvent::SetMaxTime(0)]));
        assert!(outcome.is_empty());
        assert_eq!(outcome.count, 0);
    }

    #[test]
    fn test_threshold_zero_keeps_zero_minute_recipes() {
        let catalog = Catalog::new(vec![
            Recipe::new("Quinoa Boiled").with_time(20),
            Recipe::new("Garden Salad").with_time(0),
            Recipe::new("Masala Oats"),
            Recipe::new("Tomato Gravy").with_time(1),
        ]);
        let outcome = filter(&catalog, &query_with([QueryEvent::SetMaxTime(0)]));
        assert_eq!(outcome.names(), vec!["Garden Salad"]);
        assert_eq!(outcome.count, 1);
    }

    #[test]
    fn test_empty_catalog_yields_empty() {
        let catalog = Catalog::default();
        let outcome = filter(&catalog, &QueryState::unbounded());
        assert!(outcome.is_empty());
    }
}

#[cfg(test)]
mod facet_match_tests {
    use super::*;

    #[test]
    fn test_accessory_match_is_exact_token() {
        let catalog = Catalog::new(vec![
            Recipe::new("Stir Fry").with_time(10).with_accessories("Pot, Pan"),
        ]);
        let pan = query_with([QueryEvent::SetFacet {
            facet: Facet::Accessory,
            selection: "Pan".into(),
        }]);
        let partial = query_with([QueryEvent::SetFacet {
            facet: Facet::Accessory,
            selection: "an".into(),
        }]);
        assert_eq!(filter(&catalog, &pan).count, 1);
        assert_eq!(filter(&catalog, &partial).count, 0);
    }

    #[test]
    fn test_single_valued_facets_use_equality() {
        let catalog = kitchen_catalog();
        let indian = query_with([
            QueryEvent::SetMaxTime(u32::MAX),
            QueryEvent::SetFacet {
                facet: Facet::Cuisine,
                selection: "Indian".into(),
            },
        ]);
        assert_eq!(
            filter(&catalog, &indian).names(),
            vec!["Paneer Tikka", "Butter Chicken"]
        );

        let lowercase = query_with([QueryEvent::SetFacet {
            facet: Facet::Cuisine,
            selection: "indian".into(),
        }]);
        assert!(filter(&catalog, &lowercase).is_empty());
    }

    #[test]
    fn test_diet_selection_by_label() {
        let catalog = kitchen_catalog();
        let query = query_with([QueryEvent::SetFacet {
            facet: Facet::Diet,
            selection: "EGG".into(),
        }]);
        assert_eq!(query.diet, Selection::Only(DietClass::Egg));
        assert_eq!(filter(&catalog, &query).names(), vec!["Egg Fried Rice"]);
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let catalog = kitchen_catalog();
        let query = query_with([
            QueryEvent::SetDiet(Selection::Only(DietClass::Vegetarian)),
            QueryEvent::SetFacet {
                facet: Facet::Cuisine,
                selection: "Chinese".into(),
            },
            QueryEvent::SetSearch("momo".into()),
        ]);
        assert_eq!(filter(&catalog, &query).names(), vec!["Veg Momos"]);
    }

    #[test]
    fn test_missing_time_is_excluded_but_faceted() {
        let catalog = kitchen_catalog();
        let outcome = filter(&catalog, &QueryState::unbounded());
        assert!(!outcome.names().contains(&"Masala Oats"));
        assert_eq!(outcome.count, catalog.len() - 1);

        let facets = FacetIndex::build(&catalog);
        assert!(facets.contains(Facet::Category, "Breakfast"));
        assert!(facets.contains(Facet::Accessory, "Pot"));
    }

    #[test]
    fn test_ingredient_terms_must_all_match() {
        let catalog = kitchen_catalog();
        let butter = query_with([QueryEvent::SetMaxTime(60), QueryEvent::AddIngredient("BUTTER".into())]);
        assert_eq!(
            filter(&catalog, &butter).names(),
            vec!["Tomato Soup", "Butter Chicken"]
        );

        let both = query_with([
            QueryEvent::SetMaxTime(60),
            QueryEvent::AddIngredient("butter".into()),
            QueryEvent::AddIngredient("cream".into()),
        ]);
        assert_eq!(filter(&catalog, &both).names(), vec!["Tomato Soup"]);

        // Terms match substrings of ingredient names.
        let rice = query_with([QueryEvent::AddIngredient("rice".into())]);
        assert_eq!(filter(&catalog, &rice).names(), vec!["Egg Fried Rice"]);
    }
}

#[cfg(test)]
mod sort_tests {
    use super::*;

    #[test]
    fn test_ascending_keeps_catalog_order_for_ties() {
        let catalog = kitchen_catalog();
        let outcome = filter(&catalog, &QueryState::unbounded());
        assert_eq!(
            outcome.names(),
            vec![
                "Egg Fried Rice",
                "Veg Momos",
                "Tomato Soup",
                "Paneer Tikka",
                "Butter Chicken"
            ]
        );
    }

    #[test]
    fn test_descending_keeps_catalog_order_for_ties() {
        let catalog = kitchen_catalog();
        let query = query_with([
            QueryEvent::SetMaxTime(u32::MAX),
            QueryEvent::SetSort(SortOrder::Descending),
        ]);
        assert_eq!(
            filter(&catalog, &query).names(),
            vec![
                "Butter Chicken",
                "Paneer Tikka",
                "Egg Fried Rice",
                "Veg Momos",
                "Tomato Soup"
            ]
        );
    }

    #[test]
    fn test_missing_time_sorts_by_sentinel() {
        let timed = Recipe::new("Timed").with_time(5);
        let untimed = Recipe::new("Untimed");

        let mut ascending = vec![&untimed, &timed];
        sort_by_time(&mut ascending, SortOrder::Ascending);
        assert_eq!(ascending[0].name, "Timed");

        let mut descending = vec![&timed, &untimed];
        sort_by_time(&mut descending, SortOrder::Descending);
        assert_eq!(descending[0].name, "Untimed");
    }

    #[test]
    fn test_filter_is_deterministic() {
        let catalog = kitchen_catalog();
        let query = query_with([QueryEvent::ToggleSort, QueryEvent::SetMaxTime(15)]);
        let first = filter(&catalog, &query).names();
        let second = filter(&catalog, &query).names();
        assert_eq!(first, second);
    }
}
