//! Unit tests for core Saji types.
mod common;
use saji::debounce::Debouncer;
use saji::error::{CatalogError, MediaError, SessionError};
use saji::prelude::*;
use saji::recipe::{MISSING_TIME_SENTINEL, parse_minutes};
use saji::view::count_label;
use std::time::{Duration, Instant};

#[test]
fn test_diet_class_display() {
    assert_eq!(format!("{}", DietClass::Vegetarian), "VEG");
    assert_eq!(format!("{}", DietClass::Egg), "EGG");
    assert_eq!(format!("{}", DietClass::NonVegetarian), "NON VEG");
}

#[test]
fn test_diet_class_parses_sheet_spellings() {
    for raw in ["VEG", "veg", " Veg ", "Vegetarian"] {
        assert_eq!(raw.parse::<DietClass>(), Ok(DietClass::Vegetarian), "{}", raw);
    }
    for raw in ["Non Veg", "NON-VEG", "non_veg", "NonVegetarian"] {
        assert_eq!(raw.parse::<DietClass>(), Ok(DietClass::NonVegetarian), "{}", raw);
    }
    for raw in ["EGG", "Eggetarian", "Contains Egg"] {
        assert_eq!(raw.parse::<DietClass>(), Ok(DietClass::Egg), "{}", raw);
    }

    let err = "Pescatarian".parse::<DietClass>().unwrap_err();
    assert_eq!(err.to_string(), "unknown diet class 'Pescatarian'");
}

#[test]
fn test_parse_minutes_leading_integer() {
    assert_eq!(parse_minutes("12 mins"), Some(12));
    assert_eq!(parse_minutes("  7"), Some(7));
    assert_eq!(parse_minutes("+15min"), Some(15));
    assert_eq!(parse_minutes("0"), Some(0));
    assert_eq!(parse_minutes(""), None);
    assert_eq!(parse_minutes("mins 12"), None);
    assert_eq!(parse_minutes("-5"), None);
    assert_eq!(parse_minutes("99999999999"), None);
}

#[test]
fn test_cooking_time_sort_key() {
    assert_eq!(CookingTime::fast(18).sort_key(), 18);
    assert_eq!(CookingTime::new(None, Some(30)).effective(), None);
    assert_eq!(CookingTime::new(None, Some(30)).sort_key(), MISSING_TIME_SENTINEL);
    assert_eq!(CookingTime::new(Some(9), Some(30)).effective(), Some(9));
}

#[test]
fn test_accessory_list_tokens() {
    let list = AccessoryList::parse(" Pot ,Pan,, Pot ,Silicone Stirrer ");
    let tokens: Vec<&str> = list.iter().collect();
    assert_eq!(tokens, vec!["Pot", "Pan", "Silicone Stirrer"]);
    assert_eq!(list.len(), 3);
    assert_eq!(list.to_string(), "Pot, Pan, Silicone Stirrer");

    assert!(list.contains("Pan"));
    assert!(!list.contains("an"));
    assert!(!list.contains("pan"));

    assert!(AccessoryList::parse("").is_empty());
    assert!(AccessoryList::parse(" , ,").is_empty());
}

#[test]
fn test_sort_order_parse_and_toggle() {
    assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
    assert_eq!("Descending".parse::<SortOrder>(), Ok(SortOrder::Descending));
    assert!("sideways".parse::<SortOrder>().is_err());
    assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    assert_eq!(SortOrder::Descending.toggled(), SortOrder::Ascending);
    assert_eq!(SortOrder::default(), SortOrder::Ascending);
    assert_eq!(format!("{}", SortOrder::Descending), "descending");
}

#[test]
fn test_selection_any_is_not_a_value() {
    let any: Selection<String> = Selection::Any;
    let all: Selection<String> = "All".into();
    assert!(any.is_any());
    assert!(!all.is_any());
    assert_ne!(any, all);
    assert!(any.admits(|_| false));
    assert!(!all.admits(|v| v == "Pan"));
    assert_eq!(Selection::from(Some(3)), Selection::Only(3));
    assert_eq!(Selection::<u8>::from(None), Selection::Any);
}

#[test]
fn test_default_query_state() {
    let query = QueryState::default();
    assert_eq!(query.max_time, 20);
    assert_eq!(query.sort, SortOrder::Ascending);
    assert!(query.search.is_empty());
    assert!(query.diet.is_any());
    assert!(!query.has_filters());
    assert_eq!(query.selection(Facet::Cuisine), Selection::Any);
}

#[test]
fn test_query_selection_renders_diet_label() {
    let mut query = QueryState::default();
    query.diet = Selection::Only(DietClass::NonVegetarian);
    query.mode = "Boiling".into();
    assert_eq!(query.selection(Facet::Diet), Selection::Only("NON VEG"));
    assert_eq!(query.selection(Facet::Mode), Selection::Only("Boiling"));
    assert!(query.has_filters());
}

#[test]
fn test_debouncer_restarts_on_schedule() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    assert!(!debouncer.is_pending());

    debouncer.schedule(start);
    debouncer.schedule(start + Duration::from_millis(200));
    assert!(!debouncer.fire(start + Duration::from_millis(300)));
    assert!(debouncer.fire(start + Duration::from_millis(500)));
    // Fires once.
    assert!(!debouncer.fire(start + Duration::from_millis(900)));

    debouncer.schedule(start);
    debouncer.cancel();
    assert!(!debouncer.fire(start + Duration::from_secs(5)));
    assert_eq!(Debouncer::default().delay(), Duration::from_millis(300));
}

#[test]
fn test_recipe_card_text() {
    let mut recipe = Recipe::new("Tomato Gravy")
        .with_diet(DietClass::Vegetarian)
        .with_mode("Sauteing")
        .with_cuisine("Indian")
        .with_category("Base Gravy")
        .with_time(18)
        .with_accessories("Pan, Silicone Stirrer")
        .with_popup("popup_images/TOMATO GRAVY.pdf");
    recipe.time.conventional = Some(35);

    let card = RecipeCard::from(&recipe);
    assert_eq!(card.title, "Tomato Gravy");
    assert_eq!(card.time_badge, "18m");
    assert_eq!(card.meta, "VEG | Sauteing | Indian");
    assert_eq!(card.category, "Base Gravy");
    assert_eq!(
        card.accessory_line.as_deref(),
        Some("Accessory: Pan, Silicone Stirrer")
    );
    assert_eq!(card.conventional_time.as_deref(), Some("Normal: 35 mins"));
    assert!(card.popup.expect("popup should be set").is_document());

    let bare = RecipeCard::from(&Recipe::new("Plain"));
    assert_eq!(bare.time_badge, "-");
    assert_eq!(bare.accessory_line, None);
    assert_eq!(bare.conventional_time, None);
}

#[test]
fn test_count_label() {
    assert_eq!(count_label(0), "0 Recipes Found");
    assert_eq!(count_label(1), "1 Recipe Found");
    assert_eq!(count_label(12), "12 Recipes Found");
}

#[test]
fn test_error_messages() {
    let err = CatalogError::NotAnArray { found: "an object" };
    assert_eq!(
        err.to_string(),
        "Catalog payload must be a JSON array of records, found an object"
    );
    assert_eq!(
        MediaError::NotFound("TOMATO-GRAVY.zip".into()).to_string(),
        "No media bundle named 'TOMATO-GRAVY.zip' is available"
    );
    assert_eq!(
        SessionError::CatalogNotLoaded.to_string(),
        "The catalog has not finished loading"
    );
}

#[test]
fn test_facet_labels() {
    assert_eq!(format!("{}", Facet::Diet), "Veg/Non Veg");
    assert_eq!(Facet::Mode.label(), "Cooking Mode");
    assert!(Facet::Accessory.is_multi_valued());
    assert!(!Facet::Cuisine.is_multi_valued());

    let recipe = Recipe::new("Stir Fry")
        .with_diet(DietClass::Egg)
        .with_accessories("Pot, Pan");
    assert_eq!(Facet::Diet.values_of(&recipe), vec!["EGG"]);
    assert_eq!(Facet::Accessory.values_of(&recipe), vec!["Pot", "Pan"]);
}
