//! Common test fixtures for building catalogs and queries.
use saji::prelude::*;

/// The two-recipe catalog used by the worked scenarios.
#[allow(dead_code)]
pub fn scenario_catalog() -> Catalog {
    Catalog::new(vec![
        Recipe::new("Quinoa Boiled")
            .with_diet(DietClass::Vegetarian)
            .with_mode("Boiling")
            .with_cuisine("Continental")
            .with_category("Main Course")
            .with_time(20)
            .with_accessories("Pot"),
        Recipe::new("Tomato Gravy")
            .with_diet(DietClass::Vegetarian)
            .with_mode("Sauteing")
            .with_cuisine("Indian")
            .with_category("Base Gravy")
            .with_time(18)
            .with_accessories("Pan"),
    ])
}

/// A larger catalog with ties, a missing time and mixed diets.
#[allow(dead_code)]
pub fn kitchen_catalog() -> Catalog {
    Catalog::new(vec![
        Recipe::new("Paneer Tikka")
            .with_diet(DietClass::Vegetarian)
            .with_mode("Grilling")
            .with_cuisine("Indian")
            .with_category("Snacks")
            .with_time(15)
            .with_accessories("Grill Mesh, Silicone Stirrer")
            .with_ingredients(["Paneer", "Curd", "Red Chilli Powder"]),
        Recipe::new("Egg Fried Rice")
            .with_diet(DietClass::Egg)
            .with_mode("Frying")
            .with_cuisine("Chinese")
            .with_category("Main Course")
            .with_time(12)
            .with_accessories("Pan, Rice Stirrer")
            .with_ingredients(["Cooked Rice", "Egg", "Spring Onion"]),
        Recipe::new("Butter Chicken")
            .with_diet(DietClass::NonVegetarian)
            .with_mode("Sauteing")
            .with_cuisine("Indian")
            .with_category("Main Course")
            .with_time(25)
            .with_accessories("Pan")
            .with_ingredients(["Chicken", "Butter", "Tomato Puree"]),
        Recipe::new("Masala Oats")
            .with_diet(DietClass::Vegetarian)
            .with_mode("Boiling")
            .with_cuisine("Indian")
            .with_category("Breakfast")
            .with_accessories("Pot"),
        Recipe::new("Veg Momos")
            .with_diet(DietClass::Vegetarian)
            .with_mode("Steaming")
            .with_cuisine("Chinese")
            .with_category("Snacks")
            .with_time(12)
            .with_accessories("Momo Kit")
            .with_ingredients(["Cabbage", "Carrot", "Refined Flour"]),
        Recipe::new("Tomato Soup")
            .with_diet(DietClass::Vegetarian)
            .with_mode("Boiling")
            .with_cuisine("Continental")
            .with_category("Soups")
            .with_time(12)
            .with_ingredients(["Tomato", "Butter", "Cream"]),
    ])
}

/// Catalog JSON in the exported sheet format, including sparse and odd rows.
#[allow(dead_code)]
pub const SHEET_CATALOG_JSON: &str = r#"[
  {
    "Recipe Name": "Quinoa Boiled",
    "Veg/Non Veg": "VEG",
    "Cooking Mode": "Boiling",
    "Cuisine": "Continental",
    "Category": "Main Course",
    "Cooking Time": 20,
    "Image": "images/QUINOA-BOILED.jpg",
    "PopupImage": "popup_images/QUINOA BOILED.pdf",
    "Accessories": "Pot",
    "Normal Cooking Time": "35 mins"
  },
  {
    "Recipe Name": "Tomato Gravy",
    "Veg/Non Veg": "Non-Veg",
    "Cooking Mode": "Sauteing",
    "Cuisine": "Indian",
    "Category": "Base Gravy",
    "On2Cook Cooking Time": "18 mins",
    "Image": "images/TOMATO-GRAVY.jpg",
    "PopupImage": "popup_images/TOMATO GRAVY.png",
    "Accessories": " Pan ,  Silicone Stirrer,, ",
    "Ingredients": ["Tomato", " Onion ", ""]
  },
  {
    "Recipe Name": "Mystery Stew",
    "Veg/Non Veg": "Pescatarian",
    "Cooking Mode": "Boiling",
    "Cuisine": "Global Cuisine",
    "Category": "Main Course",
    "Cooking Time": "",
    "Accessories": null
  },
  "not a record",
  {
    "Recipe Name": "Array Accessories",
    "Veg/Non Veg": "EGG",
    "Cooking Mode": "Frying",
    "Cuisine": "Chinese",
    "Category": "Snacks",
    "Cooking Time": 9.7,
    "Accessories": ["Frying Kit", "Pan"]
  }
]"#;
