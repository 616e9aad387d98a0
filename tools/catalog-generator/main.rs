use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use saji::recipe::{RawField, RawRecipe};
use std::fs;

const DIETS: &[&str] = &["VEG", "NON VEG", "EGG"];
const MODES: &[&str] = &["Boiling", "Sauteing", "Frying", "Grilling", "Steaming", "AUTO"];
const CUISINES: &[&str] = &["Indian", "Continental", "Chinese", "Italian", "GLOBAL CUISINE"];
const CATEGORIES: &[&str] = &["Main Course", "Base Gravy", "Snacks", "Dessert", "Breakfast"];
const ACCESSORIES: &[&str] = &[
    "Pot",
    "Pan",
    "Grill Mesh",
    "Frying Kit",
    "Momo Kit",
    "Silicone Stirrer",
    "Rice Stirrer",
];
const INGREDIENTS: &[&str] = &[
    "onion", "tomato", "garlic", "ginger", "paneer", "chicken", "egg", "rice", "quinoa", "butter",
];
const ADJECTIVES: &[&str] = &["Spicy", "Creamy", "Crispy", "Smoky", "Classic", "Tangy"];
const DISHES: &[&str] = &["Gravy", "Pilaf", "Curry", "Stir Fry", "Soup", "Bowl", "Tikka"];

/// A CLI tool to generate synthetic recipe catalogs for saji
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_recipes.json")]
    output: String,

    /// Number of recipes to generate
    #[arg(short, long, default_value_t = 100)]
    count: usize,

    /// Share of recipes (0.0 to 1.0) generated without a cooking time
    #[arg(long, default_value_t = 0.05)]
    missing_time: f64,

    /// Seed for reproducible catalogs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.missing_time) {
        eprintln!(
            "Error: --missing-time ({}) must be between 0.0 and 1.0",
            cli.missing_time
        );
        std::process::exit(1);
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("Generating {} recipes...", cli.count);
    let recipes: Vec<RawRecipe> = (0..cli.count)
        .map(|i| generate_recipe(&mut rng, i, cli.missing_time))
        .collect();

    let json_output = serde_json::to_string_pretty(&recipes)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} recipes to '{}'",
        recipes.len(),
        cli.output
    );

    Ok(())
}

fn pick(rng: &mut StdRng, values: &[&str]) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}

fn generate_recipe(rng: &mut StdRng, index: usize, missing_time: f64) -> RawRecipe {
    let name = format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, DISHES),
        index + 1
    );

    let accessory_count = rng.random_range(0..=2);
    let accessories: Vec<&str> = ACCESSORIES
        .choose_multiple(rng, accessory_count)
        .copied()
        .collect();
    let ingredient_count = rng.random_range(2..=5);
    let ingredients: Vec<String> = INGREDIENTS
        .choose_multiple(rng, ingredient_count)
        .map(|i| i.to_string())
        .collect();

    let cooking_time = (!rng.random_bool(missing_time))
        .then(|| RawField::Integer(rng.random_range(1..=60)));
    let normal_time = rng
        .random_bool(0.7)
        .then(|| RawField::Text(format!("{} mins", rng.random_range(10..=120))));

    let stem = name.replace(['/', ' '], "-").to_uppercase();
    RawRecipe {
        name: Some(name),
        diet: Some(pick(rng, DIETS)),
        cooking_mode: Some(pick(rng, MODES)),
        cuisine: Some(pick(rng, CUISINES)),
        category: Some(pick(rng, CATEGORIES)),
        accessories: Some(RawField::Text(accessories.join(", "))),
        cooking_time,
        platform_time: None,
        normal_time,
        image: Some(format!("images/{}.jpg", stem)),
        popup_image: Some(format!("popup_images/{}.pdf", stem)),
        ingredients: Some(ingredients),
        total_output: None,
    }
}
