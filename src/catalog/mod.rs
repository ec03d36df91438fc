//! Static reference catalogs: foods, fitness juices, gym equipment, workout
//! types and exercise styles. Every lookup is read-only and driven by a
//! category name followed by an item name.

mod data;

use serde::{Deserialize, Serialize};

/// A named group of catalog entries.
#[derive(Debug, Serialize)]
pub struct Section<T: 'static> {
    pub name: &'static str,
    pub items: &'static [(&'static str, T)],
}

impl<T: 'static> Section<T> {
    pub fn item_names(&self) -> Vec<&'static str> {
        self.items.iter().map(|(name, _)| *name).collect()
    }

    pub fn item(&self, name: &str) -> Option<&'static T> {
        self.items
            .iter()
            .find(|(item, _)| *item == name)
            .map(|(_, value)| value)
    }
}

/// Category -> item -> value table.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<T: 'static> {
    sections: &'static [Section<T>],
}

impl<T: 'static> Catalog<T> {
    pub fn categories(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name).collect()
    }

    pub fn section(&self, category: &str) -> Option<&'static Section<T>> {
        self.sections.iter().find(|s| s.name == category)
    }

    pub fn items(&self, category: &str) -> Option<Vec<&'static str>> {
        self.section(category).map(Section::item_names)
    }

    pub fn lookup(&self, category: &str, item: &str) -> Option<&'static T> {
        self.section(category)?.item(item)
    }
}

/// Reference nutrition values; `Quantity` scales them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Food {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub vitamins: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    #[serde(rename = "250g")]
    G250,
    #[serde(rename = "500g")]
    G500,
    #[serde(rename = "750g")]
    G750,
    #[serde(rename = "1kg")]
    Kg1,
    #[serde(rename = "1.5kg")]
    Kg1_5,
    #[serde(rename = "2kg")]
    Kg2,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::G250,
        Quantity::G500,
        Quantity::G750,
        Quantity::Kg1,
        Quantity::Kg1_5,
        Quantity::Kg2,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::G250 => "250g",
            Quantity::G500 => "500g",
            Quantity::G750 => "750g",
            Quantity::Kg1 => "1kg",
            Quantity::Kg1_5 => "1.5kg",
            Quantity::Kg2 => "2kg",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Quantity::G250 => 0.25,
            Quantity::G500 => 0.5,
            Quantity::G750 => 0.75,
            Quantity::Kg1 => 1.0,
            Quantity::Kg1_5 => 1.5,
            Quantity::Kg2 => 2.0,
        }
    }

    pub fn from_label(label: &str) -> Option<Quantity> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }
}

/// A food's nutrition scaled to a chosen quantity; vitamins are not scaled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nutrition {
    pub food: String,
    pub quantity: Quantity,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub vitamins: Vec<&'static str>,
}

impl Food {
    pub fn scaled(&self, name: &str, quantity: Quantity) -> Nutrition {
        let m = quantity.multiplier();
        Nutrition {
            food: name.to_string(),
            quantity,
            calories: self.calories * m,
            protein: self.protein * m,
            fat: self.fat * m,
            vitamins: self.vitamins.to_vec(),
        }
    }
}

pub fn foods() -> Catalog<Food> {
    Catalog { sections: data::FOODS }
}

/// Juice name -> description.
pub fn juices() -> Catalog<&'static str> {
    Catalog { sections: data::JUICES }
}

/// Equipment name -> weight or size range.
pub fn equipment() -> Catalog<&'static str> {
    Catalog {
        sections: data::EQUIPMENT,
    }
}

/// Style name -> description.
pub fn exercise_styles() -> Catalog<&'static str> {
    Catalog {
        sections: data::EXERCISE_STYLES,
    }
}

pub fn food_nutrition(category: &str, food: &str, quantity: Quantity) -> Option<Nutrition> {
    foods()
        .lookup(category, food)
        .map(|f| f.scaled(food, quantity))
}

pub fn age_groups() -> Vec<&'static str> {
    data::AGE_GUIDE.iter().map(|(group, _)| *group).collect()
}

pub fn age_guide(group: &str) -> Option<&'static str> {
    data::AGE_GUIDE
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, advice)| *advice)
}

pub fn workout_types() -> Vec<&'static str> {
    data::WORKOUTS.iter().map(|(kind, _)| *kind).collect()
}

pub fn workout_exercises(workout_type: &str) -> Option<&'static [&'static str]> {
    data::WORKOUTS
        .iter()
        .find(|(kind, _)| *kind == workout_type)
        .map(|(_, exercises)| *exercises)
}
