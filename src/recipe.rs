//! Static recipe data shown by the card.

use once_cell::sync::Lazy;
use std::fmt::Write as _;

/// A read-only recipe. `steps` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: u32,
    pub difficulty: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

static CLASSIC_CHOCOLATE_CAKE: Lazy<Recipe> = Lazy::new(|| Recipe {
    title: "Classic Chocolate Cake".to_string(),
    image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=600&h=400&fit=crop"
        .to_string(),
    prep_time: "30 min".to_string(),
    cook_time: "60 min".to_string(),
    total_time: "90 min".to_string(),
    servings: 8,
    difficulty: "Intermediate".to_string(),
    ingredients: [
        "2 cups all-purpose flour",
        "2 cups granulated sugar",
        "3/4 cup cocoa powder",
        "2 teaspoons baking soda",
        "1 teaspoon baking powder",
        "1 teaspoon salt",
        "2 large eggs",
        "1 cup buttermilk",
        "1 cup strong black coffee (cooled)",
        "1/2 cup vegetable oil",
        "1 teaspoon vanilla extract",
    ]
    .into_iter()
    .map(String::from)
    .collect(),
    steps: [
        "Preheat your oven to 350°F (175°C). Grease and flour two 9-inch round cake pans.",
        "In a large bowl, whisk together flour, sugar, cocoa powder, baking soda, baking powder, and salt.",
        "In another bowl, beat eggs and then whisk in buttermilk, coffee, oil, and vanilla extract.",
        "Pour the wet ingredients into the dry ingredients and mix until just combined.",
        "Divide the batter evenly between the prepared pans.",
        "Bake for 28-32 minutes, or until a toothpick inserted in the center comes out clean.",
        "Cool in pans for 10 minutes, then turn out onto wire racks to cool completely.",
        "Frost with your favorite chocolate frosting and enjoy!",
    ]
    .into_iter()
    .map(String::from)
    .collect(),
});

impl Recipe {
    /// The recipe baked into the card.
    pub fn builtin() -> &'static Recipe {
        &CLASSIC_CHOCOLATE_CAKE
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn servings_label(&self) -> String {
        format!("{} servings", self.servings)
    }

    /// Plain-text rendering handed to the print command.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        let _ = writeln!(
            out,
            "Prep: {} | Cook: {} | Total: {} | {} | {}",
            self.prep_time,
            self.cook_time,
            self.total_time,
            self.servings_label(),
            self.difficulty
        );
        out.push('\n');
        out.push_str("Ingredients\n");
        for ingredient in &self.ingredients {
            let _ = writeln!(out, "  - {ingredient}");
        }
        out.push('\n');
        out.push_str("Instructions\n");
        for (idx, step) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", idx + 1);
        }
        out
    }
}
