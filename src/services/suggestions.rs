//! Canned query suggestions shown in the chat UI.

use rand::seq::SliceRandom;

/// Pool of example queries the UI can offer as quick replies.
pub const SUGGESTIONS: &[&str] = &[
    "What's the status of order 12345?",
    "Show me the top 5 most sold products",
    "How many Classic T-Shirts are left in stock?",
    "Find summer dresses",
    "Search for running shoes",
    "Check stock for Hoodie Sweatshirt",
    "What are the most popular products?",
    "Track my order",
    "Show me jackets",
    "Help me find yoga pants",
];

/// Pick `count` distinct suggestions uniformly at random.
pub fn sample(count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    SUGGESTIONS
        .choose_multiple(&mut rng, count)
        .map(|s| s.to_string())
        .collect()
}
