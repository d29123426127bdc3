//! Rule-based query classification and intent handling.
//!
//! A message is assigned to exactly one intent by evaluating keyword and
//! regex predicates in fixed priority order; the first match wins. Each
//! intent handler is a pure function of the message and a store snapshot,
//! so a run has no shared state across requests.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::chat::{ChatData, ChatReply, OrderStatusData, ResponseType, StockCheckData};
use crate::models::order::Order;
use crate::models::product::Product;

/// 5-digit order id token.
static ORDER_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{5})\b").unwrap());

/// First integer token, used for "top N" requests.
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d+)\b").unwrap());

const ORDER_KEYWORDS: &[&str] = &["order", "status", "track", "delivery", "shipped", "delivered"];
const STOCK_KEYWORDS: &[&str] = &["stock", "available", "inventory", "left", "how many"];
const TOP_KEYWORDS: &[&str] = &["top", "best", "most sold", "popular", "bestseller"];
const SEARCH_KEYWORDS: &[&str] = &["show", "find", "search", "look for", "what", "which"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey", "help", "assist", "support"];

/// Filler words stripped from search queries before matching the catalog.
/// The two-word "look for" entry can never match a single token; it is kept
/// for parity with the upstream storefront's word list.
const SEARCH_STOP_WORDS: &[&str] = &[
    "show", "find", "search", "look for", "what", "which", "me", "the", "a", "an",
];

const DEFAULT_TOP_LIMIT: u64 = 5;
const MAX_TOP_LIMIT: usize = 10;
const MAX_SEARCH_RESULTS: usize = 8;

/// The classified purpose of a customer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Order,
    Stock,
    TopProducts,
    ProductSearch,
    Greeting,
    Unknown,
}

fn contains_any(query: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| query.contains(keyword))
}

/// Assign a lowercased message to exactly one intent.
///
/// Priority order is significant: a message containing both "order" and
/// "find" is an order query, never a search, because the order check runs
/// first.
pub fn classify(query: &str) -> Intent {
    if contains_any(query, ORDER_KEYWORDS) || ORDER_ID_RE.is_match(query) {
        Intent::Order
    } else if contains_any(query, STOCK_KEYWORDS) {
        Intent::Stock
    } else if contains_any(query, TOP_KEYWORDS) {
        Intent::TopProducts
    } else if contains_any(query, SEARCH_KEYWORDS) {
        Intent::ProductSearch
    } else if contains_any(query, GREETING_KEYWORDS) {
        Intent::Greeting
    } else {
        Intent::Unknown
    }
}

/// Classify a raw message and run the matching handler against a snapshot
/// of the store.
pub fn process_query(raw: &str, products: &[Product], orders: &[Order]) -> ChatReply {
    let lowered = raw.to_lowercase();

    match classify(&lowered) {
        Intent::Order => handle_order(raw, orders),
        Intent::Stock => handle_stock(&lowered, products),
        Intent::TopProducts => handle_top_products(raw, products),
        Intent::ProductSearch => handle_search(&lowered, products),
        Intent::Greeting => greeting_reply(),
        Intent::Unknown => unknown_reply(),
    }
}

// ── Order status ─────────────────────────────────────────────────────

fn handle_order(raw: &str, orders: &[Order]) -> ChatReply {
    // The id is pulled from the raw text, not the lowercased copy, so the
    // token offsets line up with what the customer typed.
    let Some(captures) = ORDER_ID_RE.captures(raw) else {
        return ChatReply::plain(
            ResponseType::OrderHelp,
            true,
            "To check your order status, please provide your 5-digit order ID \
             (e.g., \"What's the status of order 12345?\").",
        );
    };
    let order_id = &captures[1];

    match orders.iter().find(|order| order.id == order_id) {
        Some(order) => ChatReply {
            response_type: ResponseType::OrderStatus,
            success: true,
            data: Some(ChatData::Order(OrderStatusData::from_order(order))),
            search_term: None,
            message: format!("Here's the status for order {order_id}:"),
        },
        None => ChatReply::plain(
            ResponseType::OrderNotFound,
            false,
            format!(
                "I couldn't find an order with ID {order_id}. \
                 Please check the order number and try again."
            ),
        ),
    }
}

// ── Stock check ──────────────────────────────────────────────────────

fn handle_stock(query: &str, products: &[Product]) -> ChatReply {
    // First product (in store order) whose name shares a word with the query.
    let found = products.iter().find(|product| {
        product
            .name
            .to_lowercase()
            .split_whitespace()
            .any(|word| query.contains(word))
    });

    let Some(product) = found else {
        return ChatReply::plain(
            ResponseType::StockHelp,
            false,
            "I couldn't identify the specific product. Please try asking like \
             \"How many Classic T-Shirts are left in stock?\"",
        );
    };

    let low_stock = product.low_stock();
    let message = format!(
        "{} has {} items in stock.{}",
        product.name,
        product.stock,
        if low_stock { " (Low stock!)" } else { "" }
    );

    ChatReply {
        response_type: ResponseType::StockCheck,
        success: true,
        data: Some(ChatData::Stock(StockCheckData {
            product: product.clone(),
            stock: product.stock,
            in_stock: product.in_stock(),
            low_stock,
        })),
        search_term: None,
        message,
    }
}

// ── Top products ─────────────────────────────────────────────────────

fn handle_top_products(raw: &str, products: &[Product]) -> ChatReply {
    let limit = NUMBER_RE
        .captures(raw)
        .and_then(|captures| captures[1].parse::<u64>().ok())
        .unwrap_or(DEFAULT_TOP_LIMIT);
    let limit = (limit as usize).min(MAX_TOP_LIMIT);

    let mut ranked: Vec<Product> = products.to_vec();
    ranked.sort_by(|a, b| b.sold.cmp(&a.sold));
    ranked.truncate(limit);

    ChatReply {
        response_type: ResponseType::TopProducts,
        success: true,
        message: format!("Here are the top {} most sold products:", ranked.len()),
        data: Some(ChatData::Products(ranked)),
        search_term: None,
    }
}

// ── Product search ───────────────────────────────────────────────────

fn handle_search(query: &str, products: &[Product]) -> ChatReply {
    let terms: Vec<&str> = query
        .split(' ')
        .filter(|word| !SEARCH_STOP_WORDS.contains(word))
        .collect();

    if terms.iter().all(|word| word.is_empty()) {
        return ChatReply::plain(
            ResponseType::SearchHelp,
            false,
            "What would you like to search for? Try asking like \
             \"Show me dresses\" or \"Find running shoes\".",
        );
    }

    let term = terms.join(" ");

    let matches: Vec<&Product> = products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&term)
                || product.category.to_lowercase().contains(&term)
                || product.description.to_lowercase().contains(&term)
                || product
                    .colors
                    .iter()
                    .any(|color| color.to_lowercase().contains(&term))
        })
        .collect();

    if matches.is_empty() {
        return ChatReply::plain(
            ResponseType::NoResults,
            false,
            format!(
                "I couldn't find any products matching \"{term}\". Try searching \
                 for items like \"shirts\", \"jeans\", \"shoes\", or \"jackets\"."
            ),
        );
    }

    let total = matches.len();
    let results: Vec<Product> = matches
        .into_iter()
        .take(MAX_SEARCH_RESULTS)
        .cloned()
        .collect();

    ChatReply {
        response_type: ResponseType::ProductSearch,
        success: true,
        message: format!("I found {total} products matching \"{term}\":"),
        data: Some(ChatData::Products(results)),
        search_term: Some(term),
    }
}

// ── Greeting / fallback ──────────────────────────────────────────────

fn greeting_reply() -> ChatReply {
    ChatReply::plain(
        ResponseType::Greeting,
        true,
        "Hello! I'm your customer support assistant. I can help you with:\n\n\
         • Check order status (e.g., \"Status of order 12345\")\n\
         • Check product stock (e.g., \"How many Classic T-Shirts are left?\")\n\
         • Find top selling products (e.g., \"Show me top 5 products\")\n\
         • Search for products (e.g., \"Find running shoes\")\n\n\
         How can I assist you today?",
    )
}

fn unknown_reply() -> ChatReply {
    ChatReply::plain(
        ResponseType::Unknown,
        false,
        "I'm sorry, I didn't understand that request. I can help you with order \
         status, product stock, top products, and product searches. Try asking \
         something like:\n\n\
         • \"What's the status of order 12345?\"\n\
         • \"How many Classic T-Shirts are in stock?\"\n\
         • \"Show me the top 5 products\"\n\
         • \"Find summer dresses\"",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderItem, OrderStatus};
    use chrono::NaiveDate;

    fn product(id: &str, name: &str, category: &str, stock: u32, sold: u32) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            description: format!("A fine {}", name.to_lowercase()),
            price: 29.99,
            stock,
            sold,
            rating: 4.2,
            sizes: vec!["M".to_string(), "L".to_string()],
            colors: vec!["Black".to_string(), "Navy Blue".to_string()],
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("P001", "Classic T-Shirt", "shirts", 45, 230),
            product("P002", "Denim Jeans", "jeans", 8, 180),
            product("P003", "Running Shoes", "shoes", 30, 320),
            product("P004", "Summer Dress", "dresses", 5, 150),
            product("P005", "Leather Jacket", "jackets", 50, 90),
        ]
    }

    fn orders() -> Vec<Order> {
        vec![Order {
            id: "12345".to_string(),
            customer_id: "CUST001".to_string(),
            customer_name: "Jane Doe".to_string(),
            status: OrderStatus::Shipped,
            items: vec![OrderItem {
                product_name: "Classic T-Shirt".to_string(),
                quantity: 2,
                price: 19.99,
            }],
            total: 39.98,
            tracking_number: Some("TRK123456".to_string()),
            estimated_delivery: NaiveDate::from_ymd_opt(2025, 3, 7),
            delivered_date: None,
            cancel_reason: None,
            shipping_address: None,
        }]
    }

    // ── Classifier priority ──────────────────────────────────────────

    #[test]
    fn test_order_keywords_classify_as_order() {
        for query in ["track my package", "was it delivered", "order status please"] {
            assert_eq!(classify(query), Intent::Order, "query: {query}");
        }
    }

    #[test]
    fn test_five_digit_token_wins_over_search_keywords() {
        // "find" alone would classify as search; the 5-digit id takes priority.
        assert_eq!(classify("find 54321"), Intent::Order);
        assert_eq!(classify("show me 12345 please"), Intent::Order);
    }

    #[test]
    fn test_order_keyword_wins_over_search_keyword() {
        assert_eq!(classify("find my order"), Intent::Order);
    }

    #[test]
    fn test_stock_before_top_before_search() {
        assert_eq!(classify("how many left"), Intent::Stock);
        assert_eq!(classify("best stock picks"), Intent::Stock);
        assert_eq!(classify("show me the top sellers"), Intent::TopProducts);
        assert_eq!(classify("show me dresses"), Intent::ProductSearch);
    }

    #[test]
    fn test_greeting_and_unknown() {
        assert_eq!(classify("hello there"), Intent::Greeting);
        assert_eq!(classify("zzzzz nonsense"), Intent::Unknown);
    }

    #[test]
    fn test_four_and_six_digit_tokens_are_not_order_ids() {
        assert_eq!(classify("find 1234"), Intent::ProductSearch);
        assert_eq!(classify("find 123456"), Intent::ProductSearch);
    }

    // ── Order handler ────────────────────────────────────────────────

    #[test]
    fn test_order_status_lookup() {
        let reply = process_query("What's the status of order 12345?", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::OrderStatus);
        assert!(reply.success);
        match reply.data {
            Some(ChatData::Order(data)) => {
                assert_eq!(data.order_id, "12345");
                assert_eq!(data.status, OrderStatus::Shipped);
                assert!(data.status_message.contains("TRK123456"));
            }
            other => panic!("expected order data, got {other:?}"),
        }
    }

    #[test]
    fn test_order_not_found() {
        let reply = process_query("status of order 99999", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::OrderNotFound);
        assert!(!reply.success);
        assert!(reply.message.contains("99999"));
    }

    #[test]
    fn test_order_without_id_prompts_for_one() {
        let reply = process_query("track my order", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::OrderHelp);
        assert!(reply.success);
        assert!(reply.message.contains("5-digit"));
    }

    // ── Stock handler ────────────────────────────────────────────────

    #[test]
    fn test_stock_check_low_stock() {
        let reply = process_query("how many summer dresses are left?", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::StockCheck);
        assert!(reply.success);
        assert!(reply.message.contains("(Low stock!)"));
        match reply.data {
            Some(ChatData::Stock(data)) => {
                assert_eq!(data.stock, 5);
                assert!(data.in_stock);
                assert!(data.low_stock);
            }
            other => panic!("expected stock data, got {other:?}"),
        }
    }

    #[test]
    fn test_stock_check_healthy_stock() {
        let reply = process_query("is the classic t-shirt available?", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::StockCheck);
        assert!(!reply.message.contains("(Low stock!)"));
        match reply.data {
            Some(ChatData::Stock(data)) => {
                assert_eq!(data.stock, 45);
                assert!(!data.low_stock);
            }
            other => panic!("expected stock data, got {other:?}"),
        }
    }

    #[test]
    fn test_stock_first_match_in_store_order_wins() {
        // "shirt jeans" shares a word with both P001 and P002; P001 comes first.
        let reply = process_query("stock for t-shirt denim jeans", &catalog(), &orders());
        match reply.data {
            Some(ChatData::Stock(data)) => assert_eq!(data.product.id, "P001"),
            other => panic!("expected stock data, got {other:?}"),
        }
    }

    #[test]
    fn test_stock_unrecognized_product() {
        let reply = process_query("how many widgets in stock?", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::StockHelp);
        assert!(!reply.success);
    }

    // ── Top products handler ─────────────────────────────────────────

    #[test]
    fn test_top_products_sorted_descending() {
        let reply = process_query("show me the top 3 products", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::TopProducts);
        assert!(reply.success);
        match reply.data {
            Some(ChatData::Products(products)) => {
                assert_eq!(products.len(), 3);
                let sold: Vec<u32> = products.iter().map(|p| p.sold).collect();
                assert_eq!(sold, vec![320, 230, 180]);
            }
            other => panic!("expected products, got {other:?}"),
        }
        assert_eq!(reply.message, "Here are the top 3 most sold products:");
    }

    #[test]
    fn test_top_products_default_limit_is_five() {
        let reply = process_query("what are the bestsellers?", &catalog(), &orders());
        match reply.data {
            Some(ChatData::Products(products)) => assert_eq!(products.len(), 5),
            other => panic!("expected products, got {other:?}"),
        }
    }

    #[test]
    fn test_top_products_capped_at_catalog_and_ten() {
        // Request exceeds both the cap of 10 and the catalog size of 5.
        let reply = process_query("top 99 products", &catalog(), &orders());
        match reply.data {
            Some(ChatData::Products(products)) => assert_eq!(products.len(), 5),
            other => panic!("expected products, got {other:?}"),
        }

        let many: Vec<Product> = (0..15)
            .map(|i| product(&format!("P{i:03}"), &format!("Item {i}"), "misc", 10, i))
            .collect();
        let reply = process_query("top 99 products", &many, &orders());
        match reply.data {
            Some(ChatData::Products(products)) => assert_eq!(products.len(), 10),
            other => panic!("expected products, got {other:?}"),
        }
    }

    #[test]
    fn test_top_products_empty_catalog_still_succeeds() {
        let reply = process_query("top products", &[], &orders());
        assert!(reply.success);
        match reply.data {
            Some(ChatData::Products(products)) => assert!(products.is_empty()),
            other => panic!("expected products, got {other:?}"),
        }
    }

    // ── Search handler ───────────────────────────────────────────────

    #[test]
    fn test_search_substring_matches_name() {
        let reply = process_query("Find shirt", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::ProductSearch);
        assert!(reply.success);
        assert_eq!(reply.search_term.as_deref(), Some("shirt"));
        match reply.data {
            Some(ChatData::Products(products)) => {
                assert!(products.iter().any(|p| p.name == "Classic T-Shirt"));
            }
            other => panic!("expected products, got {other:?}"),
        }
    }

    #[test]
    fn test_search_matches_color() {
        let reply = process_query("show me navy blue", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::ProductSearch);
        assert!(reply.success);
    }

    #[test]
    fn test_search_no_results() {
        let reply = process_query("find xylophone", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::NoResults);
        assert!(!reply.success);
        assert!(reply.message.contains("xylophone"));
    }

    #[test]
    fn test_search_only_stop_words_asks_for_a_term() {
        let reply = process_query("show me the", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::SearchHelp);
        assert!(!reply.success);
    }

    #[test]
    fn test_search_results_capped_at_eight() {
        let many: Vec<Product> = (0..12)
            .map(|i| product(&format!("P{i:03}"), &format!("Shirt {i}"), "shirts", 10, i))
            .collect();
        let reply = process_query("find shirt", &many, &orders());
        match reply.data {
            Some(ChatData::Products(products)) => assert_eq!(products.len(), 8),
            other => panic!("expected products, got {other:?}"),
        }
        // Message reports the full match count, not the truncated page.
        assert!(reply.message.starts_with("I found 12 products"));
    }

    // ── Greeting / unknown ───────────────────────────────────────────

    #[test]
    fn test_greeting_reply() {
        let reply = process_query("hello", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::Greeting);
        assert!(reply.success);
        assert!(reply
            .message
            .starts_with("Hello! I'm your customer support assistant."));
    }

    #[test]
    fn test_unknown_reply() {
        let reply = process_query("zzzzz nonsense", &catalog(), &orders());
        assert_eq!(reply.response_type, ResponseType::Unknown);
        assert!(!reply.success);
    }
}
