//! Loading an order workflow into a toy engine.
//!
//! Run with `cargo run --example load_transitions` to see the loader's
//! tracing output.

use loadstate::builder::{literal_transition, simple_transition, TransitionBuilder};
use loadstate::core::{NamedState, State, Transition};
use loadstate::loader::{Loader, TransitionConsumer, TransitionLoader};
use loadstate::registry::TransitionRegistry;
use serde_json::json;
use std::collections::BTreeSet;
use std::convert::Infallible;

/// Registers every literal edge; patterns expand against known states.
#[derive(Default)]
struct PrintingEngine {
    known: BTreeSet<String>,
}

impl TransitionConsumer<NamedState> for PrintingEngine {
    type Error = Infallible;

    fn add_transition(
        &mut self,
        transition: &Transition<NamedState>,
    ) -> Result<usize, Infallible> {
        for state in [&transition.from, &transition.to] {
            if !state.is_pattern() {
                self.known.insert(state.name().to_string());
            }
        }

        let origins: Vec<String> = if transition.from.is_pattern() {
            let alternatives: Vec<&str> = transition.from.name().split('|').collect();
            self.known
                .iter()
                .filter(|name| alternatives.contains(&name.as_str()))
                .cloned()
                .collect()
        } else {
            vec![transition.from.name().to_string()]
        };

        for origin in &origins {
            println!("  {origin} -> {}", transition.to.name());
        }
        Ok(origins.len())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Typed Transitions ===\n");

    let mut registry = TransitionRegistry::new(vec![
        simple_transition(NamedState::pattern("new|paid"), NamedState::literal("cancelled")),
        literal_transition("new", "paid"),
        literal_transition("paid", "shipped"),
    ]);

    let guarded = TransitionBuilder::new()
        .from(NamedState::literal("new"))
        .to(NamedState::literal("paid"))
        .guard("payment_received")
        .action("send_receipt")
        .build()
        .expect("both ends are set");
    registry.add(guarded);

    let loader = TransitionLoader::new(registry);
    println!("{loader}");

    let mut engine = PrintingEngine::default();
    let count = match loader.load(&mut engine) {
        Ok(count) => count,
        Err(never) => match never {},
    };
    println!("\nRegistered {count} concrete transitions\n");

    println!("=== JSON Records ===\n");

    let records = vec![
        json!({"from": {"name": "draft"}, "to": {"name": "review"}}),
        json!("review_to_published"),
    ];
    match TransitionRegistry::<NamedState>::from_values(records) {
        Ok(registry) => println!("Loaded {registry}"),
        Err(e) => println!("Rejected input: {e}"),
    }
}
