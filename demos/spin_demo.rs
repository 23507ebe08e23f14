// ============================================================================
// Spin Demo
// ============================================================================

use number_spin::interfaces::{ManualClock, MemoryElement};
use number_spin::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    #[cfg(feature = "logging")]
    number_spin::utils::init_logging();

    println!("=== Number Spin Example ===\n");

    println!("0.1 + 0.2 = {:?}", add("0.1", "0.2"));
    println!("1 - 0.75 = {:?}\n", subtract("1", "0.75"));

    let elements = vec![
        MemoryElement::number_input()
            .with_attribute("min", "0")
            .with_attribute("max", "10")
            .with_attribute("step", "0.5")
            .with_value("9.8"),
        MemoryElement::number_input()
            .with_attribute("min", "1")
            .with_attribute("max", "100")
            .with_attribute("step", "3")
            .with_value("5"),
        MemoryElement::text_input(),
    ];

    let outcome = match input_number(
        &StaticProbe(NativeSupport::Partial),
        elements,
        &SpinConfig::default(),
        Arc::new(LoggingEventHandler),
    ) {
        Applied::Bound(outcome) => outcome,
        Applied::PassThrough(elements) => {
            println!("Native support, {} elements untouched", elements.len());
            return;
        },
    };

    println!(
        "Bound {} inputs, skipped {}, failed {}",
        outcome.bound.len(),
        outcome.skipped.len(),
        outcome.failed.len()
    );

    let mut bindings = outcome.bound;

    // Step past max
    println!("\n=== Increment ===");
    let first = &mut bindings[0];
    println!("before: {}", first.element().value());
    first.increment();
    println!("after:  {}", first.element().value());

    // Step below min
    println!("\n=== Decrement Twice ===");
    let second = &mut bindings[1];
    println!("before: {}", second.element().value());
    second.on_key(Key::ArrowDown);
    second.on_key(Key::ArrowDown);
    println!("after:  {}", second.element().value());

    // Press and hold
    println!("\n=== Press and Hold ===");
    let clock = ManualClock::new();
    second.on_pointer_down(StepDirection::Up, &clock.scheduler());
    println!("{:?}\t{}", clock.now(), second.element().value());

    clock.advance(Duration::from_millis(750));
    while let Some(handle) = clock.pop_due() {
        second.on_timer_fired(handle);
        println!("{:?}\t{}", clock.now(), second.element().value());
    }
    second.on_pointer_up();

    // Teardown
    println!("\n=== Unbind ===");
    for binding in bindings {
        let id = binding.id();
        let element = binding.unbind();
        println!("binding {} released with value {}", id, element.value());
    }
}
