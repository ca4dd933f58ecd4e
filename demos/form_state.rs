//! Driving a form shell through its state container.
//!
//! Run with: `cargo run --example form_state`

use card_form::clock::FixedClock;
use card_form::{FormState, FormUpdate, FormValidator, SubmitOutcome};

fn render(state: &FormState) {
    if let Some(summary) = state.summary() {
        println!("  [{}]", summary);
    }
    for (field, result) in state.errors().iter() {
        if !result.is_valid() {
            println!("  {} -> {}", field.label(), result.error());
        }
    }
}

fn main() {
    println!("=== Form State Cycle ===\n");

    let Some(clock) = FixedClock::from_ymd(2024, 1, 1) else {
        return;
    };
    let validator = FormValidator::with_clock(clock);
    let mut state = FormState::new();

    for update in [
        FormUpdate::CardHolderName("John Smith".into()),
        FormUpdate::CardNumber("4111 1111 1111 1111".into()),
        FormUpdate::Cvv("12".into()),
        FormUpdate::ExpirationMonth("06".into()),
        FormUpdate::ExpirationYear("26".into()),
    ] {
        state.apply(update);
    }

    println!("First submit:");
    if let SubmitOutcome::Rejected { first_invalid } = state.submit(&validator) {
        println!("  focus {}", first_invalid);
    }
    render(&state);

    println!("\nFixing the CVV (errors stay until the next submit):");
    state.apply(FormUpdate::Cvv("123".into()));
    render(&state);

    println!("\nSecond submit:");
    match state.submit(&validator) {
        SubmitOutcome::Accepted(values) => println!("  accepted {:?}", values),
        SubmitOutcome::Rejected { first_invalid } => println!("  focus {}", first_invalid),
    }
    render(&state);
}
