use maud::{html, Markup};

struct Step {
    label: &'static str,
    description: &'static str,
    active: bool,
    completed: bool,
}

// Decorative only, nothing here drives navigation.
const STEPS: [Step; 6] = [
    Step { label: "Postcode", description: "Enter location", active: true, completed: true },
    Step { label: "Waste Type", description: "Select waste", active: true, completed: true },
    Step { label: "Select Skip", description: "Choose size", active: true, completed: false },
    Step { label: "Permit Check", description: "Road permit", active: false, completed: false },
    Step { label: "Choose Date", description: "Schedule delivery", active: false, completed: false },
    Step { label: "Payment", description: "Complete order", active: false, completed: false },
];

fn step_class(step: &Step) -> &'static str {
    if step.completed {
        "step completed"
    } else if step.active {
        "step active"
    } else {
        "step"
    }
}

pub fn steps_header() -> Markup {
    html! {
        header class="steps" {
            @for (idx, step) in STEPS.iter().enumerate() {
                div class=(step_class(step)) title=(step.description) {
                    span class="step-number" {
                        @if step.completed { "✓" } @else { (idx + 1) }
                    }
                    span { (step.label) }
                }
            }
        }
    }
}
