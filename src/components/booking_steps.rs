use yew::prelude::*;

/// A stage of the booking flow shown in the progress header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub hint: &'static str,
    /// Font Awesome icon classes
    pub icon: &'static str,
    pub reached: bool,
}

pub const STEPS: [Step; 6] = [
    Step {
        label: "Location",
        hint: "Choose address",
        icon: "fa-solid fa-location-dot",
        reached: true,
    },
    Step {
        label: "Waste Type",
        hint: "Select waste",
        icon: "fa-solid fa-trash-can",
        reached: true,
    },
    Step {
        label: "Delivery",
        hint: "Truck on the way",
        icon: "fa-solid fa-truck-moving",
        reached: true,
    },
    Step {
        label: "Safety",
        hint: "Confirm safety",
        icon: "fa-solid fa-shield",
        reached: false,
    },
    Step {
        label: "Schedule",
        hint: "Pick date",
        icon: "fa-solid fa-calendar",
        reached: false,
    },
    Step {
        label: "Payment",
        hint: "Complete payment",
        icon: "fa-regular fa-credit-card",
        reached: false,
    },
];

#[function_component(BookingSteps)]
pub fn booking_steps() -> Html {
    html! {
        <nav class="booking-steps" aria-label="Booking progress">
            {
                STEPS.iter().map(|step| {
                    let class = classes!("booking-step", (!step.reached).then_some("pending"));
                    html! {
                        <div {class} key={step.label}>
                            <div class="booking-step-icon">
                                <i class={step.icon}></i>
                            </div>
                            <p class="booking-step-label">{step.label}</p>
                            <p class="booking-step-hint">{step.hint}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reached_steps_come_first() {
        let reached = STEPS.iter().take_while(|s| s.reached).count();
        assert_eq!(reached, 3);
        assert!(STEPS[reached..].iter().all(|s| !s.reached));
    }
}
