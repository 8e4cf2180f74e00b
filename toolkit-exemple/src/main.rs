use toolkit_core::catalog;
use toolkit_core::currency::ExchangeRates;
use toolkit_core::wheel::{self, WheelConfig, WheelOption};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // List the tools the API exposes
    for tool in catalog::catalog() {
        println!("{} ({:?}): {}", tool.name, tool.category, tool.description);
    }

    // Start from the default wheel (three options of weight 1)
    let mut config = WheelConfig::default();

    // Weights are relative: "Option 1" is now twice as likely as the others
    config.set_weight(0, 2.0)?;

    // Options can be added, disabled or removed
    config.add_option(WheelOption::new("Pizza").with_weight(3.0))?;
    config.add_option(WheelOption::new("Never"))?;
    config.set_enabled(4, false)?;

    // Invalid weights are refused when editing, not when spinning
    match config.set_weight(1, 0.0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Refused: {e}"),
    }

    // Do not let the last 2 winners win again
    config.recent_n = 2;

    // The history is a value: each spin returns the one to use next
    let mut rng = rand::rng();
    let mut history = config.new_history();
    for i in 0..10 {
        let (selected, next) = config.spin(&history, &mut rng)?;
        println!("Spin {}: {} (recent: {:?})", i + 1, selected.option.text, next.recent().collect::<Vec<_>>());
        history = next;
    }

    // Share the wheel in a URL and read it back
    let state = wheel::encode(&config)?;
    println!("Share link: /tools/spin-wheel#{state}");
    assert_eq!(wheel::decode(&state)?, config);

    // A corrupted link is rejected instead of guessed
    match wheel::decode(&state[..state.len() / 2]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Currency conversion through the USD base
    let rates = ExchangeRates::default();
    for (from, to) in [("USD", "SGD"), ("USD", "CNY"), ("SGD", "CNY")] {
        println!("100 {from} = {:.2} {to}", rates.convert(100.0, from, to)?);
    }

    Ok(())
}
