use super::cli_main::{get_user_input, prompt, read_f64};
use crate::settings::{with_settings, with_settings_mut};

pub fn settings_menu() {
    loop {
        with_settings(|manager| {
            let s = manager.get_settings();
            println!("\n=== Settings ({}) ===", manager.config_file());
            println!(
                "scientific notation below {:e} and above {:e}, {} digits",
                s.small_threshold, s.large_threshold, s.precision
            );
        });
        println!("1. Set notation thresholds");
        println!("2. Set precision");
        println!("3. Reset to defaults");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = match get_user_input() {
            Ok(choice) => choice,
            Err(_) => break,
        };
        let outcome = match choice.trim() {
            "1" => set_thresholds(),
            "2" => set_precision(),
            "3" => with_settings_mut(|manager| manager.reset_to_defaults())
                .map_err(|e| e.to_string()),
            "0" => break,
            _ => Err("Invalid choice. Please try again.".to_string()),
        };
        if let Err(e) = outcome {
            println!("Error: {}", e);
        }
    }
}

fn set_thresholds() -> Result<(), String> {
    let small = read_f64("small threshold: ")?;
    let large = read_f64("large threshold: ")?;
    with_settings_mut(|manager| manager.set_thresholds(small, large)).map_err(|e| e.to_string())
}

fn set_precision() -> Result<(), String> {
    prompt("digits after the decimal point: ");
    let input = get_user_input()?;
    let precision: usize = input
        .trim()
        .parse()
        .map_err(|_| "Invalid number format".to_string())?;
    with_settings_mut(|manager| manager.set_precision(precision)).map_err(|e| e.to_string())
}
