use super::cli_main::{get_user_input, prompt};
use crate::Examples::kinetics_examples::kin_examples;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Rate law models");
        println!("2. Presets: concentration after t");
        println!("3. Rate constants from concentration data");
        println!("4. Zero order reaction past completion");
        println!("5. First order half-life schedule");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = match get_user_input() {
            Ok(choice) => choice,
            Err(_) => break,
        };
        match choice.trim() {
            "1" => kin_examples(0),
            "2" => kin_examples(1),
            "3" => kin_examples(2),
            "4" => kin_examples(3),
            "5" => kin_examples(4),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
