use super::cli_examples::examples_menu;
use super::cli_rate_law::{rate_law_menu, task_file_menu};
use super::cli_settings::settings_menu;
use crate::Kinetics::rate_law_models::RateLawModel;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = match get_user_input() {
            Ok(choice) => choice,
            Err(e) => {
                println!("{}", e);
                break;
            }
        };

        match choice.trim() {
            "1" => rate_law_menu(),
            "2" => RateLawModel::pretty_print(),
            "3" => task_file_menu(),
            "4" => examples_menu(),
            "5" => settings_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to KiRate: integrated rate laws of zero, first\n
    and second order reactions \n \x1b[0m"
    );
    println!("\x1b[33m1. Solve a rate law problem\x1b[0m");
    println!("\x1b[33m2. Show rate law models\x1b[0m");
    println!("\x1b[33m3. Solve tasks from file\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m5. Settings\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("\x1b[36mEnter your choice: \x1b[0m");
}

/// Prints without a newline and flushes so the prompt shows before input
pub fn prompt(text: &str) {
    print!("{}", text);
    // a failed flush only delays the prompt text
    let _ = io::stdout().flush();
}

/// One line from stdin; end of input is an error so menus can stop
pub fn get_user_input() -> Result<String, String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Err("End of input".to_string()),
        Ok(_) => Ok(input),
        Err(e) => Err(format!("Failed to read input: {}", e)),
    }
}

pub fn read_f64(label: &str) -> Result<f64, String> {
    prompt(label);
    let input = get_user_input()?;
    input
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number format: '{}'", input.trim()))
}
