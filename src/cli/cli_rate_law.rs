use super::cli_main::{get_user_input, prompt, read_f64};
use crate::Kinetics::rate_law_models::ReactionOrder;
use crate::Kinetics::rate_law_solver::{KineticsInput, RateLawTask, SolveTarget};
use crate::Utils::load_from_file::solve_tasks_from_file;
use crate::settings::with_settings;

pub fn rate_law_menu() {
    loop {
        println!("\n=== Integrated Rate Law Solver ===");
        println!("1. Solve rate law problem");
        println!("2. Back");
        prompt("Choose option: ");

        let choice = match get_user_input() {
            Ok(choice) => choice,
            Err(_) => break,
        };
        match choice.trim() {
            "1" => {
                if let Err(e) = run_solver() {
                    println!("Error: {}", e);
                }
            }
            "2" => break,
            _ => println!("Invalid option"),
        }
    }
}

fn run_solver() -> Result<(), String> {
    // Step 1: reaction order
    let order = choose_order()?;
    // Step 2: the unknown
    let target = choose_target()?;
    // Step 3: the known values
    let input = input_values(target)?;

    let mut task = RateLawTask::new();
    task.set_order(order);
    task.set_target(target);
    task.set_input(input);
    task.set_settings(with_settings(|manager| *manager.get_settings()));

    task.solve()?;
    task.pretty_print()
}

fn choose_order() -> Result<ReactionOrder, String> {
    println!("\nChoose reaction order:");
    println!("0. Zero order    [A] = [A]₀ - kt");
    println!("1. First order   [A] = [A]₀e^(-kt)");
    println!("2. Second order  1/[A] = 1/[A]₀ + kt");
    prompt("Enter choice (0-2): ");
    let input = get_user_input()?;
    input
        .trim()
        .parse::<ReactionOrder>()
        .map_err(|_| "Invalid reaction order".to_string())
}

fn choose_target() -> Result<SolveTarget, String> {
    println!("\nCalculate:");
    println!("1. [A] at time t");
    println!("2. time t to reach [A]");
    println!("3. rate constant k");
    prompt("Enter choice (1-3): ");
    let input = get_user_input()?;
    match input.trim() {
        "1" => Ok(SolveTarget::Concentration),
        "2" => Ok(SolveTarget::Time),
        "3" => Ok(SolveTarget::RateConstant),
        _ => Err("Invalid choice".to_string()),
    }
}

fn input_values(target: SolveTarget) -> Result<KineticsInput, String> {
    println!("\nEnter known values:");
    let c0 = read_f64("[A]₀ (initial concentration, M): ")?;
    let input = KineticsInput::new().with_initial_concentration(c0);
    let input = match target {
        SolveTarget::Concentration => input
            .with_time(read_f64("t (time, s): ")?)
            .with_rate_constant(read_f64("k (rate constant): ")?),
        SolveTarget::Time => input
            .with_final_concentration(read_f64("[A] (final concentration, M): ")?)
            .with_rate_constant(read_f64("k (rate constant): ")?),
        SolveTarget::RateConstant => input
            .with_final_concentration(read_f64("[A] (final concentration, M): ")?)
            .with_time(read_f64("t (time, s): ")?),
    };
    Ok(input)
}

pub fn task_file_menu() {
    prompt("\nPath to task file: ");
    let path = match get_user_input() {
        Ok(path) => path,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };
    let settings = with_settings(|manager| *manager.get_settings());
    match solve_tasks_from_file(path.trim()) {
        Ok(results) => {
            for (i, result) in results.iter().enumerate() {
                println!("\nTask {}:", i + 1);
                match result {
                    Ok(res) => res.pretty_print(&settings),
                    Err(e) => println!("Error: {}", e),
                }
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}
