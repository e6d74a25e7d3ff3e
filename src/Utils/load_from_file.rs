use crate::Kinetics::rate_law_error::KineticsError;
use crate::Kinetics::rate_law_result::KineticsResult;
use crate::Kinetics::rate_law_solver::{KineticsRequest, solve_batch};
use log::{error, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub struct LoadData {
    pub file_name: String,
}

impl LoadData {
    pub fn new(file_name: String) -> Self {
        LoadData { file_name }
    }
    pub fn load_tasks(&self) -> Result<Vec<KineticsRequest>, String> {
        load_tasks_from_file(&self.file_name)
    }
    pub fn solve_tasks(&self) -> Result<Vec<Result<KineticsResult, KineticsError>>, String> {
        solve_tasks_from_file(&self.file_name)
    }
}

/// Parses a document for rate-law tasks under the "TASKS" header.
/// The section is a JSON array of requests, e.g.
/// ```text
/// some free text
/// TASKS
/// [
///   {"order": "first", "solveFor": "rateConstant",
///    "initialConcentration": 1.0, "finalConcentration": 0.5, "time": 10.0}
/// ]
/// ```
/// The section ends at the next all-uppercase header line or at the end of file.
pub fn load_tasks_from_file(file_name: &str) -> Result<Vec<KineticsRequest>, String> {
    let path = Path::new(file_name);
    if !path.exists() {
        return Err(format!("File '{}' does not exist", file_name));
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(format!("Failed to open file '{}': {}", file_name, e)),
    };

    let reader = BufReader::new(file);
    let lines: Vec<String> = reader.lines().map_while(Result::ok).collect();
    parse_tasks(&lines, file_name)
}

fn parse_tasks(lines: &[String], file_name: &str) -> Result<Vec<KineticsRequest>, String> {
    let start_index = lines
        .iter()
        .position(|line| line.trim().to_uppercase() == "TASKS")
        .map(|i| i + 1)
        .ok_or_else(|| format!("No 'TASKS' header found in file '{}'", file_name))?;

    let end_index = (start_index..lines.len())
        .find(|&i| {
            let trimmed = lines[i].trim();
            !trimmed.is_empty() && trimmed.chars().all(|c| c.is_uppercase() || c == '_')
        })
        .unwrap_or(lines.len());

    let tasks_section = lines[start_index..end_index].join("\n");

    match serde_json::from_str::<Vec<KineticsRequest>>(&tasks_section) {
        Ok(tasks) => {
            if tasks.is_empty() {
                warn!("File '{}' contains no tasks", file_name);
            }
            info!("Parsed {} tasks from file '{}'", tasks.len(), file_name);
            Ok(tasks)
        }
        Err(e) => {
            let error_line = e.line();
            let error_column = e.column();
            // serde_json counts lines from 1 inside the section
            let actual_line = start_index + error_line.saturating_sub(1);

            let error_msg = format!(
                "Error parsing tasks at line {}, column {} (line {} in file): {}",
                error_line,
                error_column,
                actual_line + 1,
                e
            );
            error!("{}", error_msg);

            if let Some(problem_line) = lines.get(actual_line) {
                error!("Problematic line: {}", problem_line);
                if error_column >= 1 && error_column <= problem_line.len() {
                    error!("{}", " ".repeat(error_column - 1) + "^");
                }
            }

            Err(error_msg)
        }
    }
}

/// Loads the tasks and solves each independently, logging every outcome.
pub fn solve_tasks_from_file(
    file_name: &str,
) -> Result<Vec<Result<KineticsResult, KineticsError>>, String> {
    let tasks = load_tasks_from_file(file_name)?;
    let results = solve_batch(&tasks);
    for (i, (task, result)) in tasks.iter().zip(results.iter()).enumerate() {
        match result {
            Ok(res) => info!(
                "task {}: {} {} = {}",
                i + 1,
                task.order,
                task.solve_for,
                res.value
            ),
            Err(e) => warn!("task {}: {}", i + 1, e),
        }
    }
    Ok(results)
}
