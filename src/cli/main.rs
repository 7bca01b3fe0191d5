//! An interactive shell over a belief base.
//!
//! Formulas entered at the prompt are revised into the base at a chosen priority.
//! Priorities are validated here, as a user-input concern: the base itself stores whatever
//! it is given.

use std::io::{BufRead, Write};

use entrench::{
    base::{Base, ReviseOk},
    config::Config,
    structures::formula::Formula,
};

fn main() {
    let mut base = Base::from_config(Config::default());

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("Commands:");
        println!("1. Enter a formula to revise it into the belief base.");
        println!("2. Type 'entails' to check entailment of a formula against the base.");
        println!("3. Type 'show' to print the belief base.");
        println!("4. Type 'empty' to empty the belief base.");
        println!("5. Type 'exit' to quit.");
        println!();

        let Some(input) = prompt(&mut lines, "Enter a command: ") else {
            break;
        };

        match input.to_lowercase().as_str() {
            "" => continue,

            "exit" => break,

            "empty" => {
                base.clear();
                println!("Belief base has been emptied.");
            }

            "show" => print_base(&base),

            "entails" => {
                let Some(text) = prompt(&mut lines, "Enter the formula to check: ") else {
                    break;
                };

                match Formula::parse(&text) {
                    Ok(formula) => match base.entails(&formula) {
                        true => println!("The formula is entailed by the belief base."),
                        false => println!("The formula is not entailed by the belief base."),
                    },
                    Err(e) => println!("{e}"),
                }
            }

            _ => {
                let formula = match Formula::parse(&input) {
                    Ok(formula) => formula,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                let Some(priority) = read_priority(&mut lines) else {
                    continue;
                };

                match base.revise(Some(formula), priority) {
                    ReviseOk::Expanded => println!("Belief added."),
                    ReviseOk::Contracted => {
                        println!("Contradicting beliefs of lower priority were removed.")
                    }
                    ReviseOk::Vetoed => {
                        println!("The belief could not be consistently adopted; base unchanged.")
                    }
                    ReviseOk::Noop => unreachable!("a formula was supplied"),
                }

                print_base(&base);
            }
        }
    }
}

/// Reads a priority in [0, 1], reporting invalid input.
fn read_priority(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Option<f64> {
    let input = prompt(lines, "Enter the priority for this belief (0 to 1): ")?;

    match input.parse::<f64>() {
        Ok(priority) if (0.0..=1.0).contains(&priority) => Some(priority),
        _ => {
            println!("Invalid priority. Please enter a decimal value between 0 and 1.");
            None
        }
    }
}

fn prompt(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
    text: &str,
) -> Option<String> {
    print!("{text}");
    let _ = std::io::stdout().flush();

    match lines.next() {
        Some(Ok(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn print_base(base: &Base) {
    if base.is_empty() {
        println!("The belief base is empty.");
        return;
    }

    println!("Belief base:");
    for belief in base.beliefs() {
        println!("  {belief}");
    }
}
