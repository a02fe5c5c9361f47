use std::io::{self, BufRead, Write};

use log::warn;

/// A trait, necessary for every entity that reports to the user and asks them
/// yes/no questions.
pub trait Notifier {
    fn notify(&self, message: &str);
    fn confirm(&self, question: &str) -> bool;
}

/// Talks to the user through the terminal.
#[derive(Debug, Default)]
pub struct ConsoleNotifier {
    /// Answer every confirmation with "yes" without prompting
    pub assume_yes: bool,
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, question: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", question);
        if let Err(err) = io::stdout().flush() {
            warn!("Could not flush prompt: {}", err);
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(err) => {
                warn!("Could not read answer, treating it as no: {}", err);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yeah"));
    }

    #[test]
    fn assume_yes_skips_prompt() {
        let notifier = ConsoleNotifier { assume_yes: true };
        assert!(notifier.confirm("Delete everything?"));
    }
}
