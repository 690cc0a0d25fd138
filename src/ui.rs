use crate::diff::DiffStats;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

/// Display the accumulated change summary for the inspected revision.
pub fn display_diff_summary(stats: &DiffStats) {
    println!("\n\x1b[1mChange summary since previous revision:\x1b[0m");
    println!("  Additions: \x1b[32m{}\x1b[0m", stats.additions);
    println!("  Deletions: \x1b[31m{}\x1b[0m", stats.deletions);
}

/// Display the proposed version change.
pub fn display_proposed_version(old_version: &str, new_version: &str) {
    println!("\n\x1b[1mProposed Version Change:\x1b[0m");
    println!("  From: \x1b[31m{}\x1b[0m", old_version);
    println!("  To:   \x1b[32m{}\x1b[0m", new_version);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_diff_summary() {
        // Visual verification test - output is printed to stdout
        let stats = DiffStats {
            additions: 10,
            deletions: 2,
        };
        display_diff_summary(&stats);
    }

    #[test]
    fn test_display_proposed_version() {
        // Visual verification test - output is printed to stdout
        display_proposed_version("1.2.3", "1.3.0");
    }
}
