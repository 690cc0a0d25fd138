use crate::version::VersionBump;
use regex;

/// Accumulated line-change counters from a diff stat summary.
///
/// Exists only for the duration of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub additions: u64,
    pub deletions: u64,
}

/// Parses a textual diff stat summary into accumulated counters.
///
/// Scans each line for `<N> insertion(s)(+)` and `<M> deletion(s)(-)` and sums
/// all matches. The stat format omits a count entirely when it is zero and uses
/// the singular form for one line, so the two halves are matched independently.
/// Lines that do not match contribute nothing; multiple matching lines (e.g.,
/// per-file stats) all accumulate. Parsing arbitrary diff formats is out of scope.
pub fn parse_diff_stats(stat_text: &str) -> DiffStats {
    let mut stats = DiffStats::default();

    let insertions_re = regex::Regex::new(r"(\d+) insertions?\(\+\)");
    let deletions_re = regex::Regex::new(r"(\d+) deletions?\(-\)");

    if let (Ok(insertions_re), Ok(deletions_re)) = (insertions_re, deletions_re) {
        for line in stat_text.lines() {
            if let Some(count) = insertions_re.captures(line).and_then(|c| c.get(1)) {
                stats.additions += count.as_str().parse::<u64>().unwrap_or(0);
            }
            if let Some(count) = deletions_re.captures(line).and_then(|c| c.get(1)) {
                stats.deletions += count.as_str().parse::<u64>().unwrap_or(0);
            }
        }
    }

    stats
}

/// Determines the version bump implied by a change summary.
///
/// Evaluated in fixed order:
/// - any deletions -> minor bump
/// - else any additions -> patch bump
/// - else -> no bump
///
/// Deletions outrank additions regardless of their relative counts.
pub fn determine_version_bump(stats: &DiffStats) -> Option<VersionBump> {
    if stats.deletions > 0 {
        Some(VersionBump::Minor)
    } else if stats.additions > 0 {
        Some(VersionBump::Patch)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_line() {
        let text = " 3 files changed, 10 insertions(+), 2 deletions(-)\n";
        let stats = parse_diff_stats(text);
        assert_eq!(stats.additions, 10);
        assert_eq!(stats.deletions, 2);
    }

    #[test]
    fn test_parse_additions_only() {
        let text = " 1 file changed, 5 insertions(+), 0 deletions(-)\n";
        let stats = parse_diff_stats(text);
        assert_eq!(stats.additions, 5);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn test_parse_omitted_deletions() {
        // git omits the deletions count entirely when it is zero
        let text = " 1 file changed, 5 insertions(+)\n";
        let stats = parse_diff_stats(text);
        assert_eq!(stats.additions, 5);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn test_parse_omitted_insertions() {
        let text = " 2 files changed, 3 deletions(-)\n";
        let stats = parse_diff_stats(text);
        assert_eq!(stats.additions, 0);
        assert_eq!(stats.deletions, 3);
    }

    #[test]
    fn test_parse_singular_forms() {
        let text = " 1 file changed, 1 insertion(+), 1 deletion(-)\n";
        let stats = parse_diff_stats(text);
        assert_eq!(stats.additions, 1);
        assert_eq!(stats.deletions, 1);
    }

    #[test]
    fn test_parse_no_match() {
        let text = " README.md | 4 ++--\n nothing to see here\n";
        let stats = parse_diff_stats(text);
        assert_eq!(stats, DiffStats::default());
    }

    #[test]
    fn test_parse_empty_input() {
        let stats = parse_diff_stats("");
        assert_eq!(stats.additions, 0);
        assert_eq!(stats.deletions, 0);
    }

    #[test]
    fn test_parse_multiple_matching_lines_accumulate() {
        let text = "\
 src/a.rs | 10 insertions(+), 2 deletions(-)
 src/b.rs | 3 insertions(+), 4 deletions(-)
";
        let stats = parse_diff_stats(text);
        assert_eq!(stats.additions, 13);
        assert_eq!(stats.deletions, 6);
    }

    #[test]
    fn test_bump_deletions_win_over_additions() {
        let stats = DiffStats {
            additions: 100,
            deletions: 1,
        };
        assert_eq!(determine_version_bump(&stats), Some(VersionBump::Minor));
    }

    #[test]
    fn test_bump_additions_only_is_patch() {
        let stats = DiffStats {
            additions: 5,
            deletions: 0,
        };
        assert_eq!(determine_version_bump(&stats), Some(VersionBump::Patch));
    }

    #[test]
    fn test_bump_no_changes_is_none() {
        let stats = DiffStats::default();
        assert_eq!(determine_version_bump(&stats), None);
    }

    #[test]
    fn test_bump_deletions_only_is_minor() {
        let stats = DiffStats {
            additions: 0,
            deletions: 7,
        };
        assert_eq!(determine_version_bump(&stats), Some(VersionBump::Minor));
    }
}
