//! Interactive selection and confirmation prompts.
//!
//! Both prompts take their input and output streams as parameters so the
//! pipeline can be driven from tests without a terminal.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, SweepError};
use crate::format::format_size;
use crate::scan::ScanResult;

/// Turn one line of user input into the chosen subset of `results`.
///
/// - `none` or `cancel` cancels
/// - `all` selects everything
/// - otherwise a comma-separated list of 1-based indices into `results`;
///   out-of-range and non-numeric tokens are dropped and repeated indices
///   count once
///
/// Returns `None` when the user cancelled or no valid index remained. The
/// caller must treat that as cancelling the whole sweep.
pub fn parse_selection(input: &str, results: &[ScanResult]) -> Option<Vec<ScanResult>> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "none" | "cancel" => return None,
        "all" => return Some(results.to_vec()),
        _ => {}
    }

    let mut seen = HashSet::new();
    let selected: Vec<ScanResult> = input
        .split(',')
        .filter_map(|token| token.trim().parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= results.len())
        .filter(|&n| seen.insert(n))
        .map(|n| results[n - 1].clone())
        .collect();

    if selected.is_empty() {
        None
    } else {
        Some(selected)
    }
}

/// Show `results` as a numbered list and read one selection line.
///
/// `results` should already be in display order (largest first). A read
/// failure or end of input cancels.
///
/// # Errors
///
/// Returns [`SweepError::Terminal`] only if writing the prompt fails.
pub fn select_interactive(
    results: &[ScanResult],
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Option<Vec<ScanResult>>> {
    if results.is_empty() {
        return Ok(None);
    }

    write_menu(results, output).map_err(SweepError::Terminal)?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => {
            writeln!(output, "No selection read, cancelling").map_err(SweepError::Terminal)?;
            return Ok(None);
        }
        Ok(_) => {}
    }

    let selection = parse_selection(&line, results);
    let written = match &selection {
        Some(chosen) => writeln!(output, "Selected {} directories for deletion", chosen.len()),
        None => writeln!(output, "No valid selection made, operation cancelled"),
    };
    written.map_err(SweepError::Terminal)?;

    Ok(selection)
}

fn write_menu(results: &[ScanResult], output: &mut impl Write) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "INTERACTIVE MODE")?;
    writeln!(output, "Choose which node_modules directories to delete:")?;
    writeln!(
        output,
        "Enter numbers separated by commas (e.g., '1,3,5'), 'all' for all, or 'none' to cancel"
    )?;

    for (i, result) in results.iter().enumerate() {
        writeln!(
            output,
            "{:>2}. {} ({})",
            i + 1,
            project_name(result.path()),
            format_size(result.total_size())
        )?;
    }

    write!(output, "\nYour choice: ")?;
    output.flush()
}

/// Name of the directory that holds the match, e.g. `app` for
/// `/work/app/node_modules`.
fn project_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Ask a yes/no question; only `y` or `yes` (any case) confirms.
///
/// # Errors
///
/// Returns [`SweepError::Terminal`] only if writing the prompt fails.
pub fn confirm(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{prompt} [y/N]: ").map_err(SweepError::Terminal)?;
    output.flush().map_err(SweepError::Terminal)?;

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        return Ok(false);
    }

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;

    use super::*;

    fn results(n: usize) -> Vec<ScanResult> {
        (1..=n)
            .map(|i| {
                ScanResult::fixture(
                    format!("/work/app{i}/node_modules"),
                    (n - i) as u64 * 100,
                    i,
                    None,
                )
            })
            .collect()
    }

    fn orders(selected: &[ScanResult]) -> Vec<usize> {
        selected.iter().map(ScanResult::read_order).collect()
    }

    #[test]
    fn test_parse_all() {
        let list = results(4);
        assert_eq!(parse_selection("all", &list), Some(list.clone()));
        assert_eq!(parse_selection("  ALL\n", &list), Some(list));
    }

    #[test]
    fn test_parse_none_and_cancel() {
        let list = results(3);
        assert_eq!(parse_selection("none", &list), None);
        assert_eq!(parse_selection("Cancel", &list), None);
        assert_eq!(parse_selection("", &list), None);
    }

    #[test]
    fn test_parse_indices() {
        let list = results(5);
        let chosen = parse_selection("1,3", &list).unwrap();
        assert_eq!(orders(&chosen), vec![1, 3]);

        let chosen = parse_selection(" 5 , 2 ", &list).unwrap();
        assert_eq!(orders(&chosen), vec![5, 2]);
    }

    #[test]
    fn test_parse_drops_bad_tokens() {
        let list = results(3);
        let chosen = parse_selection("0,2,x,99,-1,3", &list).unwrap();
        assert_eq!(orders(&chosen), vec![2, 3]);
    }

    #[test]
    fn test_parse_out_of_range_only_cancels() {
        let list = results(3);
        assert_eq!(parse_selection("99", &list), None);
        assert_eq!(parse_selection("foo,bar", &list), None);
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        let list = results(3);
        let chosen = parse_selection("2,2,1,2", &list).unwrap();
        assert_eq!(orders(&chosen), vec![2, 1]);
    }

    #[test]
    fn test_select_interactive_reads_one_line() {
        let list = results(3);
        let mut input = Cursor::new("2\nall\n");
        let mut output = Vec::new();

        let chosen = select_interactive(&list, &mut input, &mut output)
            .unwrap()
            .unwrap();
        assert_eq!(orders(&chosen), vec![2]);

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains(" 1. app1 (200 B)"));
        assert!(shown.contains(" 3. app3 (0 B)"));
        assert!(shown.contains("Selected 1 directories"));
    }

    #[test]
    fn test_select_interactive_eof_cancels() {
        let list = results(2);
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(
            select_interactive(&list, &mut input, &mut output)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_confirm() {
        let mut output = Vec::new();
        for (answer, expected) in [
            ("y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
            ("yep\n", false),
        ] {
            let mut input = Cursor::new(answer);
            assert_eq!(
                confirm("Delete?", &mut input, &mut output).unwrap(),
                expected,
                "answer {answer:?}"
            );
        }
        assert!(String::from_utf8(output).unwrap().starts_with("Delete? [y/N]: "));
    }

    #[test]
    fn test_project_name() {
        assert_eq!(project_name(Path::new("/work/app/node_modules")), "app");
        assert_eq!(project_name(Path::new("/node_modules")), "/node_modules");
    }

    proptest! {
        #[test]
        fn test_selection_is_subset_of_listed(
            n in 1usize..12,
            picks in prop::collection::vec(0usize..20, 0..10),
        ) {
            let list = results(n);
            let line = picks.iter().map(usize::to_string).collect::<Vec<_>>().join(",");

            let valid: Vec<usize> = picks.iter().copied().filter(|&p| p >= 1 && p <= n).collect();
            match parse_selection(&line, &list) {
                None => prop_assert!(valid.is_empty()),
                Some(chosen) => {
                    prop_assert!(!chosen.is_empty());
                    for r in &chosen {
                        prop_assert!(valid.contains(&r.read_order()));
                    }
                }
            }
        }
    }
}
