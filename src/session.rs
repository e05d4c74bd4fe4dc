use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::console::Console;
use crate::error::Result;
use crate::loader::load_data;
use crate::pager::display_raw_data;
use crate::report::report_all;
use crate::selector::get_filters;

/// Run analysis rounds until the user declines to restart. Returns the
/// number of completed rounds.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    data_dir: &Path,
) -> Result<usize> {
    let mut rounds = 0;
    loop {
        let start_time = Instant::now();
        info!(action = "start", component = "session", round = rounds + 1, "Starting analysis round");

        let spec = get_filters(console)?;
        let dataset = load_data(data_dir, &spec)?;
        report_all(console.out(), &dataset)?;
        drop(dataset);

        display_raw_data(console, data_dir, spec.city)?;
        rounds += 1;

        info!(
            action = "complete",
            component = "session",
            round = rounds,
            duration_ms = start_time.elapsed().as_millis(),
            "Analysis round completed"
        );

        if !console.confirm("\nWould you like to restart? Enter yes or no.\n")? {
            break;
        }
    }
    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BikeshareError;
    use crate::fixtures;
    use std::io::Cursor;

    fn run(script: &str) -> (Result<usize>, String) {
        let dir = fixtures::data_dir();
        let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let result = run_session(&mut console, dir.path());
        (result, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_single_round_then_quit() {
        let (rounds, output) = run("chicago\nnone\nno\nno\n");
        assert_eq!(rounds.unwrap(), 1);
        assert_eq!(output.matches("Hello!").count(), 1);
        assert!(output.contains("Most Common Month: january"));
        assert!(output.contains("Would you like to restart?"));
    }

    #[test]
    fn test_restart_runs_a_fresh_round() {
        let script = "chicago\nmonth\njune\nno\nYes\nwashington\nnone\nno\nnope\n";
        let (rounds, output) = run(script);
        assert_eq!(rounds.unwrap(), 2);
        assert_eq!(output.matches("Hello!").count(), 2);
        assert!(output.contains("Most Common Month: june"));
        assert!(output.contains("14th & Belmont St NW"));
    }

    #[test]
    fn test_empty_filter_result_completes_round() {
        let (rounds, output) = run("chicago\nboth\nmarch\nsunday\nno\nno\n");
        assert_eq!(rounds.unwrap(), 1);
        assert!(output.contains("Mean Travel Time: undefined"));
    }

    #[test]
    fn test_closed_input_after_a_round_ends_cleanly() {
        // input ends at the raw data prompt
        let (rounds, output) = run("washington\nnone\n");
        assert_eq!(rounds.unwrap(), 1);
        assert!(output.contains("Would you like to restart?"));
    }

    #[test]
    fn test_missing_city_file_is_an_error() {
        let (rounds, _) = run("new york city\nnone\n");
        assert!(matches!(rounds, Err(BikeshareError::DataRead { .. })));
    }
}
