/// Rows not available to the option list: title bar, prompt line, footer.
pub const CHROME_ROWS: u16 = 3;

/// Smallest option budget a select screen is ever given. The pagination
/// window reserves up to two rows for continuation ellipses, so it needs at
/// least three to show anything between them.
pub const MIN_OPTION_ROWS: usize = 3;

/// Rows left for options on a select screen of `total_rows`, after the
/// chrome and the informational messages above the prompt. Never below
/// `MIN_OPTION_ROWS`; on a terminal too short for both, the message stack
/// is what gets clipped.
pub fn available_option_rows(total_rows: u16, message_count: usize) -> usize {
    (total_rows as usize)
        .saturating_sub(CHROME_ROWS as usize)
        .saturating_sub(message_count)
        .max(MIN_OPTION_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_option_rows() {
        assert_eq!(available_option_rows(10, 0), 7);
        assert_eq!(available_option_rows(10, 2), 5);
    }

    #[test]
    fn test_row_budget_never_drops_below_floor() {
        assert_eq!(available_option_rows(10, 5), MIN_OPTION_ROWS);
        assert_eq!(available_option_rows(3, 0), MIN_OPTION_ROWS);
        assert_eq!(available_option_rows(0, 9), MIN_OPTION_ROWS);
    }
}
