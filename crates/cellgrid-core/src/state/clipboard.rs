use crate::range::CellCoord;

/// Separator between cell values on the clipboard
pub const CELL_SEPARATOR: char = '\t';

/// Join cell values into clipboard text
pub fn join_values<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = String::new();
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            text.push(CELL_SEPARATOR);
        }
        text.push_str(value);
    }
    text
}

/// Split clipboard text into per-cell tokens
pub fn split_values(text: &str) -> Vec<&str> {
    text.split(CELL_SEPARATOR).collect()
}

/// Snapshot of the cells taken by the last copy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardState {
    copied: Vec<CellCoord>,
}

impl ClipboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot; an empty copy clears it
    pub fn record(&mut self, cells: Vec<CellCoord>) {
        self.copied = cells;
    }

    pub fn copied(&self) -> &[CellCoord] {
        &self.copied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(["a", "b", "c"]), "a\tb\tc");
        assert_eq!(join_values(["only"]), "only");
        assert_eq!(join_values(["", ""]), "\t");
        assert_eq!(join_values(Vec::<&str>::new()), "");
    }

    #[test]
    fn test_split_values() {
        assert_eq!(split_values("x\ty"), vec!["x", "y"]);
        assert_eq!(split_values("x"), vec!["x"]);
        assert_eq!(split_values("\t"), vec!["", ""]);
    }

    #[test]
    fn test_newlines_are_cell_content() {
        assert_eq!(split_values("a\nb\tc"), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_record_replaces_snapshot() {
        let mut state = ClipboardState::new();
        assert!(state.copied().is_empty());

        state.record(vec![CellCoord::new(0, 0), CellCoord::new(0, 1)]);
        assert_eq!(state.copied(), &[CellCoord::new(0, 0), CellCoord::new(0, 1)]);

        state.record(Vec::new());
        assert!(state.copied().is_empty());
    }
}
