//! Reduction of CoNLL-U data to CoNLL-X rows.
//!
//! CoNLL-U adds sentence comments and multi-word token ranges to the
//! tabular format. Both are dropped, all other lines are passed through.

use std::io;

use crate::error::Error;

/// Filter a single line.
///
/// Returns `None` when the line should be dropped, otherwise the line
/// with surrounding whitespace removed. Blank lines are kept, since they
/// separate sentences.
pub fn filter_line(line: &str) -> Option<&str> {
    if line.starts_with('#') {
        return None;
    }

    let line = line.trim();

    // Multi-word token range, e.g. 1-2\tdu\t_...
    match (line.find('-'), line.find('\t')) {
        (Some(hyphen), Some(tab)) if hyphen < tab => None,
        _ => Some(line),
    }
}

/// An iterator over the CoNLL-X lines of a CoNLL-U reader.
pub struct ConlluFilter<R> {
    read: R,
}

impl<R: io::BufRead> ConlluFilter<R> {
    /// Construct a filter from an object that implements the `io::BufRead`
    /// trait.
    pub fn new(read: R) -> Self {
        ConlluFilter { read }
    }
}

impl<R: io::BufRead> Iterator for ConlluFilter<R> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();

        loop {
            line.clear();

            match self.read.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    if let Some(kept) = filter_line(&line) {
                        return Some(Ok(kept.to_owned()));
                    }
                }
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// Copy CoNLL-U data from `read` to `write` as CoNLL-X.
///
/// Returns the number of dropped lines.
pub fn to_conllx<R, W>(read: R, mut write: W) -> Result<usize, Error>
where
    R: io::BufRead,
    W: io::Write,
{
    let mut dropped = 0;

    for line in read.lines() {
        let line = line?;
        match filter_line(&line) {
            Some(kept) => writeln!(write, "{}", kept)?,
            None => dropped += 1,
        }
    }

    write.flush()?;

    Ok(dropped)
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};
    use std::io::{BufReader, Cursor};
    use std::str;

    use super::{filter_line, to_conllx, ConlluFilter};

    static CONLLU: &str = "testdata/ud.conllu";

    static CONLLX: &str = "testdata/ud.conll";

    #[test]
    fn drops_comments() {
        assert_eq!(filter_line("# sent_id = 1"), None);
        assert_eq!(filter_line("#text"), None);
    }

    #[test]
    fn drops_ranges() {
        assert_eq!(filter_line("1-2\tdu\t_\t_\t_\t_\t_\t_\t_\t_"), None);
        assert_eq!(filter_line("10-11\tvámonos\t_"), None);
    }

    #[test]
    fn keeps_hyphens_after_first_field() {
        assert_eq!(
            filter_line("3\tup-to-date\t_\tADJ\t_\t_\t0\troot\t_\t_\n"),
            Some("3\tup-to-date\t_\tADJ\t_\t_\t0\troot\t_\t_")
        );
    }

    #[test]
    fn keeps_hyphen_without_tab() {
        assert_eq!(filter_line("a-b"), Some("a-b"));
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(filter_line("\n"), Some(""));
        assert_eq!(filter_line("  \t\n"), Some(""));
    }

    #[test]
    fn indented_comment_is_kept() {
        assert_eq!(filter_line(" # not a comment"), Some("# not a comment"));
    }

    #[test]
    fn filter_iterator() {
        let lines = ConlluFilter::new(Cursor::new("# c\n1-2\tab\n1\ta\n2\tb\n\n"))
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(lines, vec!["1\ta", "2\tb", ""]);
    }

    #[test]
    fn converts_treebank() {
        let mut output = Vec::new();
        let dropped = to_conllx(BufReader::new(File::open(CONLLU).unwrap()), &mut output).unwrap();

        assert_eq!(dropped, 5);
        assert_eq!(
            fs::read_to_string(CONLLX).unwrap(),
            str::from_utf8(&output).unwrap()
        );
    }
}
