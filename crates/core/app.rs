use std::io::{BufRead, Write};

use eyre::{eyre, Context, Result};
use log::info;

/// Reads a single line as the book title, without its line ending.
pub fn read_title<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .wrap_err_with(|| eyre!("Could not read the book title from stdin"))?;

    if read == 0 {
        return Err(eyre!("No book title was entered"));
    }

    let len = line.trim_end_matches(&['\r', '\n'][..]).len();
    line.truncate(len);
    Ok(line)
}

/// Writes the result under the `Search Result:` header followed by a blank line.
pub fn print_result<W: Write>(mut out: W, result: &str) -> Result<()> {
    writeln!(out, "Search Result:\n\n{result}")
        .and_then(|()| out.flush())
        .wrap_err_with(|| eyre!("Could not write the search result to stdout"))
}

pub fn search(title: &str, json: bool) -> Result<String> {
    if json {
        info!("--json used - printing the whole response");
        olsearch::search_json(title)
            .map(|value| format!("{value:#}"))
            .wrap_err_with(|| eyre!("Search for '{title}' failed"))
    } else {
        olsearch::search(title)
            .map(|book| book.to_string())
            .wrap_err_with(|| eyre!("Search for '{title}' failed"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{print_result, read_title};

    #[test]
    fn line_ending_is_removed() {
        assert_eq!("the hobbit", read_title(Cursor::new("the hobbit\n")).unwrap());
        assert_eq!("dune", read_title(Cursor::new("dune\r\n")).unwrap());
    }

    #[test]
    fn only_first_line_is_read() {
        let title = read_title(Cursor::new("emma\npersuasion\n")).unwrap();
        assert_eq!("emma", title);
    }

    #[test]
    fn surrounding_spaces_are_kept() {
        assert_eq!(" a  b ", read_title(Cursor::new(" a  b \n")).unwrap());
    }

    #[test]
    fn end_of_input_is_an_error() {
        assert!(read_title(Cursor::new("")).is_err());
    }

    #[test]
    fn empty_line_is_an_empty_title() {
        assert_eq!("", read_title(Cursor::new("\n")).unwrap());
    }

    #[test]
    fn result_is_printed_under_header() {
        let mut out = Vec::new();
        print_result(&mut out, "Title: The Hobbit\nAuthor: J.R.R. Tolkien").unwrap();

        assert_eq!(
            "Search Result:\n\nTitle: The Hobbit\nAuthor: J.R.R. Tolkien\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn json_result_is_printed_as_is() {
        let json = "{\n  \"docs\": []\n}";
        let mut out = Vec::new();
        print_result(&mut out, json).unwrap();

        assert_eq!(
            "Search Result:\n\n{\n  \"docs\": []\n}\n",
            String::from_utf8(out).unwrap()
        );
    }
}
