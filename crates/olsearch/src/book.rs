use std::fmt;

/// The first result of a title search: its title and the first listed author.
///
/// The [`Display`](fmt::Display) form is the two line summary printed by the CLI:
///
/// ```
/// let book = olsearch::Book::new("The Hobbit", "J.R.R. Tolkien");
/// assert_eq!("Title: The Hobbit\nAuthor: J.R.R. Tolkien", book.to_string());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    /// Creates a new [`Book`].
    pub fn new<T, A>(title: T, author: A) -> Self
    where
        T: Into<String>,
        A: Into<String>,
    {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Title of the book as returned by the search API.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// First author listed for the book.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {}\nAuthor: {}", self.title, self.author)
    }
}
