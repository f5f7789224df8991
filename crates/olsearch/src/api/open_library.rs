use log::{info, trace};
use serde::Deserialize;

use crate::{Book, Error, ErrorKind};

use super::Client;

const OPEN_LIBRARY_SEARCH_URL: &str = "https://openlibrary.org/search.json";
const FIELDS: [&str; 2] = ["title", "author_name"];
const LIMIT: usize = 1;

/// A title search against the Open Library search API.
///
/// Only the spaces of the title are replaced (with `+`), any other character is passed through
/// as is and left to the URL parsing of the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    term: String,
}

impl Query {
    /// Creates a [`Query`] for the `title` given.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            term: title.replace(' ', "+"),
        }
    }

    /// The title as it is sent in the `title` query parameter.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The query string of the request, without the leading `?`.
    ///
    /// ```
    /// let query = olsearch::Query::new("the hobbit");
    /// assert_eq!("title=the+hobbit&fields=title,author_name&limit=1", query.query_string());
    /// ```
    #[must_use]
    pub fn query_string(&self) -> String {
        format!(
            "title={}&fields={}&limit={LIMIT}",
            self.term,
            FIELDS.join(",")
        )
    }

    /// The full URL of the request.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{OPEN_LIBRARY_SEARCH_URL}?{}", self.query_string())
    }
}

pub(crate) fn get_book_by_title<C: Client>(title: &str) -> Result<Book, Error> {
    info!("Searching for title '{title}' using Open Library API");
    let url = Query::new(title).url();

    let client = C::default();
    let SearchModel { docs } = client.get_json(&url)?;

    trace!("Request was successful");

    let doc = docs.into_iter().next().ok_or_else(|| {
        Error::new(
            ErrorKind::NoValue,
            format!("No books found with a title of {title}"),
        )
    })?;

    Book::try_from(doc)
}

pub(crate) fn get_text_by_title<C: Client>(title: &str) -> Result<String, Error> {
    info!("Searching for title '{title}' using Open Library API");
    let url = Query::new(title).url();
    C::default().get_text(&url)
}

pub(crate) fn get_json_by_title<C: Client>(title: &str) -> Result<serde_json::Value, Error> {
    info!("Searching for title '{title}' using Open Library API");
    let url = Query::new(title).url();
    C::default().get_json(&url)
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct SearchModel {
    docs: Vec<Doc>,
}

/// A single document record, only the requested fields are modelled.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
struct Doc {
    title: Option<String>,
    #[serde(default)]
    author_name: Vec<String>,
}

impl TryFrom<Doc> for Book {
    type Error = Error;

    fn try_from(doc: Doc) -> Result<Self, Error> {
        let Doc { title, author_name } = doc;

        let title = title
            .ok_or_else(|| Error::new(ErrorKind::NoValue, "No title found for the book"))?;

        let author = author_name.into_iter().next().ok_or_else(|| {
            Error::new(
                ErrorKind::NoValue,
                format!("No authors found for the book titled {title}"),
            )
        })?;

        Ok(Self::new(title, author))
    }
}
