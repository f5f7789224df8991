#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # olsearch
//!
//! olsearch is a library for looking up a book by its title using the
//! [Open Library](https://openlibrary.org) search API. The first result is returned as a
//! [`Book`] holding its title and first author.

mod api;
mod book;
mod error;

pub use api::open_library::Query;
pub use book::Book;
pub use error::{Error, ErrorKind};

use log::trace;

type Client = reqwest::blocking::Client;

/// Search for a book by `title` using the Open Library search API.
///
/// Exactly one request is made, only the first result is read and no retries are attempted.
///
/// # Errors
///
/// An `Err` is returned when the request fails or the server responds with a non-success status.
/// An `Err` is returned when the response cannot be deserialized.
/// An `Err` is returned when no book is found, or the first book has no title or no authors.
#[inline]
pub fn search(title: &str) -> Result<Book, Error> {
    trace!("Search book by title of '{title}'");
    api::open_library::get_book_by_title::<Client>(title)
}

/// Search by `title` and return the response body as text, without interpreting it.
///
/// # Errors
///
/// An `Err` is returned when the request fails or the server responds with a non-success status.
/// An `Err` is returned when the response body is empty.
#[inline]
pub fn search_text(title: &str) -> Result<String, Error> {
    trace!("Search raw response by title of '{title}'");
    api::open_library::get_text_by_title::<Client>(title)
}

/// Search by `title` and return the whole JSON document of the response.
///
/// # Errors
///
/// An `Err` is returned when the request fails or the server responds with a non-success status.
/// An `Err` is returned when the response is not valid JSON.
#[inline]
pub fn search_json(title: &str) -> Result<serde_json::Value, Error> {
    trace!("Search json response by title of '{title}'");
    api::open_library::get_json_by_title::<Client>(title)
}
