//! Client side of the school timetable service: fetch a resource list, render it
//! into a page, and mutate it through create/delete requests.
pub mod error;
pub mod fetcher;
pub mod helpers;
pub mod models;
pub mod mutation;
pub mod notifier;
pub mod renderer;
pub mod run_tool;
pub mod transport;
pub mod validation;
