#![doc = include_str!("../README.md")]
mod aggregate;
mod complaint;
mod error;
mod groups;
mod loader;
mod percent;
mod report;

pub use self::{
    aggregate::{summarize, Summary},
    complaint::{is_valid_date, Complaint, Complaints, SortKey},
    error::{Error, Result},
    groups::Groups,
    loader::{Loader, REQUIRED_COLUMNS},
    percent::Percent,
    report::Report,
};
