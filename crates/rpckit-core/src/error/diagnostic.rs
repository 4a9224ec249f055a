//! `miette` integration for [`ErrorObject`].
//!
//! Lets an error object be reported with a diagnostic code and help text,
//! e.g. when a client surfaces a failed response to a terminal.

use std::fmt;

use miette::{Diagnostic, Severity};

use super::codes::{ErrorCode, Reserved};
use super::object::ErrorObject;

fn reserved_kind(code: ErrorCode) -> Option<Reserved> {
    Reserved::ALL.into_iter().find(|kind| kind.code() == code)
}

impl Diagnostic for ErrorObject {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let name = match reserved_kind(self.code) {
            Some(kind) => kind.name(),
            None if self.code.is_server_error() => "server_error",
            None => "application",
        };
        Some(Box::new(format!("jsonrpc::{name}")))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let kind = reserved_kind(self.code)?;
        Some(Box::new(kind.meaning()))
    }

    fn severity(&self) -> Option<Severity> {
        if self.code.is_protocol_range() {
            Some(Severity::Error)
        } else {
            Some(Severity::Warning)
        }
    }
}
