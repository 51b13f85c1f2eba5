//! iCalendar serializer (RFC 5545).
//!
//! Serializes iCalendar structures to compliant text format. Properties and
//! child components are written in insertion order, so builders decide the
//! layout of the document.

use super::escape::{escape_param_value, escape_text};
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ICalendar, Parameter, Property};

/// Serializes an iCalendar document to a string.
#[must_use]
pub fn serialize(ical: &ICalendar) -> String {
    serialize_component(&ical.root)
}

/// Serializes a component (and its children) to a string.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = String::new();
    write_component(&mut result, component);
    result
}

fn write_component(out: &mut String, component: &Component) {
    out.push_str(&fold_line(&format!("BEGIN:{}", component.name())));
    for prop in &component.properties {
        out.push_str(&serialize_property(prop));
    }
    for child in &component.children {
        write_component(out, child);
    }
    out.push_str(&fold_line(&format!("END:{}", component.name())));
}

/// Serializes a property to a folded, CRLF-terminated content line.
///
/// TEXT values are escaped; every other value is written from its raw form.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in &prop.params {
        line.push(';');
        line.push_str(&serialize_parameter(param));
    }

    line.push(':');
    if prop.is_text() {
        line.push_str(&escape_text(&prop.raw_value));
    } else {
        line.push_str(&prop.raw_value);
    }

    fold_line(&line)
}

fn serialize_parameter(param: &Parameter) -> String {
    let values: Vec<String> = param.values.iter().map(|v| escape_param_value(v)).collect();
    format!("{}={}", param.name, values.join(","))
}
