//! Rendering of factorial tables for output.

use std::fmt::Display;

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::{InvalidArgument, KeyNotFound};
use crate::table::FactorialTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// One value per line for the selected keys.
    Lines,
    /// A console table of every entry.
    Table,
    /// A JSON object mapping each key to its factorial.
    Json,
}

pub fn parse_format(s: &str) -> Result<Format, InvalidArgument> {
    let name = s.to_lowercase();
    Format::iter()
        .find(|format| format.to_string() == name)
        .ok_or_else(|| {
            let supported: Vec<_> = Format::iter().map(|format| format.to_string()).collect();
            InvalidArgument::new(
                s,
                format!("unsupported format; expected one of {}", supported.join(", ")),
            )
        })
}

/// The values for `keys`, one per line, in the order the keys are given.
pub fn lines<V: Display>(table: &FactorialTable<V>, keys: &[u64]) -> Result<String, KeyNotFound> {
    let mut out = String::new();
    for &key in keys {
        out.push_str(&table.lookup(key)?.to_string());
        out.push('\n');
    }
    Ok(out)
}

pub fn tabulate<V: Display>(table: &FactorialTable<V>) -> Table {
    let mut tabulated = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec!["n".into(), "n!".into()],
        ));
    tabulated.push_rows(table.iter().map(|(key, value)| {
        Row::new(
            Styles::default(),
            vec![
                Cell::new(Styles::default(), format!("{key}").into()),
                Cell::new(Styles::default(), format!("{value}").into()),
            ],
        )
    }));
    tabulated
}

pub fn to_json<V: ToString>(table: &FactorialTable<V>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(table)
}
