use std::io::{self, Write};
use std::time::SystemTime;

use chrono::{DateTime, Local, TimeDelta};

use crate::models::EntryKind;

const INDENT_UNIT: &str = "   ";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Optional columns printed after an entry name. `None` renders as blank.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Columns {
    pub size: Option<u64>,
    pub modified: Option<SystemTime>,
}

pub fn indent(level: usize) -> String {
    let mut out = INDENT_UNIT.repeat(level);
    out.push(' ');
    out
}

/// Local time, with a `.ffffff` suffix only when the microseconds are non-zero.
pub fn format_time(time: SystemTime) -> String {
    let mut local = DateTime::<Local>::from(time);
    let mut micros = round_to_micros(local.timestamp_subsec_nanos());
    if micros >= 1_000_000 {
        local += TimeDelta::seconds(1);
        micros -= 1_000_000;
    }

    let mut out = local.format(TIME_FORMAT).to_string();
    if micros != 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}

/// Nanoseconds to microseconds, ties to even.
fn round_to_micros(nanos: u32) -> u32 {
    let (micros, rest) = (nanos / 1_000, nanos % 1_000);
    if rest > 500 || (rest == 500 && micros % 2 == 1) {
        micros + 1
    } else {
        micros
    }
}

/// Writes `{indent}{name}{marker} {size} {time}`; both separators are always present.
pub fn write_entry<W: Write>(
    writer: &mut W,
    level: usize,
    name: &str,
    kind: EntryKind,
    columns: Columns,
) -> io::Result<()> {
    writer.write_all(indent(level).as_bytes())?;
    writer.write_all(name.as_bytes())?;
    if kind == EntryKind::Directory {
        writer.write_all(b"/")?;
    }

    writer.write_all(b" ")?;
    if let Some(size) = columns.size {
        write!(writer, "{size}")?;
    }

    writer.write_all(b" ")?;
    if let Some(modified) = columns.modified {
        writer.write_all(format_time(modified).as_bytes())?;
    }

    writer.write_all(b"\n")
}
