//! Plain-text tour files: the total length on the first line, then one point
//! identifier per line in visiting order.

use std::io::{self, Write};

use crate::types::{Distance, PointId};
use crate::{Error, Result};

pub fn write_solution<W: Write>(mut out: W, length: Distance, ids: &[PointId]) -> io::Result<()> {
    writeln!(out, "{length}")?;
    for id in ids {
        writeln!(out, "{id}")?;
    }
    out.flush()
}

/// Inverse of [`write_solution`]. Blank lines are ignored.
pub fn parse_solution(text: &str) -> Result<(Distance, Vec<PointId>)> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (_, first) = lines
        .next()
        .ok_or_else(|| Error::invalid_input("tour file is empty"))?;
    let length: Distance = first
        .parse()
        .map_err(|e| Error::invalid_input(format!("line 1: bad tour length {first:?}: {e}")))?;

    let ids = lines
        .map(|(line_no, l)| {
            l.parse::<PointId>()
                .map_err(|e| Error::invalid_input(format!("line {line_no}: bad point id {l:?}: {e}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok((length, ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_length_then_ids() {
        let mut buf = Vec::new();
        write_solution(&mut buf, 40, &[0, 1, 2, 3]).expect("write");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "40\n0\n1\n2\n3\n");
    }

    #[test]
    fn round_trips() {
        let ids = vec![17, 3, 250, 4];
        let mut buf = Vec::new();
        write_solution(&mut buf, 1234, &ids).expect("write");
        let text = String::from_utf8(buf).expect("utf8");
        assert_eq!(parse_solution(&text).expect("parse"), (1234, ids));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_solution(""), Err(Error::InvalidInput(_))));
        assert!(matches!(parse_solution("abc\n1\n"), Err(Error::InvalidInput(_))));
        let err = parse_solution("10\n1\n\nx\n").unwrap_err();
        assert!(err.to_string().contains("line 4"), "{err}");
    }
}
