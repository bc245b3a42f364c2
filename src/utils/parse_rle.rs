use crate::{Coord, LifeError, Result};

/// Returns live cells of the parsed RLE pattern; the top-left corner is `(0, 0)`.
///
/// Live cells are checked against the `x = .., y = ..` header.
pub fn parse_rle(data: &[u8]) -> Result<Vec<Coord>> {
    let err = |msg: &str| LifeError::InvalidRle(msg.to_string());
    let parse_next_number = |i: &mut usize| -> Result<i64> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            *i += 1;
        }
        let j = {
            let mut j = *i;
            while j < data.len() && data[j].is_ascii_digit() {
                j += 1;
            }
            j
        };
        if *i == j {
            return Err(err("expected a number"));
        }
        let ans = std::str::from_utf8(&data[*i..j])
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| err("number is too large"))?;
        *i = j;
        Ok(ans)
    };
    let skip_line = |i: &mut usize| {
        while *i < data.len() && data[*i] != b'\n' {
            *i += 1;
        }
        *i = (*i + 1).min(data.len());
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            skip_line(&mut i);
        } else {
            i += 1;
        }
    }
    // header line: `x = W, y = H[, rule = ..]`
    let line_end = data[i..]
        .iter()
        .position(|&c| c == b'\n')
        .map_or(data.len(), |p| i + p);
    let header =
        std::str::from_utf8(&data[i..line_end]).map_err(|_| err("header is not valid UTF-8"))?;
    let (mut width, mut height) = (None, None);
    for field in header.split(',') {
        let (key, value) = field
            .split_once('=')
            .ok_or_else(|| err("missing `x = .., y = ..` header"))?;
        let size = || {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| err("header size is not a number"))
        };
        match key.trim() {
            "x" => width = Some(size()?),
            "y" => height = Some(size()?),
            _ => {}
        }
    }
    let (width, height) = width
        .zip(height)
        .ok_or_else(|| err("header must define both `x` and `y`"))?;
    i = line_end + 1;

    // run-length encoded pattern data
    let mut result = vec![];
    let (mut x, mut y, mut cnt): (i64, i64, i64) = (0, 0, 1);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => cnt = parse_next_number(&mut i)?,
            b'o' => {
                if x.saturating_add(cnt) > width || y >= height {
                    return Err(err("pattern does not fit into its header size"));
                }
                result.extend((x..x + cnt).map(|col| Coord::new(y, col)));
                (x, i, cnt) = (x + cnt, i + 1, 1);
            }
            b'b' => (x, i, cnt) = (x.saturating_add(cnt), i + 1, 1),
            b'$' => (x, y, i, cnt) = (0, y.saturating_add(cnt), i + 1, 1),
            b'!' => break,
            c if c.is_ascii_whitespace() => i += 1,
            _ => return Err(err("unexpected symbol")),
        };
    }
    Ok(result)
}
