use anyhow::{bail, ensure, Context, Result};

/// Parses a run-length encoded Life pattern into a list of live cells,
/// anchored so that the pattern's top-left corner is at (0, 0).
///
/// Accepts the common RLE layout: `#` comment lines, a `x = W, y = H` header
/// (any trailing rule annotation is ignored) and a body of `b`/`o` runs with
/// `$` line breaks, terminated by `!`.
pub fn parse_rle(data: &[u8]) -> Result<Vec<(i64, i64)>> {
    let text = std::str::from_utf8(data).context("pattern is not valid utf-8")?;
    let mut lines = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'));

    let header = lines.next().context("pattern has no header line")?;
    let (width, height) = parse_header(header)?;

    let mut cells = vec![];
    let (mut x, mut y) = (0i64, 0i64);
    let mut cnt: Option<i64> = None;
    'body: for line in lines {
        for c in line.chars() {
            match c {
                '0'..='9' => {
                    let digit = (c as u8 - b'0') as i64;
                    cnt = Some(cnt.unwrap_or(0) * 10 + digit);
                }
                'o' => {
                    for _ in 0..cnt.take().unwrap_or(1) {
                        cells.push((x, y));
                        x += 1;
                    }
                    ensure!(x <= width, "pattern row exceeds declared width");
                }
                'b' => {
                    x += cnt.take().unwrap_or(1);
                    ensure!(x <= width, "pattern row exceeds declared width");
                }
                '$' => {
                    y += cnt.take().unwrap_or(1);
                    x = 0;
                    ensure!(y <= height, "pattern exceeds declared height");
                }
                '!' => break 'body,
                c if c.is_whitespace() => {}
                _ => bail!("unexpected symbol {c:?} in pattern body"),
            }
        }
    }
    ensure!(y <= height, "pattern exceeds declared height");
    Ok(cells)
}

/// Extracts `W` and `H` from a `x = W, y = H, ...` header line.
fn parse_header(header: &str) -> Result<(i64, i64)> {
    let mut numbers = header
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>());
    let width = numbers
        .next()
        .context("header line is missing the pattern width")??;
    let height = numbers
        .next()
        .context("header line is missing the pattern height")??;
    ensure!(width > 0 && height > 0, "pattern dimensions must be positive");
    Ok((width, height))
}
