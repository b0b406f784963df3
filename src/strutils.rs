use crate::err::Error;


pub(crate) fn buf_to_string(buf: Vec<u8>) -> Result<String, Error> {
  Ok(String::from_utf8(buf)?)
}

/// A line consisting of nothing but whitespace ends a report's table.
pub(crate) fn is_blank(line: &str) -> bool {
  line.trim().is_empty()
}

/// Cut `line` at byte offset `col`.
///
/// Lines shorter than `col` are returned whole.  If `col` falls inside a
/// multibyte character the cut is moved back to that character's start.
pub(crate) fn truncate_at(line: &str, col: usize) -> &str {
  if col >= line.len() {
    return line;
  }
  let mut col = col;
  while !line.is_char_boundary(col) {
    col -= 1;
  }
  &line[..col]
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
