//! One row of a global status report.

use std::fmt;


/// A machine listed in a global status report.
///
/// Both fields come from the same report line and are never changed
/// afterwards, hence there are only accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
  id: String,
  name: String
}

impl Entry {
  pub(crate) fn new(id: &str, name: &str) -> Self {
    Entry {
      id: id.trim().to_string(),
      name: name.trim().to_string()
    }
  }

  /// The short machine identifier, as accepted by `vagrant <cmd> <id>`.
  pub fn id(&self) -> &str {
    &self.id
  }

  /// The human-assigned machine name.
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl fmt::Display for Entry {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.name, self.id)
  }
}



// vim: set ft=rust et sw=2 ts=2 sts=2 cinoptions=2 tw=79 :
