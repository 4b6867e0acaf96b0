//! Test-method naming with overload disambiguation.
//!
//! A method name that occurs once becomes `<Name>Test`. Overloaded names are numbered in call order starting at
//! one: `Parse1Test`, `Parse2Test`. If a numbered name collides with a name already handed out (an overload
//! `Run` next to a method literally named `Run1`), `_2`, `_3`, ... is appended until it is unique.

use std::collections::{HashMap, HashSet};

use testgen_core::lang::conventions::{TEST_METHOD_SUFFIX, bare_identifier};

use super::errors::GenerateError;

#[derive(Debug, Clone, Copy, Default)]
struct NameTally {
    total: usize,
    issued: usize,
}

/// Per-class naming state, built from the class's selected methods.
#[derive(Debug, Clone, Default)]
pub struct NameDisambiguator {
    tallies: HashMap<String, NameTally>,
    used: HashSet<String>,
}

impl NameDisambiguator {
    pub fn new<'n>(names: impl IntoIterator<Item = &'n str>) -> Self {
        let mut tallies: HashMap<String, NameTally> = HashMap::new();
        for name in names {
            tallies.entry(name.to_string()).or_default().total += 1;
        }
        Self {
            tallies,
            used: HashSet::new(),
        }
    }

    /// Next test name for `name`.
    ///
    /// ## Errors
    /// [`GenerateError::UnknownMethodName`] if `name` was not among the names the disambiguator was built from.
    pub fn next_name(&mut self, name: &str) -> Result<String, GenerateError> {
        let tally = self
            .tallies
            .get_mut(name)
            .ok_or_else(|| GenerateError::UnknownMethodName(name.to_string()))?;

        let bare = bare_identifier(name);
        let candidate = if tally.total <= 1 {
            format!("{bare}{TEST_METHOD_SUFFIX}")
        } else {
            tally.issued += 1;
            format!("{bare}{}{TEST_METHOD_SUFFIX}", tally.issued)
        };

        let mut unique = candidate.clone();
        let mut n = 1;
        while self.used.contains(&unique) {
            n += 1;
            unique = format!("{candidate}_{n}");
        }
        self.used.insert(unique.clone());
        Ok(unique)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_get_plain_suffix() {
        let mut names = NameDisambiguator::new(["GetName", "SetName"]);
        assert_eq!(names.next_name("GetName").unwrap(), "GetNameTest");
        assert_eq!(names.next_name("SetName").unwrap(), "SetNameTest");
    }

    #[test]
    fn test_overloads_are_numbered_from_one() {
        let mut names = NameDisambiguator::new(["Parse", "Parse", "Parse"]);
        assert_eq!(names.next_name("Parse").unwrap(), "Parse1Test");
        assert_eq!(names.next_name("Parse").unwrap(), "Parse2Test");
        assert_eq!(names.next_name("Parse").unwrap(), "Parse3Test");
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let mut names = NameDisambiguator::new(["Run"]);
        assert!(matches!(
            names.next_name("Walk"),
            Err(GenerateError::UnknownMethodName(name)) if name == "Walk"
        ));
    }

    #[test]
    fn test_numbered_overload_colliding_with_literal_name_stays_unique() {
        let mut names = NameDisambiguator::new(["Run1", "Run", "Run"]);
        assert_eq!(names.next_name("Run1").unwrap(), "Run1Test");
        assert_eq!(names.next_name("Run").unwrap(), "Run1Test_2");
        assert_eq!(names.next_name("Run").unwrap(), "Run2Test");
    }

    #[test]
    fn test_verbatim_identifiers_lose_their_marker() {
        let mut names = NameDisambiguator::new(["@event"]);
        assert_eq!(names.next_name("@event").unwrap(), "eventTest");
    }
}
