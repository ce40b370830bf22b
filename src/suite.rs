//! Suites: explicit registries of parameterized declarations.
//!
//! A suite plays the role of a test class. Each registered declaration has a
//! field name, and every tuple it generates becomes one child test named
//! `<field>: (<p1>,<p2>,...)`.

use std::fmt;

use serde::Serialize;

use crate::call::Call;
use crate::diagnostics::SuiteError;
use crate::outcome::Outcome;
use crate::parameterizer::Parameterized;

/// Identity of one child test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Description {
    pub suite: String,
    pub field: String,
    pub parameters: Vec<String>,
}

impl Description {
    /// `<field>: (<p1>,<p2>,...)`, with no spaces around the commas.
    pub fn display_name(&self) -> String {
        format!("{}: ({})", self.field, self.parameters.join(","))
    }

    /// The display name prefixed with the suite, `<suite>::<field>: (...)`.
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.suite, self.display_name())
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// One generated, executable test unit.
#[derive(Debug)]
pub struct ChildTest {
    description: Description,
    call: Box<dyn Call>,
}

impl ChildTest {
    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn name(&self) -> String {
        self.description.display_name()
    }

    pub fn execute(&self) -> Outcome {
        self.call.execute()
    }
}

/// Named collection of parameterized declarations.
#[derive(Debug)]
pub struct Suite {
    name: String,
    declarations: Vec<(String, Parameterized)>,
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a declaration under `field`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::EmptyName`] or [`SuiteError::DuplicateName`]
    /// when `field` cannot identify the declaration's tests.
    pub fn register(
        mut self,
        field: impl Into<String>,
        parameterized: Parameterized,
    ) -> Result<Self, SuiteError> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(SuiteError::EmptyName { suite: self.name });
        }
        if self.declarations.iter().any(|(name, _)| *name == field) {
            return Err(SuiteError::DuplicateName {
                suite: self.name,
                field,
            });
        }
        self.declarations.push((field, parameterized));
        Ok(self)
    }

    /// Registered field names, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.declarations.iter().map(|(name, _)| name.as_str())
    }

    /// Expands every declaration into child tests.
    ///
    /// Children come out in registration order, then in source order within
    /// each declaration.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Source`] for the first parameter source that
    /// fails; no children are returned in that case.
    pub fn children(&self) -> Result<Vec<ChildTest>, SuiteError> {
        let mut children = Vec::new();
        for (field, parameterized) in &self.declarations {
            let calls = parameterized
                .generate_calls()
                .map_err(|source| SuiteError::Source {
                    suite: self.name.clone(),
                    field: field.clone(),
                    source,
                })?;
            tracing::debug!(
                suite = %self.name,
                field = %field,
                target = parameterized.target_type(),
                calls = calls.len(),
                "expanded parameterized declaration"
            );
            children.extend(calls.into_iter().map(|call| ChildTest {
                description: Description {
                    suite: self.name.clone(),
                    field: field.clone(),
                    parameters: call.parameters(),
                },
                call,
            }));
        }
        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params;
    use crate::parameterizer::Parameterizer;

    #[derive(Default)]
    struct Strings;

    impl Strings {
        fn concat(&mut self, left: &'static str, right: &'static str, joined: &'static str) {
            assert_eq!(format!("{left}{right}"), joined);
        }
    }

    fn concat() -> Parameterized {
        Parameterizer::<Strings>::of()
            .run(Strings::concat)
            .with(|| params::with3("a", "b", "ab").and("", "x", "x"))
    }

    #[test]
    fn child_names_join_parameters_with_commas() {
        let suite = Suite::new("Strings").register("concat", concat()).unwrap();
        let names: Vec<String> = suite.children().unwrap().iter().map(ChildTest::name).collect();
        assert_eq!(names, vec!["concat: (a,b,ab)", "concat: (,x,x)"]);
    }

    #[test]
    fn qualified_name_includes_suite() {
        let description = Description {
            suite: "FibonacciTest".to_string(),
            field: "compute".to_string(),
            parameters: vec!["6".to_string(), "8".to_string()],
        };
        assert_eq!(description.to_string(), "compute: (6,8)");
        assert_eq!(description.qualified_name(), "FibonacciTest::compute: (6,8)");
    }

    #[test]
    fn duplicate_fields_are_rejected() {
        let err = Suite::new("Strings")
            .register("concat", concat())
            .unwrap()
            .register("concat", concat())
            .unwrap_err();
        assert!(matches!(
            err,
            SuiteError::DuplicateName { ref field, .. } if field == "concat"
        ));
    }

    #[test]
    fn fields_keep_registration_order() {
        let suite = Suite::new("Strings")
            .register("concat", concat())
            .unwrap()
            .register("again", concat())
            .unwrap();
        assert_eq!(suite.fields().collect::<Vec<_>>(), vec!["concat", "again"]);
        assert_eq!(suite.name(), "Strings");
    }

    #[test]
    fn empty_fields_are_rejected() {
        let err = Suite::new("Strings").register("  ", concat()).unwrap_err();
        assert!(matches!(err, SuiteError::EmptyName { .. }));
    }

    #[test]
    fn failing_source_aborts_discovery() {
        let broken = Parameterizer::<Strings>::of()
            .run(Strings::concat)
            .try_with(|| Err::<Vec<(&'static str, &'static str, &'static str)>, _>("gone"));
        let suite = Suite::new("Strings")
            .register("concat", concat())
            .unwrap()
            .register("broken", broken)
            .unwrap();
        let err = suite.children().unwrap_err();
        assert!(matches!(err, SuiteError::Source { ref field, .. } if field == "broken"));
    }
}
