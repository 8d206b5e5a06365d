//! Crate-level test modules for Olelo.
//!
//! Component tests live next to their modules; this tree covers the ambient
//! layers (configuration loading and error reporting) and the helpers shared
//! between them.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{create_test_dir, keyword_strategy, word_entries_strategy, TestFixture};

/// Declare a property-based test with a fixed number of cases.
///
/// `$test_fn` receives one generated value and returns
/// `Result<(), TestCaseError>`.
#[macro_export]
macro_rules! run_proptest {
    ($name:ident, $strategy:expr, $test_fn:expr) => {
        proptest::proptest! {
            #![proptest_config(proptest::test_runner::Config::with_cases(100))]
            #[test]
            fn $name(value in $strategy) {
                $test_fn(value)?;
            }
        }
    };
}
