use crate::generator::NameGenerator;

#[macro_export]
macro_rules! assert_generated_names {
    ( $generator:expr, $target:expr, $feature:expr, [$($expected:expr),+$(,)?] ) => {{
        let target: Option<&str> = $target;
        $(
            match $generator.generate_name(target, $feature) {
                Ok(name) => assert_eq!(
                    name.to_qualified_name(),
                    $expected,
                    "unexpected name for target {:?} and feature {:?}",
                    target,
                    $feature
                ),
                Err(e) => panic!("generate_name failed for feature {:?}: {}", $feature, e),
            }
        )+
    }};
}

pub fn assert_generated(generator: &NameGenerator, target: Option<&str>, feature_name: &str, expected: &str) {
    let actual = generator
        .generate_name(target, feature_name)
        .unwrap_or_else(|e| panic!("generate_name({target:?}, {feature_name:?}) failed: {e}"))
        .to_qualified_name();

    assert_eq!(
        expected, actual,
        "\n\nexpected:\n\n{expected}\nactual:\n\n{actual}\n\n"
    );
}
