//!
//! The ABI type name normalization.
//!

///
/// Canonicalizes the shorthand type names emitted by the Yul+ front-end.
///
/// Only the exact `uint` and `int` aliases are rewritten. Bracketed forms
/// like `uint[]` pass through unchanged, matching the upstream behavior.
///
pub fn normalize(raw: &str) -> String {
    match raw {
        "uint" => "uint256".to_owned(),
        "int" => "int256".to_owned(),
        _ => raw.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn aliases() {
        assert_eq!(normalize("uint"), "uint256");
        assert_eq!(normalize("int"), "int256");
    }

    #[test]
    fn identity() {
        assert_eq!(normalize("uint256"), "uint256");
        assert_eq!(normalize("address"), "address");
        assert_eq!(normalize("bool"), "bool");
        assert_eq!(normalize("uint[]"), "uint[]");
        assert_eq!(normalize("int[]"), "int[]");
    }
}
