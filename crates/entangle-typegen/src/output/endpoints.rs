//! Endpoint constants rendering.

/// Render an ordered list of URL paths as a TypeScript constants class.
///
/// Each constant name is the path minus its leading separator character,
/// uppercased. Input order is kept; paths are neither validated nor
/// deduplicated, so a malformed path yields a malformed but non-fatal
/// line.
pub fn generate_endpoints<S: AsRef<str>>(paths: &[S]) -> String {
    let mut out = String::new();
    out.push_str("export class Endpoints {\n");
    for path in paths {
        let path = path.as_ref();
        let name = path.get(1..).unwrap_or("").to_uppercase();
        out.push_str(&format!("\tpublic static {} = '{}';\n", name, path));
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_constants_in_input_order() {
        let code = generate_endpoints(&["/users", "/posts"]);
        assert_eq!(
            code,
            "export class Endpoints {\n\tpublic static USERS = '/users';\n\tpublic static POSTS = '/posts';\n}"
        );
    }

    #[test]
    fn interior_separators_survive() {
        let code = generate_endpoints(&["/users/list"]);
        assert!(code.contains("\tpublic static USERS/LIST = '/users/list';\n"));
    }

    #[test]
    fn empty_path_renders_malformed_line() {
        let code = generate_endpoints(&[""]);
        assert!(code.contains("\tpublic static  = '';\n"));
    }

    #[test]
    fn duplicates_are_kept() {
        let code = generate_endpoints(&["/users", "/users"]);
        assert_eq!(code.matches("public static USERS").count(), 2);
    }

    #[test]
    fn no_paths_renders_empty_class() {
        let code = generate_endpoints::<&str>(&[]);
        assert_eq!(code, "export class Endpoints {\n}");
    }
}
