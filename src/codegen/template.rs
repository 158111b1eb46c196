//! Go source rendering for the generated inputs struct.
//!
//! The output is an anonymous struct literal bound to `inputs`:
//!
//! ```go
//! package main
//!
//! import "os"
//!
//! var inputs = struct {
//! sshRsaPrivateKey string
//! }{
//! sshRsaPrivateKey: os.Getenv("ssh_rsa_private_key"),
//! }
//! ```
//!
//! Lines are not indented and the file has no trailing newline; `gofmt`
//! is left to the editor.

use super::Field;

const HEADER: &str = "package main\n\nimport \"os\"\n\nvar inputs = struct {\n";

/// Render the struct declaration and initializer for `fields`, in order.
pub fn render(fields: &[Field]) -> String {
    let mut declarations = String::from(HEADER);
    let mut initializers = String::new();

    for field in fields {
        declarations.push_str(&format!("{} string\n", field.ident));
        initializers.push_str(&format!(
            "{}: os.Getenv(\"{}\"),\n",
            field.ident,
            go_escape(&field.key)
        ));
    }

    declarations.push_str("}{\n");
    declarations.push_str(&initializers);
    declarations.push('}');
    declarations
}

/// Escape a key for use inside a Go interpreted string literal.
fn go_escape(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(key: &str) -> Field {
        Field::from_key(key)
    }

    #[test]
    fn test_render_matches_expected_layout() {
        let rendered = render(&[
            field("ssh_rsa_private_key"),
            field("ssh_key_save_path"),
            field("is_remove_other_identities"),
            field("test_input"),
            field("verbose"),
        ]);

        let expected = "package main

import \"os\"

var inputs = struct {
sshRsaPrivateKey string
sshKeySavePath string
isRemoveOtherIdentities string
testInput string
verbose string
}{
sshRsaPrivateKey: os.Getenv(\"ssh_rsa_private_key\"),
sshKeySavePath: os.Getenv(\"ssh_key_save_path\"),
isRemoveOtherIdentities: os.Getenv(\"is_remove_other_identities\"),
testInput: os.Getenv(\"test_input\"),
verbose: os.Getenv(\"verbose\"),
}";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_without_inputs() {
        assert_eq!(
            render(&[]),
            "package main\n\nimport \"os\"\n\nvar inputs = struct {\n}{\n}"
        );
    }

    #[test]
    fn test_render_keeps_duplicate_fields() {
        let rendered = render(&[field("api_key"), field("api-key")]);

        assert_eq!(rendered.matches("apiKey string\n").count(), 2);
        assert!(rendered.contains("apiKey: os.Getenv(\"api_key\"),\n"));
        assert!(rendered.contains("apiKey: os.Getenv(\"api-key\"),\n"));
    }

    #[test]
    fn test_go_escape() {
        assert_eq!(go_escape("plain_key"), "plain_key");
        assert_eq!(go_escape(r#"we"ird\key"#), r#"we\"ird\\key"#);
    }
}
