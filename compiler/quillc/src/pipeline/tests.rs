use super::*;
use pretty_assertions::assert_eq;
use quill_diagnostic::ErrorCode;

#[test]
fn test_transpile_declaration_and_call() {
    let c = transpile("var x = 5;\nprintf \"hello\";", &TranspileOptions::default()).unwrap();
    assert_eq!(
        c,
        "#include \"entries.h\"\n\
         int main(int argc, char** argv) {\n\
         \tint x = 5;\n\
         \tprintf(\"hello\");\n\
         \treturn 0;\n\
         }\n"
    );
}

#[test]
fn test_transpile_custom_header() {
    let options = TranspileOptions {
        header: "support.h".into(),
    };
    let c = transpile("", &options).unwrap();
    assert!(c.starts_with("#include \"support.h\"\n"));
}

#[test]
fn test_transpile_empty_program() {
    let c = transpile("  \n\t", &TranspileOptions::default()).unwrap();
    assert_eq!(
        c,
        "#include \"entries.h\"\nint main(int argc, char** argv) {\n\treturn 0;\n}\n"
    );
}

#[test]
fn test_transpile_errors() {
    let err = transpile("var x = \"hello", &TranspileOptions::default()).unwrap_err();
    assert!(matches!(err, CompileError::Lex(_)));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E0001);

    let err = transpile("printf \"hello\"", &TranspileOptions::default()).unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E1002);
}

#[test]
fn test_read_missing_file() {
    let err = read_source(Path::new("definitely/not/here.qs")).unwrap_err();
    assert!(matches!(err, CompileError::Read { .. }));
    assert_eq!(err.to_diagnostic().code, ErrorCode::E5003);
}
