use crate::error::ErrorKind;
use crate::{Path, Step};

#[test]
fn parse_keys_and_indices() {
    let path = Path::parse("Player.Inventory[3].id").unwrap();
    assert_eq!(
        path.steps(),
        &[
            Step::Key("Player".to_owned()),
            Step::Key("Inventory".to_owned()),
            Step::Index(3),
            Step::Key("id".to_owned()),
        ]
    );
}

#[test]
fn parse_empty() {
    assert!(Path::parse("").unwrap().is_empty());
}

#[test]
fn parse_leading_and_repeated_indices() {
    let path = Path::parse("[0][12]").unwrap();
    assert_eq!(path, Path::new().index(0).index(12));
}

#[test]
fn parse_quoted_keys() {
    let path = Path::parse(r#""a.b"."with \"quote\""[1]."""#).unwrap();
    assert_eq!(
        path,
        Path::new()
            .key("a.b")
            .key("with \"quote\"")
            .index(1)
            .key("")
    );
}

#[test]
fn parse_keeps_spaces_and_unicode() {
    let path = Path::parse("héllo wörld.x").unwrap();
    assert_eq!(path, Path::new().key("héllo wörld").key("x"));
}

#[test]
fn parse_errors() {
    for bad in [
        ".a",
        "a.",
        "a..b",
        "a.[0]",
        "a[",
        "a[x]",
        "a[-1]",
        "a[]",
        "a]",
        "\"open",
        "a\"b\"",
        r#""bad \n escape""#,
        "a[99999999999999999999999999]",
    ] {
        let err = Path::parse(bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPath, "{}", bad);
    }
}

#[test]
fn display_parses_back() {
    for text in [
        "Player.Inventory[3].id",
        "[0]",
        r#""a.b".c"#,
        r#""""#,
        r#""x\\y""#,
    ] {
        let path: Path = text.parse().unwrap();
        assert_eq!(path.to_string(), text);
        assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }
}

#[test]
fn collect_steps() {
    let path: Path = vec![Step::from("a"), Step::from(2_usize)].into_iter().collect();
    assert_eq!(path.to_string(), "a[2]");
    assert_eq!(path.len(), 2);

    let mut path = Path::new();
    path.push("b");
    path.push(0_usize);
    assert_eq!(path.to_string(), "b[0]");
}
