use crate::error::{ErrorKind, Result};
use crate::{Compound, List, Path, Tag, Value};

fn player() -> Compound {
    let mut inventory = List::new(Tag::Compound);
    for id in [1_i16, 2, 3] {
        let mut slot = Compound::new();
        slot.insert("id", id);
        inventory.push(slot).unwrap();
    }

    let mut player = Compound::new();
    player.insert("Health", 20_i16);
    player.insert("Inventory", inventory);

    let mut root = Compound::new();
    root.insert("LevelName", "World");
    root.insert("Player", player);
    root
}

#[test]
fn byte_range() {
    assert_eq!(Value::byte(127).unwrap(), Value::Byte(127));
    assert_eq!(Value::byte(-128).unwrap(), Value::Byte(-128));
    assert_eq!(Value::byte(200).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(Value::byte(-129).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn short_range() {
    assert_eq!(Value::short(-32768).unwrap(), Value::Short(i16::MIN));
    assert_eq!(Value::short(32767).unwrap(), Value::Short(i16::MAX));
    assert_eq!(Value::short(32768).unwrap_err().kind(), ErrorKind::OutOfRange);

    for v in [-32768, -1, 0, 1, 20, 32767] {
        assert!(Value::short(v).is_ok());
    }
}

#[test]
fn int_and_long_range() {
    assert!(Value::int(i32::MAX as i128).is_ok());
    assert_eq!(
        Value::int(i32::MAX as i128 + 1).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
    assert_eq!(Value::long(i64::MIN as i128).unwrap(), Value::Long(i64::MIN));
    assert_eq!(
        Value::long(i64::MIN as i128 - 1).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn tags() {
    assert_eq!(Value::Byte(0).tag(), Tag::Byte);
    assert_eq!(Value::ByteArray(vec![]).tag(), Tag::ByteArray);
    assert_eq!(Value::List(List::new(Tag::Int)).tag(), Tag::List);
    assert_eq!(Value::Compound(Compound::new()).tag(), Tag::Compound);
}

#[test]
fn accessors() {
    assert_eq!(Value::Short(-5).as_i64(), Some(-5));
    assert_eq!(Value::Float(1.5).as_i64(), None);
    assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
    assert_eq!(Value::from("hi").as_str(), Some("hi"));
    assert_eq!(Value::Int(1).as_str(), None);
    assert!(Value::from(Compound::new()).as_compound().is_some());
    assert!(Value::Int(1).as_list().is_none());
}

#[test]
fn list_rejects_other_types() {
    let mut list = List::new(Tag::Short);
    list.push(Value::Short(1)).unwrap();

    let err = list.push(Value::String("no".to_owned())).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(list.len(), 1);

    let err = list.set(0, Value::Int(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(list.get(0), Some(&Value::Short(1)));
}

#[test]
fn list_from_values_checks_types() {
    assert!(List::from_values(Tag::Byte, vec![Value::Byte(1), Value::Byte(2)]).is_ok());
    let err = List::from_values(Tag::Byte, vec![Value::Byte(1), Value::Short(2)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = List::from_values(Tag::End, vec![Value::Byte(1)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn untyped_list_adopts_first_push() {
    let mut list = List::default();
    assert_eq!(list.element_tag(), Tag::End);

    list.push("first").unwrap();
    assert_eq!(list.element_tag(), Tag::String);
    assert_eq!(
        list.push(1).unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn list_set_does_not_extend() {
    let mut list = List::from_values(Tag::Int, vec![Value::Int(1)]).unwrap();
    assert_eq!(list.set(0, 5).unwrap(), Value::Int(1));

    let err = list.set(1, 6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(list.len(), 1);
}

#[test]
fn list_remove_and_truncate() {
    let mut list = List::from_values(
        Tag::Byte,
        vec![Value::Byte(1), Value::Byte(2), Value::Byte(3)],
    )
    .unwrap();

    assert_eq!(list.remove(0).unwrap(), Value::Byte(1));
    assert_eq!(list.remove(5).unwrap_err().kind(), ErrorKind::IndexOutOfRange);

    list.truncate(0);
    assert!(list.is_empty());
    assert_eq!(list.element_tag(), Tag::Byte);
}

#[test]
fn list_equality_is_ordered() {
    let a = List::from_values(Tag::Byte, vec![Value::Byte(1), Value::Byte(2)]).unwrap();
    let b = List::from_values(Tag::Byte, vec![Value::Byte(2), Value::Byte(1)]).unwrap();
    assert_ne!(a, b);

    assert_ne!(List::new(Tag::Byte), List::new(Tag::Short));
}

#[test]
fn compound_equality_ignores_order() {
    let a: Compound = vec![("x", 1), ("y", 2)].into_iter().collect();
    let b: Compound = vec![("y", 2), ("x", 1)].into_iter().collect();
    assert_eq!(a, b);

    let c: Compound = vec![("x", 1), ("y", 3)].into_iter().collect();
    assert_ne!(a, c);
}

#[test]
fn equality_needs_same_variant() {
    assert_ne!(Value::Byte(1), Value::Short(1));
    assert_ne!(Value::Int(1), Value::Long(1));
}

#[test]
fn compound_reinsert_keeps_position() {
    let mut c: Compound = vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(c.insert("b", Value::String("two".to_owned())), Some(Value::Int(2)));

    let keys: Vec<_> = c.keys().cloned().collect();
    assert_eq!(keys, ["a", "b", "c"]);
    assert_eq!(c["b"], Value::String("two".to_owned()));
}

#[test]
fn compound_remove_keeps_order() {
    let mut c: Compound = vec![("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(c.remove("a"), Some(Value::Int(1)));
    assert_eq!(c.remove("a"), None);

    let keys: Vec<_> = c.keys().cloned().collect();
    assert_eq!(keys, ["b", "c"]);
}

#[test]
fn typed_getters() {
    let root = player();
    assert_eq!(root.get_str("LevelName").unwrap(), "World");
    assert_eq!(
        root.get_long("LevelName").unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
    assert_eq!(root.get_int("Missing").unwrap_err().kind(), ErrorKind::NotFound);

    let player = root.get_compound("Player").unwrap();
    assert_eq!(player.get_short("Health").unwrap(), 20);
    assert_eq!(
        player.get_int("Health").unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn get_path() -> Result<()> {
    let root = player();

    let health = root.get_path(&Path::parse("Player.Health")?)?;
    assert_eq!(health, &Value::Short(20));

    let id = root.get_path(&Path::parse("Player.Inventory[2].id")?)?;
    assert_eq!(id, &Value::Short(3));
    Ok(())
}

#[test]
fn get_path_not_found() -> Result<()> {
    let root = player();

    for path in [
        "Missing",
        "Player.Missing",
        "Player.Inventory[3]",
        "Player.Health.deeper",
        "Player[0]",
        "Player.Inventory.id",
        "LevelName[0]",
    ] {
        let err = root.get_path(&Path::parse(path)?).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "{}", path);
    }

    assert_eq!(
        root.get_path(&Path::new()).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    Ok(())
}

#[test]
fn value_get_empty_path_is_self() -> Result<()> {
    let v = Value::Int(3);
    assert_eq!(v.get_path(&Path::new())?, &v);
    Ok(())
}

#[test]
fn set_path() -> Result<()> {
    let mut root = player();

    root.set_path(&Path::parse("Player.Health")?, Value::Short(10))?;
    assert_eq!(root.get_path(&Path::parse("Player.Health")?)?, &Value::Short(10));

    root.set_path(&Path::parse("Player.Inventory[0].id")?, Value::Short(99))?;
    assert_eq!(
        root.get_path(&Path::parse("Player.Inventory[0].id")?)?,
        &Value::Short(99)
    );

    // New keys go on the end.
    root.set_path(&Path::parse("Player.Score")?, Value::Int(5))?;
    let keys: Vec<_> = root.get_compound("Player")?.keys().cloned().collect();
    assert_eq!(keys, ["Health", "Inventory", "Score"]);
    Ok(())
}

#[test]
fn set_path_list_rules() -> Result<()> {
    let mut root = player();

    let mut slot = Compound::new();
    slot.insert("id", 7_i16);
    root.set_path(&Path::parse("Player.Inventory[1]")?, Value::Compound(slot))?;

    let err = root
        .set_path(&Path::parse("Player.Inventory[3]")?, Value::Compound(Compound::new()))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfRange);

    let err = root
        .set_path(&Path::parse("Player.Inventory[0]")?, Value::Int(1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = root
        .set_path(&Path::parse("Player.Health[0]")?, Value::Int(1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = root
        .set_path(&Path::parse("Player.Missing.x")?, Value::Int(1))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = root.set_path(&Path::new(), Value::Int(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    Ok(())
}

#[test]
fn serializes_as_plain_json() {
    let mut root = player();
    root.insert("bytes", vec![1_i8, -1]);

    let json = serde_json::to_value(&root).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "LevelName": "World",
            "Player": {
                "Health": 20,
                "Inventory": [{"id": 1}, {"id": 2}, {"id": 3}],
            },
            "bytes": [1, -1],
        })
    );
}
