use super::*;

#[test]
fn fit_accepts_words_and_short_codes() {
    assert!(matches!(Fit::parse("FF"), Fit::First(_)));
    assert!(matches!(Fit::parse("first"), Fit::First(_)));
    assert!(matches!(Fit::parse("bf"), Fit::Best(_)));
    assert!(matches!(Fit::parse("Worst"), Fit::Worst(_)));
    assert!(matches!(Fit::parse("XF"), Fit::Other(_)));
}

#[test]
fn fit_displays_the_code_it_was_parsed_from() {
    assert_eq!(Fit::parse("FF").to_string(), "FF");
    assert_eq!(Fit::parse("XF").to_string(), "XF");
}

#[test]
fn disk_descriptor_parses_catalog_entry_without_path() {
    let v = serde_json::json!({
        "name": "disk1",
        "size": 5000000,
        "fit": "FF",
        "mounted_partitions": ["Part1"]
    });
    let d: DiskDescriptor = serde_json::from_value(v).expect("parse disk");
    assert_eq!(d.name, "disk1");
    assert_eq!(d.path, None);
    assert_eq!(d.size, 5_000_000);
    assert_eq!(d.mounted_partitions, vec!["Part1".to_string()]);

    let back = serde_json::to_value(&d).expect("encode disk");
    assert_eq!(back["fit"], "FF");
}

#[test]
fn partitions_label_falls_back_when_nothing_is_mounted() {
    let v = serde_json::json!({"name": "d", "size": 1, "fit": "BF", "mounted_partitions": []});
    let d: DiskDescriptor = serde_json::from_value(v).expect("parse disk");
    assert_eq!(d.partitions_label(), "Ninguna");
}

#[test]
fn fit_sent_as_a_byte_decodes_to_its_letter() {
    let f: Fit = serde_json::from_value(serde_json::json!(70)).expect("parse fit");
    assert!(matches!(f, Fit::First(_)));
    assert_eq!(f.to_string(), "F");

    let b: Fit = serde_json::from_value(serde_json::json!(66)).expect("parse fit");
    assert!(matches!(b, Fit::Best(_)));

    let odd: Fit = serde_json::from_value(serde_json::json!(300)).expect("parse fit");
    assert_eq!(odd, Fit::Other("300".to_string()));
}

#[test]
fn null_partitions_and_fractional_size_are_accepted() {
    let v = serde_json::json!({
        "name": "disk1",
        "path": null,
        "size": 5000000.0,
        "fit": 87,
        "mounted_partitions": null
    });
    let d: DiskDescriptor = serde_json::from_value(v).expect("parse disk");
    assert_eq!(d.size, 5_000_000);
    assert!(matches!(d.fit, Fit::Worst(_)));
    assert!(d.mounted_partitions.is_empty());
    assert_eq!(d.partitions_label(), "Ninguna");
}

#[test]
fn one_bad_entry_does_not_drop_the_catalog() {
    let body = serde_json::json!([
        {"name": "disk1", "size": 5000000, "fit": "FF", "mounted_partitions": null},
        {"name": "broken", "size": "big", "fit": "FF"},
        {"name": "disk2", "size": 1024.0, "fit": 66, "mounted_partitions": ["A1"]}
    ]);
    let disks = decode_disks(body).expect("decode");
    let names: Vec<&str> = disks.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["disk1", "disk2"]);
    assert_eq!(disks[1].mounted_partitions, vec!["A1".to_string()]);
}

#[test]
fn null_catalog_is_empty_and_non_list_is_an_error() {
    assert!(decode_disks(serde_json::Value::Null).expect("decode").is_empty());
    assert!(decode_disks(serde_json::json!({"disks": []})).is_err());
}
