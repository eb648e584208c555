use super::*;

#[test]
fn builtin_table_parses_completely() {
    let reg = PaletteRegistry::builtin();
    assert_eq!(reg.len(), BUILTIN.len());
    for p in reg.all() {
        assert!(!p.colors.is_empty(), "{} has no colours", p.name);
    }
    let paddle = reg.by_name("dale_paddle").unwrap();
    assert_eq!(paddle.colors[0], Rgba8::opaque(0xff, 0x7a, 0x5a));
    assert_eq!(paddle.background.to_hex(), "#abe9e8");
}

#[test]
fn malformed_hex_rejects_the_palette() {
    let err = Palette::from_hex("broken", &["#ff7a5a", "ff7a5"], "#000", "#fff").unwrap_err();
    assert!(err.to_string().contains("broken"));
    assert!(Palette::from_hex("ok", &["#ff7a5a"], "#000", "#fff").is_ok());
}

#[test]
fn group_lookup_is_case_sensitive_substring() {
    let reg = PaletteRegistry::builtin();
    let dale: Vec<_> = reg.group_members("dale").iter().map(|p| p.name.clone()).collect();
    assert_eq!(dale, vec!["dale_paddle", "dale_night", "dale_cat"]);
    assert!(reg.group_members("DALE").is_empty());
    assert_eq!(reg.group_members("tundra3").len(), 1);
    assert!(reg.group_members("").is_empty());
}

#[test]
fn group_names_strip_suffixes() {
    let reg = PaletteRegistry::builtin();
    let groups = reg.groups();
    for g in ["cc", "dale", "ducci", "hilda", "kov", "rohlfs", "spatial", "tundra"] {
        assert!(groups.iter().any(|x| x == g), "missing group {g}");
    }
    assert_eq!(reg.by_name("cc239").unwrap().group(), "cc");
}
