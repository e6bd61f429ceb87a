use shield_icons::{generate_all, manifest_icons, render, IconConfig};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "shield-icons-it-{}-{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn generates_all_default_icons() {
    let root = scratch_dir("defaults");
    let config = IconConfig {
        output_dir: root.join("icons"),
        ..Default::default()
    };

    let outcomes = generate_all(&config);
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(|o| o.is_ok()));

    for (size, name) in [(16u32, "icon16.png"), (48, "icon48.png"), (128, "icon128.png")] {
        let path = root.join("icons").join(name);
        assert!(path.exists(), "{:?} missing", path);
        let img = image::open(&path).expect("valid png");
        assert_eq!((img.width(), img.height()), (size, size));
        assert_eq!(img.color(), image::ColorType::Rgb8);
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn existing_directory_and_files_are_preserved() {
    let root = scratch_dir("existing");
    let icons = root.join("icons");
    fs::create_dir_all(&icons).unwrap();
    fs::write(icons.join("README.txt"), "keep me").unwrap();
    fs::write(icons.join("icon16.png"), b"stale").unwrap();

    let config = IconConfig {
        output_dir: icons.clone(),
        ..Default::default()
    };
    assert!(generate_all(&config).iter().all(|o| o.is_ok()));

    assert_eq!(fs::read_to_string(icons.join("README.txt")).unwrap(), "keep me");
    let rewritten = fs::read(icons.join("icon16.png")).unwrap();
    assert_eq!(&rewritten[0..8], b"\x89PNG\r\n\x1a\n");

    // second run over the same directory
    assert!(generate_all(&config).iter().all(|o| o.is_ok()));
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn rerender_is_byte_identical() {
    let root = scratch_dir("rerender");
    let path = root.join("icon48.png");
    render(48, &path).unwrap();
    let first = fs::read(&path).unwrap();
    render(48, &path).unwrap();
    let second = fs::read(&path).unwrap();
    assert_eq!(first, second);
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn unwritable_target_reports_io_error() {
    let root = scratch_dir("unwritable");
    fs::create_dir_all(&root).unwrap();
    // a regular file where the output directory should be
    let blocker = root.join("icons");
    fs::write(&blocker, "not a dir").unwrap();

    let err = render(16, blocker.join("icon16.png")).unwrap_err();
    assert!(matches!(err, shield_icons::Error::Io { .. }), "got {err:?}");
    let _ = fs::remove_dir_all(&root);
}

#[test]
fn manifest_fragment_uses_output_dir() {
    let config = IconConfig {
        output_dir: PathBuf::from("assets/icons"),
        ..Default::default()
    };
    let json: serde_json::Value =
        serde_json::from_str(&manifest_icons(&config).to_json_pretty()).unwrap();
    assert_eq!(json["icons"]["16"], "assets/icons/icon16.png");
    assert_eq!(json["icons"]["128"], "assets/icons/icon128.png");
}
