use std::fs;
use std::path::PathBuf;

use shield_icons::rasterize;
use shield_icons::rendering::geometry::ShieldGeometry;

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

#[test]
fn golden_digests_match_fixtures() {
    for size in [16u32, 48, 128] {
        let icon = rasterize(size).expect("rasterize");
        let expected_path = golden_path(&format!("icon{}.sha256", size));

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, icon.digest()).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        if !expected_path.exists() {
            println!(
                "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
                expected_path
            );
            continue;
        }

        let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
        let exp_bytes = hex::decode(exp.trim()).expect("invalid hex in golden");
        assert_eq!(exp_bytes.len(), 32, "golden should be a sha256 digest");
        assert_eq!(icon.digest(), exp.trim(), "icon{} differs from golden", size);
    }
}

#[test]
fn geometry_matches_committed_goldens() {
    for size in [16u32, 48, 128] {
        let summary = ShieldGeometry::for_size(size).summary();
        let expected_path = golden_path(&format!("geometry{}.txt", size));

        if std::env::var("UPDATE_GOLDENS").is_ok() {
            fs::create_dir_all("tests/goldens/expected").ok();
            fs::write(&expected_path, format!("{}\n", summary)).expect("write golden");
            println!("Updated golden: {:?}", expected_path);
            continue;
        }

        let exp = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("missing golden {:?}: {}", expected_path, e));
        let exp_lines: Vec<&str> = exp.lines().map(str::trim_end).filter(|l| !l.is_empty()).collect();
        let got_lines: Vec<&str> = summary.lines().collect();
        assert_eq!(got_lines, exp_lines, "geometry{} differs from golden", size);
    }
}
